//! Input handling for touchcube: picking facelets under a touch, resolving
//! drags and buttons into layer turns, and animating those turns.

#[macro_use]
extern crate strum;

mod camera;
mod input;
mod machine;
mod picker;
mod render;
mod resolver;
mod simulation;

pub use camera::Camera;
pub use input::{Buttons, FrameInput, TouchPoint, panel_to_ndc, stick_axis};
pub use machine::{AxisTurn, InputState, InputStateMachine, TouchDrag, snap_angle};
pub use picker::{PickHit, Ray, pick, pick_ray};
pub use render::{LayerRotation, RenderFrame};
pub use resolver::{
    Direction, DragAxis, LockedDrag, QuarterTurn, RotationResolver, SIDE_DRAG_TABLE,
    SideDragConfig, TurnButton,
};
pub use simulation::CubeSimulation;
