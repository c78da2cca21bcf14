use touchcube_core::Cube;
use touchcube_prefs::Preferences;

use crate::{FrameInput, InputStateMachine, RenderFrame};

/// Cube together with the state machine that drives it.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    cube: Cube,
    machine: InputStateMachine,
}
impl CubeSimulation {
    /// Constructs a simulation of a solved cube.
    pub fn new(prefs: &Preferences) -> Self {
        Self::from_cube(Cube::new(), prefs)
    }
    /// Constructs a simulation of an existing cube.
    pub fn from_cube(cube: Cube, prefs: &Preferences) -> Self {
        Self {
            cube,
            machine: InputStateMachine::new(prefs),
        }
    }

    /// Returns the cube.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns the state machine.
    pub fn machine(&self) -> &InputStateMachine {
        &self.machine
    }
    /// Returns the state machine mutably.
    pub fn machine_mut(&mut self) -> &mut InputStateMachine {
        &mut self.machine
    }

    /// Advances the simulation by one frame and returns what to draw.
    pub fn step(&mut self, input: &FrameInput) -> RenderFrame {
        self.machine.update(&mut self.cube, input);
        self.render()
    }
    /// Returns what to draw for the current state.
    pub fn render(&self) -> RenderFrame {
        RenderFrame::new(&self.cube, &self.machine)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use touchcube_core::{Axis, FaceletRef, SideId};
    use touchcube_prefs::DEFAULT_PREFS;

    use super::*;
    use crate::{Buttons, InputState};

    #[test]
    fn test_triangle_then_circle_restores_cube() {
        let mut sim = CubeSimulation::new(&DEFAULT_PREFS);
        let press = |buttons| FrameInput {
            buttons,
            ..Default::default()
        };

        let frame = sim.step(&press(Buttons::TRIANGLE));
        let rotation = frame.rotation.expect("turn should start");
        assert_eq!(rotation.axis, Axis::X);
        assert_eq!(rotation.layer, 1);

        let mut frames = 1;
        while *sim.machine().state() != InputState::WaitForInput {
            sim.step(&FrameInput::default());
            frames += 1;
        }
        assert_eq!(frames, 19);
        assert!(!sim.cube().is_solved());
        // The selected facelet rode the ring onto the top side.
        assert_eq!(
            sim.render().highlighted,
            FaceletRef::new(SideId::Top, 1, 1).expect("valid location"),
        );

        // On the top side, the same ring turns the other way under circle.
        sim.step(&press(Buttons::CIRCLE));
        while *sim.machine().state() != InputState::WaitForInput {
            sim.step(&FrameInput::default());
        }
        assert_eq!(*sim.cube(), Cube::new());
    }
}
