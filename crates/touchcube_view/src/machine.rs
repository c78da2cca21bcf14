use cgmath::{Point2, Vector3};
use touchcube_core::{Cube, RingId};
use touchcube_prefs::{AnimationPreferences, InteractionPreferences, PanelPreferences, Preferences};

use crate::{
    Buttons, Camera, Direction, FrameInput, Ray, RotationResolver, TurnButton, panel_to_ndc,
    pick, stick_axis,
};

/// Angle of a quarter turn, in degrees.
const QUARTER_TURN_DEGREES: f32 = 90.0;

const TURN_BUTTONS: [(Buttons, TurnButton); 4] = [
    (Buttons::CIRCLE, TurnButton::Circle),
    (Buttons::SQUARE, TurnButton::Square),
    (Buttons::TRIANGLE, TurnButton::Triangle),
    (Buttons::CROSS, TurnButton::Cross),
];

const DIRECTION_BUTTONS: [(Buttons, Direction); 4] = [
    (Buttons::UP, Direction::Up),
    (Buttons::DOWN, Direction::Down),
    (Buttons::LEFT, Direction::Left),
    (Buttons::RIGHT, Direction::Right),
];

/// Snaps an angle in degrees to the nearest multiple of 90, rounding halfway
/// cases away from zero.
pub fn snap_angle(angle: f32) -> f32 {
    let remainder = angle.abs() % QUARTER_TURN_DEGREES;
    let magnitude = angle.abs() - remainder
        + match remainder < QUARTER_TURN_DEGREES / 2.0 {
            true => 0.0,
            false => QUARTER_TURN_DEGREES,
        };
    magnitude.copysign(angle)
}

/// Front-panel drag in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchDrag {
    /// Contact that started the drag.
    pub touch_id: u8,
    /// Resolver tracking the drag's locked axis.
    pub resolver: RotationResolver,
    /// Current angle of the dragged ring, in degrees.
    pub angle: f32,
}

/// Layer turn being animated toward a multiple of 90 degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AxisTurn {
    /// Ring being turned.
    pub ring: RingId,
    /// Current angle, in degrees.
    pub angle: f32,
    /// Angle at which the turn completes, in degrees.
    pub target: f32,
}

/// State of the [`InputStateMachine`].
#[derive(Debug, Default, Clone, PartialEq)]
pub enum InputState {
    /// Nothing is happening.
    #[default]
    WaitForInput,
    /// The camera is orbiting.
    RotateCube,
    /// A finger is on the cube.
    TouchCube(TouchDrag),
    /// A layer is turning.
    RotateAxis(AxisTurn),
}

/// Per-frame state machine turning raw input into camera orbits and layer
/// turns.
#[derive(Debug, Clone)]
pub struct InputStateMachine {
    state: InputState,
    camera: Camera,

    interaction: InteractionPreferences,
    animation: AnimationPreferences,
    panels: PanelPreferences,

    /// Buttons held last frame, for edge detection.
    prev_buttons: Buttons,
    /// Normalized position where the current back-panel drag started.
    back_touch_start: Option<Point2<f32>>,
}
impl InputStateMachine {
    /// Constructs a new state machine waiting for input. Invalid preferences
    /// are replaced by the defaults.
    pub fn new(prefs: &Preferences) -> Self {
        let prefs = prefs.validated();
        Self {
            state: InputState::WaitForInput,
            camera: Camera::new(prefs.camera.clone()),

            interaction: prefs.interaction.clone(),
            animation: prefs.animation.clone(),
            panels: prefs.panels.clone(),

            prev_buttons: Buttons::empty(),
            back_touch_start: None,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &InputState {
        &self.state
    }
    /// Returns the camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    /// Returns the camera mutably.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Returns whether a layer is visibly turning.
    pub fn is_rotating(&self) -> bool {
        self.active_rotation().is_some()
    }
    /// Returns the ring that is visibly turning along with its angle in
    /// degrees.
    pub fn active_rotation(&self) -> Option<(RingId, f32)> {
        match &self.state {
            InputState::TouchCube(drag) => drag.resolver.lock().map(|lock| (lock.ring, drag.angle)),
            InputState::RotateAxis(turn) => Some((turn.ring, turn.angle)),
            InputState::WaitForInput | InputState::RotateCube => None,
        }
    }

    /// Starts animating a turn of `ring` to `target` degrees.
    ///
    /// # Panics
    ///
    /// Panics if the machine is not waiting for input.
    pub fn start_turn(&mut self, ring: RingId, target: f32) {
        assert!(
            self.state == InputState::WaitForInput,
            "cannot start a turn in state {:?}",
            self.state,
        );
        self.state = Self::axis_turn(ring, 0.0, target);
    }

    /// Advances the machine by one frame.
    pub fn update(&mut self, cube: &mut Cube, input: &FrameInput) {
        let pressed = input.buttons.difference(self.prev_buttons);

        let old_state = std::mem::take(&mut self.state);
        let old_discriminant = std::mem::discriminant(&old_state);
        self.state = match old_state {
            InputState::WaitForInput => self.wait_for_input(cube, input, pressed),
            InputState::RotateCube => self.rotate_cube(input),
            InputState::TouchCube(drag) => self.touch_cube(cube, input, drag),
            InputState::RotateAxis(turn) => self.rotate_axis(cube, turn),
        };
        if std::mem::discriminant(&self.state) != old_discriminant {
            log::trace!("input state is now {:?}", self.state);
        }

        self.prev_buttons = input.buttons;
    }

    fn wait_for_input(
        &mut self,
        cube: &mut Cube,
        input: &FrameInput,
        pressed: Buttons,
    ) -> InputState {
        // A contact that missed keeps being picked until it slides onto the
        // cube.
        if let Some(touch) = input.front_touch {
            let ndc = panel_to_ndc(touch, self.panels.front_max);
            let hit = self
                .camera
                .inverse_view_projection_matrix()
                .and_then(|inv| pick(cube, ndc, &inv));
            match hit {
                Some(hit) => {
                    log::trace!("touch {} picked {}", touch.id, cube.facelet(hit.facelet).location);
                    cube.set_current_facelet(hit.facelet);
                    return InputState::TouchCube(TouchDrag {
                        touch_id: touch.id,
                        resolver: RotationResolver::new(hit, self.interaction.drag_lock_threshold),
                        angle: 0.0,
                    });
                }
                None => log::trace!("touch {} missed the cube", touch.id),
            }
        }

        for (flag, button) in TURN_BUTTONS {
            if pressed.contains(flag) {
                let turn = button.resolve(cube, cube.current_facelet());
                log::debug!("{button} turns ring {} by {:?}", turn.ring, turn.sign);
                return Self::axis_turn(turn.ring, 0.0, QUARTER_TURN_DEGREES * turn.sign.float());
            }
        }

        for (flag, direction) in DIRECTION_BUTTONS {
            if pressed.contains(flag) {
                let side = cube.facelet(cube.current_facelet()).location.side;
                let (slot, delta) = direction.resolve(side);
                cube.move_current(slot, delta);
                break;
            }
        }

        match self.orbit(input) {
            true => InputState::RotateCube,
            false => InputState::WaitForInput,
        }
    }

    fn rotate_cube(&mut self, input: &FrameInput) -> InputState {
        match self.orbit(input) {
            true => InputState::RotateCube,
            false => InputState::WaitForInput,
        }
    }

    /// Orbits the camera from the back panel or the sticks. Returns whether
    /// any orbit input is active.
    fn orbit(&mut self, input: &FrameInput) -> bool {
        let Some(rate) = self.orbit_rate(input) else {
            return false;
        };
        self.camera.rot_by(
            rate,
            self.interaction.orbit_step,
            self.interaction.orbit_speed,
        );
        true
    }

    fn orbit_rate(&mut self, input: &FrameInput) -> Option<Vector3<f32>> {
        if let Some(touch) = input.back_touch {
            let ndc = panel_to_ndc(touch, self.panels.back_max);
            let start = *self.back_touch_start.get_or_insert(ndc);
            let gain = self.interaction.back_touch_orbit_gain;
            let delta = ndc - start;
            return Some(Vector3::new(-delta.y * gain, -delta.x * gain, 0.0));
        }
        self.back_touch_start = None;

        let dz = |value: f32| self.interaction.apply_stick_deadzone(value);
        let rate = Vector3::new(
            dz(stick_axis(input.left_stick[1])),
            dz(-stick_axis(input.left_stick[0])),
            dz(stick_axis(input.right_stick[0])),
        );
        (rate != Vector3::new(0.0, 0.0, 0.0)).then_some(rate)
    }

    fn touch_cube(&mut self, cube: &Cube, input: &FrameInput, mut drag: TouchDrag) -> InputState {
        let touch = match input.front_touch {
            Some(touch) if touch.id == drag.touch_id => touch,
            _ => return Self::release(drag),
        };

        let ndc = panel_to_ndc(touch, self.panels.front_max);
        let local = self
            .camera
            .inverse_view_projection_matrix()
            .and_then(|inv| Ray::from_ndc(ndc, &inv))
            .and_then(|ray| ray.intersect_side_plane(cube.side(drag.resolver.side())));
        if let Some(local) = local
            && let Some((_lock, distance)) = drag.resolver.update(cube, local)
        {
            drag.angle = self.interaction.drag_degrees_per_unit * distance;
        }
        InputState::TouchCube(drag)
    }

    fn release(drag: TouchDrag) -> InputState {
        match drag.resolver.lock() {
            Some(lock) if drag.angle != 0.0 => {
                let target = snap_angle(drag.angle);
                log::debug!("drag released at {} degrees; snapping to {target}", drag.angle);
                Self::axis_turn(lock.ring, drag.angle, target)
            }
            _ => InputState::WaitForInput,
        }
    }

    fn rotate_axis(&mut self, cube: &mut Cube, mut turn: AxisTurn) -> InputState {
        let remaining = turn.target - turn.angle;
        let step = self.animation.degrees_per_frame;
        if remaining.abs() > step {
            turn.angle += step.copysign(remaining);
            return InputState::RotateAxis(turn);
        }

        let shift_count = (turn.target.abs() / QUARTER_TURN_DEGREES).round() as usize;
        let reverse = turn.target < 0.0;
        for _ in 0..shift_count {
            cube.shift_ring(turn.ring, reverse);
        }
        log::debug!("finished turning ring {} by {} degrees", turn.ring, turn.target);
        InputState::WaitForInput
    }

    fn axis_turn(ring: RingId, angle: f32, target: f32) -> InputState {
        InputState::RotateAxis(AxisTurn {
            ring,
            angle,
            target,
        })
    }
}
