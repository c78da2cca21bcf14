use cgmath::{Deg, Matrix4};
use serde::Serialize;
use touchcube_core::{
    Axis, Color, Cube, FACELETS_PER_SIDE, FaceletId, FaceletRef, SIDE_COUNT,
};

use crate::InputStateMachine;

/// Rotation of one layer that is partway through a turn.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct LayerRotation {
    /// World axis of the rotation.
    pub axis: Axis,
    /// Layer along the axis.
    pub layer: u8,
    /// Angle of the rotation, in degrees.
    pub angle_degrees: f32,
}
impl LayerRotation {
    /// Returns the transform to apply to the rotating facelets.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::from_axis_angle(self.axis.unit(), Deg(self.angle_degrees))
    }
}

/// Everything needed to draw one frame.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RenderFrame {
    /// Color of each facelet, indexed by side and then grid position.
    pub colors: [[Color; FACELETS_PER_SIDE]; SIDE_COUNT],
    /// Facelet to mark with highlight corners.
    pub highlighted: FaceletRef,
    /// Layer that is partway through a turn, if any.
    pub rotation: Option<LayerRotation>,
    /// Whether each facelet moves with [`Self::rotation`], indexed by
    /// [`FaceletId`].
    pub rotating: Vec<bool>,
    /// Transform from cube space to clip space.
    #[serde(skip)]
    pub view_projection: Matrix4<f32>,
}
impl RenderFrame {
    /// Captures the cube and machine state for drawing.
    pub fn new(cube: &Cube, machine: &InputStateMachine) -> Self {
        let mut rotating = vec![false; cube.facelets().len()];
        let rotation = machine.active_rotation().map(|(ring, angle_degrees)| {
            for f in cube.turning_facelets(ring) {
                rotating[f.index()] = true;
            }
            let ring = cube.ring(ring);
            LayerRotation {
                axis: ring.axis,
                layer: ring.layer,
                angle_degrees,
            }
        });

        Self {
            colors: cube.color_grid(),
            highlighted: cube.facelet(cube.current_facelet()).location,
            rotation,
            rotating,
            view_projection: machine.camera().view_projection_matrix(),
        }
    }

    /// Returns the color of the facelet at a location.
    pub fn color(&self, location: FaceletRef) -> Color {
        self.colors[location.side.index()][location.grid_index()]
    }
    /// Returns whether a facelet moves with the layer rotation.
    pub fn is_rotating(&self, facelet: FaceletId) -> bool {
        self.rotating[facelet.index()]
    }
    /// Returns the colors of the four corners of a facelet, counterclockwise
    /// from the bottom left. The highlighted facelet gets highlight colors on
    /// two opposite corners.
    pub fn vertex_colors(&self, location: FaceletRef) -> [Color; 4] {
        let color = self.color(location);
        match location == self.highlighted {
            true => [Color::HIGHLIGHT[0], color, Color::HIGHLIGHT[1], color],
            false => [color; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::InnerSpace;
    use pretty_assertions::assert_eq;
    use touchcube_core::SideId;
    use touchcube_prefs::DEFAULT_PREFS;

    use super::*;

    #[test]
    fn test_idle_frame() {
        let cube = Cube::new();
        let machine = InputStateMachine::new(&DEFAULT_PREFS);
        let frame = RenderFrame::new(&cube, &machine);

        assert_eq!(frame.rotation, None);
        assert!(frame.rotating.iter().all(|&r| !r));
        let center = FaceletRef::new(SideId::Front, 1, 1).expect("valid location");
        assert_eq!(frame.highlighted, center);
        assert_eq!(
            frame.vertex_colors(center),
            [Color::Cyan, Color::Blue, Color::Magenta, Color::Blue],
        );
        let corner = FaceletRef::new(SideId::Top, 0, 0).expect("valid location");
        assert_eq!(frame.vertex_colors(corner), [Color::Orange; 4]);
    }

    #[test]
    fn test_rotating_frame() {
        let cube = Cube::new();
        let mut machine = InputStateMachine::new(&DEFAULT_PREFS);
        let ring = cube.ring_at(Axis::Z, 2);
        machine.start_turn(ring, 90.0);
        let frame = RenderFrame::new(&cube, &machine);

        assert_eq!(
            frame.rotation,
            Some(LayerRotation {
                axis: Axis::Z,
                layer: 2,
                angle_degrees: 0.0,
            }),
        );
        // 12 ring facelets plus the 9 on the front side.
        assert_eq!(frame.rotating.iter().filter(|&&r| r).count(), 21);
        for &f in &cube.side(SideId::Front).facelets {
            assert!(frame.is_rotating(f));
        }
        for &f in &cube.side(SideId::Back).facelets {
            assert!(!frame.is_rotating(f));
        }
    }

    #[test]
    fn test_layer_rotation_matrix() {
        let rotation = LayerRotation {
            axis: Axis::Z,
            layer: 2,
            angle_degrees: 90.0,
        };
        let v = rotation.matrix() * cgmath::Vector4::unit_x();
        assert!((v - cgmath::Vector4::unit_y()).magnitude() < 1e-6, "{v:?}");
    }

    #[test]
    fn test_json_omits_matrix() {
        let cube = Cube::new();
        let machine = InputStateMachine::new(&DEFAULT_PREFS);
        let frame = RenderFrame::new(&cube, &machine);
        let json = serde_json::to_value(&frame).expect("error serializing frame");
        assert!(json.get("view_projection").is_none());
        assert_eq!(json["highlighted"]["side"], "front");
    }
}
