//! Unfolded net of the cube, as seen from outside.

use cgmath::Vector3;
use itertools::Itertools;
use touchcube_core::{Cube, FACELET_WIDTH, GRID_SIZE, HALF_EXTENT, Side, SideId};

/// Placement of each side in the net: block row, block column, and the world
/// directions that point right and up on screen.
const NET_LAYOUT: [(SideId, usize, usize, [f32; 3], [f32; 3]); 6] = [
    (SideId::Top, 0, 1, [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    (SideId::Left, 1, 0, [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    (SideId::Front, 1, 1, [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    (SideId::Right, 1, 2, [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    (SideId::Back, 1, 3, [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    (SideId::Down, 2, 1, [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
];

/// Renders the cube as a cross-shaped net of color symbols. The selected
/// facelet is printed in lowercase.
pub(crate) fn format_net(cube: &Cube) -> String {
    let mut grid = [[None; 4 * GRID_SIZE]; 3 * GRID_SIZE];
    for (side_id, block_row, block_col, right, up) in NET_LAYOUT {
        let side = cube.side(side_id);
        let (right, up) = (Vector3::from(right), Vector3::from(up));
        for (i, j) in itertools::iproduct!(0..GRID_SIZE, 0..GRID_SIZE) {
            let point = side.normal * HALF_EXTENT
                + right * (j as f32 - 1.0) * FACELET_WIDTH
                + up * (1.0 - i as f32) * FACELET_WIDTH;
            let Some((row, col)) = Side::cell_at(side.to_local(point)) else {
                continue;
            };
            let facelet = side.facelet_at(row, col);
            let symbol = cube.color(facelet).symbol();
            grid[block_row * GRID_SIZE + i][block_col * GRID_SIZE + j] =
                Some(match cube.is_highlighted(facelet) {
                    true => symbol.to_ascii_lowercase(),
                    false => symbol,
                });
        }
    }

    grid.iter()
        .map(|line| {
            line.iter()
                .map(|cell| cell.unwrap_or(' '))
                .join(" ")
                .trim_end()
                .to_string()
        })
        .join("\n")
}
