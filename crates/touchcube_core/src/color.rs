use serde::{Deserialize, Serialize};

/// Color of a facelet, drawn from a fixed 9-value palette.
#[allow(missing_docs)]
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Color {
    Red,
    Yellow,
    Green,
    Orange,
    White,
    Blue,
    Black,
    Cyan,
    Magenta,
}
impl Color {
    /// Colors drawn on two opposite corners of the highlighted facelet.
    pub const HIGHLIGHT: [Color; 2] = [Color::Cyan, Color::Magenta];

    /// Returns a single character used when printing a cube net.
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Orange => 'O',
            Color::White => 'W',
            Color::Blue => 'B',
            Color::Black => 'K',
            Color::Cyan => 'C',
            Color::Magenta => 'M',
        }
    }
}
