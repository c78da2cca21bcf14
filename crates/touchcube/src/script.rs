//! Scripts of frame inputs for the `run` subcommand.

use serde::Deserialize;
use thiserror::Error;
use touchcube_view::{Buttons, FrameInput, TouchPoint};

/// Stick position that reads as centered.
const STICK_CENTER: [u8; 2] = [128, 128];

#[allow(missing_docs)]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScriptError {
    #[error("unknown button {0:?}")]
    UnknownButton(String),
}

/// Input held for one or more consecutive frames.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct ScriptStep {
    /// Number of frames to hold this input for.
    #[serde(default = "one")]
    pub repeat: usize,
    #[serde(default)]
    pub front_touch: Option<TouchPoint>,
    #[serde(default)]
    pub back_touch: Option<TouchPoint>,
    /// Names of held buttons, such as `circle` or `up`.
    #[serde(default)]
    pub buttons: Vec<String>,
    #[serde(default = "centered")]
    pub left_stick: [u8; 2],
    #[serde(default = "centered")]
    pub right_stick: [u8; 2],
}
impl ScriptStep {
    /// Returns the input for each frame of this step.
    pub fn frame_input(&self) -> Result<FrameInput, ScriptError> {
        let mut buttons = Buttons::empty();
        for name in &self.buttons {
            buttons |= Buttons::from_name(&name.to_uppercase())
                .ok_or_else(|| ScriptError::UnknownButton(name.clone()))?;
        }
        Ok(FrameInput {
            front_touch: self.front_touch,
            back_touch: self.back_touch,
            buttons,
            left_stick: self.left_stick,
            right_stick: self.right_stick,
        })
    }
}

fn one() -> usize {
    1
}
fn centered() -> [u8; 2] {
    STICK_CENTER
}

/// Parses a YAML list of script steps.
pub(crate) fn parse(text: &str) -> eyre::Result<Vec<ScriptStep>> {
    let steps: Vec<ScriptStep> = serde_norway::from_str(text)?;
    Ok(steps)
}
