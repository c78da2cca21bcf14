//! User preferences.
//!
//! Preferences are layered: the embedded `default.yaml` is loaded first, and
//! an optional user file overrides any subset of it.

#![allow(missing_docs)] // too many things to document

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::{Context, ensure};
use serde::{Deserialize, Serialize};

mod animation;
mod interaction;
mod view;

pub use animation::*;
pub use interaction::*;
pub use view::*;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    pub interaction: InteractionPreferences,
    pub animation: AnimationPreferences,
    pub camera: CameraPreferences,
    pub panels: PanelPreferences,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}
impl Preferences {
    /// Loads preferences, overriding the defaults with `user_file` if it is
    /// given. If loading fails, then the default preferences are returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        let mut config = config::Config::builder();

        // Load default preferences.
        let default_config_source = config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT);
        config = config.add_source(default_config_source);

        // Load user preferences.
        if let Some(path) = user_file {
            config = config.add_source(config::File::from(path).format(PREFS_FILE_FORMAT));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .map_err(eyre::Report::from)
            .and_then(|prefs| prefs.validate().map(|()| prefs))
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                DEFAULT_PREFS.clone()
            })
    }

    /// Returns an error if any value would stall an animation or make the
    /// camera projection degenerate.
    pub fn validate(&self) -> eyre::Result<()> {
        let interaction = &self.interaction;
        ensure_nonnegative("interaction.drag_lock_threshold", interaction.drag_lock_threshold)?;
        ensure_positive("interaction.drag_degrees_per_unit", interaction.drag_degrees_per_unit)?;
        ensure_nonnegative("interaction.stick_deadzone", interaction.stick_deadzone)?;

        ensure_positive("animation.degrees_per_frame", self.animation.degrees_per_frame)?;

        let camera = &self.camera;
        ensure_positive("camera.fov_degrees", camera.fov_degrees)?;
        ensure!(
            camera.fov_degrees < 180.0,
            "camera.fov_degrees must be less than 180, got {}",
            camera.fov_degrees,
        );
        ensure_positive("camera.near", camera.near)?;
        ensure_positive("camera.far", camera.far)?;
        ensure!(
            camera.near < camera.far,
            "camera.near ({}) must be less than camera.far ({})",
            camera.near,
            camera.far,
        );
        ensure_positive("camera.eye_distance", camera.eye_distance)?;
        for (name, [x, y]) in [
            ("camera.viewport", camera.viewport),
            ("panels.front_max", self.panels.front_max),
            ("panels.back_max", self.panels.back_max),
        ] {
            ensure_positive(name, x)?;
            ensure_positive(name, y)?;
        }
        Ok(())
    }

    /// Returns a copy of the preferences, or the defaults if they are
    /// invalid.
    pub fn validated(&self) -> Self {
        match self.validate() {
            Ok(()) => self.clone(),
            Err(e) => {
                log::warn!("Invalid preferences: {e}");
                DEFAULT_PREFS.clone()
            }
        }
    }

    /// Serializes the preferences to YAML.
    pub fn to_yaml(&self) -> eyre::Result<String> {
        serde_norway::to_string(self).wrap_err("error serializing preferences")
    }

    /// Saves the preferences to a YAML file, creating parent directories as
    /// needed.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        Ok(())
    }
}

fn ensure_positive(name: &str, value: f32) -> eyre::Result<()> {
    ensure!(value.is_finite() && value > 0.0, "{name} must be positive, got {value}");
    Ok(())
}
fn ensure_nonnegative(name: &str, value: f32) -> eyre::Result<()> {
    ensure!(value.is_finite() && value >= 0.0, "{name} must not be negative, got {value}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs() {
        let prefs = Preferences::load(None);
        assert_eq!(prefs, *DEFAULT_PREFS);
        assert_eq!(prefs.interaction.drag_lock_threshold, 0.08);
        assert_eq!(prefs.interaction.drag_degrees_per_unit, 100.0);
        assert_eq!(prefs.animation.degrees_per_frame, 5.0);
        assert_eq!(prefs.camera.viewport, [960.0, 544.0]);
        assert_eq!(prefs.panels.back_max, [1919.0, 889.0]);
    }

    #[test]
    fn test_user_prefs_override_defaults() {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("error creating temp file");
        writeln!(file, "animation:\n  degrees_per_frame: 15.0").expect("error writing temp file");

        let prefs = Preferences::load(Some(file.path()));
        assert_eq!(prefs.animation.degrees_per_frame, 15.0);
        assert_eq!(prefs.interaction, DEFAULT_PREFS.interaction);
        assert_eq!(prefs.camera, DEFAULT_PREFS.camera);
    }

    fn load_user_yaml(yaml: &str) -> Preferences {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("error creating temp file");
        writeln!(file, "{yaml}").expect("error writing temp file");
        Preferences::load(Some(file.path()))
    }

    #[test]
    fn test_default_is_default_prefs() {
        assert_eq!(Preferences::default(), *DEFAULT_PREFS);
        DEFAULT_PREFS.validate().expect("default preferences should be valid");
    }

    #[test]
    fn test_invalid_user_prefs_fall_back_to_defaults() {
        for yaml in [
            "animation:\n  degrees_per_frame: 0",
            "animation:\n  degrees_per_frame: -5",
            "camera:\n  fov_degrees: 0",
            "camera:\n  viewport: [0, 0]",
            "camera:\n  near: 20.0",
            "panels:\n  back_max: [1919, 0]",
            "interaction:\n  drag_degrees_per_unit: 0",
        ] {
            assert_eq!(load_user_yaml(yaml), *DEFAULT_PREFS, "{yaml}");
        }
    }

    #[test]
    fn test_validated() {
        let mut prefs = DEFAULT_PREFS.clone();
        prefs.animation.degrees_per_frame = 10.0;
        assert_eq!(prefs.validated(), prefs);

        prefs.animation.degrees_per_frame = 0.0;
        assert!(prefs.validate().is_err());
        assert_eq!(prefs.validated(), *DEFAULT_PREFS);
    }

    #[test]
    fn test_missing_user_prefs_fall_back_to_defaults() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let prefs = Preferences::load(Some(&dir.path().join("missing.yaml")));
        assert_eq!(prefs, *DEFAULT_PREFS);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().expect("error creating temp dir");
        let path = dir.path().join("nested").join("prefs.yaml");
        let mut prefs = DEFAULT_PREFS.clone();
        prefs.interaction.stick_deadzone = 0.35;
        prefs.save(&path).expect("error saving preferences");
        assert_eq!(Preferences::load(Some(&path)), prefs);
    }
}
