//! Viewer options with TOML preset support.
//!
//! Camera poses and projection, transition timing, overlay sizing and key
//! bindings are consolidated here. Options serialize to/from TOML so a
//! scene can ship presets alongside its assets.

mod camera;
mod keybindings;
mod overlay;
mod transition;

use std::path::Path;

pub use camera::{CameraOptions, OrbitOptions, PoseOptions};
pub use keybindings::KeybindingOptions;
pub use overlay::OverlayOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::TransitionOptions;

use crate::error::ViewerError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[overlay]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection, poses and orbit tuning.
    pub camera: CameraOptions,
    /// Mode transition timing.
    pub transition: TransitionOptions,
    /// Overlay sizing.
    pub overlay: OverlayOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, ViewerError> {
        toml::from_str(content)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ViewerError> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_toml(&content)?;
        log::info!("loaded options preset {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), ViewerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ViewerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::util::easing::EasingFunction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[overlay]
max_width = 640.0

[transition]
duration_ms = 250
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.overlay.max_width, 640.0);
        assert_eq!(opts.transition.duration_ms, 250);
        // Everything else should be default
        assert_eq!(opts.overlay.max_height, 600.0);
        assert_eq!(opts.camera.fovy, 20.0);
        assert_eq!(opts.camera.orbit.zoom_speed, 0.25);
    }

    #[test]
    fn easing_is_read_by_name() {
        let toml_str = r#"
[transition]
easing = "quadratic_out"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.transition.easing, EasingFunction::QuadraticOut);
        assert_eq!(opts.transition.duration_ms, 1000);
        assert_eq!(
            Options::default().transition.easing,
            EasingFunction::QuadraticInOut
        );
        let unknown = "[transition]\neasing = \"bounce\"\n";
        assert!(matches!(
            Options::from_toml(unknown),
            Err(ViewerError::OptionsParse(_))
        ));
    }

    #[test]
    fn explicit_rotation_pose() {
        let toml_str = r"
[camera.default_pose]
position = [1.0, 2.0, 3.0]
rotation = [0.1, 0.2, 0.0]
";
        let opts = Options::from_toml(toml_str).unwrap();
        let pose = opts.camera.default_pose.to_pose();
        assert_eq!(pose.position, glam::Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.rotation, glam::Vec3::new(0.1, 0.2, 0.0));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[overlay\nmax_width = ").unwrap_err();
        assert!(matches!(err, ViewerError::OptionsParse(_)));
    }

    #[test]
    fn missing_preset_is_an_io_error() {
        let err =
            Options::load(Path::new("/nonexistent/deskview/preset.toml"))
                .unwrap_err();
        assert!(matches!(err, ViewerError::Io(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::CloseOverlay)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyC"),
            Some(KeyAction::ToggleDebugCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut bindings = KeybindingOptions::default();
        bindings.bind(KeyAction::ToggleDebugCamera, "KeyD");
        assert_eq!(bindings.lookup("KeyC"), None);
        assert_eq!(bindings.lookup("KeyD"), Some(KeyAction::ToggleDebugCamera));
    }

    #[test]
    fn save_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("deskview-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.transition.duration_ms = 400;
        opts.save(&dir.join("fast.toml")).unwrap();
        assert_eq!(Options::list_presets(&dir), vec!["fast".to_owned()]);
        assert_eq!(Options::load(&dir.join("fast.toml")).unwrap(), opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("transition"));
        assert!(props.contains_key("overlay"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("fovy").is_some());
        assert!(camera.get("znear").is_none());
        let overlay = &props["overlay"]["properties"];
        assert!(overlay.get("margin").is_some());
        assert!(overlay.get("max_padding").is_none());
    }
}
