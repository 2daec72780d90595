//! Centralized animation/layout options with TOML preset support.
//!
//! All tweakable settings (animation rates, camera, layout, view offsets,
//! colors, keybindings) are consolidated here. Options serialize to/from
//! TOML for presets.

mod animation;
mod camera;
mod colors;
mod keybindings;
mod layout;
mod view;

use std::path::Path;

pub use animation::AnimationOptions;
pub use camera::CameraOptions;
pub use colors::ColorOptions;
pub use keybindings::KeybindingOptions;
pub use layout::LayoutOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use view::ViewOptions;

use crate::error::CabinetError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Animation timing and smoothing.
    pub animation: AnimationOptions,
    /// Camera projection and overview pose.
    pub camera: CameraOptions,
    /// Cabinet dimensions and contents.
    pub layout: LayoutOptions,
    /// Drawer and folder view offsets.
    pub view: ViewOptions,
    /// Color palette options.
    #[schemars(skip)]
    pub colors: ColorOptions,
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

    /// Parse options from a TOML string. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CabinetError::OptionsParse`] for malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, CabinetError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| CabinetError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`CabinetError::Io`] if the file cannot be read and
    /// [`CabinetError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, CabinetError> {
        let content =
            std::fs::read_to_string(path).map_err(CabinetError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`CabinetError::Io`] if the directory or file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), CabinetError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CabinetError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CabinetError::Io)?;
        }
        std::fs::write(path, content).map_err(CabinetError::Io)
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

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[animation]
open_rate = 0.05
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.animation.open_rate, 0.05);
        assert_eq!(opts.animation.transition_duration, 1.5);
        assert_eq!(opts.layout.drawer_labels.len(), 3);
        assert_eq!(opts.camera.overview_position, [0.0, 0.75, 2.0]);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            Options::from_toml("[animation\nopen_rate ="),
            Err(CabinetError::OptionsParse(_))
        ));
    }

    #[test]
    fn keybindings_survive_loading() {
        let toml_str = r#"
[keybindings.bindings]
reset_view = "Backspace"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("Backspace"),
            Some(KeyAction::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), None);
    }

    #[test]
    fn default_keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("Escape"),
            Some(KeyAction::ResetView)
        );
        assert_eq!(opts.keybindings.lookup("Tab"), Some(KeyAction::NextDrawer));
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn label_colors_are_deterministic() {
        let colors = ColorOptions::default();
        assert_eq!(colors.label_color(0), colors.label_color(4));
        assert_ne!(colors.label_color(0), colors.label_color(1));
        let empty = ColorOptions {
            label_palette: Vec::new(),
            ..ColorOptions::default()
        };
        assert_eq!(empty.label_color(3), empty.label_fallback);
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("cabinet-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.animation.close_rate = 0.04;
        opts.save(&dir.join("slow_close.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["slow_close".to_owned()]);
        let loaded = Options::load(&dir.join("slow_close.toml")).unwrap();
        assert_eq!(loaded, opts);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("animation"));
        assert!(props.contains_key("camera"));
        assert!(props.contains_key("layout"));
        assert!(!props.contains_key("colors"));
        assert!(!props.contains_key("keybindings"));

        let animation = &props["animation"]["properties"];
        assert!(animation.get("open_rate").is_some());
        assert!(animation.get("snap_epsilon").is_none());
    }
}
