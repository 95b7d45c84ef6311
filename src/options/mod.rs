//! Centralized timing and layout options with TOML preset support.
//!
//! Every tweakable constant of the carousel and gallery lives here. Options
//! serialize to/from TOML so presets can be stored in `assets/presets/`.

mod carousel;
mod gallery;
mod layout;

use std::path::Path;

pub use carousel::CarouselOptions;
pub use gallery::GalleryOptions;
pub use layout::{CardPreset, LayoutOptions};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[gallery]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Hero carousel timing.
    pub carousel: CarouselOptions,
    /// Filmstrip gallery motion.
    pub gallery: GalleryOptions,
    /// Breakpoints and card presets.
    pub layout: LayoutOptions,
}

fn below(value: f32, min: f32) -> bool {
    value.is_nan() || value < min
}

fn not_positive(value: f32) -> bool {
    value.is_nan() || value <= 0.0
}

fn invalid(field: &'static str, reason: impl Into<String>) -> VitrineError {
    VitrineError::InvalidOption {
        field,
        reason: reason.into(),
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text and validate them.
    pub fn from_toml(content: &str) -> Result<Self, VitrineError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), VitrineError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| VitrineError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(VitrineError::Io)?;
        }
        std::fs::write(path, content).map_err(VitrineError::Io)
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

    /// Reject values the widgets cannot run with.
    pub fn validate(&self) -> Result<(), VitrineError> {
        let c = &self.carousel;
        if below(c.hero_scale, 1.0) {
            return Err(invalid("carousel.hero_scale", "must be at least 1.0"));
        }
        if below(c.press_scale, 1.0) {
            return Err(invalid("carousel.press_scale", "must be at least 1.0"));
        }

        let g = &self.gallery;
        if not_positive(g.frame_delta) {
            return Err(invalid("gallery.frame_delta", "must be positive"));
        }
        if not_positive(g.drag_sensitivity) {
            return Err(invalid("gallery.drag_sensitivity", "must be positive"));
        }

        let l = &self.layout;
        for (field, preset) in [
            ("layout.phone", l.phone),
            ("layout.tablet", l.tablet),
            ("layout.desktop", l.desktop),
        ] {
            if not_positive(preset.width)
                || not_positive(preset.height)
                || below(preset.gap, 0.0)
            {
                return Err(invalid(
                    field,
                    "card width and height must be positive, gap non-negative",
                ));
            }
        }
        if not_positive(l.base_card_width) {
            return Err(invalid("layout.base_card_width", "must be positive"));
        }
        if below(l.tablet_max, l.phone_max) || l.tablet_max == l.phone_max {
            return Err(invalid(
                "layout.phone_max",
                "must be below layout.tablet_max",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
[carousel]
pause_ms = 2000
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.carousel.pause_ms, 2000);
        // Everything else should be default
        assert_eq!(opts.carousel.shift_ms, 1200);
        assert_eq!(opts.gallery.frame_delta, 0.5);
        assert_eq!(opts.layout.desktop.width, 200.0);
    }

    #[test]
    fn easing_parses_from_snake_case() {
        let opts = Options::from_toml(
            r#"
[carousel]
slide_easing = "ease_out"
"#,
        )
        .unwrap();
        assert_eq!(
            opts.carousel.slide_easing,
            crate::util::easing::EasingFunction::EaseOut
        );
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        let err = Options::from_toml("[carousel]\nhero_scale = 0.5\n")
            .unwrap_err();
        assert!(matches!(
            err,
            VitrineError::InvalidOption {
                field: "carousel.hero_scale",
                ..
            }
        ));

        let err = Options::from_toml("[gallery]\nframe_delta = 0.0\n")
            .unwrap_err();
        assert!(err.to_string().contains("gallery.frame_delta"));

        let err = Options::from_toml(
            "[layout]\nphone_max = 2000.0\ntablet_max = 1000.0\n",
        )
        .unwrap_err();
        assert!(err.to_string().contains("layout.phone_max"));
    }

    #[test]
    fn shipped_presets_load() {
        let default =
            Options::from_toml(include_str!("../../assets/presets/default.toml"))
                .unwrap();
        assert_eq!(default, Options::default());

        let calm =
            Options::from_toml(include_str!("../../assets/presets/calm.toml"))
                .unwrap();
        assert_eq!(calm.carousel.pause_ms, 2400);
        assert_eq!(calm.layout, LayoutOptions::default());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml("[carousel\n").unwrap_err();
        assert!(matches!(err, VitrineError::OptionsParse(_)));
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("vitrine-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.gallery.cooldown_ms = 1500;
        opts.save(&dir.join("slow.toml")).unwrap();
        Options::default().save(&dir.join("calm.toml")).unwrap();
        std::fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let loaded = Options::load(&dir.join("slow.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm", "slow"]);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("carousel"));
        assert!(props.contains_key("gallery"));
        assert!(props.contains_key("layout"));

        let layout = &props["layout"]["properties"];
        assert!(layout.get("base_hero_margin").is_some());
        assert!(layout.get("desktop").is_none());
    }
}
