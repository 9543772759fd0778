//! Centralized rendering options with TOML preset support.
//!
//! All tweakable settings (draw toggles, numeric style parameters, the
//! highlight palette) are consolidated here. Options serialize to/from
//! TOML; a snapshot is immutable for the duration of one render, so
//! concurrent renders can share a `RendererOptions` by reference.

mod palette;
mod style;
mod toggles;

use std::path::Path;

pub use palette::HighlightPalette;
pub use style::StyleParameters;
pub use toggles::DrawToggles;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Top-level options container. All sub-structs use `#[serde(default)]`
/// so partial TOML files (e.g. only overriding `[style]`) work
/// correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct RendererOptions {
    /// Boolean drawing policies.
    pub draw: DrawToggles,
    /// Numeric style parameters.
    pub style: StyleParameters,
    /// Highlight and stereo-label colors.
    pub palette: HighlightPalette,
}

impl RendererOptions {
    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, RenderError> {
        let content = std::fs::read_to_string(path).map_err(RenderError::Io)?;
        toml::from_str(&content)
            .map_err(|e| RenderError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), RenderError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| RenderError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(RenderError::Io)?;
        }
        std::fs::write(path, content).map_err(RenderError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = RendererOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: RendererOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[style]
dash_count = 9
";
        let opts: RendererOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.style.dash_count, 9);
        // Everything else should be default
        assert_eq!(opts.style.expected_bond_length, 1.0);
        assert!(opts.draw.implicit_hydrogen);
        assert!(!opts.draw.terminal_carbon);
    }

    #[test]
    fn default_depiction_policy() {
        let opts = RendererOptions::default();
        assert!(opts.draw.bonds);
        assert!(opts.draw.symbols);
        assert!(!opts.draw.carbon);
        assert!(opts.draw.stereo_bonds);
        assert!(!opts.draw.stereo_labels);
        assert!(opts.draw.dash_as_wedge);
    }
}
