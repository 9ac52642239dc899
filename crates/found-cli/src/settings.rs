use found_core::Color;
use found_graph::{MinimapConfig, Size};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub minimap: MinimapConfig,
    /// Main view size assumed when none is given on the command line.
    pub view_width: f64,
    pub view_height: f64,
    /// Fill behind exported minimap images.
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_background() -> Color {
    // Mocha base, matching the dark theme.
    Color::rgb(0x1e, 0x1e, 0x2e)
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            minimap: MinimapConfig::default(),
            view_width: 1280.0,
            view_height: 800.0,
            background: default_background(),
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("found").join("settings.json"))
    }

    /// Loads settings from `path`, or from the user config directory.
    ///
    /// A missing or unreadable file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Self::default();
        };
        tracing::info!("Loading settings from {:?}", path);
        if !path.exists() {
            tracing::info!("Settings file not found, using defaults");
            return Self::default();
        }
        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str::<Self>(&content) {
                Ok(mut settings) => {
                    settings.minimap = settings.minimap.sanitized();
                    tracing::info!("Settings loaded successfully: {:?}", settings);
                    settings
                }
                Err(e) => {
                    tracing::error!("Failed to parse settings: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::error!("Failed to read settings file: {}", e);
                Self::default()
            }
        }
    }

    pub fn view_size(&self) -> Size {
        Size::new(self.view_width, self.view_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let settings = Settings::load(Some(&dir.path().join("nope.json")));
        assert_eq!(settings.view_size(), Size::new(1280.0, 800.0));
        assert_eq!(settings.minimap, MinimapConfig::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r##"{ "view_width": 640, "minimap": { "node_radius": 5.0 }, "background": "#000000" }"##,
        )
        .unwrap();
        let settings = Settings::load(Some(&path));
        assert_eq!(settings.view_width, 640.0);
        assert_eq!(settings.view_height, 800.0);
        assert_eq!(settings.minimap.node_radius, 5.0);
        assert_eq!(settings.minimap.width, 200.0);
        assert_eq!(settings.background, Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_invalid_minimap_section_is_reset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let content = r##"{ "view_width": 640, "minimap": { "padding": 100.0 } }"##;
        fs::write(&path, content).unwrap();
        let settings = Settings::load(Some(&path));
        assert_eq!(settings.minimap, MinimapConfig::default());
        assert_eq!(settings.view_width, 640.0);
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let settings = Settings::load(Some(&path));
        assert_eq!(settings.background, Color::rgb(0x1e, 0x1e, 0x2e));
    }
}
