use serde::Deserialize;

use crate::error::ConfigError;
use crate::models::GeoCoordinate;

/// Value shipped in the example secrets file; treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_ACTUAL_Maps_API_KEY";

/// Initial map center (central Tokyo).
pub const DEFAULT_CENTER: GeoCoordinate = GeoCoordinate::new(35.6895, 139.6917);

/// Zoom at which the whole of Japan fits in the field.
pub const DEFAULT_ZOOM: u8 = 5;

pub const DEFAULT_LANGUAGE: &str = "ja";

/// Contents of `secrets.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct GameConfig {
    #[serde(rename = "Maps_API_KEY", default)]
    pub api_key: Option<String>,
    #[serde(default = "default_center")]
    pub center: GeoCoordinate,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_center() -> GeoCoordinate {
    DEFAULT_CENTER
}

fn default_zoom() -> u8 {
    DEFAULT_ZOOM
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl GameConfig {
    pub fn from_json(body: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(body).map_err(|e| ConfigError::Malformed(e.to_string()))
    }

    /// The usable API key, rejecting blanks and the placeholder.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        match self.api_key.as_deref().map(str::trim) {
            None | Some("") => Err(ConfigError::MissingKey),
            Some(PLACEHOLDER_API_KEY) => Err(ConfigError::PlaceholderKey),
            Some(key) => Ok(key),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            language: default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_file_uses_defaults() {
        let cfg = GameConfig::from_json(r#"{"Maps_API_KEY": "AIzaTest"}"#).unwrap();
        assert_eq!(cfg.api_key().unwrap(), "AIzaTest");
        assert_eq!(cfg.center, DEFAULT_CENTER);
        assert_eq!(cfg.zoom, DEFAULT_ZOOM);
        assert_eq!(cfg.language, "ja");
    }

    #[test]
    fn test_overrides() {
        let cfg = GameConfig::from_json(
            r#"{"Maps_API_KEY": "k", "center": {"lat": 43.06, "lng": 141.35}, "zoom": 7, "language": "en"}"#,
        )
        .unwrap();
        assert_eq!(cfg.center, GeoCoordinate::new(43.06, 141.35));
        assert_eq!(cfg.zoom, 7);
        assert_eq!(cfg.language, "en");
    }

    #[test]
    fn test_missing_key() {
        let cfg = GameConfig::from_json("{}").unwrap();
        assert_eq!(cfg.api_key(), Err(ConfigError::MissingKey));
    }

    #[test]
    fn test_blank_key() {
        let cfg = GameConfig::from_json(r#"{"Maps_API_KEY": "  "}"#).unwrap();
        assert_eq!(cfg.api_key(), Err(ConfigError::MissingKey));
    }

    #[test]
    fn test_placeholder_key() {
        let cfg = GameConfig::from_json(r#"{"Maps_API_KEY": "YOUR_ACTUAL_Maps_API_KEY"}"#).unwrap();
        assert_eq!(cfg.api_key(), Err(ConfigError::PlaceholderKey));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Malformed(_))
        ));
    }
}
