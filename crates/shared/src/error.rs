use std::fmt;

/// Why the map credential could not be used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The config resource could not be fetched.
    Unavailable(String),
    Malformed(String),
    MissingKey,
    PlaceholderKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Unavailable(e) => write!(f, "failed to load secrets.json: {e}"),
            ConfigError::Malformed(e) => write!(f, "failed to parse secrets.json: {e}"),
            ConfigError::MissingKey => write!(f, "Maps_API_KEY is not set in secrets.json"),
            ConfigError::PlaceholderKey => {
                write!(f, "Maps_API_KEY still holds the placeholder value")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapLoadError {
    /// The widget script failed to load, usually because the key was rejected.
    Script(String),
    /// The script loaded but the map never produced bounds.
    NotInitialized,
}

impl fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapLoadError::Script(e) => write!(f, "map script failed to load: {e}"),
            MapLoadError::NotInitialized => write!(f, "map is not initialized"),
        }
    }
}

impl std::error::Error for MapLoadError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeocodeError {
    /// Transport-level failure.
    Request(String),
    /// The service answered with a non-OK status.
    Status {
        status: String,
        message: Option<String>,
    },
    Decode(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeocodeError::Request(e) => write!(f, "geocoding request failed: {e}"),
            GeocodeError::Status {
                status,
                message: Some(m),
            } => write!(f, "geocoding returned {status}: {m}"),
            GeocodeError::Status {
                status,
                message: None,
            } => write!(f, "geocoding returned {status}"),
            GeocodeError::Decode(e) => write!(f, "invalid geocoding response: {e}"),
        }
    }
}

impl std::error::Error for GeocodeError {}
