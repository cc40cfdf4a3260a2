use serde::{Deserialize, Serialize};

use crate::error::GeocodeError;

/// Shown when no address component carries a usable name.
pub const UNKNOWN_PLACE: &str = "不明な場所";

/// Component types in the order they are preferred as the displayed name.
const NAME_PRIORITY: [&str; 4] = [
    "administrative_area_level_1",
    "locality",
    "sublocality",
    "political",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

impl AddressComponent {
    pub fn new(long_name: &str, types: &[&str]) -> Self {
        Self {
            long_name: long_name.to_string(),
            short_name: long_name.to_string(),
            types: types.iter().map(|t| t.to_string()).collect(),
        }
    }

    pub fn has_type(&self, kind: &str) -> bool {
        self.types.iter().any(|t| t == kind)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
    #[serde(default)]
    pub formatted_address: Option<String>,
}

/// Body of a reverse-geocoding response from the geocoding web service.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl GeocodeResponse {
    /// Address components of the first (most specific) result.
    ///
    /// `ZERO_RESULTS` is not an error: it yields an empty list.
    pub fn into_components(self) -> Result<Vec<AddressComponent>, GeocodeError> {
        match self.status.as_str() {
            "OK" => Ok(self
                .results
                .into_iter()
                .next()
                .map(|r| r.address_components)
                .unwrap_or_default()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(GeocodeError::Status {
                status: self.status,
                message: self.error_message,
            }),
        }
    }
}

/// Parse a raw response body and extract the first result's components.
pub fn parse_response(body: &str) -> Result<Vec<AddressComponent>, GeocodeError> {
    let resp: GeocodeResponse =
        serde_json::from_str(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    resp.into_components()
}

/// Pick the display name: prefecture-level first, then city, then ward, then
/// any political area. Falls back to [`UNKNOWN_PLACE`].
pub fn select_place_name(components: &[AddressComponent]) -> String {
    NAME_PRIORITY
        .iter()
        .find_map(|kind| {
            components
                .iter()
                .find(|c| c.has_type(kind) && !c.long_name.is_empty())
        })
        .map(|c| c.long_name.clone())
        .unwrap_or_else(|| UNKNOWN_PLACE.to_string())
}
