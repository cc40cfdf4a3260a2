use dart_atlas_shared::config::GameConfig;
use dart_atlas_shared::error::{ConfigError, GeocodeError};
use dart_atlas_shared::geocode::{self, AddressComponent};
use dart_atlas_shared::models::GeoCoordinate;

const SECRETS_FILE: &str = "secrets.json";
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

/// Build the URL of a file served next to the app, from the page origin.
pub fn build_asset_url(origin: &str, file: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), file)
}

/// Build the reverse-geocoding request URL for `at`.
pub fn build_geocode_url(at: GeoCoordinate, api_key: &str, language: &str) -> Result<String, GeocodeError> {
    let latlng = format!("{},{}", at.lat, at.lng);
    reqwest::Url::parse_with_params(
        GEOCODE_URL,
        &[("latlng", latlng.as_str()), ("key", api_key), ("language", language)],
    )
    .map(|u| u.to_string())
    .map_err(|e| GeocodeError::Request(e.to_string()))
}

fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Fetch and parse `secrets.json` from the page origin.
pub async fn load_config() -> Result<GameConfig, ConfigError> {
    let origin = page_origin().ok_or_else(|| ConfigError::Unavailable("no page origin".into()))?;
    let url = build_asset_url(&origin, SECRETS_FILE);

    let resp = reqwest::Client::new()
        .get(&url)
        .send()
        .await
        .map_err(|e| ConfigError::Unavailable(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(ConfigError::Unavailable(format!("{url}: HTTP {}", resp.status())));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| ConfigError::Unavailable(e.to_string()))?;
    GameConfig::from_json(&body)
}

/// Reverse-geocode `at` through the geocoding web service.
pub async fn reverse_geocode(
    at: GeoCoordinate,
    api_key: &str,
    language: &str,
) -> Result<Vec<AddressComponent>, GeocodeError> {
    let url = build_geocode_url(at, api_key, language)?;

    let resp = reqwest::Client::new()
        .get(url)
        .send()
        .await
        .map_err(|e| GeocodeError::Request(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(GeocodeError::Request(format!("HTTP {}", resp.status())));
    }

    let body = resp
        .text()
        .await
        .map_err(|e| GeocodeError::Request(e.to_string()))?;
    geocode::parse_response(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_asset_url() {
        assert_eq!(
            build_asset_url("http://localhost:8080", "secrets.json"),
            "http://localhost:8080/secrets.json"
        );
    }

    #[test]
    fn test_build_asset_url_trailing_slash() {
        assert_eq!(
            build_asset_url("https://darts.example.com/", "secrets.json"),
            "https://darts.example.com/secrets.json"
        );
    }

    #[test]
    fn test_build_geocode_url() {
        let url = build_geocode_url(GeoCoordinate::new(35.5, 139.25), "AIzaTest", "ja").unwrap();
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/geocode/json?latlng=35.5%2C139.25&key=AIzaTest&language=ja"
        );
    }

    #[test]
    fn test_build_geocode_url_negative_coordinates() {
        let url = build_geocode_url(GeoCoordinate::new(-33.75, -70.5), "k", "en").unwrap();
        assert!(url.contains("latlng=-33.75%2C-70.5"));
    }
}
