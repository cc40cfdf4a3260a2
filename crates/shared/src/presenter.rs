//! Turns a finished throw into the text shown in the result overlay.

use crate::geocode;
use crate::models::{GeoCoordinate, ThrowResult};
use crate::provider::MapProvider;

pub const MISS_MESSAGE: &str = "ダーツが地図外に飛んでいきました！";
pub const NOT_FOUND_MESSAGE: &str = "この場所の地名は見つかりませんでした。";
pub const GEOCODE_ERROR_MESSAGE: &str = "地名取得に失敗しました。エラーが発生しました。";

pub fn hit_message(place_name: &str) -> String {
    format!("的中！ {place_name}へようこそ！")
}

/// A marker the session should place once the outcome is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRequest {
    pub at: GeoCoordinate,
    pub title: String,
}

/// Everything the overlay and the map need to show for one throw.
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowOutcome {
    pub result: ThrowResult,
    pub message: String,
    pub marker: Option<MarkerRequest>,
}

impl ThrowOutcome {
    fn message_only(result: ThrowResult, message: &str) -> Self {
        Self {
            result,
            message: message.to_string(),
            marker: None,
        }
    }
}

/// Resolve a throw against the provider. Misses never reach the geocoder;
/// geocoding failures become a fixed message rather than an error, so every
/// throw produces exactly one outcome.
pub async fn resolve_throw<P: MapProvider>(provider: &P, result: ThrowResult) -> ThrowOutcome {
    let Some(at) = result.coordinate() else {
        return ThrowOutcome::message_only(result, MISS_MESSAGE);
    };

    match provider.reverse_geocode(at).await {
        Ok(components) if components.is_empty() => {
            tracing::info!(at = %at, "no place found at landing point");
            ThrowOutcome::message_only(result, NOT_FOUND_MESSAGE)
        }
        Ok(components) => {
            let name = geocode::select_place_name(&components);
            tracing::info!(at = %at, place = %name, "dart landed");
            ThrowOutcome {
                message: hit_message(&name),
                marker: Some(MarkerRequest {
                    at,
                    title: name.clone(),
                }),
                result: result.with_place_name(name),
            }
        }
        Err(e) => {
            tracing::warn!(at = %at, error = %e, "reverse geocoding failed");
            ThrowOutcome::message_only(result, GEOCODE_ERROR_MESSAGE)
        }
    }
}
