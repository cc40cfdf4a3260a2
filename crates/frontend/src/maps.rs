//! Bindings to the Google Maps JavaScript API and awaitable loading helpers.

use dart_atlas_shared::config::GameConfig;
use dart_atlas_shared::error::MapLoadError;
use dart_atlas_shared::models::GeoCoordinate;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

const MAPS_SCRIPT_URL: &str = "https://maps.googleapis.com/maps/api/js";

#[wasm_bindgen(js_namespace = ["google", "maps"])]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    #[derive(Debug, Clone)]
    pub type GoogleMap;

    #[wasm_bindgen(constructor, js_class = "Map")]
    pub fn new(element: &web_sys::HtmlElement, options: &JsValue) -> GoogleMap;

    #[wasm_bindgen(method, js_name = getBounds)]
    pub fn get_bounds(this: &GoogleMap) -> Option<LatLngBounds>;

    #[wasm_bindgen(method, js_name = getProjection)]
    pub fn get_projection(this: &GoogleMap) -> Option<MapProjection>;

    #[derive(Debug, Clone)]
    pub type LatLng;

    #[wasm_bindgen(constructor)]
    pub fn new(lat: f64, lng: f64) -> LatLng;

    #[wasm_bindgen(method)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method)]
    pub fn lng(this: &LatLng) -> f64;

    #[derive(Debug, Clone)]
    pub type LatLngBounds;

    #[wasm_bindgen(method, js_name = getNorthEast)]
    pub fn get_north_east(this: &LatLngBounds) -> LatLng;

    #[wasm_bindgen(method, js_name = getSouthWest)]
    pub fn get_south_west(this: &LatLngBounds) -> LatLng;

    #[derive(Debug, Clone)]
    pub type Point;

    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64) -> Point;

    #[wasm_bindgen(method, getter)]
    pub fn x(this: &Point) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn y(this: &Point) -> f64;

    #[wasm_bindgen(js_name = Projection)]
    #[derive(Debug, Clone)]
    pub type MapProjection;

    #[wasm_bindgen(method, js_name = fromLatLngToPoint)]
    pub fn from_lat_lng_to_point(this: &MapProjection, at: &LatLng) -> Point;

    #[wasm_bindgen(method, js_name = fromPointToLatLng)]
    pub fn from_point_to_lat_lng(this: &MapProjection, point: &Point) -> LatLng;

    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(constructor)]
    pub fn new(options: &JsValue) -> Marker;

    /// Pass `JsValue::NULL` to take the marker off the map.
    #[wasm_bindgen(method, js_name = setMap)]
    pub fn set_map(this: &Marker, map: &JsValue);
}

#[wasm_bindgen(js_namespace = ["google", "maps", "event"])]
extern "C" {
    #[wasm_bindgen(js_name = addListenerOnce)]
    fn add_listener_once(instance: &JsValue, event_name: &str, handler: &js_sys::Function) -> JsValue;
}

impl From<&LatLng> for GeoCoordinate {
    fn from(at: &LatLng) -> Self {
        GeoCoordinate::new(at.lat(), at.lng())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: GeoCoordinate,
    pub zoom: u8,
    #[serde(rename = "disableDefaultUI")]
    pub disable_default_ui: bool,
    pub gesture_handling: &'static str,
}

impl MapOptions {
    /// A fixed view: no controls and no panning or zooming, so the world under
    /// the dart never moves.
    pub fn fixed(config: &GameConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
            disable_default_ui: true,
            gesture_handling: "none",
        }
    }
}

/// Script URL for the Maps JavaScript API with the given key.
pub fn script_url(api_key: &str) -> Result<String, MapLoadError> {
    reqwest::Url::parse_with_params(
        MAPS_SCRIPT_URL,
        &[("key", api_key), ("libraries", "geometry")],
    )
    .map(|u| u.to_string())
    .map_err(|e| MapLoadError::Script(e.to_string()))
}

fn js_error(e: JsValue) -> MapLoadError {
    MapLoadError::Script(format!("{e:?}"))
}

fn maps_api_present() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("google"))
        .map(|g| !g.is_undefined())
        .unwrap_or(false)
}

/// Inject the Maps script and wait for it to load.
///
/// A rejected key surfaces as a script error, which is the only signal the
/// browser gives us.
pub async fn load_script(api_key: &str) -> Result<(), MapLoadError> {
    if maps_api_present() {
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| MapLoadError::Script("no document".into()))?;
    let script: web_sys::HtmlScriptElement = document
        .create_element("script")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| MapLoadError::Script("not a script element".into()))?;
    script.set_src(&script_url(api_key)?);
    script.set_async(true);
    script.set_defer(true);

    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        script.set_onload(Some(&resolve));
        script.set_onerror(Some(&reject));
    });

    let head = document
        .head()
        .ok_or_else(|| MapLoadError::Script("no <head> element".into()))?;
    head.append_child(&script).map_err(js_error)?;

    JsFuture::from(loaded).await.map_err(|_| {
        MapLoadError::Script("Google Maps script failed to load; the API key may be invalid".into())
    })?;
    tracing::info!("Google Maps script loaded");
    Ok(())
}

pub fn create_map(element: &web_sys::HtmlElement, config: &GameConfig) -> Result<GoogleMap, MapLoadError> {
    let options = serde_wasm_bindgen::to_value(&MapOptions::fixed(config))
        .map_err(|e| MapLoadError::Script(e.to_string()))?;
    Ok(GoogleMap::new(element, &options))
}

/// Wait for the map's first `idle` event, after which bounds and projection
/// are available.
pub async fn wait_for_idle(map: &GoogleMap) -> Result<(), MapLoadError> {
    let idle = js_sys::Promise::new(&mut |resolve, _reject| {
        add_listener_once(map, "idle", &resolve);
    });
    JsFuture::from(idle)
        .await
        .map_err(|_| MapLoadError::NotInitialized)?;

    if map.get_bounds().is_none() {
        return Err(MapLoadError::NotInitialized);
    }
    Ok(())
}

/// Build a marker at `at` and attach it to `map`.
pub fn new_marker(map: &GoogleMap, at: GeoCoordinate, title: &str) -> Marker {
    let options = js_sys::Object::new();
    let position = serde_wasm_bindgen::to_value(&at).unwrap_or(JsValue::NULL);
    let _ = js_sys::Reflect::set(&options, &"position".into(), &position);
    let _ = js_sys::Reflect::set(&options, &"map".into(), map);
    let _ = js_sys::Reflect::set(&options, &"title".into(), &JsValue::from_str(title));
    Marker::new(&options)
}
