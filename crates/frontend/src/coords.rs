use dart_atlas_shared::models::{DartSize, ScreenPoint, ViewportRect};
use wasm_bindgen::JsCast;

/// Fallback dart size, matching `.dart` in main.css.
pub const DEFAULT_DART_SIZE: DartSize = DartSize::new(48.0, 48.0);

/// Look up an element by id as an `HtmlElement`.
pub fn html_element(id: &str) -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(id)?.dyn_into().ok()
}

/// Content box of the element with `id`, in viewport pixels. The map widget
/// draws inside the border, so that is the area screen points map onto.
pub fn element_rect(id: &str) -> Option<ViewportRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(id)?;
    let rect = element.get_bounding_client_rect();
    Some(content_rect(
        ViewportRect::new(rect.left(), rect.top(), rect.width(), rect.height()),
        element.client_left() as f64,
        element.client_top() as f64,
        element.client_width() as f64,
        element.client_height() as f64,
    ))
}

/// Inset a border-box rect by the element's left/top border widths, taking
/// the inner size from `clientWidth`/`clientHeight`.
fn content_rect(
    border_box: ViewportRect,
    border_left: f64,
    border_top: f64,
    inner_width: f64,
    inner_height: f64,
) -> ViewportRect {
    ViewportRect::new(
        border_box.left + border_left,
        border_box.top + border_top,
        inner_width,
        inner_height,
    )
}

/// Rendered size of the element with `id`; `None` until it has a layout.
pub fn element_size(id: &str) -> Option<DartSize> {
    let element = html_element(id)?;
    let (w, h) = (element.offset_width() as f64, element.offset_height() as f64);
    (w > 0.0 && h > 0.0).then_some(DartSize::new(w, h))
}

/// Inline style placing an absolutely positioned element at `top_left`.
pub fn position_style(top_left: ScreenPoint) -> String {
    format!("left: {}px; top: {}px;", top_left.x, top_left.y)
}
