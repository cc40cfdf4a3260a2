use dart_atlas_shared::models::ScreenPoint;
use dart_atlas_shared::presenter::resolve_throw;
use dart_atlas_shared::session::GameSession;
use dioxus::prelude::*;

use crate::components::result_overlay::ResultOverlay;
use crate::coords;
use crate::provider::{GoogleMapProvider, MAP_ELEMENT_ID};

pub const DART_ELEMENT_ID: &str = "dart";

pub type SessionSignal = Signal<Option<GameSession<GoogleMapProvider>>>;

// ---------------------------------------------------------------------------
// Drag handling
// ---------------------------------------------------------------------------

/// Whether a drag is in progress; checked before writing so idle pointer
/// movement does not re-render the board.
fn is_dragging(session: SessionSignal) -> bool {
    matches!(&*session.read(), Some(s) if s.drag().is_dragging())
}

fn press(mut session: SessionSignal, pointer: ScreenPoint) -> bool {
    match &mut *session.write() {
        Some(s) => s.press(pointer),
        None => false,
    }
}

fn drag_to(mut session: SessionSignal, pointer: ScreenPoint) {
    if !is_dragging(session) {
        return;
    }
    if let Some(s) = &mut *session.write() {
        s.drag_to(pointer);
    }
}

/// End the drag, then resolve the throw in the background. The session drops
/// the outcome if another throw or a reset happened in the meantime.
fn finish_throw(mut session: SessionSignal) {
    if !is_dragging(session) {
        return;
    }
    let (ticket, result, provider) = match &mut *session.write() {
        Some(s) => match s.release() {
            Some((ticket, result)) => (ticket, result, s.provider().clone()),
            None => return,
        },
        None => return,
    };

    spawn(async move {
        let outcome = resolve_throw(&provider, result).await;
        if let Some(s) = &mut *session.write() {
            s.apply(ticket, outcome);
        }
    });
}

fn reset(mut session: SessionSignal) {
    if let Some(s) = &mut *session.write() {
        s.reset();
    }
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// The map, the dart above it and the result overlay.
///
/// Move and release listeners sit on the full-page board rather than the dart
/// so a fast pointer cannot slip off the dart mid-drag.
#[component]
pub fn DartBoard(session: SessionSignal) -> Element {
    let (dart_style, enabled, dragging, overlay) = match &*session.read() {
        Some(s) => (
            coords::position_style(s.drag().position()),
            s.drag().is_enabled(),
            s.drag().is_dragging(),
            s.overlay().map(str::to_string),
        ),
        None => (String::new(), false, false, None),
    };

    let dart_class = match (enabled, dragging) {
        (false, _) => "dart disabled",
        (true, true) => "dart dragging",
        (true, false) => "dart",
    };

    rsx! {
        div {
            class: "board",

            onmousemove: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                drag_to(session, ScreenPoint::new(client.x, client.y));
            },

            onmouseup: move |_| finish_throw(session),

            onmouseleave: move |_| finish_throw(session),

            ontouchmove: move |evt: Event<TouchData>| {
                let touches = evt.data().touches();
                let Some(t) = touches.first() else { return };
                evt.prevent_default();
                let client = t.client_coordinates();
                drag_to(session, ScreenPoint::new(client.x, client.y));
            },

            ontouchend: move |_| finish_throw(session),

            ontouchcancel: move |_| finish_throw(session),

            div { id: MAP_ELEMENT_ID, class: "map" }

            div {
                id: DART_ELEMENT_ID,
                class: "{dart_class}",
                style: "{dart_style}",

                onmousedown: move |evt: Event<MouseData>| {
                    let client = evt.client_coordinates();
                    if press(session, ScreenPoint::new(client.x, client.y)) {
                        evt.prevent_default();
                    }
                },

                ontouchstart: move |evt: Event<TouchData>| {
                    let touches = evt.data().touches();
                    let Some(t) = touches.first() else { return };
                    let client = t.client_coordinates();
                    if press(session, ScreenPoint::new(client.x, client.y)) {
                        evt.prevent_default();
                    }
                },

                "🎯"
            }

            ResultOverlay {
                message: overlay,
                on_reset: move |_| reset(session),
            }
        }
    }
}
