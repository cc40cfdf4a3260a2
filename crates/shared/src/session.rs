//! All mutable state of one game, owned in one place.
//!
//! Lifecycle: [`GameSession::new`] when the page loads, [`GameSession::ready`]
//! once the map is usable, [`GameSession::reset`] before every new throw, and
//! [`GameSession::teardown`] when the page goes away.

use crate::drag::{self, DragController};
use crate::geometry;
use crate::models::{DartSize, PlayField, ScreenPoint, ThrowResult};
use crate::presenter::ThrowOutcome;
use crate::provider::MapProvider;

/// Identifies one throw. Outcomes for anything but the latest ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrowTicket(u64);

pub struct GameSession<P: MapProvider> {
    provider: P,
    drag: DragController,
    marker: Option<P::Marker>,
    overlay: Option<String>,
    last_result: Option<ThrowResult>,
    throw_seq: u64,
}

impl<P: MapProvider> GameSession<P> {
    pub fn new(provider: P, dart: DartSize) -> Self {
        Self {
            provider,
            drag: DragController::new(dart),
            marker: None,
            overlay: None,
            last_result: None,
            throw_seq: 0,
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Text of the result overlay, if it is showing.
    pub fn overlay(&self) -> Option<&str> {
        self.overlay.as_deref()
    }

    pub fn last_result(&self) -> Option<&ThrowResult> {
        self.last_result.as_ref()
    }

    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }

    /// The circular field derived from the map's current on-screen box.
    pub fn field(&self) -> Option<PlayField> {
        self.provider
            .viewport()
            .filter(|vp| !vp.rect.is_empty())
            .map(|vp| PlayField::from_rect(&vp.rect))
    }

    /// Enable throwing once the map reports bounds. Returns whether the map
    /// was ready.
    pub fn ready(&mut self) -> bool {
        let ready = self.provider.viewport().is_some_and(|vp| vp.is_ready());
        self.drag.set_enabled(ready);
        if ready {
            self.reset();
            tracing::info!("map ready, dart enabled");
        }
        ready
    }

    pub fn press(&mut self, pointer: ScreenPoint) -> bool {
        self.drag.press(pointer)
    }

    pub fn drag_to(&mut self, pointer: ScreenPoint) -> Option<ScreenPoint> {
        let field = self.field()?;
        self.drag.drag_to(pointer, &field)
    }

    /// End the drag and judge the landing point. The returned ticket must be
    /// handed back to [`GameSession::apply`] with the resolved outcome.
    pub fn release(&mut self) -> Option<(ThrowTicket, ThrowResult)> {
        let center = self.drag.release()?;
        self.throw_seq += 1;

        let landing = self
            .provider
            .viewport()
            .and_then(|vp| geometry::landing_coordinate(center, &vp));
        let result = match landing {
            Some(at) => ThrowResult::hit(at),
            None => ThrowResult::miss(),
        };
        tracing::debug!(x = center.x, y = center.y, hit = result.is_hit(), "dart released");
        Some((ThrowTicket(self.throw_seq), result))
    }

    /// Show a resolved outcome. Outcomes for superseded throws are dropped and
    /// `false` is returned.
    pub fn apply(&mut self, ticket: ThrowTicket, outcome: ThrowOutcome) -> bool {
        if ticket.0 != self.throw_seq {
            tracing::debug!(ticket = ticket.0, latest = self.throw_seq, "dropping stale outcome");
            return false;
        }

        self.clear_marker();
        if let Some(req) = &outcome.marker {
            self.marker = Some(self.provider.place_marker(req.at, &req.title));
        }
        self.overlay = Some(outcome.message);
        self.last_result = Some(outcome.result);
        true
    }

    /// Hide the overlay, remove the marker and move the dart back above the
    /// field. Any throw still being resolved is abandoned.
    pub fn reset(&mut self) {
        self.throw_seq += 1;
        self.overlay = None;
        self.last_result = None;
        self.clear_marker();
        if let Some(vp) = self.provider.viewport() {
            self.drag
                .reset_to(drag::resting_position(&vp.rect, self.drag.dart()));
        }
    }

    /// Release everything placed on the map and hand the provider back.
    pub fn teardown(mut self) -> P {
        self.clear_marker();
        self.drag.set_enabled(false);
        self.provider
    }

    fn clear_marker(&mut self) {
        if let Some(old) = self.marker.take() {
            self.provider.remove_marker(old);
        }
    }
}
