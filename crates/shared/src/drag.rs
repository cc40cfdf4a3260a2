use crate::geometry;
use crate::models::{DartSize, PlayField, ScreenPoint, ViewportRect};

/// Vertical gap between the resting dart and the top of the field.
pub const REST_GAP_PX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// `grab_offset` is the pointer position relative to the dart's top-left.
    Dragging { grab_offset: (f64, f64) },
}

/// Pointer-driven dart movement: `Idle -> Dragging -> Idle`.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    enabled: bool,
    dart: DartSize,
    position: ScreenPoint,
}

impl DragController {
    /// A new controller starts disabled; enable it once the map is ready.
    pub fn new(dart: DartSize) -> Self {
        Self {
            state: DragState::Idle,
            enabled: false,
            dart,
            position: ScreenPoint::default(),
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling also abandons any drag in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.state = DragState::Idle;
        }
    }

    pub fn dart(&self) -> DartSize {
        self.dart
    }

    /// Dart top-left corner, in viewport pixels.
    pub fn position(&self) -> ScreenPoint {
        self.position
    }

    pub fn center(&self) -> ScreenPoint {
        self.dart.center_of(self.position)
    }

    /// Start dragging. Returns `false` (and changes nothing) when disabled or
    /// already dragging.
    pub fn press(&mut self, pointer: ScreenPoint) -> bool {
        if !self.enabled || self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging {
            grab_offset: pointer.delta_from(self.position),
        };
        true
    }

    /// Follow the pointer, keeping the dart center inside `field`.
    /// Returns the new top-left, or `None` when not dragging.
    pub fn drag_to(&mut self, pointer: ScreenPoint, field: &PlayField) -> Option<ScreenPoint> {
        let DragState::Dragging { grab_offset } = self.state else {
            return None;
        };
        let top_left = pointer.offset(-grab_offset.0, -grab_offset.1);
        let center = geometry::clamp_to_circle(
            self.dart.center_of(top_left),
            field,
            self.dart.half_extent(),
        );
        self.position = self.dart.top_left_of(center);
        Some(self.position)
    }

    /// Finish the drag. Returns the dart's final center, or `None` when no
    /// drag was in progress.
    pub fn release(&mut self) -> Option<ScreenPoint> {
        if !self.is_dragging() {
            return None;
        }
        self.state = DragState::Idle;
        Some(self.center())
    }

    /// Put the dart at `top_left` and drop any drag in progress.
    pub fn reset_to(&mut self, top_left: ScreenPoint) {
        self.state = DragState::Idle;
        self.position = top_left;
    }
}

/// Where the dart waits between throws: horizontally centered above the map.
pub fn resting_position(map: &ViewportRect, dart: DartSize) -> ScreenPoint {
    ScreenPoint::new(
        map.left + map.width / 2.0 - dart.width / 2.0,
        map.top - dart.height - REST_GAP_PX,
    )
}
