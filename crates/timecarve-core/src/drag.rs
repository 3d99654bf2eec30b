//! Dual-handle drag surface.
//!
//! A headless state machine for a range editor with two draggable boundary
//! handles over a pixel-width track. The controller turns pointer positions
//! into boundary edits; it holds no timing state of its own and its clamp is
//! only a first pass, since every emitted edit goes through the session's
//! full validation. There is no preview phase: every move is a committed
//! edit, so a dropped intermediate move is harmless.

use crate::interval::{round3, FracRange, MIN_WIDTH};
use crate::session::EditCommand;

/// Which boundary handle is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Handle),
}

/// A boundary edit emitted by a drag move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleEdit {
    pub handle: Handle,
    pub value: f64,
}

impl HandleEdit {
    /// Forward into the session's edit path, where the authoritative
    /// validation happens.
    pub fn to_edit(self) -> EditCommand {
        match self.handle {
            Handle::Start => EditCommand::SetStart { value: self.value },
            Handle::End => EditCommand::SetEnd { value: self.value },
        }
    }
}

/// Drag controller: `Idle` until a pointer-down captures a handle, then
/// every move emits an edit until pointer-up releases it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Pointer-down on a handle: capture it.
    pub fn begin(&mut self, handle: Handle) {
        self.state = DragState::Dragging(handle);
    }

    /// Pointer-move. `position` is the pointer's fraction along the track,
    /// `current` the range being edited. Returns the edit to commit, or
    /// `None` when no handle is captured.
    pub fn update(&mut self, position: f64, current: FracRange) -> Option<HandleEdit> {
        let DragState::Dragging(handle) = self.state else {
            return None;
        };
        let fraction = round3(position.clamp(0.0, 1.0));
        let value = match handle {
            Handle::Start => fraction.min(current.end - MIN_WIDTH),
            Handle::End => fraction.max(current.start + MIN_WIDTH),
        };
        Some(HandleEdit { handle, value })
    }

    /// Pointer-up: release capture.
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }
}

/// Map a pointer x coordinate onto a track as a fraction in `[0, 1]`.
/// A degenerate zero-width track maps to 0.
pub fn track_fraction(pointer_x: f64, track_left: f64, track_width: f64) -> f64 {
    if track_width <= 0.0 {
        return 0.0;
    }
    let x = (pointer_x - track_left).clamp(0.0, track_width);
    x / track_width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_moves_emit_nothing() {
        let mut drag = DragController::new();
        assert_eq!(drag.update(0.5, FracRange::new(0.0, 1.0)), None);
    }

    #[test]
    fn test_drag_lifecycle() {
        let mut drag = DragController::new();
        drag.begin(Handle::Start);
        assert_eq!(drag.state(), DragState::Dragging(Handle::Start));

        let edit = drag.update(0.3, FracRange::new(0.0, 0.8)).unwrap();
        assert_eq!(edit.handle, Handle::Start);
        assert_eq!(edit.value, 0.3);

        drag.end();
        assert_eq!(drag.state(), DragState::Idle);
        assert_eq!(drag.update(0.4, FracRange::new(0.0, 0.8)), None);
    }

    #[test]
    fn test_start_handle_stops_short_of_end() {
        let mut drag = DragController::new();
        drag.begin(Handle::Start);
        let edit = drag.update(0.95, FracRange::new(0.0, 0.8)).unwrap();
        assert!((edit.value - 0.79).abs() < 1e-9);
    }

    #[test]
    fn test_end_handle_stops_short_of_start() {
        let mut drag = DragController::new();
        drag.begin(Handle::End);
        let edit = drag.update(0.1, FracRange::new(0.4, 0.9)).unwrap();
        assert!((edit.value - 0.41).abs() < 1e-9);
    }

    #[test]
    fn test_positions_clamped_and_rounded() {
        let mut drag = DragController::new();
        drag.begin(Handle::End);
        let edit = drag.update(7.5, FracRange::new(0.0, 0.5)).unwrap();
        assert_eq!(edit.value, 1.0);

        let edit = drag.update(0.12345, FracRange::new(0.0, 0.5)).unwrap();
        assert_eq!(edit.value, 0.123);
    }

    #[test]
    fn test_synthetic_drag_feeds_session_edits() {
        // The final move alone determines final state: replaying only the
        // last position yields the same edit as the full storm.
        let mut drag = DragController::new();
        drag.begin(Handle::End);
        let range = FracRange::new(0.0, 0.5);
        let storm: Vec<_> = [0.51, 0.57, 0.63, 0.7]
            .iter()
            .filter_map(|&p| drag.update(p, range))
            .collect();
        let last = storm.last().unwrap();
        assert_eq!(last.to_edit(), EditCommand::SetEnd { value: 0.7 });

        let mut fresh = DragController::new();
        fresh.begin(Handle::End);
        assert_eq!(fresh.update(0.7, range), Some(*last));
    }

    #[test]
    fn test_track_fraction_mapping() {
        assert_eq!(track_fraction(150.0, 100.0, 200.0), 0.25);
        assert_eq!(track_fraction(50.0, 100.0, 200.0), 0.0);
        assert_eq!(track_fraction(500.0, 100.0, 200.0), 1.0);
        assert_eq!(track_fraction(150.0, 100.0, 0.0), 0.0);
    }
}
