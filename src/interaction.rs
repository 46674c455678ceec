//! Pointer drag tracking in document coordinates.
//!
//! The canvas feeds press / move / release positions into a [`DragTracker`];
//! the tracker decides what each step means for the preview and committed layers.

use crate::constants;

/// The vector from the drag start to the current pointer position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragVector {
    /// Where the drag started
    pub start: (f32, f32),
    /// Where the pointer is now
    pub end: (f32, f32),
}

impl DragVector {
    /// Horizontal component.
    pub fn dx(&self) -> f32 {
        self.end.0 - self.start.0
    }

    /// Vertical component.
    pub fn dy(&self) -> f32 {
        self.end.1 - self.start.1
    }

    /// Euclidean distance between start and end.
    pub fn length(&self) -> f32 {
        self.dx().hypot(self.dy())
    }
}

/// What a pointer release should do to the layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// There was no drag in progress
    Ignored,
    /// The drag was shorter than two document units; treat it as a stray click
    TooShort,
    /// Commit a circle centred on the drag start
    Commit {
        /// Drag start
        center: (f32, f32),
        /// Unclamped drag distance
        radius: f32,
    },
}

/// Tracks a single primary-button drag.
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    start: Option<(f32, f32)>,
}

impl DragTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Starts a drag at `point`. A second press restarts the drag.
    pub fn press(&mut self, point: (f32, f32)) {
        self.start = Some(point);
    }

    /// Returns the current drag vector, or `None` when no drag is in progress.
    pub fn drag_to(&self, point: (f32, f32)) -> Option<DragVector> {
        self.start.map(|start| DragVector { start, end: point })
    }

    /// Ends the drag at `point`.
    pub fn release(&mut self, point: (f32, f32)) -> DragOutcome {
        let Some(start) = self.start.take() else {
            return DragOutcome::Ignored;
        };
        let vector = DragVector { start, end: point };
        let distance = vector.length();
        if distance < constants::MIN_COMMIT_DISTANCE {
            DragOutcome::TooShort
        } else {
            DragOutcome::Commit {
                center: start,
                radius: distance,
            }
        }
    }

    /// Forgets any drag in progress.
    pub fn cancel(&mut self) {
        self.start = None;
    }
}
