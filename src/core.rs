use crate::error::{ScrollvineError, ScrollvineResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp a value into the normalized `[0, 1]` progress space.
///
/// Progress arriving from a scroll source may overshoot either end (elastic
/// native scrolling), so every consumer clamps rather than trusting the
/// producer.
pub fn clamp_unit(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

/// Remap `v` from `[in_min, in_max]` into `[out_min, out_max]`.
///
/// A degenerate input range maps everything to `out_min`.
pub fn map_range(v: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let in_span = in_max - in_min;
    if in_span == 0.0 {
        return out_min;
    }
    ((v - in_min) * (out_max - out_min)) / in_span + out_min
}

/// Half-open window `[start, end)` in normalized scroll-progress space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProgressWindow {
    /// Inclusive window start.
    pub start: f64,
    /// Exclusive window end.
    pub end: f64,
}

impl ProgressWindow {
    /// Create a validated window with `start <= end`.
    pub fn new(start: f64, end: f64) -> ScrollvineResult<Self> {
        let w = Self { start, end };
        w.validate()?;
        Ok(w)
    }

    /// Re-check the window invariants (needed for windows that arrived via
    /// deserialization rather than [`ProgressWindow::new`]).
    pub fn validate(self) -> ScrollvineResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ScrollvineError::validation(
                "ProgressWindow bounds must be finite",
            ));
        }
        if self.start > self.end {
            return Err(ScrollvineError::validation(
                "ProgressWindow start must be <= end",
            ));
        }
        Ok(())
    }

    pub fn span(self) -> f64 {
        self.end - self.start
    }

    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Return `true` when `p` is inside `[start, end)`.
    pub fn contains(self, p: f64) -> bool {
        self.start <= p && p < self.end
    }

    /// Progress through the window: 0 before `start`, 1 at or after `end`,
    /// linear in between. Monotone non-decreasing in `p`.
    pub fn local_t(self, p: f64) -> f64 {
        if p >= self.end {
            1.0
        } else if p < self.start {
            0.0
        } else {
            (p - self.start) / self.span()
        }
    }
}
