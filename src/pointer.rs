//! Pointer-driven micro-interactions (magnetic buttons, trailing cursor
//! ring, glass-card tilt) as pure state and math. Event plumbing and view
//! updates live in the external shell, same as for the scroll engine.

use crate::core::lerp;

/// Element bounds in page coordinates, as reported by the shell.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct BoundingRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    fn center(self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Magnetic hover: the element leans toward the cursor by a fraction of
/// the cursor's distance from its center, and springs back on leave.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Magnetic {
    pub pull: f64,
}

impl Default for Magnetic {
    fn default() -> Self {
        Self { pull: 0.3 }
    }
}

impl Magnetic {
    /// Translation offset while the cursor hovers at `(cursor_x, cursor_y)`.
    pub fn offset(self, cursor_x: f64, cursor_y: f64, rect: BoundingRect) -> (f64, f64) {
        let (cx, cy) = rect.center();
        ((cursor_x - cx) * self.pull, (cursor_y - cy) * self.pull)
    }

    /// Rest position once the cursor leaves.
    pub fn rest(self) -> (f64, f64) {
        (0.0, 0.0)
    }
}

/// Trailing cursor ring: an exponential approach toward the latest pointer
/// position, advanced once per animation frame. The inner dot snaps; only
/// the outer ring trails.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct CursorTrail {
    /// Fraction of the remaining distance covered per frame.
    pub follow: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for CursorTrail {
    fn default() -> Self {
        Self {
            follow: 0.12,
            x: 0.0,
            y: 0.0,
        }
    }
}

impl CursorTrail {
    pub fn new(follow: f64) -> Self {
        Self {
            follow,
            ..Self::default()
        }
    }

    /// Move one frame toward the target and return the new ring position.
    pub fn advance(&mut self, target_x: f64, target_y: f64) -> (f64, f64) {
        self.x = lerp(self.x, target_x, self.follow);
        self.y = lerp(self.y, target_y, self.follow);
        (self.x, self.y)
    }

    /// Snap directly onto the target (first appearance).
    pub fn jump_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// Glass-card tilt: `(rotate_x_deg, rotate_y_deg)` for a cursor at
/// `(cursor_x, cursor_y)` over the card. Centered cursor gives no tilt;
/// edges give `±max_deg`.
pub fn card_tilt_deg(
    cursor_x: f64,
    cursor_y: f64,
    rect: BoundingRect,
    max_deg: f64,
) -> (f64, f64) {
    let (cx, cy) = rect.center();
    let half_w = rect.width / 2.0;
    let half_h = rect.height / 2.0;
    if half_w <= 0.0 || half_h <= 0.0 {
        return (0.0, 0.0);
    }
    let nx = ((cursor_x - cx) / half_w).clamp(-1.0, 1.0);
    let ny = ((cursor_y - cy) / half_h).clamp(-1.0, 1.0);
    // Vertical travel tips the card away (negative rotateX).
    (ny * -max_deg, nx * max_deg)
}
