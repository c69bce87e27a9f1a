use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{BoundsError, BoundsResult};

/// Integer rectangle in pixel space (origin top-left, y increasing downward).
///
/// No ordering is enforced between opposite edges: an inverted rectangle is a legal value
/// and is carried through every computation literally.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Left edge (x of the near side).
    pub left: i32,
    /// Top edge (y of the near side).
    pub top: i32,
    /// Right edge.
    pub right: i32,
    /// Bottom edge.
    pub bottom: i32,
}

impl Rect {
    /// Empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a rectangle from its four edges.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(
            left,
            top,
            left.saturating_add(width),
            top.saturating_add(height),
        )
    }

    /// Horizontal span; negative for an inverted rectangle.
    pub fn width(self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical span; negative for an inverted rectangle.
    pub fn height(self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when either span is zero or negative.
    pub fn is_empty(self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// True when an edge lies past its opposite edge.
    pub fn is_inverted(self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Convert to a floating point [`kurbo::Rect`].
    pub fn to_kurbo(self) -> kurbo::Rect {
        kurbo::Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }

    /// Rounds each coordinate of a floating point rectangle to the nearest pixel.
    pub fn from_kurbo(rect: kurbo::Rect) -> Self {
        let r = rect.round();
        Self::new(r.x0 as i32, r.y0 as i32, r.x1 as i32, r.y1 as i32)
    }
}

impl From<kurbo::Rect> for Rect {
    fn from(value: kurbo::Rect) -> Self {
        Self::from_kurbo(value)
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(value: Rect) -> Self {
        value.to_kurbo()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// Parses the `left,top,right,bottom` text form used on the command line.
impl FromStr for Rect {
    type Err = BoundsError;

    fn from_str(s: &str) -> BoundsResult<Self> {
        let parts = s
            .split(',')
            .map(|p| {
                p.trim().parse::<i32>().map_err(|e| {
                    BoundsError::validation(format!("rect coordinate '{}': {e}", p.trim()))
                })
            })
            .collect::<BoundsResult<Vec<_>>>()?;
        match parts.as_slice() {
            &[left, top, right, bottom] => Ok(Self::new(left, top, right, bottom)),
            _ => Err(BoundsError::validation(format!(
                "rect must have 4 comma-separated coordinates, got {}",
                parts.len()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
