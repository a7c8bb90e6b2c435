//! Segment resize geometry and connection label placement.
//!
//! All functions here are pure: they take current geometry plus a pointer
//! position and return new geometry. Callers decide whether to apply it.
//!
//! # Resize rules
//!
//! Dragging a corner handle keeps the opposite corner fixed and never lets
//! either dimension drop below [`MIN_SEGMENT_EXTENT`]:
//!
//! ```text
//!  nw ●───────────● ne
//!     │           │
//!     │  segment  │
//!     │           │
//!  sw ●───────────● se
//! ```
//!
//! Left and top edges move with the pointer until they would come closer
//! than the minimum extent to the fixed edge. Right and bottom edges follow
//! the pointer with the same clamp.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{Bounds, Point, Size};

/// Smallest width or height a segment may have.
pub const MIN_SEGMENT_EXTENT: f32 = 50.0;

/// Edge length of the square resize handle drawn on each corner.
pub const HANDLE_SIZE: f32 = 10.0;

/// Vertical lift applied to a connection label above the line midpoint.
pub const CONNECTION_LABEL_LIFT: f32 = 5.0;

/// One of the four corner handles of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    Nw,
    Ne,
    Sw,
    Se,
}

impl ResizeHandle {
    /// All handles in hit-test order.
    pub const ALL: [ResizeHandle; 4] = [Self::Nw, Self::Ne, Self::Sw, Self::Se];

    /// Returns the short token of the handle.
    pub fn token(self) -> &'static str {
        match self {
            Self::Nw => "nw",
            Self::Ne => "ne",
            Self::Sw => "sw",
            Self::Se => "se",
        }
    }

    /// Returns the corner of `bounds` this handle sits on.
    pub fn corner(self, bounds: Bounds) -> Point {
        match self {
            Self::Nw => Point::new(bounds.min_x(), bounds.min_y()),
            Self::Ne => Point::new(bounds.max_x(), bounds.min_y()),
            Self::Sw => Point::new(bounds.min_x(), bounds.max_y()),
            Self::Se => Point::new(bounds.max_x(), bounds.max_y()),
        }
    }

    /// Returns the handle on the diagonally opposite corner.
    pub fn opposite(self) -> Self {
        match self {
            Self::Nw => Self::Se,
            Self::Ne => Self::Sw,
            Self::Sw => Self::Ne,
            Self::Se => Self::Nw,
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A token that names no resize handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resize handle `{0}`")]
pub struct UnknownHandle(pub String);

impl FromStr for ResizeHandle {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|handle| handle.token() == s)
            .ok_or_else(|| UnknownHandle(s.to_string()))
    }
}

/// Computes the bounds of a segment while `handle` is dragged to `pointer`.
///
/// # Examples
///
/// ```
/// use netsketch_core::geometry::{Bounds, Point, Size};
/// use netsketch_core::resize::{resize, ResizeHandle};
///
/// let segment = Bounds::new_from_top_left(Point::new(50.0, 50.0), Size::new(300.0, 200.0));
///
/// let grown = resize(segment, Point::new(500.0, 400.0), ResizeHandle::Se);
/// assert_eq!(grown.to_size(), Size::new(450.0, 350.0));
///
/// let collapsed = resize(segment, Point::new(40.0, 40.0), ResizeHandle::Se);
/// assert_eq!(collapsed.to_size(), Size::new(50.0, 50.0));
/// assert_eq!(collapsed.min_point(), Point::new(50.0, 50.0));
/// ```
pub fn resize(bounds: Bounds, pointer: Point, handle: ResizeHandle) -> Bounds {
    let x = bounds.min_x();
    let y = bounds.min_y();
    let width = bounds.width();
    let height = bounds.height();

    let (new_x, new_width) = match handle {
        ResizeHandle::Nw | ResizeHandle::Sw => {
            let new_x = pointer.x().min(x + width - MIN_SEGMENT_EXTENT);
            (new_x, width + (x - new_x))
        }
        ResizeHandle::Ne | ResizeHandle::Se => (x, MIN_SEGMENT_EXTENT.max(pointer.x() - x)),
    };

    let (new_y, new_height) = match handle {
        ResizeHandle::Nw | ResizeHandle::Ne => {
            let new_y = pointer.y().min(y + height - MIN_SEGMENT_EXTENT);
            (new_y, height + (y - new_y))
        }
        ResizeHandle::Sw | ResizeHandle::Se => (y, MIN_SEGMENT_EXTENT.max(pointer.y() - y)),
    };

    Bounds::new_from_top_left(Point::new(new_x, new_y), Size::new(new_width, new_height))
}

/// Clamps a size so that neither dimension is below [`MIN_SEGMENT_EXTENT`].
pub fn clamp_segment_size(size: Size) -> Size {
    size.max(Size::new(MIN_SEGMENT_EXTENT, MIN_SEGMENT_EXTENT))
}

/// Returns the square drawn for `handle` on a segment with `bounds`.
pub fn handle_bounds(bounds: Bounds, handle: ResizeHandle) -> Bounds {
    Bounds::new_from_center(handle.corner(bounds), Size::new(HANDLE_SIZE, HANDLE_SIZE))
}

/// Returns the handle whose square contains `point`, if any.
///
/// Handles overlap only on segments narrower than [`HANDLE_SIZE`], which the
/// minimum extent rules out; the first match in [`ResizeHandle::ALL`] wins.
pub fn handle_at(bounds: Bounds, point: Point) -> Option<ResizeHandle> {
    ResizeHandle::ALL
        .into_iter()
        .find(|handle| handle_bounds(bounds, *handle).contains(point))
}

/// Midpoint of the line between two node centers.
pub fn connection_midpoint(from: Point, to: Point) -> Point {
    from.midpoint(to)
}

/// Position of a connection label: the midpoint lifted by [`CONNECTION_LABEL_LIFT`].
pub fn connection_label_anchor(from: Point, to: Point) -> Point {
    let mid = connection_midpoint(from, to);
    mid.with_y(mid.y() - CONNECTION_LABEL_LIFT)
}
