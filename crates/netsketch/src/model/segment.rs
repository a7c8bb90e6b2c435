use netsketch_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    identifier::SegmentId,
    resize::clamp_segment_size,
};

/// Top-left corner of a newly created segment.
pub const DEFAULT_SEGMENT_ORIGIN: Point = Point::new(50.0, 50.0);

/// Size of a newly created segment.
pub const DEFAULT_SEGMENT_SIZE: Size = Size::new(300.0, 200.0);

/// A labeled rectangular region grouping nodes visually.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    id: SegmentId,
    bounds: Bounds,
    label: String,
    color: Color,
}

impl Segment {
    pub(crate) fn new(id: SegmentId, label: String) -> Self {
        Self {
            id,
            bounds: Bounds::new_from_top_left(DEFAULT_SEGMENT_ORIGIN, DEFAULT_SEGMENT_SIZE),
            label,
            color: Color::accent(),
        }
    }

    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Rectangle covered by the segment; never smaller than 50×50.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Display color of the segment outline.
    pub fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn set_bounds(&mut self, bounds: Bounds) {
        let size = clamp_segment_size(bounds.to_size());
        self.bounds = Bounds::new_from_top_left(bounds.min_point(), size);
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }
}
