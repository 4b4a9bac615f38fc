use crate::config::RoadLayout;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentDetail {
    High,
    Low,
}

/// z offset of the road group after `elapsed_secs` of wall-clock time.
/// Always within `[-segment_length, 0]`, so the finite road looks endless.
pub fn road_offset(elapsed_secs: f64, layout: &RoadLayout) -> f32 {
    let travelled = elapsed_secs * 1000.0 * layout.scroll_rate as f64;
    (-travelled % layout.segment_length as f64) as f32
}

pub fn segment_indices(layout: &RoadLayout) -> Range<i32> {
    -layout.visible_segments..layout.visible_segments
}

pub fn segment_z(index: i32, layout: &RoadLayout) -> f32 {
    index as f32 * layout.segment_length
}

pub fn segment_detail(index: i32, layout: &RoadLayout) -> SegmentDetail {
    if segment_z(index, layout).abs() < layout.lod_distance {
        SegmentDetail::High
    } else {
        SegmentDetail::Low
    }
}
