use super::geometry::Signs;
use super::types::{Axis, Placement};

/// Decide where the placeholder goes, given the dragged element's centre relative to the active
/// drop zone's centre.
///
/// With a free axis only the diagonals decide; mixed or zero signs keep the placeholder put.
pub(super) fn placement_for(axis: Option<Axis>, signs: Signs) -> Option<Placement> {
    let from_sign = |s: i8| match s {
        -1 => Some(Placement::Before),
        1 => Some(Placement::After),
        _ => None,
    };

    match axis {
        Some(Axis::X) => from_sign(signs.x),
        Some(Axis::Y) => from_sign(signs.y),
        None if signs.x == signs.y => from_sign(signs.x),
        None => None,
    }
}
