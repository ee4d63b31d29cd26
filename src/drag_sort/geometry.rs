use std::cmp::Ordering;

use egui::{Pos2, Rect};

/// Is `point` inside `zone`? A zone without a box (the document root) covers the whole plane.
///
/// Edges are inclusive.
pub(super) fn zone_contains(zone: Option<Rect>, point: Pos2) -> bool {
    zone.is_none_or(|rect| {
        rect.min.x <= point.x
            && rect.max.x >= point.x
            && rect.min.y <= point.y
            && rect.max.y >= point.y
    })
}

/// Per-axis sign of `b - a`: `-1`, `0` or `+1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signs {
    pub x: i8,
    pub y: i8,
}

fn sign(b: f32, a: f32) -> i8 {
    match b.partial_cmp(&a) {
        Some(Ordering::Greater) => 1,
        Some(Ordering::Less) => -1,
        Some(Ordering::Equal) | None => 0,
    }
}

/// Where is the centre of `element` relative to the centre of `zone`?
///
/// A zone without a box is treated as an empty box at the origin.
pub(super) fn center_signs(zone: Option<Rect>, element: Rect) -> Signs {
    let zone_center = zone.map_or(Pos2::ZERO, |r| r.center());
    let element_center = element.center();
    Signs {
        x: sign(element_center.x, zone_center.x),
        y: sign(element_center.y, zone_center.y),
    }
}

#[cfg(test)]
mod tests {
    use egui::{pos2, vec2};

    use super::*;

    #[test]
    fn contains_is_edge_inclusive() {
        let zone = Some(Rect::from_min_size(pos2(10.0, 10.0), vec2(20.0, 20.0)));
        assert!(zone_contains(zone, pos2(10.0, 10.0)));
        assert!(zone_contains(zone, pos2(30.0, 30.0)));
        assert!(!zone_contains(zone, pos2(30.5, 20.0)));
        assert!(!zone_contains(zone, pos2(20.0, 9.9)));
    }

    #[test]
    fn document_zone_covers_everything() {
        assert!(zone_contains(None, pos2(-1.0e6, 1.0e6)));
    }

    #[test]
    fn signs_compare_centres() {
        let zone = Some(Rect::from_center_size(pos2(100.0, 100.0), vec2(40.0, 40.0)));
        let at = |c| Rect::from_center_size(c, vec2(10.0, 10.0));

        assert_eq!(center_signs(zone, at(pos2(80.0, 80.0))), Signs { x: -1, y: -1 });
        assert_eq!(center_signs(zone, at(pos2(120.0, 80.0))), Signs { x: 1, y: -1 });
        assert_eq!(center_signs(zone, at(pos2(100.0, 130.0))), Signs { x: 0, y: 1 });
    }
}
