use egui::Pos2;

use super::geometry::zone_contains;
use super::host::DragHost;
use super::types::NodeId;

/// Inputs for one drop-zone decision.
#[derive(Clone, Copy, Debug)]
pub(super) struct ZoneQuery<'a> {
    /// Candidate drop zones, deepest-nested first.
    pub(super) zones: &'a [NodeId],
    pub(super) placeholder: Option<NodeId>,
    pub(super) dragged: NodeId,

    /// The document-relative point under the pointer.
    pub(super) hotspot: Pos2,

    pub(super) active: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ZoneStep {
    /// No zone was or is active.
    Nothing,

    /// The placeholder is (still) the active zone.
    Over(NodeId),

    /// A different zone became active. `left` was active before.
    Entered {
        left: Option<NodeId>,
        entered: NodeId,
    },

    /// The active zone no longer contains the hotspot, and nothing replaced it.
    Left(NodeId),

    /// A regular drop zone stays active: time to reposition the placeholder.
    Stayed(NodeId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct ZoneDecision {
    pub(super) step: ZoneStep,

    /// A configured drop zone (not the placeholder) is under the hotspot.
    pub(super) over_drop_zone: bool,
}

/// Decide which zone is active for this tick.
///
/// The placeholder is tested before every configured zone. Entering it counts as a zone change;
/// staying on it reports [`ZoneStep::Over`] instead of [`ZoneStep::Stayed`].
pub(super) fn track_drop_zone(host: &dyn DragHost, query: &ZoneQuery<'_>) -> ZoneDecision {
    let contains = |node: NodeId| zone_contains(host.bounding_box(node), query.hotspot);

    let mut candidate = None;
    let mut over_drop_zone = false;

    if let Some(placeholder) = query.placeholder.filter(|&p| contains(p)) {
        if query.active == Some(placeholder) {
            return ZoneDecision {
                step: ZoneStep::Over(placeholder),
                over_drop_zone,
            };
        }
        candidate = Some(placeholder);
    }

    if candidate.is_none() {
        let hit = query
            .zones
            .iter()
            .copied()
            .find(|&zone| zone != query.dragged && contains(zone));
        if let Some(zone) = hit {
            over_drop_zone = true;
            if query.active != Some(zone) {
                candidate = Some(zone);
            }
        }
    }

    if let Some(entered) = candidate {
        return ZoneDecision {
            step: ZoneStep::Entered {
                left: query.active,
                entered,
            },
            over_drop_zone,
        };
    }

    let step = match query.active {
        None => ZoneStep::Nothing,
        Some(active) if !contains(active) => ZoneStep::Left(active),
        Some(active) if query.placeholder == Some(active) => ZoneStep::Over(active),
        Some(active) => ZoneStep::Stayed(active),
    };

    ZoneDecision {
        step,
        over_drop_zone,
    }
}

#[cfg(test)]
mod tests {
    use egui::{Rect, pos2, vec2};

    use super::super::fake_dom::FakeDom;
    use super::*;

    struct Nested {
        dom: FakeDom,
        a: NodeId,
        b: NodeId,
        dragged: NodeId,
        placeholder: NodeId,
    }

    /// `b` nested inside `a`; the dragged element and its placeholder live elsewhere.
    fn nested() -> Nested {
        let mut dom = FakeDom::new();
        let square = |x: f32, y: f32, side: f32| Rect::from_min_size(pos2(x, y), vec2(side, side));
        let a = dom.add(NodeId::DOCUMENT, square(0.0, 0.0, 200.0));
        let b = dom.add(a, square(50.0, 50.0, 50.0));
        let dragged = dom.add(NodeId::DOCUMENT, square(300.0, 0.0, 10.0));
        let placeholder = dom.add(NodeId::DOCUMENT, square(300.0, 300.0, 10.0));
        Nested {
            dom,
            a,
            b,
            dragged,
            placeholder,
        }
    }

    fn step(n: &Nested, hotspot: Pos2, active: Option<NodeId>) -> ZoneDecision {
        // Configured as `[a, b]`, normalized to deepest first.
        let zones = [n.b, n.a];
        track_drop_zone(
            &n.dom,
            &ZoneQuery {
                zones: &zones,
                placeholder: Some(n.placeholder),
                dragged: n.dragged,
                hotspot,
                active,
            },
        )
    }

    #[test]
    fn nested_zones_prefer_the_inner_one() {
        let n = nested();

        let d = step(&n, pos2(250.0, 250.0), None);
        assert_eq!(d.step, ZoneStep::Nothing);
        assert!(!d.over_drop_zone);

        let d = step(&n, pos2(10.0, 10.0), None);
        assert_eq!(
            d.step,
            ZoneStep::Entered {
                left: None,
                entered: n.a
            }
        );
        assert!(d.over_drop_zone);

        let d = step(&n, pos2(60.0, 60.0), Some(n.a));
        assert_eq!(
            d.step,
            ZoneStep::Entered {
                left: Some(n.a),
                entered: n.b
            }
        );
    }

    #[test]
    fn staying_inside_reports_stayed() {
        let n = nested();
        let d = step(&n, pos2(70.0, 70.0), Some(n.b));
        assert_eq!(d.step, ZoneStep::Stayed(n.b));
        assert!(d.over_drop_zone);
    }

    #[test]
    fn leaving_inner_zone_while_active_outer_is_hit_reenters_outer() {
        let n = nested();
        let d = step(&n, pos2(10.0, 10.0), Some(n.b));
        assert_eq!(
            d.step,
            ZoneStep::Entered {
                left: Some(n.b),
                entered: n.a
            }
        );
    }

    #[test]
    fn leaving_everything_reports_left() {
        let n = nested();
        let d = step(&n, pos2(250.0, 250.0), Some(n.a));
        assert_eq!(d.step, ZoneStep::Left(n.a));
        assert!(!d.over_drop_zone);
    }

    #[test]
    fn placeholder_is_entered_then_hovered() {
        let n = nested();

        let d = step(&n, pos2(305.0, 305.0), Some(n.a));
        assert_eq!(
            d.step,
            ZoneStep::Entered {
                left: Some(n.a),
                entered: n.placeholder
            }
        );
        assert!(!d.over_drop_zone);

        let d = step(&n, pos2(306.0, 306.0), Some(n.placeholder));
        assert_eq!(d.step, ZoneStep::Over(n.placeholder));

        let d = step(&n, pos2(250.0, 250.0), Some(n.placeholder));
        assert_eq!(d.step, ZoneStep::Left(n.placeholder));
    }

    #[test]
    fn the_dragged_element_is_never_a_zone() {
        let n = nested();
        let zones = [n.dragged];
        let d = track_drop_zone(
            &n.dom,
            &ZoneQuery {
                zones: &zones,
                placeholder: None,
                dragged: n.dragged,
                hotspot: pos2(305.0, 5.0),
                active: None,
            },
        );
        assert_eq!(d.step, ZoneStep::Nothing);
    }

    #[test]
    fn document_zone_catches_everything() {
        let n = nested();
        let zones = [n.b, NodeId::DOCUMENT];
        let d = track_drop_zone(
            &n.dom,
            &ZoneQuery {
                zones: &zones,
                placeholder: None,
                dragged: n.dragged,
                hotspot: pos2(-500.0, 9000.0),
                active: None,
            },
        );
        assert_eq!(
            d.step,
            ZoneStep::Entered {
                left: None,
                entered: NodeId::DOCUMENT
            }
        );
    }
}
