use egui::{Pos2, Vec2};

use super::host::DragHost;
use super::types::{Axis, NodeId};

/// The box the dragged element must stay inside, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct Containment {
    /// Document origin shifted by the containment's own scroll offset.
    pub(super) origin: Pos2,

    /// May be infinite (the document root has no measurable extent).
    pub(super) extent: Vec2,
}

impl Containment {
    pub(super) fn measure(host: &dyn DragHost, node: NodeId) -> Self {
        let rect = host.bounding_box(node);
        Self {
            origin: rect.map_or(Pos2::ZERO, |r| r.min) + host.scroll_offset(node),
            extent: rect.map_or(Vec2::splat(f32::INFINITY), |r| r.size()),
        }
    }
}

/// New `left`/`top` for the dragged element, in its layout coordinate space.
///
/// `None` means "leave this axis alone".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(super) struct Clamped {
    pub(super) left: Option<f32>,
    pub(super) top: Option<f32>,
}

fn clamp_axis(raw: f32, size: f32, lead: f32, extent: f32) -> f32 {
    if raw >= lead && raw + size <= lead + extent {
        raw
    } else if raw <= lead {
        lead
    } else {
        lead + extent - size
    }
}

/// Clamp the raw document position of the element's top-left corner into `containment`.
///
/// `origin_delta` (document minus layout origin, captured at arm time) converts the result back
/// into layout coordinates.
pub(super) fn clamp_to_containment(
    raw: Pos2,
    size: Vec2,
    containment: &Containment,
    axis: Option<Axis>,
    origin_delta: Vec2,
) -> Clamped {
    let left = (axis != Some(Axis::Y)).then(|| {
        clamp_axis(raw.x, size.x, containment.origin.x, containment.extent.x) - origin_delta.x
    });
    let top = (axis != Some(Axis::X)).then(|| {
        clamp_axis(raw.y, size.y, containment.origin.y, containment.extent.y) - origin_delta.y
    });
    Clamped { left, top }
}
