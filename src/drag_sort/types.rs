use egui::Pos2;

/// Opaque handle to an element owned by the [`super::DragHost`].
///
/// `NodeId::DOCUMENT` is the document root: it has no measurable box and is the default
/// containment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct NodeId(pub u64);

impl NodeId {
    pub const DOCUMENT: Self = Self(0);

    pub fn is_document(self) -> bool {
        self == Self::DOCUMENT
    }
}

/// Identifies one drag-enabled instance. Assigned in creation order, never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct InstanceId(pub u64);

/// Restricts movement (and placeholder decisions) to a single axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    X,
    Y,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u16),
}

/// Abstract input notifications, already mapped from the platform's native events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down {
        button: PointerButton,
        target: NodeId,
        /// Document coordinates.
        pos: Pos2,
    },
    Move {
        /// Document coordinates.
        pos: Pos2,
    },
    Up,

    /// Keyboard-escape style abort: reverts without dropping.
    Cancel,
}

/// What the input layer should do with the native event that produced a [`PointerEvent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the platform default (text selection).
    pub prevent_default: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Armed,
    Dragging,
}

/// Where the placeholder goes relative to the active drop zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}
