use egui::{Rect, Vec2};

use super::options::DragConfig;
use super::style::{StyleMap, StyleProperty};
use super::types::{InstanceId, NodeId};

/// Per-node registry tag, as attached by the host's element data.
#[derive(Clone, Debug, Default)]
pub enum NodeMark {
    /// Keep searching the ancestors.
    #[default]
    Unmarked,

    /// This node (and therefore everything inside it) must never start a drag.
    Veto,

    /// Create an instance for this node on first interaction, using the attached config.
    Lazy(DragConfig),

    Instance(InstanceId),
}

/// Everything the drag-sort core needs from the element tree it operates on.
///
/// All queries are synchronous reads against the current layout. Coordinates returned by
/// [`Self::bounding_box`] are document-relative; [`Self::layout_box`] is relative to the offset
/// parent (the space `left`/`top` styles address).
pub trait DragHost {
    /// Outer box in document coordinates. `None` for the document root.
    fn bounding_box(&self, node: NodeId) -> Option<Rect>;

    /// Outer box relative to the offset parent. `None` for the document root.
    fn layout_box(&self, node: NodeId) -> Option<Rect>;

    fn scroll_offset(&self, node: NodeId) -> Vec2;

    fn computed_style(&self, node: NodeId, property: StyleProperty) -> Option<String>;

    fn inline_style(&self, node: NodeId, property: StyleProperty) -> Option<String>;

    fn set_style(&mut self, node: NodeId, style: &StyleMap);

    fn focus(&mut self, node: NodeId);

    /// Move `node` so it becomes the previous sibling of `reference`.
    fn insert_before(&mut self, node: NodeId, reference: NodeId);

    /// Move `node` so it becomes the next sibling of `reference`.
    fn insert_after(&mut self, node: NodeId, reference: NodeId);

    /// Detached deep copy.
    fn clone_node(&mut self, node: NodeId) -> NodeId;

    fn remove(&mut self, node: NodeId);

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn node_mark(&self, node: NodeId) -> NodeMark;

    fn set_node_mark(&mut self, node: NodeId, mark: NodeMark);
}
