//! A tiny in-memory element tree implementing [`DragHost`], for tests.

use std::collections::BTreeMap;

use egui::{Pos2, Rect, Vec2};

use super::host::{DragHost, NodeMark};
use super::style::{StyleMap, StyleProperty, StyleValue};
use super::types::NodeId;

#[derive(Clone, Debug)]
struct FakeNode {
    parent: Option<NodeId>,
    children: Vec<NodeId>,

    /// Relative to the offset parent.
    layout: Rect,

    /// Document position of the offset parent.
    offset_origin: Vec2,

    scroll: Vec2,
    computed: BTreeMap<StyleProperty, String>,
    inline: StyleMap,
    mark: NodeMark,
}

impl FakeNode {
    fn new(parent: Option<NodeId>, layout: Rect) -> Self {
        Self {
            parent,
            children: Vec::new(),
            layout,
            offset_origin: Vec2::ZERO,
            scroll: Vec2::ZERO,
            computed: BTreeMap::new(),
            inline: StyleMap::new(),
            mark: NodeMark::Unmarked,
        }
    }
}

fn css_text(value: &StyleValue) -> String {
    match value {
        StyleValue::Keyword(s) => s.clone(),
        StyleValue::Px(px) => format!("{px}px"),
        StyleValue::Integer(i) => i.to_string(),
    }
}

#[derive(Debug)]
pub(super) struct FakeDom {
    nodes: BTreeMap<NodeId, FakeNode>,
    next_id: u64,
    pub(super) focused: Option<NodeId>,
    pub(super) removed: Vec<NodeId>,
}

impl FakeDom {
    pub(super) fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(NodeId::DOCUMENT, FakeNode::new(None, Rect::NOTHING));
        Self {
            nodes,
            next_id: 1,
            focused: None,
            removed: Vec::new(),
        }
    }

    /// Append a child. `rect` is in document coordinates (the offset parent starts at the origin).
    pub(super) fn add(&mut self, parent: NodeId, rect: Rect) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, FakeNode::new(Some(parent), rect));
        self.node_mut(parent).children.push(id);
        id
    }

    fn node(&self, id: NodeId) -> &FakeNode {
        &self.nodes[&id]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut FakeNode {
        self.nodes.get_mut(&id).expect("unknown fake node")
    }

    /// Place the node's offset parent at `origin`, shifting its document box accordingly.
    pub(super) fn set_offset_origin(&mut self, node: NodeId, origin: Vec2) {
        self.node_mut(node).offset_origin = origin;
    }

    pub(super) fn set_scroll(&mut self, node: NodeId, scroll: Vec2) {
        self.node_mut(node).scroll = scroll;
    }

    pub(super) fn set_computed(&mut self, node: NodeId, property: StyleProperty, value: &str) {
        self.node_mut(node).computed.insert(property, value.to_owned());
    }

    pub(super) fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node).children.clone()
    }

    pub(super) fn is_attached(&self, node: NodeId) -> bool {
        self.nodes.get(&node).is_some_and(|n| n.parent.is_some())
    }

    pub(super) fn style(&self, node: NodeId, property: StyleProperty) -> Option<StyleValue> {
        self.node(node).inline.get(property).cloned()
    }

    pub(super) fn top_left(&self, node: NodeId) -> Pos2 {
        let n = self.node(node);
        n.layout.min + n.offset_origin
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.node_mut(node).parent.take() {
            self.node_mut(parent).children.retain(|&c| c != node);
        }
    }

    fn insert_relative(&mut self, node: NodeId, reference: NodeId, after: bool) {
        // Like the DOM: a reference without a parent leaves `node` where it is.
        let Some(parent) = self.node(reference).parent else {
            return;
        };
        self.detach(node);
        let siblings = &mut self.node_mut(parent).children;
        let index = siblings
            .iter()
            .position(|&c| c == reference)
            .expect("reference is a child of its parent");
        siblings.insert(if after { index + 1 } else { index }, node);
        self.node_mut(node).parent = Some(parent);
    }
}

impl DragHost for FakeDom {
    fn bounding_box(&self, node: NodeId) -> Option<Rect> {
        if node.is_document() {
            return None;
        }
        let n = self.node(node);
        Some(n.layout.translate(n.offset_origin))
    }

    fn layout_box(&self, node: NodeId) -> Option<Rect> {
        if node.is_document() {
            return None;
        }
        Some(self.node(node).layout)
    }

    fn scroll_offset(&self, node: NodeId) -> Vec2 {
        self.node(node).scroll
    }

    fn computed_style(&self, node: NodeId, property: StyleProperty) -> Option<String> {
        let n = self.node(node);
        if let Some(value) = n.inline.get(property) {
            return Some(css_text(value));
        }
        if let Some(value) = n.computed.get(&property) {
            return Some(value.clone());
        }
        Some(match property {
            StyleProperty::Position => "static".to_owned(),
            StyleProperty::ZIndex | StyleProperty::Cursor => "auto".to_owned(),
            StyleProperty::Left | StyleProperty::Top => "0px".to_owned(),
            StyleProperty::Width => format!("{}px", n.layout.width()),
            StyleProperty::Height => format!("{}px", n.layout.height()),
            StyleProperty::Visibility => "visible".to_owned(),
        })
    }

    fn inline_style(&self, node: NodeId, property: StyleProperty) -> Option<String> {
        self.node(node).inline.get(property).map(css_text)
    }

    fn set_style(&mut self, node: NodeId, style: &StyleMap) {
        let n = self.node_mut(node);
        for (property, value) in style {
            match (property, value) {
                (StyleProperty::Left, StyleValue::Px(x)) => {
                    n.layout = Rect::from_min_size(Pos2::new(*x, n.layout.min.y), n.layout.size());
                }
                (StyleProperty::Top, StyleValue::Px(y)) => {
                    n.layout = Rect::from_min_size(Pos2::new(n.layout.min.x, *y), n.layout.size());
                }
                _ => {}
            }
            n.inline.set(*property, value.clone());
        }
    }

    fn focus(&mut self, node: NodeId) {
        self.focused = Some(node);
    }

    fn insert_before(&mut self, node: NodeId, reference: NodeId) {
        self.insert_relative(node, reference, false);
    }

    fn insert_after(&mut self, node: NodeId, reference: NodeId) {
        self.insert_relative(node, reference, true);
    }

    fn clone_node(&mut self, node: NodeId) -> NodeId {
        let mut copy = self.node(node).clone();
        copy.parent = None;
        copy.children.clear();
        copy.mark = NodeMark::Unmarked;

        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, copy);
        id
    }

    fn remove(&mut self, node: NodeId) {
        self.detach(node);
        self.removed.push(node);
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    fn node_mark(&self, node: NodeId) -> NodeMark {
        self.node(node).mark.clone()
    }

    fn set_node_mark(&mut self, node: NodeId, mark: NodeMark) {
        self.node_mut(node).mark = mark;
    }
}
