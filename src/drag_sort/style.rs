use egui::{Pos2, Vec2};

use super::host::DragHost;
use super::types::NodeId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleProperty {
    Position,
    ZIndex,
    Left,
    Top,
    Width,
    Height,
    Cursor,
    Visibility,
}

impl StyleProperty {
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::ZIndex => "z-index",
            Self::Left => "left",
            Self::Top => "top",
            Self::Width => "width",
            Self::Height => "height",
            Self::Cursor => "cursor",
            Self::Visibility => "visibility",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    /// Any textual CSS value, including the empty string ("unset inline value").
    Keyword(String),
    Px(f32),
    Integer(i32),
}

impl StyleValue {
    pub fn keyword(value: impl Into<String>) -> Self {
        Self::Keyword(value.into())
    }
}

/// An ordered set of style assignments. Setting a property twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleMap {
    entries: Vec<(StyleProperty, StyleValue)>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, property: StyleProperty, value: StyleValue) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: StyleProperty, value: StyleValue) {
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == property) {
            entry.1 = value;
        } else {
            self.entries.push((property, value));
        }
    }

    pub fn get(&self, property: StyleProperty) -> Option<&StyleValue> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (StyleProperty, StyleValue)> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a StyleMap {
    type Item = &'a (StyleProperty, StyleValue);
    type IntoIter = std::slice::Iter<'a, (StyleProperty, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Style and geometry of the dragged element, captured once when a gesture arms.
///
/// `layout` is the position relative to the offset parent (what `left`/`top` address), and
/// `document` is the document-relative origin. Their difference is fixed for the whole gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct OriginalStyle {
    pub position: String,
    pub z_index: String,
    pub layout: Pos2,
    pub document: Pos2,

    /// Inline values, possibly empty.
    pub width: String,
    pub height: String,

    pub computed_width: String,
    pub computed_height: String,
    pub cursor: String,
}

impl OriginalStyle {
    pub fn capture(host: &dyn DragHost, node: NodeId) -> Self {
        let computed = |property| host.computed_style(node, property).unwrap_or_default();
        let inline = |property| host.inline_style(node, property).unwrap_or_default();

        Self {
            position: computed(StyleProperty::Position),
            z_index: computed(StyleProperty::ZIndex),
            layout: host.layout_box(node).map_or(Pos2::ZERO, |r| r.min),
            document: host.bounding_box(node).map_or(Pos2::ZERO, |r| r.min),
            width: inline(StyleProperty::Width),
            height: inline(StyleProperty::Height),
            computed_width: computed(StyleProperty::Width),
            computed_height: computed(StyleProperty::Height),
            cursor: computed(StyleProperty::Cursor),
        }
    }

    /// Document origin minus layout origin.
    pub fn origin_delta(&self) -> Vec2 {
        self.document - self.layout
    }

    /// Absolute positioning pinned at the captured visual location and size.
    pub fn pinned(&self) -> StyleMap {
        StyleMap::new()
            .with(StyleProperty::Position, StyleValue::keyword("absolute"))
            .with(StyleProperty::Left, StyleValue::Px(self.layout.x))
            .with(StyleProperty::Top, StyleValue::Px(self.layout.y))
            .with(StyleProperty::Width, StyleValue::keyword(&self.computed_width))
            .with(StyleProperty::Height, StyleValue::keyword(&self.computed_height))
    }

    /// Every captured property, verbatim.
    pub fn restore(&self) -> StyleMap {
        StyleMap::new()
            .with(StyleProperty::Position, StyleValue::keyword(&self.position))
            .with(StyleProperty::ZIndex, StyleValue::keyword(&self.z_index))
            .with(StyleProperty::Left, StyleValue::Px(self.layout.x))
            .with(StyleProperty::Top, StyleValue::Px(self.layout.y))
            .with(StyleProperty::Width, StyleValue::keyword(&self.width))
            .with(StyleProperty::Height, StyleValue::keyword(&self.height))
            .with(StyleProperty::Cursor, StyleValue::keyword(&self.cursor))
    }
}
