use std::sync::Arc;

use itertools::Itertools as _;

use super::types::{Axis, NodeId};

/// Predicate deciding whether the node under the pointer may start a drag.
///
/// The default accepts everything.
#[derive(Clone, Default)]
pub struct CanDrag(Option<Arc<dyn Fn(NodeId) -> bool + Send + Sync>>);

impl CanDrag {
    pub fn new(predicate: impl Fn(NodeId) -> bool + Send + Sync + 'static) -> Self {
        Self(Some(Arc::new(predicate)))
    }

    pub fn accepts(&self, target: NodeId) -> bool {
        self.0.as_ref().is_none_or(|predicate| predicate(target))
    }
}

impl std::fmt::Debug for CanDrag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(_) => f.write_str("CanDrag(custom)"),
            None => f.write_str("CanDrag(any)"),
        }
    }
}

/// User-facing configuration of one drag-enabled instance.
///
/// Turned into a [`DragInstanceConfig`] by [`Self::normalize`] when the instance is created.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DragConfig {
    /// Elements that start a drag of themselves.
    pub elements: Vec<NodeId>,

    /// The dragged element is clamped inside this node's box. Defaults to the document.
    pub containment: NodeId,

    /// Caller-supplied placeholder. If `None`, a hidden clone of the dragged element is used.
    pub placeholder: Option<NodeId>,

    /// Candidate drop zones in document order (outer before inner).
    ///
    /// `None` disables drop-zone tracking entirely, including the placeholder-as-zone case.
    pub drops: Option<Vec<NodeId>>,

    pub disabled: bool,

    pub axis: Option<Axis>,

    /// Cursor while dragging outside any drop zone.
    pub drag_cursor: String,

    /// Cursor while the pointer is over a drop zone.
    pub drop_cursor: String,

    pub z_index: i32,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub can_drag: CanDrag,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
            containment: NodeId::DOCUMENT,
            placeholder: None,
            drops: None,
            disabled: false,
            axis: None,
            drag_cursor: "move".to_owned(),
            drop_cursor: "copy".to_owned(),
            z_index: 9999,
            can_drag: CanDrag::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    EmptyCursor { which: &'static str },
    DuplicateDropZone(NodeId),
    ContainmentIsDragged(NodeId),
    PlaceholderIsDragged(NodeId),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCursor { which } => write!(f, "{which} must not be empty"),
            Self::DuplicateDropZone(node) => {
                write!(f, "drop zone {node:?} is listed more than once")
            }
            Self::ContainmentIsDragged(node) => {
                write!(f, "containment {node:?} is also a draggable element")
            }
            Self::PlaceholderIsDragged(node) => {
                write!(f, "placeholder {node:?} is also a draggable element")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl DragConfig {
    /// Validate and normalize once, at instance creation.
    ///
    /// # Errors
    /// When the configuration is self-contradictory, see [`ConfigError`].
    pub fn normalize(self) -> Result<DragInstanceConfig, ConfigError> {
        if self.drag_cursor.is_empty() {
            return Err(ConfigError::EmptyCursor {
                which: "drag_cursor",
            });
        }
        if self.drop_cursor.is_empty() {
            return Err(ConfigError::EmptyCursor {
                which: "drop_cursor",
            });
        }
        if self.elements.contains(&self.containment) {
            return Err(ConfigError::ContainmentIsDragged(self.containment));
        }
        if let Some(placeholder) = self.placeholder.filter(|p| self.elements.contains(p)) {
            return Err(ConfigError::PlaceholderIsDragged(placeholder));
        }

        let drops = match self.drops {
            Some(drops) => {
                if let Some(dup) = drops.iter().duplicates().next() {
                    return Err(ConfigError::DuplicateDropZone(*dup));
                }
                // Deepest-nested candidates are tested first.
                Some(drops.into_iter().rev().collect())
            }
            None => None,
        };

        Ok(DragInstanceConfig {
            elements: self.elements.into_iter().unique().collect(),
            containment: self.containment,
            placeholder: self.placeholder,
            drops,
            initially_disabled: self.disabled,
            axis: self.axis,
            drag_cursor: self.drag_cursor,
            drop_cursor: self.drop_cursor,
            z_index: self.z_index,
            can_drag: self.can_drag,
        })
    }
}

/// A validated [`DragConfig`]. Read-only for the lifetime of the instance.
#[derive(Clone, Debug)]
pub struct DragInstanceConfig {
    elements: Vec<NodeId>,
    containment: NodeId,
    placeholder: Option<NodeId>,
    drops: Option<Vec<NodeId>>,
    initially_disabled: bool,
    axis: Option<Axis>,
    drag_cursor: String,
    drop_cursor: String,
    z_index: i32,
    can_drag: CanDrag,
}

impl DragInstanceConfig {
    pub fn elements(&self) -> &[NodeId] {
        &self.elements
    }

    pub fn containment(&self) -> NodeId {
        self.containment
    }

    pub fn placeholder(&self) -> Option<NodeId> {
        self.placeholder
    }

    /// Drop zones, deepest-nested first.
    pub fn drops(&self) -> Option<&[NodeId]> {
        self.drops.as_deref()
    }

    pub fn initially_disabled(&self) -> bool {
        self.initially_disabled
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    pub fn drag_cursor(&self) -> &str {
        &self.drag_cursor
    }

    pub fn drop_cursor(&self) -> &str {
        &self.drop_cursor
    }

    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    pub fn can_drag(&self, target: NodeId) -> bool {
        self.can_drag.accepts(target)
    }

    pub(super) fn with_element(mut self, node: NodeId) -> Self {
        if !self.elements.contains(&node) {
            self.elements.push(node);
        }
        self
    }
}

/// Options for [`super::DragSort`].
#[derive(Clone, Debug)]
pub struct DragSortOptions {
    /// Cursor applied to the dragged element on release, before drop and revert run.
    pub release_cursor: String,

    /// Record lifecycle transitions in an in-memory ring buffer.
    /// See [`super::DragSort::debug_log`].
    pub debug_event_log: bool,

    /// Max lines kept by the debug event log.
    pub debug_event_log_capacity: usize,
}

impl Default for DragSortOptions {
    fn default() -> Self {
        Self {
            release_cursor: "default".to_owned(),
            debug_event_log: false,
            debug_event_log_capacity: 256,
        }
    }
}
