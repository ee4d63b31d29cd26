//! Pointer-driven drag-and-sort for elements inside a bounded container.
//!
//! [`DragSort`] turns abstract pointer events into a drag gesture: it clamps the dragged element
//! into its containment, tracks which drop zone is under the pointer, previews the insertion
//! point with a placeholder and reverts or lands the element on release. The element tree itself
//! is reached through [`DragHost`].

#![forbid(unsafe_code)]

pub mod drag_sort;

pub use drag_sort::{
    Axis, CanDrag, ConfigError, DragConfig, DragEventKind, DragHost, DragInstance,
    DragInstanceConfig, DragObserver, DragPayload, DragSort, DragSortOptions, EventLog,
    EventResponse, InstanceId, LoggedEvent, NodeId, NodeMark, OriginalStyle, Phase, Placement,
    PointerButton, PointerEvent, Resolution, StyleMap, StyleProperty, StyleValue,
};
