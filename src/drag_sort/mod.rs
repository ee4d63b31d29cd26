use std::collections::VecDeque;
use std::sync::Arc;

use egui::{Pos2, Vec2};

mod clamp;
mod debug;
mod events;
mod geometry;
mod host;
mod options;
mod positioner;
mod registry;
mod session;
mod style;
mod tracker;
mod types;

#[cfg(test)]
mod fake_dom;

pub use events::{DragEventKind, DragObserver, DragPayload, EventLog, LoggedEvent};
pub use host::{DragHost, NodeMark};
pub use options::{CanDrag, ConfigError, DragConfig, DragInstanceConfig, DragSortOptions};
pub use registry::{DragInstance, Resolution};
pub use style::{OriginalStyle, StyleMap, StyleProperty, StyleValue};
pub use types::{
    Axis, EventResponse, InstanceId, NodeId, Phase, Placement, PointerButton, PointerEvent,
};

use clamp::{Containment, clamp_to_containment};
use geometry::center_signs;
use positioner::placement_for;
use registry::SessionRegistry;
use session::{DragSession, Gesture};
use tracker::{ZoneQuery, ZoneStep, track_drop_zone};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Release {
    /// Pointer up: drop onto the active zone, if any.
    Commit,

    /// Abort: leave the active zone and revert.
    Cancel,
}

/// The drag-and-sort coordinator: owns every drag-enabled instance and the one live session.
///
/// Feed it abstract [`PointerEvent`]s through [`Self::handle_event`]. All work for one event runs
/// to completion before the call returns; observers are notified synchronously, in order.
///
/// Starts closed: call [`Self::open`] to start listening.
#[derive(Debug, Default)]
pub struct DragSort {
    options: DragSortOptions,
    registry: SessionRegistry,
    session: DragSession,
    open: bool,
    tick: u64,
    debug_log: VecDeque<String>,
}

impl DragSort {
    pub fn new(options: DragSortOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn options(&self) -> &DragSortOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut DragSortOptions {
        &mut self.options
    }

    /// Start reacting to pointer events. Idempotent.
    pub fn open(&mut self) {
        if !self.open {
            log::debug!("drag-sort listening");
            self.open = true;
        }
    }

    /// Stop reacting to pointer events. Idempotent.
    pub fn close(&mut self) {
        if self.open {
            log::debug!("drag-sort stopped listening");
            self.open = false;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Register a drag-enabled instance and tag its elements in the host.
    ///
    /// # Errors
    /// If the config does not normalize, see [`DragConfig::normalize`].
    pub fn add_instance(
        &mut self,
        host: &mut dyn DragHost,
        config: DragConfig,
    ) -> Result<InstanceId, ConfigError> {
        let config = config.normalize()?;
        Ok(self.registry.create(host, config))
    }

    pub fn instance(&self, id: InstanceId) -> Option<&DragInstance> {
        self.registry.get(id)
    }

    pub fn instance_count(&self) -> usize {
        self.registry.len()
    }

    /// Explicit runtime override. Returns `false` for an unknown instance.
    pub fn set_disabled(&mut self, id: InstanceId, disabled: bool) -> bool {
        self.registry.set_disabled(id, disabled)
    }

    /// Which instance would a pointer-down on `target` arm?
    pub fn resolve(&self, host: &dyn DragHost, target: NodeId) -> Resolution {
        registry::resolve(host, target)
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn active_instance(&self) -> Option<InstanceId> {
        self.session.gesture().map(|g| g.instance)
    }

    pub fn dragged_element(&self) -> Option<NodeId> {
        self.session.gesture().map(|g| g.element)
    }

    pub fn placeholder(&self) -> Option<NodeId> {
        self.session.gesture().map(|g| g.placeholder)
    }

    pub fn active_drop_zone(&self) -> Option<NodeId> {
        self.session.gesture().and_then(|g| g.active_zone)
    }

    pub fn original_style(&self) -> Option<&OriginalStyle> {
        self.session.gesture().map(|g| &g.original_style)
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.session.gesture().map(|g| &g.payload)
    }

    pub fn handle_event(
        &mut self,
        host: &mut dyn DragHost,
        observer: &mut dyn DragObserver,
        event: PointerEvent,
    ) -> EventResponse {
        if !self.open {
            return EventResponse::default();
        }
        self.tick = self.tick.wrapping_add(1);

        let phase = self.session.phase();
        if matches!(event, PointerEvent::Down { .. }) && phase != Phase::Idle {
            log::debug!("ignoring pointer down while {phase:?}");
            return EventResponse::default();
        }

        let prevent_default = match (event, phase) {
            (
                PointerEvent::Down {
                    button: PointerButton::Primary,
                    target,
                    pos,
                },
                Phase::Idle,
            ) => self.arm(host, target, pos),
            (PointerEvent::Move { .. }, Phase::Armed) => {
                self.start(host, observer);
                true
            }
            (PointerEvent::Move { pos }, Phase::Dragging) => {
                self.drag(host, observer, pos);
                true
            }
            (PointerEvent::Up | PointerEvent::Cancel, Phase::Armed) => {
                self.click_release(host);
                true
            }
            (PointerEvent::Up, Phase::Dragging) => {
                self.release(host, observer, Release::Commit);
                true
            }
            (PointerEvent::Cancel, Phase::Dragging) => {
                self.release(host, observer, Release::Cancel);
                true
            }
            _ => false,
        };

        EventResponse { prevent_default }
    }

    /// `Idle -> Armed`. Returns `true` if a gesture was armed.
    fn arm(&mut self, host: &mut dyn DragHost, target: NodeId, pos: Pos2) -> bool {
        let (instance, element) = match registry::resolve(host, target) {
            Resolution::NotFound => return false,
            Resolution::Disabled => {
                log::trace!("drag vetoed for {target:?}");
                return false;
            }
            Resolution::Existing { node, id } => (id, node),
            Resolution::LazyCreate { node, config } => {
                match self.registry.create_lazy(host, node, config) {
                    Ok(id) => (id, node),
                    Err(err) => {
                        log::warn!("ignoring lazy drag config on {node:?}: {err}");
                        return false;
                    }
                }
            }
        };

        match self.registry.get(instance) {
            None => {
                log::warn!("{element:?} is tagged with unknown instance {instance:?}");
                return false;
            }
            Some(i) if i.is_disabled() => return false,
            Some(_) => {}
        }
        let Some(config) = self.registry.config(instance) else {
            return false;
        };
        if !config.can_drag(target) {
            log::trace!("{instance:?} refused to drag from {target:?}");
            return false;
        }

        let original_style = OriginalStyle::capture(host, element);

        let placeholder = config.placeholder().unwrap_or_else(|| {
            let clone = host.clone_node(element);
            host.set_style(
                clone,
                &StyleMap::new().with(StyleProperty::Visibility, StyleValue::keyword("hidden")),
            );
            clone
        });
        host.insert_after(placeholder, element);

        let pointer_offset = pos - original_style.document;
        host.set_style(element, &original_style.pinned());

        let id = self.session.next_gesture_id();
        log::debug!("gesture {id} armed: {instance:?} element={element:?}");
        self.debug_log_event(format!(
            "ARM gesture={id} instance={instance:?} element={element:?} placeholder={placeholder:?}"
        ));

        self.session.begin(Gesture {
            id,
            instance,
            config,
            element,
            original_style,
            placeholder,
            active_zone: None,
            pointer_offset,
            payload: DragPayload::default(),
            dragging: false,
        });
        true
    }

    /// `Armed -> Dragging`.
    fn start(&mut self, host: &mut dyn DragHost, observer: &mut dyn DragObserver) {
        let Some(g) = self.session.gesture_mut() else {
            return;
        };

        host.set_style(
            g.element,
            &StyleMap::new()
                .with(StyleProperty::ZIndex, StyleValue::Integer(g.config.z_index()))
                .with(StyleProperty::Cursor, StyleValue::keyword(g.config.drag_cursor())),
        );
        host.focus(g.element);

        g.payload.clear();
        g.dragging = true;
        observer.drag_start(g.instance, &mut g.payload, g.element);

        let line = format!("START gesture={} payload_keys={:?}", g.id, g.payload.keys());
        log::debug!("gesture {} started dragging", g.id);
        self.debug_log_event(line);
    }

    /// One `Dragging` tick: move, track zones, preview the insertion point.
    fn drag(&mut self, host: &mut dyn DragHost, observer: &mut dyn DragObserver, pos: Pos2) {
        let Some(g) = self.session.gesture_mut() else {
            return;
        };
        let config = Arc::clone(&g.config);

        let containment = Containment::measure(host, config.containment());
        let size = host.bounding_box(g.element).map_or(Vec2::ZERO, |r| r.size());
        let clamped = clamp_to_containment(
            pos - g.pointer_offset,
            size,
            &containment,
            config.axis(),
            g.original_style.origin_delta(),
        );

        let mut style = StyleMap::new();
        if let Some(left) = clamped.left {
            style.set(StyleProperty::Left, StyleValue::Px(left));
        }
        if let Some(top) = clamped.top {
            style.set(StyleProperty::Top, StyleValue::Px(top));
        }
        if !style.is_empty() {
            host.set_style(g.element, &style);
        }

        let before = g.active_zone;
        if let Some(zones) = config.drops() {
            track_zones(host, observer, g, zones);
        }
        observer.drag(g.instance, g.element, g.active_zone);

        if before != g.active_zone {
            let line = format!("ZONE gesture={} {before:?} -> {:?}", g.id, g.active_zone);
            self.debug_log_event(line);
        }
    }

    /// `Armed -> Idle`: it was a click.
    fn click_release(&mut self, host: &mut dyn DragHost) {
        let Some(g) = self.session.end() else {
            return;
        };
        restore(host, &g, false);

        log::debug!("gesture {} released before dragging", g.id);
        self.debug_log_event(format!("CLICK gesture={}", g.id));
    }

    /// `Dragging -> Idle`.
    fn release(
        &mut self,
        host: &mut dyn DragHost,
        observer: &mut dyn DragObserver,
        release: Release,
    ) {
        let Some(mut g) = self.session.end() else {
            return;
        };

        host.set_style(
            g.element,
            &StyleMap::new().with(
                StyleProperty::Cursor,
                StyleValue::keyword(&self.options.release_cursor),
            ),
        );
        host.focus(g.element);

        let drop_zone = match release {
            Release::Commit => g.active_zone,
            Release::Cancel => {
                if let Some(zone) = g.active_zone.take() {
                    observer.drag_leave(g.instance, g.element, zone);
                }
                None
            }
        };

        if let Some(zone) = drop_zone {
            observer.drop(g.instance, &g.payload, g.element, zone);
        }
        restore(host, &g, drop_zone.is_some());
        observer.drag_end(g.instance, Some(g.element), drop_zone);

        log::debug!("gesture {} ended ({release:?}) on {drop_zone:?}", g.id);
        self.debug_log_event(format!(
            "END gesture={} release={release:?} zone={drop_zone:?}",
            g.id
        ));
    }
}

fn track_zones(
    host: &mut dyn DragHost,
    observer: &mut dyn DragObserver,
    g: &mut Gesture,
    zones: &[NodeId],
) {
    let hotspot = host.bounding_box(g.element).map_or(Pos2::ZERO, |r| r.min) + g.pointer_offset;
    let decision = track_drop_zone(
        host,
        &ZoneQuery {
            zones,
            placeholder: Some(g.placeholder),
            dragged: g.element,
            hotspot,
            active: g.active_zone,
        },
    );
    log::trace!("gesture {} hotspot={hotspot:?} {:?}", g.id, decision.step);

    if decision.over_drop_zone {
        let cursor = StyleValue::keyword(g.config.drop_cursor());
        host.set_style(g.element, &StyleMap::new().with(StyleProperty::Cursor, cursor));
        host.focus(g.element);
    }

    match decision.step {
        ZoneStep::Nothing => {}
        ZoneStep::Over(zone) => observer.drag_over(g.instance, g.element, zone),
        ZoneStep::Entered { left, entered } => {
            if let Some(left) = left {
                observer.drag_leave(g.instance, g.element, left);
            }
            g.active_zone = Some(entered);
            observer.drag_enter(g.instance, g.element, entered);
        }
        ZoneStep::Left(zone) => {
            host.set_style(
                g.element,
                &StyleMap::new()
                    .with(StyleProperty::Cursor, StyleValue::keyword(g.config.drag_cursor())),
            );
            host.focus(g.element);
            g.active_zone = None;
            observer.drag_leave(g.instance, g.element, zone);
        }
        ZoneStep::Stayed(zone) => reposition_placeholder(host, g, zone),
    }
}

/// Move the placeholder before/after `zone`, depending on where the dragged element's centre is.
fn reposition_placeholder(host: &mut dyn DragHost, g: &Gesture, zone: NodeId) {
    // The document root has no siblings to sort among.
    if host.parent(zone).is_none() {
        return;
    }
    let Some(element_box) = host.layout_box(g.element) else {
        return;
    };
    let signs = center_signs(host.layout_box(zone), element_box);

    match placement_for(g.config.axis(), signs) {
        Some(Placement::Before) => host.insert_before(g.placeholder, zone),
        Some(Placement::After) => host.insert_after(g.placeholder, zone),
        None => {}
    }
}

/// Shared tail of every exit path: land the element, restore its style, drop the placeholder.
fn restore(host: &mut dyn DragHost, g: &Gesture, land_on_placeholder: bool) {
    if land_on_placeholder {
        host.insert_after(g.element, g.placeholder);
    }
    host.set_style(g.element, &g.original_style.restore());
    host.remove(g.placeholder);
}
