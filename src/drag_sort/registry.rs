use std::sync::Arc;

use super::host::{DragHost, NodeMark};
use super::options::{ConfigError, DragConfig, DragInstanceConfig};
use super::types::{InstanceId, NodeId};

/// One drag-enabled instance.
#[derive(Clone, Debug)]
pub struct DragInstance {
    id: InstanceId,
    config: Arc<DragInstanceConfig>,
    disabled: bool,
}

impl DragInstance {
    pub fn id(&self) -> InstanceId {
        self.id
    }

    pub fn config(&self) -> &DragInstanceConfig {
        &self.config
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }
}

/// Outcome of walking from a pointer target up through its ancestors.
#[derive(Clone, Debug)]
pub enum Resolution {
    NotFound,

    /// An ancestor (or the target) vetoes dragging.
    Disabled,

    LazyCreate { node: NodeId, config: DragConfig },

    Existing { node: NodeId, id: InstanceId },
}

/// Owns every [`DragInstance`], keyed by a monotonically increasing id.
#[derive(Debug, Default)]
pub(super) struct SessionRegistry {
    next_id: u64,
    instances: ahash::HashMap<InstanceId, DragInstance>,
}

impl SessionRegistry {
    pub(super) fn create(
        &mut self,
        host: &mut dyn DragHost,
        config: DragInstanceConfig,
    ) -> InstanceId {
        let id = InstanceId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);

        for &node in config.elements() {
            host.set_node_mark(node, NodeMark::Instance(id));
        }

        log::debug!("created drag instance {id:?} for {:?}", config.elements());
        self.instances.insert(
            id,
            DragInstance {
                id,
                disabled: config.initially_disabled(),
                config: Arc::new(config),
            },
        );
        id
    }

    /// Instantiate a config that was attached lazily to `node`.
    pub(super) fn create_lazy(
        &mut self,
        host: &mut dyn DragHost,
        node: NodeId,
        config: DragConfig,
    ) -> Result<InstanceId, ConfigError> {
        let config = config.normalize()?.with_element(node);
        Ok(self.create(host, config))
    }

    pub(super) fn get(&self, id: InstanceId) -> Option<&DragInstance> {
        self.instances.get(&id)
    }

    pub(super) fn config(&self, id: InstanceId) -> Option<Arc<DragInstanceConfig>> {
        self.instances.get(&id).map(|instance| Arc::clone(&instance.config))
    }

    /// Returns `false` if there is no such instance.
    pub(super) fn set_disabled(&mut self, id: InstanceId, disabled: bool) -> bool {
        match self.instances.get_mut(&id) {
            Some(instance) => {
                instance.disabled = disabled;
                true
            }
            None => false,
        }
    }

    pub(super) fn len(&self) -> usize {
        self.instances.len()
    }
}

/// Find the innermost node (starting at `target`) that carries a registry mark.
pub(super) fn resolve(host: &dyn DragHost, target: NodeId) -> Resolution {
    let mut cursor = Some(target);
    while let Some(node) = cursor {
        match host.node_mark(node) {
            NodeMark::Unmarked => cursor = host.parent(node),
            NodeMark::Veto => return Resolution::Disabled,
            NodeMark::Lazy(config) => return Resolution::LazyCreate { node, config },
            NodeMark::Instance(id) => return Resolution::Existing { node, id },
        }
    }
    Resolution::NotFound
}
