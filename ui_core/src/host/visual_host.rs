// ui_core/src/host/visual_host.rs

/// Opaque reference to a node in the host engine's scene graph. The UI tree
/// never interprets it beyond handing it back to the host.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct HostNodeId(pub usize);

impl HostNodeId {
    /// A sentinel value that can be used for optionals.
    pub fn null() -> Self {
        HostNodeId(0)
    }
}

/// What the host engine must provide for the UI tree to manage its visual
/// nodes. Implementations use interior mutability; the scene graph is only
/// ever touched from the main update thread.
pub trait VisualHost: Send + Sync {
    /// Create a fresh visual node called `name` under `parent`
    /// (`None` parents it at the scene root).
    fn create_node(&self, parent: Option<HostNodeId>, name: &str) -> Result<HostNodeId, String>;

    /// Destroy `node` together with its host-side subtree. Destroying a node
    /// that is already gone is a no-op.
    fn destroy_node(&self, node: HostNodeId);

    /// Resolve an existing child of `parent` by name.
    fn find_child(&self, parent: HostNodeId, name: &str) -> Option<HostNodeId>;

    /// Tag `node` with a named layer.
    fn set_layer(&self, node: HostNodeId, layer: &str);

    /// Move `node` to the front of its siblings in display order.
    fn reorder_first(&self, node: HostNodeId);
}
