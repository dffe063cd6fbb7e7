// ui_core/src/host/headless_host.rs
use std::collections::HashMap;
use std::sync::Mutex;
use crate::host::visual_host::{HostNodeId, VisualHost};

/// One record in the headless scene graph.
struct HostNode {
    name: String,
    layer: String,
    parent: Option<HostNodeId>,
    /// Sibling order is display order; index 0 draws first.
    children: Vec<HostNodeId>,
}

#[derive(Default)]
struct Graph {
    nodes: HashMap<HostNodeId, HostNode>,
    /// Canned child content spawned under nodes created with a matching name.
    prefabs: HashMap<String, Vec<String>>,
    next_id: usize,
}

impl Graph {
    fn alloc(&mut self, parent: Option<HostNodeId>, name: &str) -> HostNodeId {
        self.next_id += 1;
        let id = HostNodeId(self.next_id);

        self.nodes.insert(id, HostNode {
            name: name.to_string(),
            layer: String::new(),
            parent,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            if let Some(record) = self.nodes.get_mut(&parent) {
                record.children.push(id);
            }
        }
        id
    }

    fn remove_subtree(&mut self, node: HostNodeId) {
        if let Some(record) = self.nodes.remove(&node) {
            for child in record.children {
                self.remove_subtree(child);
            }
        }
    }
}

/// In-memory host used by the tests and the demo binary. Behaves like an
/// engine scene graph: ordered siblings, recursive destroy, and a prefab
/// table so `create_node` can materialize canned child content the way an
/// engine instantiates a prefab.
#[derive(Default)]
pub struct HeadlessHost {
    inner: Mutex<Graph>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register canned child content for nodes created under `name`.
    pub fn define_prefab(&self, name: &str, children: &[&str]) {
        let mut graph = self.inner.lock().unwrap();
        graph.prefabs.insert(
            name.to_string(),
            children.iter().map(|child| child.to_string()).collect(),
        );
    }

    /// Returns true while `node` is part of the graph.
    pub fn node_exists(&self, node: HostNodeId) -> bool {
        self.inner.lock().unwrap().nodes.contains_key(&node)
    }

    pub fn name_of(&self, node: HostNodeId) -> Option<String> {
        let graph = self.inner.lock().unwrap();
        graph.nodes.get(&node).map(|record| record.name.clone())
    }

    pub fn layer_of(&self, node: HostNodeId) -> Option<String> {
        let graph = self.inner.lock().unwrap();
        graph.nodes.get(&node).map(|record| record.layer.clone())
    }

    /// Children of `node` in display order.
    pub fn children_of(&self, node: HostNodeId) -> Vec<HostNodeId> {
        let graph = self.inner.lock().unwrap();
        graph
            .nodes
            .get(&node)
            .map(|record| record.children.clone())
            .unwrap_or_default()
    }

    /// Total number of live nodes in the graph.
    pub fn live_count(&self) -> usize {
        self.inner.lock().unwrap().nodes.len()
    }
}

impl VisualHost for HeadlessHost {
    fn create_node(&self, parent: Option<HostNodeId>, name: &str) -> Result<HostNodeId, String> {
        let mut graph = self.inner.lock().unwrap();

        if let Some(parent) = parent {
            if !graph.nodes.contains_key(&parent) {
                return Err(format!("No live parent for host node '{name}'."));
            }
        }

        let id = graph.alloc(parent, name);

        // Spawn the prefab content, the way an engine instantiates
        // the canned children of a prefab asset.
        if let Some(children) = graph.prefabs.get(name).cloned() {
            for child in children {
                graph.alloc(Some(id), &child);
            }
        }

        Ok(id)
    }

    fn destroy_node(&self, node: HostNodeId) {
        let mut graph = self.inner.lock().unwrap();

        // Already gone: no-op.
        let parent = match graph.nodes.get(&node) {
            Some(record) => record.parent,
            None => return,
        };

        if let Some(parent) = parent {
            if let Some(parent_record) = graph.nodes.get_mut(&parent) {
                parent_record.children.retain(|child| *child != node);
            }
        }

        graph.remove_subtree(node);
    }

    fn find_child(&self, parent: HostNodeId, name: &str) -> Option<HostNodeId> {
        let graph = self.inner.lock().unwrap();
        let record = graph.nodes.get(&parent)?;

        record
            .children
            .iter()
            .copied()
            .find(|child| graph.nodes.get(child).is_some_and(|c| c.name == name))
    }

    fn set_layer(&self, node: HostNodeId, layer: &str) {
        let mut graph = self.inner.lock().unwrap();
        if let Some(record) = graph.nodes.get_mut(&node) {
            record.layer = layer.to_string();
        }
    }

    fn reorder_first(&self, node: HostNodeId) {
        let mut graph = self.inner.lock().unwrap();

        let Some(parent) = graph.nodes.get(&node).and_then(|record| record.parent) else {
            return;
        };

        if let Some(parent_record) = graph.nodes.get_mut(&parent) {
            parent_record.children.retain(|child| *child != node);
            parent_record.children.insert(0, node);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_find_children() {
        let host = HeadlessHost::new();
        let root = host.create_node(None, "Root").unwrap();
        let panel = host.create_node(Some(root), "Panel").unwrap();

        assert_eq!(host.find_child(root, "Panel"), Some(panel));
        assert_eq!(host.find_child(root, "Missing"), None);
    }

    #[test]
    fn create_under_a_destroyed_parent_fails() {
        let host = HeadlessHost::new();
        let root = host.create_node(None, "Root").unwrap();
        host.destroy_node(root);

        assert!(host.create_node(Some(root), "Panel").is_err());
    }

    #[test]
    fn destroy_removes_the_whole_subtree() {
        let host = HeadlessHost::new();
        let root = host.create_node(None, "Root").unwrap();
        let panel = host.create_node(Some(root), "Panel").unwrap();
        let button = host.create_node(Some(panel), "Button").unwrap();

        host.destroy_node(panel);

        assert!(host.node_exists(root));
        assert!(!host.node_exists(panel));
        assert!(!host.node_exists(button));
        // Second destroy is a no-op.
        host.destroy_node(panel);
        assert_eq!(host.live_count(), 1);
    }

    #[test]
    fn prefab_content_spawns_with_the_node() {
        let host = HeadlessHost::new();
        host.define_prefab("UILogin", &["Account", "Btn_Login"]);

        let window = host.create_node(None, "UILogin").unwrap();

        assert!(host.find_child(window, "Account").is_some());
        assert!(host.find_child(window, "Btn_Login").is_some());
        assert_eq!(host.children_of(window).len(), 2);
    }

    #[test]
    fn reorder_first_moves_the_node_to_the_front() {
        let host = HeadlessHost::new();
        let root = host.create_node(None, "Root").unwrap();
        let first = host.create_node(Some(root), "First").unwrap();
        let second = host.create_node(Some(root), "Second").unwrap();

        assert_eq!(host.children_of(root), vec![first, second]);
        host.reorder_first(second);
        assert_eq!(host.children_of(root), vec![second, first]);
    }

    #[test]
    fn set_layer_tags_the_node() {
        let host = HeadlessHost::new();
        let root = host.create_node(None, "Root").unwrap();

        host.set_layer(root, "UI");
        assert_eq!(host.layer_of(root), Some("UI".to_string()));
    }
}
