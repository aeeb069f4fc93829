//! In-memory `Surface` implementation.
//!
//! Backs native hosts and the test suites the way a DOM bridge backs the
//! browser host: a flat arena of nodes with parent/child links. Containers
//! created with [`MemorySurface::container`] count as mounted roots for
//! attachment checks.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use crate::surface::{NodeId, Surface, SurfaceError};

#[derive(Debug, Clone, Default)]
struct NodeData {
    tag: SmolStr,
    text: String,
    attrs: BTreeMap<SmolStr, SmolStr>,
    classes: Vec<SmolStr>,
    styles: BTreeMap<SmolStr, SmolStr>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    root: bool,
}

/// Arena-backed node tree.
#[derive(Debug, Default)]
pub struct MemorySurface {
    nodes: Vec<NodeData>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a container that counts as a mounted root. Nodes appended
    /// under it (transitively) report as attached.
    pub fn container(&mut self) -> NodeId {
        let id = self.create_element("div");
        self.nodes[id.0 as usize].root = true;
        id
    }

    /// Child handles of a node, in order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.get(node).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Parent handle, if the node is attached to one.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.get(node).and_then(|n| n.parent)
    }

    fn get(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0 as usize)
    }

    fn get_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        self.nodes.get_mut(node.0 as usize)
    }

    fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.get(node).and_then(|n| n.parent) else {
            return;
        };
        if let Some(p) = self.get_mut(parent) {
            p.children.retain(|c| *c != node);
        }
        if let Some(n) = self.get_mut(node) {
            n.parent = None;
        }
    }
}

impl Surface for MemorySurface {
    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(NodeData {
            tag: SmolStr::new(tag),
            ..NodeData::default()
        });
        id
    }

    fn tag(&self, node: NodeId) -> SmolStr {
        self.get(node).map(|n| n.tag.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.get_mut(node) {
            n.text = text.to_owned();
        }
    }

    fn text(&self, node: NodeId) -> String {
        self.get(node).map(|n| n.text.clone()).unwrap_or_default()
    }

    fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.get_mut(node) {
            n.attrs.insert(SmolStr::new(name), SmolStr::new(value));
        }
    }

    fn attr(&self, node: NodeId, name: &str) -> Option<SmolStr> {
        self.get(node).and_then(|n| n.attrs.get(name).cloned())
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.get_mut(node) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(SmolStr::new(class));
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.get_mut(node) {
            n.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.get(node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        if let Some(n) = self.get_mut(node) {
            n.styles.insert(SmolStr::new(property), SmolStr::new(value));
        }
    }

    fn style(&self, node: NodeId, property: &str) -> Option<SmolStr> {
        self.get(node).and_then(|n| n.styles.get(property).cloned())
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.detach(child);
        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    fn is_attached(&self, node: NodeId) -> bool {
        let mut current = node;
        loop {
            let Some(data) = self.get(current) else {
                return false;
            };
            if data.root {
                return true;
            }
            match data.parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn replace(&mut self, old: NodeId, new: NodeId) -> Result<(), SurfaceError> {
        if self.get(new).is_none() {
            return Err(SurfaceError::UnknownNode(new));
        }
        let parent = self
            .get(old)
            .ok_or(SurfaceError::UnknownNode(old))?
            .parent
            .ok_or(SurfaceError::Detached(old))?;

        self.detach(new);
        let Some(p) = self.get_mut(parent) else {
            return Err(SurfaceError::Detached(old));
        };
        let Some(idx) = p.children.iter().position(|c| *c == old) else {
            return Err(SurfaceError::Detached(old));
        };
        p.children[idx] = new;
        if let Some(n) = self.get_mut(new) {
            n.parent = Some(parent);
        }
        if let Some(o) = self.get_mut(old) {
            o.parent = None;
        }
        Ok(())
    }
}
