//! Rendering-surface abstraction for block tools.
//!
//! These traits define the interface between block logic and platform-specific
//! rendering (browser DOM, native UI, in-memory). Tools build and mutate their
//! views exclusively through a `Surface`, never through a concrete toolkit.

use smol_str::SmolStr;
use thiserror::Error;

/// Opaque handle to a node owned by a [`Surface`].
///
/// Handles are minted by [`Surface::create_element`] and are only meaningful
/// on the surface that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) u32);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors from surface operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SurfaceError {
    /// The node has no parent container, so it cannot be swapped in place.
    #[error("node {0} is not attached to a container")]
    Detached(NodeId),

    /// The handle was not minted by this surface.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),
}

/// A tree of renderable nodes.
///
/// The contract is deliberately small: element creation, text content,
/// attributes, classes, inline styles, and parent/child structure. Read
/// accessors on a handle the surface does not know return empty defaults
/// rather than failing; the host guarantees tools only hold live handles.
pub trait Surface {
    /// Create a new detached element with the given tag name.
    fn create_element(&mut self, tag: &str) -> NodeId;

    /// Tag name the element was created with.
    fn tag(&self, node: NodeId) -> SmolStr;

    /// Replace the element's text content.
    fn set_text(&mut self, node: NodeId, text: &str);

    /// Current text content of the element.
    fn text(&self, node: NodeId) -> String;

    /// Set an attribute, replacing any previous value.
    fn set_attr(&mut self, node: NodeId, name: &str, value: &str);

    /// Read an attribute.
    fn attr(&self, node: NodeId, name: &str) -> Option<SmolStr>;

    /// Add a CSS class. Adding a class twice is a no-op.
    fn add_class(&mut self, node: NodeId, class: &str);

    /// Remove a CSS class if present.
    fn remove_class(&mut self, node: NodeId, class: &str);

    /// Check whether a CSS class is set.
    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Set an inline style property, replacing any previous value.
    fn set_style(&mut self, node: NodeId, property: &str, value: &str);

    /// Read an inline style property.
    fn style(&self, node: NodeId, property: &str) -> Option<SmolStr>;

    /// Append `child` to `parent`, re-parenting it if already attached
    /// elsewhere.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Whether the node is reachable from a mounted container.
    fn is_attached(&self, node: NodeId) -> bool;

    /// Swap `new` into `old`'s position under `old`'s parent, detaching
    /// `old`. Fails if `old` has no parent to preserve the position under.
    fn replace(&mut self, old: NodeId, new: NodeId) -> Result<(), SurfaceError>;
}
