use smallvec::SmallVec;

use crate::assets::MeshHandle;
use crate::errors::Result;
use crate::math::transform::{rotation_from_basis, scaling, translation, Basis};
use crate::math::{Matrix4, Vector3};

/// Handle of a node inside a [`SceneGraph`].
///
/// Handles are plain indices into the graph's arena; keeping them copyable
/// instead of handing out references is what lets a node carry a non-owning
/// back-reference to its parent without ownership cycles.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node of the scene tree: a local transform given by position, an
/// orthonormal-by-convention [`Basis`] and a per-axis scale, plus an
/// optional mesh payload.
///
/// Children are created only through [`SceneGraph::make_subnode`] and are
/// never re-parented or individually destroyed; the whole tree goes away
/// with its graph.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SceneNode {
    pub position: Vector3<f32>,
    pub basis: Basis,
    pub scale: Vector3<f32>,
    pub mesh: Option<MeshHandle>,

    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl Default for SceneNode {
    fn default() -> Self {
        SceneNode {
            position: Vector3::new(0.0, 0.0, 0.0),
            basis: Basis::default(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            mesh: None,
            parent: None,
            children: SmallVec::new(),
        }
    }
}

impl SceneNode {
    /// Returns the parent node, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns true if this is the root of the hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns true if this is a leaf of the hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The node's transform relative to its parent: scale first, then
    /// rotation, then translation. This exact order is load-bearing; any
    /// deviation changes what the renderer draws.
    pub fn local_transform(&self) -> Matrix4<f32> {
        translation(self.position) * rotation_from_basis(&self.basis) * scaling(self.scale)
    }
}

/// An append-only tree of [`SceneNode`]s. The root exists from construction;
/// everything else hangs off it via [`SceneGraph::make_subnode`].
#[derive(Debug)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl Default for SceneGraph {
    fn default() -> Self {
        SceneGraph::new()
    }
}

impl SceneGraph {
    /// Creates a graph holding only a default-initialized root node.
    pub fn new() -> Self {
        SceneGraph {
            nodes: vec![SceneNode::default()],
        }
    }

    /// The root node's handle.
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes in the graph, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Checks if `id` was created by this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    fn checked_index(&self, id: NodeId) -> Result<usize> {
        if self.contains(id) {
            Ok(id.index())
        } else {
            Err(format_err!("{:?} does not belong to this scene graph.", id))
        }
    }

    /// Appends a new default-initialized child (identity transform, no mesh)
    /// to `parent` and returns its handle, which stays valid for the
    /// lifetime of the graph.
    pub fn make_subnode(&mut self, parent: NodeId) -> Result<NodeId> {
        let parent_index = self.checked_index(parent)?;

        let id = NodeId(self.nodes.len() as u32);
        let mut node = SceneNode::default();
        node.parent = Some(parent);

        self.nodes.push(node);
        self.nodes[parent_index].children.push(id);
        Ok(id)
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    /// Returns true if this is the root of the hierarchy, aka. has no parent.
    #[inline]
    pub fn is_root(&self, id: NodeId) -> bool {
        self.node(id).map(|v| v.is_root()).unwrap_or(false)
    }

    /// Returns true if this is a leaf of the hierarchy, aka. has no child.
    #[inline]
    pub fn is_leaf(&self, id: NodeId) -> bool {
        self.node(id).map(|v| v.is_leaf()).unwrap_or(false)
    }

    /// The node's transform relative to its parent.
    #[inline]
    pub fn local_transform(&self, id: NodeId) -> Option<Matrix4<f32>> {
        self.node(id).map(SceneNode::local_transform)
    }

    /// The node's transform in world space: local transforms composed from
    /// the root down to this node, recomputed on every call. There is no
    /// cache and therefore no invalidation problem; recomputation is cheap
    /// next to the draw calls consuming it.
    pub fn world_transform(&self, id: NodeId) -> Option<Matrix4<f32>> {
        self.node(id).map(|node| {
            self.ancestors(id).fold(node.local_transform(), |acc, p| {
                self.nodes[p.index()].local_transform() * acc
            })
        })
    }

    /// Returns an iterator over the node's ancestors, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors {
        Ancestors {
            graph: self,
            cursor: self.node(id).and_then(|v| v.parent),
        }
    }

    /// Return true if `rhs` is one of the ancestors of `lhs`.
    pub fn is_ancestor(&self, lhs: NodeId, rhs: NodeId) -> bool {
        for v in self.ancestors(lhs) {
            if v == rhs {
                return true;
            }
        }

        false
    }

    /// Returns an iterator over the node's direct children, in creation
    /// order.
    pub fn children(&self, id: NodeId) -> Children {
        const NO_CHILDREN: &[NodeId] = &[];

        Children {
            inner: self
                .node(id)
                .map(|v| v.children.iter())
                .unwrap_or_else(|| NO_CHILDREN.iter()),
        }
    }

    /// Returns an iterator over all of the node's descendants in tree
    /// (depth-first) order, the node itself excluded.
    pub fn descendants(&self, id: NodeId) -> Descendants {
        let mut stack: Vec<NodeId> = Vec::new();
        if let Some(node) = self.node(id) {
            stack.extend(node.children.iter().rev().cloned());
        }

        Descendants { graph: self, stack }
    }
}

/// An iterator over a node's ancestors.
pub struct Ancestors<'a> {
    graph: &'a SceneGraph,
    cursor: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(id) = self.cursor {
            ::std::mem::replace(&mut self.cursor, self.graph.nodes[id.index()].parent)
        } else {
            None
        }
    }
}

/// An iterator over a node's direct children.
pub struct Children<'a> {
    inner: ::std::slice::Iter<'a, NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().cloned()
    }
}

/// An iterator over a node's descendants in tree order.
pub struct Descendants<'a> {
    graph: &'a SceneGraph,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;

        // Depth first: a node's children are visited before its siblings.
        let node = &self.graph.nodes[id.index()];
        self.stack.extend(node.children.iter().rev().cloned());

        Some(id)
    }
}
