use amaze_core::Pos;

/// Handle to a [`SearchNode`] stored in the solver's node arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A generated candidate position with its cost so far, heuristic estimate
/// and the node it was reached from.
///
/// Nodes are never updated in place. A better route to a position already
/// generated produces a new node; the older one is pruned when popped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchNode {
    pub pos: Pos,
    pub parent: Option<NodeId>,
    /// Steps taken from the start.
    pub g: u32,
    /// Estimated steps left to the goal.
    pub h: u32,
}

impl SearchNode {
    /// The root of a search tree.
    #[inline]
    pub fn root(pos: Pos, h: u32) -> Self {
        Self {
            pos,
            parent: None,
            g: 0,
            h,
        }
    }

    /// Priority key: `g + h`.
    #[inline]
    pub fn f(&self) -> u32 {
        self.g + self.h
    }
}

// ---------------------------------------------------------------------------
// Arena
// ---------------------------------------------------------------------------

/// Append-only storage for the search tree. Parent links are indices into
/// the same arena, so the tree can only be walked towards the root.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn push(&mut self, node: SearchNode) -> NodeId {
        let id = u32::try_from(self.nodes.len()).expect("node arena exceeds u32::MAX entries");
        self.nodes.push(node);
        NodeId(id)
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Positions from the root to `id`, inclusive at both ends.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<Pos> {
        let mut path = Vec::with_capacity(self.get(id).g as usize + 1);
        let mut cur = Some(id);
        while let Some(ci) = cur {
            let node = self.get(ci);
            path.push(node.pos);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}
