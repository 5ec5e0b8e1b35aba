//! Arena of root-chain nodes.
//!
//! Every node explored while the bot is still inside its own capture chain
//! gets a slot holding the best move found there and the handle of the node
//! that continues the chain after that move.

use crate::moves::move_descriptions::Move;

/// Index of a node inside a [`ChainArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Copy, Default)]
pub struct ChainNode {
    pub best: Option<Move>,
    /// Node reached by playing `best`, present while the chain continues.
    pub next: Option<NodeId>,
}

#[derive(Debug, Clone, Default)]
pub struct ChainArena {
    nodes: Vec<ChainNode>,
}

impl ChainArena {
    pub fn push(&mut self) -> NodeId {
        self.nodes.push(ChainNode::default());
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &ChainNode {
        &self.nodes[id.0]
    }

    /// Record `mv` as the best move at `id`, continuing at `next`.
    pub fn set_best(&mut self, id: NodeId, mv: Move, next: Option<NodeId>) {
        self.nodes[id.0] = ChainNode {
            best: Some(mv),
            next,
        };
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Best moves from `root` onwards, stopping at the first node without one.
    pub fn unwind(&self, root: NodeId) -> Vec<Move> {
        let mut chain = Vec::new();
        let mut cursor = Some(root);
        while let Some(id) = cursor {
            let node = self.get(id);
            let Some(mv) = node.best else {
                break;
            };
            chain.push(mv);
            cursor = node.next;
        }
        chain
    }
}
