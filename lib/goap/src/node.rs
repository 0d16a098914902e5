use std::collections::VecDeque;

use crate::Action;

/// One action under consideration during planning.
///
/// Equality is the identity of the referenced action; the accumulated cost is ignored.
#[derive(Debug)]
pub(crate) struct SearchNode<'a, A> {
    pub action: &'a A,
    pub identity: String,
    pub cost_so_far: f64,
}

impl<'a, A: Action> SearchNode<'a, A> {
    pub fn new(action: &'a A, cost_so_far: f64) -> Self {
        Self {
            action,
            identity: action.identity(),
            cost_so_far,
        }
    }
}

impl<A> PartialEq for SearchNode<'_, A> {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

/// Frontier of unresolved nodes, processed front to back.
///
/// Duplicates are only rejected while the same identity is still open. An action that was
/// already closed is opened again when a later node depends on it, so it ends up before that
/// node once the closed list is reversed. Cycles are bounded by the expansion limit.
#[derive(Debug)]
pub(crate) struct OpenList<'a, A> {
    nodes: VecDeque<SearchNode<'a, A>>,
}

impl<'a, A> OpenList<'a, A> {
    pub fn new(root: SearchNode<'a, A>) -> Self {
        Self {
            nodes: VecDeque::from([root]),
        }
    }

    pub fn pop_current(&mut self) -> Option<SearchNode<'a, A>> {
        self.nodes.pop_front()
    }

    /// Appends `node` unless a node with the same identity is currently open.
    pub fn push(&mut self, node: SearchNode<'a, A>) -> bool {
        if self.nodes.iter().any(|n| *n == node) {
            return false;
        }

        self.nodes.push_back(node);
        true
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
