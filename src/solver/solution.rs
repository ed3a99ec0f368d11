use crate::expression::Node;

/// Outcome of a search over one draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub(crate) target: u32,
    pub(crate) depth: usize,
    pub(crate) candidates: Vec<Node>,
    pub(crate) best: Node,
    pub(crate) explored: u64,
}

impl Solution {
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Number of plates the search started from
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Initial candidate set, one leaf per plate in ascending order
    pub fn candidates(&self) -> &[Node] {
        &self.candidates
    }

    /// Closest node to the target found by the search
    pub fn best(&self) -> &Node {
        &self.best
    }

    /// Number of nodes built during the search
    pub fn explored(&self) -> u64 {
        self.explored
    }

    pub fn distance(&self) -> u32 {
        self.best.distance(self.target)
    }

    pub fn is_exact(&self) -> bool {
        self.best.value() == self.target
    }
}
