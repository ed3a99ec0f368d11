use std::sync::atomic::{AtomicUsize, Ordering};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::expression::{Node, combine};
use crate::solver::config::SolverConfig;
use crate::solver::solution::Solution;

/// One combination of two candidates, in traversal order
struct Expansion {
    first: usize,
    second: usize,
    node: Node,
}

impl Expansion {
    /// Candidate set for the next level: everything but the two operands,
    /// followed by the combined node.
    fn remaining(&self, candidates: &[Node]) -> Vec<Node> {
        let mut next = Vec::with_capacity(candidates.len() - 1);
        next.extend(
            candidates
                .iter()
                .enumerate()
                .filter(|&(k, _)| k != self.first && k != self.second)
                .map(|(_, node)| node.clone()),
        );
        next.push(self.node.clone());
        next
    }
}

/// All combinations of a candidate set, pair by pair (`i < j`), operations in
/// the order `combine` yields them. A pair of values already expanded at this
/// level is skipped: the rest of the set is then identical value-wise.
fn expansions(candidates: &[Node]) -> Vec<Expansion> {
    let mut seen: Vec<(u32, u32)> = Vec::new();
    let mut out = Vec::new();

    for (first, a) in candidates.iter().enumerate() {
        for (second, b) in candidates.iter().enumerate().skip(first + 1) {
            let key = (a.value().min(b.value()), a.value().max(b.value()));
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);

            out.extend(
                combine(a, b)
                    .into_iter()
                    .flatten()
                    .map(|node| Expansion {
                        first,
                        second,
                        node,
                    }),
            );
        }
    }
    out
}

/// Best-so-far tracking for one depth-first walk
struct Search<'a> {
    target: u32,
    best: Node,
    best_distance: u32,
    explored: u64,
    stop_on_exact: bool,
    /// Lowest branch index that reached the target, shared by parallel branches
    exact_floor: Option<(&'a AtomicUsize, usize)>,
}

impl<'a> Search<'a> {
    fn new(target: u32, baseline: Node, stop_on_exact: bool) -> Self {
        let best_distance = baseline.distance(target);
        Self {
            target,
            best: baseline,
            best_distance,
            explored: 0,
            stop_on_exact,
            exact_floor: None,
        }
    }

    fn with_branch(mut self, floor: &'a AtomicUsize, branch: usize) -> Self {
        self.exact_floor = Some((floor, branch));
        self
    }

    /// Replace the best node only on a strictly smaller distance, so the first
    /// node found at a given distance wins ties.
    fn offer(&mut self, node: &Node) {
        let distance = node.distance(self.target);
        if distance >= self.best_distance {
            return;
        }

        debug!(
            "New best {} (distance {}, was {})",
            node, distance, self.best_distance
        );
        self.best = node.clone();
        self.best_distance = distance;

        if distance == 0
            && self.stop_on_exact
            && let Some((floor, branch)) = self.exact_floor
        {
            floor.fetch_min(branch, Ordering::Relaxed);
        }
    }

    fn done(&self) -> bool {
        if !self.stop_on_exact {
            return false;
        }
        if self.best_distance == 0 {
            return true;
        }
        // A lower branch already reached the target and wins the tie
        matches!(self.exact_floor, Some((floor, branch)) if floor.load(Ordering::Relaxed) < branch)
    }

    /// Visit one expansion: record its node, then reduce the rest of the set.
    fn visit(&mut self, expansion: &Expansion, candidates: &[Node]) {
        self.explored += 1;
        self.offer(&expansion.node);
        if self.done() {
            return;
        }
        self.explore(&expansion.remaining(candidates));
    }

    fn explore(&mut self, candidates: &[Node]) {
        if candidates.len() < 2 {
            return;
        }

        for expansion in expansions(candidates) {
            self.visit(&expansion, candidates);
            if self.done() {
                return;
            }
        }
    }
}

/// Exhaustive solver for the numbers game
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Get a reference to the solver configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Find the reachable value closest to `target`, using any subset of `plates`.
    ///
    /// The result only depends on the input: ties between equally close nodes
    /// go to the one met first in the traversal, whether or not the search runs
    /// in parallel. An empty `plates` slice yields a zero leaf as best.
    pub fn solve(&self, plates: &[u32], target: u32) -> Solution {
        let mut sorted = plates.to_vec();
        sorted.sort_unstable();
        let candidates: Vec<Node> = sorted.iter().map(|&v| Node::leaf(v)).collect();

        info!(
            "Searching target {} from plates {:?} ({})",
            target,
            sorted,
            if self.config.parallel {
                "parallel"
            } else {
                "sequential"
            }
        );

        let baseline = match candidates.last() {
            Some(largest) => largest.clone(),
            None => {
                warn!("Solving an empty draw");
                Node::leaf(0)
            }
        };

        let mut root = Search::new(target, baseline, self.config.stop_on_exact);
        for leaf in &candidates {
            root.offer(leaf);
        }

        let (best, explored) = if root.done() {
            (root.best, 0)
        } else if self.config.parallel {
            self.explore_parallel(root, &candidates)
        } else {
            root.explore(&candidates);
            (root.best, root.explored)
        };

        let solution = Solution {
            target,
            depth: candidates.len(),
            candidates,
            best,
            explored,
        };

        info!(
            "Search finished after {} nodes: {} [{}]",
            solution.explored(),
            solution.best(),
            if solution.is_exact() {
                "exact"
            } else {
                "approximate"
            }
        );
        solution
    }

    /// Run each top-level expansion as its own branch, then keep the closest
    /// result with the lowest branch index, exactly as a sequential walk would.
    fn explore_parallel(&self, root: Search<'_>, candidates: &[Node]) -> (Node, u64) {
        let branches = expansions(candidates);
        let exact_floor = AtomicUsize::new(usize::MAX);
        let stop_on_exact = self.config.stop_on_exact;
        let target = root.target;
        let baseline = root.best.clone();

        debug!("Splitting search into {} branches", branches.len());

        let results: Vec<(Node, u32, u64)> = branches
            .par_iter()
            .enumerate()
            .map(|(index, expansion)| {
                let mut branch = Search::new(target, baseline.clone(), stop_on_exact)
                    .with_branch(&exact_floor, index);
                branch.visit(expansion, candidates);
                (branch.best, branch.best_distance, branch.explored)
            })
            .collect();

        let mut best = root.best;
        let mut best_distance = root.best_distance;
        let mut explored = 0;
        for (index, (node, distance, count)) in results.into_iter().enumerate() {
            explored += count;
            if distance < best_distance {
                debug!("Branch {} improves best to {}", index, node);
                best = node;
                best_distance = distance;
            }
        }
        (best, explored)
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}
