//! Open/closed-set A* over any hashable node type.
//!
//! Nodes live in an insertion-ordered arena keyed by node value; predecessors are stored as arena
//! indices, so following them back from the goal is a sequence of O(1) lookups. The frontier is a
//! binary heap with lazy deletion: each push is stamped with a sequence number and an entry
//! only counts while it matches the sequence its arena slot last recorded.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;
use std::ops::Add;

use crate::error::PathError;

const NO_PARENT: usize = usize::MAX;

/// Bookkeeping for one coordinate reached by the search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchNode<C> {
    /// Cost from the start (G).
    pub cost: C,
    /// Heuristic estimate to the goal (H).
    pub heuristic: C,
    /// Arena index of the predecessor, [usize::MAX] for the start.
    pub parent: usize,
    pub closed: bool,
    sequence: usize,
}

impl<C: Copy + Add<Output = C>> SearchNode<C> {
    /// Total score (F = G + H).
    pub fn estimated_cost(&self) -> C {
        self.cost + self.heuristic
    }
}

struct SmallestCostHolder<K> {
    estimated_cost: K,
    heuristic: K,
    sequence: usize,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost)
            && self.heuristic.eq(&other.heuristic)
            && self.sequence == other.sequence
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so every comparison is reversed: lowest F first, then
        // lowest H, then the earliest push.
        other
            .estimated_cost
            .cmp(&self.estimated_cost)
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

fn reverse_path<N, V, F>(parents: &FxIndexMap<N, V>, mut parent: F, start: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(start, |i| {
        parents.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Runs A* from `start` until `success` accepts an expanded node, returning the node sequence
/// from start to that node together with its cost.
///
/// A node that has been expanded is never reopened. If a strictly cheaper route to it turns up
/// later, its stored G and H are overwritten but it keeps its predecessor and stays closed, so
/// paths already built through it are unchanged.
///
/// If `max_expansions` is set, the search gives up after expanding that many nodes.
pub fn astar_closed<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
    max_expansions: Option<usize>,
) -> Result<(Vec<N>, C), PathError>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut sequence = 0;
    let mut expanded = 0;
    let mut to_see = BinaryHeap::new();
    let mut nodes: FxIndexMap<N, SearchNode<C>> = FxIndexMap::default();

    let start_h = heuristic(start);
    nodes.insert(
        start.clone(),
        SearchNode {
            cost: Zero::zero(),
            heuristic: start_h,
            parent: NO_PARENT,
            closed: false,
            sequence,
        },
    );
    to_see.push(SmallestCostHolder {
        estimated_cost: start_h,
        heuristic: start_h,
        sequence,
        index: 0,
    });

    while let Some(SmallestCostHolder {
        sequence: popped, index, ..
    }) = to_see.pop()
    {
        let (cost, successors) = {
            let Some((_, entry)) = nodes.get_index_mut(index) else {
                continue;
            };
            // Entries superseded by a cheaper push, or already expanded, are stale.
            if entry.closed || entry.sequence != popped {
                continue;
            }
            entry.closed = true;
            expanded += 1;
            let cost = entry.cost;
            let Some((node, _)) = nodes.get_index(index) else {
                continue;
            };
            if success(node) {
                let path = reverse_path(&nodes, |n| n.parent, index);
                debug!("Reached goal after expanding {} nodes", expanded);
                return Ok((path, cost));
            }
            if max_expansions.is_some_and(|limit| expanded >= limit) {
                warn!(
                    "Search abandoned after expanding {} nodes without reaching the goal",
                    expanded
                );
                return Err(PathError::NoPathFound { expanded });
            }
            (cost, successors(node))
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h = heuristic(&successor);
            let estimated_cost = new_cost + h;
            match nodes.entry(successor) {
                Vacant(e) => {
                    sequence += 1;
                    to_see.push(SmallestCostHolder {
                        estimated_cost,
                        heuristic: h,
                        sequence,
                        index: e.index(),
                    });
                    e.insert(SearchNode {
                        cost: new_cost,
                        heuristic: h,
                        parent: index,
                        closed: false,
                        sequence,
                    });
                }
                Occupied(mut e) => {
                    let existing = e.get_mut();
                    if existing.estimated_cost() <= estimated_cost {
                        continue;
                    }
                    existing.cost = new_cost;
                    existing.heuristic = h;
                    if !existing.closed {
                        existing.parent = index;
                        sequence += 1;
                        existing.sequence = sequence;
                        to_see.push(SmallestCostHolder {
                            estimated_cost,
                            heuristic: h,
                            sequence,
                            index: e.index(),
                        });
                    }
                }
            }
        }
    }
    debug!("Frontier exhausted after expanding {} nodes", expanded);
    Err(PathError::NoPathFound { expanded })
}
