use std::cmp::Ordering;
use std::collections::BinaryHeap;

// ---------------------------------------------------------------------------
// Per-node search state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Unvisited,
    Open,
    Closed,
}

/// Search bookkeeping for one grid node during one search.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) parent: Option<usize>,
    /// Order of first insertion into the open set.
    pub(crate) seq: u32,
    pub(crate) state: NodeState,
}

impl SearchNode {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self {
            g: 0,
            h: 0,
            parent: None,
            seq: 0,
            state: NodeState::Unvisited,
        }
    }
}

/// Open-set entry, ordered for use in `BinaryHeap`.
///
/// The heap pops the lowest `f`, then the lowest `h`, then the node that
/// entered the open set first.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    idx: usize,
    f: i32,
    h: i32,
    seq: u32,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest key first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchTable
// ---------------------------------------------------------------------------

/// Search state for every node of a grid, indexed like the grid's nodes,
/// plus the open set.
///
/// Lowering a node's cost pushes a fresh heap entry; the superseded entry
/// is skipped when it surfaces.
pub(crate) struct SearchTable {
    nodes: Vec<SearchNode>,
    open: BinaryHeap<OpenEntry>,
    next_seq: u32,
}

impl SearchTable {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            nodes: vec![SearchNode::default(); len],
            open: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    #[inline]
    pub(crate) fn node(&self, idx: usize) -> &SearchNode {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn is_open(&self, idx: usize) -> bool {
        self.nodes[idx].state == NodeState::Open
    }

    #[inline]
    pub(crate) fn is_closed(&self, idx: usize) -> bool {
        self.nodes[idx].state == NodeState::Closed
    }

    /// Record a better (or first) route to `idx` and make sure it is open.
    pub(crate) fn relax(&mut self, idx: usize, g: i32, h: i32, parent: Option<usize>) {
        let n = &mut self.nodes[idx];
        if n.state == NodeState::Unvisited {
            n.state = NodeState::Open;
            n.seq = self.next_seq;
            self.next_seq += 1;
        }
        n.g = g;
        n.h = h;
        n.parent = parent;
        self.open.push(OpenEntry {
            idx,
            f: n.f(),
            h,
            seq: n.seq,
        });
    }

    /// Remove the best open node and move it to the closed set.
    pub(crate) fn pop_best(&mut self) -> Option<usize> {
        while let Some(e) = self.open.pop() {
            let n = &mut self.nodes[e.idx];
            if n.state != NodeState::Open || n.f() != e.f {
                continue;
            }
            n.state = NodeState::Closed;
            return Some(e.idx);
        }
        None
    }

    /// Number of live open nodes. Linear; meant for logging and tests.
    pub(crate) fn open_len(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| n.state == NodeState::Open)
            .count()
    }

    /// Follow parent links from `idx` back to the node without a parent.
    /// Yields `idx` first.
    pub(crate) fn ancestry(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(Some(idx), |&i| self.nodes[i].parent)
    }
}
