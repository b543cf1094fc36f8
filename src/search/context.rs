//! Per-run search context: arena, visited set, limits and outcomes
//!
//! All mutable search state is scoped to one context owned by one driver
//! invocation, so independent solves never share a frontier or visited set.

use std::collections::HashSet;
use std::time::Instant;

use crate::search::state::{NodeArena, NodeId, SearchNode};
use crate::spatial::Board;

/// Expansions between progress notifications
const PROGRESS_STRIDE: u64 = 2048;

/// Receives periodic snapshots of a running search's counters
pub trait ProgressSink {
    /// Called every couple of thousand expansions
    fn on_progress(&mut self, stats: &SearchStats);
}

/// Optional caller-imposed bounds on a search run
///
/// The core defines no limits of its own; a caller may thread in a node
/// budget or wall-clock deadline, checked once per driver loop iteration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    /// Abort after this many expanded nodes
    pub max_nodes: Option<u64>,
    /// Abort once this instant has passed
    pub deadline: Option<Instant>,
}

impl SearchLimits {
    /// Limits that never trigger
    pub const fn unbounded() -> Self {
        Self {
            max_nodes: None,
            deadline: None,
        }
    }
}

/// Counters accumulated over one search run
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchStats {
    /// Nodes popped from the frontier and expanded
    pub expanded: u64,
    /// Nodes admitted to the arena, root included
    pub generated: u64,
    /// Candidates rejected because their canonical id was already visited
    pub duplicates: u64,
    /// Largest frontier size observed
    pub frontier_peak: usize,
}

/// An ordered initial-to-goal board sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Boards from the initial state to the goal state inclusive
    pub boards: Vec<Board>,
    /// Number of slides, i.e. `boards.len() - 1`
    pub depth: u32,
}

/// Why a run ended without a solution
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exhaustion {
    /// Every reachable state was generated without finding the goal
    FrontierEmptied,
    /// A caller-imposed node or deadline limit triggered
    BudgetExceeded,
}

/// Terminal result of a search run
///
/// `NoSolution` is a normal outcome, not a fault; construction problems
/// surface earlier as [`crate::spatial::board::InvalidBoardError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal piece reached the target corner
    Solved(Solution),
    /// The run terminated without reaching the goal
    NoSolution(Exhaustion),
}

impl SearchOutcome {
    /// Whether the run produced a solution
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Mutable state of one search run, passed explicitly into a driver
///
/// A context must be fresh per run: the visited set only grows, and reusing
/// one would suppress states explored by an earlier run.
pub struct SearchContext<'run> {
    arena: NodeArena,
    visited: HashSet<u64>,
    /// Counters accumulated so far
    pub stats: SearchStats,
    limits: SearchLimits,
    sink: Option<&'run mut dyn ProgressSink>,
}

impl SearchContext<'_> {
    /// Create an unbounded context with no progress reporting
    pub fn new() -> Self {
        Self::with_limits(SearchLimits::unbounded())
    }

    /// Create a context with caller-imposed limits
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self {
            arena: NodeArena::new(),
            visited: HashSet::new(),
            stats: SearchStats::default(),
            limits,
            sink: None,
        }
    }

    /// Number of distinct canonical ids seen so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

impl Default for SearchContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'run> SearchContext<'run> {
    /// Attach a progress sink notified as the run advances
    #[must_use]
    pub fn with_sink(mut self, sink: &'run mut dyn ProgressSink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Admit the root state, marking it visited
    pub fn admit_root(&mut self, board: Board, priority: u32) -> NodeId {
        self.visited.insert(board.canonical_id());
        self.stats.generated += 1;
        self.arena.insert(SearchNode {
            board,
            depth: 0,
            priority,
            parent: None,
        })
    }

    /// Admit a generated successor unless its canonical id was already seen
    ///
    /// Marks the id visited at generation time; both drivers rely on this
    /// single insertion point so duplicates are filtered uniformly.
    pub fn admit(
        &mut self,
        board: Board,
        depth: u32,
        priority: u32,
        parent: NodeId,
    ) -> Option<NodeId> {
        if !self.visited.insert(board.canonical_id()) {
            self.stats.duplicates += 1;
            return None;
        }
        self.stats.generated += 1;
        Some(self.arena.insert(SearchNode {
            board,
            depth,
            priority,
            parent: Some(parent),
        }))
    }

    /// Clone out the board and depth stored at `id`
    pub fn node_snapshot(&self, id: NodeId) -> Option<(Board, u32)> {
        self.arena
            .get(id)
            .map(|node| (node.board.clone(), node.depth))
    }

    /// Record one expansion and notify the sink on stride boundaries
    pub fn note_expansion(&mut self, frontier_len: usize) {
        self.stats.expanded += 1;
        self.stats.frontier_peak = self.stats.frontier_peak.max(frontier_len);
        if self.stats.expanded % PROGRESS_STRIDE == 0 {
            if let Some(sink) = self.sink.as_mut() {
                sink.on_progress(&self.stats);
            }
        }
    }

    /// Whether a caller-imposed limit has triggered
    pub fn budget_exhausted(&self) -> bool {
        if let Some(max_nodes) = self.limits.max_nodes
            && self.stats.expanded >= max_nodes
        {
            return true;
        }
        self.limits
            .deadline
            .is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Reconstruct the solution ending at `goal`
    pub fn solution(&self, goal: NodeId) -> Solution {
        let boards = self.arena.path_from_root(goal);
        let depth = self.arena.get(goal).map_or(0, |node| node.depth);
        Solution { boards, depth }
    }
}
