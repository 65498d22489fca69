// Path enumerators - lazy linear-path sequences over the action tree
//
// All three strategies share one agenda-based walker; only the frontier
// (which pending state to advance next) differs. Canonical order uses a
// LIFO frontier (depth-first, tree-definition order); the fewest-steps and
// lowest-weight orders use a cost-ordered frontier. Emitted step costs are
// all positive and a state re-queues whenever it pays one, so completed
// paths pop in non-decreasing metric order.
use crate::models::{ActionNode, ActionPath, ActionStep, GoalNode, Inventory, PlanTree};
use crate::planner::weight::PathWeigher;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};

#[derive(Debug, Clone, Default)]
pub struct EnumerateOptions {
    pub inventory: Inventory,
}

#[derive(Debug, Clone, Copy)]
enum AgendaItem<'t> {
    Goal(&'t GoalNode),
    Action(&'t ActionNode),
    Emit(&'t ActionStep),
}

/// One partial walk: what is still pending plus what was already emitted.
#[derive(Debug, Clone)]
struct SearchState<'t> {
    agenda: VecDeque<AgendaItem<'t>>,
    steps: Vec<ActionStep>,
    acquired: HashSet<String>,
    cost: f64,
    seq: u64,
}

impl<'t> SearchState<'t> {
    fn initial(root: &'t GoalNode) -> Self {
        let mut agenda = VecDeque::new();
        agenda.push_front(AgendaItem::Goal(root));
        Self {
            agenda,
            steps: Vec::new(),
            acquired: HashSet::new(),
            cost: 0.0,
            seq: 0,
        }
    }
}

struct CostEntry<'t>(SearchState<'t>);

impl PartialEq for CostEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.cost.total_cmp(&other.0.cost) == Ordering::Equal && self.0.seq == other.0.seq
    }
}

impl Eq for CostEntry<'_> {}

impl PartialOrd for CostEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: lowest cost wins, insertion order breaks ties
        other
            .0
            .cost
            .total_cmp(&self.0.cost)
            .then_with(|| other.0.seq.cmp(&self.0.seq))
    }
}

/// Which pending state advances next. New states of one OR-branch arrive in
/// alternative order.
enum Frontier<'t> {
    /// LIFO: depth-first walk in tree-definition order.
    DepthFirst(Vec<SearchState<'t>>),
    /// Uniform-cost: lowest accumulated metric first.
    CostOrdered(BinaryHeap<CostEntry<'t>>),
}

impl<'t> Frontier<'t> {
    fn push_branch(&mut self, states: Vec<SearchState<'t>>) {
        match self {
            // Reversed so the first alternative pops first
            Frontier::DepthFirst(stack) => stack.extend(states.into_iter().rev()),
            Frontier::CostOrdered(heap) => heap.extend(states.into_iter().map(CostEntry)),
        }
    }

    fn pop(&mut self) -> Option<SearchState<'t>> {
        match self {
            Frontier::DepthFirst(stack) => stack.pop(),
            Frontier::CostOrdered(heap) => heap.pop().map(|entry| entry.0),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum CostMetric {
    /// Canonical order: the frontier ignores cost entirely.
    None,
    StepCount,
    Weight,
}

/// Shared single-pass walker. Holds cursor state between pulls; build a
/// fresh one to re-enumerate. May yield a very large number of paths for
/// branchy trees - cap consumption externally.
struct PathWalker<'t> {
    tree: &'t PlanTree,
    frontier: Frontier<'t>,
    metric: CostMetric,
    weigher: PathWeigher<'t>,
    inventory: Inventory,
    next_seq: u64,
}

impl<'t> PathWalker<'t> {
    fn new(tree: &'t PlanTree, frontier: Frontier<'t>, metric: CostMetric, options: &EnumerateOptions) -> Self {
        let mut walker = Self {
            tree,
            frontier,
            metric,
            weigher: PathWeigher::new(tree.budget.as_ref()),
            inventory: options.inventory.clone(),
            next_seq: 1,
        };
        walker
            .frontier
            .push_branch(vec![SearchState::initial(&tree.root)]);
        walker
    }

    fn step_cost(&self, step: &ActionStep) -> f64 {
        match self.metric {
            CostMetric::None => 0.0,
            CostMetric::StepCount => 1.0,
            CostMetric::Weight => self.weigher.step_weight(step),
        }
    }

    /// The persistent item this step acquires, if any.
    fn persistent_name(&self, step: &ActionStep) -> Option<&str> {
        let produced = step.produced_item();
        self.tree
            .persistent_items
            .iter()
            .find(|p| p.as_str() == produced)
            .map(String::as_str)
    }

    /// Advance one state until it branches, pays a cost, dies, or completes.
    fn advance(&mut self, mut state: SearchState<'t>) -> Option<ActionPath> {
        loop {
            let Some(front) = state.agenda.pop_front() else {
                return Some(ActionPath { steps: state.steps });
            };
            match front {
                AgendaItem::Goal(goal) => {
                    if goal.satisfied {
                        continue;
                    }
                    match goal.alternatives.as_slice() {
                        [] => return None, // dead branch
                        [only] => {
                            state.agenda.push_front(AgendaItem::Action(only));
                        }
                        alternatives => {
                            let mut successors = Vec::with_capacity(alternatives.len());
                            for alternative in alternatives {
                                let mut successor = state.clone();
                                successor
                                    .agenda
                                    .push_front(AgendaItem::Action(alternative));
                                successor.seq = self.next_seq;
                                self.next_seq += 1;
                                successors.push(successor);
                            }
                            self.frontier.push_branch(successors);
                            return None; // consumed into the frontier
                        }
                    }
                }
                AgendaItem::Action(node) => {
                    // Post-order: requirements first, then the step itself
                    state.agenda.push_front(AgendaItem::Emit(&node.step));
                    for requirement in node.requirements.iter().rev() {
                        state.agenda.push_front(AgendaItem::Goal(requirement));
                    }
                }
                AgendaItem::Emit(step) => {
                    // Persistent resources are acquired at most once per
                    // path, and never when the starting inventory has one
                    if let Some(name) = self.persistent_name(step) {
                        if state.acquired.contains(name) || self.inventory.count(name) > 0 {
                            continue;
                        }
                        state.acquired.insert(name.to_string());
                    }
                    state.cost += self.step_cost(step);
                    state.steps.push(step.clone());
                    // Paying a cost re-queues the state so a cheaper pending
                    // state gets to finish first - this is what keeps each
                    // ordering monotonic in its metric
                    self.frontier.push_branch(vec![state]);
                    return None;
                }
            }
        }
    }

    fn next_path(&mut self) -> Option<ActionPath> {
        while let Some(state) = self.frontier.pop() {
            if let Some(path) = self.advance(state) {
                return Some(path);
            }
        }
        None
    }
}

/// Lazy sequence of paths in tree-definition order - the reference set of
/// what paths exist at all. Single-pass and non-restartable; exhaustion is
/// the normal termination signal.
pub struct CanonicalPaths<'t> {
    walker: PathWalker<'t>,
}

/// Lazy sequence of paths in non-decreasing step count.
pub struct ShortestPaths<'t> {
    walker: PathWalker<'t>,
}

/// Lazy sequence of paths in non-decreasing total weight.
pub struct CheapestPaths<'t> {
    walker: PathWalker<'t>,
}

pub fn canonical_paths<'t>(tree: &'t PlanTree, options: &EnumerateOptions) -> CanonicalPaths<'t> {
    CanonicalPaths {
        walker: PathWalker::new(tree, Frontier::DepthFirst(Vec::new()), CostMetric::None, options),
    }
}

pub fn shortest_paths<'t>(tree: &'t PlanTree, options: &EnumerateOptions) -> ShortestPaths<'t> {
    ShortestPaths {
        walker: PathWalker::new(
            tree,
            Frontier::CostOrdered(BinaryHeap::new()),
            CostMetric::StepCount,
            options,
        ),
    }
}

pub fn cheapest_paths<'t>(tree: &'t PlanTree, options: &EnumerateOptions) -> CheapestPaths<'t> {
    CheapestPaths {
        walker: PathWalker::new(
            tree,
            Frontier::CostOrdered(BinaryHeap::new()),
            CostMetric::Weight,
            options,
        ),
    }
}

impl Iterator for CanonicalPaths<'_> {
    type Item = ActionPath;

    fn next(&mut self) -> Option<ActionPath> {
        self.walker.next_path()
    }
}

impl Iterator for ShortestPaths<'_> {
    type Item = ActionPath;

    fn next(&mut self) -> Option<ActionPath> {
        self.walker.next_path()
    }
}

impl Iterator for CheapestPaths<'_> {
    type Item = ActionPath;

    fn next(&mut self) -> Option<ActionPath> {
        self.walker.next_path()
    }
}
