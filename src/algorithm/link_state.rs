use log::{debug, info, trace, warn};
use std::collections::BTreeSet;

use crate::algorithm::{
    DistanceTable, PathCost, PredecessorTable, ShortestPathAlgorithm, ShortestPathResult,
    StepRecord, Trace,
};
use crate::config::{EngineConfig, TieBreak, UnreachablePolicy};
use crate::graph::{Cost, Graph, NodeId};
use crate::{node_label, Error, Result};

/// Link-state shortest path first computation
///
/// Grows the settled set one relay node per iteration, always picking the
/// unsettled node with the lowest tentative cost, and relaxes the links from the
/// relay to its unsettled neighbors. Runs in O(n²) with a linear scan for the
/// minimum, and records a snapshot of every iteration.
///
/// Costs must be non-negative; `Topology` rejects negative links at construction.
#[derive(Debug, Default, Clone)]
pub struct LinkState {
    config: EngineConfig,
}

impl LinkState {
    /// Creates a new engine with the default configuration
    pub fn new() -> Self {
        LinkState {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        LinkState { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// State threaded through the iterations of one computation
#[derive(Debug)]
struct IterationState<N, W> {
    settled: BTreeSet<N>,
    distances: DistanceTable<N, W>,
    predecessors: PredecessorTable<N>,
}

impl<N, W> IterationState<N, W>
where
    N: NodeId,
    W: Cost,
{
    /// Direct neighbors of the source start at their link cost, everything else
    /// starts unreachable.
    fn initialize<G: Graph<N, W>>(graph: &G, source: &N) -> Self {
        let mut distances = DistanceTable::new();
        let mut predecessors = PredecessorTable::new(source.clone());

        for node in graph.nodes() {
            if node == source {
                continue;
            }
            match graph.link_cost(source, node) {
                Some(cost) => {
                    distances.set(node.clone(), PathCost::Finite(cost));
                    predecessors.set(node.clone(), Some(source.clone()));
                }
                None => {
                    distances.set(node.clone(), PathCost::Unreachable);
                    predecessors.set(node.clone(), None);
                }
            }
        }

        let mut settled = BTreeSet::new();
        settled.insert(source.clone());

        IterationState {
            settled,
            distances,
            predecessors,
        }
    }

    /// Picks the unsettled node with the minimum tentative cost
    fn select_relay(&self, tie_break: TieBreak) -> Option<(N, PathCost<W>)> {
        let mut best: Option<(&N, PathCost<W>)> = None;

        // Ascending node order: a strict comparison keeps the first (lowest) id
        // among equal costs, a non-strict one keeps the last (highest).
        for (node, cost) in self.distances.iter() {
            if self.settled.contains(node) {
                continue;
            }
            let better = match best {
                None => true,
                Some((_, best_cost)) => match tie_break {
                    TieBreak::LowestId => cost < best_cost,
                    TieBreak::HighestId => cost <= best_cost,
                },
            };
            if better {
                best = Some((node, cost));
            }
        }

        best.map(|(node, cost)| (node.clone(), cost))
    }

    fn settle(&mut self, relay: N) {
        self.settled.insert(relay);
    }

    /// Relaxes every link from `relay` to an unsettled neighbor.
    /// Returns the number of entries improved.
    fn relax<G: Graph<N, W>>(
        &mut self,
        graph: &G,
        relay: &N,
        relay_cost: PathCost<W>,
    ) -> Result<usize> {
        if !relay_cost.is_finite() {
            return Ok(0);
        }

        let mut updates = 0;
        for (neighbor, link_cost) in graph.neighbors(relay) {
            if self.settled.contains(neighbor) {
                continue;
            }
            let current = match self.distances.get(neighbor) {
                Some(cost) => cost,
                None => continue,
            };

            let candidate = relay_cost
                .extend(link_cost)
                .ok_or_else(|| Error::CostOverflow(node_label(relay), node_label(neighbor)))?;
            if candidate < current {
                trace!(
                    "Relaxed {:?} via {:?}: {:?} -> {:?}",
                    neighbor,
                    relay,
                    current,
                    candidate
                );
                self.distances.set(neighbor.clone(), candidate);
                self.predecessors.set(neighbor.clone(), Some(relay.clone()));
                updates += 1;
            }
        }
        Ok(updates)
    }

    fn is_complete(&self, node_count: usize) -> bool {
        self.settled.len() >= node_count
    }

    fn snapshot(&self, step: usize, relay: Option<N>) -> StepRecord<N, W> {
        StepRecord::new(
            step,
            relay,
            self.settled.clone(),
            self.distances.clone(),
            self.predecessors.clone(),
        )
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for LinkState
where
    N: NodeId,
    W: Cost,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "LinkState"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        if !graph.has_node(source) {
            return Err(Error::SourceNotFound(node_label(source)));
        }

        let node_count = graph.node_count();
        let mut state = IterationState::initialize(graph, source);
        let mut trace = Trace::new();
        if self.config.record_trace {
            trace.push(state.snapshot(0, None));
        }

        let mut step = 0;
        while !state.is_complete(node_count) {
            let (relay, relay_cost) = match state.select_relay(self.config.tie_break) {
                Some(selected) => selected,
                None => break,
            };

            if !relay_cost.is_finite() {
                match self.config.unreachable {
                    UnreachablePolicy::StopEarly => {
                        debug!(
                            "Stopping at step {}: {} node(s) unreachable from {:?}",
                            step,
                            node_count - state.settled.len(),
                            source
                        );
                        break;
                    }
                    UnreachablePolicy::SettleAll => {
                        warn!("Settling {:?} with no path from {:?}", relay, source);
                    }
                }
            }

            step += 1;
            state.settle(relay.clone());
            let updates = state.relax(graph, &relay, relay_cost)?;
            debug!(
                "Step {}: settled {:?} at {:?}, {} update(s)",
                step, relay, relay_cost, updates
            );

            if self.config.record_trace {
                trace.push(state.snapshot(step, Some(relay)));
            }
        }

        info!(
            "Computed shortest paths from {:?}: {} node(s), {} iteration(s)",
            source, node_count, step
        );

        Ok(ShortestPathResult {
            source: source.clone(),
            distances: state.distances,
            predecessors: state.predecessors,
            trace,
        })
    }
}
