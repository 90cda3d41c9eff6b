use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
use crate::lowerbound::{GreedyClique, LowerboundHeuristic};
use crate::solver::{CliqueSolver, ComputationResult};
use crate::timeout::{Interrupted, Interrupter};
use crate::upperbound::{GreedyColoring, UpperboundHeuristic};
use fxhash::FxHashSet;
use std::cmp::Reverse;

#[cfg(feature = "log")]
use log::info;

/// Splits `graph` on a pivot vertex into two independently owned subproblems:
/// `g1` without the pivot, `g2` induced on the pivot's closed neighborhood.
/// Every clique avoids the pivot or lies entirely inside its closed
/// neighborhood, so the maximum clique survives in one of the two.
///
/// The pivot is the highest-degree vertex that is not adjacent to everything
/// (ties by vertex id). A complete graph has no such vertex; the bound test
/// settles complete graphs before branching, but if one ever reaches this
/// point the whole graph is returned as `g1` with an empty `g2`.
pub fn branch(graph: &HashMapGraph) -> (HashMapGraph, HashMapGraph) {
    let max_degree = graph.order().saturating_sub(1);
    let pivot = graph
        .vertices()
        .filter(|v| graph.degree(*v) < max_degree)
        .min_by_key(|v| (Reverse(graph.degree(*v)), *v));

    match pivot {
        None => (graph.clone(), HashMapGraph::new()),
        Some(pivot) => {
            let mut g1 = graph.clone();
            g1.remove_vertex(pivot);

            let mut closed_neighborhood: FxHashSet<usize> = graph.neighborhood(pivot).collect();
            closed_neighborhood.insert(pivot);
            let g2 = graph.vertex_induced(&closed_neighborhood);

            (g1, g2)
        }
    }
}

/// Exact maximum-clique search. Each call bounds the instance with the greedy
/// clique (lower) and greedy coloring (upper) heuristics, stops when the
/// bounds meet, and otherwise recurses on the two `branch` subproblems.
pub struct BranchAndBound {
    graph: HashMapGraph,
    interrupter: Interrupter,
}

impl BranchAndBound {
    pub fn interrupter(mut self, interrupter: Interrupter) -> Self {
        self.interrupter = interrupter;
        self
    }

    fn search(&self, graph: HashMapGraph) -> Result<Vec<usize>, Interrupted> {
        if self.interrupter.interrupted() {
            return Err(Interrupted);
        }

        let clique = GreedyClique::compute(&graph);
        let chromatic = GreedyColoring::compute(&graph);
        if clique.len() == chromatic {
            // a clique of size k and a proper k-coloring certify each other
            return Ok(clique);
        }

        let (g1, g2) = branch(&graph);
        let without_pivot = self.search(g1)?;
        let with_pivot = self.search(g2)?;
        if with_pivot.len() > without_pivot.len() {
            Ok(with_pivot)
        } else {
            Ok(without_pivot)
        }
    }
}

impl CliqueSolver for BranchAndBound {
    fn with_graph(graph: &HashMapGraph) -> Self {
        Self {
            graph: graph.clone(),
            interrupter: Interrupter::none(),
        }
    }

    fn compute(self) -> ComputationResult {
        #[cfg(feature = "log")]
        info!("solving instance with {} vertices", self.graph.order());
        match self.search(self.graph.clone()) {
            Ok(mut clique) => {
                clique.sort_unstable();
                #[cfg(feature = "log")]
                info!("maximum clique has {} vertices", clique.len());
                ComputationResult::MaximumClique(clique)
            }
            Err(Interrupted) => {
                #[cfg(feature = "log")]
                info!("interrupted before optimality was proven");
                ComputationResult::Interrupted
            }
        }
    }
}
