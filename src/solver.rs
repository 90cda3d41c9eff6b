use crate::graph::{BaseGraph, HashMapGraph};
use crate::lowerbound::{GreedyClique, LowerboundHeuristic};
use crate::upperbound::{GreedyColoring, UpperboundHeuristic};

pub trait CliqueSolver {
    fn with_graph(graph: &HashMapGraph) -> Self
    where
        Self: Sized;
    fn compute(self) -> ComputationResult;
}

/// Bound pair for a single instance. The maximum clique size always lies in
/// `[lowerbound, upperbound]`; equality proves the greedy clique maximum.
pub struct Bounds {
    pub lowerbound: usize,
    pub upperbound: usize,
}

pub fn bounds<G: BaseGraph>(graph: &G) -> Bounds {
    Bounds {
        lowerbound: GreedyClique::compute(graph).len(),
        upperbound: GreedyColoring::compute(graph),
    }
}

pub enum ComputationResult {
    MaximumClique(Vec<usize>),
    Interrupted,
}

impl ComputationResult {
    pub fn maximum_clique(self) -> Option<Vec<usize>> {
        match self {
            ComputationResult::MaximumClique(clique) => Some(clique),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{HashMapGraph, MutableGraph};
    use crate::solver::bounds;
    use rand::prelude::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_graph(n: usize, p: f64, seed: u64) -> HashMapGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut graph = HashMapGraph::with_capacity(n);
        for v in 0..n {
            graph.add_vertex(v);
        }
        for u in 0..n {
            for v in u + 1..n {
                if rng.gen_bool(p) {
                    graph.add_edge(u, v);
                }
            }
        }
        graph
    }

    #[test]
    fn test_lowerbound_at_most_upperbound() {
        for seed in 0..30 {
            let graph = random_graph(12, 0.5, seed);
            let bounds = bounds(&graph);
            assert!(bounds.lowerbound <= bounds.upperbound);
        }
    }

    #[test]
    fn test_bounds_decide_path() {
        let mut graph = HashMapGraph::new();
        graph.add_edge(0, 1);
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        let bounds = bounds(&graph);
        assert_eq!(bounds.lowerbound, 2);
        assert_eq!(bounds.upperbound, 2);
    }

    #[test]
    fn test_bounds_decide_complete_graph() {
        let mut graph = HashMapGraph::new();
        graph.make_clique(&[0, 1, 2, 3, 4]);
        let bounds = bounds(&graph);
        assert_eq!(bounds.lowerbound, 5);
        assert_eq!(bounds.upperbound, 5);
    }

    #[test]
    fn test_bounds_gap_on_odd_cycle() {
        // C5: clique number 2, but degree-greedy coloring spends 3 colors
        let mut graph = HashMapGraph::new();
        for v in 0..5 {
            graph.add_edge(v, (v + 1) % 5);
        }
        let bounds = bounds(&graph);
        assert_eq!(bounds.lowerbound, 2);
        assert_eq!(bounds.upperbound, 3);
    }
}
