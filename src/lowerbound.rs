use crate::graph::BaseGraph;
use fxhash::FxHashSet;
use std::cmp::Reverse;

pub trait LowerboundHeuristic {
    fn compute<G: BaseGraph>(graph: &G) -> Vec<usize>;
}

/// Greedy clique construction: walk the vertices in degree order and keep
/// restricting the candidate pool to the neighborhood of everything taken so
/// far. The result is a valid clique of the input graph, not necessarily a
/// maximum one.
pub struct GreedyClique {}

impl LowerboundHeuristic for GreedyClique {
    fn compute<G: BaseGraph>(graph: &G) -> Vec<usize> {
        let mut candidates: Vec<usize> = graph.vertices().collect();
        // degree descending, ties by vertex id
        candidates.sort_unstable_by_key(|v| (Reverse(graph.degree(*v)), *v));

        let mut clique = Vec::new();
        while let Some(v) = candidates.first().copied() {
            clique.push(v);
            let neighbors: FxHashSet<usize> = graph.neighborhood(v).collect();
            candidates.retain(|u| neighbors.contains(u));
        }
        clique
    }
}
