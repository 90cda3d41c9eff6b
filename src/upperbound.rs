use crate::graph::BaseGraph;
use fxhash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;

pub trait UpperboundHeuristic {
    fn compute<G: BaseGraph>(graph: &G) -> usize;
}

/// Greedy proper coloring in degree order. The number of colors it spends is
/// an upper bound on the clique number, since every clique needs pairwise
/// distinct colors.
pub struct GreedyColoring {}

impl GreedyColoring {
    pub fn color<G: BaseGraph>(graph: &G) -> FxHashMap<usize, usize> {
        let mut order: Vec<usize> = graph.vertices().collect();
        // degree descending, ties by vertex id
        order.sort_unstable_by_key(|v| (Reverse(graph.degree(*v)), *v));

        let mut colors: FxHashMap<usize, usize> = FxHashMap::default();
        let mut used = 0;
        for v in order {
            let neighbor_colors: FxHashSet<usize> = graph
                .neighborhood(v)
                .filter_map(|u| colors.get(&u).copied())
                .collect();
            if neighbor_colors.len() == used {
                colors.insert(v, used);
                used += 1;
            } else {
                // some color below `used` is free, take the smallest
                let color = (0..used).find(|c| !neighbor_colors.contains(c)).unwrap();
                colors.insert(v, color);
            }
        }
        colors
    }
}

impl UpperboundHeuristic for GreedyColoring {
    fn compute<G: BaseGraph>(graph: &G) -> usize {
        Self::color(graph).values().max().map_or(0, |color| color + 1)
    }
}
