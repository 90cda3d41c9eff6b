use crate::datastructures::BitSet;
use crate::graph::{BaseGraph, BitGraph};
use fxhash::FxHashMap;

/// Lazy Bron-Kerbosch enumeration of all maximal cliques.
///
/// The recursion is driven as an explicit stack of frames, each holding the
/// candidate set `P`, the clique under construction `R` and the excluded set
/// `X` as bit-sets over an owned contiguous-index copy of the input graph.
/// A frame iterates over a snapshot of `P` taken at entry, so moving vertices
/// from `P` to `X` never perturbs the iteration. The iterator is exhausted
/// after one pass; call `with_graph` again for a fresh enumeration.
pub struct MaximalCliques {
    graph: BitGraph,
    labels: Vec<usize>,
    stack: Vec<Frame>,
}

struct Frame {
    candidates: BitSet,
    excluded: BitSet,
    clique: Vec<usize>,
    snapshot: Vec<usize>,
    next: usize,
    checked: bool,
}

impl MaximalCliques {
    pub fn with_graph<G: BaseGraph>(graph: &G) -> Self {
        let mut labels: Vec<usize> = graph.vertices().collect();
        labels.sort_unstable();
        let mapping: FxHashMap<usize, usize> =
            labels.iter().enumerate().map(|(idx, v)| (*v, idx)).collect();
        let bit_graph = BitGraph::from_graph(graph, &mapping);

        let order = labels.len();
        let root = Frame {
            candidates: BitSet::new_all_set(order),
            excluded: BitSet::new(order),
            clique: Vec::new(),
            snapshot: (0..order).collect(),
            next: 0,
            checked: false,
        };
        Self {
            graph: bit_graph,
            labels,
            stack: vec![root],
        }
    }
}

impl Iterator for MaximalCliques {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let emit = {
                let top = self.stack.last_mut()?;
                if !top.checked {
                    top.checked = true;
                    if top.candidates.empty() && top.excluded.empty() {
                        Some(top.clique.clone())
                    } else {
                        None
                    }
                } else {
                    None
                }
            };
            if let Some(indices) = emit {
                self.stack.pop();
                let mut clique: Vec<usize> =
                    indices.iter().map(|idx| self.labels[*idx]).collect();
                clique.sort_unstable();
                return Some(clique);
            }

            let child = {
                let top = self.stack.last_mut()?;
                match top.snapshot.get(top.next).copied() {
                    None => None,
                    Some(v) => {
                        top.next += 1;
                        let neighbors = self.graph.neighborhood_as_bitset(v);
                        let mut candidates = top.candidates.clone();
                        candidates.and(neighbors);
                        let mut excluded = top.excluded.clone();
                        excluded.and(neighbors);
                        let mut clique = top.clique.clone();
                        clique.push(v);
                        top.candidates.unset_bit(v);
                        top.excluded.set_bit(v);
                        let snapshot: Vec<usize> = candidates.iter().collect();
                        Some(Frame {
                            candidates,
                            excluded,
                            clique,
                            snapshot,
                            next: 0,
                            checked: false,
                        })
                    }
                }
            };
            match child {
                Some(frame) => self.stack.push(frame),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
