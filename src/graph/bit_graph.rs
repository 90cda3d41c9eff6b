use crate::datastructures::BitSet;
use crate::graph::base_graph::BaseGraph;
use fxhash::FxHashMap;

#[derive(Clone, Debug)]
pub struct BitGraph {
    graph: Vec<BitSet>,
}

impl From<Vec<BitSet>> for BitGraph {
    fn from(graph: Vec<BitSet>) -> Self {
        Self { graph }
    }
}

impl BitGraph {
    /// Builds the bit-matrix mirror of `og_graph`, relabeling every vertex
    /// through `og_to_self` into the contiguous range `0..order`.
    pub fn from_graph<G: BaseGraph>(og_graph: &G, og_to_self: &FxHashMap<usize, usize>) -> Self {
        let mut graph = vec![BitSet::new(og_graph.order()); og_graph.order()];

        for v in og_graph.vertices() {
            for u in og_graph.neighborhood(v) {
                let a = *og_to_self.get(&v).unwrap();
                let b = *og_to_self.get(&u).unwrap();
                graph[a].set_bit(b);
                graph[b].set_bit(a);
            }
        }
        Self { graph }
    }

    pub fn neighborhood_as_bitset(&self, u: usize) -> &BitSet {
        &self.graph[u]
    }
}

impl BaseGraph for BitGraph {
    fn degree(&self, u: usize) -> usize {
        self.graph[u].cardinality()
    }

    fn order(&self) -> usize {
        self.graph.len()
    }

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for u in vertices {
            for v in vertices {
                if u < v && !self.graph[*u].at(*v) {
                    return false;
                }
            }
        }
        true
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.graph[u].at(v)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.graph.len())
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.graph[u].iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::bit_graph::BitGraph;
    use crate::graph::hash_map_graph::HashMapGraph;
    use crate::graph::mutable_graph::MutableGraph;
    use fxhash::FxHashMap;

    #[test]
    fn test_from_graph() {
        let mut graph = HashMapGraph::new();
        graph.add_edge(10, 20);
        graph.add_edge(20, 30);

        let mut labels: Vec<usize> = graph.vertices().collect();
        labels.sort_unstable();
        let mapping: FxHashMap<usize, usize> =
            labels.iter().enumerate().map(|(i, v)| (*v, i)).collect();

        let bit_graph = BitGraph::from_graph(&graph, &mapping);
        assert_eq!(bit_graph.order(), 3);
        assert!(bit_graph.has_edge(0, 1));
        assert!(bit_graph.has_edge(1, 0));
        assert!(bit_graph.has_edge(1, 2));
        assert!(!bit_graph.has_edge(0, 2));
        assert_eq!(bit_graph.degree(1), 2);
        assert!(bit_graph.is_clique(&[0, 1]));
        assert!(!bit_graph.is_clique(&[0, 1, 2]));
    }
}
