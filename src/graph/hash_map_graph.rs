use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use fxhash::FxHashMap;
use fxhash::FxHashSet;

#[derive(Clone, Debug)]
pub struct HashMapGraph {
    data: FxHashMap<usize, FxHashSet<usize>>,
}

impl HashMapGraph {
    pub fn has_vertex(&self, u: usize) -> bool {
        self.data.contains_key(&u)
    }

    pub fn neighborhood_set(&self, u: usize) -> &FxHashSet<usize> {
        self.data.get(&u).unwrap()
    }

    pub fn size(&self) -> usize {
        self.data.values().map(|nb| nb.len()).sum::<usize>() / 2
    }

    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut edges: Vec<(usize, usize)> = self
            .data
            .iter()
            .flat_map(|(u, neighborhood)| {
                neighborhood
                    .iter()
                    .filter(move |v| u < *v)
                    .map(move |v| (*u, *v))
            })
            .collect();
        edges.sort_unstable();
        edges
    }

    pub fn vertex_induced(&self, vertices: &FxHashSet<usize>) -> Self {
        let data: FxHashMap<usize, FxHashSet<usize>> = self
            .data
            .iter()
            .filter(|(vertex, _)| vertices.contains(vertex))
            .map(|(vertex, neighborhood)| {
                (
                    *vertex,
                    neighborhood
                        .iter()
                        .copied()
                        .filter(|x| vertices.contains(x))
                        .collect(),
                )
            })
            .collect();
        Self { data }
    }

    pub fn from_graph<G: BaseGraph>(graph: &G) -> Self {
        let data = graph
            .vertices()
            .map(|v| (v, graph.neighborhood(v).collect()))
            .collect();
        HashMapGraph { data }
    }
}

impl MutableGraph for HashMapGraph {
    fn add_vertex(&mut self, u: usize) {
        self.data.entry(u).or_insert_with(FxHashSet::default);
    }

    fn remove_vertex(&mut self, u: usize) {
        if let Some(neighbors) = self.data.remove(&u) {
            for i in neighbors.iter() {
                self.data.get_mut(i).unwrap().remove(&u);
            }
        }
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        let first = self.data.entry(u).or_insert_with(FxHashSet::default);
        first.insert(v);
        let second = self.data.entry(v).or_insert_with(FxHashSet::default);
        second.insert(u);
    }

    fn remove_edge(&mut self, u: usize, v: usize) {
        assert_ne!(u, v);
        if let Some(x) = self.data.get_mut(&u) {
            x.remove(&v);
        }
        if let Some(x) = self.data.get_mut(&v) {
            x.remove(&u);
        }
    }

    fn new() -> Self {
        HashMapGraph {
            data: FxHashMap::default(),
        }
    }

    fn with_capacity(capacity: usize) -> Self {
        HashMapGraph {
            data: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }
}

impl BaseGraph for HashMapGraph {
    fn degree(&self, u: usize) -> usize {
        assert!(self.data.contains_key(&u));
        self.data.get(&u).unwrap().len()
    }

    fn order(&self) -> usize {
        self.data.len()
    }

    fn is_clique(&self, vertices: &[usize]) -> bool {
        for (i, v) in vertices.iter().enumerate() {
            assert!(self.data.contains_key(v));
            for u in vertices.iter().skip(i + 1) {
                assert!(self.data.contains_key(u));
                if !self.data.get(v).unwrap().contains(u) || !self.data.get(u).unwrap().contains(v)
                {
                    return false;
                }
            }
        }
        true
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data.get(&u).unwrap().contains(&v)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        let keys = self.data.keys().copied();
        Box::new(keys)
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data.get(&u).unwrap().iter().copied())
    }
}
