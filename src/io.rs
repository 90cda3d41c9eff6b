use crate::datastructures::BitSet;
use crate::graph::{BitGraph, HashMapGraph, MutableGraph};
use std::convert::TryFrom;
use std::io::BufRead;

fn nums_error(res: &[Result<usize, std::num::ParseIntError>]) -> bool {
    res.len() != 2 || res[0].is_err() || res[1].is_err()
}

/// Parses a DIMACS problem line `p edge <n> <m>` (or `p col <n> <m>`).
pub fn dimacs_p(line: &str) -> Result<(usize, usize), std::io::Error> {
    let nums: Vec<Result<usize, std::num::ParseIntError>> = line
        .trim_start_matches('p')
        .trim()
        .split(' ')
        .skip(1)
        .map(|s| s.parse())
        .collect();
    if nums_error(&nums) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Invalid line",
        ));
    }
    let n = nums[0].as_ref().unwrap();
    let m = nums[1].as_ref().unwrap();
    Ok((*n, *m))
}

/// Parses an edge line `e <u> <v>`, mapping the 1-based DIMACS labels to
/// 0-based vertex ids.
pub fn dimacs_e(line: &str) -> Result<(usize, usize), std::io::Error> {
    let nums: Vec<Result<usize, std::num::ParseIntError>> = line
        .trim_start_matches('e')
        .trim()
        .split(' ')
        .map(|s| s.parse())
        .collect();
    if nums_error(&nums) {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "Invalid line",
        ));
    }
    let u = nums[0].as_ref().unwrap() - 1;
    let v = nums[1].as_ref().unwrap() - 1;
    Ok((u, v))
}

pub struct DimacsRead<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<DimacsRead<T>> for HashMapGraph {
    type Error = std::io::Error;

    fn try_from(reader: DimacsRead<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph = HashMapGraph::new();
        for line in reader.lines() {
            let line = line?;
            match line.chars().next() {
                Some('p') => {}
                Some('c') => {}
                None => {}
                _ => {
                    let (u, v) = dimacs_e(&line)?;
                    if u != v {
                        graph.add_edge(u, v);
                    }
                }
            };
        }
        Ok(graph)
    }
}

impl<T: BufRead> TryFrom<DimacsRead<T>> for BitGraph {
    type Error = std::io::Error;

    fn try_from(reader: DimacsRead<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;

        let mut graph = None;
        for line in reader.lines() {
            let line = line?;
            match line.chars().next() {
                Some('c') => {}
                None => {}
                Some('p') => {
                    let (n, _) = dimacs_p(line.as_str())?;
                    graph = Some(vec![BitSet::new(n); n]);
                }
                _ => {
                    let (u, v) = dimacs_e(line.as_str())?;
                    if u != v {
                        let graph = graph.as_mut().ok_or_else(|| {
                            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Invalid line")
                        })?;
                        graph[u].set_bit(v);
                        graph[v].set_bit(u);
                    }
                }
            };
        }

        match graph {
            Some(graph) => Ok(graph.into()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Invalid line",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{BaseGraph, BitGraph, HashMapGraph};
    use crate::io::{dimacs_e, dimacs_p, DimacsRead};
    use std::convert::TryFrom;

    const INSTANCE: &str = "c sample instance\nc with two comment lines\np edge 5 4\ne 1 2\ne 2 3\ne 3 4\ne 4 5\n";

    #[test]
    fn test_dimacs_p() {
        assert_eq!(dimacs_p("p edge 125 6963").unwrap(), (125, 6963));
        assert_eq!(dimacs_p("p col 10 3").unwrap(), (10, 3));
        assert!(dimacs_p("p edge five 3").is_err());
    }

    #[test]
    fn test_dimacs_e() {
        assert_eq!(dimacs_e("e 1 2").unwrap(), (0, 1));
        assert_eq!(dimacs_e("e 17 4").unwrap(), (16, 3));
        assert!(dimacs_e("e 1").is_err());
    }

    #[test]
    fn test_read_hash_map_graph() {
        let graph = HashMapGraph::try_from(DimacsRead(INSTANCE.as_bytes())).unwrap();
        assert_eq!(graph.order(), 5);
        assert_eq!(graph.size(), 4);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(3, 4));
        assert!(!graph.has_edge(0, 2));
    }

    #[test]
    fn test_read_bit_graph() {
        let graph = BitGraph::try_from(DimacsRead(INSTANCE.as_bytes())).unwrap();
        assert_eq!(graph.order(), 5);
        assert!(graph.has_edge(0, 1));
        assert!(graph.has_edge(4, 3));
        assert!(!graph.has_edge(0, 2));
    }

    #[test]
    fn test_self_loops_dropped() {
        let graph =
            HashMapGraph::try_from(DimacsRead("p edge 2 2\ne 1 1\ne 1 2\n".as_bytes())).unwrap();
        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
    }

    #[test]
    fn test_edges_before_header_rejected_for_bit_graph() {
        assert!(BitGraph::try_from(DimacsRead("e 1 2\n".as_bytes())).is_err());
    }
}
