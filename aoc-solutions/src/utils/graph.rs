//! Directed graphs keyed by small node ids: Kahn ordering and path counting.

use super::AlgoError;
use anyhow::{anyhow, ensure};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// Three-character node name such as `svr` or `out`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId([u8; 3]);

impl NodeId {
    pub const fn new(name: [u8; 3]) -> Self {
        NodeId(name)
    }
}

impl FromStr for NodeId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ensure!(s.is_ascii(), "node name {:?} is not ASCII", s);
        let name: [u8; 3] = s
            .as_bytes()
            .try_into()
            .map_err(|_| anyhow!("node name {:?} must be exactly 3 characters", s))?;
        ensure!(
            name.iter().all(|b| b.is_ascii_graphic()),
            "node name {:?} contains whitespace or control characters",
            s
        );
        Ok(NodeId(name))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // validated ASCII on construction
        self.0.iter().try_for_each(|&b| write!(f, "{}", b as char))
    }
}

/// Adjacency map from a node to its successors
pub type Graph<N> = HashMap<N, HashSet<N>>;

/// Every node mentioned in `graph`, as source or target, in an order where
/// each edge points forward (Kahn's algorithm).
///
/// A cycle leaves some nodes with a non-zero in-degree; that is reported as
/// [`AlgoError::Cycle`] rather than returning a partial order.
pub fn topological_order<N>(graph: &Graph<N>) -> Result<Vec<N>, AlgoError>
where
    N: Copy + Eq + Hash + Ord,
{
    let mut in_degrees: HashMap<N, usize> = HashMap::with_capacity(graph.len());
    for (&from, successors) in graph {
        in_degrees.entry(from).or_insert(0);
        for &to in successors {
            *in_degrees.entry(to).or_insert(0) += 1;
        }
    }

    // sorted seeds keep the order independent of hash iteration order
    let mut sources: Vec<N> = in_degrees
        .iter()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(&node, _)| node)
        .collect();
    sources.sort_unstable();
    let mut free_nodes: VecDeque<N> = sources.into();

    let mut order = Vec::with_capacity(in_degrees.len());
    while let Some(node) = free_nodes.pop_front() {
        order.push(node);
        let Some(successors) = graph.get(&node) else {
            continue;
        };
        let mut released: Vec<N> = successors
            .iter()
            .copied()
            .filter(|successor| match in_degrees.get_mut(successor) {
                Some(degree) => {
                    *degree -= 1;
                    *degree == 0
                }
                None => false,
            })
            .collect();
        released.sort_unstable();
        free_nodes.extend(released);
    }

    if order.len() != in_degrees.len() {
        return Err(AlgoError::Cycle {
            ordered: order.len(),
            total: in_degrees.len(),
        });
    }
    Ok(order)
}

/// Number of distinct paths from `start` to `end`.
///
/// Forward DP over `order`, stopping once `end` is reached. Zero when `end`
/// is unreachable or either node is absent from the graph; a count that does
/// not fit in `u64` is an [`AlgoError::Overflow`].
pub fn count_paths<N>(graph: &Graph<N>, order: &[N], start: N, end: N) -> Result<u64, AlgoError>
where
    N: Copy + Eq + Hash,
{
    if start == end {
        return Ok(1);
    }
    let mut path_counts: HashMap<N, u64> = HashMap::from([(start, 1)]);
    for node in order {
        if *node == end {
            break;
        }
        let count = path_counts.get(node).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        for &successor in graph.get(node).into_iter().flatten() {
            let total = path_counts.entry(successor).or_insert(0);
            *total = total
                .checked_add(count)
                .ok_or_else(|| AlgoError::Overflow("path count exceeds u64".to_string()))?;
        }
    }
    Ok(path_counts.get(&end).copied().unwrap_or(0))
}

/// Paths from `start` to `end` that visit both checkpoints.
///
/// In a DAG at most one of `a → b`, `b → a` has paths, so the checkpoints are
/// taken in their topological order and the three segment counts multiplied.
pub fn count_paths_via<N>(
    graph: &Graph<N>,
    order: &[N],
    start: N,
    checkpoints: [N; 2],
    end: N,
) -> Result<u64, AlgoError>
where
    N: Copy + Eq + Hash,
{
    let position = |node: N| order.iter().position(|&n| n == node);
    let [mut first, mut second] = checkpoints;
    let (Some(first_pos), Some(second_pos)) = (position(first), position(second)) else {
        return Ok(0);
    };
    if first_pos > second_pos {
        std::mem::swap(&mut first, &mut second);
    }
    let segments = [
        count_paths(graph, order, start, first)?,
        count_paths(graph, order, first, second)?,
        count_paths(graph, order, second, end)?,
    ];
    segments.into_iter().try_fold(1u64, |product, count| {
        product
            .checked_mul(count)
            .ok_or_else(|| AlgoError::Overflow("checkpoint path product exceeds u64".to_string()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn graph(edges: &[(u32, u32)]) -> Graph<u32> {
        let mut graph = Graph::new();
        for &(from, to) in edges {
            graph.entry(from).or_insert_with(HashSet::new).insert(to);
        }
        graph
    }

    fn assert_forward(graph: &Graph<u32>, order: &[u32]) {
        let rank: HashMap<u32, usize> = order.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        for (from, successors) in graph {
            for to in successors {
                assert!(rank[from] < rank[to], "{from} -> {to} points backwards");
            }
        }
    }

    #[test]
    fn diamond_has_two_paths() {
        let g = graph(&[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let order = topological_order(&g).unwrap();
        assert_eq!(order.len(), 4);
        assert_forward(&g, &order);
        assert_eq!(count_paths(&g, &order, 0, 3), Ok(2));
        assert_eq!(count_paths(&g, &order, 1, 2), Ok(0));
    }

    #[test]
    fn chain_has_one_path() {
        let edges: Vec<_> = (0..50).map(|i| (i, i + 1)).collect();
        let g = graph(&edges);
        let order = topological_order(&g).unwrap();
        assert_eq!(order, (0..=50).collect::<Vec<_>>());
        assert_eq!(count_paths(&g, &order, 0, 50), Ok(1));
        assert_eq!(count_paths(&g, &order, 50, 0), Ok(0));
    }

    #[test]
    fn cycle_is_reported() {
        let g = graph(&[(0, 1), (1, 2), (2, 1), (2, 3)]);
        assert_eq!(
            topological_order(&g),
            Err(AlgoError::Cycle {
                ordered: 1,
                total: 4
            })
        );
    }

    #[test]
    fn checkpoints_in_either_order() {
        // 0 -> {1, 2} -> 3 -> {4, 5} -> 6, checkpoints 3 and 5
        let g = graph(&[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 6), (5, 6), (5, 4)]);
        let order = topological_order(&g).unwrap();
        assert_eq!(count_paths_via(&g, &order, 0, [3, 5], 6), Ok(4));
        assert_eq!(count_paths_via(&g, &order, 0, [5, 3], 6), Ok(4));
        assert_eq!(count_paths_via(&g, &order, 0, [3, 9], 6), Ok(0));
    }

    /// `layers` stacked diamonds: 2^layers paths from 0 to the last node
    fn diamond_ladder(layers: u32) -> Graph<u32> {
        let edges: Vec<_> = (0..layers)
            .flat_map(|i| {
                let (top, bottom) = (3 * i, 3 * i + 3);
                [(top, top + 1), (top, top + 2), (top + 1, bottom), (top + 2, bottom)]
            })
            .collect();
        graph(&edges)
    }

    #[test]
    fn path_count_overflow_is_an_error() {
        let g = diamond_ladder(63);
        let order = topological_order(&g).unwrap();
        assert_eq!(count_paths(&g, &order, 0, 189), Ok(1 << 63));

        let g = diamond_ladder(70);
        let order = topological_order(&g).unwrap();
        assert!(matches!(
            count_paths(&g, &order, 0, 210),
            Err(AlgoError::Overflow(_))
        ));
        // each segment fits, the product does not
        assert!(matches!(
            count_paths_via(&g, &order, 0, [105, 150], 210),
            Err(AlgoError::Overflow(_))
        ));
    }

    #[test]
    fn node_ids_parse_and_print() {
        let node: NodeId = "svr".parse().unwrap();
        assert_eq!(node, NodeId::new(*b"svr"));
        assert_eq!(node.to_string(), "svr");
        assert!("ab".parse::<NodeId>().is_err());
        assert!("abcd".parse::<NodeId>().is_err());
        assert!("a b".parse::<NodeId>().is_err());
    }

    /// Paths by plain recursion, exponential but fine for small graphs
    fn dfs_paths(graph: &Graph<u32>, from: u32, to: u32) -> u64 {
        if from == to {
            return 1;
        }
        graph
            .get(&from)
            .into_iter()
            .flatten()
            .map(|&next| dfs_paths(graph, next, to))
            .sum()
    }

    proptest! {
        #[test]
        fn path_counts_match_dfs(
            edges in prop::collection::vec((0u32..12, 0u32..12), 0..40),
            start in 0u32..12,
            end in 0u32..12,
        ) {
            // orient every edge from lower to higher id so the graph is acyclic
            let edges: Vec<_> = edges
                .into_iter()
                .filter(|(a, b)| a != b)
                .map(|(a, b)| (a.min(b), a.max(b)))
                .collect();
            let g = graph(&edges);
            let order = topological_order(&g).unwrap();
            assert_forward(&g, &order);
            prop_assert_eq!(count_paths(&g, &order, start, end), Ok(dfs_paths(&g, start, end)));
        }

        #[test]
        fn node_ids_print_as_parsed(name in "[!-~]{3}") {
            let node: NodeId = name.parse().unwrap();
            prop_assert_eq!(node.to_string(), name.clone());
            prop_assert_eq!(node.to_string().parse::<NodeId>().unwrap(), node);
        }
    }
}
