//! Disjoint-set forest with union by size and path compression.

use super::AlgoError;

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    num_disjoint_sets: usize,
}

impl DisjointSet {
    /// `len` singleton sets `{0}, {1}, ..., {len - 1}`
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
            num_disjoint_sets: len,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of `x`'s set. Every node on the way is re-pointed at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets of `x` and `y`, hanging the smaller root under the larger.
    ///
    /// Returns `false` when they were already in the same set.
    pub fn join(&mut self, x: usize, y: usize) -> bool {
        let (mut root_x, mut root_y) = (self.find(x), self.find(y));
        if root_x == root_y {
            return false;
        }
        if self.size[root_x] < self.size[root_y] {
            std::mem::swap(&mut root_x, &mut root_y);
        }
        self.parent[root_y] = root_x;
        self.size[root_x] += self.size[root_y];
        self.num_disjoint_sets -= 1;
        true
    }

    pub fn same(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub fn num_disjoint_sets(&self) -> usize {
        self.num_disjoint_sets
    }

    /// Size of every current set, in root order
    pub fn component_sizes(&self) -> Vec<usize> {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(node, &parent)| node == parent)
            .map(|(root, _)| self.size[root])
            .collect()
    }

    /// Product of the `k` largest set sizes.
    ///
    /// Uses a partial selection rather than a full sort.
    pub fn top_k_sizes_multiplied(&self, k: usize) -> Result<u64, AlgoError> {
        let mut sizes = self.component_sizes();
        if sizes.len() < k {
            return Err(AlgoError::NotEnoughComponents {
                requested: k,
                available: sizes.len(),
            });
        }
        if k == 0 {
            return Ok(1);
        }
        sizes.select_nth_unstable_by(k - 1, |a, b| b.cmp(a));
        Ok(sizes[..k].iter().map(|&s| s as u64).product())
    }
}
