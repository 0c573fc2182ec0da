// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! Union by rank with path compression over the fixed universe `0..len`.

#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	rank: Vec<u8>,
	components: usize,
}

impl DisjointSet {
	/// `size` singleton classes `{0}, {1}, ..., {size - 1}`.
	pub fn make_singletons(size: usize) -> DisjointSet {
		DisjointSet {
			parent: (0..size).collect(),
			rank: vec![0; size],
			components: size,
		}
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	pub fn is_empty(&self) -> bool {
		self.parent.is_empty()
	}

	pub fn component_count(&self) -> usize {
		self.components
	}

	/// Representative of the class holding `x`. Panics if `x >= len()`.
	pub fn find(&mut self, x: usize) -> usize {
		let parent = self.parent[x];
		if parent != x {
			self.parent[x] = self.find(parent);
		}
		self.parent[x]
	}

	/// Like `find` but read-only; walks at most O(log len) links under union by rank.
	pub fn root(&self, mut x: usize) -> usize {
		while self.parent[x] != x {
			x = self.parent[x];
		}
		x
	}

	/// Merges the classes of `x` and `y`; returns false if they were already one.
	pub fn unite(&mut self, x: usize, y: usize) -> bool {
		let x_root = self.find(x);
		let y_root = self.find(y);
		if x_root == y_root {
			return false;
		}
		if self.rank[x_root] < self.rank[y_root] {
			self.parent[x_root] = y_root;
		} else if self.rank[x_root] > self.rank[y_root] {
			self.parent[y_root] = x_root;
		} else {
			self.parent[y_root] = x_root;
			self.rank[x_root] += 1;
		}
		self.components -= 1;
		true
	}

	pub fn connected(&self, x: usize, y: usize) -> bool {
		self.root(x) == self.root(y)
	}
}
