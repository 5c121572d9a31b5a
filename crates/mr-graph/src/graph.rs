//! Road graph representation and builder.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  The neighbors of
//! `LocationId l` occupy the slice:
//!
//! ```text
//! neighbors[ neighbor_start[l] .. neighbor_start[l+1] ]
//! ```
//!
//! Within that slice neighbors appear in the order their roads were declared.
//! A road declared twice yields a duplicate entry; random walkers rely on
//! that weighting, so duplicates are never collapsed.

use rustc_hash::FxHashMap;

use mr_core::LocationId;

use crate::{GraphError, GraphResult};

// ── Graph ─────────────────────────────────────────────────────────────────────

/// Undirected road graph in CSR format plus a label index.
///
/// Every road is stored as two half-edges, so the adjacency is symmetric.
/// Built only through [`GraphBuilder`] or [`Graph::from_edges`], so every
/// location has at least one road.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Label of each location.  Indexed by `LocationId`.
    names: Vec<String>,

    /// CSR row pointer.  Length = `node_count + 1`.
    neighbor_start: Vec<u32>,

    /// Neighbor targets, grouped by source location.
    neighbors: Vec<LocationId>,

    index: FxHashMap<String, LocationId>,
}

impl Graph {
    /// Build a graph from `"A-B"` edge strings.
    ///
    /// Fails on the first malformed edge.
    pub fn from_edges<I, S>(edges: I) -> GraphResult<Graph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut b = GraphBuilder::new();
        for edge in edges {
            b.add_edge(edge.as_ref())?;
        }
        Ok(b.build())
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Number of directed half-edges (twice the number of declared roads).
    pub fn half_edge_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    // ── Labels ────────────────────────────────────────────────────────────

    /// Look up the handle for `label`.
    pub fn location(&self, label: &str) -> Option<LocationId> {
        self.index.get(label).copied()
    }

    /// Like [`location`](Self::location) but reports a missing label as an error.
    pub fn require(&self, label: &str) -> GraphResult<LocationId> {
        self.location(label)
            .ok_or_else(|| GraphError::UnknownLabel(label.to_owned()))
    }

    /// Label of `id`, or `"?"` for an id outside the graph.
    pub fn name(&self, id: LocationId) -> &str {
        self.names.get(id.index()).map(String::as_str).unwrap_or("?")
    }

    #[inline]
    pub fn contains(&self, id: LocationId) -> bool {
        id.index() < self.names.len()
    }

    /// All locations in id order.
    pub fn locations(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.names.len()).map(|i| LocationId(i as u32))
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbors of `id` in declaration order.  Empty for an unknown id.
    #[inline]
    pub fn neighbors(&self, id: LocationId) -> &[LocationId] {
        if !self.contains(id) {
            return &[];
        }
        let start = self.neighbor_start[id.index()] as usize;
        let end   = self.neighbor_start[id.index() + 1] as usize;
        &self.neighbors[start..end]
    }

    /// Number of half-edges leaving `id`, duplicates included.
    #[inline]
    pub fn degree(&self, id: LocationId) -> usize {
        self.neighbors(id).len()
    }

    /// `true` if `b` is one hop from `a`.
    #[inline]
    pub fn is_adjacent(&self, a: LocationId, b: LocationId) -> bool {
        self.neighbors(a).contains(&b)
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`Graph`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use mr_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// b.add_edge("Farm-Shop").unwrap();
/// let graph = b.build();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.half_edge_count(), 2);
/// ```
#[derive(Default)]
pub struct GraphBuilder {
    names:      Vec<String>,
    index:      FxHashMap<String, LocationId>,
    half_edges: Vec<(LocationId, LocationId)>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern `label`, returning its existing handle if already seen.
    fn add_location(&mut self, label: &str) -> LocationId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = LocationId(self.names.len() as u32);
        self.names.push(label.to_owned());
        self.index.insert(label.to_owned(), id);
        id
    }

    /// Add an undirected road between two labels.
    pub fn add_road(&mut self, a: &str, b: &str) -> (LocationId, LocationId) {
        let a = self.add_location(a);
        let b = self.add_location(b);
        self.half_edges.push((a, b));
        self.half_edges.push((b, a));
        (a, b)
    }

    /// Parse an `"A-B"` edge string and add it as a road.
    ///
    /// The first `-` separates the endpoints; surrounding whitespace is
    /// trimmed.  A missing separator or an empty endpoint is rejected.
    pub fn add_edge(&mut self, edge: &str) -> GraphResult<()> {
        let (a, b) = edge
            .split_once('-')
            .map(|(a, b)| (a.trim(), b.trim()))
            .filter(|(a, b)| !a.is_empty() && !b.is_empty())
            .ok_or_else(|| GraphError::MalformedEdge(edge.to_owned()))?;
        self.add_road(a, b);
        Ok(())
    }

    /// Consume the builder and produce a [`Graph`].
    pub fn build(self) -> Graph {
        let node_count = self.names.len();

        // Stable sort keeps each source's neighbors in declaration order.
        let mut raw = self.half_edges;
        raw.sort_by_key(|&(from, _)| from.0);

        let neighbors: Vec<LocationId> = raw.iter().map(|&(_, to)| to).collect();

        let mut neighbor_start = vec![0u32; node_count + 1];
        for &(from, _) in &raw {
            neighbor_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            neighbor_start[i] += neighbor_start[i - 1];
        }
        debug_assert_eq!(neighbor_start[node_count] as usize, neighbors.len());

        Graph {
            names: self.names,
            neighbor_start,
            neighbors,
            index: self.index,
        }
    }
}
