//! Node types: positions, labeled nodes and the handles a [`Graph`] issues.
//!
//! [`Graph`]: crate::Graph

use std::fmt;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::error::{GraphError, GraphResult};

/// Identity of the graph that issued a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct GraphTag(u64);

impl GraphTag {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// Opaque handle to a node registered in a [`Graph`](crate::Graph).
///
/// Two nodes with the same label are still distinct handles. A handle is only
/// meaningful for the graph that returned it from `add_node`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    graph: GraphTag,
    index: NodeIndex,
}

impl NodeId {
    pub(crate) const fn new(graph: GraphTag, index: NodeIndex) -> Self {
        Self { graph, index }
    }

    pub(crate) const fn graph(self) -> GraphTag {
        self.graph
    }

    pub(crate) const fn node_index(self) -> NodeIndex {
        self.index
    }

    /// Position of the node in its graph's insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.index.index()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.index.index())
    }
}

/// Handle to a logical edge. An undirected edge is one logical edge shared by
/// two adjacency records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(EdgeIndex);

impl EdgeId {
    pub(crate) const fn new(index: EdgeIndex) -> Self {
        Self(index)
    }

    pub(crate) const fn edge_index(self) -> EdgeIndex {
        self.0
    }

    /// Position of the edge in insertion order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0.index()
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0.index())
    }
}

/// Position in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Creates a new Position with validation
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidPosition`] if a coordinate is not finite
    pub fn new(x: f64, y: f64) -> GraphResult<Self> {
        if !x.is_finite() {
            return Err(GraphError::invalid_position(format!(
                "x coordinate must be finite, got: {x}"
            )));
        }
        if !y.is_finite() {
            return Err(GraphError::invalid_position(format!(
                "y coordinate must be finite, got: {y}"
            )));
        }
        Ok(Self { x, y })
    }

    /// Creates a position at the origin
    #[must_use]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

/// A labeled point. Its adjacency list lives in the graph it is added to.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    label: String,
    position: Position,
}

impl Node {
    /// Creates a node at an already validated position.
    #[must_use]
    pub fn new(label: impl Into<String>, position: Position) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }

    /// Creates a node from raw coordinates.
    ///
    /// # Errors
    /// Returns an error if a coordinate is not finite
    pub fn at(label: impl Into<String>, x: f64, y: f64) -> GraphResult<Self> {
        Ok(Self::new(label, Position::new(x, y)?))
    }

    /// Creates a node at the origin. Handy when the position is irrelevant.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self::new(label, Position::origin())
    }

    /// Returns the node's label
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the node's position
    #[must_use]
    pub const fn position(&self) -> Position {
        self.position
    }
}
