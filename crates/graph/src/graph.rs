//! # Graph
//!
//! Insertion-ordered node collection with per-node ordered adjacency lists.
//!
//! Logical edges are stored once in a petgraph `DiGraph` that owns the node
//! payloads and edge weights. Each node's adjacency list holds
//! `(target, EdgeId)` records in insertion order; an undirected edge is one
//! logical edge referenced by two records, one in each endpoint's list.

use std::sync::atomic::{AtomicU64, Ordering};

use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use tracing::trace;

use crate::error::{GraphError, GraphResult};
use crate::node::{EdgeId, GraphTag, Node, NodeId, Position};
use crate::Weight;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: Weight = 1.0;

/// Hit radius used by pointer lookups, matching the drawn node radius.
pub const DEFAULT_HIT_RADIUS: f64 = 15.0;

static NEXT_GRAPH_TAG: AtomicU64 = AtomicU64::new(0);

/// One entry of a node's adjacency list: an arc to `target` along `edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Adjacency {
    target: NodeId,
    edge: EdgeId,
}

impl Adjacency {
    /// Node this arc points to.
    #[must_use]
    pub const fn target(self) -> NodeId {
        self.target
    }

    /// Logical edge carrying the weight.
    #[must_use]
    pub const fn edge(self) -> EdgeId {
        self.edge
    }
}

/// Mode flags fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GraphOptions {
    /// Edges only go from source to target.
    pub directed: bool,
    /// Weights are meaningful to the consumer. Algorithms read weights either way.
    pub weighted: bool,
}

/// A graph of labeled nodes with ordered, weighted adjacency lists.
///
/// Cloning issues a fresh graph identity: handles from the original are
/// rejected by the clone and the other way round.
#[derive(Debug)]
pub struct Graph {
    tag: GraphTag,
    store: DiGraph<Node, Weight>,
    adjacency: Vec<Vec<Adjacency>>,
    options: GraphOptions,
}

impl Graph {
    /// Create an empty graph with the given mode flags.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_graph::Graph;
    ///
    /// let graph = Graph::new(false, true);
    /// assert!(!graph.is_directed());
    /// assert!(graph.is_weighted());
    /// assert_eq!(graph.node_count(), 0);
    /// ```
    #[must_use]
    pub fn new(directed: bool, weighted: bool) -> Self {
        Self::with_options(GraphOptions { directed, weighted })
    }

    /// Create an empty graph from [`GraphOptions`].
    #[must_use]
    pub fn with_options(options: GraphOptions) -> Self {
        Self {
            tag: next_tag(),
            store: DiGraph::new(),
            adjacency: Vec::new(),
            options,
        }
    }

    #[must_use]
    pub const fn options(&self) -> GraphOptions {
        self.options
    }

    #[must_use]
    pub const fn is_directed(&self) -> bool {
        self.options.directed
    }

    #[must_use]
    pub const fn is_weighted(&self) -> bool {
        self.options.weighted
    }

    /// Register a node and return its handle.
    ///
    /// Labels are not checked for uniqueness.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        let index = self.store.add_node(node);
        self.adjacency.push(Vec::new());
        let id = NodeId::new(self.tag, index);
        trace!(node = %id, "Added node");
        id
    }

    /// Add an edge `from -> to` with the given weight.
    ///
    /// In an undirected graph the reverse record `to -> from` is added to
    /// `to`'s list as well, sharing the same logical edge. Self-loops and
    /// parallel edges are accepted.
    ///
    /// # Errors
    ///
    /// * [`GraphError::NodeNotFound`] if either handle was not issued by this graph
    /// * [`GraphError::InvalidWeight`] if `weight` is NaN or infinite
    ///
    /// Finite weights can still sum past `f64::MAX` along a path;
    /// [`crate::shortest_paths`] reports that as [`GraphError::DistanceOverflow`].
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_graph::{Graph, Node};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = Graph::default();
    /// let a = graph.add_node(Node::labeled("A"));
    /// let b = graph.add_node(Node::labeled("B"));
    /// graph.add_edge(a, b, 2.5)?;
    /// assert_eq!(graph.edge_count(), 1);
    /// assert_eq!(graph.degree(b)?, 1);
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> GraphResult<EdgeId> {
        if !weight.is_finite() {
            return Err(GraphError::invalid_weight(weight));
        }
        self.ensure(from)?;
        self.ensure(to)?;

        let edge = EdgeId::new(
            self.store
                .add_edge(from.node_index(), to.node_index(), weight),
        );
        self.list_mut(from)?.push(Adjacency { target: to, edge });
        if !self.is_directed() {
            self.list_mut(to)?.push(Adjacency { target: from, edge });
        }

        trace!(%from, %to, weight, %edge, "Added edge");
        Ok(edge)
    }

    /// Add an edge with [`DEFAULT_WEIGHT`].
    ///
    /// # Errors
    ///
    /// Same as [`Graph::add_edge`].
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> GraphResult<EdgeId> {
        self.add_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Whether `id` was issued by this graph.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.graph() == self.tag && id.index() < self.adjacency.len()
    }

    /// Fail fast on a handle from another graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not part of this graph.
    pub fn ensure(&self, id: NodeId) -> GraphResult<()> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(GraphError::node_not_found(id))
        }
    }

    /// Look up a node payload.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not part of this graph.
    pub fn node(&self, id: NodeId) -> GraphResult<&Node> {
        self.ensure(id)?;
        self.store
            .node_weight(id.node_index())
            .ok_or_else(|| GraphError::node_not_found(id))
    }

    /// Label of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not part of this graph.
    pub fn label(&self, id: NodeId) -> GraphResult<&str> {
        self.node(id).map(Node::label)
    }

    /// Node handles in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.store
            .node_indices()
            .map(move |index| NodeId::new(self.tag, index))
    }

    /// Nodes with their handles in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.node_ids().zip(self.store.node_weights())
    }

    /// Logical edges `(edge, from, to, weight)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, NodeId, NodeId, Weight)> + '_ {
        self.store.edge_references().map(move |edge| {
            (
                EdgeId::new(edge.id()),
                NodeId::new(self.tag, edge.source()),
                NodeId::new(self.tag, edge.target()),
                *edge.weight(),
            )
        })
    }

    #[must_use]
    pub fn first_node(&self) -> Option<NodeId> {
        self.node_ids().next()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    /// Number of logical edges. An undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Total length of all adjacency lists. An undirected edge counts twice.
    #[must_use]
    pub fn adjacency_record_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Ordered adjacency list of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not part of this graph.
    pub fn neighbors(&self, id: NodeId) -> GraphResult<&[Adjacency]> {
        self.ensure(id)?;
        Ok(self.adjacency_of(id))
    }

    /// Raw out-degree: the length of the node's adjacency list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if `id` is not part of this graph.
    pub fn degree(&self, id: NodeId) -> GraphResult<usize> {
        self.neighbors(id).map(<[Adjacency]>::len)
    }

    /// Weight of a logical edge.
    #[must_use]
    pub fn weight(&self, edge: EdgeId) -> Option<Weight> {
        self.store.edge_weight(edge.edge_index()).copied()
    }

    /// Endpoints of a logical edge in the direction it was added.
    #[must_use]
    pub fn endpoints(&self, edge: EdgeId) -> Option<(NodeId, NodeId)> {
        self.store
            .edge_endpoints(edge.edge_index())
            .map(|(from, to)| (NodeId::new(self.tag, from), NodeId::new(self.tag, to)))
    }

    /// Whether `from`'s adjacency list has a record pointing at `to`.
    #[must_use]
    pub fn has_edge(&self, from: NodeId, to: NodeId) -> bool {
        self.contains(from) && self.adjacency_of(from).iter().any(|adj| adj.target == to)
    }

    /// First node, in insertion order, lying strictly within `radius` of `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// use discrete_graph::{Graph, Node, Position, DEFAULT_HIT_RADIUS};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut graph = Graph::default();
    /// let v1 = graph.add_node(Node::at("V1", 100.0, 100.0)?);
    /// let hit = graph.find_node_near(Position::new(105.0, 98.0)?, DEFAULT_HIT_RADIUS);
    /// assert_eq!(hit, Some(v1));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn find_node_near(&self, point: Position, radius: f64) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.position().distance_to(point) < radius)
            .map(|(id, _)| id)
    }

    /// First node, in insertion order, carrying `label`.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.nodes()
            .find(|(_, node)| node.label() == label)
            .map(|(id, _)| id)
    }

    /// Like [`Graph::find_by_label`], failing when no node carries `label`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownLabel`] when no node carries `label`.
    pub fn require_label(&self, label: &str) -> GraphResult<NodeId> {
        self.find_by_label(label)
            .ok_or_else(|| GraphError::unknown_label(label))
    }

    /// The underlying petgraph store.
    ///
    /// Every logical edge appears once, oriented the way it was added, so an
    /// undirected graph should be read through an undirected view.
    #[must_use]
    pub const fn as_petgraph(&self) -> &DiGraph<Node, Weight> {
        &self.store
    }

    /// Adjacency list of a node already known to belong to this graph.
    pub(crate) fn adjacency_of(&self, id: NodeId) -> &[Adjacency] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All adjacency lists, indexed by node insertion order.
    pub(crate) fn adjacency_lists(&self) -> &[Vec<Adjacency>] {
        &self.adjacency
    }

    fn list_mut(&mut self, id: NodeId) -> GraphResult<&mut Vec<Adjacency>> {
        self.adjacency
            .get_mut(id.index())
            .ok_or_else(|| GraphError::node_not_found(id))
    }
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        let tag = next_tag();
        let adjacency = self
            .adjacency
            .iter()
            .map(|list| {
                list.iter()
                    .map(|adjacency| Adjacency {
                        target: NodeId::new(tag, adjacency.target.node_index()),
                        edge: adjacency.edge,
                    })
                    .collect()
            })
            .collect();

        Self {
            tag,
            store: self.store.clone(),
            adjacency,
            options: self.options,
        }
    }
}

fn next_tag() -> GraphTag {
    GraphTag::new(NEXT_GRAPH_TAG.fetch_add(1, Ordering::Relaxed))
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(false, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(graph: &Graph, id: NodeId) -> GraphResult<Vec<NodeId>> {
        Ok(graph.neighbors(id)?.iter().map(|adj| adj.target()).collect())
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_directed());
        assert!(!graph.is_weighted());
        assert_eq!(graph.first_node(), None);
    }

    #[test]
    fn test_nodes_keep_insertion_order() {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));
        let c = graph.add_node(Node::labeled("C"));

        let ids: Vec<NodeId> = graph.node_ids().collect();
        assert_eq!(ids, vec![a, b, c]);
        assert_eq!(graph.first_node(), Some(a));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_undirected_edge_adds_record_to_both_endpoints() -> GraphResult<()> {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));

        let edge = graph.add_edge(a, b, 4.0)?;

        assert_eq!(targets(&graph, a)?, vec![b]);
        assert_eq!(targets(&graph, b)?, vec![a]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.adjacency_record_count(), 2);
        assert_eq!(graph.weight(edge), Some(4.0));
        assert_eq!(graph.endpoints(edge), Some((a, b)));
        Ok(())
    }

    #[test]
    fn test_directed_edge_adds_single_record() -> GraphResult<()> {
        let mut graph = Graph::new(true, false);
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));

        graph.connect(a, b)?;

        assert_eq!(targets(&graph, a)?, vec![b]);
        assert!(targets(&graph, b)?.is_empty());
        assert!(graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
        Ok(())
    }

    #[test]
    fn test_both_records_share_the_logical_edge() -> GraphResult<()> {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));
        let edge = graph.connect(a, b)?;

        let forward = graph.neighbors(a)?.first().map(|adj| adj.edge());
        let backward = graph.neighbors(b)?.first().map(|adj| adj.edge());
        assert_eq!(forward, Some(edge));
        assert_eq!(backward, Some(edge));
        Ok(())
    }

    #[test]
    fn test_self_loops_and_parallel_edges_are_kept() -> GraphResult<()> {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));

        graph.connect(a, a)?;
        graph.connect(a, b)?;
        graph.connect(a, b)?;

        assert_eq!(targets(&graph, a)?, vec![a, a, b, b]);
        assert_eq!(graph.degree(a)?, 4);
        assert_eq!(graph.degree(b)?, 2);
        assert_eq!(graph.edge_count(), 3);
        Ok(())
    }

    #[test]
    fn test_default_weight_is_one() -> GraphResult<()> {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));
        let edge = graph.connect(a, b)?;
        assert_eq!(graph.weight(edge), Some(DEFAULT_WEIGHT));
        Ok(())
    }

    #[test]
    fn test_non_finite_weight_is_rejected() {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));

        let result = graph.add_edge(a, b, f64::NAN);
        assert!(matches!(result, Err(GraphError::InvalidWeight(_))));
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.adjacency_record_count(), 0);
    }

    #[test]
    fn test_handle_from_other_graph_is_rejected() {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));

        let mut other = Graph::default();
        let foreign = other.add_node(Node::labeled("X"));

        let result = graph.connect(a, foreign);
        assert_eq!(result, Err(GraphError::NodeNotFound(foreign)));
        assert!(!graph.contains(foreign));
        assert_eq!(graph.degree(a), Ok(0));
        assert!(graph.node(foreign).is_err());
    }

    #[test]
    fn test_clone_issues_its_own_handles() -> GraphResult<()> {
        let mut graph = Graph::default();
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));
        graph.connect(a, b)?;

        let mut copy = graph.clone();
        let from_copy = copy.add_node(Node::labeled("COPY-ONLY"));
        let from_graph = graph.add_node(Node::labeled("GRAPH-ONLY"));

        assert_ne!(from_copy, from_graph);
        assert!(!graph.contains(from_copy));
        assert!(!copy.contains(from_graph));
        assert!(!copy.contains(a));
        assert_eq!(
            graph.connect(a, from_copy),
            Err(GraphError::NodeNotFound(from_copy))
        );

        let copy_a = copy.require_label("A")?;
        let copy_b = copy.require_label("B")?;
        assert!(copy.has_edge(copy_a, copy_b));
        assert!(copy.has_edge(copy_b, copy_a));
        assert_eq!(targets(&copy, copy_a)?, vec![copy_b]);
        assert_eq!(copy.edge_count(), 1);
        Ok(())
    }

    #[test]
    fn test_find_node_near_returns_first_hit_in_insertion_order() -> GraphResult<()> {
        let mut graph = Graph::default();
        let first = graph.add_node(Node::at("V1", 100.0, 100.0)?);
        let second = graph.add_node(Node::at("V2", 104.0, 100.0)?);

        let point = Position::new(102.0, 100.0)?;
        assert_eq!(graph.find_node_near(point, DEFAULT_HIT_RADIUS), Some(first));

        let near_second = Position::new(118.0, 100.0)?;
        assert_eq!(
            graph.find_node_near(near_second, DEFAULT_HIT_RADIUS),
            Some(second)
        );
        Ok(())
    }

    #[test]
    fn test_find_node_near_radius_is_exclusive() -> GraphResult<()> {
        let mut graph = Graph::default();
        graph.add_node(Node::at("V1", 0.0, 0.0)?);

        assert_eq!(graph.find_node_near(Position::new(15.0, 0.0)?, 15.0), None);
        assert!(graph.find_node_near(Position::new(14.9, 0.0)?, 15.0).is_some());
        assert_eq!(Graph::default().find_node_near(Position::origin(), 15.0), None);
        Ok(())
    }

    #[test]
    fn test_find_by_label_returns_first_duplicate() {
        let mut graph = Graph::default();
        let first = graph.add_node(Node::labeled("dup"));
        let _second = graph.add_node(Node::labeled("dup"));

        assert_eq!(graph.find_by_label("dup"), Some(first));
        assert_eq!(graph.find_by_label("missing"), None);
        assert_eq!(
            graph.require_label("missing"),
            Err(GraphError::UnknownLabel("missing".to_string()))
        );
    }

    #[test]
    fn test_edges_iterate_in_insertion_order() -> GraphResult<()> {
        let mut graph = Graph::new(false, true);
        let a = graph.add_node(Node::labeled("A"));
        let b = graph.add_node(Node::labeled("B"));
        let c = graph.add_node(Node::labeled("C"));
        let ab = graph.add_edge(a, b, 2.0)?;
        let cb = graph.add_edge(c, b, 3.0)?;

        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![(ab, a, b, 2.0), (cb, c, b, 3.0)]);
        assert_eq!(graph.as_petgraph().edge_count(), 2);
        Ok(())
    }
}
