//! Communication-class analysis.
//!
//! The transition matrix is read as a directed graph (any nonzero entry is
//! an edge, regardless of magnitude).  Its strongly connected components
//! are the communication classes; the acyclic condensation then classifies
//! each class: a condensed node with no outgoing edge is a *closed*
//! (absorbing) class, any other is *open*.  Because the condensation is
//! acyclic, a self-loop inside a class never counts as an outgoing edge —
//! a single state with self-transition probability 1 is closed.

use mk_math::SparseMatrix;
use petgraph::algo::condensation;
use petgraph::graph::DiGraph;

/// The partition of the state set into closed and open communication
/// classes, over canonical state indices.
///
/// Every state belongs to exactly one class.  Class order follows the
/// underlying graph traversal; no canonical ordering is promised beyond
/// the closed/open grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct CommunicationClasses {
    closed: Vec<Vec<usize>>,
    open: Vec<Vec<usize>>,
}

impl CommunicationClasses {
    /// Analyze the adjacency structure of a square transition matrix.
    pub fn analyze(matrix: &SparseMatrix) -> Self {
        let n = matrix.rows();
        let mut graph = DiGraph::<usize, ()>::with_capacity(n, matrix.nnz());
        let nodes: Vec<_> = (0..n).map(|i| graph.add_node(i)).collect();
        for i in 0..n {
            for (j, _) in matrix.row(i) {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }

        // acyclic condensation: intra-class edges (self-loops included)
        // are dropped, so out-degree 0 means no way to leave the class
        let condensed = condensation(graph, true);
        let mut closed = Vec::new();
        let mut open = Vec::new();
        for node in condensed.node_indices() {
            let members = condensed[node].clone();
            if condensed.neighbors(node).next().is_none() {
                closed.push(members);
            } else {
                open.push(members);
            }
        }
        Self { closed, open }
    }

    /// The closed (absorbing) classes.
    pub fn closed(&self) -> &[Vec<usize>] {
        &self.closed
    }

    /// The open classes.
    pub fn open(&self) -> &[Vec<usize>] {
        &self.open
    }

    /// Total number of classes.
    pub fn len(&self) -> usize {
        self.closed.len() + self.open.len()
    }

    /// Return `true` if there are no classes (only for an empty matrix).
    pub fn is_empty(&self) -> bool {
        self.closed.is_empty() && self.open.is_empty()
    }

    /// Iterate over all classes with their closedness flag.
    pub fn iter(&self) -> impl Iterator<Item = (&Vec<usize>, bool)> {
        self.closed
            .iter()
            .map(|c| (c, true))
            .chain(self.open.iter().map(|c| (c, false)))
    }

    /// The class containing state index `i`, with its closedness flag.
    pub fn class_of(&self, i: usize) -> Option<(&Vec<usize>, bool)> {
        self.iter().find(|(members, _)| members.contains(&i))
    }
}

impl std::fmt::Display for CommunicationClasses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} closed class(es) {:?}, {} open class(es) {:?}",
            self.closed.len(),
            self.closed,
            self.open.len(),
            self.open
        )
    }
}
