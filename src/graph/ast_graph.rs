use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{EdgeRef, IntoNodeReferences};

use crate::graph::NodeAttrs;
use crate::passes::DotRendererPass;

/// The annotated directed graph built from a syntax tree: one node per
/// visited syntax node, one role-labeled edge per parent-child relation.
#[derive(Debug)]
pub struct AstGraph {
    graph: DiGraph<NodeAttrs, String>,
    bgcolor: String,
}

impl Default for AstGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl AstGraph {
    pub fn new() -> Self {
        AstGraph {
            graph: DiGraph::new(),
            bgcolor: "beige".to_string(),
        }
    }

    pub fn add_node(&mut self, attrs: NodeAttrs) -> NodeIndex {
        self.graph.add_node(attrs)
    }

    /// `role` is the structural label of the relation ("left", "test", ...).
    /// An empty role renders as an unlabeled edge.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, role: &str) {
        self.graph.add_edge(from, to, role.to_string());
    }

    pub fn bgcolor(&self) -> &str {
        &self.bgcolor
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &NodeAttrs)> {
        self.graph.node_references()
    }

    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex, &str)> {
        self.graph
            .edge_references()
            .map(|edge| (edge.source(), edge.target(), edge.weight().as_str()))
    }

    pub fn to_dot(&self) -> String {
        DotRendererPass::render(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeAttrs;

    #[test]
    fn graph_is_debug_printable() {
        let mut graph = AstGraph::new();
        graph.add_node(NodeAttrs::new("Module").fill("lightgrey"));
        let dump = format!("{graph:?}");
        assert!(dump.contains("Module"));
        assert!(dump.contains("beige"));
    }
}
