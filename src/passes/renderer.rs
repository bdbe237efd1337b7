use std::path::Path;

use graphviz_rust::cmd::{CommandArg, Format};
use log::info;

use crate::error::Error;
use crate::graph::AstGraph;

/// Serializes an [`AstGraph`] to DOT text and hands it to Graphviz.
pub struct DotRendererPass;

impl DotRendererPass {
    /// Node and edge lines follow petgraph insertion order, so the output is
    /// byte-identical across runs for the same input tree.
    pub fn render(graph: &AstGraph) -> String {
        let mut dot = String::from("digraph G {\n");
        dot.push_str(&format!("    bgcolor=\"{}\";\n", graph.bgcolor()));
        dot.push_str("    node [style=filled, shape=box3d, fillcolor=white];\n\n");

        for (idx, attrs) in graph.nodes() {
            dot.push_str(&format!(
                "    node_{} [label=\"{}\", shape={}, fillcolor=\"{}\"];\n",
                idx.index(),
                Self::escape_label(&attrs.label),
                attrs.shape.as_str(),
                attrs.fillcolor,
            ));
        }

        dot.push('\n');
        for (from, to, role) in graph.edges() {
            if role.is_empty() {
                dot.push_str(&format!(
                    "    node_{} -> node_{};\n",
                    from.index(),
                    to.index()
                ));
            } else {
                dot.push_str(&format!(
                    "    node_{} -> node_{} [label=\"{}\"];\n",
                    from.index(),
                    to.index(),
                    Self::escape_label(role),
                ));
            }
        }

        dot.push_str("}\n");
        dot
    }

    /// Rasterizes the graph to a PNG at `path` via the Graphviz layout
    /// engine. The caller is responsible for the parent directory existing.
    pub fn write_png(graph: &AstGraph, path: &Path) -> Result<(), Error> {
        let dot = Self::render(graph);
        graphviz_rust::exec_dot(
            dot,
            vec![
                Format::Png.into(),
                CommandArg::Output(path.display().to_string()),
            ],
        )
        .map_err(|e| Error::Render(e.to_string()))?;
        info!("wrote graph image to {}", path.display());
        Ok(())
    }

    fn escape_label(label: &str) -> String {
        label
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{NodeAttrs, Shape};

    #[test]
    fn renders_background_and_default_attrs() {
        let graph = AstGraph::new();
        let dot = DotRendererPass::render(&graph);
        assert!(dot.starts_with("digraph G {"));
        assert!(dot.contains("bgcolor=\"beige\""));
        assert!(dot.contains("node [style=filled, shape=box3d, fillcolor=white]"));
    }

    #[test]
    fn renders_nodes_and_labeled_edges() {
        let mut graph = AstGraph::new();
        let a = graph.add_node(NodeAttrs::new("If").fill("lightblue").shape(Shape::Diamond));
        let b = graph.add_node(NodeAttrs::new("Name n").fill("#BDB76B").shape(Shape::Egg));
        graph.add_edge(a, b, "test");

        let dot = DotRendererPass::render(&graph);
        assert!(dot.contains("node_0 [label=\"If\", shape=diamond, fillcolor=\"lightblue\"];"));
        assert!(dot.contains("node_1 [label=\"Name n\", shape=egg, fillcolor=\"#BDB76B\"];"));
        assert!(dot.contains("node_0 -> node_1 [label=\"test\"];"));
    }

    #[test]
    fn unlabeled_edges_omit_the_label_attribute() {
        let mut graph = AstGraph::new();
        let a = graph.add_node(NodeAttrs::new("Module").fill("lightgrey"));
        let b = graph.add_node(NodeAttrs::new("Return"));
        graph.add_edge(a, b, "");

        let dot = DotRendererPass::render(&graph);
        assert!(dot.contains("node_0 -> node_1;\n"));
    }

    #[test]
    fn escapes_quotes_in_labels() {
        let mut graph = AstGraph::new();
        graph.add_node(NodeAttrs::new("Constant \"x\""));
        let dot = DotRendererPass::render(&graph);
        assert!(dot.contains("label=\"Constant \\\"x\\\"\""));
    }
}
