//! Two single-pass pipelines over one crate:
//!
//! 1. parse a function's source, lower it into a closed syntax-tree
//!    enumeration, transform that into a styled directed graph, and hand the
//!    DOT text to Graphviz for rasterization;
//! 2. assemble a LaTeX report embedding a table and the rendered image.
//!
//! Both run to completion in one invocation with no shared state between
//! them; every failure is fatal and propagates to the caller.

use std::path::Path;

pub mod demo;
mod error;
pub mod graph;
pub mod latex;
mod passes;
pub mod tree;

pub use error::Error;
pub use graph::{AstGraph, NodeAttrs, Shape};
pub use passes::{DotRendererPass, GraphBuilderPass};

/// Parses `source` and builds the annotated graph of its syntax tree.
pub fn build_graph(source: &str) -> Result<AstGraph, Error> {
    let tree = tree::lower_source(source)?;
    let mut graph = AstGraph::new();
    GraphBuilderPass::new(&mut graph).build(&tree);
    Ok(graph)
}

/// Full renderer pipeline: source text to a PNG at `path`. The parent
/// directory must already exist; directory creation is the caller's step.
pub fn create_ast_image(source: &str, path: &Path) -> Result<(), Error> {
    let graph = build_graph(source)?;
    DotRendererPass::write_png(&graph, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_graph_for_the_specimen() {
        let graph = build_graph(demo::FIBONACCI_SOURCE).unwrap();
        assert!(graph.node_count() > 0);
        // A tree plus the per-parameter argument nodes: edges = nodes - 1.
        assert_eq!(graph.edge_count(), graph.node_count() - 1);

        let dot = graph.to_dot();
        assert!(dot.contains("Function fibonacci"));
        assert!(dot.contains("arg n"));
        assert!(dot.contains("Raise"));
        assert!(dot.contains("Compare Lt"));
        assert!(dot.contains("BinOp Range"));
        assert!(dot.contains("bgcolor=\"beige\""));
    }

    #[test]
    fn graph_construction_is_deterministic() {
        let first = build_graph(demo::FIBONACCI_SOURCE).unwrap().to_dot();
        let second = build_graph(demo::FIBONACCI_SOURCE).unwrap().to_dot();
        assert_eq!(first, second);
    }

    #[test]
    fn unsupported_source_produces_no_partial_graph() {
        let err = build_graph("fn spin() { loop { } }").unwrap_err();
        assert!(matches!(err, Error::UnsupportedNode(_)));
    }
}
