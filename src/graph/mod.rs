mod ast_graph;
mod attrs;

pub use ast_graph::AstGraph;
pub use attrs::{NodeAttrs, Shape};
