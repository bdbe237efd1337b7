use log::debug;
use petgraph::graph::NodeIndex;

use crate::graph::{AstGraph, NodeAttrs, Shape};
use crate::tree::{CmpOp, SyntaxNode};

/// Transforms a syntax tree into an annotated directed graph.
///
/// The graph under construction is threaded through the recursion as a
/// mutable accumulator. Every syntax node registers exactly one graph node;
/// every structural parent-child relation registers exactly one edge, with
/// the role of the child ("left", "test", "body", ...) as the edge label.
pub struct GraphBuilderPass<'a> {
    graph: &'a mut AstGraph,
}

impl<'a> GraphBuilderPass<'a> {
    pub fn new(graph: &'a mut AstGraph) -> Self {
        Self { graph }
    }

    /// Dispatch is an exhaustive match over the closed node enumeration.
    /// Returns the index of the graph node registered for `node`.
    pub fn build(&mut self, node: &SyntaxNode) -> NodeIndex {
        match node {
            SyntaxNode::Module { body } => {
                let idx = self.graph.add_node(NodeAttrs::new("Module").fill("lightgrey"));
                for child in body {
                    let child_idx = self.build(child);
                    self.graph.add_edge(idx, child_idx, "");
                }
                idx
            }
            SyntaxNode::FunctionDef { name, args, body } => {
                let idx = self
                    .graph
                    .add_node(NodeAttrs::new(format!("Function {name}")).fill("#00FF00"));
                let args_idx = self.build(args);
                self.graph.add_edge(idx, args_idx, "");
                for child in body {
                    let child_idx = self.build(child);
                    self.graph.add_edge(idx, child_idx, "");
                }
                debug!("built graph for function {name}");
                idx
            }
            SyntaxNode::Arguments { args } => {
                let idx = self
                    .graph
                    .add_node(NodeAttrs::new("arguments").fill("#6B8E23"));
                for arg in args {
                    let arg_idx = self
                        .graph
                        .add_node(NodeAttrs::new(format!("arg {arg}")).fill("#48D1CC"));
                    self.graph.add_edge(idx, arg_idx, "");
                }
                idx
            }
            SyntaxNode::Constant { text } => self.graph.add_node(
                NodeAttrs::new(format!("Constant {text}"))
                    .fill("#2E8B57")
                    .shape(Shape::House),
            ),
            SyntaxNode::BinOp { op, left, right } => {
                let idx = self
                    .graph
                    .add_node(NodeAttrs::new(format!("BinOp {op}")).fill("#778899"));
                let left_idx = self.build(left);
                self.graph.add_edge(idx, left_idx, "left");
                let right_idx = self.build(right);
                self.graph.add_edge(idx, right_idx, "right");
                idx
            }
            SyntaxNode::Compare {
                left,
                ops,
                comparators,
            } => self.build_compare(left, ops, comparators),
            SyntaxNode::For { target, iter, body } => {
                let idx = self.graph.add_node(
                    NodeAttrs::new("For").fill("coral").shape(Shape::Triangle),
                );
                let target_idx = self.build(target);
                self.graph.add_edge(idx, target_idx, "");
                let iter_idx = self.build(iter);
                self.graph.add_edge(idx, iter_idx, "");
                for child in body {
                    let child_idx = self.build(child);
                    self.graph.add_edge(idx, child_idx, "");
                }
                idx
            }
            SyntaxNode::If { test, body, orelse } => {
                let idx = self.graph.add_node(
                    NodeAttrs::new("If").fill("lightblue").shape(Shape::Diamond),
                );
                let test_idx = self.build(test);
                self.graph.add_edge(idx, test_idx, "test");
                for child in orelse {
                    let child_idx = self.build(child);
                    self.graph.add_edge(idx, child_idx, "or else");
                }
                for child in body {
                    let child_idx = self.build(child);
                    self.graph.add_edge(idx, child_idx, "body");
                }
                idx
            }
            SyntaxNode::Assign { targets, value } => {
                let idx = self.graph.add_node(NodeAttrs::new("Assign").fill("yellow"));
                for target in targets {
                    let target_idx = self.build(target);
                    self.graph.add_edge(idx, target_idx, "target");
                }
                let value_idx = self.build(value);
                self.graph.add_edge(idx, value_idx, "value");
                idx
            }
            SyntaxNode::Return { value } => {
                let idx = self.graph.add_node(
                    NodeAttrs::new("Return")
                        .fill("#9370DB")
                        .shape(Shape::Octagon),
                );
                if let Some(value) = value {
                    let value_idx = self.build(value);
                    self.graph.add_edge(idx, value_idx, "");
                }
                idx
            }
            SyntaxNode::Raise { exc } => {
                let idx = self.graph.add_node(
                    NodeAttrs::new("Raise")
                        .fill("#9370DB")
                        .shape(Shape::Octagon),
                );
                let exc_idx = self.build(exc);
                self.graph.add_edge(idx, exc_idx, "");
                idx
            }
            SyntaxNode::List { elts } => {
                let idx = self.graph.add_node(NodeAttrs::new("List").fill("pink"));
                for elt in elts {
                    let elt_idx = self.build(elt);
                    self.graph.add_edge(idx, elt_idx, "");
                }
                idx
            }
            SyntaxNode::Subscript { value, index } => {
                let idx = self
                    .graph
                    .add_node(NodeAttrs::new("Subscript").fill("green"));
                let value_idx = self.build(value);
                self.graph.add_edge(idx, value_idx, "value");
                let index_idx = self.build(index);
                self.graph.add_edge(idx, index_idx, "slice");
                idx
            }
            SyntaxNode::Call { func, args } => {
                let idx = self.graph.add_node(NodeAttrs::new("Call").fill("#6495ED"));
                let func_idx = self.build(func);
                self.graph.add_edge(idx, func_idx, "func");
                for arg in args {
                    let arg_idx = self.build(arg);
                    self.graph.add_edge(idx, arg_idx, "arg");
                }
                idx
            }
            SyntaxNode::Name { id } => self.graph.add_node(
                NodeAttrs::new(format!("Name {id}"))
                    .fill("#BDB76B")
                    .shape(Shape::Egg),
            ),
        }
    }

    /// A single-operator comparison inlines the operator into the label and
    /// adds no operator nodes; a chain of N > 1 operators keeps the bare
    /// "Compare" label and materializes one node per operator on an "op"
    /// edge. The asymmetry keeps simple comparisons visually compact.
    fn build_compare(
        &mut self,
        left: &SyntaxNode,
        ops: &[CmpOp],
        comparators: &[SyntaxNode],
    ) -> NodeIndex {
        let label = if ops.len() == 1 {
            format!("Compare {}", ops[0])
        } else {
            "Compare".to_string()
        };
        let idx = self.graph.add_node(NodeAttrs::new(label).fill("orange"));

        let left_idx = self.build(left);
        self.graph.add_edge(idx, left_idx, "left");

        if ops.len() > 1 {
            for op in ops {
                let op_idx = self
                    .graph
                    .add_node(NodeAttrs::new(op.to_string()).fill("blue"));
                self.graph.add_edge(idx, op_idx, "op");
            }
        }

        for comparator in comparators {
            let comp_idx = self.build(comparator);
            self.graph.add_edge(idx, comp_idx, "comp");
        }
        idx
    }
}
