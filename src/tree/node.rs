use std::fmt;

/// A single element of the parsed-source tree. The enumeration is closed:
/// the graph builder matches it exhaustively, so a new kind cannot silently
/// fall through to a default handler.
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    Module {
        body: Vec<SyntaxNode>,
    },
    FunctionDef {
        name: String,
        args: Box<SyntaxNode>,
        body: Vec<SyntaxNode>,
    },
    /// Parameter list of a function, one entry per parameter name.
    Arguments {
        args: Vec<String>,
    },
    Constant {
        text: String,
    },
    BinOp {
        op: BinaryOp,
        left: Box<SyntaxNode>,
        right: Box<SyntaxNode>,
    },
    /// Comparison, possibly chained: `left op[0] comparators[0] op[1] ...`.
    /// Rust source only ever produces a single operator, but the chained
    /// form is part of the model and the builder handles it.
    Compare {
        left: Box<SyntaxNode>,
        ops: Vec<CmpOp>,
        comparators: Vec<SyntaxNode>,
    },
    For {
        target: Box<SyntaxNode>,
        iter: Box<SyntaxNode>,
        body: Vec<SyntaxNode>,
    },
    If {
        test: Box<SyntaxNode>,
        body: Vec<SyntaxNode>,
        orelse: Vec<SyntaxNode>,
    },
    Assign {
        targets: Vec<SyntaxNode>,
        value: Box<SyntaxNode>,
    },
    Return {
        value: Option<Box<SyntaxNode>>,
    },
    Raise {
        exc: Box<SyntaxNode>,
    },
    List {
        elts: Vec<SyntaxNode>,
    },
    Subscript {
        value: Box<SyntaxNode>,
        index: Box<SyntaxNode>,
    },
    Call {
        func: Box<SyntaxNode>,
        args: Vec<SyntaxNode>,
    },
    Name {
        id: String,
    },
}

/// Arithmetic operators, plus `Range` for `a..b` iterator expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Range,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryOp::Add => "Add",
            BinaryOp::Sub => "Sub",
            BinaryOp::Mul => "Mul",
            BinaryOp::Div => "Div",
            BinaryOp::Rem => "Rem",
            BinaryOp::Range => "Range",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Lt,
    Le,
    Eq,
    Ne,
    Ge,
    Gt,
}

impl fmt::Display for CmpOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CmpOp::Lt => "Lt",
            CmpOp::Le => "Le",
            CmpOp::Eq => "Eq",
            CmpOp::Ne => "Ne",
            CmpOp::Ge => "Ge",
            CmpOp::Gt => "Gt",
        };
        f.write_str(name)
    }
}
