mod lower;
mod node;

pub use lower::lower_source;
pub use node::{BinaryOp, CmpOp, SyntaxNode};
