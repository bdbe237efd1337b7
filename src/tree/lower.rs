use log::debug;
use syn::{Expr, File, FnArg, Item, ItemFn, Lit, Pat, Stmt};

use crate::error::Error;
use crate::tree::{BinaryOp, CmpOp, SyntaxNode};

/// Parses `source` and lowers it into the closed [`SyntaxNode`] tree.
///
/// This is the seam where the open `syn` grammar meets the closed
/// enumeration: any construct without a lowering rule fails with
/// [`Error::UnsupportedNode`]. There is deliberately no fallback.
pub fn lower_source(source: &str) -> Result<SyntaxNode, Error> {
    let file: File = syn::parse_file(source)?;
    let body = file
        .items
        .iter()
        .map(lower_item)
        .collect::<Result<Vec<_>, _>>()?;
    debug!("lowered {} top-level item(s)", body.len());
    Ok(SyntaxNode::Module { body })
}

fn lower_item(item: &Item) -> Result<SyntaxNode, Error> {
    match item {
        Item::Fn(item_fn) => lower_fn(item_fn),
        _ => Err(Error::UnsupportedNode("non-function item".to_string())),
    }
}

fn lower_fn(item: &ItemFn) -> Result<SyntaxNode, Error> {
    let name = item.sig.ident.to_string();
    let args = item
        .sig
        .inputs
        .iter()
        .map(|input| match input {
            FnArg::Typed(pat_type) => match &*pat_type.pat {
                Pat::Ident(pat_ident) => Ok(pat_ident.ident.to_string()),
                _ => Err(Error::UnsupportedNode("argument pattern".to_string())),
            },
            FnArg::Receiver(_) => Err(Error::UnsupportedNode("self argument".to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let body = lower_block(&item.block)?;
    Ok(SyntaxNode::FunctionDef {
        name,
        args: Box::new(SyntaxNode::Arguments { args }),
        body,
    })
}

fn lower_block(block: &syn::Block) -> Result<Vec<SyntaxNode>, Error> {
    block.stmts.iter().map(lower_stmt).collect()
}

fn lower_stmt(stmt: &Stmt) -> Result<SyntaxNode, Error> {
    match stmt {
        Stmt::Local(local) => {
            let target = lower_pat(&local.pat)?;
            let init = local
                .init
                .as_ref()
                .ok_or_else(|| Error::UnsupportedNode("let without initializer".to_string()))?;
            Ok(SyntaxNode::Assign {
                targets: vec![target],
                value: Box::new(lower_expr(&init.expr)?),
            })
        }
        Stmt::Expr(expr, _) => lower_expr(expr),
        Stmt::Macro(stmt_macro) => lower_macro(&stmt_macro.mac),
        Stmt::Item(_) => Err(Error::UnsupportedNode("nested item".to_string())),
    }
}

fn lower_pat(pat: &Pat) -> Result<SyntaxNode, Error> {
    match pat {
        Pat::Ident(pat_ident) => Ok(SyntaxNode::Name {
            id: pat_ident.ident.to_string(),
        }),
        _ => Err(Error::UnsupportedNode("binding pattern".to_string())),
    }
}

fn lower_expr(expr: &Expr) -> Result<SyntaxNode, Error> {
    match expr {
        Expr::Binary(binary) => lower_binary(binary),
        Expr::Range(range) => {
            let start = range
                .start
                .as_deref()
                .ok_or_else(|| Error::UnsupportedNode("open range".to_string()))?;
            let end = range
                .end
                .as_deref()
                .ok_or_else(|| Error::UnsupportedNode("open range".to_string()))?;
            Ok(SyntaxNode::BinOp {
                op: BinaryOp::Range,
                left: Box::new(lower_expr(start)?),
                right: Box::new(lower_expr(end)?),
            })
        }
        Expr::If(expr_if) => {
            let test = lower_expr(&expr_if.cond)?;
            let body = lower_block(&expr_if.then_branch)?;
            let orelse = match &expr_if.else_branch {
                None => Vec::new(),
                Some((_, else_expr)) => match &**else_expr {
                    Expr::Block(block) => lower_block(&block.block)?,
                    Expr::If(_) => vec![lower_expr(else_expr)?],
                    _ => return Err(Error::UnsupportedNode("else branch".to_string())),
                },
            };
            Ok(SyntaxNode::If {
                test: Box::new(test),
                body,
                orelse,
            })
        }
        Expr::ForLoop(expr_for) => Ok(SyntaxNode::For {
            target: Box::new(lower_pat(&expr_for.pat)?),
            iter: Box::new(lower_expr(&expr_for.expr)?),
            body: lower_block(&expr_for.body)?,
        }),
        Expr::Assign(assign) => Ok(SyntaxNode::Assign {
            targets: vec![lower_expr(&assign.left)?],
            value: Box::new(lower_expr(&assign.right)?),
        }),
        Expr::Return(expr_return) => {
            let value = match &expr_return.expr {
                Some(value) => Some(Box::new(lower_expr(value)?)),
                None => None,
            };
            Ok(SyntaxNode::Return { value })
        }
        Expr::Call(call) => Ok(SyntaxNode::Call {
            func: Box::new(lower_expr(&call.func)?),
            args: call
                .args
                .iter()
                .map(lower_expr)
                .collect::<Result<Vec<_>, _>>()?,
        }),
        Expr::Index(index) => Ok(SyntaxNode::Subscript {
            value: Box::new(lower_expr(&index.expr)?),
            index: Box::new(lower_expr(&index.index)?),
        }),
        Expr::Array(array) => Ok(SyntaxNode::List {
            elts: array
                .elems
                .iter()
                .map(lower_expr)
                .collect::<Result<Vec<_>, _>>()?,
        }),
        Expr::Lit(expr_lit) => Ok(SyntaxNode::Constant {
            text: literal_text(&expr_lit.lit),
        }),
        Expr::Path(path) => {
            if path.qself.is_none() && path.path.segments.len() == 1 {
                Ok(SyntaxNode::Name {
                    id: path.path.segments[0].ident.to_string(),
                })
            } else {
                Err(Error::UnsupportedNode("path expression".to_string()))
            }
        }
        Expr::Paren(paren) => lower_expr(&paren.expr),
        Expr::Macro(expr_macro) => lower_macro(&expr_macro.mac),
        Expr::MethodCall(_) => Err(Error::UnsupportedNode("method call".to_string())),
        Expr::While(_) => Err(Error::UnsupportedNode("while loop".to_string())),
        Expr::Loop(_) => Err(Error::UnsupportedNode("loop".to_string())),
        Expr::Match(_) => Err(Error::UnsupportedNode("match".to_string())),
        Expr::Closure(_) => Err(Error::UnsupportedNode("closure".to_string())),
        _ => Err(Error::UnsupportedNode("expression".to_string())),
    }
}

fn lower_binary(binary: &syn::ExprBinary) -> Result<SyntaxNode, Error> {
    let left = lower_expr(&binary.left)?;
    let right = lower_expr(&binary.right)?;
    if let Some(op) = arith_op(&binary.op) {
        return Ok(SyntaxNode::BinOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        });
    }
    if let Some(op) = cmp_op(&binary.op) {
        return Ok(SyntaxNode::Compare {
            left: Box::new(left),
            ops: vec![op],
            comparators: vec![right],
        });
    }
    Err(Error::UnsupportedNode("binary operator".to_string()))
}

fn arith_op(op: &syn::BinOp) -> Option<BinaryOp> {
    match op {
        syn::BinOp::Add(_) => Some(BinaryOp::Add),
        syn::BinOp::Sub(_) => Some(BinaryOp::Sub),
        syn::BinOp::Mul(_) => Some(BinaryOp::Mul),
        syn::BinOp::Div(_) => Some(BinaryOp::Div),
        syn::BinOp::Rem(_) => Some(BinaryOp::Rem),
        _ => None,
    }
}

fn cmp_op(op: &syn::BinOp) -> Option<CmpOp> {
    match op {
        syn::BinOp::Lt(_) => Some(CmpOp::Lt),
        syn::BinOp::Le(_) => Some(CmpOp::Le),
        syn::BinOp::Eq(_) => Some(CmpOp::Eq),
        syn::BinOp::Ne(_) => Some(CmpOp::Ne),
        syn::BinOp::Ge(_) => Some(CmpOp::Ge),
        syn::BinOp::Gt(_) => Some(CmpOp::Gt),
        _ => None,
    }
}

/// `panic!` is the one supported macro; its message becomes the child of a
/// Raise node, matching how an error signal reads in the rendered graph.
fn lower_macro(mac: &syn::Macro) -> Result<SyntaxNode, Error> {
    if !mac.path.is_ident("panic") {
        let name = mac
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        return Err(Error::UnsupportedNode(format!("{name}! macro")));
    }
    let message: Expr = syn::parse2(mac.tokens.clone())?;
    Ok(SyntaxNode::Raise {
        exc: Box::new(lower_expr(&message)?),
    })
}

fn literal_text(lit: &Lit) -> String {
    match lit {
        Lit::Str(lit_str) => lit_str.value(),
        Lit::Int(lit_int) => lit_int.base10_digits().to_string(),
        Lit::Float(lit_float) => lit_float.base10_digits().to_string(),
        Lit::Bool(lit_bool) => lit_bool.value.to_string(),
        other => quote::quote!(#other).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowers_a_minimal_function() {
        let tree = lower_source("fn one() { return 1; }").unwrap();
        let SyntaxNode::Module { body } = &tree else {
            panic!("expected a module root");
        };
        assert_eq!(body.len(), 1);
        let SyntaxNode::FunctionDef { name, body, .. } = &body[0] else {
            panic!("expected a function definition");
        };
        assert_eq!(name, "one");
        assert_eq!(
            body[0],
            SyntaxNode::Return {
                value: Some(Box::new(SyntaxNode::Constant {
                    text: "1".to_string()
                })),
            }
        );
    }

    #[test]
    fn comparison_lowers_to_single_operator_compare() {
        let tree = lower_source("fn check(n: i64) { if n < 0 { return 0; } }").unwrap();
        let dump = format!("{tree:?}");
        assert!(dump.contains("Compare"));
        assert!(dump.contains("Lt"));
    }

    #[test]
    fn panic_lowers_to_raise() {
        let tree = lower_source(r#"fn boom() { panic!("no"); }"#).unwrap();
        let dump = format!("{tree:?}");
        assert!(dump.contains("Raise"));
        assert!(dump.contains("no"));
    }

    #[test]
    fn range_lowers_to_range_binop() {
        let tree = lower_source("fn walk(n: i64) { for i in 0..n { let x = i; } }").unwrap();
        let dump = format!("{tree:?}");
        assert!(dump.contains("Range"));
    }

    #[test]
    fn unsupported_constructs_are_rejected() {
        let err = lower_source("fn spin() { while true { } }").unwrap_err();
        assert!(matches!(err, Error::UnsupportedNode(kind) if kind == "while loop"));

        let err = lower_source("fn call(s: String) { s.len(); }").unwrap_err();
        assert!(matches!(err, Error::UnsupportedNode(kind) if kind == "method call"));
    }

    #[test]
    fn invalid_syntax_is_a_parse_error() {
        let err = lower_source("fn broken(").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }
}
