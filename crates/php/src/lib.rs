//! # PHP Nodes
//!
//! A deliberately small PHP syntax tree covering what generated rule scaffolding needs:
//! literals, short-syntax arrays, class-constant fetches, property and array access,
//! null-coalescing assignments, and the class members built from them (properties,
//! constants and methods).
//!
//! Nodes are immutable values. They are turned into source text by a [`Printer`], whose
//! output is fully deterministic: the same tree always prints to the same bytes, which
//! keeps generated files diff-friendly and makes textual duplicate detection reliable.
//!
//! ## Example
//!
//! ```rust
//! use rgen_php::{ArrayItem, Expr, Name, Printer};
//!
//! let array = Expr::Array(vec![ArrayItem::keyed(
//!     Expr::class_const(Name::self_ref(), "OLD_TO_NEW"),
//!     Expr::string("value"),
//! )]);
//!
//! assert_eq!(Printer::default().print_expr(&array), "[self::OLD_TO_NEW => 'value']");
//! ```

mod ast;
mod printer;

pub use crate::ast::{
    ArrayItem, ClassConst, ClassMember, ClassMethod, DocComment, Expr, Literal, Name, Param,
    Property, Stmt, TypeHint, Visibility,
};
pub use crate::printer::Printer;
