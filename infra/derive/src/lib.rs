#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the `rgen` crates.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! rgen-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod error;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Turns an enum into a crate error type with context support.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]`, unless already derived.
/// * A `<ErrorName>Ext` trait with `.context(...)`, implemented for `Result<T, ErrorName>`
///   and for `Result<T, Source>` of every variant that wraps a source error.
/// * `From<Source>` for each such variant, so `?` converts upstream errors.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, context }`
///   variant exists.
/// * A private `format_context` helper rendering `" (context)"` or nothing, meant for the
///   `#[error(...)]` strings.
///
/// # Requirements
///
/// * Every variant has named fields.
/// * A `context` field, when present, is `Option<Cow<'static, str>>`.
/// * A variant with a source (a field named `source` or marked `#[source]`/`#[from]`) also
///   carries `context`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[rgen_derive::rgen_error]
/// pub enum StoreError {
///     #[error("I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load(path: &str) -> Result<String, StoreError> {
///     std::fs::read_to_string(path).context(format!("Reading {path}"))
/// }
/// ```
#[proc_macro_attribute]
pub fn rgen_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    error::expand(input).into()
}
