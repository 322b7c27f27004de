use crate::ast::{
    ArrayItem, ClassConst, ClassMember, ClassMethod, DocComment, Expr, Literal, Name, Param,
    Property, Stmt,
};
use std::fmt::Write as _;

const DEFAULT_INDENT: &str = "    ";

/// Binding strength used to decide where parentheses are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Assign,
    Coalesce,
    Primary,
}

/// Pretty-printer for [`Expr`] trees and class members.
///
/// Arrays are always printed with short syntax on a single line, strings are always
/// single-quoted, and members are separated by a single newline. Top-level output carries
/// no indentation, so callers can place it anywhere in a template.
#[derive(Debug, Clone)]
pub struct Printer {
    indent: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self { indent: DEFAULT_INDENT.to_owned() }
    }
}

impl Printer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `indent` for one level of method-body indentation.
    #[must_use]
    pub fn with_indent(indent: impl Into<String>) -> Self {
        Self { indent: indent.into() }
    }

    #[must_use]
    pub fn print_expr(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write_expr(&mut out, expr);
        out
    }

    /// Prints members one after another, separated by a newline.
    #[must_use]
    pub fn print_members(&self, members: &[ClassMember]) -> String {
        members.iter().map(|member| self.print_member(member)).collect::<Vec<_>>().join("\n")
    }

    #[must_use]
    pub fn print_member(&self, member: &ClassMember) -> String {
        match member {
            ClassMember::Property(property) => self.print_property(property),
            ClassMember::Const(constant) => self.print_const(constant),
            ClassMember::Method(method) => self.print_method(method),
        }
    }

    #[must_use]
    pub fn print_property(&self, property: &Property) -> String {
        let mut out = String::new();
        write_doc(&mut out, property.doc.as_ref());
        out.push_str(property.visibility.as_str());
        out.push(' ');
        if let Some(type_hint) = property.type_hint {
            out.push_str(type_hint.as_str());
            out.push(' ');
        }
        out.push('$');
        out.push_str(&property.name);
        if let Some(default) = &property.default {
            out.push_str(" = ");
            self.write_expr(&mut out, default);
        }
        out.push(';');
        out
    }

    #[must_use]
    pub fn print_const(&self, constant: &ClassConst) -> String {
        let mut out = String::new();
        write_doc(&mut out, constant.doc.as_ref());
        let _ = write!(out, "{} const {} = ", constant.visibility.as_str(), constant.name);
        self.write_expr(&mut out, &constant.value);
        out.push(';');
        out
    }

    #[must_use]
    pub fn print_method(&self, method: &ClassMethod) -> String {
        let mut out = String::new();
        write_doc(&mut out, method.doc.as_ref());

        let params = method.params.iter().map(print_param).collect::<Vec<_>>().join(", ");
        let _ = write!(out, "{} function {}({params})", method.visibility.as_str(), method.name);
        if let Some(return_type) = method.return_type {
            let _ = write!(out, ": {}", return_type.as_str());
        }

        out.push_str("\n{\n");
        for stmt in &method.body {
            out.push_str(&self.indent);
            self.write_stmt(&mut out, stmt);
            out.push('\n');
        }
        out.push('}');
        out
    }

    fn write_stmt(&self, out: &mut String, stmt: &Stmt) {
        match stmt {
            Stmt::Expression(expr) => {
                self.write_expr(out, expr);
                out.push(';');
            },
        }
    }

    fn write_expr(&self, out: &mut String, expr: &Expr) {
        match expr {
            Expr::Literal(literal) => write_literal(out, literal),
            Expr::Array(items) => {
                out.push('[');
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        out.push_str(", ");
                    }
                    self.write_array_item(out, item);
                }
                out.push(']');
            },
            Expr::ClassConstFetch { class, constant } => {
                write_name(out, class);
                out.push_str("::");
                out.push_str(constant);
            },
            Expr::Variable(name) => {
                out.push('$');
                out.push_str(name);
            },
            Expr::PropertyFetch { object, property } => {
                self.write_operand(out, object, Precedence::Primary);
                out.push_str("->");
                out.push_str(property);
            },
            Expr::ArrayDimFetch { array, dim } => {
                self.write_operand(out, array, Precedence::Primary);
                out.push('[');
                self.write_expr(out, dim);
                out.push(']');
            },
            Expr::Coalesce { left, right } => {
                // `??` is right-associative
                self.write_operand(out, left, Precedence::Primary);
                out.push_str(" ?? ");
                self.write_operand(out, right, Precedence::Coalesce);
            },
            Expr::Assign { target, value } => {
                self.write_operand(out, target, Precedence::Primary);
                out.push_str(" = ");
                self.write_operand(out, value, Precedence::Assign);
            },
        }
    }

    fn write_array_item(&self, out: &mut String, item: &ArrayItem) {
        if let Some(key) = &item.key {
            self.write_expr(out, key);
            out.push_str(" => ");
        }
        self.write_expr(out, &item.value);
    }

    fn write_operand(&self, out: &mut String, expr: &Expr, minimum: Precedence) {
        if precedence(expr) < minimum {
            out.push('(');
            self.write_expr(out, expr);
            out.push(')');
        } else {
            self.write_expr(out, expr);
        }
    }
}

const fn precedence(expr: &Expr) -> Precedence {
    match expr {
        Expr::Assign { .. } => Precedence::Assign,
        Expr::Coalesce { .. } => Precedence::Coalesce,
        _ => Precedence::Primary,
    }
}

fn write_name(out: &mut String, name: &Name) {
    match name {
        Name::Relative(name) => out.push_str(name),
        Name::FullyQualified(name) => {
            out.push('\\');
            out.push_str(name);
        },
    }
}

fn write_literal(out: &mut String, literal: &Literal) {
    match literal {
        Literal::Null => out.push_str("null"),
        Literal::Bool(value) => out.push_str(if *value { "true" } else { "false" }),
        Literal::Int(value) => {
            let _ = write!(out, "{value}");
        },
        Literal::Float(value) => out.push_str(&float_literal(*value)),
        Literal::String(value) => {
            out.push('\'');
            for ch in value.chars() {
                if ch == '\'' || ch == '\\' {
                    out.push('\\');
                }
                out.push(ch);
            }
            out.push('\'');
        },
    }
}

fn float_literal(value: f64) -> String {
    if value.is_nan() {
        return "NAN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() { "INF".to_owned() } else { "-INF".to_owned() };
    }

    let text = format!("{value:?}");
    if text.contains(['.', 'e', 'E']) { text } else { format!("{text}.0") }
}

fn print_param(param: &Param) -> String {
    param.type_hint.map_or_else(
        || format!("${}", param.name),
        |type_hint| format!("{} ${}", type_hint.as_str(), param.name),
    )
}

fn write_doc(out: &mut String, doc: Option<&DocComment>) {
    let Some(doc) = doc else { return };
    out.push_str("/**\n");
    for line in &doc.0 {
        if line.is_empty() {
            out.push_str(" *\n");
        } else {
            let _ = writeln!(out, " * {line}");
        }
    }
    out.push_str(" */\n");
}
