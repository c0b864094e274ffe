//! `$filter` grammar: renders an [`Expr`] tree into OData v4 filter text.
//!
//! Grouping rules:
//! - `And` terms that are `Or` nodes are parenthesized, and vice versa;
//! - `not` is followed by its operand as-is, with no added parentheses;
//! - lambda bodies are already delimited by `any(...)`/`all(...)`.

use crate::error::{ODataError, Result};
use crate::expr::Expr;
use crate::path::FieldPath;
use crate::value::Literal;

impl Expr {
    /// Renders the expression as unencoded `$filter` text.
    pub fn to_filter_string(&self) -> Result<String> {
        let mut out = String::new();
        write_expr(self, &mut out)?;
        Ok(out)
    }
}

pub(crate) fn write_expr(expr: &Expr, out: &mut String) -> Result<()> {
    match expr {
        Expr::Compare { op, path, value } => {
            path.write_to(out);
            out.push(' ');
            out.push_str(op.as_str());
            out.push(' ');
            write_literal(value, path, out)
        }
        Expr::Function { func, path, value } => {
            out.push_str(func.as_str());
            out.push('(');
            path.write_to(out);
            out.push(',');
            write_literal(value, path, out)?;
            out.push(')');
            Ok(())
        }
        Expr::In { path, values } => {
            if values.is_empty() {
                return Err(ODataError::EmptyMembership { path: path.clone() });
            }
            path.write_to(out);
            out.push_str(" in (");
            for (i, value) in values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_literal(value, path, out)?;
            }
            out.push(')');
            Ok(())
        }
        Expr::Not(operand) => {
            out.push_str("not ");
            write_expr(operand, out)
        }
        Expr::And(terms) => write_junction(
            terms,
            " and ",
            |t| matches!(t, Expr::Or(ts) if ts.len() >= 2),
            out,
        ),
        Expr::Or(terms) => write_junction(
            terms,
            " or ",
            |t| matches!(t, Expr::And(ts) if ts.len() >= 2),
            out,
        ),
        Expr::Lambda {
            kind,
            path,
            variable,
            body,
        } => {
            path.write_to(out);
            out.push('/');
            out.push_str(kind.as_str());
            out.push('(');
            if let Some(body) = body {
                out.push_str(variable);
                out.push_str(": ");
                write_expr(body, out)?;
            }
            out.push(')');
            Ok(())
        }
    }
}

fn write_junction(
    terms: &[Expr],
    separator: &str,
    needs_parens: impl Fn(&Expr) -> bool,
    out: &mut String,
) -> Result<()> {
    for (i, term) in terms.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        write_grouped(term, needs_parens(term), out)?;
    }
    Ok(())
}

fn write_grouped(expr: &Expr, parens: bool, out: &mut String) -> Result<()> {
    if parens {
        out.push('(');
        write_expr(expr, out)?;
        out.push(')');
        Ok(())
    } else {
        write_expr(expr, out)
    }
}

fn write_literal(literal: &Literal, path: &FieldPath, out: &mut String) -> Result<()> {
    match literal {
        Literal::Null => out.push_str("null"),
        Literal::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Literal::Int(n) => out.push_str(&n.to_string()),
        Literal::UInt(n) => out.push_str(&n.to_string()),
        Literal::Float(f) => {
            if !f.is_finite() {
                return Err(ODataError::NonFiniteNumber { path: path.clone() });
            }
            out.push_str(&f.to_string());
        }
        Literal::Single(f) => {
            if !f.is_finite() {
                return Err(ODataError::NonFiniteNumber { path: path.clone() });
            }
            out.push_str(&f.to_string());
        }
        Literal::String(s) => {
            out.push('\'');
            for c in s.chars() {
                if c == '\'' {
                    out.push('\'');
                }
                out.push(c);
            }
            out.push('\'');
        }
        #[cfg(feature = "uuid")]
        Literal::Guid(id) => {
            out.push_str(id.hyphenated().encode_lower(&mut uuid::Uuid::encode_buffer()));
        }
        #[cfg(feature = "chrono")]
        Literal::DateTimeOffset(dt) => {
            out.push_str(&dt.to_rfc3339_opts(chrono::SecondsFormat::AutoSi, true));
        }
        #[cfg(feature = "chrono")]
        Literal::Date(date) => {
            out.push_str(&date.format("%Y-%m-%d").to_string());
        }
    }
    Ok(())
}
