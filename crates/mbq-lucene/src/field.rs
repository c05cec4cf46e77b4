//! Field-level query nodes.
//!
//! A [`Field`] pairs an indexed attribute name with the terms matched
//! against it. [`FieldExpr`] is the closed set of field-level shapes a
//! query member can take: a field, a boolean composition of fields, or a
//! require/prohibit wrapper.

use std::fmt;

use crate::{expression::Expression, term::Term};

/// A named search field with the terms matched against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The indexed attribute name; empty for default-field searches.
    name: String,
    /// Terms matched against the field.
    terms: Vec<Term>,
}

impl Field {
    /// Creates a field matching a single term.
    pub fn new(name: impl Into<String>, term: impl Into<Term>) -> Self {
        Self {
            name: name.into(),
            terms: vec![term.into()],
        }
    }

    /// Creates a field matching several terms, rendered space-separated
    /// in parentheses (the search server treats that as implicit OR).
    pub fn with_terms(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Self {
            name: name.into(),
            terms,
        }
    }

    /// Creates a field with no terms, rendering the `-name:*` marker that
    /// matches entities where the field does not exist.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The terms matched against the field.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Combines this field with another clause using `AND`.
    pub fn and(self, other: impl Into<FieldExpr>) -> FieldExpr {
        FieldExpr::from(self).and(other)
    }

    /// Combines this field with another clause using `OR`.
    pub fn or(self, other: impl Into<FieldExpr>) -> FieldExpr {
        FieldExpr::from(self).or(other)
    }

    /// Requires this field's clause to match (`+field:term`).
    pub fn require(self) -> FieldExpr {
        FieldExpr::from(self).require()
    }

    /// Prohibits this field's clause from matching (`-field:term`).
    pub fn prohibit(self) -> FieldExpr {
        FieldExpr::from(self).prohibit()
    }
}

impl Expression for Field {
    fn append_to(&self, out: &mut String) {
        if self.terms.is_empty() {
            out.push('-');
            out.push_str(&self.name);
            out.push_str(":*");
            return;
        }

        if !self.name.is_empty() {
            out.push_str(&self.name);
            out.push(':');
        }

        let grouped = self.terms.len() > 1;
        if grouped {
            out.push('(');
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            term.append_to(out);
        }
        if grouped {
            out.push(')');
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// A field-level expression: one field or a composition of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldExpr {
    /// A single fielded clause.
    Field(Field),

    /// Conjunction. Renders parenthesized with `AND`.
    And(Vec<FieldExpr>),

    /// Disjunction. Renders parenthesized with `OR`.
    Or(Vec<FieldExpr>),

    /// The clause must match (`+clause`).
    Require(Box<FieldExpr>),

    /// The clause must not match (`-clause`).
    Prohibit(Box<FieldExpr>),
}

impl FieldExpr {
    /// Combines two clauses with `AND`, merging into an existing
    /// conjunction on either side instead of nesting.
    pub fn and(self, other: impl Into<Self>) -> Self {
        match (self, other.into()) {
            (Self::And(mut left), Self::And(right)) => {
                left.extend(right);
                Self::And(left)
            }
            (Self::And(mut left), right) => {
                left.push(right);
                Self::And(left)
            }
            (left, Self::And(mut right)) => {
                right.insert(0, left);
                Self::And(right)
            }
            (left, right) => Self::And(vec![left, right]),
        }
    }

    /// Combines two clauses with `OR`, merging into an existing
    /// disjunction on either side instead of nesting.
    pub fn or(self, other: impl Into<Self>) -> Self {
        match (self, other.into()) {
            (Self::Or(mut left), Self::Or(right)) => {
                left.extend(right);
                Self::Or(left)
            }
            (Self::Or(mut left), right) => {
                left.push(right);
                Self::Or(left)
            }
            (left, Self::Or(mut right)) => {
                right.insert(0, left);
                Self::Or(right)
            }
            (left, right) => Self::Or(vec![left, right]),
        }
    }

    /// Requires this clause to match (`+clause`).
    pub fn require(self) -> Self {
        Self::Require(Box::new(self))
    }

    /// Prohibits this clause from matching (`-clause`).
    pub fn prohibit(self) -> Self {
        Self::Prohibit(Box::new(self))
    }
}

/// Appends `exprs` joined by `op`, wrapped in parentheses.
fn append_compound(out: &mut String, exprs: &[FieldExpr], op: &str) {
    out.push('(');
    for (i, expr) in exprs.iter().enumerate() {
        if i > 0 {
            out.push_str(op);
        }
        expr.append_to(out);
    }
    out.push(')');
}

impl Expression for FieldExpr {
    fn append_to(&self, out: &mut String) {
        match self {
            Self::Field(field) => field.append_to(out),
            Self::And(exprs) => append_compound(out, exprs, " AND "),
            Self::Or(exprs) => append_compound(out, exprs, " OR "),
            Self::Require(expr) => {
                out.push('+');
                expr.append_to(out);
            }
            Self::Prohibit(expr) => {
                out.push('-');
                expr.append_to(out);
            }
        }
    }
}

impl fmt::Display for FieldExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<Field> for FieldExpr {
    fn from(field: Field) -> Self {
        Self::Field(field)
    }
}
