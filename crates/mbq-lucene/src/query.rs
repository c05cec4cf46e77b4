//! Top-level query container.

use std::fmt;

use crate::{
    expression::Expression,
    field::{Field, FieldExpr},
};

/// An ordered collection of field expressions, rendered space-separated.
/// The search server treats top-level whitespace as implicit AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Members in insertion order.
    fields: Vec<FieldExpr>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause. Duplicates are kept.
    pub fn add(&mut self, expr: impl Into<FieldExpr>) {
        self.fields.push(expr.into());
    }

    /// Removes the first clause equal to `expr`. Returns whether one was
    /// found.
    pub fn remove(&mut self, expr: &FieldExpr) -> bool {
        match self.fields.iter().position(|f| f == expr) {
            Some(index) => {
                self.fields.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replaces the first clause equal to `old` in place. Returns whether
    /// one was found.
    pub fn replace(&mut self, old: &FieldExpr, new: impl Into<FieldExpr>) -> bool {
        match self.fields.iter().position(|f| f == old) {
            Some(index) => {
                self.fields[index] = new.into();
                true
            }
            None => false,
        }
    }

    /// Replaces the first clause equal to `old`, or appends `new` when no
    /// clause matches.
    pub fn replace_or_add(&mut self, old: &FieldExpr, new: impl Into<FieldExpr>) {
        let new = new.into();
        if !self.replace(old, new.clone()) {
            self.fields.push(new);
        }
    }

    /// The clauses in insertion order.
    pub fn fields(&self) -> &[FieldExpr] {
        &self.fields
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the query has no clauses.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Expression for Query {
    fn append_to(&self, out: &mut String) {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            field.append_to(out);
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.build())
    }
}

impl From<Field> for Query {
    fn from(field: Field) -> Self {
        Self {
            fields: vec![field.into()],
        }
    }
}

impl From<FieldExpr> for Query {
    fn from(expr: FieldExpr) -> Self {
        Self { fields: vec![expr] }
    }
}

impl FromIterator<FieldExpr> for Query {
    fn from_iter<I: IntoIterator<Item = FieldExpr>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl Extend<FieldExpr> for Query {
    fn extend<I: IntoIterator<Item = FieldExpr>>(&mut self, iter: I) {
        self.fields.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term::Term;

    /// Builds a one-term field expression.
    fn clause(name: &str, text: &str) -> FieldExpr {
        Field::new(name, Term::new(text)).into()
    }

    #[test]
    fn renders_fields_space_joined() {
        let mut query = Query::new();
        query.add(clause("title", "Hey Joe"));
        query.add(clause("artist", "Jimi Hendrix"));

        assert_eq!(query.build(), "title:\"Hey Joe\" artist:\"Jimi Hendrix\"");
    }

    #[test]
    fn empty_query_renders_empty_string() {
        assert_eq!(Query::new().build(), "");
        assert!(Query::new().is_empty());
    }

    #[test]
    fn add_keeps_duplicates_in_order() {
        let mut query = Query::new();
        query.add(clause("tag", "rock"));
        query.add(clause("tag", "rock"));

        assert_eq!(query.len(), 2);
        assert_eq!(query.build(), "tag:rock tag:rock");
    }

    #[test]
    fn remove_drops_first_match_only() {
        let mut query = Query::new();
        query.add(clause("tag", "rock"));
        query.add(clause("tag", "rock"));

        assert!(query.remove(&clause("tag", "rock")));
        assert_eq!(query.len(), 1);
        assert!(!query.remove(&clause("tag", "jazz")));
    }

    #[test]
    fn replace_keeps_position() {
        let mut query = Query::new();
        query.add(clause("a", "1"));
        query.add(clause("b", "2"));

        assert!(query.replace(&clause("a", "1"), clause("a", "9")));
        assert_eq!(query.build(), "a:9 b:2");
    }

    #[test]
    fn replace_or_add_replaces_when_present() {
        let mut query = Query::new();
        query.add(clause("artist", "Cream"));

        query.replace_or_add(&clause("artist", "Cream"), clause("artist", "Traffic"));
        assert_eq!(query.build(), "artist:Traffic");
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn replace_or_add_appends_when_missing() {
        let mut query = Query::new();
        query.add(clause("artist", "Cream"));

        query.replace_or_add(&clause("title", "Badge"), clause("title", "Badge"));
        assert_eq!(query.build(), "artist:Cream title:Badge");
    }

    #[test]
    fn collects_from_iterator() {
        let query: Query = vec![clause("a", "1"), clause("b", "2")].into_iter().collect();
        assert_eq!(query.build(), "a:1 b:2");
    }

    #[test]
    fn compound_members_render_grouped() {
        let mut query = Query::new();
        query.add(clause("album", "Revolver").and(clause("artist", "The Beatles")));
        query.add(clause("date", "1966"));

        assert_eq!(
            query.build(),
            "(album:Revolver AND artist:\"The Beatles\") date:1966"
        );
    }
}
