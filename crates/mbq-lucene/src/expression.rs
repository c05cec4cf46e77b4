//! Rendering capability shared by every query node.

/// A node that can render itself into a Lucene query string.
///
/// Rendering appends to a caller-supplied buffer so composite nodes can
/// build their output in a single allocation.
pub trait Expression {
    /// Appends this node's query syntax to `out`.
    fn append_to(&self, out: &mut String);

    /// Renders this node into a fresh string.
    fn build(&self) -> String {
        let mut out = String::new();
        self.append_to(&mut out);
        out
    }
}
