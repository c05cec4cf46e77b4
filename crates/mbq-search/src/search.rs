//! Field vocabulary shared by the entity search builders.

/// A searchable-field vocabulary for one entity kind.
///
/// Implementations are plain enums whose variants map one to one onto
/// the field names the search server indexes.
pub trait EntityField: Copy + 'static {
    /// The field name as the server expects it. An entity's default
    /// field, where it has one, maps to the empty string and renders
    /// without a field prefix.
    fn as_str(self) -> &'static str;

    /// A one-line description of what the field matches.
    fn description(self) -> &'static str;

    /// Every field of the vocabulary, in listing order.
    fn all() -> &'static [Self];
}
