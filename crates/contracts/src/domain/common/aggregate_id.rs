/// Common contract for aggregate identifiers.
///
/// Identifiers travel over the wire as strings; each aggregate wraps its
/// own newtype around the underlying UUID.
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;
    fn from_string(s: &str) -> Result<Self, String>;
}
