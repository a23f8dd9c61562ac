//! Path parameters captured from a matched placeholder pattern.

/// Ordered `name -> value` pairs captured during one dispatch.
///
/// Order follows placeholder declaration order in the pattern; values are the
/// literal path segments matched at each position. Built fresh per dispatch
/// and discarded after the handler call returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
    pairs: Vec<(String, String)>,
}

impl PathParams {
    pub(crate) fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Creates an empty parameter set, as produced by literal routes.
    #[inline]
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Returns true if there are no path parameters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the number of path parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Gets the value captured for `name`.
    /// Returns None if the pattern declares no such placeholder.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.pairs.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// Captured values in declaration order. This is the positional argument
    /// list handed to handlers.
    pub fn values(&self) -> Vec<&str> {
        self.pairs.iter().map(|(_, v)| v.as_str()).collect()
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_by_name() {
        let params =
            PathParams::new(vec![("id".to_string(), "42".to_string()), ("lang".to_string(), "en".to_string())]);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("lang"), Some("en"));
        assert_eq!(params.get("missing"), None);
    }

    #[test]
    fn test_values_preserve_declaration_order() {
        let params =
            PathParams::new(vec![("id".to_string(), "42".to_string()), ("slug".to_string(), "hello".to_string())]);
        assert_eq!(params.values(), vec!["42", "hello"]);
    }

    #[test]
    fn test_empty() {
        let params = PathParams::empty();
        assert!(params.is_empty());
        assert_eq!(params.len(), 0);
        assert!(params.values().is_empty());
    }
}
