//! Path templates: literal segments plus `{name}` placeholders.
//!
//! A template is stored normalized, without boundary separators. Templates
//! containing placeholders are compiled once at registration into an anchored
//! regex where every literal run is escaped and each `{name}` matches exactly
//! one non-empty path segment. Matching behavior is identical to recompiling
//! per attempt; compiling up front just avoids doing that work per request.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::params::PathParams;

/// Recognizes one `{name}` placeholder inside a template.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([^/{}]+)\}").expect("placeholder regex is valid"));

/// A compiled path template.
///
/// Placeholder names are recorded in declaration order; they must be unique
/// within one template (duplicates are a caller bug, and which capture such a
/// name reports is unspecified).
#[derive(Debug)]
pub(crate) struct Pattern {
    template: String,
    names: Vec<String>,
    regex: Option<Regex>,
}

impl Pattern {
    /// Normalizes and compiles a template. Boundary `/` are stripped, so
    /// `"/user/{id}"` and `"user/{id}"` register the same pattern and `"/"`
    /// registers the site root (the empty template).
    pub(crate) fn new(template: &str) -> Self {
        let template = template.trim_matches('/').to_string();
        let names: Vec<String> = PLACEHOLDER.captures_iter(&template).map(|caps| caps[1].to_string()).collect();
        let regex = (!names.is_empty()).then(|| compile(&template));
        Self { template, names, regex }
    }

    pub(crate) fn template(&self) -> &str {
        &self.template
    }

    /// True when `path` matches this template end to end: either literal
    /// equality (including empty-vs-empty for the site root) or a full-anchor
    /// placeholder match. Partial matches never succeed.
    pub(crate) fn matches(&self, path: &str) -> bool {
        if self.template == path {
            return true;
        }
        match &self.regex {
            Some(regex) => regex.is_match(path),
            None => false,
        }
    }

    /// Captures placeholder values from `path` and pairs them with the
    /// declared names positionally. A capture-count mismatch yields the empty
    /// mapping; a partial mapping is never returned.
    pub(crate) fn extract(&self, path: &str) -> PathParams {
        let Some(regex) = &self.regex else {
            return PathParams::empty();
        };
        let Some(caps) = regex.captures(path) else {
            return PathParams::empty();
        };
        if caps.len() != self.names.len() + 1 {
            return PathParams::empty();
        }

        let mut pairs = Vec::with_capacity(self.names.len());
        for (name, group) in self.names.iter().zip(caps.iter().skip(1)) {
            match group {
                Some(segment) => pairs.push((name.clone(), segment.as_str().to_string())),
                None => return PathParams::empty(),
            }
        }
        PathParams::new(pairs)
    }
}

/// Compiles a placeholder template into an anchored regex: literal runs are
/// escaped so metacharacters have no special meaning, each `{name}` becomes a
/// `([^/]+)` capture group.
fn compile(template: &str) -> Regex {
    let mut source = String::with_capacity(template.len() + 16);
    source.push('^');
    let mut literal_start = 0;
    for placeholder in PLACEHOLDER.find_iter(template) {
        source.push_str(&regex::escape(&template[literal_start..placeholder.start()]));
        source.push_str("([^/]+)");
        literal_start = placeholder.end();
    }
    source.push_str(&regex::escape(&template[literal_start..]));
    source.push('$');
    Regex::new(&source).expect("escaped template compiles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_boundary_separators() {
        assert_eq!(Pattern::new("/user/{id}/").template(), "user/{id}");
        assert_eq!(Pattern::new("/").template(), "");
        assert_eq!(Pattern::new("").template(), "");
    }

    #[test]
    fn test_literal_match_is_exact() {
        let pattern = Pattern::new("about/contact");
        assert!(pattern.matches("about/contact"));
        assert!(!pattern.matches("about"));
        assert!(!pattern.matches("about/contact/us"));
    }

    #[test]
    fn test_root_matches_empty_path() {
        let pattern = Pattern::new("/");
        assert!(pattern.matches(""));
        assert!(!pattern.matches("anything"));
    }

    #[test]
    fn test_placeholder_matches_one_segment() {
        let pattern = Pattern::new("user/{id}");
        assert!(pattern.matches("user/42"));
        assert!(pattern.matches("user/hello-world"));
        assert!(!pattern.matches("user/"));
        assert!(!pattern.matches("user/42/extra"));
        assert!(!pattern.matches("user"));
    }

    #[test]
    fn test_placeholder_never_crosses_separator() {
        let pattern = Pattern::new("article/{slug}/edit");
        assert!(pattern.matches("article/my-post/edit"));
        assert!(!pattern.matches("article/my/post/edit"));
    }

    #[test]
    fn test_match_is_anchored() {
        let pattern = Pattern::new("post/{id}");
        assert!(!pattern.matches("blog/post/42"));
        assert!(!pattern.matches("post/42/comments"));
    }

    #[test]
    fn test_literal_metacharacters_are_escaped() {
        let pattern = Pattern::new("v1.0/{name}");
        assert!(pattern.matches("v1.0/report"));
        // the dot is literal, not "any character"
        assert!(!pattern.matches("v1x0/report"));
    }

    #[test]
    fn test_extract_preserves_declaration_order() {
        let pattern = Pattern::new("user/{id}/post/{slug}");
        let params = pattern.extract("user/42/post/hello-world");
        assert_eq!(params.values(), vec!["42", "hello-world"]);
        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("slug"), Some("hello-world"));
    }

    #[test]
    fn test_extract_on_literal_pattern_is_empty() {
        let pattern = Pattern::new("about");
        assert!(pattern.extract("about").is_empty());
    }

    #[test]
    fn test_extract_on_non_matching_path_is_empty() {
        let pattern = Pattern::new("user/{id}");
        assert!(pattern.extract("post/42").is_empty());
    }

    #[test]
    fn test_unbalanced_braces_are_literal() {
        // no well-formed placeholder, so the template only matches itself
        let pattern = Pattern::new("odd/{path");
        assert!(pattern.matches("odd/{path"));
        assert!(!pattern.matches("odd/anything"));
    }
}
