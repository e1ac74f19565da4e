//! Variable substitution for filename templates.

use std::collections::HashMap;

/// Variable substitution context for filename templates.
///
/// Supports variable substitution in strings using the `{varname}` syntax.
/// Substitution is a single left-to-right pass, so a substituted value is
/// never itself expanded. Placeholders with no bound variable are kept
/// verbatim.
///
/// # Example
///
/// ```
/// use clipseq_av::TemplateContext;
///
/// let ctx = TemplateContext::new()
///     .with_var("date", "20240501")
///     .with_var("number", "000007");
///
/// assert_eq!(ctx.substitute("{date}_{number}"), "20240501_000007");
/// assert_eq!(ctx.substitute("{date}_{other}"), "20240501_{other}");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    /// Create a new empty template context.
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }

    /// Add a variable.
    pub fn with_var(mut self, key: &str, value: impl Into<String>) -> Self {
        self.vars.insert(key.to_string(), value.into());
        self
    }

    /// Substitute variables in a string.
    ///
    /// Variables are in the form `{varname}`.
    pub fn substitute(&self, template: &str) -> String {
        let mut result = String::with_capacity(template.len() + 16);
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            result.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find(|c: char| c == '{' || c == '}') {
                Some(close) if after.as_bytes()[close] == b'}' => {
                    let key = &after[..close];
                    match self.vars.get(key) {
                        Some(value) => result.push_str(value),
                        None => {
                            result.push('{');
                            result.push_str(key);
                            result.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                _ => {
                    result.push('{');
                    rest = after;
                }
            }
        }
        result.push_str(rest);
        result
    }
}

/// List the `{placeholder}` names that appear in a template, in order.
///
/// ```
/// use clipseq_av::template::placeholders;
///
/// assert_eq!(placeholders("{date}_{number}.x"), vec!["date", "number"]);
/// ```
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find(|c: char| c == '{' || c == '}') {
            Some(close) if after.as_bytes()[close] == b'}' => {
                names.push(&after[..close]);
                rest = &after[close + 1..];
            }
            _ => rest = after,
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute() {
        let ctx = TemplateContext::new()
            .with_var("date", "20240501")
            .with_var("size_marker", "L")
            .with_var("number", "000001")
            .with_var("length_seconds", "400");

        assert_eq!(
            ctx.substitute("{date}_{size_marker}_{number}_{length_seconds}"),
            "20240501_L_000001_400"
        );
    }

    #[test]
    fn test_unknown_placeholder_kept() {
        let ctx = TemplateContext::new().with_var("number", "000002");
        assert_eq!(ctx.substitute("{prefix}-{number}"), "{prefix}-000002");
    }

    #[test]
    fn test_value_not_reexpanded() {
        let ctx = TemplateContext::new()
            .with_var("a", "{b}")
            .with_var("b", "nope");
        assert_eq!(ctx.substitute("{a}"), "{b}");
    }

    #[test]
    fn test_unbalanced_braces() {
        let ctx = TemplateContext::new().with_var("x", "1");
        assert_eq!(ctx.substitute("{x"), "{x");
        assert_eq!(ctx.substitute("x}"), "x}");
        assert_eq!(ctx.substitute("{{x}"), "{1");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            placeholders("{date}_{size_marker}_{number}_{length_seconds}"),
            vec!["date", "size_marker", "number", "length_seconds"]
        );
        assert!(placeholders("plain_name").is_empty());
        assert_eq!(placeholders("{{x}"), vec!["x"]);
        assert_eq!(placeholders("{}"), vec![""]);
    }
}
