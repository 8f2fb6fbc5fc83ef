//! Placeholder substitution for template contents and paths.
//!
//! Substitution is deliberately not a template language: a single pass
//! replaces `{{ name }}` tokens whose name is bound, and leaves every other
//! token verbatim. There are no conditionals or loops inside templates;
//! conditional inclusion happens at the feature-bundle level.

use crate::constants::TOKEN_PATTERN;
use indexmap::IndexMap;
use regex::{Captures, Regex};

/// Variable bindings collected by the wizard: placeholder name to value.
/// Immutable once `collect_inputs` returns.
pub type Bindings = IndexMap<String, String>;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given bindings.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `bindings` - Placeholder values for substitution
    ///
    /// # Returns
    /// * `String` - Rendered string; tokens without a binding survive verbatim
    fn render(&self, template: &str, bindings: &Bindings) -> String;
}

/// Single-pass `{{ name }}` token substituter.
pub struct TokenRenderer {
    token: Regex,
}

impl TokenRenderer {
    pub fn new() -> Self {
        // The pattern is a compile-time constant, so this cannot fail at runtime.
        let token = Regex::new(TOKEN_PATTERN).expect("token pattern is valid");
        Self { token }
    }
}

impl Default for TokenRenderer {
    fn default() -> Self {
        TokenRenderer::new()
    }
}

impl TemplateRenderer for TokenRenderer {
    fn render(&self, template: &str, bindings: &Bindings) -> String {
        self.token
            .replace_all(template, |caps: &Captures| match bindings.get(&caps[1]) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}
