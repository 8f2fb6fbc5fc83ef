//! Common constants used throughout the service wizard.

/// Subtree of the template set that is always rendered
pub const BASE_TREE: &str = "base";

/// Placeholder token pattern: `{{ name }}` with optional inner spacing
pub const TOKEN_PATTERN: &str = r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}";

/// How many times a failed prompt is re-asked before giving up
pub const MAX_PROMPT_RETRIES: usize = 3;
