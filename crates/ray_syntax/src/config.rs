//! Parser configuration.

/// Default bound on rule nesting depth.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

/// Default cap on the number of diagnostics returned from one parse.
pub const DEFAULT_MAX_DIAGNOSTICS: usize = 100;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum rule nesting depth. A rule entered at this depth fails immediately and records a diagnostic.
    pub recursion_limit: usize,
    /// Maximum number of diagnostics kept (lexical and syntax combined, earliest offsets first).
    pub max_diagnostics: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            max_diagnostics: DEFAULT_MAX_DIAGNOSTICS,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recursion limit
    pub fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Set the diagnostic cap
    pub fn with_max_diagnostics(mut self, max: usize) -> Self {
        self.max_diagnostics = max;
        self
    }
}
