/// An HTML fragment parsing configuration.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseConfig {
    scripting: bool,
    trim: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseConfig {
    /// Creates a parsing configuration.
    pub const fn new() -> Self {
        Self {
            scripting: false,
            trim: true,
        }
    }

    /// Returns whether scripting is enabled in a tree builder.
    pub const fn scripting(&self) -> bool {
        self.scripting
    }

    /// Returns whether leading and trailing whitespace is trimmed.
    pub const fn trim(&self) -> bool {
        self.trim
    }

    /// Sets whether scripting is enabled in a tree builder.
    pub const fn set_scripting(mut self, scripting: bool) -> Self {
        self.scripting = scripting;
        self
    }

    /// Sets whether leading and trailing whitespace is trimmed.
    pub const fn set_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
