//! Rendering configuration

/// Text emitted for one level of indentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Tab,
    Spaces(usize),
}

impl Indent {
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub indent: Indent,
    /// Deepest expression or block nesting the unparser will descend into
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            max_depth: 512,
        }
    }
}

impl Config {
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_units() {
        assert_eq!(Indent::Tab.unit(), "\t");
        assert_eq!(Indent::Spaces(2).unit(), "  ");
        assert_eq!(Indent::Spaces(0).unit(), "");
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = Config::default()
            .with_indent(Indent::Spaces(4))
            .with_max_depth(16);
        assert_eq!(config.indent, Indent::Spaces(4));
        assert_eq!(config.max_depth, 16);
        assert_eq!(Config::default().max_depth, 512);
    }
}
