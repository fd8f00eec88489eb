//! Documentation comment blocks.

const LINE_PREFIX: &str = " *";
pub const START_DELIMITER: &str = "/**";
pub const END_DELIMITER: &str = " */";

/// Ordered, resettable accumulator of documentation lines.
///
/// Rendering wraps the lines in `/** ... */` without touching the stored
/// lines, so it can be called any number of times.
#[derive(Debug, Clone, Default)]
pub struct DocBuilder {
    lines: Vec<String>,
}

impl DocBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) -> &mut Self {
        self.lines.clear();
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn add_text(&mut self, description: &str) -> &mut Self {
        self.lines.push(format!("{LINE_PREFIX} {description}"));
        self
    }

    /// Add an `@<tag>` line; empty parts are skipped.
    pub fn add_tag(&mut self, tag: &str, parts: &[&str]) -> &mut Self {
        let mut line = format!("{LINE_PREFIX} @{tag}");
        for part in parts.iter().filter(|p| !p.is_empty()) {
            line.push(' ');
            line.push_str(part);
        }
        self.lines.push(line);
        self
    }

    pub fn add_param(&mut self, name: &str, description: &str, ty: &str) -> &mut Self {
        self.add_tag("param", &[name, ty, description])
    }

    pub fn add_return(&mut self, description: &str) -> &mut Self {
        self.add_tag("return", &[description])
    }

    pub fn render(&self) -> String {
        std::iter::once(START_DELIMITER)
            .chain(self.lines.iter().map(String::as_str))
            .chain(std::iter::once(END_DELIMITER))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
