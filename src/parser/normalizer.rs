// file: src/parser/normalizer.rs
// description: whitespace normalization for converted article text
// reference: Markdown specification

#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Trims trailing whitespace and collapses blank-line runs, leaving
    /// fenced code blocks untouched.
    pub fn normalize(&self, content: &str) -> String {
        let mut result: Vec<&str> = Vec::new();
        let mut in_code_block = false;

        for line in content.lines() {
            if line.trim_start().starts_with("```") {
                in_code_block = !in_code_block;
                result.push(line.trim_end());
                continue;
            }

            if in_code_block {
                result.push(line);
                continue;
            }

            let line = line.trim_end();
            if line.is_empty() && result.last().is_none_or(|prev| prev.is_empty()) {
                continue;
            }
            result.push(line);
        }

        while result.last().is_some_and(|line| line.is_empty()) {
            result.pop();
        }

        result.join("\n")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
