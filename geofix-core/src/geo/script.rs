//! In-memory representation of a `.geo` script
//!
//! A [`Script`] is an ordered list of lines with their terminators removed. Rewrites
//! may leave embedded `\n` characters at the end of a line's text; those render as
//! blank lines directly after it, which is how the normalizer attaches spacing to a
//! line without inserting new entries mid-sequence.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    lines: Vec<String>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split source text into lines. Both `\n` and `\r\n` terminators are accepted,
    /// and a missing terminator on the last line is tolerated.
    pub fn parse(source: &str) -> Self {
        Script {
            lines: source.lines().map(str::to_string).collect(),
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Script {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Keep only the lines for which `keep` returns true, preserving order.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&String) -> bool,
    {
        self.lines.retain(keep);
    }

    /// Render the script, terminating every line with `\n`.
    pub fn render(&self) -> String {
        let capacity = self.lines.iter().map(|l| l.len() + 1).sum();
        let mut out = String::with_capacity(capacity);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}
