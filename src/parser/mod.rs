use regex::Regex;
use serde::{Deserialize, Serialize};

/// Delimiter style of an include directive. Both styles resolve the same
/// way; the style is kept as metadata only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum IncludeStyle {
    Angled,
    Quoted,
}

/// One `#include` directive as it appears in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRef {
    pub target: String,
    pub style: IncludeStyle,
    pub line: usize,
}

#[derive(Debug, Default)]
pub struct IncludeParser {
    patterns: RegexPatterns,
}

#[derive(Debug)]
pub struct RegexPatterns {
    pub include_stmt: Regex,
}

impl RegexPatterns {
    pub fn compile() -> Self {
        // Anchored at line start so at most one directive is captured per
        // line; the target is any character run between matching delimiters.
        let include_stmt =
            Regex::new(r#"(?m)^\s*#\s*include\s*(?:<(?P<angled>[^>]+)>|"(?P<quoted>[^"]+)")"#)
                .unwrap();
        Self { include_stmt }
    }
}

impl Default for RegexPatterns {
    fn default() -> Self {
        Self::compile()
    }
}

impl IncludeParser {
    pub fn new() -> Self {
        Self { patterns: RegexPatterns::compile() }
    }

    /// Extract include directives from `content` in source order.
    ///
    /// Lines that do not match the directive pattern are ignored; no
    /// validation is applied to the target string. Conditional compilation
    /// is not evaluated, so directives inside disabled `#if` blocks are
    /// still reported.
    pub fn extract_includes(&self, content: &str) -> Vec<IncludeRef> {
        let count = self.patterns.include_stmt.captures_iter(content).count();
        let mut out = Vec::with_capacity(count);
        for cap in self.patterns.include_stmt.captures_iter(content) {
            let (target, style) = if let Some(m) = cap.name("angled") {
                (m.as_str().to_string(), IncludeStyle::Angled)
            } else if let Some(m) = cap.name("quoted") {
                (m.as_str().to_string(), IncludeStyle::Quoted)
            } else {
                continue;
            };
            let start = cap.get(0).map_or(0, |m| m.start());
            out.push(IncludeRef { target, style, line: line_number_for(content, start) });
        }
        out
    }
}

fn line_number_for(content: &str, byte_idx: usize) -> usize {
    // 1-based line number
    content[..byte_idx].bytes().filter(|&b| b == b'\n').count() + 1
}
