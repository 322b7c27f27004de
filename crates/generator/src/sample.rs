//! Formatting of before/after code samples for embedding in generated files.
//!
//! | Sample      | Example form                                                      |
//! |-------------|-------------------------------------------------------------------|
//! | single line | `'…'`; `'` becomes `"`, `\` becomes `\\`                          |
//! | multi-line  | `<<<'CODE_SAMPLE'` nowdoc, content verbatim, closed by the marker |
//!
//! A multi-line sample that contains a line able to close the nowdoc early gets a
//! numbered marker instead (`CODE_SAMPLE_1`, `CODE_SAMPLE_2`, …).

use std::borrow::Cow;

pub const SAMPLE_MARKER: &str = "CODE_SAMPLE";

/// Characters stripped by PHP's `trim()`.
const PHP_TRIM: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Trimmed sample followed by exactly one newline.
#[must_use]
pub fn canonical(code: &str) -> String {
    let mut out = code.trim_matches(PHP_TRIM).to_owned();
    out.push('\n');
    out
}

/// Sample as a PHP string expression for documentation and test definitions.
#[must_use]
pub fn example(code: &str) -> String {
    if code.contains('\n') { fenced(code) } else { quoted(code) }
}

fn quoted(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + 2);
    out.push('\'');
    for ch in code.chars() {
        match ch {
            '\'' => out.push('"'),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
    out
}

fn fenced(code: &str) -> String {
    let marker = marker_for(code);
    format!("<<<'{marker}'\n{code}\n{marker}\n")
}

fn marker_for(code: &str) -> Cow<'static, str> {
    if !closes_nowdoc(code, SAMPLE_MARKER) {
        return Cow::Borrowed(SAMPLE_MARKER);
    }

    let mut suffix = 1_usize;
    loop {
        let candidate = format!("{SAMPLE_MARKER}_{suffix}");
        if !closes_nowdoc(code, &candidate) {
            return Cow::Owned(candidate);
        }
        suffix += 1;
    }
}

/// Whether any line, after leading whitespace, starts with `marker` not followed by an
/// identifier character.
fn closes_nowdoc(code: &str, marker: &str) -> bool {
    code.lines().any(|line| {
        line.trim_start().strip_prefix(marker).is_some_and(|rest| {
            !rest.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_')
        })
    })
}
