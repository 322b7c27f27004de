//! Idempotent registration of a generated rule in a shared set file.
//!
//! A set file is a PHP config closure ending in `};`. New rules are appended as the last
//! statement of that closure; a file whose text already contains the rule's class name
//! is left alone.

use crate::error::{GeneratorError, GeneratorErrorExt, Result};
use crate::fs::write_atomic;
use crate::placeholder::{Placeholder, PlaceholderMap};
use crate::template;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

static CLOSING_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r";([ \t]*)(\r?\n)\};(\s*)\z").expect("closing anchor pattern is valid")
});

const STATEMENT_INDENT: &str = "    ";

/// Outcome of registering a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Added,
    AlreadyPresent,
}

/// Outcome of patching set file text in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patched {
    Added(String),
    AlreadyPresent,
}

/// `$rectorConfig->rule(\Fqn::class);`
#[must_use]
pub fn registration_statement(rule_fqn: &str) -> String {
    format!("$rectorConfig->rule(\\{}::class);", rule_fqn.trim_start_matches('\\'))
}

/// Fails with [`GeneratorError::MissingData`] unless every identity placeholder is present.
///
/// # Errors
/// Lists every absent key in vocabulary order.
pub fn ensure_required_keys(placeholders: &PlaceholderMap) -> Result<()> {
    let missing = placeholders.missing(&Placeholder::IDENTITY);
    if missing.is_empty() {
        return Ok(());
    }

    let keys = missing.iter().map(|p| format!("\"{}\"", p.token())).collect::<Vec<_>>().join(", ");
    Err(GeneratorError::MissingData {
        message: Cow::Owned(format!("Template variables for {keys} keys are missing")),
        context: None,
    })
}

/// Appends the registration of `rule_fqn` to `text` unless `text` already contains it.
///
/// # Errors
/// [`GeneratorError::PatternNotFound`] when `text` does not end with a closure that is
/// terminated by `};`.
pub fn patch_registration_text(text: &str, rule_fqn: &str) -> Result<Patched> {
    let rule_fqn = rule_fqn.trim_start_matches('\\');
    if text.contains(rule_fqn) {
        return Ok(Patched::AlreadyPresent);
    }

    let Some(caps) = CLOSING_ANCHOR.captures(text) else {
        return Err(GeneratorError::PatternNotFound {
            message: "expected the file to end with a statement followed by \"};\"".into(),
            context: None,
        });
    };

    let (Some(anchor), Some(spacing), Some(newline), Some(trailing)) =
        (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
    else {
        return Err("closing anchor captures are incomplete".into());
    };
    debug!(offset = anchor.start(), "Closing anchor matched");

    let newline = newline.as_str();
    let mut patched = String::with_capacity(text.len() + rule_fqn.len() + 48);
    patched.push_str(&text[..anchor.start()]);
    patched.push(';');
    patched.push_str(spacing.as_str());
    patched.push_str(newline);
    patched.push_str(STATEMENT_INDENT);
    patched.push_str(&registration_statement(rule_fqn));
    patched.push_str(newline);
    patched.push_str("};");
    patched.push_str(trailing.as_str());

    Ok(Patched::Added(patched))
}

/// Registers the rule named by `fqn_pattern` in the set file at `target`.
///
/// Required keys are checked before the file is touched. The file is read once and, when
/// a registration is added, replaced atomically.
///
/// # Errors
/// - [`GeneratorError::MissingData`] when identity placeholders are absent.
/// - [`GeneratorError::Io`] when the file cannot be read or written.
/// - [`GeneratorError::PatternNotFound`] when the closing anchor is absent.
pub fn append_rule_registration(
    target: impl AsRef<Path>,
    placeholders: &PlaceholderMap,
    fqn_pattern: &str,
) -> Result<Registration> {
    let target = target.as_ref();
    ensure_required_keys(placeholders)?;

    let rule_fqn = template::render(fqn_pattern, placeholders);
    let text = fs::read_to_string(target).context(format!("Failed to read {}", target.display()))?;

    match patch_registration_text(&text, &rule_fqn).context(target.display().to_string())? {
        Patched::AlreadyPresent => {
            info!(rule = %rule_fqn, path = %target.display(), "Rule already registered");
            Ok(Registration::AlreadyPresent)
        },
        Patched::Added(patched) => {
            write_atomic(target, patched.as_bytes())?;
            info!(rule = %rule_fqn, path = %target.display(), "Rule registered");
            Ok(Registration::Added)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SET: &str = "<?php\n\ndeclare(strict_types=1);\n\nreturn static function (RectorConfig $rectorConfig): void {\n    $rectorConfig->rule(\\Rector\\Php80\\Rector\\Class_\\ExistingRector::class);\n};\n";

    #[test]
    fn test_appends_before_closing_brace() {
        let Patched::Added(patched) = patch_registration_text(SET, "Rector\\Php80\\Rector\\Enum\\NewRector").unwrap()
        else {
            panic!("expected a patch");
        };
        assert!(patched.ends_with(
            "ExistingRector::class);\n    $rectorConfig->rule(\\Rector\\Php80\\Rector\\Enum\\NewRector::class);\n};\n"
        ));
    }

    #[test]
    fn test_crlf_and_trailing_whitespace_are_kept() {
        let text = "return static function ($c): void {\r\n    $c->import('x');  \r\n};\r\n\r\n";
        let Patched::Added(patched) = patch_registration_text(text, "A\\B").unwrap() else {
            panic!("expected a patch");
        };
        assert_eq!(
            patched,
            "return static function ($c): void {\r\n    $c->import('x');  \r\n    $rectorConfig->rule(\\A\\B::class);\r\n};\r\n\r\n"
        );
    }

    #[test]
    fn test_any_verbatim_occurrence_counts_as_registered() {
        let text = SET.replace("ExistingRector::class", "ExistingRectorLegacy::class");
        assert_eq!(
            patch_registration_text(&text, "Rector\\Php80\\Rector\\Class_\\ExistingRector").unwrap(),
            Patched::AlreadyPresent
        );
        assert_eq!(
            patch_registration_text(SET, "\\Rector\\Php80\\Rector\\Class_\\ExistingRector").unwrap(),
            Patched::AlreadyPresent
        );
    }

    #[test]
    fn test_missing_anchor() {
        let err = patch_registration_text("<?php\n\nreturn [];\n", "A\\B").unwrap_err();
        assert!(matches!(err, GeneratorError::PatternNotFound { .. }));
    }

    #[test]
    fn test_required_keys_message() {
        let placeholders: PlaceholderMap = [(Placeholder::Category, "Enum")].into_iter().collect();
        let err = ensure_required_keys(&placeholders).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Missing data: Template variables for "__Package__", "__Name__" keys are missing"#
        );
    }
}
