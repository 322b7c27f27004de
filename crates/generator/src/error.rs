use std::borrow::Cow;

/// A specialized [`GeneratorError`] enum of this crate.
#[rgen_derive::rgen_error]
pub enum GeneratorError {
    /// Required recipe fields or placeholder keys are absent.
    #[error("Missing data{}: {message}", format_context(.context))]
    MissingData { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The recipe is present but violates a structural rule.
    #[error("Invalid recipe{}: {message}", format_context(.context))]
    InvalidRecipe { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The registration file does not end with the expected closing anchor.
    #[error("Pattern not found{}: {message}", format_context(.context))]
    PatternNotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Settings error{}: {source}", format_context(.context))]
    Settings { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal generator error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

pub type Result<T, E = GeneratorError> = std::result::Result<T, E>;
