use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ParseContext;

/// Result type for cgen-config operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a cgen.toml or omit --config to use the defaults"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse cgen.toml")]
    #[diagnostic(code(cgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(cgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a C reserved word")]
    #[diagnostic(
        code(cgen::reserved_word),
        help("a {kind} is emitted verbatim into generated C; pick e.g. '{name}_' or '_{name}'")
    )]
    ReservedWord {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        kind: String,
    },

    #[error("invalid {kind} '{name}'")]
    #[diagnostic(
        code(cgen::invalid_identifier),
        help(
            "{reason}. Use only letters, numbers, and underscores, starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        kind: String,
        reason: String,
    },
}

impl Error {
    pub fn parse(source: toml::de::Error, ctx: &ParseContext<'_>) -> Box<Self> {
        Box::new(Error::Parse {
            src: ctx.named_source(),
            span: source.span().map(SourceSpan::from),
            source,
        })
    }

    /// A free-form validation error underlining `needle`.
    pub fn validation(
        message: impl Into<String>,
        ctx: &ParseContext<'_>,
        needle: &str,
    ) -> Box<Self> {
        Box::new(Error::Validation {
            src: ctx.named_source(),
            span: ctx.find_span(needle),
            message: message.into(),
        })
    }

    pub fn reserved_word(name: &str, kind: &str, ctx: &ParseContext<'_>) -> Box<Self> {
        Box::new(Error::ReservedWord {
            src: ctx.named_source(),
            span: ctx.find_span(name),
            name: name.to_string(),
            kind: kind.to_string(),
        })
    }

    pub fn invalid_identifier(
        name: &str,
        kind: &str,
        reason: &str,
        ctx: &ParseContext<'_>,
    ) -> Box<Self> {
        Box::new(Error::InvalidIdentifier {
            src: ctx.named_source(),
            span: ctx.find_span(name),
            name: name.to_string(),
            kind: kind.to_string(),
            reason: reason.to_string(),
        })
    }
}
