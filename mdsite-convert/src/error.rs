/// Errors that can occur during document conversion.
///
/// Conversion is fail-fast: the first malformed span or block aborts the
/// whole document rather than producing partial output. The error carries no
/// knowledge of which file is being processed; callers attach that context.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("no matching '{delimiter}' delimiter found")]
    MalformedMarkup { delimiter: String },

    #[error("heading level {level} has no text")]
    InvalidHeading { level: u8 },

    #[error("code block is not fenced by triple backticks")]
    InvalidCodeBlock,

    #[error("quote line does not start with '>': {line}")]
    InvalidQuote { line: String },

    #[error("no top-level heading on the first line")]
    MissingTitle,
}
