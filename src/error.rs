//! Error representations
use std::{backtrace::Backtrace, fmt::Display, string::FromUtf8Error};

/// Any error returned while parsing from a stream.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GeneralError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GeneralError {
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(..))
    }

    pub fn as_parse(&self) -> Option<&ParseError> {
        if let Self::Parse(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_parse(self) -> Result<ParseError, Self> {
        if let Self::Parse(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(..))
    }

    pub fn as_io(&self) -> Option<&std::io::Error> {
        if let Self::Io(v) = self {
            Some(v)
        } else {
            None
        }
    }

    pub fn try_into_io(self) -> Result<std::io::Error, Self> {
        if let Self::Io(v) = self {
            Ok(v)
        } else {
            Err(self)
        }
    }
}

/// Error for parsing a status line and header block.
///
/// The offending line (with its line terminator removed) is kept so callers
/// can report what was actually found in the stream.
#[derive(Debug, thiserror::Error)]
pub struct ParseError {
    kind: ParseErrorKind,
    context: Box<ParseContext>,
    backtrace: Option<Box<Backtrace>>,
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            context: Default::default(),
            backtrace: Some(Box::new(std::backtrace::Backtrace::capture())),
            source: None,
        }
    }

    pub fn with_line<S: Into<String>>(mut self, value: S) -> Self {
        self.context.line = Some(value.into());
        self
    }

    pub fn with_line_number(mut self, value: u64) -> Self {
        self.context.line_number = Some(value);
        self
    }

    pub fn with_expected<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.context.expected = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_source<T: Into<Box<dyn std::error::Error + Send + Sync>>>(
        mut self,
        source: T,
    ) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns the raw line that could not be parsed.
    pub fn line(&self) -> Option<&str> {
        self.context.line.as_deref()
    }

    /// Returns the raw status line if the error is a prefix mismatch.
    pub fn statusline(&self) -> Option<&str> {
        if self.kind == ParseErrorKind::PrefixMismatch {
            self.line()
        } else {
            None
        }
    }

    /// Returns the 1-based line number within the header block.
    pub fn line_number(&self) -> Option<u64> {
        self.context.line_number
    }

    /// Returns the accepted status line prefixes.
    pub fn expected(&self) -> &[String] {
        &self.context.expected
    }

    pub fn backtrace(&self) -> Option<&Backtrace> {
        self.backtrace.as_deref()
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "parse error: {}{}", self.kind, self.context)?;

        Ok(())
    }
}

impl From<FromUtf8Error> for ParseError {
    fn from(value: FromUtf8Error) -> Self {
        ParseError::new(ParseErrorKind::InvalidUtf8).with_source(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The status line does not start with any accepted prefix.
    PrefixMismatch,
    /// A header line has no `:` separator.
    MalformedHeaderLine,
    /// A value to be serialized contains a CR or LF.
    UnexpectedLineBreak,
    /// The stream ended before the blank line closing the header block.
    IncompleteInput,
    InputTooLong,
    InvalidUtf8,
}

impl Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = match self {
            Self::PrefixMismatch => "status line prefix mismatch",
            Self::MalformedHeaderLine => "malformed header line",
            Self::UnexpectedLineBreak => "unexpected line break",
            Self::IncompleteInput => "incomplete input",
            Self::InputTooLong => "input too long",
            Self::InvalidUtf8 => "invalid UTF-8",
        };

        f.write_str(value)
    }
}

#[derive(Debug, Default)]
struct ParseContext {
    line: Option<String>,
    line_number: Option<u64>,
    expected: Vec<String>,
}

impl Display for ParseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line_number) = self.line_number {
            write!(f, " line {}", line_number)?;
        }

        if !self.expected.is_empty() {
            write!(f, " expected status line starting with {:?}", self.expected)?;
        }

        if let Some(line) = &self.line {
            write!(f, " found '{}'", line.escape_debug())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new(ParseErrorKind::PrefixMismatch)
            .with_expected(["HTTP/1.0", "HTTP/1.1"])
            .with_line("FOO/1.0 x")
            .with_line_number(1);

        assert_eq!(
            error.to_string(),
            "parse error: status line prefix mismatch line 1 \
            expected status line starting with [\"HTTP/1.0\", \"HTTP/1.1\"] found 'FOO/1.0 x'"
        );
        assert_eq!(error.statusline(), Some("FOO/1.0 x"));
        assert_eq!(error.expected(), ["HTTP/1.0", "HTTP/1.1"]);
        assert!(error.backtrace().is_some());
    }

    #[test]
    fn test_statusline_only_for_prefix_mismatch() {
        let error = ParseError::new(ParseErrorKind::MalformedHeaderLine).with_line("abc");

        assert_eq!(error.line(), Some("abc"));
        assert_eq!(error.statusline(), None);
        assert!(error.expected().is_empty());
    }

    #[test]
    fn test_general_error_accessors() {
        let error = GeneralError::from(ParseError::new(ParseErrorKind::IncompleteInput));
        assert!(error.is_parse());
        assert!(!error.is_io());
        assert_eq!(
            error.as_parse().map(ParseError::kind),
            Some(ParseErrorKind::IncompleteInput)
        );

        let error = GeneralError::from(std::io::Error::other("x"));
        assert!(error.is_io());
        assert!(error.try_into_parse().is_err());
    }
}
