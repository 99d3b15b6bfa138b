//! Status line and header block reading
use crate::{
    error::{GeneralError, ParseError, ParseErrorKind},
    fields::HeaderFields,
    header::HeaderRecord,
    io::LineStream,
    parse::{is_continuation_line, split_field_line, split_prefix, trim_line_ending},
};

/// What to do with a header line that has no `:` separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedLinePolicy {
    /// Fail the parse with [`ParseErrorKind::MalformedHeaderLine`].
    #[default]
    Error,
    /// Drop the line, along with any continuation lines following it.
    Skip,
}

/// Configuration for a [`HeaderParser`]
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Accepted status line prefixes, such as `HTTP/1.1` or `WARC/1.0`.
    ///
    /// The first prefix in the list that matches wins.
    pub statuslist: Vec<String>,

    /// Handling of header lines without a colon.
    pub malformed_line: MalformedLinePolicy,

    /// Whether the block must be closed by an empty line.
    ///
    /// When `false`, the end of input is treated the same as an empty line.
    pub require_terminator: bool,

    /// Maximum length of a line in bytes, including its line terminator.
    ///
    /// The line is read in full before its length is checked.
    pub max_line_length: Option<usize>,

    /// Whether byte sources must contain valid UTF-8.
    ///
    /// When `false`, lines that are not valid UTF-8 are decoded as
    /// ISO-8859-1.
    pub strict_utf8: bool,
}

impl ParserConfig {
    pub fn new<I, S>(statuslist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            statuslist: statuslist.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            statuslist: Vec::new(),
            malformed_line: MalformedLinePolicy::default(),
            require_terminator: false,
            max_line_length: None,
            strict_utf8: false,
        }
    }
}

/// Parser for a status line followed by header lines.
///
/// The parser keeps no state between calls, so a single instance can be
/// shared and used on many streams.
///
/// Header values may be folded across lines: a line starting with a space or
/// tab is appended to the previous value as is. The block ends at the first
/// empty line or at the end of input.
#[derive(Debug, Clone)]
pub struct HeaderParser {
    config: ParserConfig,
}

impl HeaderParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser with the default configuration and the given
    /// accepted status line prefixes.
    pub fn with_statuslist<I, S>(statuslist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ParserConfig::new(statuslist))
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Reads a status line and headers from the stream.
    ///
    /// Lines after the header block are left unread in the stream.
    pub fn parse<S>(&self, stream: &mut S) -> Result<HeaderRecord, GeneralError>
    where
        S: LineStream + ?Sized,
    {
        let mut lines = LineReader::new(stream, &self.config);

        let statusline = lines.next_line()?;

        let Some((protocol, remainder)) = split_prefix(&statusline, &self.config.statuslist)
        else {
            return Err(ParseError::new(ParseErrorKind::PrefixMismatch)
                .with_expected(self.config.statuslist.iter().cloned())
                .with_line(statusline.clone())
                .with_line_number(lines.line_number())
                .into());
        };

        let mut record = HeaderRecord::new(remainder.trim(), HeaderFields::new(), protocol);
        let mut line = lines.next_line()?;

        while !line.is_empty() {
            let line_number = lines.line_number();
            let field = split_field_line(&line);

            if field.is_none() && self.config.malformed_line == MalformedLinePolicy::Error {
                return Err(ParseError::new(ParseErrorKind::MalformedHeaderLine)
                    .with_line(line)
                    .with_line_number(line_number)
                    .into());
            }

            let mut value = field.map(|(_name, value)| value.to_string());
            let mut next_line = lines.next_line()?;

            while is_continuation_line(&next_line) {
                if let Some(value) = &mut value {
                    value.push_str(&next_line);
                }

                next_line = lines.next_line()?;
            }

            match (field, value) {
                (Some((name, _)), Some(value)) => {
                    tracing::trace!(line_number, name, "read header");
                    record.headers.append(name.to_string(), value);
                }
                _ => {
                    tracing::warn!(
                        line_number,
                        line = line.as_str(),
                        "skipping header line without colon"
                    );
                }
            }

            line = next_line;
        }

        if self.config.require_terminator && lines.is_end() {
            return Err(ParseError::new(ParseErrorKind::IncompleteInput)
                .with_line_number(lines.line_number())
                .into());
        }

        tracing::debug!(
            protocol = record.protocol.as_str(),
            statusline = record.statusline.as_str(),
            header_count = record.headers.len(),
            "parsed status line and headers"
        );

        Ok(record)
    }

    /// Parses a status line and headers from text.
    pub fn parse_str(&self, input: &str) -> Result<HeaderRecord, GeneralError> {
        self.parse(&mut input.as_bytes())
    }
}

/// Reads lines with their terminators removed while tracking the position
/// within the block.
struct LineReader<'a, S: ?Sized> {
    stream: &'a mut S,
    max_line_length: Option<usize>,
    strict_utf8: bool,
    line_number: u64,
    end: bool,
}

impl<'a, S: LineStream + ?Sized> LineReader<'a, S> {
    fn new(stream: &'a mut S, config: &ParserConfig) -> Self {
        Self {
            stream,
            max_line_length: config.max_line_length,
            strict_utf8: config.strict_utf8,
            line_number: 0,
            end: false,
        }
    }

    fn line_number(&self) -> u64 {
        self.line_number
    }

    fn is_end(&self) -> bool {
        self.end
    }

    fn next_line(&mut self) -> Result<String, GeneralError> {
        if self.end {
            return Ok(String::new());
        }

        let result = if self.strict_utf8 {
            self.stream.read_line_strict()
        } else {
            self.stream.read_line()
        };

        let mut line = match result {
            Ok(line) => line,
            Err(GeneralError::Parse(error)) => {
                return Err(error.with_line_number(self.line_number + 1).into());
            }
            Err(error) => return Err(error),
        };

        if line.is_empty() {
            tracing::trace!(line_number = self.line_number, "end of input");
            self.end = true;
            return Ok(line);
        }

        self.line_number += 1;

        if let Some(max_line_length) = self.max_line_length {
            if line.len() > max_line_length {
                return Err(ParseError::new(ParseErrorKind::InputTooLong)
                    .with_line_number(self.line_number)
                    .into());
            }
        }

        let len = trim_line_ending(&line).len();
        line.truncate(len);

        tracing::trace!(line_number = self.line_number, len, "read line");

        Ok(line)
    }
}
