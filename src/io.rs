//! Line-oriented input
use std::io::BufRead;

use crate::error::{GeneralError, ParseError};

/// Source of text lines.
///
/// This is the only capability the parser needs from its input, so any byte
/// or text source (file, socket, memory buffer) can be adapted to it.
pub trait LineStream {
    /// Reads the next line.
    ///
    /// The returned line may still contain its line terminator. An empty
    /// string signals the end of input.
    fn read_line(&mut self) -> Result<String, GeneralError>;

    /// Reads the next line, failing if the source is bytes that are not
    /// valid UTF-8.
    ///
    /// Sources that already produce text do not need to override this.
    fn read_line_strict(&mut self) -> Result<String, GeneralError> {
        self.read_line()
    }
}

/// Reads lines as UTF-8, falling back to ISO-8859-1 for lines that are not
/// valid UTF-8 so that no byte is lost.
impl<R: BufRead + ?Sized> LineStream for R {
    fn read_line(&mut self) -> Result<String, GeneralError> {
        let mut buf = Vec::new();
        self.read_until(b'\n', &mut buf)?;

        match String::from_utf8(buf) {
            Ok(line) => Ok(line),
            Err(error) => {
                tracing::debug!(
                    valid_up_to = error.utf8_error().valid_up_to(),
                    "line is not UTF-8, decoding as ISO-8859-1"
                );
                Ok(decode_latin1(error.as_bytes()))
            }
        }
    }

    fn read_line_strict(&mut self) -> Result<String, GeneralError> {
        let mut buf = Vec::new();
        self.read_until(b'\n', &mut buf)?;

        Ok(String::from_utf8(buf).map_err(ParseError::from)?)
    }
}

/// Maps each byte to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Adapts an iterator of in-memory lines into a [`LineStream`].
///
/// Lines do not need a terminator; a `\n` is added to lines without one so
/// that an empty item reads as a blank line. Once the iterator is exhausted,
/// every read returns an empty string.
#[derive(Debug, Clone)]
pub struct LineSource<I> {
    lines: I,
}

impl<I> LineSource<I> {
    pub fn new<T>(lines: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl<I, S> LineStream for LineSource<I>
where
    I: Iterator<Item = S>,
    S: Into<String>,
{
    fn read_line(&mut self) -> Result<String, GeneralError> {
        let Some(line) = self.lines.next() else {
            return Ok(String::new());
        };
        let mut line: String = line.into();

        if !line.ends_with('\n') {
            line.push('\n');
        }

        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::error::ParseErrorKind;

    use super::*;

    #[test]
    fn test_buf_read_lines() {
        let mut input = Cursor::new(b"a\r\nb\n\r\nc".to_vec());

        assert_eq!(LineStream::read_line(&mut input).unwrap(), "a\r\n");
        assert_eq!(LineStream::read_line(&mut input).unwrap(), "b\n");
        assert_eq!(LineStream::read_line(&mut input).unwrap(), "\r\n");
        assert_eq!(LineStream::read_line(&mut input).unwrap(), "c");
        assert_eq!(LineStream::read_line(&mut input).unwrap(), "");
        assert_eq!(LineStream::read_line(&mut input).unwrap(), "");
    }

    #[test]
    fn test_buf_read_latin1_fallback() {
        let mut input = Cursor::new(b"caf\xe9\r\nna\xc3\xafve\r\n".to_vec());

        assert_eq!(LineStream::read_line(&mut input).unwrap(), "caf\u{e9}\r\n");
        assert_eq!(LineStream::read_line(&mut input).unwrap(), "na\u{ef}ve\r\n");
    }

    #[test]
    fn test_buf_read_strict_invalid_utf8() {
        let mut input = Cursor::new(b"ab\xff\r\n".to_vec());

        let error = LineStream::read_line_strict(&mut input).unwrap_err();

        assert_eq!(
            error.as_parse().map(|e| e.kind()),
            Some(ParseErrorKind::InvalidUtf8)
        );
    }

    #[test]
    fn test_line_source() {
        let mut source = LineSource::new(["a", "", "b\r\n"]);

        assert_eq!(source.read_line().unwrap(), "a\n");
        assert_eq!(source.read_line().unwrap(), "\n");
        assert_eq!(source.read_line().unwrap(), "b\r\n");
        assert_eq!(source.read_line().unwrap(), "");
    }

    #[test]
    fn test_decode_latin1() {
        assert_eq!(decode_latin1(b"abc"), "abc");
        assert_eq!(decode_latin1(b"\xa3\xff"), "\u{a3}\u{ff}");
    }
}
