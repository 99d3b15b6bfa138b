//! Status line and headers
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{
    error::{ParseError, ParseErrorKind},
    fields::HeaderFields,
};

/// A parsed status line and its header fields.
///
/// This is the shape shared by HTTP requests, HTTP responses, and WARC record
/// headers. The `protocol` is the prefix the status line was matched against
/// (such as `HTTP/1.1` or `WARC/1.0`) and `statusline` is the rest of the line.
///
/// Two records are equal when the protocol, status line, and headers (in
/// order) are all equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HeaderRecord {
    /// The status line without the protocol prefix, trimmed.
    pub statusline: String,
    /// The name-value header fields in stream order.
    pub headers: HeaderFields,
    /// The matched status line prefix.
    pub protocol: String,
}

impl HeaderRecord {
    pub fn new<S, P>(statusline: S, headers: HeaderFields, protocol: P) -> Self
    where
        S: Into<String>,
        P: Into<String>,
    {
        Self {
            statusline: statusline.into(),
            headers,
            protocol: protocol.into(),
        }
    }

    pub fn headers(&self) -> &HeaderFields {
        &self.headers
    }

    /// Returns the value of the first header with the name.
    ///
    /// Names are compared without ASCII case-sensitivity.
    pub fn get_header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Returns the values of every header with the name, in order.
    pub fn get_all_headers<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers.get_all(name).map(String::as_str)
    }

    /// Removes the last header with the name.
    ///
    /// Returns whether a header was removed.
    pub fn remove_header(&mut self, name: &str) -> bool {
        self.headers.remove_last(name).is_some()
    }

    /// Appends a header, keeping any existing headers with the same name.
    pub fn add_header<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.append(name.into(), value.into());
    }

    /// Removes every header with the name and appends the new header.
    pub fn replace_header<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.headers.insert(name.into(), value.into());
    }

    /// Returns whether the record can be serialized without changing its
    /// meaning.
    ///
    /// The protocol, status line, and header names and values must not
    /// contain a CR or LF, which would start a new line on the wire.
    pub fn validate(&self) -> Result<(), ParseError> {
        let texts = [self.protocol.as_str(), self.statusline.as_str()]
            .into_iter()
            .chain(
                self.headers
                    .iter()
                    .flat_map(|(name, value)| [name.as_str(), value.as_str()]),
            );

        for text in texts {
            if text.contains(['\r', '\n']) {
                return Err(ParseError::new(ParseErrorKind::UnexpectedLineBreak).with_line(text));
            }
        }

        Ok(())
    }

    /// Write the status line and headers as serialized bytes.
    ///
    /// The protocol and status line are joined by a single space unless
    /// either is empty. The block ends with an empty line. Records that fail
    /// [`validate()`](Self::validate) are rejected with
    /// [`std::io::ErrorKind::InvalidInput`].
    pub fn serialize<W: Write>(&self, mut buf: W) -> std::io::Result<()> {
        self.validate()
            .map_err(|error| std::io::Error::new(std::io::ErrorKind::InvalidInput, error))?;

        buf.write_all(self.protocol.as_bytes())?;

        if !self.protocol.is_empty() && !self.statusline.is_empty() {
            buf.write_all(b" ")?;
        }

        buf.write_all(self.statusline.as_bytes())?;
        write!(buf, "\r\n{}\r\n", self.headers)?;

        Ok(())
    }
}
