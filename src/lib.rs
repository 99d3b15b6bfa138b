//! Parsing of HTTP-style status line and header blocks.
//!
//! The block shared by HTTP messages and WARC records is a status line,
//! such as `HTTP/1.1 200 OK` or `WARC/1.0`, followed by `Name: value` header
//! lines and an empty line. [`HeaderParser`] reads such a block from any
//! [`LineStream`] and produces a [`HeaderRecord`].
//!
//! ```
//! use statusheaders::HeaderParser;
//!
//! let parser = HeaderParser::with_statuslist(["HTTP/1.0", "HTTP/1.1"]);
//! let record = parser
//!     .parse_str("HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n")
//!     .unwrap();
//!
//! assert_eq!(record.protocol, "HTTP/1.1");
//! assert_eq!(record.statusline, "200 OK");
//! assert_eq!(record.get_header("content-type"), Some("text/html"));
//! ```
pub mod error;
pub mod fields;
pub mod header;
pub mod io;
pub mod parse;
pub mod read;

pub use error::{GeneralError, ParseError, ParseErrorKind};
pub use fields::HeaderFields;
pub use header::HeaderRecord;
pub use io::{LineSource, LineStream};
pub use read::{HeaderParser, MalformedLinePolicy, ParserConfig};
