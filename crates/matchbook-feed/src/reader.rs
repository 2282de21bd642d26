//! Line framing for the record stream.
//!
//! The feed arrives either with platform `\n` terminators or as a DOS
//! file with `\r\n`. The toggle is an environment variable rather than a
//! flag so existing invocations keep working when the upstream exporter
//! changes format.

use std::io::BufRead;

use matchbook_types::{MatchbookError, Order, Result};

use crate::record::parse_record;

/// Set (to anything) to read `\r\n`-terminated records.
pub const CRLF_ENV: &str = "MATCHBOOK_CRLF";

/// How records are terminated on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnding {
    /// `\n` only. A stray `\r` ends up in the side token and is rejected
    /// by the record parser.
    #[default]
    Newline,
    /// `\r\n`. A line missing the `\r` is malformed.
    CrLf,
}

impl LineEnding {
    /// Read the [`CRLF_ENV`] toggle from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        if std::env::var_os(CRLF_ENV).is_some() {
            Self::CrLf
        } else {
            Self::Newline
        }
    }
}

/// Streams [`Order`]s out of a line-oriented reader, tracking line
/// numbers for error reporting.
pub struct RecordReader<R> {
    inner: R,
    ending: LineEnding,
    line_no: u64,
    buf: String,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R, ending: LineEnding) -> Self {
        Self {
            inner,
            ending,
            line_no: 0,
            buf: String::new(),
        }
    }

    /// Read and parse the next record. `Ok(None)` at end of input.
    pub fn next_order(&mut self) -> Result<Option<Order>> {
        self.buf.clear();
        let n = self.inner.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        let line = match self.buf.strip_suffix('\n') {
            Some(rest) => match self.ending {
                LineEnding::Newline => rest,
                LineEnding::CrLf => rest.strip_suffix('\r').ok_or_else(|| {
                    MatchbookError::MalformedRecord {
                        line: self.line_no,
                        reason: "missing carriage return before newline".into(),
                    }
                })?,
            },
            // Final line without a terminator.
            None => self.buf.as_str(),
        };

        parse_record(self.line_no, line).map(Some)
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Order>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_order().transpose()
    }
}
