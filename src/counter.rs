// src/counter.rs
use crate::error::{AppError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streaming line counter.
///
/// Input is decoded as UTF-8 and invalid byte sequences are dropped before
/// lines are split, so they never fail the count. `\n`, `\r\n` and a lone
/// `\r` each terminate one line, and a trailing segment without a terminator
/// counts as one more line.
#[derive(Debug, Default, Clone)]
pub struct LineCounter {
    terminators: u64,
    last_byte: Option<u8>,
    /// Incomplete multi-byte sequence cut off by a chunk boundary.
    pending: Vec<u8>,
}

impl LineCounter {
    pub const fn new() -> Self {
        Self {
            terminators: 0,
            last_byte: None,
            pending: Vec::new(),
        }
    }

    /// Feeds the next chunk of the stream.
    pub fn feed(&mut self, buf: &[u8]) {
        if self.pending.is_empty() {
            self.feed_undecoded(buf);
        } else {
            let mut joined = std::mem::take(&mut self.pending);
            joined.extend_from_slice(buf);
            self.feed_undecoded(&joined);
        }
    }

    fn feed_undecoded(&mut self, mut bytes: &[u8]) {
        loop {
            match std::str::from_utf8(bytes) {
                Ok(_) => {
                    self.feed_valid(bytes);
                    return;
                }
                Err(e) => {
                    let (valid, rest) = bytes.split_at(e.valid_up_to());
                    self.feed_valid(valid);
                    match e.error_len() {
                        Some(len) => bytes = &rest[len..],
                        None => {
                            self.pending = rest.to_vec();
                            return;
                        }
                    }
                }
            }
        }
    }

    fn feed_valid(&mut self, buf: &[u8]) {
        let Some(&last) = buf.last() else {
            return;
        };

        let lf = bytecount::count(buf, b'\n') as u64;
        let cr = bytecount::count(buf, b'\r') as u64;

        // CRLF pairs are one terminator, including a pair split across chunks
        // or separated only by dropped bytes.
        let mut crlf = 0u64;
        if cr > 0 && lf > 0 {
            crlf = buf.windows(2).filter(|w| *w == b"\r\n").count() as u64;
        }
        if self.last_byte == Some(b'\r') && buf[0] == b'\n' {
            crlf += 1;
        }

        self.terminators += lf + cr - crlf;
        self.last_byte = Some(last);
    }

    /// Number of lines seen so far, counting an unterminated tail.
    ///
    /// A sequence still pending at this point is truncated and dropped.
    pub const fn finish(&self) -> u64 {
        match self.last_byte {
            None | Some(b'\n' | b'\r') => self.terminators,
            Some(_) => self.terminators + 1,
        }
    }
}

/// Counts the lines of everything `reader` yields.
///
/// # Errors
/// Propagates read errors from the underlying reader.
pub fn count_lines<R: BufRead>(reader: &mut R) -> std::io::Result<u64> {
    let mut counter = LineCounter::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        counter.feed(buf);
        let len = buf.len();
        reader.consume(len);
    }
    Ok(counter.finish())
}

/// Counts the lines of the file at `path`.
///
/// # Errors
/// Returns `AppError::FileRead` if the file cannot be opened or read.
pub fn count_file(path: &Path) -> Result<u64> {
    let read_err = |source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    let mut reader = BufReader::new(file);
    count_lines(&mut reader).map_err(read_err)
}
