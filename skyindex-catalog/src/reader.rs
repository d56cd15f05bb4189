//! Line sources for catalog files, with transparent decompression.
//!
//! Archive catalogs ship compressed; the extension decides the decoder:
//! `.gz` (gzip), `.bz2` (bzip2, multi-stream), anything else is read as-is.

use crate::error::Result;
use bzip2::read::MultiBzDecoder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    None,
    Gzip,
    Bzip2,
}

impl Compression {
    fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("gz") => Self::Gzip,
            Some(ext) if ext.eq_ignore_ascii_case("bz2") => Self::Bzip2,
            _ => Self::None,
        }
    }
}

/// Opens `path` for buffered reading, decompressing by extension.
pub fn open_reader(path: impl AsRef<Path>) -> Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader: Box<dyn BufRead> = match Compression::from_path(path) {
        Compression::Gzip => Box::new(BufReader::with_capacity(BUFFER_SIZE, GzDecoder::new(file))),
        Compression::Bzip2 => Box::new(BufReader::with_capacity(
            BUFFER_SIZE,
            MultiBzDecoder::new(file),
        )),
        Compression::None => Box::new(BufReader::with_capacity(BUFFER_SIZE, file)),
    };
    Ok(reader)
}

/// Reads a whole, possibly compressed, text file.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let mut bytes = Vec::new();
    open_reader(path)?.read_to_end(&mut bytes)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Forward-only stream of `(line_number, line)`, numbered from 1.
///
/// Line terminators (`\n` or `\r\n`) are stripped and invalid UTF-8 is
/// decoded lossily. I/O errors are yielded once; iteration stops after them.
pub struct Lines<R> {
    reader: R,
    buffer: Vec<u8>,
    line_number: usize,
    failed: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
            line_number: 0,
            failed: false,
        }
    }

    /// Number of lines yielded so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.buffer.clear();
        match self.reader.read_until(b'\n', &mut self.buffer) {
            Ok(0) => None,
            Ok(_) => {
                self.line_number += 1;
                if self.buffer.ends_with(b"\n") {
                    self.buffer.pop();
                    if self.buffer.ends_with(b"\r") {
                        self.buffer.pop();
                    }
                }
                let line = String::from_utf8_lossy(&self.buffer).into_owned();
                Some(Ok((self.line_number, line)))
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e.into()))
            }
        }
    }
}
