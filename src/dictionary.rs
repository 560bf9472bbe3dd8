//! Line source for dictionary files.
//!
//! Lines are produced lazily. Bytes that are not valid UTF-8 are replaced
//! rather than failing the read, so such entries are later excluded as
//! non-alphabetic.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::WordPlayError;

/// Lazy iterator over the lines of a dictionary, without line terminators.
pub struct DictionaryLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Iterator for DictionaryLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

/// Read dictionary lines from any buffered source.
pub fn lines_from_reader<R: BufRead>(reader: R) -> DictionaryLines<R> {
    DictionaryLines {
        reader,
        buf: Vec::new(),
    }
}

/// Open a dictionary file for reading.
pub fn open<P: AsRef<Path>>(
    path: P,
) -> Result<DictionaryLines<BufReader<File>>, WordPlayError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordPlayError::OpenDictionary {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(lines_from_reader(BufReader::new(file)))
}
