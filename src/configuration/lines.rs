use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use super::{directive::trim_trailing_space, error::ConfigurationError};


/// Marker that starts a comment line.
pub const COMMENT_MARKER: char = '#';


/// Lazy, single-pass source of directive lines.
///
/// Blank and comment lines are skipped here, so every item produced is
/// a line the splitter has to look at. Leading space characters are already
/// stripped from it. The underlying reader is dropped together with this
/// value, which closes the file on every exit path of the parser.
pub struct DirectiveLines<R> {
    reader: R,

    origin: PathBuf,

    buffer: Vec<u8>,

    line_number: usize,

    finished: bool,
}

impl DirectiveLines<BufReader<File>> {
    /// Open the file at `path` for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| ConfigurationError::FileOpen {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::new(BufReader::new(file), path))
    }
}

impl<R> DirectiveLines<R>
where
    R: BufRead,
{
    /// Wrap an already-open reader. `origin` is only used in error reports.
    pub fn new<P: Into<PathBuf>>(reader: R, origin: P) -> Self {
        Self {
            reader,
            origin: origin.into(),
            buffer: Vec::new(),
            line_number: 0,
            finished: false,
        }
    }

    /// The path (or label) this source reads from.
    pub fn origin(&self) -> &Path {
        &self.origin
    }
}

impl<R> Iterator for DirectiveLines<R>
where
    R: BufRead,
{
    /// `(1-based line number, line with leading spaces removed)`.
    type Item = Result<(usize, String), ConfigurationError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            self.buffer.clear();
            self.line_number += 1;

            match self.reader.read_until(b'\n', &mut self.buffer) {
                Ok(0) => {
                    self.finished = true;
                }
                Ok(_) => {
                    let raw_line = String::from_utf8_lossy(&self.buffer);
                    let line = raw_line.trim_start_matches(' ');

                    if is_skippable(line) {
                        continue;
                    }

                    // Directive values are stored as `String`, so they must not
                    // be rewritten behind the caller's back.
                    if std::str::from_utf8(&self.buffer).is_err() {
                        self.finished = true;

                        return Some(Err(ConfigurationError::Read {
                            path: self.origin.clone(),
                            line_number: self.line_number,
                            source: io::Error::new(
                                io::ErrorKind::InvalidData,
                                "directive line is not valid UTF-8",
                            ),
                        }));
                    }

                    return Some(Ok((self.line_number, line.to_string())));
                }
                Err(source) => {
                    self.finished = true;

                    return Some(Err(ConfigurationError::Read {
                        path: self.origin.clone(),
                        line_number: self.line_number,
                        source,
                    }));
                }
            }
        }

        None
    }
}


/// Whether a line (already stripped of leading spaces) carries no directive.
pub fn is_skippable(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER) || trim_trailing_space(line).is_empty()
}
