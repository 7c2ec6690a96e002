use crate::analyze::error::AnalyzeError;
use glob::glob;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Argument that selects standard input instead of a file.
pub const STDIN_ARG: &str = "-";

const GLOB_META: &[char] = &['*', '?', '['];

/// Where log bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl InputSource {
    /// Opens the source for line reading. Files ending in `.gz` are decompressed on the fly.
    pub fn open(&self) -> Result<Box<dyn BufRead + Send>, AnalyzeError> {
        match self {
            InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
            InputSource::File(path) => {
                let file = File::open(path).map_err(|e| AnalyzeError::open(path, e))?;
                Ok(wrap_file(path, file))
            }
        }
    }

    /// Reads the whole (decompressed) source into memory.
    pub fn read_all(&self) -> Result<Vec<u8>, AnalyzeError> {
        let mut reader = self.open()?;
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| AnalyzeError::read(self.to_string(), e))?;
        Ok(buf)
    }
}

#[cfg(feature = "gzip")]
fn wrap_file(path: &Path, file: File) -> Box<dyn BufRead + Send> {
    if is_gzip(path) {
        Box::new(BufReader::new(flate2::read::MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    }
}

#[cfg(not(feature = "gzip"))]
fn wrap_file(_path: &Path, file: File) -> Box<dyn BufRead + Send> {
    Box::new(BufReader::new(file))
}

pub fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Turns command-line arguments into input sources.
///
/// `-` selects stdin, arguments containing glob metacharacters are expanded in
/// sorted order, anything else is taken as a literal path. A pattern that
/// matches nothing is an error, so a typo does not silently produce an empty report.
pub fn resolve_inputs<S: AsRef<str>>(args: &[S]) -> Result<Vec<InputSource>, AnalyzeError> {
    let mut sources = Vec::new();

    for arg in args {
        let arg = arg.as_ref();

        if arg == STDIN_ARG {
            sources.push(InputSource::Stdin);
        } else if arg.contains(GLOB_META) {
            let paths = discover(arg)?;
            if paths.is_empty() {
                return Err(AnalyzeError::NoInput {
                    pattern: arg.to_string(),
                });
            }
            sources.extend(paths.into_iter().map(InputSource::File));
        } else {
            sources.push(InputSource::File(PathBuf::from(arg)));
        }
    }

    Ok(sources)
}

/// Files matching `pattern`, sorted. Directories and unreadable entries are skipped.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, AnalyzeError> {
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| AnalyzeError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Feeds every line of `reader` to `on_line`.
///
/// Lines are split on `\n`, a trailing `\r` is dropped, and bytes that are not
/// valid UTF-8 are replaced rather than failing the run. The cancel check runs
/// before each line.
pub fn for_each_line<R, F, C>(
    mut reader: R,
    origin: &str,
    is_cancelled: C,
    mut on_line: F,
) -> Result<(), AnalyzeError>
where
    R: BufRead,
    F: FnMut(&str),
    C: Fn() -> bool,
{
    let mut buf = Vec::with_capacity(512);

    loop {
        if is_cancelled() {
            return Err(AnalyzeError::Cancelled);
        }

        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| AnalyzeError::read(origin, e))?;
        if n == 0 {
            return Ok(());
        }

        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }

        on_line(&String::from_utf8_lossy(line));
    }
}
