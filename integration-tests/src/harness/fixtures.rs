use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::harness::LogLine;

/// Temporary directory of log files, removed on drop.
pub struct LogDir {
    dir: TempDir,
}

impl LogDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Glob pattern rooted in this directory.
    pub fn pattern(&self, pattern: &str) -> String {
        self.path(pattern).display().to_string()
    }

    pub fn write(&self, name: &str, lines: &[LogLine]) -> PathBuf {
        self.write_raw(name, &render(lines))
    }

    pub fn write_raw(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn write_gz(&self, name: &str, lines: &[LogLine]) -> PathBuf {
        let path = self.path(name);
        let mut enc = GzEncoder::new(fs::File::create(&path).unwrap(), Compression::default());
        enc.write_all(render(lines).as_bytes()).unwrap();
        enc.finish().unwrap();
        path
    }
}

impl Default for LogDir {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(lines: &[LogLine]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}
