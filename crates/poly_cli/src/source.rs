//! Line source and append sink backed by a text file.

use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("file {} not found or unreadable", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot append to {}", .path.display())]
    Append {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// First line of `path` without its line terminator. An empty file gives
/// an empty line.
pub fn read_first_line(path: &Path) -> Result<String, SourceError> {
    let unavailable = |source| SourceError::Unavailable {
        path: path.to_path_buf(),
        source,
    };

    let file = fs::File::open(path).map_err(unavailable)?;
    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(unavailable)?;

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}

/// Append `line` plus a newline, starting on a fresh line if the file does
/// not already end with one.
pub fn append_line(path: &Path, line: &str) -> Result<(), SourceError> {
    let append_err = |source| SourceError::Append {
        path: path.to_path_buf(),
        source,
    };

    let needs_break = ends_without_newline(path).map_err(append_err)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(append_err)?;
    if needs_break {
        file.write_all(b"\n").map_err(append_err)?;
    }
    writeln!(file, "{}", line).map_err(append_err)?;
    tracing::debug!(path = %path.display(), "appended result line");
    Ok(())
}

// Only the last byte is read; a missing or empty file needs no break.
fn ends_without_newline(path: &Path) -> io::Result<bool> {
    let mut file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
