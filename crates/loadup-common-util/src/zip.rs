//! Packing byte buffers and files into ZIP archives and unpacking them into
//! a flat directory.
//!
//! Entries are always stored and extracted under their bare file name:
//! directories inside archives are dropped. This keeps extraction confined
//! to the target directory.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, Write};
use std::path::Path;

use ::zip::ZipWriter;
use ::zip::read::read_zipfile_from_stream;
use ::zip::write::SimpleFileOptions;
use thiserror::Error;
use tracing::instrument;

use crate::pool::char_pool;

/// Extension a ZIP target path must carry.
pub const ZIP_EXTENSION: &str = "zip";

#[derive(Debug, Error)]
pub enum ZipError {
    /// The path is blank or does not end in `.zip`.
    #[error("not a zip path: `{0}`")]
    InvalidZipPath(String),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("zip archive error: {0}")]
    Archive(#[from] ::zip::result::ZipError),
}

type Result<T> = core::result::Result<T, ZipError>;

/// The segment after the last `/` or `\`, or the whole path when there is
/// none.
pub fn file_name(path: &str) -> &str {
    path.rsplit([char_pool::SLASH, char_pool::BACK_SLASH])
        .next()
        .unwrap_or(path)
}

/// Whether `path` is non-blank and its extension is exactly `zip`.
pub fn is_zip_path(path: &str) -> bool {
    !path.trim().is_empty()
        && path
            .rsplit_once(char_pool::DOT)
            .is_some_and(|(_, ext)| ext == ZIP_EXTENSION)
}

fn check_zip_path(path: &str) -> Result<()> {
    if is_zip_path(path) {
        Ok(())
    } else {
        Err(ZipError::InvalidZipPath(path.to_owned()))
    }
}

/// Writes a ZIP archive holding one entry per `(name, reader)` pair to
/// `out`. Each entry is stored under [`file_name`] of its name.
pub fn zip_streams<N, R, W>(entries: impl IntoIterator<Item = (N, R)>, mut out: W) -> Result<()>
where
    N: AsRef<str>,
    R: Read,
    W: Write,
{
    let mut buffer = Cursor::new(Vec::new());
    write_entries(&mut buffer, entries)?;
    out.write_all(buffer.get_ref())?;
    out.flush()?;
    Ok(())
}

/// [`zip_streams`] over in-memory buffers.
///
/// ```
/// use loadup_common_util::zip::zip_bytes;
///
/// let mut archive = Vec::new();
/// zip_bytes([("reports/a.csv", b"id,amount\n1,10\n".as_slice())], &mut archive).unwrap();
/// assert!(archive.starts_with(b"PK"));
/// ```
pub fn zip_bytes<N, D, W>(entries: impl IntoIterator<Item = (N, D)>, out: W) -> Result<()>
where
    N: AsRef<str>,
    D: AsRef<[u8]>,
    W: Write,
{
    let entries: Vec<(N, D)> = entries.into_iter().collect();
    zip_streams(
        entries
            .iter()
            .map(|(name, data)| (name.as_ref(), data.as_ref())),
        out,
    )
}

fn write_entries<N, R, W>(target: W, entries: impl IntoIterator<Item = (N, R)>) -> Result<W>
where
    N: AsRef<str>,
    R: Read,
    W: Write + Seek,
{
    let options = SimpleFileOptions::default();
    let mut writer = ZipWriter::new(target);
    for (name, mut reader) in entries {
        let name = name.as_ref();
        tracing::info!(entry = name, "adding zip entry");
        writer.start_file(file_name(name), options)?;
        io::copy(&mut reader, &mut writer)?;
    }
    Ok(writer.finish()?)
}

/// Packs the given files into a new archive at `zip_path`.
#[instrument(level = "debug", skip(paths))]
pub fn files_to_zip<P: AsRef<Path>>(paths: &[P], zip_path: &str) -> Result<()> {
    check_zip_path(zip_path)?;
    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        entries.push((name, BufReader::new(File::open(path)?)));
    }
    write_entries(File::create(zip_path)?, entries)?;
    Ok(())
}

/// Extracts every file entry read from `reader` into `dir`, flattened to its
/// file name. Returns the number of files written.
#[instrument(level = "debug", skip(reader, dir))]
pub fn zip_stream_to_files<R: Read>(mut reader: R, dir: impl AsRef<Path>) -> Result<usize> {
    let dir = dir.as_ref();
    let mut written = 0;
    while let Some(mut entry) = read_zipfile_from_stream(&mut reader)? {
        if entry.is_dir() {
            continue;
        }
        let name = file_name(entry.name()).to_owned();
        if matches!(name.as_str(), "" | "." | "..") {
            tracing::warn!(entry = entry.name(), "skipping zip entry without a file name");
            continue;
        }
        let mut out = File::create(dir.join(&name))?;
        io::copy(&mut entry, &mut out)?;
        tracing::debug!(entry = name, "extracted zip entry");
        written += 1;
    }
    Ok(written)
}

/// Extracts the archive at `zip_path` into `dir`.
pub fn zip_to_files(dir: impl AsRef<Path>, zip_path: &str) -> Result<usize> {
    check_zip_path(zip_path)?;
    let file = BufReader::new(File::open(zip_path)?);
    zip_stream_to_files(file, dir)
}
