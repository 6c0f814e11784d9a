//! In-memory zip expansion.

use std::io::{Cursor, Read};

use zip::ZipArchive;

/// One file entry pulled out of an uploaded archive.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// Entry name as listed in the archive (may contain path segments).
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Errors while expanding an uploaded archive. Any of these fails the whole
/// upload item: there is no per-entry recovery for a corrupt archive.
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("{0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("failed to read archive entry '{name}': {source}")]
    EntryRead {
        name: String,
        source: std::io::Error,
    },
}

/// Expand a zip archive held in memory into its file entries.
///
/// Entries come back in archive listing order; directory entries are
/// skipped. The whole archive is read in one pass: re-expansion needs the
/// original bytes again.
pub fn expand_zip(bytes: &[u8]) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut entries = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let mut file = archive.by_index(index)?;
        if file.is_dir() {
            continue;
        }

        let name = file.name().to_string();
        let mut buf = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut buf)
            .map_err(|source| ArchiveError::EntryRead {
                name: name.clone(),
                source,
            })?;

        entries.push(ArchiveEntry { name, bytes: buf });
    }

    Ok(entries)
}
