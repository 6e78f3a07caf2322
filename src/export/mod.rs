//! Writes a generated file set to disk, as a folder or a `.tar.gz` archive.

use crate::generator::GeneratedFileSet;
use anyhow::{bail, Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Whether existing files may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    #[default]
    Refuse,
    Allow,
}

/// Folder name used inside archives, derived from the extension name.
///
/// Keeps ASCII alphanumerics, turns everything else into single dashes.
pub fn folder_slug(extension_name: &str) -> String {
    let mut slug = String::with_capacity(extension_name.len());
    for ch in extension_name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    if slug.is_empty() {
        "meeting-assistant".to_string()
    } else {
        slug.to_string()
    }
}

/// Write all seven files into `dir`, creating it if needed.
pub fn write_dir(set: &GeneratedFileSet, dir: &Path, overwrite: Overwrite) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    if overwrite == Overwrite::Refuse {
        let existing: Vec<_> = set
            .iter()
            .map(|(id, _)| dir.join(id.file_name()))
            .filter(|path| path.exists())
            .collect();
        if !existing.is_empty() {
            bail!(
                "Refusing to overwrite {} existing file(s) in {} (use --force)",
                existing.len(),
                dir.display()
            );
        }
    }

    let mut written = Vec::with_capacity(set.len());
    for (id, source) in set.iter() {
        let path = dir.join(id.file_name());
        fs::write(&path, source).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!("Wrote {} ({} bytes)", path.display(), source.len());
        written.push(path);
    }

    info!("Exported {} files to {}", written.len(), dir.display());
    Ok(written)
}

/// Write a gzip-compressed tarball with every file under one folder.
pub fn write_archive(set: &GeneratedFileSet, path: &Path, overwrite: Overwrite) -> Result<()> {
    if overwrite == Overwrite::Refuse && path.exists() {
        bail!("Refusing to overwrite {} (use --force)", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    write_archive_to(set, file)?;

    info!(
        "Wrote archive {} ({} files, {} bytes uncompressed)",
        path.display(),
        set.len(),
        set.total_bytes()
    );
    Ok(())
}

/// Stream the archive into any writer; returns the writer once the gzip trailer is written.
pub fn write_archive_to<W: Write>(set: &GeneratedFileSet, writer: W) -> Result<W> {
    let encoder = GzEncoder::new(writer, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    let folder = folder_slug(&set.options().extension_name);
    for (id, source) in set.iter() {
        let mut header = tar::Header::new_gnu();
        header.set_size(source.len() as u64);
        header.set_mode(0o644);
        builder
            .append_data(&mut header, format!("{}/{}", folder, id.file_name()), source.as_bytes())
            .with_context(|| format!("Failed to add {} to archive", id.file_name()))?;
    }

    let writer = builder
        .into_inner()
        .context("Failed to finish archive")?
        .finish()
        .context("Failed to finish gzip stream")?;
    Ok(writer)
}

/// The archive as an in-memory buffer, for HTTP downloads.
pub fn archive_bytes(set: &GeneratedFileSet) -> Result<Vec<u8>> {
    write_archive_to(set, Vec::new())
}
