//! Archive assembly.
//!
//! Streams a model's manifest file and every blob it references into a
//! single uncompressed tar archive. Entry paths are relative to the store
//! root, so unpacking the archive at a compatible store root restores the
//! model in place.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{PackError, Result};
use crate::store::{blob_file_name, ModelManifest, ModelReference, BLOBS_DIR};

/// Write a model's archive to `sink`.
///
/// Entry order is fixed: the manifest file, the config blob, then each
/// layer blob in manifest order. The order and the uncompressed layout are
/// a contract with restore tooling; identical inputs produce identical
/// archives.
///
/// A referenced blob absent from the store aborts the whole operation with
/// [`PackError::BlobMissing`] naming the expected path. No trailer is
/// written in that case, so a partial archive is never finalized.
pub fn write_archive<W: Write>(
    store_root: &Path,
    manifest: &ModelManifest,
    model: &ModelReference,
    sink: W,
) -> Result<()> {
    let mut builder = tar::Builder::new(sink);

    append_entry(
        &mut builder,
        store_root,
        &ModelManifest::relative_path(model),
    )?;

    append_entry(
        &mut builder,
        store_root,
        &Path::new(BLOBS_DIR).join(blob_file_name(&manifest.config.digest)),
    )?;

    for layer in &manifest.layers {
        append_entry(
            &mut builder,
            store_root,
            &Path::new(BLOBS_DIR).join(blob_file_name(&layer.digest)),
        )?;
    }

    builder.finish()?;
    Ok(())
}

/// Append one store file to the archive under its store-relative path.
///
/// The entry header carries the logical path and the file's exact size at
/// read time; the content is streamed uncompressed.
fn append_entry<W: Write>(
    builder: &mut tar::Builder<W>,
    store_root: &Path,
    relative: &Path,
) -> Result<()> {
    let source = store_root.join(relative);

    let mut file = File::open(&source).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => PackError::BlobMissing { path: source.clone() },
        _ => PackError::Io(e),
    })?;

    let size = file.metadata()?.len();
    info!(path = %relative.display(), size, "adding entry to archive");

    builder.append_file(relative, &mut file)?;
    Ok(())
}
