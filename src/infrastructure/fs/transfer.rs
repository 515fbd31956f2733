//! Single-file transfer
//!
//! Publishing copies one file out of a fetch workspace into a checkout.
//! A hard link is tried first; when that is impossible (different devices,
//! destination already present) the bytes are streamed into a freshly
//! created destination and flushed to stable storage.

use std::fs::{self, File, Metadata};
use std::io;
use std::path::Path;

use tracing::debug;

/// Copy the regular file `src` to `dst`.
///
/// - `src` must be a regular file and `dst`, if present, must be one too;
///   otherwise `ErrorKind::InvalidInput` is returned.
/// - If both paths already name the same file this is a no-op.
/// - An existing `dst` is replaced as a whole, never merged with old content.
pub fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    let src_meta = fs::metadata(src)?;
    if !src_meta.is_file() {
        return Err(invalid_input(format!(
            "non-regular source file {} ({:?})",
            src.display(),
            src_meta.file_type()
        )));
    }

    match fs::metadata(dst) {
        Ok(dst_meta) => {
            if !dst_meta.is_file() {
                return Err(invalid_input(format!(
                    "non-regular destination file {} ({:?})",
                    dst.display(),
                    dst_meta.file_type()
                )));
            }
            if same_file(src, &src_meta, dst, &dst_meta)? {
                debug!(src = %src.display(), dst = %dst.display(), "source and destination are the same file");
                return Ok(());
            }
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    match fs::hard_link(src, dst) {
        Ok(()) => {
            debug!(src = %src.display(), dst = %dst.display(), "hard linked");
            Ok(())
        }
        Err(link_err) => {
            debug!(error = %link_err, "hard link failed, copying bytes");
            copy_contents(src, dst)
        }
    }
}

/// Stream `src` into a freshly created `dst` and sync it to disk
fn copy_contents(src: &Path, dst: &Path) -> io::Result<()> {
    let mut input = File::open(src)?;
    let mut output = File::create(dst)?;
    let copied = io::copy(&mut input, &mut output)?;
    output.sync_all()?;
    debug!(bytes = copied, dst = %dst.display(), "copied file contents");
    Ok(())
}

#[cfg(unix)]
fn same_file(_src: &Path, src_meta: &Metadata, _dst: &Path, dst_meta: &Metadata) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;
    Ok(src_meta.dev() == dst_meta.dev() && src_meta.ino() == dst_meta.ino())
}

#[cfg(not(unix))]
fn same_file(src: &Path, _src_meta: &Metadata, dst: &Path, _dst_meta: &Metadata) -> io::Result<bool> {
    Ok(fs::canonicalize(src)? == fs::canonicalize(dst)?)
}

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
