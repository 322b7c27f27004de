use crate::error::{GeneratorErrorExt, Result};
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Replaces `target` with `data` through a synced sibling temp file and a rename, so
/// readers observe either the old or the new content.
pub(crate) fn write_atomic(target: &Path, data: &[u8]) -> Result<()> {
    let temp = unique_tmp_path(target);

    if let Err(err) = write_synced(&temp, target, data) {
        if let Err(cleanup) = fs::remove_file(&temp)
            && cleanup.kind() != std::io::ErrorKind::NotFound
        {
            warn!(path = %temp.display(), error = %cleanup, "Temp file cleanup failed");
        }
        return Err(err);
    }

    if let Some(parent) = target.parent() {
        sync_dir(parent);
    }

    debug!(path = %target.display(), "File saved atomically");
    Ok(())
}

fn write_synced(temp: &Path, target: &Path, data: &[u8]) -> Result<()> {
    {
        let mut file = fs::OpenOptions::new()
            .create_new(true)
            .write(true)
            .open(temp)
            .context(format!("Temp creation failed: {}", temp.display()))?;
        file.write_all(data).context("Write failed")?;
        file.sync_all().context("Hardware sync failed")?;
    }

    if let Ok(metadata) = fs::metadata(target) {
        fs::set_permissions(temp, metadata.permissions())
            .context(format!("Failed to copy permissions of {}", target.display()))?;
    }

    fs::rename(temp, target).context(format!(
        "Atomic swap failed: {} -> {}",
        temp.display(),
        target.display()
    ))
}

fn sync_dir(path: &Path) {
    // Directories cannot be opened as files on every platform.
    match fs::File::open(path) {
        Ok(dir) => {
            if let Err(err) = dir.sync_all() {
                debug!(path = %path.display(), error = %err, "Directory sync failed");
            }
        },
        Err(err) => {
            debug!(path = %path.display(), error = %err, "Directory open failed");
        },
    }
}

fn unique_tmp_path(target: &Path) -> PathBuf {
    let counter = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let file_name = target.file_name().and_then(|s| s.to_str()).unwrap_or("rgen");
    target.with_file_name(format!(".{file_name}.rgentmp.{}.{counter}", std::process::id()))
}
