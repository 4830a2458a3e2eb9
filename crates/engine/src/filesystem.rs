use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{EngineError, Result};

/// Read a whole file as UTF-8.
///
/// # Errors
/// Returns [`EngineError::FileRead`] on I/O or encoding failure.
pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| EngineError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the contents of `path` via a temp file and rename.
///
/// Either the new contents are in place or the old file is untouched.
///
/// # Errors
/// Returns [`EngineError::FileWrite`] if any step fails.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    write_then_rename(path, data).map_err(|source| EngineError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_then_rename(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Same directory so the rename stays on one filesystem.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let result = (|| {
        let file = File::create(&tmp)?;
        if let Ok(meta) = fs::metadata(path) {
            let _ = fs::set_permissions(&tmp, meta.permissions());
        }
        let mut w = BufWriter::new(file);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        fs::rename(&tmp, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result?;

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
