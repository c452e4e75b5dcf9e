use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Ensures the directory that will hold `file` exists.
pub fn with_parent_dir(file: &Path) -> io::Result<()> {
    match file.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// `out/noise.wav` with index 3 of 12 becomes `out/noise_03.wav`.
pub fn indexed_name(base: &Path, index: usize, count: usize) -> PathBuf {
    let width = count.saturating_sub(1).to_string().len();
    let stem = base.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{}_{:0width$}.{}", stem, index, ext.to_string_lossy(), width = width),
        None => format!("{}_{:0width$}", stem, index, width = width),
    };
    base.with_file_name(name)
}
