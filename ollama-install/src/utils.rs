use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Create a directory and its parents with the given Unix mode.
pub fn create_dir_all_with_mode(path: &Path, mode: u32) -> io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path)
}

/// Remove a file or directory tree. A missing path is not an error.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) => Err(e),
    };

    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

/// Empty out `path` by removing it and creating it again.
pub fn reset_dir(path: &Path, mode: u32) -> io::Result<()> {
    remove_path(path)?;
    create_dir_all_with_mode(path, mode)
}

/// Whether any line of the file contains `needle`.
pub fn file_contains_line(path: &Path, needle: &str) -> io::Result<bool> {
    let bytes = fs::read(path)?;
    let content = String::from_utf8_lossy(&bytes);
    Ok(content.lines().any(|line| line.contains(needle)))
}

/// Append `line` surrounded by newlines, creating the file (0644) if needed.
pub fn append_line(path: &Path, line: &str) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    let mut file = options.open(path)?;
    file.write_all(format!("\n{line}\n").as_bytes())?;
    file.flush()
}
