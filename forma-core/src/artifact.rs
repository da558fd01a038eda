use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::Builder;

/// A rendered file waiting to be written.
///
/// Generated files are always overwritten. The content is staged in a
/// temporary file next to the destination and then moved into place, so a
/// failed write never leaves a truncated file behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    path: PathBuf,
    content: String,
}

impl GeneratedArtifact {
    /// Create a new artifact with the given destination and content
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Get the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Write the artifact, replacing any existing file at its path
    pub fn write(&self) -> std::io::Result<()> {
        write_file(&self.path, &self.content)
    }
}

fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // A replaced file keeps its permissions; a new one gets what `fs::write`
    // would give it (0o666 minus the umask) instead of the 0o600 staging default.
    let existing = std::fs::metadata(path).ok().map(|meta| meta.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut staged = builder.tempfile_in(parent)?;
    staged.write_all(content.as_bytes())?;
    staged.flush()?;
    if let Some(permissions) = existing {
        staged.as_file().set_permissions(permissions)?;
    }
    staged.persist(path).map_err(|e| e.error)?;
    Ok(())
}
