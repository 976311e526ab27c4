use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("{} is not valid UTF-8 (first invalid byte at offset {valid_up_to})", path.display())]
    Decode { path: PathBuf, valid_up_to: usize },
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Metadata of `base/rel`. Errors name `rel` so messages stay independent of `base`.
pub fn inspect(base: &Path, rel: &Path) -> Result<fs::Metadata, ReadError> {
    fs::metadata(base.join(rel)).map_err(|err| ReadError::from_io(rel, err))
}

/// Size in bytes of an existing filesystem entry.
pub fn entry_size(base: &Path, rel: &Path) -> Result<u64, ReadError> {
    inspect(base, rel).map(|meta| meta.len())
}

/// Reads a whole document as UTF-8 text.
pub fn read_document(base: &Path, rel: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(base.join(rel)).map_err(|err| ReadError::from_io(rel, err))?;
    String::from_utf8(bytes).map_err(|err| ReadError::Decode {
        path: rel.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })
}
