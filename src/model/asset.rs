use std::path::{Path, PathBuf};

use crate::util::basename;

/// Reference to an image, either on disk or already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetRef {
    /// A file to be read when the file set is generated.
    Path(PathBuf),
    /// Bytes supplied by the caller under a declared name.
    Loaded { name: String, data: Vec<u8> },
}

impl AssetRef {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        AssetRef::Path(path.into())
    }

    pub fn loaded(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        AssetRef::Loaded {
            name: name.into(),
            data: data.into(),
        }
    }

    /// The name the asset is stored under inside the container.
    pub fn file_name(&self) -> String {
        match self {
            AssetRef::Path(path) => basename(&path.to_string_lossy()).to_string(),
            AssetRef::Loaded { name, .. } => basename(name).to_string(),
        }
    }

    /// The reference as the caller declared it (full path or declared name).
    pub fn declared(&self) -> String {
        match self {
            AssetRef::Path(path) => path.to_string_lossy().into_owned(),
            AssetRef::Loaded { name, .. } => name.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.declared().trim().is_empty()
    }
}

impl From<&str> for AssetRef {
    fn from(path: &str) -> Self {
        AssetRef::Path(PathBuf::from(path))
    }
}

impl From<String> for AssetRef {
    fn from(path: String) -> Self {
        AssetRef::Path(PathBuf::from(path))
    }
}

impl From<PathBuf> for AssetRef {
    fn from(path: PathBuf) -> Self {
        AssetRef::Path(path)
    }
}

impl From<&Path> for AssetRef {
    fn from(path: &Path) -> Self {
        AssetRef::Path(path.to_path_buf())
    }
}
