use std::path::{Path, PathBuf};

use eyre::Result;

use crate::FileType;

/// A rendered file, addressed relative to the output directory.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    file_type: FileType,
}

impl File {
    /// Create a new file with the given relative path, content and file type.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, file_type: FileType) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            file_type,
        }
    }

    /// Get the path relative to the output directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the kind of file this is
    pub fn file_type(&self) -> &FileType {
        &self.file_type
    }

    /// Get the extension of the path, if any
    pub fn extension(&self) -> Option<&str> {
        self.path.extension().and_then(|ext| ext.to_str())
    }

    /// Write the file below `base`, creating parent directories.
    ///
    /// Returns the absolute (joined) path that was written.
    pub fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = base.join(&self.path);
        write_file(&path, &self.content)?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.h");

        write_file(&path, "nested").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.c");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_file_write_joins_base() {
        let temp = TempDir::new().unwrap();
        let file = File::new("model/pet.h", "#ifndef _pet_H_", FileType::Model);

        let written = file.write(temp.path()).unwrap();

        assert_eq!(written, temp.path().join("model/pet.h"));
        assert_eq!(fs::read_to_string(&written).unwrap(), "#ifndef _pet_H_");
    }

    #[test]
    fn test_file_extension() {
        let file = File::new("api/PetAPI.c", "", FileType::Api);
        assert_eq!(file.extension(), Some("c"));

        let readme = File::new("README.md", "", FileType::SupportingFile);
        assert_eq!(readme.extension(), Some("md"));

        let bare = File::new("Makefile", "", FileType::SupportingFile);
        assert_eq!(bare.extension(), None);
    }
}
