//! Throwaway seed directories.

use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A uniquely named directory under the system temp dir, removed on drop.
///
/// # Example
/// ```no_run
/// use clinic_testing::fixture::SeedDir;
/// let dir = SeedDir::new();
/// dir.write("abordagem.txt", "CBT\n");
/// ```
pub struct SeedDir {
    path: PathBuf,
}

impl SeedDir {
    pub fn new() -> Self {
        let path = std::env::temp_dir().join(format!("clinic-seed-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("cannot create {}: {}", path.display(), e));
        Self { path }
    }

    /// Write `contents` to `name` inside the directory, replacing any previous file.
    pub fn write(&self, name: &str, contents: &str) -> &Self {
        let file = self.path.join(name);
        std::fs::write(&file, contents)
            .unwrap_or_else(|e| panic!("cannot write {}: {}", file.display(), e));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SeedDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SeedDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
