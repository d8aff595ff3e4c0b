use std::path::PathBuf;

use anyhow::{Context, Result};
use uuid::Uuid;

/// Uploaded files land under `{root}/storage/{category}/` and are referred
/// to everywhere else by their relative public path.
#[derive(Debug, Clone)]
pub struct Storage {
    root: PathBuf,
}

pub const MAX_UPLOAD_BYTES: usize = 2 * 1024 * 1024;

impl Storage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Write `bytes` under the given category and return the public path,
    /// e.g. `storage/disciplines/3f2a….png`.
    pub fn store(&self, category: &str, original_name: &str, bytes: &[u8]) -> Result<String> {
        let dir = self.root.join("storage").join(category);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("creating upload directory {}", dir.display()))?;

        let file_name = format!("{}.{}", Uuid::new_v4(), extension_of(original_name));
        let path = dir.join(&file_name);
        std::fs::write(&path, bytes)
            .with_context(|| format!("writing upload {}", path.display()))?;

        Ok(format!("storage/{}/{}", category, file_name))
    }
}

/// Sanitized lowercase extension; anything suspicious collapses to "bin".
fn extension_of(name: &str) -> String {
    let ext = match name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return "bin".to_string(),
    };
    if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        ext
    } else {
        "bin".to_string()
    }
}
