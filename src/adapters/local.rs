use crate::domain::ports::Storage;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    type Writer = BufWriter<File>;

    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            // 斷掉的 symlink 也保留，讀取時再當成單檔錯誤處理
            if entry.file_type()?.is_dir() {
                continue;
            }
            files.push(entry.path());
        }

        Ok(files)
    }

    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn create_output(&self, path: &Path) -> std::io::Result<Self::Writer> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                tracing::info!("📁 Created output directory: {}", parent.display());
            }
        }

        Ok(BufWriter::new(File::create(path)?))
    }

    fn same_file(&self, a: &Path, b: &Path) -> bool {
        match (fs::canonicalize(a), fs::canonicalize(b)) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        }
    }
}
