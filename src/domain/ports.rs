use std::io::Write;
use std::path::{Path, PathBuf};

/// Filesystem access used by the compiler.
pub trait Storage {
    type Writer: Write;

    /// Entries directly under `dir` that are not directories, in no particular order.
    fn list_files(&self, dir: &Path) -> std::io::Result<Vec<PathBuf>>;
    fn read_file(&self, path: &Path) -> std::io::Result<Vec<u8>>;
    /// Creates missing parent directories, then creates or truncates `path`.
    fn create_output(&self, path: &Path) -> std::io::Result<Self::Writer>;
    /// Whether two paths name the same file. Only called with paths that exist.
    fn same_file(&self, a: &Path, b: &Path) -> bool {
        a == b
    }
}

pub trait ConfigProvider {
    fn input_folder(&self) -> &Path;
    fn output_file(&self) -> &Path;
    fn add_separators(&self) -> bool;
    fn include_filenames(&self) -> bool;
    fn include_hidden(&self) -> bool {
        false
    }
}
