use std::path::PathBuf;

/// How a source file's bytes were turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

#[derive(Debug, Clone)]
pub struct ProcessedFile {
    pub path: PathBuf,
    pub name: String,
    pub chars: usize,
    pub encoding: TextEncoding,
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct CompileReport {
    pub output_path: PathBuf,
    pub processed: Vec<ProcessedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl CompileReport {
    pub fn files_processed(&self) -> usize {
        self.processed.len()
    }

    /// Characters of file content written, headers and separators excluded.
    pub fn total_chars(&self) -> usize {
        self.processed.iter().map(|f| f.chars).sum()
    }
}

/// Flat outcome of one run: `(success, files_processed, total_chars)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileSummary {
    pub success: bool,
    pub files_processed: usize,
    pub total_chars: usize,
}

impl CompileSummary {
    pub fn failed() -> Self {
        Self {
            success: false,
            files_processed: 0,
            total_chars: 0,
        }
    }
}

impl From<&CompileReport> for CompileSummary {
    fn from(report: &CompileReport) -> Self {
        Self {
            success: true,
            files_processed: report.files_processed(),
            total_chars: report.total_chars(),
        }
    }
}
