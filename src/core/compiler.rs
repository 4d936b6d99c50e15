use crate::core::decode::decode_text;
use crate::core::layout::Layout;
use crate::domain::model::{
    CompileReport, CompileSummary, ProcessedFile, SkippedFile, TextEncoding,
};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{CompileError, Result};
use crate::utils::monitor::SystemMonitor;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const TXT_EXTENSION: &str = ".txt";

/// Concatenates the `.txt` files of one directory into a single output file.
pub struct Compiler<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    monitor: SystemMonitor,
}

impl<S: Storage, C: ConfigProvider> Compiler<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::new_with_monitoring(storage, config, false)
    }

    pub fn new_with_monitoring(storage: S, config: C, monitor_enabled: bool) -> Self {
        Self {
            storage,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Sorted list of files a compile would read. Writes nothing.
    pub fn plan(&self) -> Result<Vec<PathBuf>> {
        let dir = self.config.input_folder();
        let output = self.config.output_file();

        let entries = self
            .storage
            .list_files(dir)
            .map_err(|source| CompileError::InputDir {
                path: dir.to_path_buf(),
                source,
            })?;

        let mut files: Vec<PathBuf> = entries
            .into_iter()
            .filter(|path| self.is_candidate(path))
            .filter(|path| {
                if self.storage.same_file(path, output) {
                    tracing::debug!("Skipping output file {}", path.display());
                    false
                } else {
                    true
                }
            })
            .collect();

        // 所有檔案同一層目錄，排序等同檔名的位元組順序
        files.sort();

        if files.is_empty() {
            return Err(CompileError::NoInputFiles {
                dir: dir.to_path_buf(),
            });
        }

        Ok(files)
    }

    pub fn compile(&mut self) -> Result<CompileReport> {
        let files = self.plan()?;

        tracing::info!("Found {} .txt files to compile:", files.len());
        for path in &files {
            tracing::info!("  - {}", display_name(path));
        }
        self.monitor.log_stats("Discovery");

        let output = self.config.output_file().to_path_buf();
        let layout = Layout {
            add_separators: self.config.add_separators(),
            include_filenames: self.config.include_filenames(),
        };

        let mut out = self
            .storage
            .create_output(&output)
            .map_err(output_error(&output))?;

        let mut report = CompileReport {
            output_path: output.clone(),
            processed: Vec::with_capacity(files.len()),
            skipped: Vec::new(),
        };

        for (index, path) in files.into_iter().enumerate() {
            let name = display_name(&path);

            let bytes = match self.storage.read_file(&path) {
                Ok(bytes) => bytes,
                Err(source) => {
                    let err = CompileError::FileRead {
                        path: path.clone(),
                        source,
                    };
                    tracing::error!("❌ {}", err);
                    report.skipped.push(SkippedFile {
                        path,
                        reason: err.to_string(),
                    });
                    continue;
                }
            };

            let (content, encoding) = decode_text(bytes);
            if encoding == TextEncoding::Latin1 {
                tracing::warn!(
                    "⚠️ UTF-8 encoding issue with {}, using latin-1",
                    path.display()
                );
            }

            layout
                .write_preamble(&mut out, index, &name)
                .map_err(output_error(&output))?;
            out.write_all(content.as_bytes())
                .map_err(output_error(&output))?;

            let chars = content.chars().count();
            match encoding {
                TextEncoding::Utf8 => tracing::info!("✓ Processed: {} ({} characters)", name, chars),
                TextEncoding::Latin1 => {
                    tracing::info!("✓ Processed (latin-1): {} ({} characters)", name, chars)
                }
            }

            report.processed.push(ProcessedFile {
                path,
                name,
                chars,
                encoding,
            });
        }

        out.flush().map_err(output_error(&output))?;
        self.monitor.log_stats("Compile");

        tracing::info!("✅ Successfully compiled {} files", report.files_processed());
        tracing::info!("📄 Total characters: {}", format_thousands(report.total_chars()));
        tracing::info!("💾 Output file: {}", output.display());
        if !report.skipped.is_empty() {
            tracing::warn!("⚠️ Skipped {} unreadable files", report.skipped.len());
        }
        self.monitor.log_final_stats();

        Ok(report)
    }

    /// Runs a compile and flattens the outcome; failures are logged, not returned.
    pub fn run(&mut self) -> CompileSummary {
        match self.compile() {
            Ok(report) => CompileSummary::from(&report),
            Err(e) => {
                tracing::error!("❌ Compilation failed: {} (Category: {:?})", e, e.category());
                CompileSummary::failed()
            }
        }
    }

    fn is_candidate(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy();

        if !name.ends_with(TXT_EXTENSION) {
            return false;
        }

        self.config.include_hidden() || !name.starts_with('.')
    }
}

fn output_error(path: &Path) -> impl Fn(std::io::Error) -> CompileError + '_ {
    move |source| CompileError::OutputWrite {
        path: path.to_path_buf(),
        source,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn format_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
