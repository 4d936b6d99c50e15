pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::LocalStorage;
pub use config::CompilerConfig;
pub use core::compiler::Compiler;
pub use domain::model::{CompileReport, CompileSummary, ProcessedFile, SkippedFile, TextEncoding};
pub use utils::error::{CompileError, Result};
