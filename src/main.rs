use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use txt_compiler::config::DEFAULT_CONFIG_FILE;
use txt_compiler::utils::{logger, validation::Validate};
use txt_compiler::{CliArgs, CompileError, Compiler, CompilerConfig, LocalStorage};

const EXIT_COMPILE_FAILED: u8 = 1;
const EXIT_CONFIG_FAILED: u8 = 2;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            return ExitCode::from(EXIT_CONFIG_FAILED);
        }
    };

    // 初始化日誌
    logger::init_cli_logger(args.verbose, config.log_level(), config.log_format());

    tracing::info!("=== TXT File Compiler ===");
    match CompilerConfig::resolve_path(args.config.as_deref()) {
        Some(path) => tracing::info!("📝 Loaded configuration from: {}", path.display()),
        None => tracing::info!(
            "ℹ️ No config file found at {}, using defaults",
            DEFAULT_CONFIG_FILE
        ),
    }
    display_config_summary(&config);

    if args.verbose {
        match config.to_toml_string() {
            Ok(text) => tracing::debug!("Effective config:\n{}", text),
            Err(e) => tracing::debug!("Effective config unavailable: {}", e),
        }
    }

    let monitor_enabled = args.monitor || config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let mut compiler = Compiler::new_with_monitoring(LocalStorage::new(), config, monitor_enabled);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No output will be written");
        return match compiler.plan() {
            Ok(files) => {
                println!("Would compile {} files:", files.len());
                for file in files {
                    println!("  - {}", file.display());
                }
                ExitCode::SUCCESS
            }
            Err(e) => report_failure(&e),
        };
    }

    match compiler.compile() {
        Ok(report) => {
            tracing::info!("🎉 Compilation completed successfully!");
            println!(
                "✅ Compiled {} files ({} characters) into {}",
                report.files_processed(),
                report.total_chars(),
                report.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => report_failure(&e),
    }
}

fn load_config(args: &CliArgs) -> anyhow::Result<CompilerConfig> {
    let config = CompilerConfig::load(args.config.as_deref()).with_context(|| match &args.config {
        Some(path) => format!("Failed to load config file '{}'", path.display()),
        None => "Failed to load default config file".to_string(),
    })?;

    config
        .validate()
        .context("Configuration validation failed")?;

    Ok(config)
}

fn display_config_summary(config: &CompilerConfig) {
    tracing::info!("Input folder: {}", config.input_folder.display());
    tracing::info!("Output file: {}", config.output_file.display());
    tracing::info!("Add separators: {}", config.add_separators);
    tracing::info!("Include filenames: {}", config.include_filenames);
    if config.include_hidden {
        tracing::info!("Include hidden files: true");
    }
}

fn report_failure(e: &CompileError) -> ExitCode {
    tracing::error!("❌ Compilation failed: {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ Compilation failed: {}", e);
    ExitCode::from(EXIT_COMPILE_FAILED)
}
