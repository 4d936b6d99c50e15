use std::fs;
use std::path::Path;
use tempfile::TempDir;
use txt_compiler::{CompileError, Compiler, CompilerConfig, LocalStorage, TextEncoding};

fn config_for(input: &Path, output: &Path, add_separators: bool, include_filenames: bool) -> CompilerConfig {
    CompilerConfig {
        input_folder: input.to_path_buf(),
        output_file: output.to_path_buf(),
        add_separators,
        include_filenames,
        ..CompilerConfig::default()
    }
}

#[test]
fn test_empty_directory_fails_with_zero_files() {
    let input = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, true, false));
    let summary = compiler.run();

    assert!(!summary.success);
    assert_eq!(summary.files_processed, 0);
    assert!(!output.exists());
}

#[test]
fn test_missing_input_directory_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");
    let output = temp_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(&missing, &output, true, false));
    let err = compiler.compile().unwrap_err();

    assert!(matches!(err, CompileError::InputDir { .. }));
}

#[test]
fn test_counts_match_file_contents() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("one.txt"), "hello").unwrap();
    fs::write(input.path().join("two.txt"), "wörld ✓\n").unwrap();
    fs::write(input.path().join("three.txt"), "").unwrap();
    fs::write(input.path().join("skip.md"), "not included").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, true, true));
    let summary = compiler.run();

    assert!(summary.success);
    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.total_chars, 5 + 8);
}

#[test]
fn test_plain_concatenation_in_sorted_order() {
    let input = TempDir::new().unwrap();
    // 建立順序故意與字母順序相反
    fs::write(input.path().join("c.txt"), "third").unwrap();
    fs::write(input.path().join("b.txt"), "second\r\n").unwrap();
    fs::write(input.path().join("a.txt"), "first\n").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, false, false));
    compiler.compile().unwrap();

    assert_eq!(fs::read(&output).unwrap(), b"first\nsecond\r\nthird");
}

#[test]
fn test_separators_and_filenames_layout() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("day1.txt"), "Squats").unwrap();
    fs::write(input.path().join("day2.txt"), "Rest").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, true, true));
    let report = compiler.compile().unwrap();

    let dashes = "-".repeat(30);
    let equals = "=".repeat(50);
    let expected = format!(
        "File: day1.txt\n{dashes}\n\nSquats\n\n{equals}\n\nFile: day2.txt\n{dashes}\n\nRest"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    assert_eq!(report.total_chars(), 10);
}

#[test]
fn test_separators_without_filenames() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "A").unwrap();
    fs::write(input.path().join("b.txt"), "B").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, true, false));
    compiler.compile().unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        format!("A\n\n{}\n\nB", "=".repeat(50))
    );
}

#[test]
fn test_invalid_utf8_is_included_via_latin1() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), [0x43, 0x61, 0x66, 0xE9]).unwrap();
    fs::write(input.path().join("b.txt"), "ok").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, false, false));
    let report = compiler.compile().unwrap();

    assert_eq!(report.files_processed(), 2);
    assert_eq!(report.processed[0].encoding, TextEncoding::Latin1);
    assert_eq!(report.processed[1].encoding, TextEncoding::Utf8);
    assert_eq!(fs::read_to_string(&output).unwrap(), "Caféok");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped_and_run_succeeds() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("b.txt"), "valid").unwrap();
    std::os::unix::fs::symlink(input.path().join("deleted"), input.path().join("a.txt")).unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, false, false));
    let report = compiler.compile().unwrap();

    assert_eq!(report.files_processed(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(fs::read_to_string(&output).unwrap(), "valid");

    let summary = compiler.run();
    assert!(summary.success);
    assert_eq!(summary.files_processed, 1);
}

#[test]
fn test_output_parent_directories_are_created() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "A").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("build").join("nested").join("all.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, true, false));
    compiler.compile().unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "A");
}

#[test]
fn test_existing_output_is_truncated() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "fresh").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");
    fs::write(&output, "stale content that is longer").unwrap();

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, true, false));
    compiler.compile().unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), "fresh");
}

#[test]
fn test_output_inside_input_dir_is_not_reread() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "A").unwrap();
    fs::write(input.path().join("b.txt"), "B").unwrap();
    let output = input.path().join("compiled.txt");

    let config = config_for(input.path(), &output, false, false);
    let mut compiler = Compiler::new(LocalStorage::new(), config);
    compiler.compile().unwrap();

    // 第二次執行時 compiled.txt 已存在於輸入目錄
    let summary = compiler.run();
    assert!(summary.success);
    assert_eq!(summary.files_processed, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "AB");
}

#[test]
fn test_hidden_files_are_skipped_by_default() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join(".draft.txt"), "hidden").unwrap();
    fs::write(input.path().join("visible.txt"), "shown").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, false, false));
    compiler.compile().unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "shown");

    let mut config = config_for(input.path(), &output, false, false);
    config.include_hidden = true;
    let mut compiler = Compiler::new(LocalStorage::new(), config);
    compiler.compile().unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "hiddenshown");
}

#[test]
fn test_output_path_is_a_directory_fails() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("a.txt"), "A").unwrap();
    let out_dir = TempDir::new().unwrap();

    let mut compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), out_dir.path(), true, false));
    let err = compiler.compile().unwrap_err();

    assert!(matches!(err, CompileError::OutputWrite { .. }));
    assert!(!compiler.run().success);
}

#[test]
fn test_plan_lists_files_without_writing() {
    let input = TempDir::new().unwrap();
    fs::write(input.path().join("b.txt"), "B").unwrap();
    fs::write(input.path().join("a.txt"), "A").unwrap();
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("out.txt");

    let compiler = Compiler::new(LocalStorage::new(), config_for(input.path(), &output, true, false));
    let files = compiler.plan().unwrap();

    assert_eq!(files, vec![input.path().join("a.txt"), input.path().join("b.txt")]);
    assert!(!output.exists());
}
