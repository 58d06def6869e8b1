//! Integration tests for the project concatenator

use super::test_utils::Sandbox;
use codesnap::concat::{write_concat_file, Concatenator, FileStatus, SilentObserver, Skipped};
use codesnap::config::ConcatConfig;

fn config(root_files: &[&str], include_dirs: &[&str]) -> ConcatConfig {
    ConcatConfig {
        root_files: root_files.iter().map(|s| s.to_string()).collect(),
        include_dirs: include_dirs.iter().map(|s| s.to_string()).collect(),
        ..ConcatConfig::default()
    }
}

#[test]
fn test_missing_root_file_example() {
    let sandbox = Sandbox::new();
    sandbox.write("package.json", "{\"name\": \"demo\"}\n");

    let cfg = config(&["package.json", "missing.json"], &[]);
    let (path, report) = write_concat_file(&sandbox.project, &cfg, &mut SilentObserver).unwrap();
    let output = std::fs::read_to_string(path).unwrap();

    assert_eq!(
        output,
        "--- START OF FILE: ./package.json ---\n\
         {\"name\": \"demo\"}\n\
         \n\
         --- END OF FILE: ./package.json ---\n\
         \n"
    );
    assert!(!output.contains("missing.json"));
    assert_eq!(
        report.warnings().collect::<Vec<_>>(),
        vec![&Skipped::MissingRootFile("missing.json".to_string())]
    );
}

#[test]
fn test_root_files_then_directories() {
    let sandbox = Sandbox::new();
    sandbox.write("README.md", "# Demo\n");
    sandbox.write("src/App.tsx", "export default App;\n");
    sandbox.write(".github/workflows/ci.yml", "on: push\n");

    let cfg = config(&["README.md"], &["src", ".github"]);
    let mut out = Vec::new();
    let report = Concatenator::new(&sandbox.project, &cfg)
        .unwrap()
        .write_to(&mut out, &mut SilentObserver)
        .unwrap();

    let order: Vec<_> = report
        .files
        .iter()
        .map(|f| f.relative_path.as_str())
        .collect();
    assert_eq!(order, vec!["README.md", "src/App.tsx", ".github/workflows/ci.yml"]);
    assert!(report
        .files
        .iter()
        .all(|f| matches!(f.status, FileStatus::Written { .. })));
}

#[test]
fn test_no_excluded_path_reaches_output() {
    let sandbox = Sandbox::new();
    sandbox.write("src/ok.ts", "visible");
    sandbox.write("src/node_modules/lib/index.js", "HIDDEN-1");
    sandbox.write("src/chekpoints/v1.ts", "HIDDEN-2");
    sandbox.write("src/deep/.git/config", "HIDDEN-3");
    sandbox.write("src/deep/.env.local", "HIDDEN-4");
    sandbox.write("src/deep/keep.ts", "visible too");

    let cfg = config(&[], &["src"]);
    let (path, report) = write_concat_file(&sandbox.project, &cfg, &mut SilentObserver).unwrap();
    let output = std::fs::read_to_string(path).unwrap();

    let hidden = [
        "HIDDEN-1",
        "HIDDEN-2",
        "HIDDEN-3",
        "HIDDEN-4",
        "node_modules",
        "chekpoints",
    ];
    for marker in hidden {
        assert!(!output.contains(marker), "{} leaked into the output", marker);
    }
    assert_eq!(report.written_count(), 2);
    assert!(output.contains("./src/deep/keep.ts"));
}

#[cfg(unix)]
#[test]
fn test_partial_failure_tolerance() {
    let sandbox = Sandbox::new();
    sandbox.write("src/a.ts", "alpha");
    sandbox.write("src/c.ts", "gamma");
    std::os::unix::fs::symlink(
        sandbox.project.join("src/missing"),
        sandbox.project.join("src/b.ts"),
    )
    .unwrap();

    let cfg = config(&[], &["src"]);
    let (path, report) = write_concat_file(&sandbox.project, &cfg, &mut SilentObserver).unwrap();
    let output = std::fs::read_to_string(path).unwrap();

    assert!(output.contains("--- START OF FILE: ./src/a.ts ---\nalpha\n--- END OF FILE: ./src/a.ts ---\n"));
    assert!(output.contains("--- START OF FILE: ./src/c.ts ---\ngamma\n--- END OF FILE: ./src/c.ts ---\n"));
    let b_start = output.find("--- START OF FILE: ./src/b.ts ---\n").unwrap();
    let b_block = &output[b_start..];
    assert!(b_block.contains("[Error reading file: "));
    assert_eq!(report.failed_count(), 1);
    assert_eq!(report.written_count(), 2);
}

#[test]
fn test_concat_output_is_byte_identical_across_runs() {
    let sandbox = Sandbox::new();
    sandbox.write("LICENSE", "MIT\n");
    sandbox.write("src/z/last.ts", "z");
    sandbox.write("src/a/first.ts", "a");
    sandbox.write("src/mid.ts", "");

    let cfg = ConcatConfig::default();
    let (path, _) = write_concat_file(&sandbox.project, &cfg, &mut SilentObserver).unwrap();
    let first = std::fs::read(&path).unwrap();
    let (_, report) = write_concat_file(&sandbox.project, &cfg, &mut SilentObserver).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
    let order: Vec<_> = report
        .files
        .iter()
        .map(|f| f.relative_path.as_str())
        .collect();
    assert_eq!(order, vec!["LICENSE", "src/mid.ts", "src/a/first.ts", "src/z/last.ts"]);
    assert_eq!(report.empty_count(), 1);
}
