//! Property-based tests: exclusion, ordering and idempotence on random trees

use codesnap::concat::{Concatenator, SilentObserver};
use codesnap::config::{ConcatConfig, TreeConfig};
use codesnap::tree::TreePrinter;
use proptest::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DIR_NAMES: &[&str] = &["a", "b", "src", "node_modules", "dist", ".git"];
const EXCLUDED: &[&str] = &["node_modules", "dist", ".git"];

/// One file placed under a chain of directories
#[derive(Debug, Clone)]
struct Placement {
    dirs: Vec<&'static str>,
}

impl Placement {
    fn hidden(&self) -> bool {
        self.dirs.iter().any(|d| EXCLUDED.contains(d))
    }

    fn file_name(&self, index: usize) -> String {
        if self.hidden() {
            format!("hidden_{}.txt", index)
        } else {
            format!("shown_{}.txt", index)
        }
    }
}

fn placements() -> impl Strategy<Value = Vec<Placement>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(DIR_NAMES.to_vec()), 0..4)
            .prop_map(|dirs| Placement { dirs }),
        1..10,
    )
}

fn build(root: &Path, placements: &[Placement]) {
    for (index, placement) in placements.iter().enumerate() {
        let mut dir = root.to_path_buf();
        for name in &placement.dirs {
            dir.push(name);
        }
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(placement.file_name(index)), format!("content {}", index)).unwrap();
    }
}

/// Expected pre-order of visible files: files of a directory, then its subdirectories
fn expected_order(placements: &[Placement]) -> Vec<String> {
    let mut files: BTreeMap<Vec<String>, BTreeSet<String>> = BTreeMap::new();
    let mut children: BTreeMap<Vec<String>, BTreeSet<String>> = BTreeMap::new();

    for (index, placement) in placements.iter().enumerate() {
        if placement.hidden() {
            continue;
        }
        let chain: Vec<String> = placement.dirs.iter().map(|d| d.to_string()).collect();
        for depth in 0..chain.len() {
            children
                .entry(chain[..depth].to_vec())
                .or_default()
                .insert(chain[depth].clone());
        }
        files.entry(chain).or_default().insert(placement.file_name(index));
    }

    fn visit(
        dir: Vec<String>,
        files: &BTreeMap<Vec<String>, BTreeSet<String>>,
        children: &BTreeMap<Vec<String>, BTreeSet<String>>,
        out: &mut Vec<String>,
    ) {
        if let Some(names) = files.get(&dir) {
            for name in names {
                let mut parts = vec!["src".to_string()];
                parts.extend(dir.iter().cloned());
                parts.push(name.clone());
                out.push(parts.join("/"));
            }
        }
        if let Some(subdirs) = children.get(&dir) {
            for sub in subdirs {
                let mut next = dir.clone();
                next.push(sub.clone());
                visit(next, files, children, out);
            }
        }
    }

    let mut out = Vec::new();
    visit(Vec::new(), &files, &children, &mut out);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tree_never_renders_excluded_and_is_idempotent(placements in placements()) {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("root");
        fs::create_dir(&root).unwrap();
        build(&root, &placements);

        let printer = TreePrinter::new(&root, &TreeConfig::default()).unwrap();
        let first = printer.render().unwrap();
        let second = printer.render().unwrap();
        prop_assert_eq!(&first, &second);

        for line in first.lines().skip(2) {
            let name = line.trim_start().trim_end_matches('/');
            prop_assert!(!EXCLUDED.contains(&name), "excluded directory rendered: {}", line);
            prop_assert!(
                !name.starts_with("hidden_"),
                "file under excluded directory rendered: {}",
                line
            );
        }

        for (index, placement) in placements.iter().enumerate() {
            if placement.hidden() {
                continue;
            }
            let expected = format!(
                "{}{}",
                " ".repeat((placement.dirs.len() + 1) * 4),
                placement.file_name(index)
            );
            prop_assert!(first.lines().any(|l| l == expected), "missing line {:?}", expected);
        }
    }

    #[test]
    fn concat_order_is_sorted_preorder(placements in placements()) {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir(&src).unwrap();
        build(&src, &placements);

        let config = ConcatConfig {
            root_files: Vec::new(),
            include_dirs: vec!["src".to_string()],
            ..ConcatConfig::default()
        };
        let concatenator = Concatenator::new(temp_dir.path(), &config).unwrap();

        let mut first = Vec::new();
        let report = concatenator.write_to(&mut first, &mut SilentObserver).unwrap();
        let mut second = Vec::new();
        concatenator.write_to(&mut second, &mut SilentObserver).unwrap();
        prop_assert_eq!(&first, &second);

        let order: Vec<String> = report.files.iter().map(|f| f.relative_path.clone()).collect();
        prop_assert_eq!(order, expected_order(&placements));

        let text = String::from_utf8(first).unwrap();
        prop_assert!(!text.contains("hidden_"));
    }
}
