//! Indented directory tree rendering

use crate::config::TreeConfig;
use crate::error::SnapshotError;
use crate::walk::path::canonicalize_root;
use crate::walk::{DirVisit, Walker, WalkerConfig};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Spaces per indentation level
pub const INDENT_WIDTH: usize = 4;

/// Annotation appended to the root directory line
pub const ROOT_ANNOTATION: &str = "(scan root)";

/// Counts gathered while rendering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Directories rendered, including the root
    pub directories: usize,
    /// Files rendered
    pub files: usize,
}

/// Renders the directory tree under a root
pub struct TreePrinter {
    root: PathBuf,
    walker_config: WalkerConfig,
}

impl TreePrinter {
    /// Create a printer for `root`, canonicalizing it first
    pub fn new(root: &Path, config: &TreeConfig) -> Result<Self, SnapshotError> {
        let root = canonicalize_root(root)?;
        if !root.is_dir() {
            return Err(SnapshotError::InvalidPath(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        Ok(Self {
            root,
            walker_config: WalkerConfig {
                follow_symlinks: config.follow_symlinks,
                excluded_dirs: config.exclusions(),
            },
        })
    }

    /// Canonical scan root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write the header and the tree to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<TreeStats, SnapshotError> {
        writeln!(out, "Directory tree of: {}\n", self.root.display())
            .map_err(SnapshotError::Output)?;

        let mut stats = TreeStats::default();
        let walker = Walker::with_config(self.root.clone(), self.walker_config.clone());
        for visit in walker {
            let visit = visit?;
            write_visit(out, &visit).map_err(SnapshotError::Output)?;
            stats.directories += 1;
            stats.files += visit.files.len();
        }

        debug!(
            directories = stats.directories,
            files = stats.files,
            "Rendered directory tree"
        );
        Ok(stats)
    }

    /// Render the tree into a string
    pub fn render(&self) -> Result<String, SnapshotError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

fn write_visit<W: Write>(out: &mut W, visit: &DirVisit) -> std::io::Result<()> {
    let indent = " ".repeat(visit.depth * INDENT_WIDTH);
    let separator = if visit.name.ends_with('/') { "" } else { "/" };

    if visit.is_root() {
        writeln!(out, "{}{} {}", visit.name, separator, ROOT_ANNOTATION)?;
    } else {
        writeln!(out, "{}{}{}", indent, visit.name, separator)?;
    }

    let file_indent = " ".repeat((visit.depth + 1) * INDENT_WIDTH);
    for file in visit.file_names() {
        writeln!(out, "{}{}", file_indent, file)?;
    }

    if !visit.files.is_empty() && !visit.subdirs.is_empty() {
        writeln!(out)?;
    }

    Ok(())
}

/// Render the tree of `root` into `config.output_file` inside the root.
///
/// The output file is created before the walk starts, so it lists itself.
/// Returns the output path and the render statistics.
pub fn write_tree_file(
    root: &Path,
    config: &TreeConfig,
) -> Result<(PathBuf, TreeStats), SnapshotError> {
    let printer = TreePrinter::new(root, config)?;
    let output_path = printer.root().join(&config.output_file);

    info!(
        root = %printer.root().display(),
        output = %output_path.display(),
        "Writing directory tree"
    );

    let file = File::create(&output_path).map_err(|e| SnapshotError::io(&output_path, e))?;
    let mut writer = BufWriter::new(file);
    let stats = printer.write_to(&mut writer)?;
    writer
        .flush()
        .map_err(|e| SnapshotError::io(&output_path, e))?;

    Ok((output_path, stats))
}
