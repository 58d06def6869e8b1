//! Directory tree printer
//!
//! Renders the directory structure under a root as indented text: one line
//! per directory (`depth * 4` spaces, trailing `/`) followed by its files one
//! level deeper. Excluded directories are pruned before the walk reaches them.

pub mod printer;

pub use printer::{write_tree_file, TreePrinter, TreeStats};
