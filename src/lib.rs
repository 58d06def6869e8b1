//! Codesnap: deterministic text snapshots of a codebase
//!
//! Two one-shot tools built on a shared pruning walker: a directory tree
//! printer and a project concatenator that wraps every included file in
//! delimiter lines. Both produce byte-identical output for an unchanged tree.

pub mod cli;
pub mod concat;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod walk;
