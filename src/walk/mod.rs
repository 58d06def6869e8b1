//! Filesystem traversal shared by the tree printer and the concatenator.
//!
//! A pre-order walk that prunes excluded directories before descending into
//! them and yields one [`DirVisit`] per directory with sorted children.

pub mod exclusion;
pub mod path;
pub mod walker;

pub use exclusion::ExclusionSet;
pub use walker::{DirVisit, WalkedFile, Walker, WalkerConfig};
