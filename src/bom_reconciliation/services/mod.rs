mod bom_checker;
mod bom_merger;
mod bom_pruner;
mod conflict_detector;
mod index_builder;

pub use bom_checker::{BomChecker, CheckResult};
pub use bom_merger::{BomMerger, MergeResult};
pub use bom_pruner::{BomPruner, PruneResult};
pub use conflict_detector::ConflictDetector;
pub use index_builder::DependencyIndexBuilder;
