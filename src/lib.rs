//! bomlint - keep package.json dependency versions in line with a shared BOM
//!
//! A Bill of Materials (`.bomlint.json`) maps dependency names to the single
//! approved version string. bomlint checks package files against it, rewrites
//! them (`fix`), grows the BOM from what the packages use (`merge`), drops
//! entries only one package needs (`prune`) and reports dependencies declared
//! at conflicting versions across packages.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_reconciliation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bomlint::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = CheckManifestsUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemWriter::new(),
//!     FileSystemBomRepository::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = CheckRequest::new(
//!     vec![PathBuf::from("package.json")],
//!     PathBuf::from(".bomlint.json"),
//!     ConflictAllowList::new(),
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new().format_check(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_reconciliation;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        BomLocator, FileSystemBomRepository, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, TextFormatter};
    pub use crate::application::dto::{
        BomRequest, CheckRequest, CheckResponse, MergeResponse, OutputFormat, PruneResponse,
    };
    pub use crate::application::use_cases::{
        CheckManifestsUseCase, MergeIntoBomUseCase, PruneBomUseCase,
    };
    pub use crate::bom_reconciliation::domain::{
        Bom, BomUpdate, Conflict, DependencyConflict, DependencyKind, LocatedManifest, Manifest,
    };
    pub use crate::bom_reconciliation::policies::ConflictAllowList;
    pub use crate::bom_reconciliation::services::{
        BomChecker, BomMerger, BomPruner, ConflictDetector,
    };
    pub use crate::ports::outbound::{
        BomRepository, ManifestReader, ManifestWriter, OutputPresenter, ProgressReporter,
        ReportFormatter,
    };
    pub use crate::shared::Result;
}
