/// Mock implementations for testing
mod mock_bom_repository;
mod mock_manifest_store;
mod mock_progress_reporter;

pub use mock_bom_repository::MockBomRepository;
pub use mock_manifest_store::MockManifestStore;
pub use mock_progress_reporter::MockProgressReporter;
