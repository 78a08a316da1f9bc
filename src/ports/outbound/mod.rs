/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod bom_repository;
pub mod manifest_reader;
pub mod manifest_writer;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;

pub use bom_repository::BomRepository;
pub use manifest_reader::ManifestReader;
pub use manifest_writer::ManifestWriter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
