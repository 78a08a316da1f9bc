/// Filesystem adapters for file I/O operations
mod bom_locator;
mod bom_repository;
mod file_reader;
mod file_writer;

pub use bom_locator::{BomLocator, BOM_FILENAME};
pub use bom_repository::FileSystemBomRepository;
pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
