use crate::application::dto::{CheckResponse, MergeResponse, PruneResponse};
use crate::shared::Result;

/// ReportFormatter port for rendering use case results
///
/// One method per command; implementations decide the output format.
pub trait ReportFormatter {
    /// Formats the result of `check` / `fix`
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format_check(&self, response: &CheckResponse) -> Result<String>;

    /// Formats the result of `merge`
    fn format_merge(&self, response: &MergeResponse) -> Result<String>;

    /// Formats the result of `prune`
    fn format_prune(&self, response: &PruneResponse) -> Result<String>;
}
