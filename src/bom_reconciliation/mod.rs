/// BOM reconciliation - the pure engine
///
/// Domain types, policies and side-effect-free services that index manifests,
/// detect conflicts and compute patched manifests and BOMs.
pub mod domain;
pub mod policies;
pub mod services;
