/// Use cases module containing application business logic orchestration
mod check_manifests;
mod manifest_loader;
mod merge_into_bom;
mod prune_bom;

#[cfg(test)]
mod test_support;

pub use check_manifests::CheckManifestsUseCase;
pub use merge_into_bom::MergeIntoBomUseCase;
pub use prune_bom::PruneBomUseCase;
