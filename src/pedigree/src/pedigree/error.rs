use thiserror::Error;

/// Structural validation failure raised while constructing a `Pedigree`.
/// All variants are fatal: inference cannot proceed on a malformed pedigree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructureError {
    #[error("duplicate individual '{name}' within pedigree records")]
    DuplicateIndividual { name: String },

    #[error("individual '{name}' references unknown parent '{parent}'")]
    UnknownParent { name: String, parent: String },

    #[error("individual '{name}' carries a half-specified parentage. Mother and father must either both be recorded, or both be absent")]
    HalfSpecifiedParents { name: String },

    #[error("individual '{name}' is their own ancestor. The parent graph must be acyclic")]
    ParentCycle { name: String },
}
