pub mod individual;
pub use individual::{Individual, Parents};

pub mod record;
pub use record::IndividualRecord;

mod pedigree;
pub use pedigree::{Pedigree, StructureError};
