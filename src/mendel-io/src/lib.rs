pub mod read;
pub use read::{read_pedigree, ReadError};

pub mod write;
pub use write::{can_write_file, GenericWriter, WriterError};
