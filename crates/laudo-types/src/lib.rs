pub mod codes;
pub mod types;

pub use codes::{MaterialType, PackagingColor, PackagingType, SubstanceFamily};
pub use types::{ItemRecord, LaudoRequest};
