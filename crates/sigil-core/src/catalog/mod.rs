pub mod load;
pub mod model;

pub use load::{load_catalog, parse_catalog};
pub use model::{Signature, SignatureCatalog};
