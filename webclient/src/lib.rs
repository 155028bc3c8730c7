// exported modules
pub mod error;
pub mod model;

// client impls
pub mod susy;

// re-exports
pub use error::*;
pub use model::*;
pub use susy::{ClientOptions, SusyClient};

// internal modules
mod util;
