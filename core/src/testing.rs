pub mod compare;
pub mod report;
pub mod runner;

pub use compare::*;
pub use report::*;
pub use runner::*;
