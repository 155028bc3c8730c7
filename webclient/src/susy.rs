pub mod urls;

mod client;

pub use client::{ClientOptions, SusyClient};
