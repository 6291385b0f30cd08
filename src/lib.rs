pub mod client;
pub mod config;
pub mod down;
pub mod error;
pub mod gunzip;
pub mod organism;
pub mod task;
pub mod utils;

#[cfg(test)]
mod testing;

pub use config::ReleaseConfig;
pub use down::{Fetch, HttpFetcher};
pub use error::GtfError;
pub use gunzip::{Decompress, GzipInflater};
pub use organism::OrganismEntry;
pub use task::{run_organism, GtfTask, Outcome};
