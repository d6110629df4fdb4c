pub mod config;
pub mod logging;

// Extraction pipeline: catalogue -> archive path -> DRS path -> retrieval.
pub mod catalogue;
pub mod drs;
pub mod error;
pub mod extract;
pub mod retrieval;
