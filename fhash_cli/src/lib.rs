//! fhash command line interface library
//!
//! Path-list ingestion and result formatting for the `fhash` binary. The
//! scanning and hashing itself lives in `fhash_core`.

pub mod input;
pub mod output;
