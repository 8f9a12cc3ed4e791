//! sigmine - common-string miner for APK batches
//!
//! Extracts strings from every file inside a batch of APKs using the
//! `dexstrings` and `strings` tools, intersects the per-APK sets, and
//! subtracts a whitelist built from benign apps. What survives is a
//! candidate signature: strings the whole batch shares that popular
//! apps do not.

pub mod archive;
pub mod batch;
pub mod config;
pub mod extract;
pub mod filter;
pub mod provenance;
pub mod report;
