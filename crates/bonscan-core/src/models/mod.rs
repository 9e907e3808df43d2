//! Data models for scanned receipts.

pub mod receipt;

pub use receipt::{Item, ScanResult};
