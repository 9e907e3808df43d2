//! Core library for German receipt scanning.
//!
//! This crate provides:
//! - Text normalization for raw OCR output
//! - Quantity-block removal ("3 Stk ... x 1,99" annotations)
//! - Item and grand-total extraction with German number formats
//! - A calculated-sum reconciliation value for cross-checking

pub mod error;
pub mod models;
pub mod receipt;

pub use error::{Result, ScanError};
pub use models::receipt::{Item, ScanResult};
pub use receipt::{ReceiptParser, ReceiptScanner, scan_receipt};
