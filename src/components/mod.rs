//! UI Components
//!
//! Leptos components mounted into server-rendered slots.

mod barcode_stripes;

pub use barcode_stripes::BarcodeStripes;
