//! HTTP handler modules.

pub mod products;
