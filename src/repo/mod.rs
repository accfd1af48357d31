//! Data access layer. Every function runs a single statement against the
//! pool and reports absence as `Option`/`bool` rather than an error; the
//! handlers decide what absence means for the HTTP contract.

pub mod analytics;
pub mod products;
pub mod suppliers;
