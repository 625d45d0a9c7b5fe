// LogDigest - core/mod.rs
//
// Core business logic layer.
// Accepts Read/Write trait objects; never opens files itself.

pub mod analysis;
pub mod json_fields;
pub mod model;
pub mod parser;
pub mod report;
