// LogDigest - lib.rs
//
// Library entry point, exposing the core and util modules to the two
// binaries and to the integration tests.

pub mod core;
pub mod util;
