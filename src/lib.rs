pub mod cli;
pub mod frontend;
pub mod runtime;
// Re-export the container crate for downstream users of the runner.
pub use dyn_array;
