//! Tracing setup shared by the Argo application manager binaries and tests.

pub mod tracing;

pub use self::tracing::{LogFlusher, TracingError, init_test_tracing, init_tracing};
