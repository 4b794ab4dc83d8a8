mod kubernetes;
mod sentry;
mod server;

pub use kubernetes::*;
pub use sentry::*;
pub use server::*;
