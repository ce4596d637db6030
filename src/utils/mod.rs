pub mod error;
pub mod fspath;
pub mod invocation;
pub mod logging;
