//! 应用中间件

pub mod logging;

pub use logging::logging_middleware;
