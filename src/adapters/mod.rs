//! Concrete adapters binding the application ports to drivers and logging.

pub mod hardware;
pub mod log_sink;
