//! Concrete adapter implementations for ports.

pub mod csv_export;
pub mod file_config_adapter;
pub mod http_adapter;
pub mod session_file_adapter;
