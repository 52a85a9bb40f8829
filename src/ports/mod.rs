//! Port traits separating domain logic from I/O.

pub mod api_port;
pub mod config_port;
pub mod session_port;
