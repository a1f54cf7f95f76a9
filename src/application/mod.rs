//! Application layer - use-case handlers orchestrating the domain and ports.

pub mod handlers;
