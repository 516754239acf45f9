//! Integration test support with a mock HTTP server

pub mod mock_server;
