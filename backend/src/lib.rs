// --- File: backend/src/lib.rs ---

// This file acts as the entry point for the `backend` library.
// The router is exposed here so integration tests can drive it
// without going through the binary.
pub mod auth;
pub mod config;
pub mod error;
pub mod mock_data;
pub mod static_files;
pub mod user;
pub mod web_server;
