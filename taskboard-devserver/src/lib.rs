//! `Taskboard` development server library.
//!
//! Exposes the in-memory task service for use in tests and embedding.
//! The server speaks the same JSON routes as the production task service
//! and keeps everything in process memory.

pub mod config;
pub mod server;
pub mod store;
