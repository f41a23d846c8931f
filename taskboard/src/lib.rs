//! `Taskboard` -- terminal task board backed by a remote task service.

pub mod app;
pub mod board;
pub mod config;
pub mod service;
pub mod ui;
