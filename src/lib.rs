pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod suggest;
// cmd is a binary module (declared in main.rs).
