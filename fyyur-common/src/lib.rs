//! # Fyyur Common Library
//!
//! Shared code for the Fyyur booking directory:
//! - Domain models and the SQLite entity store
//! - Show classification, upcoming counts and venue grouping
//! - Genre vocabulary
//! - Configuration loading
//! - Timestamp utilities

pub mod booking;
pub mod config;
pub mod db;
pub mod error;
pub mod genre;
pub mod time;

pub use error::{Error, Result};
pub use genre::Genre;
