//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the menu/controller layer decoupled from storage details.

pub mod student_service;
