//! # pixedit-common
//!
//! Shared types, error definitions, color math, configuration models and
//! constants used across the entire pixedit workspace.
//!
//! This crate is the leaf of the dependency graph: it depends on no other
//! internal crate and provides the primitives the decoder, the canvas, the
//! tools and the terminal front end all build upon.

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod types;
