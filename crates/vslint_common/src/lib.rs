//! Shared foundational types for the vslint signal checker.
//!
//! This crate provides interned identifiers used for signal, port, and module
//! names throughout the pipeline.

#![warn(missing_docs)]

pub mod ident;

pub use ident::{Ident, Interner};
