//! Graph construction and representation
//!
//! This module provides efficient graph building and storage
//! for the directed link graph both estimators operate on.

pub mod builder;
pub mod csr;
pub mod loader;
