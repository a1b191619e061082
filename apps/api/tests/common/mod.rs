//! Common test utilities for API integration tests
//!
//! This module provides shared test infrastructure for integration tests,
//! including test fixtures and helper functions.

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
