//! Unit tests for input handling
//!
//! This module contains tests for the error value and its supporting components.

pub mod error_tests;
