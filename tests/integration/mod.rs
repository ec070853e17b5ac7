//! Integration tests for msr-backend
//!
//! These tests drive the real application factory and configuration
//! loaders without mocking.

pub mod api_tests;
