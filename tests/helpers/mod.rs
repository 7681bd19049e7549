//! Test helpers module
//!
//! This module provides utilities and helpers for testing the admin client:
//! a wiremock-based admin API server and entity test data.

#![allow(dead_code)]

pub mod admin_api_mock;
pub mod test_data;

pub use admin_api_mock::*;
pub use test_data::*;
