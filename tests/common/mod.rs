//! Common test utilities module
//!
//! Provides shared utilities for tests including:
//! - Temporary file and directory management
//! - Roster CSV generation

#![allow(dead_code)]

pub mod test_utils;

pub use test_utils::{
    create_roster_csv, create_test_csv, test_temp_path, TempTestDir, TempTestFile,
};
