//! Tool implementations grouped by concern

pub mod file_ops;
