//! Index-based directory browsing: a current directory, its direct children,
//! and navigation into a child or up to the parent.

pub mod browser;
pub mod config;
pub mod display;
pub mod error;
pub mod scanner;
pub mod types;
