//! # ccc-core
//!
//! Core types and pure logic for Campus Club Connect.
//!
//! This crate provides everything that does not touch storage or a terminal:
//! - Club and event entities plus the built-in sample catalog
//! - Category, mode, and filter-selector enums
//! - The membership set and its `toggle` operation
//! - Filter state and the render-trigger contract
//! - Club/event queries and directory statistics
//! - Display formatters and view types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod format;
pub mod membership;
pub mod query;
pub mod render;
pub mod views;
