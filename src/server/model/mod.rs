//! Server application models and type definitions.
//!
//! This module contains the application state shared by HTTP handlers, database model type
//! aliases with their conversions into wire records, and the paging types used by list reads.

pub mod app;
pub mod db;
pub mod page;
