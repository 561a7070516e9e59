//! Utility functions and helpers for server operations.
//!
//! This module provides reusable helpers shared between controllers and error responses, such as
//! the alert headers announcing the outcome of a request.

pub mod alert;
