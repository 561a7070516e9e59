//! Shared handler building blocks.

pub mod crud;
