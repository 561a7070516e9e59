//! Server application core modules.
//!
//! This module contains all server-side functionality for the candy shop backend: HTTP routing,
//! the REST controllers for every record type, the service layer that maps requests onto
//! persistence, the SeaORM repositories, configuration and startup.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
