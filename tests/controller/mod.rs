//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with extracted arguments, verifying status codes, alert headers,
//! response bodies and the stored state after each request.

mod category;
mod product;
mod user;

use candy_shop_test_utils::prelude::*;

use crate::util::{body_bytes, body_json, TestSetupExt};
