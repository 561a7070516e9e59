//! HTTP controller endpoints for the candy shop REST API.
//!
//! One module per record resource, each mounted under `/api/{resources}` with create, update,
//! list, get and delete handlers. Handlers are annotated with utoipa for the OpenAPI document
//! and delegate the shared request handling to [`util::crud`].

pub mod category;
pub mod order;
pub mod point;
pub mod product;
pub mod user;
pub mod util;
