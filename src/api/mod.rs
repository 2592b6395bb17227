//! HTTP API over the coordinate engine

pub mod handlers;
pub mod models;
pub mod routes;

pub use routes::create_router;

#[cfg(test)]
mod tests;
