//! Persistence - Saved route reports on the local filesystem

mod route_file_store;

pub use route_file_store::RouteFileStore;
