pub mod cli;
pub mod config;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::AppState;

/// Create app router for testing
///
/// Builds the router with every route and layer configured, without binding
/// a listener.
pub fn create_app(state: AppState) -> axum::Router {
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};

    routes::router(state)
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
