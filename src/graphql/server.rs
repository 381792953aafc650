//! Axum router exposing the schema and the GraphiQL explorer.

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    response::Html,
    routing::get,
};
use tower_http::trace::TraceLayer;

use super::schema::BlogSchema;
use crate::config::ServerSettings;
use crate::error::{BlogError, Result};

/// Build the router: the GraphQL endpoint (GET and POST) and the explorer.
pub fn build_app(schema: BlogSchema, settings: &ServerSettings) -> Router {
    let explorer = GraphiQLSource::build()
        .endpoint(&settings.graphql_path)
        .finish();

    let mut app = Router::new().route(
        &settings.graphql_path,
        get(graphql_handler).post(graphql_handler),
    );
    for path in explorer_routes(&settings.graphiql_path) {
        let page = explorer.clone();
        app = app.route(&path, get(move || async move { Html(page) }));
    }

    app.layer(TraceLayer::new_for_http()).with_state(schema)
}

/// The explorer answers with and without a trailing slash.
fn explorer_routes(path: &str) -> Vec<String> {
    let base = path.trim_end_matches('/');
    if base.is_empty() {
        vec!["/".to_string()]
    } else {
        vec![base.to_string(), format!("{}/", base)]
    }
}

async fn graphql_handler(State(schema): State<BlogSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn run_server(schema: BlogSchema, settings: &ServerSettings) -> Result<()> {
    let app = build_app(schema, settings);

    let listener = tokio::net::TcpListener::bind(settings.bind_target())
        .await
        .map_err(|e| {
            BlogError::Server(format!(
                "Failed to bind {} port {}: {}",
                settings.host, settings.port, e
            ))
        })?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, graphql = %settings.graphql_path, graphiql = %settings.graphiql_path, "Serving GraphQL");

    axum::serve(listener, app).await?;
    Ok(())
}
