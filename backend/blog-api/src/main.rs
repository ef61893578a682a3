use actix_web::{middleware::Logger, App, HttpServer};
use anyhow::Context;
use blog_store::Store;
use tracing::info;

use blog_api::config::Config;
use blog_api::{build_schema, logging, routes, shared};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    logging::init(config.log_format);

    info!("Starting Blog API...");

    let store = if config.store.seed {
        Store::seeded()
    } else {
        Store::new()
    };
    info!(
        seeded = config.store.seed,
        users = store.users().len(),
        posts = store.posts().len(),
        comments = store.comments().len(),
        "Store initialized"
    );

    let schema = build_schema(shared(store), &config.graphql);
    info!(
        max_depth = config.graphql.max_depth,
        max_complexity = config.graphql.max_complexity,
        introspection = config.graphql.introspection,
        playground = config.graphql.playground,
        "GraphQL schema built"
    );

    let bind_addr = config.server.bind_addr();
    info!("Blog API starting on http://{}/graphql", bind_addr);

    let routes = routes::configure(schema, config.graphql.playground);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes.clone())
    })
    .workers(config.server.workers)
    .bind(&bind_addr)
    .with_context(|| format!("Failed to bind {}", bind_addr))?
    .run()
    .await
    .context("HTTP server error")
}
