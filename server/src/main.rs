#[macro_use]
extern crate rocket;

mod entrypoints;

use std::path::PathBuf;
use std::sync::Arc;

use rocket::response::content::RawText;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};
use trophy_board_server::{
    github::GithubClient, messages::MessageLoader, metrics::MetricsClient, store::SessionStore,
};

#[derive(Debug, serde::Deserialize)]
pub struct Env {
    github_token: Option<String>,
    session_file: Option<PathBuf>,
    message_file: Option<PathBuf>,
}

#[get("/metrics")]
async fn metrics(
    state: &rocket::State<Arc<MetricsClient>>,
) -> Option<(rocket::http::ContentType, RawText<String>)> {
    let body = state.encode().ok()?;
    Some((
        rocket::http::ContentType::new(
            "application/openmetrics-text",
            "version=1.0.0; charset=utf-8",
        ),
        RawText(body),
    ))
}

#[launch]
async fn rocket() -> _ {
    dotenv::dotenv().ok();

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer());
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let env = envy::from_env::<Env>().expect("Failed to load environment variables");

    let metrics_client: Arc<MetricsClient> = Default::default();
    let github = GithubClient::new(env.github_token, metrics_client.clone())
        .expect("Failed to build GitHub client");
    let store = SessionStore::load(
        env.session_file
            .unwrap_or_else(|| PathBuf::from("session.json")),
    );
    let messages = MessageLoader::load_from_file(
        &env.message_file
            .unwrap_or_else(|| PathBuf::from("server/Messages.toml")),
    )
    .expect("Failed to load messages");

    let cors = rocket_cors::CorsOptions::default()
        .to_cors()
        .expect("Failed to build CORS fairing");

    rocket::build()
        .manage(Arc::new(github))
        .manage(Arc::new(store))
        .manage(Arc::new(messages))
        .manage(metrics_client)
        .attach(cors)
        .attach(entrypoints::stage())
        .mount("/", routes![metrics])
}
