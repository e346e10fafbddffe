use std::net::SocketAddr;

use flatfile_api::models::MoviesDb;
use flatfile_api::store::JsonStore;
use flatfile_api::{AppState, movies_app};

const DATA_FILE: &str = "data/movies.json";

#[tokio::main]
async fn main() {
    let store: JsonStore<MoviesDb> = JsonStore::new(DATA_FILE);
    let app = movies_app(AppState::new(store));

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();

    println!("  Movies server running at http://{}", addr);
    println!("  Data file: {}", DATA_FILE);

    let listener = tokio::net::TcpListener::bind(addr).await.expect("bind failed");

    axum::serve(listener, app).await.expect("server error");
}
