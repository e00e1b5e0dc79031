// backend/tests/helpers.rs
#![allow(dead_code)]

use axum::Router;
use backend::{config::AppConfig, web_server::AppState};
use std::fs;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::net::TcpListener;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"app\"></div></body></html>";
pub const APP_CSS: &str = "body { margin: 0; }";
pub const SECRET: &str = "root:x:0:0:root:/root:/bin/bash";

/// A scratch front-end build: `<tmp>/public/...` plus a file next to
/// `public/` that must never be served.
pub struct PublicDir {
    _dir: TempDir,
    pub root: PathBuf,
}

pub fn public_dir() -> PublicDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let root = dir.path().join("public");

    fs::create_dir_all(root.join("assets")).unwrap();
    fs::write(root.join("index.html"), INDEX_HTML).unwrap();
    fs::write(root.join("assets/app.css"), APP_CSS).unwrap();
    fs::write(root.join("logo.png"), [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]).unwrap();
    fs::write(dir.path().join("secret.txt"), SECRET).unwrap();

    PublicDir { _dir: dir, root }
}

pub fn test_config(public: &PublicDir) -> AppConfig {
    let mut config = AppConfig::default();
    config.web.port = 0;
    config.static_files.public_dir = public.root.clone();
    config
}

pub fn test_router(config: AppConfig) -> Router {
    backend::web_server::create_router(AppState { app_config: config })
}

/// Spawn a test server and return the address and a reqwest client.
pub async fn spawn_app(config: AppConfig) -> (SocketAddr, reqwest::Client) {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .unwrap();
    let addr = listener.local_addr().unwrap();

    let app = test_router(config);

    tokio::spawn(async move {
        axum::serve(listener, app.into_make_service())
            .await
            .unwrap();
    });

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    (addr, client)
}
