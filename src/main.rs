use axum::{Extension, Json, Router, routing::get};
use serde::Serialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use school_api::storage::json_store::JsonStore;
use school_api::students::handlers::{
    handle_create_student, handle_delete_student, handle_list_students, handle_patch_student,
    handle_replace_student, handle_students_by_grade,
};
use school_api::students::types::Student;

#[derive(Serialize)]
struct HealthResponse {
    message: String,
}

async fn handle_home() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Привет, Мир!".to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8000".parse()?;
    let mut data_path = PathBuf::from("data/students.json");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data" => {
                data_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--data <students.json>]",
                    args[0]
                );
                return Ok(());
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Student data file: {}", data_path.display());

    // 1. Storage layer:
    let store = Arc::new(JsonStore::<Student>::new(data_path));

    // 2. HTTP router:
    let app = Router::new()
        .route("/", get(handle_home))
        .route(
            "/students",
            get(handle_list_students).post(handle_create_student),
        )
        .route(
            "/students/:student_id",
            get(handle_students_by_grade)
                .put(handle_replace_student)
                .patch(handle_patch_student)
                .delete(handle_delete_student),
        )
        .layer(Extension(store));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
