use actix_cors::Cors;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::prelude::*;

mod config;
mod database;
mod handlers;
mod helpers;
mod store;

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "vaad API"
    }))
}

#[get("/health")]
async fn health(db: web::Data<Arc<database::Database>>) -> impl Responder {
    // Pull a pooled connection and run a trivial query
    let conn = db.async_connection.lock().await;
    match conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)) {
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "database": "connected"
        })),
        Err(_) => HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
            "database": "disconnected"
        })),
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long)]
    log_file_path: Option<String>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(log_path) = args.log_file_path {
        let log_path = std::path::Path::new(&log_path);
        let file_appender = tracing_appender::rolling::never(
            log_path.parent().unwrap_or(std::path::Path::new(".")),
            log_path
                .file_name()
                .unwrap_or(std::ffi::OsStr::new("vaad-api.log")),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard);

        tracing_subscriber::registry()
            .with(env_filter.clone())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(true)
                    .with_writer(std::io::stdout),
            )
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(non_blocking),
            )
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    // Initialize database
    let db = helpers::database::initialize_database().expect("Failed to initialize database");

    println!(
        "Database initialized at: {:?}",
        helpers::database::get_db_path().unwrap()
    );

    // Load state into memory
    let store = Arc::new(store::Store::load(db.clone()).expect("Failed to load state"));

    // Load config
    let (config, _) = config::ApiConfig::load().expect("Failed to load config");

    // Get server config or use defaults
    let (host, port) = if let Some(server_config) = &config.server {
        (server_config.host.clone(), server_config.port)
    } else {
        ("127.0.0.1".to_string(), 8080)
    };

    tracing::info!("Server will listen on {}:{}", host, port);

    // Spawn periodic auto-backup check
    let backup_interval = config
        .backup
        .as_ref()
        .map(|b| b.check_interval_secs)
        .unwrap_or(3600);
    let store_for_backup = store.clone();
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(backup_interval));
        loop {
            interval.tick().await;
            if let Err(e) = store_for_backup.auto_backup_if_due() {
                tracing::error!("Auto-backup check failed: {}", e);
            }
        }
    });

    println!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        // Configure CORS
        let cors = if let Some(cors_config) = &config.cors {
            let mut cors_builder = Cors::default();
            for origin in &cors_config.allowed_origins {
                cors_builder = cors_builder.allowed_origin(origin);
            }
            cors_builder
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        } else {
            Cors::default()
                .allow_any_origin()
                .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
                .allowed_headers(vec!["Authorization", "Accept", "Content-Type"])
                .max_age(3600)
        };

        App::new()
            .wrap(cors)
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(store.clone()))
            .service(hello)
            .service(health)
            .route("/api/tenants", web::get().to(handlers::tenants::list_tenants))
            .route("/api/tenants", web::post().to(handlers::tenants::create_tenant))
            .route("/api/tenants/import", web::post().to(handlers::tenants::import_tenants_csv))
            .route("/api/tenants/bulk-delete", web::post().to(handlers::tenants::bulk_delete_tenants))
            .route("/api/tenants/{id}", web::get().to(handlers::tenants::get_tenant))
            .route("/api/tenants/{id}", web::put().to(handlers::tenants::update_tenant))
            .route("/api/tenants/{id}", web::delete().to(handlers::tenants::delete_tenant))
            .route("/api/tenants/{id}/tracking/{year}", web::get().to(handlers::tracking::year_summary))
            .route("/api/tenants/{id}/tracking/{year}/{month}", web::put().to(handlers::tracking::toggle_month))
            .route("/api/tenants/{id}/tracking/save", web::post().to(handlers::tracking::save_monthly_changes))
            .route("/api/payments", web::get().to(handlers::payments::list_payments))
            .route("/api/payments", web::post().to(handlers::payments::record_payment))
            .route("/api/payments", web::delete().to(handlers::payments::clear_payments_history))
            .route("/api/payments/annual", web::post().to(handlers::payments::record_annual_payment))
            .route("/api/payments/bulk-paid", web::post().to(handlers::payments::bulk_mark_paid))
            .route("/api/payments/{id}", web::delete().to(handlers::payments::delete_payment))
            .route("/api/expenses", web::get().to(handlers::expenses::list_expenses))
            .route("/api/expenses", web::post().to(handlers::expenses::create_expense))
            .route("/api/expenses/summary", web::get().to(handlers::expenses::expense_summary))
            .route("/api/expenses/{id}", web::put().to(handlers::expenses::update_expense))
            .route("/api/expenses/{id}", web::delete().to(handlers::expenses::delete_expense))
            .route("/api/activities", web::get().to(handlers::activities::list_activities))
            .route("/api/reports/statistics", web::get().to(handlers::reports::statistics))
            .route("/api/reports/summary", web::get().to(handlers::reports::payment_summary))
            .route("/api/reports/revenue", web::get().to(handlers::reports::monthly_revenue))
            .route("/api/reports/debtors", web::get().to(handlers::reports::debtors))
            .route("/api/reports/period", web::get().to(handlers::reports::period_report))
            .route("/api/backup", web::post().to(handlers::backup::create_backup))
            .route("/api/backup", web::get().to(handlers::backup::download_backup))
            .route("/api/backup/restore", web::post().to(handlers::backup::restore_backup))
            .route("/api/settings", web::get().to(handlers::settings::get_settings))
            .route("/api/settings", web::put().to(handlers::settings::update_settings))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
