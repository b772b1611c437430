use actix_web::{web, App, HttpServer};
use balance_wheel_backend::{db, handlers};
use dotenv::dotenv;
use log::info;
use std::env;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Initialize the database pool and bring the schema up to date
    let pool = db::create_pool().await;
    db::run_migrations(&pool).await;

    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(8080);

    info!("Starting server at {}:{}", host, port);

    // Start the HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .service(
                web::resource("/v1/departments")
                    .route(web::post().to(handlers::department::create_department))
                    .route(web::get().to(handlers::department::get_departments)),
            )
            .service(
                web::resource("/v1/departments/{id}")
                    .route(web::delete().to(handlers::department::delete_department)),
            )
            .service(
                web::resource("/v1/survey-responses")
                    .route(web::post().to(handlers::survey::submit_survey)),
            )
            .service(
                web::resource("/v1/survey-responses/generate")
                    .route(web::post().to(handlers::survey::generate_responses)),
            )
            .service(
                web::resource("/v1/reports/years")
                    .route(web::get().to(handlers::report::available_years)),
            )
            .service(
                web::resource("/v1/reports/monthly")
                    .route(web::get().to(handlers::report::monthly_report)),
            )
            .service(
                web::resource("/v1/reports/departments/{id}/monthly")
                    .route(web::get().to(handlers::report::department_monthly_report)),
            )
            .service(
                web::resource("/v1/reports/departments/{id}/overall")
                    .route(web::get().to(handlers::report::department_overall_report)),
            )
            .service(
                web::resource("/v1/reports/comparison")
                    .route(web::get().to(handlers::report::comparison_report)),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
