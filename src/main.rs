use deadpool_postgres::{ManagerConfig, RecyclingMethod};
use disc_tally::args;
use disc_tally::controller::catalog::{course_holes, courses, home};
use sql_middleware::SqlMiddlewareDbError;
use sql_middleware::middleware::{
    ConfigAndPool, DatabaseType, MiddlewarePool, MiddlewarePoolConnection, QueryAndParams,
};

use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = args::args_checks();

    let config_and_pool: ConfigAndPool;
    if args.db_type == DatabaseType::Postgres {
        let mut postgres_config = deadpool_postgres::Config::new();
        postgres_config.dbname = Some(args.db_name.clone());
        postgres_config.host = args.db_host.clone();
        postgres_config.port = args.db_port;
        postgres_config.user = args.db_user.clone();
        postgres_config.password = args.db_password.clone();
        postgres_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        config_and_pool = ConfigAndPool::new_postgres(postgres_config).await?;
    } else {
        match ConfigAndPool::new_sqlite(args.db_name.clone()).await {
            Ok(pool) => {
                config_and_pool = pool;
            }
            Err(e) => {
                eprintln!(
                    "Error: {}\nBacktrace: {:?}",
                    e,
                    std::backtrace::Backtrace::capture()
                );
                std::process::exit(1);
            }
        }
    }

    if args.db_startup_script.is_some() {
        let query_and_params = QueryAndParams {
            query: args.combined_sql_script.clone(),
            params: vec![],
        };

        let pool = config_and_pool.pool.get().await?;
        let sconn = MiddlewarePool::get_connection(pool).await?;
        (match sconn {
            MiddlewarePoolConnection::Postgres(mut pg_handle) => {
                let tx = pg_handle.transaction().await?;
                tx.batch_execute(&query_and_params.query).await?;
                tx.commit().await?;
                Ok::<_, SqlMiddlewareDbError>(())
            }
            MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
                sqlite_conn
                    .interact(move |db_conn| {
                        let tx = db_conn.transaction()?;
                        tx.execute_batch(&query_and_params.query)?;
                        tx.commit()?;
                        Ok::<_, SqlMiddlewareDbError>(())
                    })
                    .await?
            }
        })?;
    }

    let listen_port = args.listen_port;
    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(config_and_pool.clone()))
            .route("/", web::get().to(index))
            .route("/api", web::get().to(api_index))
            .route("/api/courses", web::get().to(courses))
            .route("/api/courses/{id}", web::get().to(course_holes))
            .route("/home", web::get().to(home))
            .route("/health", web::get().to(HttpResponse::Ok))
    })
    .bind(("0.0.0.0", listen_port))?
    .run()
    .await?;
    Ok(())
}

async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Disc Golf Score Tracker")
}

async fn api_index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Disc Golf Score Tracker API")
}
