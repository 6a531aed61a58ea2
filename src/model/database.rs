use sql_middleware::middleware::{
    ConfigAndPool, ConversionMode, MiddlewarePool, MiddlewarePoolConnection, QueryAndParams,
    ResultSet, RowValues,
};
use sql_middleware::{
    PostgresParams, SqlMiddlewareDbError, SqliteParamsQuery, convert_sql_params,
    postgres_build_result_set, sqlite_build_result_set,
};

use crate::model::catalog::{Course, Hole};

/// Run one read-only query against either backend and collect the rows.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn execute_query(
    conn: MiddlewarePoolConnection,
    query: &str,
    params: Vec<RowValues>,
) -> Result<ResultSet, SqlMiddlewareDbError> {
    let query_and_params = QueryAndParams {
        query: query.to_string(),
        params,
    };

    match conn {
        MiddlewarePoolConnection::Postgres(mut pg_handle) => {
            let tx = pg_handle.transaction().await?;
            let result_set = {
                let stmt = tx.prepare(&query_and_params.query).await?;
                let converted_params = PostgresParams::convert(&query_and_params.params)?;
                postgres_build_result_set(&stmt, &converted_params.as_refs(), &tx).await?
            };
            tx.commit().await?;
            Ok(result_set)
        }
        MiddlewarePoolConnection::Sqlite(sqlite_conn) => {
            let result = sqlite_conn
                .interact(move |db_conn| {
                    let converted_params = convert_sql_params::<SqliteParamsQuery>(
                        &query_and_params.params,
                        ConversionMode::Query,
                    )?;
                    let tx = db_conn.transaction()?;

                    let result_set = {
                        let mut stmt = tx.prepare(&query_and_params.query)?;

                        sqlite_build_result_set(&mut stmt, &converted_params.0)?
                    };
                    tx.commit()?;
                    Ok::<_, SqlMiddlewareDbError>(result_set)
                })
                .await??;

            Ok(result)
        }
    }
}

fn get_int(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> i64 {
    row.get(field).and_then(|v| v.as_int()).map_or(0, |&v| v)
}

fn get_string(row: &sql_middleware::middleware::CustomDbRow, field: &str) -> String {
    row.get(field)
        .and_then(|v| v.as_text())
        .unwrap_or_default()
        .to_string()
}

fn as_i32(v: i64) -> i32 {
    i32::try_from(v).unwrap_or(0)
}

/// All courses, ordered ascending by course name at the data-store level.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_courses(
    config_and_pool: &ConfigAndPool,
) -> Result<Vec<Course>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;
    let query = match &conn {
        MiddlewarePoolConnection::Postgres(_) => {
            "SELECT course_id, course_name FROM courses ORDER BY course_name"
        }
        MiddlewarePoolConnection::Sqlite(_) => {
            include_str!("../sql/functions/sqlite/01_get_courses.sql")
        }
    };

    let query_result = execute_query(conn, query, vec![]).await?;

    Ok(query_result
        .results
        .iter()
        .map(|row| Course {
            course_id: as_i32(get_int(row, "course_id")),
            course_name: get_string(row, "course_name"),
        })
        .collect())
}

/// One course by id, or `None` when no such row exists.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_course(
    config_and_pool: &ConfigAndPool,
    course_id: i32,
) -> Result<Option<Course>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;
    let query = match &conn {
        MiddlewarePoolConnection::Postgres(_) => {
            "SELECT course_id, course_name FROM courses WHERE course_id = $1"
        }
        MiddlewarePoolConnection::Sqlite(_) => {
            include_str!("../sql/functions/sqlite/02_get_course.sql")
        }
    };

    let query_result =
        execute_query(conn, query, vec![RowValues::Int(i64::from(course_id))]).await?;

    Ok(query_result.results.first().map(|row| Course {
        course_id: as_i32(get_int(row, "course_id")),
        course_name: get_string(row, "course_name"),
    }))
}

/// Holes for a course, ordered ascending by hole number. An unknown course
/// id comes back as an empty list; callers decide whether that is a 404.
///
/// # Errors
///
/// Will return `Err` if the database query fails
pub async fn get_holes_for_course(
    config_and_pool: &ConfigAndPool,
    course_id: i32,
) -> Result<Vec<Hole>, SqlMiddlewareDbError> {
    let pool = config_and_pool.pool.get().await?;
    let conn = MiddlewarePool::get_connection(pool).await?;
    let query = match &conn {
        MiddlewarePoolConnection::Postgres(_) => {
            "SELECT course_id, hole_number, par FROM holes WHERE course_id = $1 ORDER BY hole_number"
        }
        MiddlewarePoolConnection::Sqlite(_) => {
            include_str!("../sql/functions/sqlite/03_get_holes.sql")
        }
    };

    let query_result =
        execute_query(conn, query, vec![RowValues::Int(i64::from(course_id))]).await?;

    Ok(query_result
        .results
        .iter()
        .map(|row| Hole {
            course_id: as_i32(get_int(row, "course_id")),
            hole_number: as_i32(get_int(row, "hole_number")),
            par: as_i32(get_int(row, "par")),
        })
        .collect())
}
