use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use sql_middleware::middleware::ConfigAndPool;

use crate::model::database::{get_courses, get_holes_for_course};
use crate::view::index::render_home;

/// `GET /api/courses`: every course, ordered by name.
pub async fn courses(abc: Data<ConfigAndPool>) -> impl Responder {
    let config_and_pool = abc.get_ref().clone();

    match get_courses(&config_and_pool).await {
        Ok(courses) => HttpResponse::Ok().json(courses),
        Err(e) => {
            eprintln!("Error listing courses: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

/// `GET /api/courses/{id}`: the holes of one course, ordered by hole
/// number. A course without holes cannot host a round, so an empty result
/// is a 404.
pub async fn course_holes(path: web::Path<i32>, abc: Data<ConfigAndPool>) -> impl Responder {
    let course_id = path.into_inner();
    let config_and_pool = abc.get_ref().clone();

    match get_holes_for_course(&config_and_pool, course_id).await {
        Ok(holes) if holes.is_empty() => HttpResponse::NotFound()
            .json(json!({"message": format!("No holes found for course {course_id}")})),
        Ok(holes) => HttpResponse::Ok().json(holes),
        Err(e) => {
            eprintln!("Error listing holes for course {course_id}: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

/// `GET /home`: the course picker. A catalog failure renders the page with
/// an empty course list and a notice instead of erroring out; re-loading
/// the page is the retry.
pub async fn home(abc: Data<ConfigAndPool>) -> impl Responder {
    let config_and_pool = abc.get_ref().clone();

    let (courses, notice) = match get_courses(&config_and_pool).await {
        Ok(courses) => (courses, None),
        Err(e) => {
            eprintln!("Error loading course list: {e}");
            (vec![], Some("Course list is unavailable right now."))
        }
    };

    let markup = render_home(&courses, notice);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
