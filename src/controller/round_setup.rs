use sql_middleware::middleware::ConfigAndPool;

use crate::error::AppError;
use crate::model::database::{get_course, get_holes_for_course};
use crate::model::round::Round;

/// Resolve a course and its holes, then start a round. Any failure here
/// leaves whatever round the caller already holds untouched; scoring never
/// sees a round with an empty hole list.
///
/// # Errors
///
/// Returns `CourseNotFound` when the course id does not exist,
/// `NoHolesForCourse` when the course has no holes, and
/// `InvalidPlayerCount` for 0 or more than 8 players. Database failures
/// surface as `AppError::Db`.
pub async fn start_round(
    config_and_pool: &ConfigAndPool,
    course_id: i32,
    player_names: &[String],
) -> Result<Round, AppError> {
    let course = get_course(config_and_pool, course_id)
        .await?
        .ok_or(AppError::CourseNotFound(course_id))?;

    let holes = get_holes_for_course(config_and_pool, course_id).await?;
    if holes.is_empty() {
        return Err(AppError::NoHolesForCourse(course_id));
    }

    Round::new(course, holes, player_names)
}
