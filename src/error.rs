use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("db error: {0}")]
    Db(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("course {0} not found")]
    CourseNotFound(i32),
    #[error("no holes found for course {0}")]
    NoHolesForCourse(i32),
    #[error("a round takes 1 to 8 players, got {0}")]
    InvalidPlayerCount(usize),
    #[error("{0}")]
    Other(String),
}

impl From<sql_middleware::SqlMiddlewareDbError> for AppError {
    fn from(err: sql_middleware::SqlMiddlewareDbError) -> Self {
        Self::Db(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
