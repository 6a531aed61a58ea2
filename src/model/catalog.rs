use serde::{Deserialize, Serialize};

/// A course as served by the catalog API. Immutable once fetched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub course_id: i32,
    pub course_name: String,
}

/// One hole of a course, ordered ascending by `hole_number` within the course.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Hole {
    pub course_id: i32,
    pub hole_number: i32,
    pub par: i32,
}
