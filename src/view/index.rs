use maud::{Markup, html};

use crate::model::catalog::Course;
use crate::model::round::MAX_PLAYERS;

pub const HOME_TITLE: &str = "Disc Golf Score Tracker";

/// The course picker page: one dropdown, the player name rows, and a start
/// button that stays disabled while the course list is empty.
#[must_use]
pub fn render_home(courses: &[Course], notice: Option<&str>) -> Markup {
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" href="static/styles.css";
            title { (HOME_TITLE) }
        }
        body {
            div class="homepage" {
                h1 { (HOME_TITLE) }
                @if let Some(notice) = notice {
                    p class="notice" { (notice) }
                }
                form class="round-setup" {
                    label {
                        span { "Select course:" }
                        select name="course" required {
                            option value="" disabled selected { "Choose a course" }
                            @for course in courses {
                                option value=(course.course_id) { (course.course_name) }
                            }
                        }
                    }
                    div class="player-names" {
                        label {
                            span { "Player 1" }
                            input type="text" name="player1" maxlength="20" value="Player 1";
                        }
                        button type="button" class="add-player"
                            title=(format!("Up to {MAX_PLAYERS} players")) { "Add player" }
                    }
                    button type="submit" class="start-round" disabled[courses.is_empty()] {
                        "Start round"
                    }
                }
            }
        }
    }
}
