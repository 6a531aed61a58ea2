use maud::{Markup, html};

use crate::model::round::Round;
use crate::score::{CellClass, par_differential, total_par, total_score};

fn differential_class(diff: i32) -> &'static str {
    if diff < -2 {
        "diff-far-under"
    } else if diff < 0 {
        "diff-under"
    } else if diff == 0 {
        "diff-even"
    } else if diff == 1 {
        "diff-one-over"
    } else {
        "diff-over"
    }
}

fn signed(diff: i32) -> String {
    if diff > 0 {
        format!("+{diff}")
    } else {
        diff.to_string()
    }
}

/// The summary scoreboard: hole-number header, par row, one row per player
/// with category-classed cells, then total and par-differential columns.
#[must_use]
pub fn render_summary(round: &Round) -> Markup {
    let holes = round.holes();

    html! {
        div class="summary-page" {
            h1 { "Game Summary" }
            h2 { "Course: " span { (round.course().course_name) } }

            table class="styled-table summary-table" {
                thead {
                    tr {
                        th { "Player" }
                        @for hole in holes {
                            th { (hole.hole_number) }
                        }
                        th { "Total" }
                        th { "Par Difference" }
                    }
                    tr {
                        th { "Par" }
                        @for hole in holes {
                            th { (hole.par) }
                        }
                        th { (total_par(holes)) }
                        th {}
                    }
                }
                tbody {
                    @for player in round.players() {
                        tr {
                            td class="player-name" { (player.name()) }
                            @for (idx, hole) in holes.iter().enumerate() {
                                @let score = player.scores()[idx];
                                @let class = CellClass::classify(
                                    score.map(|s| i32::try_from(s).unwrap_or(0)),
                                    hole.par,
                                );
                                @let ob = player.out_of_bounds()[idx];
                                @let cell_class = if ob {
                                    format!("{} ob-marked", class.css_class())
                                } else {
                                    class.css_class().to_string()
                                };
                                td class=(cell_class) {
                                    @match score {
                                        Some(score) => { (score) }
                                        None => { "-" }
                                    }
                                }
                            }
                            td class="total" { (total_score(player)) }
                            @let diff = par_differential(player, holes);
                            td class=(format!("par-diff {}", differential_class(diff))) {
                                (signed(diff))
                            }
                        }
                    }
                }
            }

            div class="summary-actions" {
                button class="back-home" { "Back to Home" }
                button class="edit-scores" { "Edit Scores" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Course, Hole};
    use crate::mvu::play::{Msg, PlayModel, update};

    fn scored_round() -> Round {
        let course = Course {
            course_id: 9,
            course_name: "Ryssby".to_string(),
        };
        let holes = vec![
            Hole {
                course_id: 9,
                hole_number: 1,
                par: 3,
            },
            Hole {
                course_id: 9,
                hole_number: 2,
                par: 4,
            },
            Hole {
                course_id: 9,
                hole_number: 3,
                par: 3,
            },
        ];
        let round = Round::new(course, holes, &["Mira".to_string()]).unwrap();
        let mut model = PlayModel::new(round);
        update(&mut model, Msg::Digit(3));
        update(&mut model, Msg::Advance);
        update(&mut model, Msg::Digit(6));
        update(&mut model, Msg::ObToggle);
        update(&mut model, Msg::Advance);
        update(&mut model, Msg::Digit(2));
        model.round
    }

    #[test]
    fn summary_shows_totals_and_cell_categories() {
        let markup = render_summary(&scored_round()).into_string();
        assert!(markup.contains("Ryssby"));
        assert!(markup.contains("score-par"));
        assert!(markup.contains("score-over-par ob-marked"));
        assert!(markup.contains("score-under-par"));
        assert!(markup.contains(">11<"));
        assert!(markup.contains(">10<"));
        assert!(markup.contains(">+1<"));
        assert!(markup.contains("diff-one-over"));
    }

    #[test]
    fn unscored_cells_render_as_dashes() {
        let course = Course {
            course_id: 9,
            course_name: "Ryssby".to_string(),
        };
        let holes = vec![Hole {
            course_id: 9,
            hole_number: 1,
            par: 3,
        }];
        let round = Round::new(course, holes, &["Mira".to_string()]).unwrap();
        let markup = render_summary(&round).into_string();
        assert!(markup.contains("score-unset"));
        assert!(markup.contains(">-<"));
        assert!(markup.contains(">-3<"), "policy A counts every hole's par");
    }
}
