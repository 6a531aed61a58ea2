use crate::model::round::{Cursor, Round};

/// Model for the play page: the round plus the keypad's pending-digit
/// sub-state. A pending `1` means the next digit press extends the entry to
/// a two-digit score (10-19); any other committed first digit finalizes
/// immediately and a following press overwrites.
#[derive(Clone, Debug)]
pub struct PlayModel {
    pub round: Round,
    pending_digit: Option<u32>,
}

impl PlayModel {
    #[must_use]
    pub fn new(round: Round) -> Self {
        Self {
            round,
            pending_digit: None,
        }
    }

    #[must_use]
    pub fn pending_digit(&self) -> Option<u32> {
        self.pending_digit
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Keypad digit 0-9.
    Digit(u32),
    /// Toggle the OB flag at the cursor.
    ObToggle,
    /// Move the player cursor within the current hole.
    SelectPlayer(usize),
    /// Next player, or next hole, or round complete.
    Advance,
    /// Back one hole, first player.
    Retreat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// Advance was pressed on the last player of the last hole; the caller
    /// hands off to the summary view. The cursor does not move.
    RoundComplete,
}

/// Apply one keypad event to the model. Events arrive serially from user
/// input; each one is applied fully before the next.
pub fn update(model: &mut PlayModel, msg: Msg) -> Signal {
    match msg {
        Msg::Digit(digit) => {
            debug_assert!(digit <= 9);
            match model.pending_digit.take() {
                Some(first) => {
                    model.round.record_score(first * 10 + digit);
                }
                None => {
                    model.round.record_score(digit);
                    if digit == 1 {
                        model.pending_digit = Some(1);
                    }
                }
            }
            Signal::Continue
        }
        Msg::ObToggle => {
            // OB is independent of score entry: pending digit survives.
            model.round.toggle_ob();
            Signal::Continue
        }
        Msg::SelectPlayer(player) => {
            model.pending_digit = None;
            let cursor = model.round.cursor();
            if player < model.round.players().len() {
                model.round.set_cursor(Cursor { player, ..cursor });
            }
            Signal::Continue
        }
        Msg::Advance => {
            model.pending_digit = None;
            let cursor = model.round.cursor();
            if cursor.player + 1 < model.round.players().len() {
                model.round.set_cursor(Cursor {
                    player: cursor.player + 1,
                    ..cursor
                });
            } else if cursor.hole + 1 < model.round.holes().len() {
                model.round.set_cursor(Cursor {
                    hole: cursor.hole + 1,
                    player: 0,
                });
            } else {
                return Signal::RoundComplete;
            }
            Signal::Continue
        }
        Msg::Retreat => {
            model.pending_digit = None;
            let cursor = model.round.cursor();
            if cursor.hole > 0 {
                model.round.set_cursor(Cursor {
                    hole: cursor.hole - 1,
                    player: 0,
                });
            }
            Signal::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{Course, Hole};

    fn model(hole_pars: &[i32], player_names: &[&str]) -> PlayModel {
        let course = Course {
            course_id: 7,
            course_name: "Knivsta".to_string(),
        };
        let holes = hole_pars
            .iter()
            .enumerate()
            .map(|(idx, &par)| Hole {
                course_id: 7,
                hole_number: i32::try_from(idx).unwrap_or(0) + 1,
                par,
            })
            .collect();
        let names: Vec<String> = player_names.iter().map(ToString::to_string).collect();
        PlayModel::new(Round::new(course, holes, &names).unwrap())
    }

    #[test]
    fn one_then_two_makes_twelve() {
        let mut m = model(&[3], &["A"]);
        update(&mut m, Msg::Digit(1));
        assert_eq!(m.round.score(0, 0), Some(1));
        assert_eq!(m.pending_digit(), Some(1));
        update(&mut m, Msg::Digit(2));
        assert_eq!(m.round.score(0, 0), Some(12));
        assert_eq!(m.pending_digit(), None);
    }

    #[test]
    fn one_then_one_makes_eleven() {
        let mut m = model(&[3], &["A"]);
        update(&mut m, Msg::Digit(1));
        update(&mut m, Msg::Digit(1));
        assert_eq!(m.round.score(0, 0), Some(11));
        // The second 1 was consumed by the pending digit, not re-armed.
        assert_eq!(m.pending_digit(), None);
    }

    #[test]
    fn non_one_first_digit_never_arms_two_digit_entry() {
        let mut m = model(&[3], &["A"]);
        update(&mut m, Msg::Digit(5));
        assert_eq!(m.round.score(0, 0), Some(5));
        assert_eq!(m.pending_digit(), None);
        update(&mut m, Msg::Digit(3));
        // Overwrite, not append.
        assert_eq!(m.round.score(0, 0), Some(3));
    }

    #[test]
    fn ob_toggle_is_idempotent_under_double_application() {
        let mut m = model(&[3], &["A"]);
        update(&mut m, Msg::Digit(4));
        update(&mut m, Msg::ObToggle);
        assert!(m.round.out_of_bounds(0, 0));
        update(&mut m, Msg::ObToggle);
        assert!(!m.round.out_of_bounds(0, 0));
        assert_eq!(m.round.score(0, 0), Some(4));
    }

    #[test]
    fn ob_does_not_consume_the_pending_digit() {
        let mut m = model(&[3], &["A"]);
        update(&mut m, Msg::Digit(1));
        update(&mut m, Msg::ObToggle);
        assert_eq!(m.pending_digit(), Some(1));
        update(&mut m, Msg::Digit(4));
        assert_eq!(m.round.score(0, 0), Some(14));
        assert!(m.round.out_of_bounds(0, 0));
    }

    #[test]
    fn select_player_keeps_hole_and_clears_pending() {
        let mut m = model(&[3, 4], &["A", "B", "C"]);
        update(&mut m, Msg::Advance);
        update(&mut m, Msg::Advance);
        update(&mut m, Msg::Advance);
        assert_eq!(m.round.cursor(), Cursor { hole: 1, player: 0 });

        update(&mut m, Msg::Digit(1));
        update(&mut m, Msg::SelectPlayer(2));
        assert_eq!(m.round.cursor(), Cursor { hole: 1, player: 2 });
        assert_eq!(m.pending_digit(), None);

        // Out-of-range selection is ignored.
        update(&mut m, Msg::SelectPlayer(9));
        assert_eq!(m.round.cursor(), Cursor { hole: 1, player: 2 });
    }

    #[test]
    fn advance_walks_players_then_holes_then_signals_complete() {
        let mut m = model(&[3, 4], &["A", "B"]);
        assert_eq!(update(&mut m, Msg::Advance), Signal::Continue);
        assert_eq!(m.round.cursor(), Cursor { hole: 0, player: 1 });
        assert_eq!(update(&mut m, Msg::Advance), Signal::Continue);
        assert_eq!(m.round.cursor(), Cursor { hole: 1, player: 0 });
        assert_eq!(update(&mut m, Msg::Advance), Signal::Continue);
        assert_eq!(update(&mut m, Msg::Advance), Signal::RoundComplete);
        // Terminal advance leaves the cursor where it was.
        assert_eq!(m.round.cursor(), Cursor { hole: 1, player: 1 });
    }

    #[test]
    fn retreat_is_a_noop_on_the_first_hole() {
        let mut m = model(&[3, 4], &["A", "B"]);
        assert_eq!(update(&mut m, Msg::Retreat), Signal::Continue);
        assert_eq!(m.round.cursor(), Cursor { hole: 0, player: 0 });

        update(&mut m, Msg::Advance);
        update(&mut m, Msg::Advance);
        update(&mut m, Msg::SelectPlayer(1));
        update(&mut m, Msg::Digit(1));
        update(&mut m, Msg::Retreat);
        assert_eq!(m.round.cursor(), Cursor { hole: 0, player: 0 });
        assert_eq!(m.pending_digit(), None);
    }
}
