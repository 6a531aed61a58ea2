use maud::{Markup, html};

use crate::model::round::Round;

const KEYPAD_DIGITS_TOP: [u32; 4] = [0, 1, 2, 3];
const KEYPAD_DIGITS_MID: [u32; 3] = [4, 5, 6];
const KEYPAD_DIGITS_BOTTOM: [u32; 3] = [7, 8, 9];

/// The scoring page for the cursor's hole: header, progress dots, player
/// rows, and the keypad.
#[must_use]
pub fn render_play(round: &Round) -> Markup {
    let cursor = round.cursor();
    let hole = &round.holes()[cursor.hole];

    html! {
        div class="play-page" {
            header class="header" {
                h1 { "Course Name: " (round.course().course_name) }
                button class="results-button" { "Results" }
            }

            div class="hole-info" {
                p { "Basket no " (hole.hole_number) " | par " (hole.par) }
                div class="progress-dots" {
                    @for (idx, _) in round.holes().iter().enumerate() {
                        @let dot_class = if idx == cursor.hole {
                            "dot current"
                        } else if round.is_hole_complete(idx) {
                            "dot complete"
                        } else {
                            "dot"
                        };
                        span class=(dot_class) {}
                    }
                }
            }

            div class="player-list" {
                @for (idx, player) in round.players().iter().enumerate() {
                    @let row_class = if idx == cursor.player { "player-row selected" } else { "player-row" };
                    div class=(row_class) {
                        span class="player-name" { (player.name()) }
                        @let ob_class = if round.out_of_bounds(cursor.hole, idx) { "ob-toggle ob-on" } else { "ob-toggle" };
                        button class=(ob_class) { "OB" }
                        span class="player-score" {
                            @match round.score(cursor.hole, idx) {
                                Some(score) => { (score) }
                                None => { "-" }
                            }
                        }
                    }
                }
            }

            div class="keypad" {
                @for digit in KEYPAD_DIGITS_TOP {
                    button class="key" { (digit) }
                }
                button class="key key-ob" { "OB" }
                button class="key key-prev" disabled[cursor.hole == 0] { "\u{2190}" }
                @for digit in KEYPAD_DIGITS_MID {
                    button class="key" { (digit) }
                }
                button class="key key-next" { "\u{2192}" }
                @for digit in KEYPAD_DIGITS_BOTTOM {
                    button class="key" { (digit) }
                }
            }
        }
    }
}
