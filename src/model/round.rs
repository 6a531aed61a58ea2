use crate::error::AppError;
use crate::model::catalog::{Course, Hole};

pub const MAX_PLAYERS: usize = 8;

/// One player's scorecard for the active round. `scores` and `out_of_bounds`
/// are positionally aligned with the round's hole list at all times.
#[derive(Clone, Debug)]
pub struct Player {
    name: String,
    scores: Vec<Option<u32>>,
    out_of_bounds: Vec<bool>,
}

impl Player {
    fn new(name: String, hole_count: usize) -> Self {
        Self {
            name,
            scores: vec![None; hole_count],
            out_of_bounds: vec![false; hole_count],
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn scores(&self) -> &[Option<u32>] {
        &self.scores
    }

    #[must_use]
    pub fn out_of_bounds(&self) -> &[bool] {
        &self.out_of_bounds
    }
}

/// The (hole, player) pair currently receiving keypad input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    pub hole: usize,
    pub player: usize,
}

/// Canonical in-memory state of one round. Created when a round starts,
/// discarded when a new round starts. Score and OB entries are only mutated
/// through the play state machine in `mvu::play`.
#[derive(Clone, Debug)]
pub struct Round {
    course: Course,
    holes: Vec<Hole>,
    players: Vec<Player>,
    cursor: Cursor,
}

impl Round {
    /// Start a round with all scores unset, all OB flags false, and the
    /// cursor at the first hole and first player. Blank player names get a
    /// `Player N` default.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidPlayerCount` for 0 or more than
    /// `MAX_PLAYERS` names, and `AppError::NoHolesForCourse` for an empty
    /// hole list: the cursor invariant cannot hold on a round without
    /// holes.
    pub fn new(course: Course, holes: Vec<Hole>, player_names: &[String]) -> Result<Self, AppError> {
        if player_names.is_empty() || player_names.len() > MAX_PLAYERS {
            return Err(AppError::InvalidPlayerCount(player_names.len()));
        }
        if holes.is_empty() {
            return Err(AppError::NoHolesForCourse(course.course_id));
        }

        let players = player_names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let name = if name.trim().is_empty() {
                    format!("Player {}", idx + 1)
                } else {
                    name.trim().to_string()
                };
                Player::new(name, holes.len())
            })
            .collect();

        Ok(Self {
            course,
            holes,
            players,
            cursor: Cursor { hole: 0, player: 0 },
        })
    }

    #[must_use]
    pub fn course(&self) -> &Course {
        &self.course
    }

    #[must_use]
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub fn score(&self, hole: usize, player: usize) -> Option<u32> {
        self.players
            .get(player)
            .and_then(|p| p.scores.get(hole))
            .copied()
            .flatten()
    }

    #[must_use]
    pub fn out_of_bounds(&self, hole: usize, player: usize) -> bool {
        self.players
            .get(player)
            .and_then(|p| p.out_of_bounds.get(hole))
            .copied()
            .unwrap_or(false)
    }

    /// True iff every player has a set score for the hole.
    #[must_use]
    pub fn is_hole_complete(&self, hole: usize) -> bool {
        self.players
            .iter()
            .all(|p| p.scores.get(hole).is_some_and(Option::is_some))
    }

    pub(crate) fn record_score(&mut self, value: u32) {
        let Cursor { hole, player } = self.cursor;
        if let Some(slot) = self
            .players
            .get_mut(player)
            .and_then(|p| p.scores.get_mut(hole))
        {
            *slot = Some(value);
        }
    }

    pub(crate) fn toggle_ob(&mut self) {
        let Cursor { hole, player } = self.cursor;
        if let Some(flag) = self
            .players
            .get_mut(player)
            .and_then(|p| p.out_of_bounds.get_mut(hole))
        {
            *flag = !*flag;
        }
    }

    pub(crate) fn set_cursor(&mut self, cursor: Cursor) {
        debug_assert!(cursor.hole < self.holes.len());
        debug_assert!(cursor.player < self.players.len());
        self.cursor = cursor;
    }
}
