use serde::{Deserialize, Serialize};

use crate::model::catalog::Hole;
use crate::model::round::Player;

/// Sum of all set scores for the player; unset holes contribute 0.
#[must_use]
pub fn total_score(player: &Player) -> i32 {
    player
        .scores()
        .iter()
        .flatten()
        .map(|&s| i32::try_from(s).unwrap_or(0))
        .sum()
}

#[must_use]
pub fn total_par(holes: &[Hole]) -> i32 {
    holes.iter().map(|h| h.par).sum()
}

/// All-holes differential: total score minus par summed over every hole of
/// the course, whether or not the player has scored it yet.
#[must_use]
pub fn par_differential(player: &Player, holes: &[Hole]) -> i32 {
    total_score(player) - total_par(holes)
}

/// Display category for one scorecard cell. A hole-in-one wins over the
/// differential buckets; the OB overlay is carried separately by the views
/// and never changes the category.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CellClass {
    Unset,
    HoleInOne,
    FarUnderPar,
    UnderPar,
    Par,
    OneOverPar,
    OverPar,
}

impl CellClass {
    #[must_use]
    pub fn classify(score: Option<i32>, par: i32) -> Self {
        let Some(score) = score else {
            return CellClass::Unset;
        };
        if score == 1 {
            return CellClass::HoleInOne;
        }
        match score - par {
            d if d < -2 => CellClass::FarUnderPar,
            d if d < 0 => CellClass::UnderPar,
            0 => CellClass::Par,
            1 => CellClass::OneOverPar,
            _ => CellClass::OverPar,
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            CellClass::Unset => "score-unset",
            CellClass::HoleInOne => "score-hole-in-one",
            CellClass::FarUnderPar => "score-far-under-par",
            CellClass::UnderPar => "score-under-par",
            CellClass::Par => "score-par",
            CellClass::OneOverPar => "score-one-over-par",
            CellClass::OverPar => "score-over-par",
        }
    }
}
