//! Points awarded to a player who finishes a word.
//!
//! The session calls into a [`ScoreRule`] exactly once per finisher, right
//! after it has decremented the count of players still racing. Swapping the
//! rule changes game balance without touching the state machine.

/// Game-balance policy for finishing a word.
pub trait ScoreRule {
    /// `finish_rank` is 1 for the first finisher of the word.
    /// `still_racing` counts players who have not finished after this one.
    fn points(&self, finish_rank: usize, still_racing: usize) -> u32;
}

/// One point per player still racing: first of N earns N-1, last earns 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankScore;

impl ScoreRule for RankScore {
    fn points(&self, _finish_rank: usize, still_racing: usize) -> u32 {
        u32::try_from(still_racing).unwrap_or(u32::MAX)
    }
}

/// Fixed podium table: 3, 2, 1 for the first three finishers, 0 after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PodiumScore;

/// Podium points by rank (index 0 = first place).
pub const PODIUM_POINTS: [u32; 3] = [3, 2, 1];

impl ScoreRule for PodiumScore {
    fn points(&self, finish_rank: usize, _still_racing: usize) -> u32 {
        finish_rank
            .checked_sub(1)
            .and_then(|i| PODIUM_POINTS.get(i))
            .copied()
            .unwrap_or(0)
    }
}

/// Runtime-selectable scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringKind {
    #[default]
    Rank,
    Podium,
}

impl ScoringKind {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rank" => Some(ScoringKind::Rank),
            "podium" => Some(ScoringKind::Podium),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoringKind::Rank => "rank",
            ScoringKind::Podium => "podium",
        }
    }
}

impl ScoreRule for ScoringKind {
    fn points(&self, finish_rank: usize, still_racing: usize) -> u32 {
        match self {
            ScoringKind::Rank => RankScore.points(finish_rank, still_racing),
            ScoringKind::Podium => PodiumScore.points(finish_rank, still_racing),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_score_counts_players_still_racing() {
        // Four players: finishers see 3, 2, 1, 0 left behind them.
        let awarded: Vec<u32> = (1..=4).map(|rank| RankScore.points(rank, 4 - rank)).collect();
        assert_eq!(awarded, vec![3, 2, 1, 0]);
    }

    #[test]
    fn podium_score_uses_fixed_table() {
        assert_eq!(PodiumScore.points(1, 5), 3);
        assert_eq!(PodiumScore.points(2, 4), 2);
        assert_eq!(PodiumScore.points(3, 3), 1);
        assert_eq!(PodiumScore.points(4, 2), 0);
        assert_eq!(PodiumScore.points(0, 2), 0);
    }

    #[test]
    fn scoring_kind_parses_and_dispatches() {
        assert_eq!(ScoringKind::from_str("PODIUM"), Some(ScoringKind::Podium));
        assert_eq!(ScoringKind::from_str("rank"), Some(ScoringKind::Rank));
        assert_eq!(ScoringKind::from_str("elo"), None);
        assert_eq!(ScoringKind::default().points(1, 2), 2);
        assert_eq!(ScoringKind::Podium.points(1, 2), 3);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn earlier_finishers_never_earn_less(players in 1usize..16) {
                for rule in [ScoringKind::Rank, ScoringKind::Podium] {
                    let awarded: Vec<u32> = (1..=players)
                        .map(|rank| rule.points(rank, players - rank))
                        .collect();
                    prop_assert!(awarded.windows(2).all(|w| w[0] >= w[1]));
                }
                prop_assert_eq!(RankScore.points(players, 0), 0);
                prop_assert_eq!(RankScore.points(1, players - 1) as usize, players - 1);
            }
        }
    }
}
