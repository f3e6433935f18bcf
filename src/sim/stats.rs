//! Summary statistics over a batch of game summaries.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::engine::GameOutcome;

use super::GameSummary;

/// Aggregate win/score statistics for one batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub total_games: u64,
    pub p1_win_rate: f64,
    pub p2_win_rate: f64,
    pub tie_rate: f64,
    pub p1_avg_score: f64,
    pub p2_avg_score: f64,
    pub shut_box_frequency: f64,
}

impl SummaryStats {
    /// Aggregate a batch. Returns `None` for an empty batch: every rate
    /// would be 0/0.
    #[must_use]
    pub fn from_summaries(summaries: &[GameSummary]) -> Option<Self> {
        if summaries.is_empty() {
            return None;
        }

        let total = summaries.len() as f64;
        let p1 = PlayerId::new(0);
        let p2 = PlayerId::new(1);

        let p1_wins = summaries.iter().filter(|s| s.outcome.is_winner(p1)).count();
        let p2_wins = summaries.iter().filter(|s| s.outcome.is_winner(p2)).count();
        let ties = summaries
            .iter()
            .filter(|s| s.outcome == GameOutcome::Tie)
            .count();
        let shut_count = summaries.iter().filter(|s| s.shut_box).count();

        let p1_score_sum: u64 = summaries.iter().map(|s| u64::from(s.p1_score)).sum();
        let p2_score_sum: u64 = summaries.iter().map(|s| u64::from(s.p2_score)).sum();

        Some(Self {
            total_games: summaries.len() as u64,
            p1_win_rate: p1_wins as f64 / total,
            p2_win_rate: p2_wins as f64 / total,
            tie_rate: ties as f64 / total,
            p1_avg_score: p1_score_sum as f64 / total,
            p2_avg_score: p2_score_sum as f64 / total,
            shut_box_frequency: shut_count as f64 / total,
        })
    }
}

impl std::fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "total_games: {}", self.total_games)?;
        writeln!(f, "p1_win_rate: {:.4}", self.p1_win_rate)?;
        writeln!(f, "p2_win_rate: {:.4}", self.p2_win_rate)?;
        writeln!(f, "tie_rate: {:.4}", self.tie_rate)?;
        writeln!(f, "p1_avg_score: {:.4}", self.p1_avg_score)?;
        writeln!(f, "p2_avg_score: {:.4}", self.p2_avg_score)?;
        write!(f, "shut_box_frequency: {:.4}", self.shut_box_frequency)
    }
}
