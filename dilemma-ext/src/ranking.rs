//! Overall standings across a whole run, later generations weighing more.

use std::cmp::Ordering;

use dilemma::evolution::GenerationHistory;

#[derive(Clone, Debug, PartialEq)]
pub struct FinalStanding {
    pub rank: usize,
    pub bot: String,
    pub weighted_score: f64,
    pub avg_coop_pct: f64,
}

/// Generation `g` of `n` weighs `g / (1 + .. + n)`.
///
/// A generation a bot is absent from counts as a zero score and zero
/// cooperation, so kinds eliminated early sink below the survivors.
/// Ties on weighted score fall back to mean cooperation. Bots that scored
/// zero in every generation are left out.
pub fn final_ranking(history: &GenerationHistory) -> Vec<FinalStanding> {
    let generations = history.len();
    let total = (generations * (generations + 1) / 2) as f64;

    let mut standings = history
        .bot_names()
        .into_iter()
        .filter_map(|bot| {
            let (weighted_score, score_sum, coop_sum) = history.iter().enumerate().fold(
                (0.0, 0.0, 0.0),
                |(weighted, score_sum, coop_sum), (index, snapshot)| match snapshot.get(bot) {
                    Some(entry) => (
                        weighted + entry.score * (index + 1) as f64 / total,
                        score_sum + entry.score.abs(),
                        coop_sum + entry.coop_rate_pct,
                    ),
                    None => (weighted, score_sum, coop_sum),
                },
            );
            if score_sum == 0.0 {
                return None;
            }

            Some(FinalStanding {
                rank: 0,
                bot: bot.to_string(),
                weighted_score,
                avg_coop_pct: coop_sum / generations as f64,
            })
        })
        .collect::<Vec<_>>();

    standings.sort_by(|a, b| {
        b.weighted_score
            .partial_cmp(&a.weighted_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| {
                b.avg_coop_pct
                    .partial_cmp(&a.avg_coop_pct)
                    .unwrap_or(Ordering::Equal)
            })
    });
    for (index, standing) in standings.iter_mut().enumerate() {
        standing.rank = index + 1;
    }
    standings
}

#[cfg(test)]
mod tests {
    use dilemma::{
        evolution::{GenerationHistory, GenerationSnapshot},
        tournament::LeaderboardEntry,
    };

    use super::final_ranking;

    fn entry(bot: &str, score: f64, coop_rate_pct: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            rank: 1,
            bot: bot.to_string(),
            score,
            wins: 0,
            losses: 0,
            draws: 0,
            coop_rate_pct,
        }
    }

    fn assert_close(expected: f64, actual: f64) {
        assert!(
            (expected - actual).abs() < 1e-9,
            "Expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_final_ranking_should_weigh_later_generations_more() {
        // Given
        let history = [
            GenerationSnapshot::from_leaderboard(1, &[entry("a", 300.0, 100.0), entry("b", 0.0, 0.0)]),
            GenerationSnapshot::from_leaderboard(2, &[entry("a", 0.0, 50.0), entry("b", 150.0, 0.0)]),
        ]
        .into_iter()
        .collect::<GenerationHistory>();

        // When
        let result = final_ranking(&history);

        // Then
        // a: 300 * 1/3, b: 150 * 2/3
        assert_eq!(2, result.len());
        assert_eq!("a", result[0].bot);
        assert_eq!(1, result[0].rank);
        assert_close(100.0, result[0].weighted_score);
        assert_close(75.0, result[0].avg_coop_pct);
        assert_eq!("b", result[1].bot);
        assert_eq!(2, result[1].rank);
        assert_close(100.0, result[1].weighted_score);
    }

    #[test]
    fn test_final_ranking_should_count_absent_generations_as_zero() {
        // Given
        let history = [
            GenerationSnapshot::from_leaderboard(1, &[entry("Survivor", 80.0, 90.0), entry("Dropped", 60.0, 30.0)]),
            GenerationSnapshot::from_leaderboard(2, &[entry("Survivor", 55.0, 90.0)]),
            GenerationSnapshot::from_leaderboard(3, &[entry("Survivor", 55.0, 90.0)]),
        ]
        .into_iter()
        .collect::<GenerationHistory>();

        // When
        let result = final_ranking(&history);

        // Then
        // Survivor: (80 + 2 * 55 + 3 * 55) / 6, Dropped: 60 / 6
        assert_eq!("Survivor", result[0].bot);
        assert_close(355.0 / 6.0, result[0].weighted_score);
        assert_close(90.0, result[0].avg_coop_pct);
        assert_eq!("Dropped", result[1].bot);
        assert_close(10.0, result[1].weighted_score);
        assert_close(10.0, result[1].avg_coop_pct);
    }

    #[test]
    fn test_final_ranking_should_break_ties_on_cooperation() {
        // Given
        let history = [GenerationSnapshot::from_leaderboard(
            1,
            &[entry("a", 50.0, 10.0), entry("b", 50.0, 90.0)],
        )]
        .into_iter()
        .collect::<GenerationHistory>();

        // When
        let result = final_ranking(&history);

        // Then
        assert_eq!(vec!["b", "a"], result.iter().map(|s| s.bot.as_str()).collect::<Vec<_>>());
    }

    #[test]
    fn test_final_ranking_should_drop_bots_without_score() {
        let history = [GenerationSnapshot::from_leaderboard(
            1,
            &[entry("a", 10.0, 10.0), entry("b", 0.0, 100.0)],
        )]
        .into_iter()
        .collect::<GenerationHistory>();

        let result = final_ranking(&history);

        assert_eq!(1, result.len());
        assert_eq!("a", result[0].bot);
    }

    #[test]
    fn test_final_ranking_of_empty_history() {
        assert!(final_ranking(&GenerationHistory::default()).is_empty());
    }
}
