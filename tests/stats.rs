//! Integration tests for derived statistics: averages and goal comparison.

use kd_tracker::{
    average, avg_kd, avg_win_loss, goal_standing, GameMap, GoalStanding, MatchRecord, MatchResult,
    Player, PlayerOverview,
};

fn player_with_matches(kd_goal: f64, matches: &[(f64, MatchResult)]) -> Player {
    let mut p = Player::new("Tester", "https://i.pravatar.cc/48", kd_goal);
    for &(kd, result) in matches {
        p.add_match(MatchRecord::new(GameMap::Rust, kd, result));
    }
    p
}

#[test]
fn average_is_arithmetic_mean() {
    assert_eq!(average(&[1.0, 2.0, 3.0]), 2.0);
    assert_eq!(average(&[0.5]), 0.5);
}

#[test]
fn average_of_empty_sequence_is_zero() {
    assert_eq!(average(&[]), 0.0);
}

#[test]
fn avg_kd_is_mean_of_match_kds() {
    let p = player_with_matches(
        1.0,
        &[
            (1.85, MatchResult::Loss),
            (0.9, MatchResult::Win),
            (2.3, MatchResult::Win),
        ],
    );
    let expected = (1.85 + 0.9 + 2.3) / 3.0;
    assert!((avg_kd(&p) - expected).abs() < 1e-12);
}

#[test]
fn avg_kd_with_no_matches_is_zero() {
    let p = player_with_matches(1.0, &[]);
    assert_eq!(avg_kd(&p), 0.0);
}

#[test]
fn avg_win_loss_is_two_iff_all_wins() {
    let p = player_with_matches(1.0, &[(1.0, MatchResult::Win), (2.0, MatchResult::Win)]);
    assert_eq!(avg_win_loss(&p), 2.0);
}

#[test]
fn avg_win_loss_is_zero_iff_all_losses() {
    let p = player_with_matches(1.0, &[(1.0, MatchResult::Loss), (2.0, MatchResult::Loss)]);
    assert_eq!(avg_win_loss(&p), 0.0);
}

#[test]
fn avg_win_loss_stays_within_bounds() {
    let p = player_with_matches(
        1.0,
        &[
            (1.0, MatchResult::Win),
            (1.0, MatchResult::Loss),
            (1.0, MatchResult::Win),
        ],
    );
    let v = avg_win_loss(&p);
    assert!((0.0..=2.0).contains(&v));
    // 2 wins, 1 loss: (2 + 0 + 2) / 3
    assert!((v - 4.0 / 3.0).abs() < 1e-12);
}

#[test]
fn goal_standing_compares_avg_kd_to_goal() {
    let above = player_with_matches(1.0, &[(2.0, MatchResult::Win)]);
    assert_eq!(goal_standing(&above), GoalStanding::Above);

    let below = player_with_matches(1.0, &[(0.5, MatchResult::Loss)]);
    assert_eq!(goal_standing(&below), GoalStanding::Below);

    let at = player_with_matches(1.5, &[(1.5, MatchResult::Win)]);
    assert_eq!(goal_standing(&at), GoalStanding::AtGoal);
}

#[test]
fn goal_standing_with_no_matches_uses_zero_average() {
    // No matches: average is 0, so any positive goal reads as below.
    let p = player_with_matches(1.3, &[]);
    assert_eq!(goal_standing(&p), GoalStanding::Below);

    let zero_goal = player_with_matches(0.0, &[]);
    assert_eq!(goal_standing(&zero_goal), GoalStanding::AtGoal);
}

#[test]
fn overview_carries_derived_stats() {
    let p = player_with_matches(1.0, &[(2.0, MatchResult::Win), (1.0, MatchResult::Loss)]);
    let view = PlayerOverview::from_player(&p);
    assert_eq!(view.id, p.id);
    assert_eq!(view.gamertag, "Tester");
    assert_eq!(view.matches_played, 2);
    assert_eq!(view.avg_kd, 1.5);
    assert_eq!(view.avg_win_loss, 1.0);
    assert_eq!(view.goal_standing, GoalStanding::Above);
}
