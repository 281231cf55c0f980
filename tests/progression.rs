use chrono::NaiveDate;

use squad_analytics::model::{MatchRecord, PlayerAppearance, PlayerStatus};
use squad_analytics::progression::{
    MatchContribution, compute_progression, cumulative_cost, level_cost, progression_for_player,
    progression_from_xp,
};

#[test]
fn zero_xp_is_level_one_with_no_progress() {
    let state = compute_progression(&[]);
    assert_eq!(state.total_xp, 0);
    assert_eq!(state.level, 1);
    assert_eq!(state.current_level_xp, 0);
    assert_eq!(state.next_level_xp, 100);
    assert_eq!(state.progress_percent, 0.0);
}

#[test]
fn exact_cumulative_cost_lands_on_the_new_level() {
    for n in 1..=12u32 {
        let total = cumulative_cost(n + 1);
        let state = progression_from_xp(total);
        assert_eq!(state.level, n + 1, "total {total}");
        assert_eq!(state.current_level_xp, 0);
        assert_eq!(state.next_level_xp, level_cost(n + 1));

        let short = progression_from_xp(total - 1);
        assert_eq!(short.level, n);
        assert_eq!(short.current_level_xp, level_cost(n) - 1);
    }
}

#[test]
fn costs_grow_geometrically() {
    assert_eq!(level_cost(1), 100);
    assert_eq!(level_cost(2), 120);
    assert_eq!(level_cost(3), 144);
    assert_eq!(level_cost(4), 172);
    assert_eq!(level_cost(5), 207);
    assert_eq!(level_cost(6), 248);
    assert_eq!(cumulative_cost(5), 100 + 120 + 144 + 172);
    for level in 2..15u32 {
        let ratio = level_cost(level + 1) as f64 / level_cost(level) as f64;
        assert!((ratio - 1.2).abs() < 0.02, "level {level}: {ratio}");
    }
}

#[test]
fn xp_per_match_counts_goals_and_assists() {
    let contributions = [
        MatchContribution::new(1, 0),
        MatchContribution::new(0, 2),
        MatchContribution::new(0, 0),
    ];
    let state = compute_progression(&contributions);
    assert_eq!(state.total_xp, 15 + 16 + 10);
    assert_eq!(state.level, 1);
    assert!((state.progress_percent - 41.0).abs() < 1e-9);
}

#[test]
fn progress_is_capped_and_bounded() {
    for xp in (0..5_000u64).step_by(37) {
        let state = progression_from_xp(xp);
        assert!(state.progress_percent >= 0.0 && state.progress_percent <= 100.0);
        assert!(state.current_level_xp < state.next_level_xp);
        assert_eq!(cumulative_cost(state.level) + state.current_level_xp, xp);
    }
}

#[test]
fn player_progression_skips_matches_without_the_player() {
    let date = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let matches = vec![
        MatchRecord::new("m1", date, "Squad FC", "Rovers", 3, 0).with_player(
            PlayerAppearance::new("Ana", PlayerStatus::Starter)
                .with_goals(2)
                .with_assists(1),
        ),
        MatchRecord::new("m2", date, "Squad FC", "United", 1, 0)
            .with_player(PlayerAppearance::new("Bea", PlayerStatus::Starter).with_goals(1)),
    ];
    let ana = progression_for_player(&matches, "Ana");
    assert_eq!(ana.total_xp, 10 + 10 + 3);
    assert_eq!(progression_for_player(&matches, "Nobody").total_xp, 0);
    assert_eq!(progression_for_player(&matches, "").total_xp, 0);
}
