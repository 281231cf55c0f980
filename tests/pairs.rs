use chrono::NaiveDate;

use squad_analytics::model::{MatchRecord, PlayerAppearance, PlayerStatus};
use squad_analytics::pairs::{PairConfig, analyze_pairs, top_players};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, n).unwrap()
}

fn p(name: &str) -> PlayerAppearance {
    PlayerAppearance::new(name, PlayerStatus::Starter)
}

fn win_draw_loss(first: &str, second: &str) -> Vec<MatchRecord> {
    vec![
        MatchRecord::new("m1", day(1), "Squad FC", "Rovers", 2, 1)
            .with_player(p(first).with_goals(1).with_minutes(90))
            .with_player(p(second).with_minutes(60)),
        MatchRecord::new("m2", day(8), "Squad FC", "United", 1, 1)
            .with_player(p(first).with_minutes(30))
            .with_player(p(second).with_goals(1).with_minutes(90)),
        MatchRecord::new("m3", day(15), "Squad FC", "City", 0, 3)
            .with_player(p(first).with_minutes(90))
            .with_player(p(second).with_minutes(90)),
    ]
}

#[test]
fn win_draw_loss_pair_scores() {
    let result = analyze_pairs(&win_draw_loss("Ana", "Bea"), &PairConfig::default());
    assert_eq!(result.pairs.len(), 1);
    let pair = &result.pairs[0];
    assert_eq!((pair.player_a.as_str(), pair.player_b.as_str()), ("Ana", "Bea"));
    assert_eq!(pair.matches_together, 3);
    assert_eq!(pair.points, 4);
    assert_eq!((pair.wins, pair.draws, pair.losses), (1, 1, 1));
    assert_eq!(pair.goals, 2);
    assert_eq!(pair.minutes_together, 60 + 30 + 90);

    let expected = 1.5 * (4.0 / 3.0) + 2.0 / 3.0;
    assert!((pair.impact_score - expected).abs() < 1e-9);
    assert!((pair.impact_score - 2.667).abs() < 1e-3);
    assert!((pair.win_rate - 100.0 / 3.0).abs() < 1e-9);
    assert!((pair.effectiveness - 400.0 / 9.0).abs() < 1e-9);
}

#[test]
fn impact_is_symmetric_in_listing_order() {
    let forward = analyze_pairs(&win_draw_loss("Ana", "Bea"), &PairConfig::default());
    let backward = analyze_pairs(&win_draw_loss("Bea", "Ana"), &PairConfig::default());
    assert_eq!(forward.pairs[0].key(), backward.pairs[0].key());
    assert_eq!(forward.pairs[0].impact_score, backward.pairs[0].impact_score);
}

#[test]
fn fewer_than_three_matches_gives_nothing() {
    let mut matches = win_draw_loss("Ana", "Bea");
    matches.pop();
    let result = analyze_pairs(&matches, &PairConfig::default());
    assert!(result.pairs.is_empty());
    assert!(result.top_players.is_empty());
}

#[test]
fn pairs_need_more_than_two_shared_matches() {
    let mut matches = win_draw_loss("Ana", "Bea");
    matches[0] = matches[0].clone().with_player(p("Caro"));
    matches[1] = matches[1].clone().with_player(p("Caro"));

    let result = analyze_pairs(&matches, &PairConfig::default());
    assert_eq!(result.pairs.len(), 1);
    assert!(result.pairs.iter().all(|pair| !pair.involves("Caro")));
    assert!(result.top_players.contains(&"Caro".to_string()));
}

#[test]
fn equal_scores_keep_encounter_order() {
    // Three players always together in wins: every pair scores the same.
    let matches: Vec<MatchRecord> = (1..=3)
        .map(|n| {
            MatchRecord::new(format!("m{n}"), day(n), "Squad FC", "Rovers", 1, 0)
                .with_player(p("Cid"))
                .with_player(p("Abe"))
                .with_player(p("Bo"))
        })
        .collect();
    let keys: Vec<String> = analyze_pairs(&matches, &PairConfig::default())
        .pairs
        .iter()
        .map(|pair| pair.key())
        .collect();
    assert_eq!(keys, vec!["Abe|Cid", "Bo|Cid", "Abe|Bo"]);
}

#[test]
fn sorted_by_impact_descending() {
    let mut matches = win_draw_loss("Ana", "Bea");
    for (i, m) in matches.iter_mut().enumerate() {
        let scorer = p("Caro").with_goals(2).with_assists(u32::from(i == 0));
        m.players.push(scorer);
    }
    let result = analyze_pairs(&matches, &PairConfig::default());
    assert_eq!(result.pairs.len(), 3);
    assert!(
        result
            .pairs
            .windows(2)
            .all(|w| w[0].impact_score >= w[1].impact_score)
    );
    assert!(result.pairs[0].involves("Caro"));
}

#[test]
fn unnamed_players_never_pair() {
    let matches: Vec<MatchRecord> = win_draw_loss("Ana", "Bea")
        .into_iter()
        .map(|m| m.with_player(p("")))
        .collect();
    let result = analyze_pairs(&matches, &PairConfig::default());
    assert_eq!(result.pairs.len(), 1);
}

#[test]
fn top_players_are_capped_and_ordered_by_appearances() {
    let mut matches = Vec::new();
    for n in 1..=3u32 {
        let mut m = MatchRecord::new(format!("m{n}"), day(n), "Squad FC", "Rovers", 1, 0);
        for i in 0..14u32 {
            // Players with higher numbers only show up in later matches.
            if i < 10 + n {
                m = m.with_player(p(&format!("P{i:02}")));
            }
        }
        matches.push(m);
    }
    let top = top_players(&matches, 12);
    assert_eq!(top.len(), 12);
    assert_eq!(top[0], "P00");
    assert_eq!(top[11], "P11");
    assert!(!top.contains(&"P12".to_string()));
}

#[test]
fn names_containing_the_separator_stay_distinct_pairs() {
    let matches: Vec<MatchRecord> = (1..=3)
        .map(|n| {
            MatchRecord::new(format!("m{n}"), day(n), "Squad FC", "Rovers", 1, 0)
                .with_player(p("A|B").with_goals(1))
                .with_player(p("C"))
                .with_player(p("A"))
                .with_player(p("B|C"))
        })
        .collect();
    let result = analyze_pairs(&matches, &PairConfig::default());
    assert_eq!(result.pairs.len(), 6);
    assert!(result.pairs.iter().all(|pair| pair.matches_together == 3));

    let find = |a: &str, b: &str| {
        result
            .pairs
            .iter()
            .find(|pair| pair.player_a == a && pair.player_b == b)
            .expect("pair present")
    };
    assert_eq!(find("A|B", "C").goals, 3);
    assert_eq!(find("A", "B|C").goals, 0);
    assert_ne!(find("A|B", "C").key(), find("A", "B|C").key());

    let mut keys: Vec<String> = result.pairs.iter().map(|pair| pair.key()).collect();
    keys.sort();
    keys.dedup();
    assert_eq!(keys.len(), 6);
}

#[test]
fn huge_goal_counts_saturate_instead_of_overflowing() {
    let matches: Vec<MatchRecord> = (1..=3)
        .map(|n| {
            MatchRecord::new(format!("m{n}"), day(n), "Squad FC", "Rovers", 1, 0)
                .with_player(p("Ana").with_goals(u32::MAX).with_minutes(u32::MAX))
                .with_player(p("Bea").with_goals(u32::MAX).with_minutes(u32::MAX))
        })
        .collect();
    let result = analyze_pairs(&matches, &PairConfig::default());
    assert_eq!(result.pairs.len(), 1);
    assert_eq!(result.pairs[0].goals, u32::MAX);
    assert_eq!(result.pairs[0].minutes_together, u32::MAX);
}
