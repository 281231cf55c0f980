use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use squad_analytics::metrics::PlayerMetric;
use squad_analytics::model::parse_matches_json;
use squad_analytics::rank_tracker::RankMovement;
use squad_analytics::sample_feed::{SeasonSpec, generate_season};
use squad_analytics::{AnalyticsConfig, AnalyticsSession, MatchRecord, SessionDelta};

const LEADERBOARDS: [PlayerMetric; 3] = [
    PlayerMetric::Goals,
    PlayerMetric::Assists,
    PlayerMetric::CleanSheets,
];

struct Args {
    source: Option<PathBuf>,
    player: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut source = None;
    let mut player = None;
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--sample" => source = None,
            "--player" => {
                player = Some(it.next().context("--player needs a name")?);
            }
            other if other.starts_with("--") => bail!("unknown flag {other}"),
            path => source = Some(PathBuf::from(path)),
        }
    }
    Ok(Args { source, player })
}

fn load_matches(source: Option<&PathBuf>) -> Result<Vec<MatchRecord>> {
    match source {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("read match log {}", path.display()))?;
            parse_matches_json(&raw)
        }
        None => Ok(generate_season(SeasonSpec::default())),
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let log_level = std::env::var("SQUAD_LOG").unwrap_or_else(|_| "warn".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let args = parse_args()?;
    let matches = load_matches(args.source.as_ref())?;
    let config = AnalyticsConfig::from_env();
    let mut session = AnalyticsSession::new(config);
    session.apply_delta(SessionDelta::LoadMatches(matches));

    let summary = session.summary();
    println!(
        "Played {}  W{} D{} L{}  GF {} GA {} ({:+})  clean sheets {}  effectiveness {:.1}%",
        summary.matches_played,
        summary.wins,
        summary.draws,
        summary.losses,
        summary.goals_for,
        summary.goals_against,
        summary.goal_difference,
        summary.clean_sheets,
        summary.effectiveness,
    );

    for metric in LEADERBOARDS {
        println!();
        println!("{}", metric.label());
        for row in session.player_leaderboard(metric) {
            println!(
                "{:>3} {} {:<16} {:>6}",
                row.rank + 1,
                movement_marker(row.movement),
                row.item.name,
                metric.value(&row.item)
            );
        }
    }

    println!();
    println!("Top pairs");
    for row in session.pair_ranking().into_iter().take(5) {
        let pair = &row.item;
        println!(
            "{:>3} {} {} + {}  impact {:.2}  ({} together, {:.0}% eff)",
            row.rank + 1,
            movement_marker(row.movement),
            pair.player_a,
            pair.player_b,
            pair.impact_score,
            pair.matches_together,
            pair.effectiveness
        );
    }

    if let Some(name) = args.player.as_deref() {
        let p = session.progression_for(name);
        println!();
        println!(
            "{name}: level {} ({}/{} xp, {:.0}%)",
            p.level, p.current_level_xp, p.next_level_xp, p.progress_percent
        );
    }

    Ok(())
}

fn movement_marker(m: RankMovement) -> &'static str {
    match m {
        RankMovement::Up => "▲",
        RankMovement::Down => "▼",
        RankMovement::Stable => "=",
        RankMovement::New => "*",
    }
}
