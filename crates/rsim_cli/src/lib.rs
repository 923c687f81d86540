//! Batch harness
//!
//! Runs many headless matches and aggregates the results:
//! - per-game records, written as CSV
//! - win/draw counts and average scores per composition
//! - a sweep over every pair of legal squad compositions

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use rsim_core::engine::config::{EngineConfig, MatchConfig, SquadConfig};
use rsim_core::engine::match_sim::{Match, MatchSummary, Outcome};

/// One CSV row per game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_number: u32,
    pub seed: u64,
    pub red_defenders: u8,
    pub red_attackers: u8,
    pub blue_defenders: u8,
    pub blue_attackers: u8,
    pub red_score: u32,
    pub blue_score: u32,
    pub winner: String,
    pub red_shots: u32,
    pub blue_shots: u32,
    pub red_attacker_goals: u32,
    pub blue_attacker_goals: u32,
    pub collisions: u32,
}

impl GameRecord {
    pub fn from_summary(game_number: u32, summary: &MatchSummary) -> Self {
        Self {
            game_number,
            seed: summary.seed,
            red_defenders: summary.red_squad.defenders,
            red_attackers: summary.red_squad.attackers,
            blue_defenders: summary.blue_squad.defenders,
            blue_attackers: summary.blue_squad.attackers,
            red_score: summary.red_score,
            blue_score: summary.blue_score,
            winner: summary.outcome.to_string(),
            red_shots: summary.stats.red.shots.total(),
            blue_shots: summary.stats.blue.shots.total(),
            red_attacker_goals: summary.stats.red.attacker_goals(),
            blue_attacker_goals: summary.stats.blue.attacker_goals(),
            collisions: summary.stats.collisions,
        }
    }
}

/// Aggregate over one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_games: u32,
    pub red_wins: u32,
    pub blue_wins: u32,
    pub draws: u32,
    pub average_red_score: f64,
    pub average_blue_score: f64,
    pub average_collisions: f64,
}

impl BatchSummary {
    pub fn from_records(records: &[GameRecord]) -> Self {
        let count = |outcome: Outcome| records.iter().filter(|r| r.winner == outcome.to_string()).count() as u32;
        let mean = |f: fn(&GameRecord) -> u32| {
            if records.is_empty() {
                0.0
            } else {
                records.iter().map(|r| f(r) as f64).sum::<f64>() / records.len() as f64
            }
        };
        Self {
            total_games: records.len() as u32,
            red_wins: count(Outcome::RedWin),
            blue_wins: count(Outcome::BlueWin),
            draws: count(Outcome::Draw),
            average_red_score: mean(|r: &GameRecord| r.red_score),
            average_blue_score: mean(|r: &GameRecord| r.blue_score),
            average_collisions: mean(|r: &GameRecord| r.collisions),
        }
    }

    pub fn percent(&self, n: u32) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            n as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// Everything a batch produced, with run metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub red_squad: SquadConfig,
    pub blue_squad: SquadConfig,
    pub base_seed: u64,
    pub duration_s: f32,
    /// RFC3339
    pub created_at: String,
    pub summary: BatchSummary,
    pub games: Vec<GameRecord>,
}

/// Batch parameters shared by `batch` and `sweep`
#[derive(Debug, Clone)]
pub struct BatchSettings {
    pub games: u32,
    pub base_seed: u64,
    pub duration_s: f32,
    pub engine: EngineConfig,
}

/// Play `settings.games` matches of one pairing. Game `i` uses seed
/// `base_seed + i`, so any single game can be replayed with `run`.
pub fn run_batch(red: SquadConfig, blue: SquadConfig, settings: &BatchSettings) -> Result<BatchReport> {
    let mut games = Vec::with_capacity(settings.games as usize);
    for i in 0..settings.games {
        let config = MatchConfig::new(red, blue)
            .with_seed(settings.base_seed.wrapping_add(i as u64))
            .with_duration(settings.duration_s)
            .with_engine(settings.engine.clone());
        let mut sim = Match::new(config).context("Invalid match configuration")?;
        let summary = sim.run_to_completion();
        games.push(GameRecord::from_summary(i + 1, &summary));
    }

    Ok(BatchReport {
        red_squad: red,
        blue_squad: blue,
        base_seed: settings.base_seed,
        duration_s: settings.duration_s,
        created_at: chrono::Utc::now().to_rfc3339(),
        summary: BatchSummary::from_records(&games),
        games,
    })
}

/// One row of a sweep table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub red_defenders: u8,
    pub red_attackers: u8,
    pub blue_defenders: u8,
    pub blue_attackers: u8,
    pub games: u32,
    pub red_wins: u32,
    pub blue_wins: u32,
    pub draws: u32,
    pub average_red_score: f64,
    pub average_blue_score: f64,
}

/// Every (red, blue) composition pair, one batch each
pub fn run_sweep(settings: &BatchSettings) -> Result<Vec<SweepRow>> {
    let mut rows = Vec::new();
    for red in SquadConfig::all() {
        for blue in SquadConfig::all() {
            let report = run_batch(red, blue, settings)?;
            let s = &report.summary;
            rows.push(SweepRow {
                red_defenders: red.defenders,
                red_attackers: red.attackers,
                blue_defenders: blue.defenders,
                blue_attackers: blue.attackers,
                games: s.total_games,
                red_wins: s.red_wins,
                blue_wins: s.blue_wins,
                draws: s.draws,
                average_red_score: s.average_red_score,
                average_blue_score: s.average_blue_score,
            });
        }
    }
    Ok(rows)
}

// ============================================================================
// Output
// ============================================================================

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    ensure_parent(path)?;
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("Failed to create CSV: {}", path.display()))?;
    for row in rows {
        writer.serialize(row).context("Failed to write CSV row")?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_game_records(path: &Path) -> Result<Vec<GameRecord>> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open CSV: {}", path.display()))?;
    let records = reader.deserialize().collect::<std::result::Result<Vec<GameRecord>, _>>()?;
    Ok(records)
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("Failed to write JSON: {}", path.display()))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    Ok(())
}

/// Load engine tuning: a JSON file wins over a named profile, which wins
/// over `RSIM_PROFILE`.
pub fn load_engine(config_path: Option<&Path>, profile: Option<&str>) -> Result<EngineConfig> {
    if let Some(path) = config_path {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {}", path.display()))?;
        return EngineConfig::from_json(&json).context("Invalid engine config");
    }
    match profile {
        Some(name) => EngineConfig::from_profile(name)
            .with_context(|| format!("Unknown profile '{}' (expected realistic, arcade or test)", name)),
        None => Ok(EngineConfig::from_env_or_default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn settings(games: u32) -> BatchSettings {
        BatchSettings { games, base_seed: 100, duration_s: 3.0, engine: EngineConfig::test() }
    }

    #[test]
    fn test_batch_counts_add_up() -> Result<()> {
        let report = run_batch(SquadConfig::new(1, 2), SquadConfig::new(2, 1), &settings(4))?;
        let s = &report.summary;
        assert_eq!(s.total_games, 4);
        assert_eq!(s.red_wins + s.blue_wins + s.draws, 4);
        assert_eq!(report.games[3].seed, 103);
        assert_eq!(report.games[0].game_number, 1);
        Ok(())
    }

    #[test]
    fn test_invalid_squad_is_an_error() {
        let err = run_batch(SquadConfig::new(2, 2), SquadConfig::new(2, 1), &settings(1)).unwrap_err();
        assert!(err.to_string().contains("Invalid match configuration"));
    }

    #[test]
    fn test_csv_round_trip() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("out/games.csv");
        let report = run_batch(SquadConfig::new(0, 3), SquadConfig::new(3, 0), &settings(2))?;

        write_csv(&path, &report.games)?;
        let loaded = read_game_records(&path)?;
        assert_eq!(loaded, report.games);
        Ok(())
    }

    #[test]
    fn test_summary_json_written() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("summary.json");
        let report = run_batch(SquadConfig::new(1, 2), SquadConfig::new(1, 2), &settings(1))?;
        write_json(&path, &report)?;

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)?;
        assert_eq!(value["summary"]["total_games"], 1);
        assert!(value["created_at"].as_str().is_some());
        Ok(())
    }

    #[test]
    fn test_summary_from_records() {
        let mut a = GameRecord::from_summary(
            1,
            &Match::new(MatchConfig::default().with_duration(0.1)).unwrap().run_to_completion(),
        );
        a.red_score = 2;
        a.blue_score = 0;
        a.winner = Outcome::RedWin.to_string();
        let mut b = a.clone();
        b.red_score = 1;
        b.blue_score = 1;
        b.winner = Outcome::Draw.to_string();

        let s = BatchSummary::from_records(&[a, b]);
        assert_eq!((s.red_wins, s.blue_wins, s.draws), (1, 0, 1));
        assert_eq!(s.average_red_score, 1.5);
        assert_eq!(s.percent(s.draws), 50.0);
        assert_eq!(BatchSummary::from_records(&[]).average_red_score, 0.0);
    }

    #[test]
    fn test_sweep_covers_all_pairs() -> Result<()> {
        let rows = run_sweep(&BatchSettings { duration_s: 0.5, ..settings(1) })?;
        assert_eq!(rows.len(), 16);
        assert!(rows.iter().all(|r| r.red_defenders + r.red_attackers == 3));
        Ok(())
    }

    #[test]
    fn test_load_engine_sources() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("engine.json");
        fs::write(&path, r#"{"player": {"attacker_speed": 5.5}}"#)?;

        assert_eq!(load_engine(Some(&path), Some("arcade"))?.player.attacker_speed, 5.5);
        assert_eq!(load_engine(None, Some("arcade"))?.player.attacker_speed, 5.0);
        assert!(load_engine(None, Some("bogus")).is_err());
        Ok(())
    }
}
