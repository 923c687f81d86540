//! Match Controller
//!
//! Owns every player, the ball, the simulation clock and the seeded RNG,
//! and runs the fixed per-tick order:
//!
//! ```text
//! advance clock
//!   → pursuit assignment
//!   → collisions / fall recovery
//!   → per-player steering (+ ball touches and kicks)
//!   → ball integration
//!   → goal / out-of-bounds / stall checks  (each: reset after stoppage)
//!   → full-time check
//! ```
//!
//! Nothing in a tick can fail. Configuration problems surface from
//! [`Match::new`], [`Match::change_role`] and [`Match::start_throw_in`].

pub mod formation;
pub mod observer;
pub mod summary;

pub use observer::{EventRecorder, MatchObserver, NullObserver};
pub use summary::{MatchSummary, Outcome};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::engine::ball::Ball;
use crate::engine::collision::CollisionManager;
use crate::engine::config::{EngineConfig, MatchConfig};
use crate::engine::events::MatchEvent;
use crate::engine::field::Field;
use crate::engine::passing::KickKind;
use crate::engine::physics_constants::field;
use crate::engine::player::{Player, Roster};
use crate::engine::pursuit;
use crate::engine::snapshot::{BallSnapshot, MatchSnapshot, PlayerSnapshot};
use crate::engine::stats::MatchStats;
use crate::engine::steering;
use crate::engine::timestep::SimClock;
use crate::engine::types::{Role, Team};
use crate::error::{Result, SimError};

/// Coarse match state reported to front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameState {
    #[default]
    Playing,
    /// At least one player is holding for a throw-in
    ThrowIn,
}

pub struct Match {
    config: MatchConfig,
    field: Field,
    players: Vec<Player>,
    ball: Ball,
    clock: SimClock,
    rng: ChaCha8Rng,
    collisions: CollisionManager,
    stats: MatchStats,
    game_over: bool,
    running: bool,
}

impl Match {
    /// Validate `config` and set up the kick-off. An invalid squad or out
    /// of range tuning value rejects the match before anything is built.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.check()?;

        let players = formation::build_roster(&config);
        let ball = Ball::new(field::CENTER, &config.engine.ball, 0.0);

        log::info!(
            "New match: red {}D/{}A vs blue {}D/{}A, {:.0}s, seed {}",
            config.red.defenders,
            config.red.attackers,
            config.blue.defenders,
            config.blue.attackers,
            config.duration_s,
            config.seed
        );

        Ok(Self {
            field: config.engine.player.field(),
            players,
            ball,
            clock: SimClock::new(config.tick_dt),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            collisions: CollisionManager::new(&config.engine.collision),
            stats: MatchStats::default(),
            game_over: false,
            running: true,
            config,
        })
    }

    // ========================================================================
    // Tick
    // ========================================================================

    /// Advance one tick. After full time this is a no-op returning no events.
    pub fn tick(&mut self) -> Vec<MatchEvent> {
        let mut events = Vec::new();
        if self.game_over {
            return events;
        }

        self.clock.advance();
        let now = self.clock.now();
        let engine: &EngineConfig = &self.config.engine;

        pursuit::assign_pursuers(&mut self.players, self.ball.position, engine.player.pursuit_zone_buffer);

        let report = self.collisions.update(&mut self.players, now, &engine.collision, &mut self.rng);
        events.extend(report.collisions.into_iter().map(|position| MatchEvent::Collision { position, at: now }));
        self.stats.collisions = self.collisions.collision_count();

        for idx in 0..self.players.len() {
            let Some((player, roster)) = Roster::split(&mut self.players, idx) else {
                continue;
            };
            let Some(kick) = steering::update_player(player, roster, &mut self.ball, now, engine, &mut self.rng)
            else {
                continue;
            };
            if kick.kind == KickKind::Shot {
                self.stats.record_shot(player.team, player.role);
                events.push(MatchEvent::Shot { team: player.team, player_id: player.id, at: now });
            }
        }

        self.ball.integrate(now, &self.field);

        if let Some(stoppage) = self.check_stoppage(now) {
            events.push(stoppage);
            self.reset_after_stoppage(now);
        }

        if now >= self.config.duration_s {
            self.game_over = true;
            self.running = false;
            let (red, blue) = self.score();
            log::info!("Full time: red {} - {} blue", red, blue);
            events.push(MatchEvent::FullTime { red, blue, at: now });
        }

        events
    }

    /// Goal first, then out of bounds, then stall
    fn check_stoppage(&mut self, now: f32) -> Option<MatchEvent> {
        if let Some(team) = self.field.scoring_team_at(self.ball.position) {
            let scorer = self.ball.last_touch();
            self.stats.record_goal(team, scorer);
            let (red, blue) = self.score();
            log::info!(
                "GOAL {} at {:.1}s ({:?}), score {}-{}",
                team,
                now,
                scorer.map(|t| t.role),
                red,
                blue
            );
            return Some(MatchEvent::Goal { team, scorer, at: now });
        }

        if let Some(position) = self.ball.out_of_bounds() {
            log::info!("Out of bounds at ({:.0}, {:.0}), resetting", position.0, position.1);
            return Some(MatchEvent::OutOfBounds { position, at: now });
        }

        if self.ball.is_stuck(now) {
            log::info!("Ball stalled since {:.1}s, resetting", self.ball.last_movement_at());
            return Some(MatchEvent::BallStalled { at: now });
        }

        None
    }

    /// Ball to the centre spot, everyone home and standing
    fn reset_after_stoppage(&mut self, now: f32) {
        self.ball.reset(field::CENTER, now);
        for p in &mut self.players {
            p.return_home();
            p.stand_up();
        }
        log::debug!("Reset after stoppage at {:.2}s", now);
    }

    // ========================================================================
    // Loops
    // ========================================================================

    /// Tick until full time or until `observer` asks to stop
    pub fn run_with<O: MatchObserver + ?Sized>(&mut self, observer: &mut O) -> MatchSummary {
        self.running = true;
        while !self.game_over {
            if observer.stop_requested() {
                log::info!("Stop requested at {:.2}s", self.elapsed());
                self.running = false;
                break;
            }
            let events = self.tick();
            observer.on_events(&events);
            if observer.wants_snapshots() {
                observer.on_tick(&self.snapshot());
            }
        }
        self.summary()
    }

    pub fn run_to_completion(&mut self) -> MatchSummary {
        self.run_with(&mut NullObserver)
    }

    // ========================================================================
    // Configuration changes
    // ========================================================================

    /// Swap a player between defender and attacker. The goalkeeper slot is
    /// fixed, so the squad rule keeps holding.
    pub fn change_role(&mut self, index: usize, role: Role) -> Result<()> {
        let len = self.players.len();
        let player = self.players.get_mut(index).ok_or(SimError::PlayerIndexOutOfRange { index, len })?;
        if player.role == role {
            return Ok(());
        }
        if player.role == Role::Goalkeeper || role == Role::Goalkeeper {
            return Err(SimError::IllegalRoleChange { from: player.role, to: role });
        }

        let home = (formation::role_line_x(player.team, role), player.home.1);
        log::info!("{} #{} changes role {} -> {}", player.team, player.id, player.role, role);
        player.set_role(role, home, &self.config.engine.player);
        formation::assign_marking(&mut self.players, &self.config.engine.player);
        Ok(())
    }

    /// Put a player on hold for a scripted throw. The controller itself
    /// restarts out-of-bounds balls with a full reset instead.
    pub fn start_throw_in(&mut self, index: usize) -> Result<()> {
        let len = self.players.len();
        let now = self.clock.now();
        let player = self.players.get_mut(index).ok_or(SimError::PlayerIndexOutOfRange { index, len })?;
        player.begin_throw_in(now);
        log::debug!("{} #{} takes a throw-in", player.team, player.id);
        Ok(())
    }

    /// Move a player (clamped into its zone), for scenario set-up
    pub fn place_player(&mut self, index: usize, position: (f32, f32)) -> Result<()> {
        let len = self.players.len();
        let player = self.players.get_mut(index).ok_or(SimError::PlayerIndexOutOfRange { index, len })?;
        player.place(position);
        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Direct ball access, for scenario set-up
    pub fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    /// `(red, blue)`
    pub fn score(&self) -> (u32, u32) {
        (self.stats.red.goals, self.stats.blue.goals)
    }

    pub fn elapsed(&self) -> f32 {
        self.clock.now()
    }

    pub fn remaining(&self) -> f32 {
        (self.config.duration_s - self.elapsed()).max(0.0)
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    pub fn collision_count(&self) -> u32 {
        self.collisions.collision_count()
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> GameState {
        if self.players.iter().any(Player::is_throwing_in) {
            GameState::ThrowIn
        } else {
            GameState::Playing
        }
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        let now = self.clock.now();
        let recovery = self.config.engine.collision.recovery_duration_s;
        let (red_score, blue_score) = self.score();
        MatchSnapshot {
            tick: self.clock.ticks(),
            elapsed_s: now,
            remaining_s: self.remaining(),
            red_score,
            blue_score,
            state: self.state(),
            game_over: self.game_over,
            ball: BallSnapshot::from(&self.ball),
            players: self.players.iter().map(|p| PlayerSnapshot::capture(p, now, recovery)).collect(),
            collision_count: self.collisions.collision_count(),
            recent_collisions: self.collisions.recent().copied().collect(),
        }
    }

    pub fn summary(&self) -> MatchSummary {
        let (red_score, blue_score) = self.score();
        MatchSummary {
            seed: self.config.seed,
            red_squad: self.config.red,
            blue_squad: self.config.blue,
            red_score,
            blue_score,
            outcome: Outcome::from_score(red_score, blue_score),
            elapsed_s: self.elapsed(),
            ticks: self.clock.ticks(),
            completed: self.game_over,
            stats: self.stats,
        }
    }

    /// Players of one team, in roster order
    pub fn team(&self, team: Team) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(move |p| p.team == team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ball::Touch;
    use crate::engine::config::SquadConfig;

    fn quick_match() -> Match {
        let config = MatchConfig::default().with_engine(EngineConfig::test()).with_seed(3);
        Match::new(config).unwrap()
    }

    #[test]
    fn test_invalid_squad_rejected() {
        let config = MatchConfig::new(SquadConfig::new(2, 2), SquadConfig::new(1, 2));
        let err = Match::new(config).err().unwrap();
        assert!(matches!(err, SimError::InvalidSquad { team: Team::Red, .. }));
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let mut config = MatchConfig::default();
        config.engine.player.smoothing = 2.0;
        assert!(matches!(Match::new(config), Err(SimError::InvalidConfig(_))));
    }

    #[test]
    fn test_kickoff_layout() {
        let m = quick_match();
        assert_eq!(m.players().len(), 8);
        assert_eq!(m.ball().position, field::CENTER);
        assert_eq!(m.score(), (0, 0));
        assert_eq!(m.state(), GameState::Playing);
        assert!(m.is_running());
    }

    #[test]
    fn test_goal_scored_and_reset() {
        let mut m = quick_match();
        m.ball_mut().position = (880.0, 300.0);
        m.ball_mut().velocity = (10.0, 0.0);
        m.ball_mut().register_touch(Touch { player_id: 2, team: Team::Red, role: Role::Attacker });

        let events = m.tick();
        assert!(events.iter().any(|e| matches!(e, MatchEvent::Goal { team: Team::Red, .. })));
        assert_eq!(m.score(), (1, 0));
        assert_eq!(m.stats().red.attacker_goals(), 1);
        assert_eq!(m.ball().position, field::CENTER);
        assert_eq!(m.ball().velocity, (0.0, 0.0));
        assert!(m.players().iter().all(|p| p.position == p.home));
    }

    #[test]
    fn test_out_of_bounds_resets() {
        let mut m = quick_match();
        m.ball_mut().position = (450.0, 590.0);
        m.ball_mut().velocity = (0.0, 8.0);
        let events = m.tick();
        assert!(events.iter().any(|e| matches!(e, MatchEvent::OutOfBounds { .. })));
        assert_eq!(m.ball().position, field::CENTER);
        assert!(m.ball().out_of_bounds().is_none());
    }

    #[test]
    fn test_full_time_freezes_match() {
        let config = MatchConfig::default().with_engine(EngineConfig::test()).with_duration(0.5);
        let mut m = Match::new(config).unwrap();
        let summary = m.run_to_completion();
        assert!(summary.completed);
        assert!(m.is_game_over());
        assert!(!m.is_running());
        assert_eq!(m.ticks(), 30);
        assert_eq!(m.remaining(), 0.0);

        let before = m.snapshot();
        assert!(m.tick().is_empty());
        assert_eq!(m.snapshot(), before);
    }

    #[test]
    fn test_stop_requested_halts_loop() {
        let mut m = quick_match();
        let mut recorder = EventRecorder::with_tick_limit(10);
        let summary = m.run_with(&mut recorder);
        assert_eq!(m.ticks(), 10);
        assert!(!summary.completed);
        assert!(!m.is_running());
    }

    #[test]
    fn test_change_role_rules() {
        let mut m = quick_match();
        // Default red squad: 0 GK, 1 DEF, 2-3 ATT
        assert!(matches!(
            m.change_role(0, Role::Attacker),
            Err(SimError::IllegalRoleChange { from: Role::Goalkeeper, .. })
        ));
        assert!(matches!(
            m.change_role(1, Role::Goalkeeper),
            Err(SimError::IllegalRoleChange { .. })
        ));
        assert!(matches!(m.change_role(42, Role::Attacker), Err(SimError::PlayerIndexOutOfRange { .. })));

        m.change_role(1, Role::Attacker).unwrap();
        let p = &m.players()[1];
        assert_eq!(p.role, Role::Attacker);
        assert_eq!(p.home.0, formation::role_line_x(Team::Red, Role::Attacker));
        assert!(p.marking.is_none());
    }

    #[test]
    fn test_throw_in_state() {
        let mut m = quick_match();
        m.start_throw_in(1).unwrap();
        assert_eq!(m.state(), GameState::ThrowIn);
        assert!(m.start_throw_in(99).is_err());
    }

    #[test]
    fn test_seeded_matches_are_deterministic() {
        let config = MatchConfig::default().with_seed(11).with_duration(5.0);
        let a = Match::new(config.clone()).unwrap().run_to_completion();
        let b = Match::new(config).unwrap().run_to_completion();
        assert_eq!(a, b);
    }
}
