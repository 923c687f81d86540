//! Collision & fall recovery
//!
//! Robots that get too close knock each other over. Both players fall
//! together, stay down for the recovery duration, then stand up and are
//! nudged away from whoever is still crowding them.
//!
//! Per tick, in order:
//! 1. recover every player whose timer has expired (and separate it)
//! 2. scan players in shuffled order for new contacts
//! 3. merge falls that happened close together into one collision event

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f32::consts::TAU;

use crate::engine::config::CollisionConfig;
use crate::engine::geometry::{angle_to_direction, centroid, distance, normalize};
use crate::engine::player::Player;
use crate::engine::player_state::Condition;

/// Marker left where a collision happened (renderer hint)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionRecord {
    pub position: (f32, f32),
    pub at: f32,
}

/// What changed during one [`CollisionManager::update`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Roster indices that stood up this tick
    pub recovered: Vec<usize>,
    /// Deduplicated collision positions detected this tick
    pub collisions: Vec<(f32, f32)>,
}

#[derive(Debug, Clone)]
pub struct CollisionManager {
    collision_count: u32,
    recent: VecDeque<CollisionRecord>,
    history_len: usize,
}

impl CollisionManager {
    pub fn new(config: &CollisionConfig) -> Self {
        Self {
            collision_count: 0,
            recent: VecDeque::new(),
            history_len: config.history_len,
        }
    }

    pub fn collision_count(&self) -> u32 {
        self.collision_count
    }

    /// Most recent collisions, oldest first
    pub fn recent(&self) -> impl Iterator<Item = &CollisionRecord> {
        self.recent.iter()
    }

    pub fn update<R: Rng + ?Sized>(
        &mut self,
        players: &mut [Player],
        now: f32,
        config: &CollisionConfig,
        rng: &mut R,
    ) -> CollisionReport {
        let mut report = CollisionReport::default();

        for idx in 0..players.len() {
            let due = match players[idx].condition {
                Condition::Fallen { since, .. } => now - since >= config.recovery_duration_s,
                Condition::Active => false,
            };
            if due {
                players[idx].stand_up();
                separate_from_nearby(players, idx, config, rng);
                log::debug!("{} {} #{} recovered", players[idx].team, players[idx].role, players[idx].id);
                report.recovered.push(idx);
            }
        }

        let mut order: Vec<usize> = (0..players.len()).collect();
        order.shuffle(rng);

        for &idx in &order {
            if players[idx].is_fallen() {
                continue;
            }
            let Some(other) = find_contact(players, idx, config.collision_distance) else {
                continue;
            };

            players[idx].fall(now);
            players[other].fall(now);
            let at = players[idx].position;
            log::debug!("#{} and #{} collided at ({:.0}, {:.0})", players[idx].id, players[other].id, at.0, at.1);

            let merged = report.collisions.iter().any(|p| distance(*p, at) < config.dedup_radius);
            if !merged {
                report.collisions.push(at);
                self.record(at, now);
            }
        }

        report
    }

    fn record(&mut self, position: (f32, f32), at: f32) {
        self.collision_count += 1;
        if self.history_len == 0 {
            return;
        }
        if self.recent.len() == self.history_len {
            self.recent.pop_front();
        }
        self.recent.push_back(CollisionRecord { position, at });
    }
}

/// First standing player (other than `idx`) inside the collision distance
fn find_contact(players: &[Player], idx: usize, threshold: f32) -> Option<usize> {
    let me = players[idx].position;
    players
        .iter()
        .enumerate()
        .find(|(j, p)| *j != idx && !p.is_fallen() && distance(me, p.position) < threshold)
        .map(|(j, _)| j)
}

/// Push `idx` away from the centroid of everyone within the separation
/// distance. Coincident positions get a random escape direction.
fn separate_from_nearby<R: Rng + ?Sized>(players: &mut [Player], idx: usize, config: &CollisionConfig, rng: &mut R) {
    let me = players[idx].position;
    let crowd: Vec<(f32, f32)> = players
        .iter()
        .enumerate()
        .filter(|(j, p)| *j != idx && distance(me, p.position) < config.separation_distance)
        .map(|(_, p)| p.position)
        .collect();

    let Some(center) = centroid(&crowd) else {
        return;
    };
    let dir = normalize((me.0 - center.0, me.1 - center.1))
        .unwrap_or_else(|| angle_to_direction(rng.gen_range(0.0..TAU)));

    let push = config.separation_push;
    players[idx].place((me.0 + dir.0 * push, me.1 + dir.1 * push));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::PlayerConfig;
    use crate::engine::types::{Role, Team};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn attackers(positions: &[(f32, f32)]) -> Vec<Player> {
        let cfg = PlayerConfig::default();
        positions
            .iter()
            .enumerate()
            .map(|(i, p)| Player::new(i, Team::Red, Role::Attacker, *p, &cfg))
            .collect()
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_mutual_fall() {
        let config = CollisionConfig::default();
        let mut manager = CollisionManager::new(&config);
        let mut players = attackers(&[(600.0, 300.0), (601.0, 300.0), (700.0, 300.0)]);

        let report = manager.update(&mut players, 1.0, &config, &mut rng());
        assert!(players[0].is_fallen());
        assert!(players[1].is_fallen());
        assert!(!players[2].is_fallen());
        assert_eq!(report.collisions.len(), 1);
        assert_eq!(manager.collision_count(), 1);
        assert_eq!(manager.recent().count(), 1);
    }

    #[test]
    fn test_fallen_player_cannot_knock_over_others() {
        let config = CollisionConfig::default();
        let mut manager = CollisionManager::new(&config);
        let mut players = attackers(&[(600.0, 300.0), (601.0, 300.0)]);
        players[0].fall(0.5);

        manager.update(&mut players, 1.0, &config, &mut rng());
        assert!(!players[1].is_fallen());
        assert_eq!(manager.collision_count(), 0);
    }

    #[test]
    fn test_recovery_after_duration_and_separation() {
        let config = CollisionConfig::default();
        let mut manager = CollisionManager::new(&config);
        let mut players = attackers(&[(600.0, 300.0), (601.0, 300.0)]);
        manager.update(&mut players, 0.0, &config, &mut rng());

        let report = manager.update(&mut players, 1.9, &config, &mut rng());
        assert!(report.recovered.is_empty());
        assert!(players.iter().all(|p| p.is_fallen()));

        let report = manager.update(&mut players, 2.0, &config, &mut rng());
        assert_eq!(report.recovered, vec![0, 1]);
        assert!(players.iter().all(|p| !p.is_fallen()));
        // First to recover steps 35 units away from the other
        assert_eq!(players[0].position, (565.0, 300.0));
        assert!(distance(players[0].position, players[1].position) >= config.separation_distance);
        assert!(report.collisions.is_empty());
    }

    #[test]
    fn test_coincident_recovery_uses_random_direction() {
        let config = CollisionConfig::default();
        let mut players = attackers(&[(600.0, 300.0), (600.0, 300.0)]);
        players[0].fall(0.0);
        players[1].fall(0.0);
        let mut manager = CollisionManager::new(&config);

        manager.update(&mut players, 2.5, &config, &mut rng());
        let moved = distance(players[0].position, (600.0, 300.0));
        assert!((moved - config.separation_push).abs() < 1e-3);
    }

    #[test]
    fn test_separation_respects_zone() {
        let config = CollisionConfig::default();
        let mut players = attackers(&[(880.0, 300.0), (870.0, 300.0)]);
        players[0].fall(0.0);
        let mut manager = CollisionManager::new(&config);

        manager.update(&mut players, 2.0, &config, &mut rng());
        assert!(players[0].bounds().contains(players[0].position));
        assert_eq!(players[0].position.0, 880.0);
    }

    #[test]
    fn test_pileup_counts_once() {
        let config = CollisionConfig::default();
        let mut manager = CollisionManager::new(&config);
        let mut players = attackers(&[
            (600.0, 300.0),
            (601.0, 300.0),
            (610.0, 300.0),
            (611.0, 300.0),
            (800.0, 100.0),
            (800.5, 100.0),
        ]);

        let report = manager.update(&mut players, 1.0, &config, &mut rng());
        assert!(players.iter().all(|p| p.is_fallen()));
        assert_eq!(report.collisions.len(), 2);
        assert_eq!(manager.collision_count(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let config = CollisionConfig { history_len: 2, ..CollisionConfig::default() };
        let mut manager = CollisionManager::new(&config);
        for tick in 0..3 {
            let mut players = attackers(&[(600.0, 300.0), (601.0, 300.0)]);
            manager.update(&mut players, tick as f32, &config, &mut rng());
        }
        assert_eq!(manager.collision_count(), 3);
        let kept: Vec<f32> = manager.recent().map(|r| r.at).collect();
        assert_eq!(kept, vec![1.0, 2.0]);
    }
}
