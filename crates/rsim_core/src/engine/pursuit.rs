//! Pursuit assignment
//!
//! Each tick every team gets at most one active pursuer: the nearest
//! available outfield player whose (expanded) zone holds the ball, or the
//! nearest available outfield player overall when no zone does.

use crate::engine::geometry::distance_sq;
use crate::engine::player::Player;
use crate::engine::types::Team;

/// Recompute every `is_active_pursuer` flag. Returns the chosen index per
/// team, `[red, blue]`.
pub fn assign_pursuers(players: &mut [Player], ball: (f32, f32), zone_buffer: f32) -> [Option<usize>; 2] {
    for p in players.iter_mut() {
        p.is_active_pursuer = false;
    }

    let mut chosen = [None; 2];
    for team in Team::ALL {
        let pick = choose_pursuer(players, team, ball, zone_buffer);
        if let Some(idx) = pick {
            players[idx].is_active_pursuer = true;
            log::trace!("{} pursuer: #{}", team, players[idx].id);
        }
        chosen[team.index()] = pick;
    }
    chosen
}

fn choose_pursuer(players: &[Player], team: Team, ball: (f32, f32), zone_buffer: f32) -> Option<usize> {
    let eligible = || {
        players
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.team == team && p.role.is_outfield() && p.is_available())
    };

    let in_zone = eligible().filter(|(_, p)| p.zone().expanded(zone_buffer).contains(ball));
    nearest(in_zone, ball).or_else(|| nearest(eligible(), ball))
}

fn nearest<'a>(candidates: impl Iterator<Item = (usize, &'a Player)>, ball: (f32, f32)) -> Option<usize> {
    candidates
        .min_by(|a, b| distance_sq(a.1.position, ball).total_cmp(&distance_sq(b.1.position, ball)))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::PlayerConfig;
    use crate::engine::types::Role;

    fn squad() -> Vec<Player> {
        let cfg = PlayerConfig::default();
        vec![
            Player::new(0, Team::Red, Role::Goalkeeper, (50.0, 300.0), &cfg),
            Player::new(1, Team::Red, Role::Defender, (200.0, 300.0), &cfg),
            Player::new(2, Team::Red, Role::Attacker, (600.0, 200.0), &cfg),
            Player::new(3, Team::Red, Role::Attacker, (600.0, 400.0), &cfg),
            Player::new(4, Team::Blue, Role::Goalkeeper, (850.0, 300.0), &cfg),
            Player::new(5, Team::Blue, Role::Defender, (700.0, 300.0), &cfg),
            Player::new(6, Team::Blue, Role::Attacker, (400.0, 300.0), &cfg),
        ]
    }

    fn pursuers(players: &[Player]) -> Vec<usize> {
        players.iter().filter(|p| p.is_active_pursuer).map(|p| p.id).collect()
    }

    #[test]
    fn test_one_pursuer_per_team() {
        let mut players = squad();
        let chosen = assign_pursuers(&mut players, (450.0, 300.0), 20.0);
        assert!(chosen[0].is_some() && chosen[1].is_some());
        assert_eq!(pursuers(&players).len(), 2);
    }

    #[test]
    fn test_zone_membership_beats_raw_distance() {
        let mut players = squad();
        // Red defender is nearer, but the ball sits deep in the attackers' zone
        players[1].place((430.0, 300.0));
        let chosen = assign_pursuers(&mut players, (480.0, 280.0), 0.0);
        assert_eq!(chosen[0], Some(2));
    }

    #[test]
    fn test_falls_back_to_nearest_when_no_zone_contains_ball() {
        let mut players = squad();
        // Only the red defender remains, and the ball is far upfield
        players[2].fall(0.0);
        players[3].fall(0.0);
        let chosen = assign_pursuers(&mut players, (850.0, 300.0), 20.0);
        assert_eq!(chosen[0], Some(1));
    }

    #[test]
    fn test_goalkeepers_never_pursue() {
        let mut players = squad();
        assign_pursuers(&mut players, (60.0, 300.0), 20.0);
        assert!(!players[0].is_active_pursuer);
        assert!(!players[4].is_active_pursuer);
    }

    #[test]
    fn test_fallen_team_has_no_pursuer() {
        let mut players = squad();
        players[5].fall(0.0);
        players[6].fall(0.0);
        let chosen = assign_pursuers(&mut players, (450.0, 300.0), 20.0);
        assert_eq!(chosen[1], None);
        assert_eq!(pursuers(&players).len(), 1);
    }

    #[test]
    fn test_flags_reset_each_call() {
        let mut players = squad();
        players[6].is_active_pursuer = true;
        players[5].is_active_pursuer = true;
        assign_pursuers(&mut players, (750.0, 300.0), 20.0);
        assert_eq!(pursuers(&players).iter().filter(|id| **id >= 4).count(), 1);
    }
}
