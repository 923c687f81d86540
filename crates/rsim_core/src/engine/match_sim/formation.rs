//! Kick-off formation and marking assignments
//!
//! Every role has a fixed kick-off line; players of one role are spread
//! evenly along it. Lines sit inside each role's zone so a home position
//! never needs clamping.

use crate::engine::config::{MatchConfig, PlayerConfig, SquadConfig};
use crate::engine::field::Field;
use crate::engine::physics_constants::field;
use crate::engine::player::{MarkingAssignment, Player};
use crate::engine::types::{Role, Team};

/// Kick-off x coordinate for a role
pub fn role_line_x(team: Team, role: Role) -> f32 {
    match (team, role) {
        (Team::Red, Role::Goalkeeper) => 50.0,
        (Team::Red, Role::Defender) => 220.0,
        (Team::Red, Role::Attacker) => 500.0,
        (Team::Blue, Role::Goalkeeper) => 850.0,
        (Team::Blue, Role::Defender) => 680.0,
        (Team::Blue, Role::Attacker) => 400.0,
    }
}

/// `index` of `count` players spread evenly across the field width
fn spread_y(index: usize, count: usize) -> f32 {
    (index + 1) as f32 * field::WIDTH / (count + 1) as f32
}

/// (role, home) per player of one team: goalkeeper, defenders, attackers
pub fn kickoff_slots(team: Team, squad: SquadConfig) -> Vec<(Role, (f32, f32))> {
    let mut slots = vec![(Role::Goalkeeper, (role_line_x(team, Role::Goalkeeper), field::CENTER.1))];
    for (role, count) in [(Role::Defender, squad.defenders), (Role::Attacker, squad.attackers)] {
        let count = count as usize;
        let x = role_line_x(team, role);
        slots.extend((0..count).map(|i| (role, (x, spread_y(i, count)))));
    }
    slots
}

/// Build the full roster: red team first, ids equal to roster indices
pub fn build_roster(config: &MatchConfig) -> Vec<Player> {
    let player_cfg = &config.engine.player;
    let mut players = Vec::new();
    for team in Team::ALL {
        for (role, home) in kickoff_slots(team, config.squad(team)) {
            let id = players.len();
            players.push(Player::new(id, team, role, home, player_cfg));
        }
    }
    assign_marking(&mut players, player_cfg);
    players
}

/// Defender `k` of a team holds corner `k % 2` and tracks the opponent's
/// `k`-th attacker when there is one.
pub fn assign_marking(players: &mut [Player], config: &PlayerConfig) {
    let pitch: Field = config.field();
    for team in Team::ALL {
        let opponent_attackers: Vec<usize> = players
            .iter()
            .filter(|p| p.team == team.opponent() && p.role == Role::Attacker)
            .map(|p| p.id)
            .collect();
        let corners = pitch.defensive_corners(team);

        let mut k = 0;
        for p in players.iter_mut().filter(|p| p.team == team) {
            if p.role != Role::Defender || !config.defender_marking {
                p.marking = None;
                continue;
            }
            p.marking = opponent_attackers
                .get(k)
                .map(|&opponent_id| MarkingAssignment { corner: corners[k % 2], opponent_id });
            k += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_slots_spread_evenly() {
        let slots = kickoff_slots(Team::Red, SquadConfig::new(1, 2));
        assert_eq!(
            slots,
            vec![
                (Role::Goalkeeper, (50.0, 300.0)),
                (Role::Defender, (220.0, 300.0)),
                (Role::Attacker, (500.0, 200.0)),
                (Role::Attacker, (500.0, 400.0)),
            ]
        );
    }

    #[test]
    fn test_homes_lie_inside_bounds() {
        let cfg = PlayerConfig::default();
        for team in Team::ALL {
            for squad in SquadConfig::all() {
                for (role, home) in kickoff_slots(team, squad) {
                    let bounds = cfg.field().zone_limits(team, role).inset(cfg.boundary_buffer);
                    assert!(bounds.contains(home), "{team} {role} home {home:?} outside {bounds:?}");
                }
            }
        }
    }

    #[test]
    fn test_build_roster_ids_and_marking() {
        let config = MatchConfig::new(SquadConfig::new(2, 1), SquadConfig::new(1, 2));
        let players = build_roster(&config);
        assert_eq!(players.len(), 8);
        assert!(players.iter().enumerate().all(|(i, p)| p.id == i));

        // Red defenders are ids 1 and 2; blue attackers ids 6 and 7
        assert_eq!(
            players[1].marking,
            Some(MarkingAssignment { corner: (200.0, 50.0), opponent_id: 6 })
        );
        assert_eq!(
            players[2].marking,
            Some(MarkingAssignment { corner: (200.0, 550.0), opponent_id: 7 })
        );
        // Blue defender id 5 tracks red's only attacker, id 3
        assert_eq!(
            players[5].marking,
            Some(MarkingAssignment { corner: (700.0, 50.0), opponent_id: 3 })
        );
    }

    #[test]
    fn test_marking_disabled() {
        let mut config = MatchConfig::default();
        config.engine.player.defender_marking = false;
        let players = build_roster(&config);
        assert!(players.iter().all(|p| p.marking.is_none()));
    }

    #[test]
    fn test_no_opponent_attackers_means_no_marking() {
        let config = MatchConfig::new(SquadConfig::new(3, 0), SquadConfig::new(3, 0));
        let players = build_roster(&config);
        assert!(players.iter().all(|p| p.marking.is_none()));
    }
}
