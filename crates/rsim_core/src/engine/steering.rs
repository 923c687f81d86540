//! Per-player steering
//!
//! One call to [`update_player`] per player per tick:
//!
//! 1. fallen players are skipped entirely
//! 2. throw-in takers wait out the hold, then throw
//! 3. a role-dependent target is chosen and clamped into the zone bounds
//! 4. the movement state machine turns or walks toward it
//! 5. a player touching the ball decides and kicks
//!
//! Movement follows the seek/arrive pattern: full speed far from the
//! target, linear ramp-down inside the deceleration distance.

use rand::Rng;

use crate::engine::ball::{Ball, Touch};
use crate::engine::config::{EngineConfig, PlayerConfig};
use crate::engine::field::Field;
use crate::engine::geometry::{angle_between, angle_diff, angle_to_direction, distance, lerp};
use crate::engine::passing::{self, KickDecision, KickKind};
use crate::engine::physics_constants::player::GOALKEEPER_LOOKAHEAD_TICKS;
use crate::engine::player::{Player, Roster};
use crate::engine::player_state::{Modifier, MovementState};
use crate::engine::types::Role;

/// Arrive: speed scaled down linearly inside `slowing_distance`
pub fn arrival_speed(max_speed: f32, dist: f32, slowing_distance: f32) -> f32 {
    if max_speed <= 0.0 {
        return 0.0;
    }
    if slowing_distance <= 0.0 {
        return max_speed;
    }
    max_speed * (dist / slowing_distance).clamp(0.0, 1.0)
}

// ============================================================================
// Target selection
// ============================================================================

/// Where `player` wants to be this tick, already clamped to its bounds
pub fn select_target(player: &Player, ball: &Ball, roster: Roster<'_>, cfg: &PlayerConfig) -> (f32, f32) {
    let raw = match player.role {
        Role::Goalkeeper => goalkeeper_target(player, ball, &cfg.field()),
        _ if player.is_active_pursuer => ball.position,
        Role::Defender => marking_target(player, roster, cfg).unwrap_or(player.home),
        Role::Attacker => player.home,
    };
    player.bounds().clamp(raw)
}

fn goalkeeper_target(keeper: &Player, ball: &Ball, pitch: &Field) -> (f32, f32) {
    let predicted_x = ball.position.0 + ball.velocity.0 * GOALKEEPER_LOOKAHEAD_TICKS;
    if pitch.in_own_penalty_depth(keeper.team, ball.position.0)
        || pitch.in_own_penalty_depth(keeper.team, predicted_x)
    {
        ball.position
    } else {
        (keeper.zone().center().0, ball.position.1)
    }
}

/// Midpoint between the assigned corner and the tracked attacker, pulled
/// sideways toward the corner. `None` without a live assignment.
fn marking_target(defender: &Player, roster: Roster<'_>, cfg: &PlayerConfig) -> Option<(f32, f32)> {
    if !cfg.defender_marking {
        return None;
    }
    let assignment = defender.marking?;
    let tracked = roster.get(assignment.opponent_id)?;

    let (mx, my) = lerp(assignment.corner, tracked.position, 0.5);
    let toward_corner = (assignment.corner.1 - my).signum();
    Some((mx, my + toward_corner * cfg.marking_lateral_offset))
}

// ============================================================================
// Movement state machine
// ============================================================================

/// Advance turning / walking toward `target`
pub fn step_movement(player: &mut Player, target: (f32, f32), now: f32, cfg: &PlayerConfig) {
    player.target = target;

    if player.movement.is_turning() {
        if player.movement.turn_complete(now) {
            player.facing = angle_between(player.position, target);
            player.movement = MovementState::Walking;
        }
        return;
    }

    let dist = distance(player.position, target);
    if dist <= cfg.arrival_radius {
        player.movement = MovementState::Idle;
        return;
    }

    let target_angle = angle_between(player.position, target);
    let diff = angle_diff(target_angle, player.facing);
    if diff.abs() > cfg.turn_threshold_rad() {
        player.movement = MovementState::Turning {
            started_at: now,
            duration: diff.abs() / cfg.turn_rate_rad_per_s(),
        };
        return;
    }

    player.movement = MovementState::Walking;
    let speed = arrival_speed(player.speed, dist, cfg.deceleration_distance);
    let dir = angle_to_direction(player.facing);
    let raw = (player.position.0 + dir.0 * speed, player.position.1 + dir.1 * speed);
    let smoothed = lerp(player.position, raw, cfg.smoothing);
    player.place(smoothed);
}

// ============================================================================
// Per-tick update
// ============================================================================

/// Run one tick for `player`. Returns the kick it made, if any; the ball's
/// last touch is already registered when this returns `Some`.
pub fn update_player<R: Rng + ?Sized>(
    player: &mut Player,
    roster: Roster<'_>,
    ball: &mut Ball,
    now: f32,
    config: &EngineConfig,
    rng: &mut R,
) -> Option<KickDecision> {
    if player.is_fallen() {
        return None;
    }

    if let Modifier::ThrowingIn { started_at } = player.modifier {
        if now - started_at < config.player.throw_in_duration_s {
            return None;
        }
        return Some(throw_in(player, roster, ball, config));
    }

    let target = select_target(player, ball, roster, &config.player);
    step_movement(player, target, now, &config.player);

    if distance(player.position, ball.position) > player.radius + ball.radius {
        return None;
    }

    let decision = passing::decide(player, ball, roster, &config.strategy);
    passing::execute_kick(&decision, player.role, ball, rng, &config.strategy);
    ball.register_touch(touch_of(player));
    log::debug!(
        "{} {} #{} kicks: {:?} power {:.1}",
        player.team,
        player.role,
        player.id,
        decision.kind,
        decision.power
    );
    Some(decision)
}

/// Scripted throw once the hold expires: ball at the taker's feet, thrown
/// to the best receiver or toward the opponent goal.
fn throw_in(player: &mut Player, roster: Roster<'_>, ball: &mut Ball, config: &EngineConfig) -> KickDecision {
    let target = passing::find_best_pass_target(player, roster, &config.strategy)
        .map(|(_, p)| p)
        .unwrap_or_else(|| player.team.opponent_goal_center());

    ball.position = player.position;
    let decision = KickDecision {
        kind: KickKind::ThrowIn,
        target,
        angle: angle_between(player.position, target),
        power: config.player.throw_in_power,
    };
    ball.kick(decision.angle, decision.power);
    ball.register_touch(touch_of(player));
    player.modifier = Modifier::None;
    log::debug!("{} {} #{} throws in toward {:?}", player.team, player.role, player.id, target);
    decision
}

fn touch_of(player: &Player) -> Touch {
    Touch { player_id: player.id, team: player.team, role: player.role }
}
