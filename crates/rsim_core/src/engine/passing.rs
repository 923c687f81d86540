//! Passing / shooting / dribbling strategy
//!
//! Runs only for the player touching the ball. Decision order:
//! 1. attacker close to goal → shoot at goal centre
//! 2. best unblocked pass (score `1000 - distance`, forward bonus for attackers)
//! 3. deep in the opponent half but far from goal → dribble toward the chosen
//!    target, steering around the nearest threatening opponent
//! 4. otherwise kick to the pass target, or clear toward goal centre

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use crate::engine::ball::Ball;
use crate::engine::config::StrategyConfig;
use crate::engine::geometry::{angle_between, angle_diff, blend_angles, distance, point_to_segment_distance};
use crate::engine::player::{Player, Roster};
use crate::engine::types::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KickKind {
    Shot,
    Pass { receiver_id: usize },
    /// No receiver available: boot it toward the opponent goal
    Clearance,
    Dribble,
    /// Scripted restart throw after a throw-in hold
    ThrowIn,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickDecision {
    pub kind: KickKind,
    pub target: (f32, f32),
    /// Heading before jitter
    pub angle: f32,
    pub power: f32,
}

/// Choose what the carrier does with the ball
pub fn decide(carrier: &Player, ball: &Ball, roster: Roster<'_>, cfg: &StrategyConfig) -> KickDecision {
    let goal = carrier.team.opponent_goal_center();
    let dist_to_goal = distance(carrier.position, goal);

    if carrier.role == Role::Attacker && dist_to_goal < cfg.shoot_distance {
        return KickDecision {
            kind: KickKind::Shot,
            target: goal,
            angle: angle_between(ball.position, goal),
            power: cfg.shot_power,
        };
    }

    let pass = find_best_pass_target(carrier, roster, cfg);
    let target = pass.map(|(_, p)| p).unwrap_or(goal);

    if carrier.team.in_opponent_half(carrier.position.0) && dist_to_goal > cfg.dribble_min_goal_distance {
        let angle = avoidance_heading(carrier.position, target, roster, carrier, cfg)
            .unwrap_or_else(|| angle_between(ball.position, target));
        return KickDecision { kind: KickKind::Dribble, target, angle, power: cfg.dribble_power };
    }

    let kind = match pass {
        Some((receiver_id, _)) => KickKind::Pass { receiver_id },
        None => KickKind::Clearance,
    };
    KickDecision {
        kind,
        target,
        angle: angle_between(ball.position, target),
        power: cfg.kick_power(carrier.role),
    }
}

/// Best unblocked receiver as `(player id, position)`
pub fn find_best_pass_target(
    carrier: &Player,
    roster: Roster<'_>,
    cfg: &StrategyConfig,
) -> Option<(usize, (f32, f32))> {
    let team = carrier.team;
    let (cx, cy) = carrier.position;

    let lateral: Vec<&Player> = roster
        .teammates(team)
        .filter(|t| t.is_available())
        .filter(|t| (t.position.1 - cy).abs() >= cfg.min_lateral_separation)
        .collect();

    let pool: Vec<&Player> = if carrier.role == Role::Attacker {
        let forward: Vec<&Player> = lateral
            .iter()
            .copied()
            .filter(|t| team.is_ahead(t.position.0, cx, cfg.forward_margin))
            .collect();
        if forward.is_empty() {
            lateral
        } else {
            forward
        }
    } else {
        lateral
    };

    let mut best: Option<(usize, (f32, f32))> = None;
    let mut best_score = f32::NEG_INFINITY;

    for receiver in pool {
        if is_lane_blocked(carrier.position, receiver.position, roster, carrier, cfg) {
            continue;
        }
        let mut score = cfg.base_pass_score - distance(carrier.position, receiver.position);
        if carrier.role == Role::Attacker && team.is_ahead(receiver.position.0, cx, 0.0) {
            score += cfg.forward_bonus;
        }
        if score > best_score {
            best_score = score;
            best = Some((receiver.id, receiver.position));
        }
    }

    best
}

/// Is any opponent of `carrier` sitting in the `from → to` lane?
pub fn is_lane_blocked(
    from: (f32, f32),
    to: (f32, f32),
    roster: Roster<'_>,
    carrier: &Player,
    cfg: &StrategyConfig,
) -> bool {
    let pad = cfg.block_box_padding;
    let min_x = from.0.min(to.0) - pad;
    let max_x = from.0.max(to.0) + pad;
    let min_y = from.1.min(to.1) - pad;
    let max_y = from.1.max(to.1) + pad;

    roster.opponents(carrier.team).any(|o| {
        let (ox, oy) = o.position;
        (min_x..=max_x).contains(&ox)
            && (min_y..=max_y).contains(&oy)
            && point_to_segment_distance(o.position, from, to) <= cfg.block_distance
    })
}

/// Heading that sidesteps the nearest opponent ahead within the threat radius.
/// `None` when nobody threatens, meaning "go straight".
pub fn avoidance_heading(
    from: (f32, f32),
    target: (f32, f32),
    roster: Roster<'_>,
    carrier: &Player,
    cfg: &StrategyConfig,
) -> Option<f32> {
    let to_target = (target.0 - from.0, target.1 - from.1);

    let threat = roster
        .opponents(carrier.team)
        .filter(|o| {
            let rel = (o.position.0 - from.0, o.position.1 - from.1);
            rel.0 * to_target.0 + rel.1 * to_target.1 > 0.0
        })
        .map(|o| (o, distance(from, o.position)))
        .filter(|(_, d)| *d < cfg.threat_radius)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(o, _)| o)?;

    let to_opponent = angle_between(from, threat.position);
    let target_angle = angle_between(from, target);
    let left = to_opponent + FRAC_PI_2;
    let right = to_opponent - FRAC_PI_2;
    let avoid = if angle_diff(left, target_angle).abs() < angle_diff(right, target_angle).abs() {
        left
    } else {
        right
    };

    Some(blend_angles(target_angle, avoid, cfg.avoidance_weight))
}

/// Apply a decision to the ball with bounded angular jitter
pub fn execute_kick<R: Rng + ?Sized>(
    decision: &KickDecision,
    kicker_role: Role,
    ball: &mut Ball,
    rng: &mut R,
    cfg: &StrategyConfig,
) {
    let jitter_deg = match decision.kind {
        KickKind::Shot => cfg.shot_jitter_deg,
        KickKind::Dribble => cfg.dribble_jitter_deg,
        KickKind::Pass { .. } | KickKind::Clearance => cfg.pass_jitter_deg,
        KickKind::ThrowIn => 0.0,
    };

    let mut angle = decision.angle + jitter(rng, jitter_deg);
    if kicker_role == Role::Goalkeeper
        && decision.kind == KickKind::Clearance
        && cfg.goalkeeper_deflection_deg > 0.0
    {
        let side = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        angle += side * cfg.goalkeeper_deflection_deg.to_radians();
    }

    ball.kick(angle, decision.power);
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, max_deg: f32) -> f32 {
    if max_deg <= 0.0 {
        return 0.0;
    }
    rng.gen_range(-max_deg..=max_deg).to_radians()
}
