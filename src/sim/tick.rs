//! Frame tick
//!
//! Advances the simulation by one frame. Step order matters: forces created
//! by collisions and friction in this tick are integrated in this same tick.

use glam::Vec2;

use super::collision::{balls_touch, bumper_hit, contact_force, reflect_velocity};
use super::state::{Body, BodyId, Simulation, TimedForce};
use super::table::Table;
use crate::settings::Settings;
use crate::shot_power_at;

/// Advance the simulation clock by `clock_advance` and run one frame
pub fn tick<H>(sim: &mut Simulation<H>, clock_advance: f32) {
    sim.clock += clock_advance;
    let dt = sim.clock - sim.last_clock;
    let settings = &sim.settings;

    collide_bodies(
        &sim.bodies,
        &mut sim.forces,
        settings.table.ball_diameter,
        settings.collision_scale,
    );
    bounce_off_bumpers(&mut sim.bodies, &settings.table);
    apply_friction(&mut sim.bodies, &mut sim.forces, settings);
    integrate_forces(&mut sim.bodies, &sim.forces, settings.ball_mass);
    advance_positions(&mut sim.bodies, dt, settings.position_scale);
    expire_forces(&mut sim.forces, dt);

    sim.last_clock = sim.clock;
    sim.shot_power = shot_power_at(sim.clock);
    sim.ticks += 1;

    log::trace!(
        "tick {} clock={:.3} dt={:.4} forces={}",
        sim.ticks,
        sim.clock,
        dt,
        sim.forces.len()
    );
}

/// Register contact impulses for every touching pair.
///
/// Each ordered pair is visited, so a touching pair contributes from both
/// sides: (i, j) scaled by i's speed and (j, i) scaled by j's speed.
pub(crate) fn collide_bodies<H>(
    bodies: &[Body<H>],
    forces: &mut Vec<TimedForce>,
    diameter: f32,
    scale: f32,
) {
    for (i, body) in bodies.iter().enumerate() {
        for (j, other) in bodies.iter().enumerate() {
            if i == j || !balls_touch(body.pos, other.pos, diameter) {
                continue;
            }

            let force = contact_force(body.pos, other.pos, body.speed(), scale);
            forces.push(TimedForce::one_tick(BodyId(j), force));
            // Equal and opposite reaction
            forces.push(TimedForce::one_tick(BodyId(i), -force));

            log::trace!("contact {:?} -> {:?} force={}", body.kind, other.kind, force);
        }
    }
}

/// Reflect velocity off the first bumper each ball touches
pub(crate) fn bounce_off_bumpers<H>(bodies: &mut [Body<H>], table: &Table) {
    let radius = table.ball_radius();
    for body in bodies.iter_mut() {
        if let Some(bumper) = bumper_hit(body.pos, radius, table) {
            body.vel = reflect_velocity(body.vel, bumper.inward_normal());
        }
    }
}

/// Snap slow balls to rest; give the rest a one-tick force against their motion
pub(crate) fn apply_friction<H>(
    bodies: &mut [Body<H>],
    forces: &mut Vec<TimedForce>,
    settings: &Settings,
) {
    for (i, body) in bodies.iter_mut().enumerate() {
        let speed = body.speed();
        if speed < settings.static_friction_threshold {
            body.vel = Vec2::ZERO;
        } else {
            // speed >= threshold > 0, so the division is finite
            let friction =
                -body.vel * (settings.friction_coefficient / settings.ball_mass / speed);
            forces.push(TimedForce::one_tick(BodyId(i), friction));
        }
    }
}

/// Add each force's acceleration (F / m) to its target's velocity
pub(crate) fn integrate_forces<H>(bodies: &mut [Body<H>], forces: &[TimedForce], mass: f32) {
    for force in forces {
        if let Some(body) = bodies.get_mut(force.target.0) {
            body.vel += force.force / mass;
        }
    }
}

pub(crate) fn advance_positions<H>(bodies: &mut [Body<H>], dt: f32, position_scale: f32) {
    for body in bodies.iter_mut() {
        body.pos += position_scale * dt * body.vel;
    }
}

/// Count down every force and drop those that have run out
pub(crate) fn expire_forces(forces: &mut Vec<TimedForce>, dt: f32) {
    for force in forces.iter_mut() {
        force.remaining -= dt;
    }
    forces.retain(|f| f.remaining >= 0.0);
}
