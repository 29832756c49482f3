//! Symplectic composition integrator for geodesic motion under a potential.
//!
//! The Hamiltonian splits into free geodesic motion (`drift`, solved exactly
//! as a rotation in the plane spanned by position and velocity) and the
//! tangential force (`kick`). Stages are combined with a symmetric
//! composition scheme. Increments go through a compensated-summation error
//! accumulator so that long runs stay reversible to rounding precision.

use glam::DVec3;

use gravix_core::enums::PotentialKind;
use gravix_core::types::PhaseState;

use super::potential;

/// Integrator bound to one set of planets.
pub struct Integrator<'a> {
    pub kind: PotentialKind,
    pub gamma: &'static [f64],
    pub planets: &'a [DVec3],
}

/// Result of [`Integrator::run`].
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub state: PhaseState,
    /// Steps that were not taken because the rim was crossed.
    pub steps_left: usize,
    /// Whether the final position lies inside the rim of a planet.
    pub terminated: bool,
}

impl Integrator<'_> {
    /// One composed integration step of size `h`. `err` carries the
    /// compensated-summation remainder across steps.
    pub fn step(&self, qp: &mut PhaseState, err: &mut PhaseState, h: f64) {
        let stages = self.gamma.len();
        drift(qp, err, self.gamma[0] * h / 2.0);
        for i in 0..stages {
            let g2 = self.gamma[i];
            let g1 = g2 + if i + 1 < stages { self.gamma[i + 1] } else { 0.0 };
            self.kick(qp, err, g2 * h);
            drift(qp, err, g1 * h / 2.0);
        }
    }

    /// Takes up to `n` steps, stopping once the position is within the rim of
    /// a planet (`cos_rim` is the cosine of the rim radius). The returned
    /// state is projected back onto the sphere and its tangent plane.
    pub fn run(&self, state: PhaseState, h: f64, n: usize, cos_rim: f64) -> RunOutcome {
        let mut qp = state;
        let mut err = PhaseState::default();
        let mut mdist = -1.0;
        let mut n = n;

        while n > 0 && mdist < cos_rim {
            self.step(&mut qp, &mut err, h);
            mdist = potential::min_dist(qp.position, self.planets);
            n -= 1;
        }

        RunOutcome {
            state: project(qp),
            steps_left: n,
            terminated: mdist >= cos_rim,
        }
    }

    fn kick(&self, qp: &mut PhaseState, err: &mut PhaseState, h: f64) {
        let q = qp.position;
        let g = potential::gradient(self.kind, q, self.planets);
        err.velocity += (q.dot(g) * q - g) * h;

        let p = qp.velocity + err.velocity;
        err.velocity += qp.velocity - p;
        qp.velocity = p;
    }
}

fn drift(qp: &mut PhaseState, err: &mut PhaseState, h: f64) {
    let PhaseState {
        position: q,
        velocity: p,
    } = *qp;
    let p2 = p.dot(p);
    let ph = p2.sqrt() * h;

    let h_sinc_ph = h * potential::sinc(ph);
    let cos_ph_minus_one = -2.0 * (ph / 2.0).sin().powi(2);

    err.position += q * cos_ph_minus_one + p * h_sinc_ph;
    err.velocity += p * cos_ph_minus_one - q * p2 * h_sinc_ph;

    let next = PhaseState::new(q + err.position, p + err.velocity);
    err.position += q - next.position;
    err.velocity += p - next.velocity;
    *qp = next;
}

/// Normalizes the position and removes the radial velocity component.
pub fn project(qp: PhaseState) -> PhaseState {
    let q = qp.position.normalize();
    let p = qp.velocity - q.dot(qp.velocity) * q;
    PhaseState::new(q, p)
}
