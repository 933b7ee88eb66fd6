// simulation/collision.rs
// Contains collision detection and resolution functions

use crate::body::Body;
use crate::profile_scope;
use crate::simulation::Simulation;
use crate::utils::distance;
use ultraviolet::Vec2;

/// Touching counts as colliding.
pub fn is_colliding(a: &Body, b: &Body) -> bool {
    distance(a.pos, b.pos) <= a.radius() + b.radius()
}

/// 1-D elastic collision outcome for one body, applied to both axes independently.
fn exchange(m_self: f32, m_other: f32, v_self: Vec2, v_other: Vec2) -> Vec2 {
    let total = m_self + m_other;
    let keep = (m_self - m_other) / total;
    let take = 2.0 * m_other / total;
    Vec2::new(
        keep * v_self.x + take * v_other.x,
        keep * v_self.y + take * v_other.y,
    )
}

/// Write the post-collision velocities of `a` and `b` into their staging
/// buffers. `va` and `vb` are the committed velocities from before any
/// resolution this frame.
pub fn resolve(a: &mut Body, b: &mut Body, va: Vec2, vb: Vec2) {
    let (ma, mb) = (a.mass(), b.mass());
    a.staged_vel = exchange(ma, mb, va, vb);
    b.staged_vel = exchange(mb, ma, vb, va);
}

/// Check every pair `(i, j)`, `i < j`, in ascending order and resolve the
/// colliding ones. Returns the colliding pairs in the order they were
/// resolved; a body in several pairs keeps the result of the last one.
pub fn collide(sim: &mut Simulation) -> Vec<(usize, usize)> {
    profile_scope!("collision");
    let committed: Vec<Vec2> = sim.bodies.iter().map(|b| b.vel).collect();
    let n = sim.bodies.len();
    let mut pairs = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !is_colliding(&sim.bodies[i], &sim.bodies[j]) {
                continue;
            }
            let (head, tail) = sim.bodies.split_at_mut(j);
            resolve(&mut head[i], &mut tail[0], committed[i], committed[j]);
            pairs.push((i, j));
        }
    }
    pairs
}
