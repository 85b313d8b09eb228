use crate::rigid_body::{Body, BodyEvent, Vec3};

/// Outcome of testing one unordered pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Contact {
    /// Spheres do not overlap.
    Apart,
    /// Overlapping but already moving apart; velocities untouched.
    Separating,
    /// Impulse applied along `normal` (scalar magnitude `impulse`).
    Resolved { normal: Vec3, impulse: f64, degenerate: bool },
}

impl Contact {
    pub fn resolved(&self) -> bool {
        matches!(self, Contact::Resolved { .. })
    }
}

/// Detect and resolve a contact between `a` and `b`.
///
/// Frictionless 1-D impulse along the contact normal; restitution is the
/// smaller of the two elasticities. Angular velocity is not touched.
/// `fallback_normal` is used when the centers coincide.
pub fn collide_pair(a: &mut Body, b: &mut Body, fallback_normal: Vec3) -> Contact {
    let delta = b.position - a.position;
    let distance = delta.length();
    if distance >= a.radius() + b.radius() {
        return Contact::Apart;
    }

    let degenerate = distance == 0.0;
    let normal = if degenerate { fallback_normal } else { delta / distance };

    let rel_vel = b.velocity - a.velocity;
    let vel_along_normal = rel_vel.dot(normal);
    if vel_along_normal > 0.0 {
        return Contact::Separating;
    }

    let e = a.elasticity.min(b.elasticity);
    let inv_mass_sum = 1.0 / a.mass() + 1.0 / b.mass();
    let j = -(1.0 + e) * vel_along_normal / inv_mass_sum;

    let impulse = normal * j;
    a.velocity -= impulse / a.mass();
    b.velocity += impulse / b.mass();

    if degenerate {
        a.push_event(BodyEvent::DegenerateContact { with: b.id().clone() });
        b.push_event(BodyEvent::DegenerateContact { with: a.id().clone() });
    }
    a.push_event(BodyEvent::Collision { with: b.id().clone() });
    b.push_event(BodyEvent::Collision { with: a.id().clone() });

    Contact::Resolved { normal, impulse: j, degenerate }
}

/// Deterministic fallback axis for the pair at indices `(i, j)`.
pub(super) fn fallback_axis(i: usize, j: usize) -> Vec3 {
    Vec3::AXES[(i + j) % 3]
}
