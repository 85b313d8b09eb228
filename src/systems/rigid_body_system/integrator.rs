use crate::rigid_body::{Body, Vec3};

/// Advance one body by `dt` (semi-implicit Euler).
///
/// Stateless: touches only `body`, so bodies can be integrated in any order
/// or in parallel. Gravity is expected in the force accumulator, so no
/// extra gravity term is added here. The force accumulator is cleared
/// afterwards.
pub fn integrate(body: &mut Body, dt: f64) {
    body.update(dt, Vec3::ZERO);
    body.clear_force();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::{BodyConfig, BodyId};

    #[test]
    fn consumes_the_force_accumulator() {
        let mut b = Body::new(BodyConfig::default().undamped().mass(2.0), || BodyId::from("i")).unwrap();
        b.apply_force(0.0, 4.0, 0.0);
        integrate(&mut b, 0.1);
        assert_eq!(b.force(), Vec3::ZERO);
        assert!((b.velocity.y - 0.2).abs() < 1e-12);
        assert!((b.position.y - 0.02).abs() < 1e-12);

        // No force, no damping: velocity carries over unchanged.
        integrate(&mut b, 0.1);
        assert!((b.velocity.y - 0.2).abs() < 1e-12);
    }

    #[test]
    fn order_independent_across_bodies() {
        let make = |id: &str, vx: f64| {
            Body::new(BodyConfig::default().with_id(id).moving(vx, 0.0, 0.0), || BodyId::from("x")).unwrap()
        };
        let (mut a1, mut b1) = (make("a", 1.0), make("b", -2.0));
        let (mut a2, mut b2) = (make("a", 1.0), make("b", -2.0));
        integrate(&mut a1, 0.05);
        integrate(&mut b1, 0.05);
        integrate(&mut b2, 0.05);
        integrate(&mut a2, 0.05);
        assert_eq!(a1.status(), a2.status());
        assert_eq!(b1.status(), b2.status());
    }
}
