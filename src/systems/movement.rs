//! Swept, collision-aware movement and gravity.
//!
//! [`velocity_collision_check`] advances one object of a list by its velocity
//! for one tick. The mover is swept along each axis in turn, x first then y
//! from the x-resolved position, and stops flush against the first
//! collision-bearing box in its way. The mover's own `collision` flag only
//! decides whether it blocks others, not whether it is blocked. Resolving the axes separately lets a diagonal move slide along a
//! wall instead of stopping dead.
//!
//! Boxes the mover already overlaps before the move never block it, so an
//! object that spawned inside another can walk out. No other collision-bearing
//! box is ever entered, whatever the speed.

use crate::components::boxcollider::CollisionBox;
use crate::objects::GameObject;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Largest part of `delta` along `axis` that keeps `mover` out of every box
/// in `obstacles`.
fn clamp_axis(mover: &CollisionBox, delta: f32, axis: Axis, obstacles: &[CollisionBox]) -> f32 {
    if delta == 0.0 {
        return 0.0;
    }
    let mut allowed = delta;
    for obstacle in obstacles {
        let (lateral, near, far, mover_near, mover_far) = match axis {
            Axis::X => (
                mover.overlaps_y(obstacle),
                obstacle.left(),
                obstacle.right(),
                mover.left(),
                mover.right(),
            ),
            Axis::Y => (
                mover.overlaps_x(obstacle),
                obstacle.bottom(),
                obstacle.top(),
                mover.bottom(),
                mover.top(),
            ),
        };
        if !lateral {
            continue;
        }
        if delta > 0.0 && near >= mover_far {
            // Ahead of the leading edge.
            allowed = allowed.min(near - mover_far);
        } else if delta < 0.0 && far <= mover_near {
            allowed = allowed.max(far - mover_near);
        }
    }
    allowed
}

/// Move `list[index]` by its velocity, clamped against the other
/// collision-bearing objects of `list`. Returns the displacement applied.
pub fn velocity_collision_check(list: &mut [Box<dyn GameObject>], index: usize) -> (f32, f32) {
    let Some(mover) = list.get(index) else {
        return (0.0, 0.0);
    };
    let velocity = mover.core().state.velocity;
    if velocity.is_zero() {
        return (0.0, 0.0);
    }

    let start = mover.collision_box();
    let obstacles: Vec<CollisionBox> = list
        .iter()
        .enumerate()
        .filter(|(i, o)| *i != index && o.core().collision)
        .map(|(_, o)| o.collision_box())
        .filter(|b| !b.overlaps(&start))
        .collect();

    let dx = clamp_axis(&start, velocity.x, Axis::X, &obstacles);
    let after_x = start.translated(dx, 0.0);
    let dy = clamp_axis(&after_x, velocity.y, Axis::Y, &obstacles);

    let position = &mut list[index].core_mut().state.position;
    position.x += dx;
    position.y += dy;
    (dx, dy)
}

/// Pull a gravity-affected object down by `gravity` unless it already falls
/// at `max_fall_speed` or faster. World y points up.
pub fn apply_gravity(object: &mut dyn GameObject, gravity: f32, max_fall_speed: f32) {
    let core = object.core_mut();
    if core.gravity && -core.state.velocity.y < max_fall_speed {
        core.state.velocity.y -= gravity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> CollisionBox {
        CollisionBox::new(10.0, 0.0, 5.0, 10.0)
    }

    #[test]
    fn clamp_stops_flush() {
        let mover = CollisionBox::new(0.0, 0.0, 5.0, 10.0);
        assert_eq!(clamp_axis(&mover, 20.0, Axis::X, &[wall()]), 5.0);
        assert_eq!(clamp_axis(&mover, 3.0, Axis::X, &[wall()]), 3.0);
    }

    #[test]
    fn clamp_ignores_boxes_behind_or_beside() {
        let mover = CollisionBox::new(20.0, 0.0, 5.0, 10.0);
        // Wall is behind when moving right.
        assert_eq!(clamp_axis(&mover, 7.0, Axis::X, &[wall()]), 7.0);
        // Moving left it is hit after 5 units.
        assert_eq!(clamp_axis(&mover, -20.0, Axis::X, &[wall()]), -5.0);
        // Box entirely above the mover's vertical extent.
        let above = CollisionBox::new(0.0, 10.0, 5.0, 5.0);
        assert_eq!(clamp_axis(&above, 20.0, Axis::X, &[wall()]), 20.0);
    }

    #[test]
    fn clamp_vertical() {
        let mover = CollisionBox::new(10.0, 20.0, 5.0, 5.0);
        assert_eq!(clamp_axis(&mover, -30.0, Axis::Y, &[wall()]), -10.0);
        assert_eq!(clamp_axis(&mover, 0.0, Axis::Y, &[wall()]), 0.0);
    }

    #[test]
    fn nearest_obstacle_wins() {
        let mover = CollisionBox::new(0.0, 0.0, 5.0, 10.0);
        let near = CollisionBox::new(8.0, 0.0, 1.0, 10.0);
        assert_eq!(clamp_axis(&mover, 20.0, Axis::X, &[wall(), near]), 3.0);
    }
}
