//! Maps continuous actor look angles onto the six discrete directions.

use crate::world::direction::Direction;

/// Continuous look orientation of an actor, in degrees.
pub trait Heading {
    /// Positive pitch looks down.
    fn pitch(&self) -> f32;

    fn yaw(&self) -> f32;
}

/// The cardinal direction whose 90-degree sector contains `yaw`.
///
/// Sector boundaries sit at the midpoints between cardinals, so angles near
/// a boundary resolve to the nearer cardinal rather than truncating.
pub fn planar_direction_of(yaw: f32) -> Direction {
    let sector = ((yaw * 4.0 / 360.0 + 0.5).floor() as i32) & 0x3;
    match sector {
        0 => Direction::South,
        1 => Direction::West,
        2 => Direction::North,
        _ => Direction::East,
    }
}

/// Like [`planar_direction_of`], but resolves to Up or Down when the actor
/// looks steeply past the diagonal. The 45.5-degree thresholds deliberately
/// break ties away from the exact diagonal.
pub fn spatial_direction_of(pitch: f32, yaw: f32) -> Direction {
    if pitch > 45.5 {
        Direction::Down
    } else if pitch < -45.5 {
        Direction::Up
    } else {
        planar_direction_of(yaw)
    }
}

pub fn planar_direction(actor: &impl Heading) -> Direction {
    planar_direction_of(actor.yaw())
}

pub fn spatial_direction(actor: &impl Heading) -> Direction {
    spatial_direction_of(actor.pitch(), actor.yaw())
}

/// Display angle of a direction, the presentation inverse of
/// [`planar_direction_of`]. Not a round trip for Up and Down.
pub fn display_angle_of(direction: Direction) -> f32 {
    match direction {
        Direction::North => 0.0,
        Direction::South => 180.0,
        Direction::West => 90.0,
        Direction::East => -90.0,
        Direction::Down => -90.0,
        Direction::Up => 90.0,
    }
}
