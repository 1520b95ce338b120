/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the minimum distance between `Self` and `T`.
pub trait DistanceTo<T> {
    /// Minimum distance between two primitives. Will be 0 in case of a collision.
    fn distance(&self, other: &T) -> f32;

    /// Squared version of [`DistanceTo::distance`]
    fn sq_distance(&self, other: &T) -> f32;
}
