/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Tolerance under which two vertex coordinates compare as equal.
pub const EPSILON: f64 = 1e-7;
