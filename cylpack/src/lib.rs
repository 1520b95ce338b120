//! Engine for 2D cylinder loading problems: place a set of cylinders on a
//! rectangular container floor such that none overlap, all stay within the
//! boundary and the weighted centre of mass ends up close to the centre.

/// Entities to model cylinder loading problems
pub mod entities;

/// Placement, balance repair and fitness evaluation
pub mod eval;

/// Geometric primitives and base algorithms
pub mod geometry;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
