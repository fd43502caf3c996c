//! Geometric damage resolution: broad-phase grid + shape/angle/annulus filters.

mod damage;
mod spatial;

pub use damage::{resolve, Shape};
pub use spatial::SpatialGrid;
