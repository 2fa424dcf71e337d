//! Axis-aligned bounds of transformed vertex positions.
//!
//! The core is [`compute_bounds`]: given an interleaved vertex buffer, its
//! record stride, the byte offset of the position inside each record and a
//! column-major 4x4 matrix, it returns the box enclosing every transformed
//! position. Only the affine part of the matrix is used.
//!
//! [`model`] builds mesh and hierarchy bounds on top of it, and [`wasm`]
//! exports the kernel to JavaScript.

pub mod bounds;
pub mod error;
pub mod model;
pub mod settings;
pub mod transform;
pub mod vertex;
pub mod wasm;

pub mod prelude {
    pub use crate::bounds::prelude::*;
    pub use crate::error::BoundsError;
    pub use crate::model::prelude::*;
    pub use crate::settings::BoundsSettings;
    pub use crate::transform::AffineTransform;
    pub use crate::vertex::prelude::*;
}

pub use bounds::prelude::{compute_bounds, transform_bounds, Bounds};
pub use error::BoundsError;
