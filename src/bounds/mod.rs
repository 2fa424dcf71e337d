mod aabb;

pub mod prelude {
    pub use super::aabb::*;
    pub use super::{compute_bounds, transform_bounds};
}

use prelude::*;

use bevy::log::{debug, trace};

use crate::error::BoundsError;
use crate::transform::AffineTransform;
use crate::vertex::prelude::*;

/// Axis-aligned bounds of every position in a strided vertex buffer after
/// applying a column-major 4x4 `matrix`.
///
/// An absent buffer or a `vertex_count <= 0` yields [`Bounds::ZERO`] without
/// looking at the layout or the matrix. Otherwise the layout, the matrix
/// length and the buffer length are all checked before any position is read.
pub fn compute_bounds(
    vertices: Option<&[u8]>,
    vertex_count: i32,
    stride_bytes: i32,
    position_offset: i32,
    matrix: &[f32],
) -> Result<Bounds, BoundsError> {
    let bytes = match vertices {
        Some(bytes) if vertex_count > 0 => bytes,
        _ => {
            trace!("compute_bounds: empty input, count={}", vertex_count);
            return Ok(Bounds::ZERO);
        }
    };

    let transform = AffineTransform::from_column_major(matrix)?;
    let layout = VertexLayout::new(stride_bytes, position_offset)?;
    let view = VertexBufferView::new(bytes, vertex_count as usize, layout)?;

    transform_bounds(&view, &transform)
}

/// Bounds of every position in `view` under `transform`.
///
/// The first position seeds both corners; an empty view yields
/// [`Bounds::ZERO`].
pub fn transform_bounds(
    view: &VertexBufferView<'_>,
    transform: &AffineTransform,
) -> Result<Bounds, BoundsError> {
    let mut positions = view.positions();
    let mut bounds = match positions.next() {
        Some(first) => Bounds::from_point(transform.transform_point(first?)),
        None => return Ok(Bounds::ZERO),
    };

    for p in positions {
        bounds.include(transform.transform_point(p?));
    }

    debug!(
        "transform_bounds: {} vertices, stride={}, offset={} -> {:?}",
        view.len(),
        view.layout().stride(),
        view.layout().position_offset(),
        bounds
    );
    Ok(bounds)
}
