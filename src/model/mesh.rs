use bevy_math::Mat4;

use crate::bounds::prelude::*;
use crate::error::BoundsError;
use crate::transform::AffineTransform;
use crate::vertex::prelude::*;

/// Interleaved vertex data with its record size and position offset.
#[derive(Clone, Debug)]
pub struct Mesh {
    vertex_data: Vec<u8>,
    layout: VertexLayout,
}

impl Mesh {
    pub fn new(vertex_data: Vec<u8>, block_size: i32, vertex_offset: i32) -> Result<Self, BoundsError> {
        let layout = VertexLayout::new(block_size, vertex_offset)?;
        Ok(Self {
            vertex_data,
            layout,
        })
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    pub fn vertex_data(&self) -> &[u8] {
        &self.vertex_data
    }

    pub fn vertex_count(&self) -> usize {
        self.view().len()
    }

    pub fn view(&self) -> VertexBufferView<'_> {
        VertexBufferView::from_blob(&self.vertex_data, self.layout)
    }

    /// Bounds of the mesh under `transform`, `None` if it has no vertices.
    pub fn bounds(&self, transform: &Mat4) -> Result<Option<Bounds>, BoundsError> {
        let view = self.view();
        if view.is_empty() {
            return Ok(None);
        }
        transform_bounds(&view, &AffineTransform::from_mat4(transform)).map(Some)
    }
}
