use wasm_bindgen::prelude::*;

use crate::bounds::compute_bounds;

/// JS entry point for [`compute_bounds`].
///
/// Returns `[minx, miny, minz, maxx, maxy, maxz]` and throws on invalid
/// arguments.
#[wasm_bindgen(js_name = transformBounds)]
pub fn transform_bounds(
    vertices: Option<Vec<u8>>,
    vertex_count: i32,
    stride_bytes: i32,
    position_offset: i32,
    matrix: &[f32],
) -> Result<Vec<f32>, JsError> {
    let bounds = compute_bounds(
        vertices.as_deref(),
        vertex_count,
        stride_bytes,
        position_offset,
        matrix,
    )?;
    Ok(bounds.to_flat().to_vec())
}
