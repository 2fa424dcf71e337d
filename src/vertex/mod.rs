mod layout;

pub mod prelude {
    pub use super::layout::*;
    pub use super::VertexBufferView;
}

use prelude::*;

use bevy_math::Vec3;
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;

use crate::error::BoundsError;

/// A borrowed, bounds-checked view over interleaved vertex records.
///
/// The view is validated once on construction, so every record index below
/// [`len`](Self::len) is known to hold a full position.
#[derive(Copy, Clone, Debug)]
pub struct VertexBufferView<'a> {
    bytes: &'a [u8],
    count: usize,
    layout: VertexLayout,
}

impl<'a> VertexBufferView<'a> {
    pub fn new(bytes: &'a [u8], count: usize, layout: VertexLayout) -> Result<Self, BoundsError> {
        if count > 0 {
            let last = count - 1;
            let offset = layout
                .offset_of(last)
                .ok_or_else(|| BoundsError::invalid(format!("{count} vertices overflow usize")))?;
            let needed = offset
                .checked_add(POSITION_BYTES)
                .ok_or_else(|| BoundsError::invalid(format!("{count} vertices overflow usize")))?;
            if needed > bytes.len() {
                return Err(BoundsError::OutOfBounds {
                    index: last,
                    offset,
                    needed,
                    len: bytes.len(),
                });
            }
        }

        Ok(Self {
            bytes,
            count,
            layout,
        })
    }

    /// Builds a view covering every whole record in `bytes`.
    pub fn from_blob(bytes: &'a [u8], layout: VertexLayout) -> Self {
        // stride >= 12 by construction of the layout, and the position fits
        // inside each whole record.
        Self {
            bytes,
            count: bytes.len() / layout.stride(),
            layout,
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// Reads the little-endian position of record `index`.
    pub fn position(&self, index: usize) -> Result<Vec3, BoundsError> {
        let offset = self.layout.offset_of(index).unwrap_or(usize::MAX);
        if index >= self.count {
            return Err(BoundsError::OutOfBounds {
                index,
                offset,
                needed: offset.saturating_add(POSITION_BYTES),
                len: self.bytes.len(),
            });
        }

        let mut cursor = Cursor::new(self.bytes);
        cursor.set_position(offset as u64);
        let x = cursor.read_f32::<LittleEndian>()?;
        let y = cursor.read_f32::<LittleEndian>()?;
        let z = cursor.read_f32::<LittleEndian>()?;
        Ok(Vec3::new(x, y, z))
    }

    /// Every position in record order.
    pub fn positions(&self) -> impl Iterator<Item = Result<Vec3, BoundsError>> + '_ {
        (0..self.count).map(move |i| self.position(i))
    }
}
