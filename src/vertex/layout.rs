use crate::error::BoundsError;

/// Size in bytes of one position: three `f32` components.
pub const POSITION_BYTES: usize = 12;

/// Where the position lives inside each interleaved vertex record.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VertexLayout {
    stride: usize,
    position_offset: usize,
}

impl VertexLayout {
    /// Tightly packed positions: 12-byte records, position at offset 0.
    pub const PACKED: Self = Self {
        stride: POSITION_BYTES,
        position_offset: 0,
    };

    /// Validates a caller-supplied layout.
    ///
    /// Negative values and strides too small to hold a position after
    /// `position_offset` are rejected with [`BoundsError::InvalidArgument`].
    pub fn new(stride_bytes: i32, position_offset: i32) -> Result<Self, BoundsError> {
        let stride = usize::try_from(stride_bytes).map_err(|_| {
            BoundsError::invalid(format!("stride_bytes must be non-negative, got {stride_bytes}"))
        })?;
        let position_offset = usize::try_from(position_offset).map_err(|_| {
            BoundsError::invalid(format!(
                "position_offset must be non-negative, got {position_offset}"
            ))
        })?;

        if stride < position_offset + POSITION_BYTES {
            return Err(BoundsError::invalid(format!(
                "stride_bytes {stride} cannot hold a position at offset {position_offset}"
            )));
        }

        Ok(Self {
            stride,
            position_offset,
        })
    }

    pub fn stride(&self) -> usize {
        self.stride
    }

    pub fn position_offset(&self) -> usize {
        self.position_offset
    }

    /// Byte offset of the position of record `index`, or `None` on overflow.
    pub fn offset_of(&self, index: usize) -> Option<usize> {
        index
            .checked_mul(self.stride)?
            .checked_add(self.position_offset)
    }
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::PACKED
    }
}
