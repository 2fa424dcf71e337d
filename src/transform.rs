use bevy_math::{Mat4, Vec3};

use crate::error::BoundsError;

/// The upper 3x4 block of a column-major 4x4 matrix.
///
/// The perspective row is dropped, so every transform is treated as affine.
/// `rows[r][c]` holds the matrix entry at row `r`, column `c`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AffineTransform {
    rows: [[f32; 4]; 3],
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ],
    };

    /// Extracts the affine coefficients from 16 column-major values
    /// (column `c`, row `r` at index `c * 4 + r`).
    pub fn from_column_major(matrix: &[f32]) -> Result<Self, BoundsError> {
        let m: &[f32; 16] = matrix.try_into().map_err(|_| {
            BoundsError::invalid(format!(
                "matrix must contain 16 elements, got {}",
                matrix.len()
            ))
        })?;
        Ok(Self::from_cols_array(m))
    }

    pub fn from_mat4(mat: &Mat4) -> Self {
        Self::from_cols_array(&mat.to_cols_array())
    }

    fn from_cols_array(m: &[f32; 16]) -> Self {
        Self {
            rows: [
                [m[0], m[4], m[8], m[12]],
                [m[1], m[5], m[9], m[13]],
                [m[2], m[6], m[10], m[14]],
            ],
        }
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.rows[0][3], self.rows[1][3], self.rows[2][3])
    }

    /// Applies the transform to a point (implicit `w = 1`).
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        let [r0, r1, r2] = &self.rows;
        // Summed left to right, no fused multiply-add.
        Vec3::new(
            r0[0] * p.x + r0[1] * p.y + r0[2] * p.z + r0[3],
            r1[0] * p.x + r1[1] * p.y + r1[2] * p.z + r1[3],
            r2[0] * p.x + r2[1] * p.y + r2[2] * p.z + r2[3],
        )
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<&Mat4> for AffineTransform {
    fn from(mat: &Mat4) -> Self {
        Self::from_mat4(mat)
    }
}
