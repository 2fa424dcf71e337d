/// Tuning for model-level bounds.
///
/// Override single fields with struct update syntax:
/// `BoundsSettings { padding: 0.0, ..default() }`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundsSettings {
    /// Margin added on every side of a model box.
    pub padding: f32,
    /// Sphere radius used when a model's bounds cannot be computed.
    pub default_radius: f32,
}

impl Default for BoundsSettings {
    fn default() -> Self {
        Self {
            padding: 0.1,
            default_radius: 5.0,
        }
    }
}
