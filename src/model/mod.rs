mod mesh;

pub mod prelude {
    pub use super::mesh::*;
    pub use super::{Model, Node};
}

use prelude::*;

use bevy::log::{debug, warn};
use bevy::prelude::Transform;
use bevy_math::{Mat4, Vec3};

use crate::bounds::prelude::*;
use crate::error::BoundsError;
use crate::settings::BoundsSettings;

/// A node in a model hierarchy, placed relative to its parent.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    pub mesh: Option<Mesh>,
    pub render: bool,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::IDENTITY,
            mesh: None,
            render: true,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_mesh(mut self, mesh: Mesh) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn hidden(mut self) -> Self {
        self.render = false;
        self
    }
}

#[derive(Clone, Debug)]
pub struct Model {
    pub root: Node,
}

impl Model {
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Depth-first lookup by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Node> {
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            if node.name.eq_ignore_ascii_case(name) {
                return Some(node);
            }
            stack.extend(node.children.iter());
        }
        None
    }

    pub fn nodes(&self) -> Vec<&Node> {
        let mut all = Vec::new();
        let mut stack = vec![&self.root];
        while let Some(node) = stack.pop() {
            stack.extend(node.children.iter());
            all.push(node);
        }
        all
    }

    /// Padded bounds of every rendered mesh under `transform`.
    ///
    /// Returns `None` when no rendered node has any vertices.
    pub fn bounds(
        &self,
        transform: &Mat4,
        settings: &BoundsSettings,
    ) -> Result<Option<Bounds>, BoundsError> {
        let mut acc = None;
        bounds_rec(&self.root, transform, &mut acc)?;
        Ok(acc.map(|b| b.inflate(settings.padding)))
    }

    /// Model-space box.
    pub fn box_bounds(&self, settings: &BoundsSettings) -> Result<Option<Bounds>, BoundsError> {
        self.bounds(&Mat4::IDENTITY, settings)
    }

    /// Center and radius of the sphere around the model-space box.
    ///
    /// Falls back to the origin and `settings.default_radius` when the box
    /// cannot be computed.
    pub fn bounding_sphere(&self, settings: &BoundsSettings) -> (Vec3, f32) {
        match self.box_bounds(settings) {
            Ok(Some(b)) => (b.center(), b.radius()),
            Ok(None) => {
                debug!("model '{}' has no vertices, using default radius", self.root.name);
                (Vec3::ZERO, settings.default_radius)
            }
            Err(e) => {
                warn!("bounds of model '{}' failed: {}", self.root.name, e);
                (Vec3::ZERO, settings.default_radius)
            }
        }
    }
}

fn bounds_rec(node: &Node, parent: &Mat4, acc: &mut Option<Bounds>) -> Result<(), BoundsError> {
    let local = *parent * node.transform.compute_matrix();

    if node.render {
        if let Some(mesh) = &node.mesh {
            if let Some(b) = mesh.bounds(&local)? {
                let merged = match *acc {
                    Some(prev) => prev.union(&b),
                    None => b,
                };
                *acc = Some(merged);
            }
        }
    }

    for child in &node.children {
        bounds_rec(child, &local, acc)?;
    }
    Ok(())
}
