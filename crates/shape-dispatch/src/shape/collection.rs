//! Ordered shape collections

use serde::{Deserialize, Serialize};

use super::{Shape, ShapeKind};

/// An ordered sequence of shapes.
///
/// Insertion order is iteration order, which is also the order in which
/// the dispatcher applies operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeCollection {
    shapes: Vec<Shape>,
}

impl ShapeCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape
    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Append a shape (builder pattern)
    pub fn with(mut self, shape: impl Into<Shape>) -> Self {
        self.push(shape);
        self
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Shape> {
        self.shapes.iter()
    }

    /// Number of shapes
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Count the shapes of one kind
    pub fn count_kind(&self, kind: ShapeKind) -> usize {
        self.shapes.iter().filter(|s| s.kind() == kind).count()
    }

    /// Borrow as a slice
    pub fn as_slice(&self) -> &[Shape] {
        &self.shapes
    }
}

impl From<Vec<Shape>> for ShapeCollection {
    fn from(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

impl FromIterator<Shape> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl AsRef<[Shape]> for ShapeCollection {
    fn as_ref(&self) -> &[Shape] {
        &self.shapes
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl IntoIterator for ShapeCollection {
    type Item = Shape;
    type IntoIter = std::vec::IntoIter<Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.into_iter()
    }
}
