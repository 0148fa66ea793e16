//! Immutable adjacency-matrix graph over indexed vertex slots.
//!
//! A `Graph<T>` has a fixed number of vertex slots, each optionally holding
//! a value, and an `N x N` boolean adjacency matrix flattened as `i * N + j`.
//! An edge `i -> j` means "vertex `j` depends on vertex `i`": `j` stays
//! covered while any edge points at it.
//!
//! Every operation returns a new graph. Both the slots and the matrix are
//! `im::Vector`s, so a one-slot update copies a single chunk and the rest is
//! shared with the previous graph.
//!
//! Indices are positions, like slice indices: passing an index outside
//! `0..size()` panics.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Fixed-size directed graph with optional vertex payloads.
///
/// ```
/// use duel_engine::board::Graph;
///
/// let graph = Graph::with_vertices(["base", "top"])
///     .add_edge(0, 1);
///
/// assert!(graph.is_edge(0, 1));
/// assert_eq!(graph.vertices_with_no_incoming_edges(), vec![&"base"]);
///
/// let graph = graph.set_vertex(0, None).remove_edge(0, 1);
/// assert_eq!(graph.vertices_with_no_incoming_edges(), vec![&"top"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph<T: Clone> {
    vertices: Vector<Option<T>>,
    adjacency: Vector<bool>,
}

impl<T: Clone> Graph<T> {
    /// Create a graph of `size` empty slots and no edges.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            vertices: std::iter::repeat(None).take(size).collect(),
            adjacency: std::iter::repeat(false).take(size * size).collect(),
        }
    }

    /// Create a graph with one filled slot per value and no edges.
    pub fn with_vertices(values: impl IntoIterator<Item = T>) -> Self {
        let vertices: Vector<Option<T>> = values.into_iter().map(Some).collect();
        let size = vertices.len();
        Self {
            vertices,
            adjacency: std::iter::repeat(false).take(size * size).collect(),
        }
    }

    /// Number of vertex slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the adjacency matrix matches the slot count.
    ///
    /// Always true for graphs built through this API; a decoded graph may
    /// not be, and every other query indexes the matrix.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.adjacency.len() == self.size() * self.size()
    }

    /// Value held at `index`, `None` for an empty slot.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&T> {
        self.vertices[index].as_ref()
    }

    /// Iterate over filled slots as `(index, value)`.
    pub fn vertices(&self) -> impl Iterator<Item = (usize, &T)> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.as_ref().map(|v| (i, v)))
    }

    #[must_use]
    pub fn is_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency[self.cell(from, to)]
    }

    /// Add the edge `from -> to`. Adding an existing edge is a no-op.
    #[must_use]
    pub fn add_edge(&self, from: usize, to: usize) -> Self {
        self.with_edge(from, to, true)
    }

    /// Remove the edge `from -> to`. Removing a missing edge is a no-op.
    #[must_use]
    pub fn remove_edge(&self, from: usize, to: usize) -> Self {
        self.with_edge(from, to, false)
    }

    /// Indices that `index` has an edge to, in ascending order.
    pub fn successors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.size()).filter(move |&to| self.is_edge(index, to))
    }

    /// Whether any vertex has an edge to `index`.
    #[must_use]
    pub fn has_incoming_edges(&self, index: usize) -> bool {
        (0..self.size()).any(|from| self.is_edge(from, index))
    }

    /// Indices of filled slots with no incoming edge, in index order.
    #[must_use]
    pub fn indices_with_no_incoming_edges(&self) -> Vec<usize> {
        self.vertices()
            .map(|(i, _)| i)
            .filter(|&i| !self.has_incoming_edges(i))
            .collect()
    }

    /// Values of filled slots with no incoming edge, in index order.
    #[must_use]
    pub fn vertices_with_no_incoming_edges(&self) -> Vec<&T> {
        self.vertices()
            .filter(|&(i, _)| !self.has_incoming_edges(i))
            .map(|(_, v)| v)
            .collect()
    }

    fn cell(&self, from: usize, to: usize) -> usize {
        let size = self.size();
        assert!(from < size && to < size, "edge ({from}, {to}) outside graph of size {size}");
        from * size + to
    }

    fn with_edge(&self, from: usize, to: usize, present: bool) -> Self {
        let cell = self.cell(from, to);
        if self.adjacency[cell] == present {
            return self.clone();
        }
        Self {
            vertices: self.vertices.clone(),
            adjacency: self.adjacency.update(cell, present),
        }
    }
}

impl<T: Clone + PartialEq + std::fmt::Debug> Graph<T> {
    /// Replace the slot at `index`.
    ///
    /// Returns an identical clone when the slot already holds `value`.
    #[must_use]
    pub fn set_vertex(&self, index: usize, value: Option<T>) -> Self {
        if self.vertices[index] == value {
            return self.clone();
        }
        Self {
            vertices: self.vertices.update(index, value),
            adjacency: self.adjacency.clone(),
        }
    }

    /// Index of the first slot holding `value`.
    #[must_use]
    pub fn position(&self, value: &T) -> Option<usize> {
        self.vertices
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    /// Replace the first slot holding `old` with `new`.
    pub fn replace_vertex(&self, old: &T, new: Option<T>) -> Result<Self> {
        let index = self.position(old).ok_or_else(|| EngineError::not_found(old))?;
        Ok(self.set_vertex(index, new))
    }
}
