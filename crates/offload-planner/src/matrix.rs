// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dense symmetric transmission-cost matrix.
//!
//! `None` marks "no edge". The diagonal is never written. Both writers
//! ([`CostMatrix::connect`] and [`CostMatrix::disconnect`]) update the two
//! halves together, so `get(i, j) == get(j, i)` holds after every call.

/// Symmetric `n × n` matrix of optional edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    dim: usize,
    cells: Vec<Option<f64>>,
}

impl CostMatrix {
    /// Creates a matrix with no edges.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            cells: vec![None; dim * dim],
        }
    }

    /// Returns the number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the weight of the edge between `i` and `j`, if any.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.cells[i * self.dim + j]
    }

    /// Sets the weight of the undirected edge `i -- j`.
    pub fn connect(&mut self, i: usize, j: usize, weight: f64) {
        debug_assert_ne!(i, j, "self-edges are not representable");
        self.cells[i * self.dim + j] = Some(weight);
        self.cells[j * self.dim + i] = Some(weight);
    }

    /// Removes the undirected edge `i -- j`.
    pub fn disconnect(&mut self, i: usize, j: usize) {
        self.cells[i * self.dim + j] = None;
        self.cells[j * self.dim + i] = None;
    }

    /// Iterates the live edges of `i` as `(neighbour, weight)`.
    pub fn neighbours(&self, i: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.cells[i * self.dim..(i + 1) * self.dim]
            .iter()
            .enumerate()
            .filter_map(|(j, w)| w.map(|w| (j, w)))
    }

    /// Sum of the weights of every live edge of `i`.
    pub fn edge_sum(&self, i: usize) -> f64 {
        self.neighbours(i).map(|(_, w)| w).sum()
    }

    /// Returns the number of undirected edges.
    pub fn num_edges(&self) -> usize {
        self.cells.iter().filter(|w| w.is_some()).count() / 2
    }

    /// Checks the symmetry invariant.
    pub fn is_symmetric(&self) -> bool {
        (0..self.dim).all(|i| (i + 1..self.dim).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
