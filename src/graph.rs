//! Dense adjacency-matrix graphs
//!
//! Entry `(i, j)` holds the weight of the edge from vertex `i` to vertex `j`;
//! a zero weight (`W::default()`) means there is no edge. The matrix is read
//! row by row as given, so an undirected graph needs a symmetric matrix.

use crate::edge::{Edge, Weight};
use crate::error::GraphError;
use std::str::FromStr;

/// A square matrix of edge weights, sized at runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<W> {
    /// Row-major weights, `vertex_count * vertex_count` entries
    weights: Vec<W>,
    vertex_count: usize,
}

impl<W: Weight> AdjacencyMatrix<W> {
    /// Builds a matrix from its rows
    ///
    /// # Errors
    /// - [`GraphError::Empty`] if there are no rows
    /// - [`GraphError::NotSquare`] if any row's length differs from the row count
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, GraphError>
    where
        R: AsRef<[W]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let vertex_count = rows.len();
        if vertex_count == 0 {
            return Err(GraphError::Empty);
        }

        let mut weights = Vec::with_capacity(vertex_count * vertex_count);
        for (row, entries) in rows.iter().enumerate() {
            let entries = entries.as_ref();
            if entries.len() != vertex_count {
                return Err(GraphError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: vertex_count,
                });
            }
            weights.extend_from_slice(entries);
        }

        Ok(AdjacencyMatrix {
            weights,
            vertex_count,
        })
    }

    /// Number of vertices (rows) in the graph
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Weight of the edge `from -> to`, or `None` if there is no such edge
    pub fn weight(&self, from: usize, to: usize) -> Option<W> {
        if from >= self.vertex_count || to >= self.vertex_count {
            return None;
        }
        let w = self.weights[from * self.vertex_count + to];
        (w != W::default()).then_some(w)
    }

    /// Outgoing edges of `vertex`, in ascending order of destination
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if `vertex` is not in the graph.
    pub fn neighbors(
        &self,
        vertex: usize,
    ) -> Result<impl Iterator<Item = Edge<W>> + '_, GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.edges_from(vertex))
    }

    /// Outgoing edges of a vertex already known to be in range
    pub(crate) fn edges_from(&self, vertex: usize) -> impl Iterator<Item = Edge<W>> + '_ {
        let row = &self.weights[vertex * self.vertex_count..(vertex + 1) * self.vertex_count];
        row.iter()
            .enumerate()
            .filter(|&(_, &w)| w != W::default())
            .map(move |(to, &w)| Edge::new(vertex, to, w))
    }

    /// Returns an error unless `vertex` names a vertex of this graph
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }
}

/// Parses one row per line, entries separated by whitespace or commas
///
/// Blank lines and lines starting with `#` are skipped.
impl<W: Weight + FromStr> FromStr for AdjacencyMatrix<W> {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        for (index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let row = line
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|token| !token.is_empty())
                .map(|token| {
                    token.parse::<W>().map_err(|_| GraphError::Parse {
                        line: index + 1,
                        token: token.to_string(),
                    })
                })
                .collect::<Result<Vec<W>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }
}
