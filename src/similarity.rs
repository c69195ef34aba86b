/**
 * TrajSim
 * Copyright (C) 2026 The trajsim developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

use std::io::Read;

use log::debug;

use crate::error::{Error, Result};
use crate::io;
use crate::stats::VertexDictionary;

/// Symmetric pairwise similarity lookup over a fixed vertex set.
///
/// Stores one `f64` per unordered pair of distinct vertices in a flat packed
/// triangular array of length `n * (n - 1) / 2`, addressed by a closed-form
/// offset instead of hashing. Compared to a dense symmetric matrix this halves
/// the memory and still gives O(1) lookups.
///
/// Pairs never mentioned in the input file stay at `0.0`. That default is a
/// deliberate choice of this implementation, not an allocator accident, and
/// callers may rely on it.
pub struct SimilarityTable {
    dict: VertexDictionary,
    pairwise_similarities: Vec<f64>,
}

impl SimilarityTable {

    /// Builds the table from a similarity file at `path`, see
    /// [`SimilarityTable::from_reader`] for the expected format.
    pub fn from_csv(dict: VertexDictionary, path: &str) -> Result<Self> {
        let mut reader = io::similarity_reader(path)?;
        Self::ingest(dict, &mut reader)
    }

    /// Builds the table from comma-separated similarity records: one header
    /// line (content ignored), then `first_vertex,second_vertex,similarity`
    /// per line. Records whose vertices are not both part of `dict` are
    /// skipped, as are records pairing a vertex with itself (no diagonal slot
    /// exists). A record with a field count other than three or a similarity
    /// that does not parse as a float aborts construction with an error.
    /// Blank lines carry no record and are skipped.
    pub fn from_reader<R: Read>(dict: VertexDictionary, input: R) -> Result<Self> {
        let mut reader = io::similarity_reader_from(input);
        Self::ingest(dict, &mut reader)
    }

    fn ingest<R: Read>(
        dict: VertexDictionary,
        reader: &mut csv::Reader<R>,
    ) -> Result<Self> {

        let n = dict.num_vertices();
        let mut table = SimilarityTable {
            dict,
            pairwise_similarities: vec![0.0; n * n.saturating_sub(1) / 2],
        };

        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or(0);

            if record.len() != 3 {
                return Err(Error::MalformedLine { line, fields: record.len() });
            }

            let first_vertex = &record[0];
            let second_vertex = &record[1];

            if first_vertex == second_vertex {
                debug!("skipping line {}, self-pair", line);
            } else if table.dict.contains(first_vertex) && table.dict.contains(second_vertex) {
                let similarity: f64 = record[2].trim().parse().map_err(|_| {
                    Error::InvalidSimilarity { line, value: record[2].to_owned() }
                })?;

                let index = table.index_of(first_vertex, second_vertex)?;
                table.pairwise_similarities[index] = similarity;
            } else {
                debug!("skipping line {}, unknown vertex", line);
            }
        }

        Ok(table)
    }

    /// Offset of the unordered pair `{first_vertex, second_vertex}` in the
    /// packed triangular array. Symmetric in its arguments and a bijection
    /// from the distinct pairs onto `[0, n * (n - 1) / 2)`.
    ///
    /// The two vertices must be distinct, no slot exists on the diagonal.
    pub fn index_of(&self, first_vertex: &str, second_vertex: &str) -> Result<usize> {

        let first = self.dict.vertex_index(first_vertex)
            .ok_or_else(|| Error::UnknownVertex(first_vertex.to_owned()))? as usize;
        let second = self.dict.vertex_index(second_vertex)
            .ok_or_else(|| Error::UnknownVertex(second_vertex.to_owned()))? as usize;

        debug_assert!(first != second, "self-pairs have no slot");

        let n = self.dict.num_vertices();
        let smaller_index = first.min(second);
        let larger_index = first.max(second);

        Ok(smaller_index * (2 * n - smaller_index - 1) / 2 + (larger_index - smaller_index - 1))
    }

    /// The stored similarity of the unordered pair, `0.0` when the file never
    /// mentioned it. Same preconditions as [`SimilarityTable::index_of`].
    pub fn similarity(&self, first_vertex: &str, second_vertex: &str) -> Result<f64> {
        let index = self.index_of(first_vertex, second_vertex)?;
        Ok(self.pairwise_similarities[index])
    }

    pub fn num_vertices(&self) -> usize {
        self.dict.num_vertices()
    }

    pub fn num_pairs(&self) -> usize {
        self.pairwise_similarities.len()
    }

    /// The packed triangular array in offset order.
    pub fn scores(&self) -> &[f64] {
        &self.pairwise_similarities
    }

    pub fn dict(&self) -> &VertexDictionary {
        &self.dict
    }

    /// Every unordered pair with its similarity, in offset order of the
    /// packed array.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        let names = self.dict.names_by_index();
        let scores = &self.pairwise_similarities;
        let n = names.len();

        (0..n).flat_map(move |smaller| {
            let names = names.clone();

            ((smaller + 1)..n).map(move |larger| {
                let offset = smaller * (2 * n - smaller - 1) / 2 + (larger - smaller - 1);
                (names[smaller], names[larger], scores[offset])
            })
        })
    }
}
