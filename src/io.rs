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

use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::io::BufReader;
use std::path::Path;

use serde::Serialize;
use serde_json::json;

use crate::error::Result;
use crate::similarity::SimilarityTable;

/// Opens a similarity CSV file. We expect a single header line and comma
/// separation. The reader is flexible about field counts, the loader checks
/// them itself so that a short line is a reportable error instead of a
/// silently dropped record.
pub fn similarity_reader(file: &str) -> Result<csv::Reader<File>> {
    let reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_path(file)?;

    Ok(reader)
}

/// Same configuration as [`similarity_reader`], over any input source.
pub fn similarity_reader_from<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(input)
}

/// Reads vertex identifiers, one per line. Blank lines are skipped. The line
/// order is what fixes the index assignment downstream.
pub fn read_vertices(file: &str) -> Result<Vec<String>> {
    let reader = BufReader::new(File::open(&Path::new(file))?);

    let mut vertices = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            vertices.push(line.trim().to_owned());
        }
    }

    Ok(vertices)
}

/// Struct used for JSON serialization of pairwise similarities. Field names will be
/// used in JSON.
#[derive(Serialize)]
struct PairSimilarity<'a> {
    first_vertex: &'a str,
    second_vertex: &'a str,
    similarity: f64,
}

/// Output every vertex pair with its similarity in JSON format, using the
/// original identifiers. If an `output_path` is supplied, we write to a file at
/// the specified path, otherwise, we output to stdout.
pub fn write_pairs(
    table: &SimilarityTable,
    output_path: Option<String>,
) -> io::Result<()> {

    let mut out: Box<dyn Write> = match output_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout())
    };

    for (first_vertex, second_vertex, similarity) in table.pairs() {

        let pair_as_json = json!(
            PairSimilarity {
                first_vertex,
                second_vertex,
                similarity,
            });

        writeln!(out, "{}", pair_as_json)?;
    }

    Ok(())
}
