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

use std::env;
use std::error::Error;
use std::process;

use getopts::Options;

use trajsim::io;
use trajsim::similarity::SimilarityTable;
use trajsim::stats::VertexDictionary;

fn main() {

    pretty_env_logger::init();

    let args: Vec<String> = env::args().collect();
    let program = args[0].clone();

    let mut opts = Options::new();
    opts.optopt("v", "vertices", "Vertex file name (required). One vertex identifier per \
        line, the line order fixes the integer index each vertex is assigned.", "PATH");
    opts.optopt("s", "similarities", "Similarity file name (required). Comma-separated \
        lines of the form vertex,vertex,similarity after a single header line.", "PATH");
    opts.optopt("p", "pair", "Print the similarity of one pair instead of dumping the \
        whole table, given as two vertex identifiers separated by a comma.", "A,B");
    opts.optopt("o", "outputfile", "Output file name (optional, output will be written to \
        stdout by default).", "PATH");
    opts.optflag("h", "help", "Print this help menu");

    let matches = match opts.parse(&args[1..]) {
        Ok(matches) => matches,
        Err(failure) => {
            let hint = failure.to_string();
            return print_usage_and_exit(&program, opts, Some(&hint))
        },
    };

    if matches.opt_present("h") {
        return print_usage_and_exit(&program, opts, None);
    }

    if !matches.opt_present("v") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a vertex file via --vertices."),
        );
    }

    if !matches.opt_present("s") {
        return print_usage_and_exit(
            &program,
            opts,
            Some("Please specify a similarity file via --similarities."),
        );
    }

    let vertices_path = matches.opt_str("v").unwrap();
    let similarities_path = matches.opt_str("s").unwrap();
    let pair = matches.opt_str("p");
    let output_path = matches.opt_str("o");

    if let Err(failure) = run(&vertices_path, &similarities_path, pair, output_path) {
        eprintln!("{}", failure);
        process::exit(1);
    }
}

fn print_usage_and_exit(
    program: &str,
    opts: Options,
    hint: Option<&str>
) {

    if let Some(hint) = hint {
        eprintln!("\n{}\n", hint);
    }

    let brief = format!("Usage: {} [options]", program);
    eprint!("{}", opts.usage(&brief));
}

fn run(
    vertices_path: &str,
    similarities_path: &str,
    pair: Option<String>,
    output_path: Option<String>,
) -> Result<(), Box<dyn Error>> {

    println!("Reading vertex set from {}", vertices_path);

    let vertices = io::read_vertices(vertices_path)?;
    let dict = VertexDictionary::from_vertices(vertices.into_iter());

    let num_pairs = dict.num_vertices() * dict.num_vertices().saturating_sub(1) / 2;

    println!(
        "Found {} vertices, reading {} to populate {} vertex pairs",
        dict.num_vertices(),
        similarities_path,
        num_pairs,
    );

    let table = SimilarityTable::from_csv(dict, similarities_path)?;

    match pair {
        Some(pair) => {
            let vertices: Vec<&str> = pair.split(',').collect();
            if vertices.len() != 2 {
                return Err(format!("expected --pair as A,B, got '{}'", pair).into());
            }

            let similarity = table.similarity(vertices[0].trim(), vertices[1].trim())?;
            println!("{}", similarity);
        },
        _ => {
            println!("Writing pairwise similarities...");
            io::write_pairs(&table, output_path)?;
        },
    }

    Ok(())
}
