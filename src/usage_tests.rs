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

#[cfg(test)]
mod tests {

    use std::io::Write;

    use crate::grow::GrowVec;
    use crate::regression;
    use crate::similarity::SimilarityTable;
    use crate::stats::VertexDictionary;

    #[test]
    fn programmatic_usage() {

        /* The vertex set can come from anywhere, all that matters is that its
           iteration order is deterministic, as it fixes the integer index each
           vertex is assigned. */
        let vertices = vec![
            String::from("amelie"),
            String::from("boris"),
            String::from("carla"),
            String::from("dmitri"),
        ];

        let dict = VertexDictionary::from_vertices(vertices.into_iter());

        /* Pairwise similarities are ingested from comma-separated records with
           a single header line. Pairs the file does not mention keep their 0.0
           default, and records about vertices outside the set are skipped. */
        let similarities = "\
first,second,similarity
amelie,boris,0.9
carla,amelie,0.4
boris,zelda,0.8
";

        let table = SimilarityTable::from_reader(dict, similarities.as_bytes()).unwrap();

        assert_eq!(table.num_vertices(), 4);
        assert_eq!(table.num_pairs(), 6);

        /* Lookups are symmetric and O(1). */
        assert_eq!(table.similarity("amelie", "boris").unwrap(), 0.9);
        assert_eq!(table.similarity("boris", "amelie").unwrap(), 0.9);
        assert_eq!(table.similarity("amelie", "carla").unwrap(), 0.4);
        assert_eq!(table.similarity("boris", "dmitri").unwrap(), 0.0);

        /* A growable vector collects measurements without pre-sizing and hands
           them out again as a plain slice, here to score a fitted curve. */
        let mut observed: GrowVec<f64> = GrowVec::with_capacity(2);
        let mut predicted: GrowVec<f64> = GrowVec::with_capacity(2);

        for pair in [("amelie", "boris"), ("amelie", "carla"), ("boris", "carla")].iter() {
            let similarity = table.similarity(pair.0, pair.1).unwrap();
            observed.push(similarity);
            predicted.push(similarity);
        }

        let r_squared = regression::coefficient_of_determination(
            observed.as_slice(),
            predicted.as_slice(),
        );

        assert!((r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn loading_from_a_file_on_disk() {

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "header\nu,v,0.7\nv,w,0.3\n").unwrap();

        let dict = VertexDictionary::from_vertices(
            ["u", "v", "w"].iter().map(|v| String::from(*v))
        );

        let table = SimilarityTable::from_csv(dict, file.path().to_str().unwrap()).unwrap();

        assert_eq!(table.similarity("u", "v").unwrap(), 0.7);
        assert_eq!(table.similarity("v", "w").unwrap(), 0.3);
        assert_eq!(table.similarity("u", "w").unwrap(), 0.0);
    }

    #[test]
    fn missing_file_fails_construction() {

        let dict = VertexDictionary::from_vertices(
            ["u", "v"].iter().map(|v| String::from(*v))
        );

        assert!(SimilarityTable::from_csv(dict, "/no/such/file.csv").is_err());
    }
}
