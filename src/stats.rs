use fnv::FnvHashMap;

/// Maps vertex identifiers to consecutive integer indices. Indices are assigned
/// in first-seen order of the supplied identifiers, so the caller controls the
/// numbering by controlling the iteration order. Duplicates keep their first index.
pub struct VertexDictionary {
    vertex_dict: FnvHashMap<String, u32>,
}

impl VertexDictionary {

    pub fn num_vertices(&self) -> usize {
        self.vertex_dict.len()
    }

    pub fn vertex_index(&self, name: &str) -> Option<u32> {
        self.vertex_dict.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vertex_dict.contains_key(name)
    }

    /// Reverse mapping, e.g. for writing results under the original identifiers.
    /// Position `i` of the returned vector holds the name of vertex index `i`.
    pub fn names_by_index(&self) -> Vec<&str> {
        let mut names = vec![""; self.vertex_dict.len()];

        for (name, index) in self.vertex_dict.iter() {
            names[*index as usize] = name;
        }

        names
    }
}

impl VertexDictionary {

    /// Numbers the supplied vertices `0..n` in first-seen order.
    pub fn from_vertices<T>(vertices: T) -> Self
        where T: IntoIterator<Item = String> {

        let mut vertex_index: u32 = 0;
        let mut vertex_dict: FnvHashMap<String, u32> =
            FnvHashMap::with_capacity_and_hasher(100, Default::default());

        for vertex in vertices {
            if !vertex_dict.contains_key(&vertex) {
                vertex_dict.insert(vertex, vertex_index);
                vertex_index += 1;
            }
        }

        VertexDictionary { vertex_dict }
    }
}
