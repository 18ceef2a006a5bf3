use bit_set::BitSet;

use crate::color::VertexId;

/** models an interference graph between antennas
(vertices are antennas, edges the pairs forbidden to share a frequency). */
#[derive(Debug, Clone)]
pub struct Instance {
    /// nb vertices
    n: usize,
    /// nb edges
    m: usize,
    /// edges of the graph
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// if exists: adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Option<Vec<BitSet>>,
}

impl Instance {

    /// number of vertices
    pub fn nb_vertices(&self) -> usize { self.n }

    /// number of edges
    pub fn nb_edges(&self) -> usize { self.m }

    /// vertices adjacent to vertex i
    pub fn neighbors(&self, i:VertexId) -> &[VertexId] {
        &self.adj_list[i]
    }

    /// degree of vertex i
    pub fn degree(&self, i:VertexId) -> usize { self.adj_list[i].len() }

    /// edge list
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// builds the edge list
    fn build_edges(adj_list:&[Vec<VertexId>]) -> Vec<(VertexId,VertexId)> {
        let mut res = Vec::new();
        for (i,l) in adj_list.iter().enumerate() {
            for j in l {
                if i < *j {
                    res.push((i,*j));
                }
            }
        }
        res
    }

    /** constructor using an adjacency list (assumed symmetric, no duplicates) */
    pub fn new(adj_list:Vec<Vec<VertexId>>) -> Self {
        let n = adj_list.len();
        // compute nb edges
        let mut m = 0;
        for e in &adj_list { // at the end: m = ∑ d(v)
            m += e.len();
        }
        m /= 2; // m = (∑ d(v)) / 2
        let edges = Self::build_edges(&adj_list);
        let mut res = Self { n,m, edges, adj_list, adj_matrix:None };
        res.populate_adj_matrix();
        res
    }

    /** constructor using an edge list. Duplicate edges (in either
    orientation) are collapsed into a single one. Endpoints must be distinct
    and smaller than n. */
    pub fn from_edges(n:usize, edges:&[(VertexId,VertexId)]) -> Self {
        let mut adj_list = vec![Vec::new(); n];
        for &(u,v) in edges {
            debug_assert!(u != v && u < n && v < n);
            if !adj_list[u].contains(&v) {
                adj_list[u].push(v);
                adj_list[v].push(u);
            }
        }
        Self::new(adj_list)
    }

    /// if called, populate the adj_matrix
    pub fn populate_adj_matrix(&mut self) {
        let mut res = vec![BitSet::default(); self.n];
        for (a,resa) in res.iter_mut().enumerate() {
            for b in &self.adj_list[a] {
                resa.insert(*b);
            }
        }
        self.adj_matrix = Some(res);
    }

    /** returns if a and b are adjacent
    if the adjacency matrix is defined: O(1)
    otherwise: O(Δ(G))
    */
    pub fn are_adjacent(&self, a:VertexId, b:VertexId) -> bool {
        match &self.adj_matrix {
            None => {
                self.neighbors(a).iter().any(|c| &b==c)
            },
            Some(matrix) => { matrix[a].contains(b) }
        }
    }

    /// print statistics of the instance
    pub fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = (0..self.nb_vertices()).map(|i| {
            self.degree(i)
        }).collect();
        if let (Some(dmin), Some(dmax)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", dmin);
            println!("\t{} \t max degree", dmax);
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges() {
        let inst = Instance::from_edges(3, &[(0,1),(1,2)]);
        assert_eq!(inst.nb_vertices(), 3);
        assert_eq!(inst.nb_edges(), 2);
        assert_eq!(inst.neighbors(1), &[0,2]);
        assert_eq!(inst.degree(1), 2);
        assert_eq!(inst.edges(), &[(0,1),(1,2)]);
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let inst = Instance::from_edges(2, &[(0,1),(1,0),(0,1)]);
        assert_eq!(inst.nb_edges(), 1);
        assert_eq!(inst.degree(0), 1);
    }

    #[test]
    fn test_are_adjacent() {
        let inst = Instance::from_edges(4, &[(0,1),(2,3)]);
        assert!(inst.are_adjacent(0,1));
        assert!(inst.are_adjacent(1,0));
        assert!(!inst.are_adjacent(0,2));
    }

    #[test]
    fn test_empty() {
        let inst = Instance::from_edges(0, &[]);
        assert_eq!(inst.nb_vertices(), 0);
        assert_eq!(inst.nb_edges(), 0);
        inst.display_statistics(); // must not panic on an empty graph
    }
}
