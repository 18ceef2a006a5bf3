use crate::instance::Instance;

/** Vertex Id */
pub type VertexId = usize;

/** Frequency index (1-based; 0 marks a not-yet-assigned vertex) */
pub type Frequency = usize;

/** Frequency assignment of an instance
(assignment[v]: frequency given to vertex v).
*/
pub type Assignment = Vec<Frequency>;

/// number of distinct frequencies used by an assignment
/// (the largest index handed out; 0 if the assignment is empty)
pub fn nb_frequencies(assignment: &[Frequency]) -> usize {
    assignment.iter().copied().max().unwrap_or(0)
}

/** groups the vertices per frequency
(classes[k]: vertices using frequency k+1). Used to export solutions. */
pub fn classes(assignment: &[Frequency]) -> Vec<Vec<VertexId>> {
    let mut res = vec![Vec::new(); nb_frequencies(assignment)];
    for (v, f) in assignment.iter().enumerate() {
        if *f > 0 {
            res[*f - 1].push(v);
        }
    }
    res
}

/** result of checking an assignment against an instance */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the assignment is feasible and uses this many frequencies
    Ok(usize),
    /// a vertex holds no frequency
    Unassigned(VertexId),
    /// two adjacent vertices share a frequency
    Conflict(VertexId, VertexId, Frequency),
}

/**
checks that every vertex holds a frequency and that no two adjacent
vertices share one. Returns the number of frequencies used if feasible.
*/
pub fn checker(inst: &Instance, assignment: &[Frequency]) -> CheckerResult {
    for v in 0..inst.nb_vertices() {
        match assignment.get(v) {
            None | Some(0) => return CheckerResult::Unassigned(v),
            Some(_) => {}
        }
    }
    for &(u, v) in inst.edges() {
        if assignment[u] == assignment[v] {
            return CheckerResult::Conflict(u, v, assignment[u]);
        }
    }
    CheckerResult::Ok(nb_frequencies(assignment))
}


#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Instance {
        Instance::from_edges(3, &[(0, 1), (1, 2)])
    }

    #[test]
    fn test_nb_frequencies() {
        assert_eq!(nb_frequencies(&[]), 0);
        assert_eq!(nb_frequencies(&[1, 1, 1]), 1);
        assert_eq!(nb_frequencies(&[2, 1, 2]), 2);
    }

    #[test]
    fn test_classes() {
        assert_eq!(classes(&[2, 1, 2]), vec![vec![1], vec![0, 2]]);
        assert!(classes(&[]).is_empty());
    }

    #[test]
    fn test_checker_feasible() {
        assert_eq!(checker(&path3(), &[2, 1, 2]), CheckerResult::Ok(2));
    }

    #[test]
    fn test_checker_conflict() {
        assert_eq!(checker(&path3(), &[1, 1, 2]), CheckerResult::Conflict(0, 1, 1));
    }

    #[test]
    fn test_checker_unassigned() {
        assert_eq!(checker(&path3(), &[1, 2, 0]), CheckerResult::Unassigned(2));
        assert_eq!(checker(&path3(), &[1, 2]), CheckerResult::Unassigned(2));
    }
}
