use std::collections::HashMap;

use thiserror::Error;

use crate::color::{nb_frequencies, Assignment, Frequency};
use crate::instance::Instance;
use crate::search::largest_first::largest_first;

/** invalid input, rejected when the allocator is built */
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// the same antenna label appears twice in the antenna list
    #[error("duplicate antenna label `{0}`")]
    DuplicateAntenna(String),
    /// a constraint pairs an antenna with itself
    #[error("constraint pairs antenna `{0}` with itself")]
    SelfConflict(String),
    /// a constraint references a label absent from the antenna list
    #[error("constraint references unknown antenna `{0}`")]
    UnknownAntenna(String),
}

/** assigns frequencies to named antennas so that no two conflicting
antennas share one, using as few distinct frequencies as the greedy
largest-first pass manages.

The antenna list and the constraints form a snapshot: the interference
graph is built once at construction and never mutated afterwards. If the
input changes, build a new allocator. Duplicate constraints (in either
orientation) are harmless; duplicate labels, self-conflicts and unknown
labels are rejected eagerly.
*/
#[derive(Debug)]
pub struct FrequencyAllocator {
    /// antenna labels, in input order (vertex i of the instance is antennas[i])
    antennas: Vec<String>,
    /// interference graph over the antenna indices
    instance: Instance,
    /// frequency assignment of the last greedy run (None before the first)
    assignment: Option<Assignment>,
}

impl FrequencyAllocator {

    /** builds an allocator from antenna labels and conflict pairs.

# Errors
 - [`ValidationError::DuplicateAntenna`] if a label appears twice
 - [`ValidationError::SelfConflict`] if a constraint pairs a label with itself
 - [`ValidationError::UnknownAntenna`] if a constraint endpoint is not a listed antenna
    */
    pub fn new(antennas:Vec<String>, constraints:&[(String,String)]) -> Result<Self, ValidationError> {
        let edges = {
            let mut index_of:HashMap<&str,usize> = HashMap::with_capacity(antennas.len());
            for (i,label) in antennas.iter().enumerate() {
                if index_of.insert(label.as_str(), i).is_some() {
                    return Err(ValidationError::DuplicateAntenna(label.clone()));
                }
            }
            let mut res = Vec::with_capacity(constraints.len());
            for (u,v) in constraints {
                if u == v {
                    return Err(ValidationError::SelfConflict(u.clone()));
                }
                let iu = *index_of.get(u.as_str())
                    .ok_or_else(|| ValidationError::UnknownAntenna(u.clone()))?;
                let iv = *index_of.get(v.as_str())
                    .ok_or_else(|| ValidationError::UnknownAntenna(v.clone()))?;
                res.push((iu,iv));
            }
            res
        };
        let n = antennas.len();
        Ok(Self { antennas, instance: Instance::from_edges(n, &edges), assignment: None })
    }

    /// antenna labels, in input order
    pub fn antennas(&self) -> &[String] { &self.antennas }

    /// underlying interference graph
    pub fn instance(&self) -> &Instance { &self.instance }

    /// index-based assignment of the last greedy run, if any
    pub fn assignment(&self) -> Option<&Assignment> { self.assignment.as_ref() }

    /** runs the largest-first greedy on the interference graph and returns
    the label -> frequency mapping. Every listed antenna receives exactly one
    frequency ≥ 1. Rerunning recomputes from the same snapshot and fully
    overwrites the previous assignment. */
    pub fn greedy_coloring(&mut self) -> HashMap<String,Frequency> {
        let assignment = largest_first(&self.instance);
        let res = self.antennas.iter().cloned()
            .zip(assignment.iter().copied())
            .collect();
        self.assignment = Some(assignment);
        res
    }

    /** number of distinct frequencies used by the last greedy run
    (a heuristic upper bound on the minimum needed). 0 if no run happened
    yet or there are no antennas. */
    pub fn nb_frequencies(&self) -> usize {
        match &self.assignment {
            None => 0,
            Some(assignment) => nb_frequencies(assignment),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::color::{checker, CheckerResult};

    fn labels(l:&[&str]) -> Vec<String> {
        l.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(l:&[(&str,&str)]) -> Vec<(String,String)> {
        l.iter().map(|(u,v)| (u.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_path_scenario() {
        // B conflicts with both others, thus gets frequency 1
        let mut alloc = FrequencyAllocator::new(
            labels(&["A","B","C"]),
            &pairs(&[("A","B"),("B","C")]),
        ).unwrap();
        assert_eq!(alloc.nb_frequencies(), 0); // nothing computed yet
        let frequencies = alloc.greedy_coloring();
        assert_eq!(frequencies["A"], 2);
        assert_eq!(frequencies["B"], 1);
        assert_eq!(frequencies["C"], 2);
        assert_eq!(alloc.nb_frequencies(), 2);
    }

    #[test]
    fn test_triangle_scenario() {
        let mut alloc = FrequencyAllocator::new(
            labels(&["A","B","C"]),
            &pairs(&[("A","B"),("B","C"),("A","C")]),
        ).unwrap();
        let frequencies = alloc.greedy_coloring();
        let mut used:Vec<Frequency> = frequencies.values().copied().collect();
        used.sort_unstable();
        assert_eq!(used, vec![1,2,3]);
        assert_eq!(alloc.nb_frequencies(), 3);
    }

    #[test]
    fn test_empty_input() {
        let mut alloc = FrequencyAllocator::new(Vec::new(), &[]).unwrap();
        assert!(alloc.greedy_coloring().is_empty());
        assert_eq!(alloc.nb_frequencies(), 0);
    }

    #[test]
    fn test_no_constraints() {
        let mut alloc = FrequencyAllocator::new(labels(&["A","B","C"]), &[]).unwrap();
        let frequencies = alloc.greedy_coloring();
        assert!(frequencies.values().all(|f| *f == 1));
        assert_eq!(alloc.nb_frequencies(), 1);
    }

    #[test]
    fn test_duplicate_constraints_are_noops() {
        let alloc = FrequencyAllocator::new(
            labels(&["A","B"]),
            &pairs(&[("A","B"),("B","A"),("A","B")]),
        ).unwrap();
        assert_eq!(alloc.instance().nb_edges(), 1);
    }

    #[test]
    fn test_duplicate_antenna_rejected() {
        let res = FrequencyAllocator::new(labels(&["A","B","A"]), &[]);
        assert_eq!(res.unwrap_err(), ValidationError::DuplicateAntenna("A".to_string()));
    }

    #[test]
    fn test_self_conflict_rejected() {
        let res = FrequencyAllocator::new(
            labels(&["A","B"]),
            &pairs(&[("A","A")]),
        );
        assert_eq!(res.unwrap_err(), ValidationError::SelfConflict("A".to_string()));
    }

    #[test]
    fn test_unknown_antenna_rejected() {
        let res = FrequencyAllocator::new(
            labels(&["A","B"]),
            &pairs(&[("A","Z")]),
        );
        assert_eq!(res.unwrap_err(), ValidationError::UnknownAntenna("Z".to_string()));
    }

    #[test]
    fn test_summary_matches_assignment() {
        let mut alloc = FrequencyAllocator::new(
            labels(&["A","B","C","D"]),
            &pairs(&[("A","B"),("B","C"),("C","D"),("D","A")]),
        ).unwrap();
        let frequencies = alloc.greedy_coloring();
        let max = frequencies.values().copied().max().unwrap();
        assert_eq!(alloc.nb_frequencies(), max);
    }

    #[test]
    fn test_assignment_is_feasible() {
        let mut alloc = FrequencyAllocator::new(
            labels(&["n0","n1","n2","n3","n4","n5"]),
            &pairs(&[
                ("n0","n1"),("n1","n2"),("n2","n0"),
                ("n2","n3"),("n3","n4"),("n4","n5"),("n5","n3"),
            ]),
        ).unwrap();
        alloc.greedy_coloring();
        let assignment = alloc.assignment().unwrap();
        match checker(alloc.instance(), assignment) {
            CheckerResult::Ok(nb) => assert_eq!(nb, alloc.nb_frequencies()),
            res => panic!("infeasible assignment: {:?}", res),
        }
    }

    #[test]
    fn test_reruns_are_idempotent() {
        let mut alloc = FrequencyAllocator::new(
            labels(&["A","B","C","D"]),
            &pairs(&[("A","B"),("C","D"),("B","C")]),
        ).unwrap();
        let first = alloc.greedy_coloring();
        let second = alloc.greedy_coloring();
        assert_eq!(first, second);
    }
}
