use bit_set::BitSet;

use crate::color::{Assignment, Frequency};
use crate::instance::Instance;

/** implements a largest-first greedy (Welsh-Powell style).
    1. order the vertices by decreasing degree (most constrained first).
       Equal-degree vertices keep their original input order (stable sort),
       so repeated runs on the same instance produce the same assignment
    2. give each vertex, in that order, the smallest frequency (starting
       at 1) not already used by one of its neighbors
    3. repeat until every vertex holds a frequency

This is a single forward pass: vertices assigned later never change an
earlier choice. The number of frequencies used is a heuristic upper bound
on the chromatic number, not a proven minimum.
*/
pub fn largest_first(inst:&Instance) -> Assignment {
    let n:usize = inst.nb_vertices();
    let mut order:Vec<usize> = (0..n).collect();
    order.sort_by(|a,b| inst.degree(*b).cmp(&inst.degree(*a)));
    let mut assignment:Assignment = vec![0 ; n]; // assignment[v] -> frequency of vertex v (0: none yet)
    let mut blocked:BitSet = BitSet::default(); // frequencies the current vertex sees
    for v in order {
        blocked.clear();
        for neighbor in inst.neighbors(v) {
            if assignment[*neighbor] > 0 {
                blocked.insert(assignment[*neighbor]);
            }
        }
        let mut frequency:Frequency = 1;
        while blocked.contains(frequency) { frequency += 1; }
        assignment[v] = frequency;
    }
    assignment
}
