//! Heuristics for the frequency assignment problem.

/// largest-first greedy (Welsh-Powell style)
pub mod largest_first;
