//! Greedy frequency allocation for antenna networks (graph coloring)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// frequency assignments and checker
pub mod color;

/// interference graph between antennas
pub mod instance;

/// read/write DIMACS formats
pub mod dimacs;

/// read/write named antenna instances (JSON)
pub mod antennas;

/// frequency allocator over named antennas
pub mod allocator;

/// helper and utility methods for executables
pub mod util;

/// heuristics for the frequency assignment problem
pub mod search;
