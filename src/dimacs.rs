use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take, take_until};
use nom::character::complete::{digit1, line_ending, space1};
use nom::combinator::{map_res, opt};
use nom::multi::many0;
use nom::sequence::{preceded, separated_pair, terminated};
use thiserror::Error;

use crate::color::VertexId;
use crate::instance::Instance;

/** error while reading a DIMACS instance file */
#[derive(Debug, Error)]
pub enum ReadError {
    /// the file could not be read
    #[error("unable to read `{filename}`: {source}")]
    Io {
        /// file that failed to open
        filename: String,
        /// underlying io error
        source: std::io::Error,
    },
    /// the `p edge n m` (or `p col n m`) header is missing or malformed
    #[error("`{filename}`: missing or malformed `p` header line")]
    Header {
        /// offending file
        filename: String,
    },
    /// an edge endpoint is outside 1..=n
    #[error("`{filename}`: edge ({u},{v}) out of range (vertices are numbered 1..={n})")]
    EdgeOutOfRange {
        /// offending file
        filename: String,
        /// first endpoint as written in the file
        u: usize,
        /// second endpoint as written in the file
        v: usize,
        /// number of vertices declared by the header
        n: usize,
    },
    /// an edge pairs a vertex with itself
    #[error("`{filename}`: edge ({v},{v}) pairs a vertex with itself")]
    SelfLoop {
        /// offending file
        filename: String,
        /// the repeated endpoint
        v: usize,
    },
    /// the number of edge lines does not match the header
    #[error("`{filename}`: header declares {expected} edges, found {found} edge lines")]
    EdgeCount {
        /// offending file
        filename: String,
        /// edge count declared by the header
        expected: usize,
        /// edge lines actually read
        found: usize,
    },
}

/** reads an instance from a DIMACS file (`c` comments, `p edge n m` header,
`e u v` lines with 1-based endpoints). Some files list each edge twice; both
m and 2m edge lines are accepted, duplicates collapse in the instance. */
pub fn read_from_file(filename:&str) -> Result<Instance, ReadError> {
    let raw = fs::read_to_string(filename)
        .map_err(|source| ReadError::Io { filename:filename.to_string(), source })?
        .replace('\r', "");
    let after_comments = match skip_comments(raw.as_str()) {
        Ok((rest,_)) => rest,
        Err(_) => raw.as_str(),
    };
    let (mut rest, (n,m)) = read_header(after_comments)
        .map_err(|_| ReadError::Header { filename:filename.to_string() })?;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::with_capacity(m);
    while let Ok((remaining, (a,b))) = read_edge(rest) {
        rest = remaining;
        if a == b {
            return Err(ReadError::SelfLoop { filename:filename.to_string(), v:a });
        }
        if a == 0 || b == 0 || a > n || b > n {
            return Err(ReadError::EdgeOutOfRange { filename:filename.to_string(), u:a, v:b, n });
        }
        edges.push((a-1, b-1));
    }
    if edges.len() != m && 2*edges.len() != m {
        return Err(ReadError::EdgeCount {
            filename:filename.to_string(), expected:m, found:edges.len(),
        });
    }
    Ok(Instance::from_edges(n, &edges))
}

/** writes a solution into a file. Line k lists the (1-based) vertices using
frequency k+1. */
pub fn write_solution(filename:&str, classes:&[Vec<VertexId>]) -> std::io::Result<()> {
    fs::write(filename, solution_to_string(classes))
}

/** writes a string encoding the solution (use this to export the solution) */
pub fn solution_to_string(classes:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for class in classes {
        for v in class {
            res += format!("{} ", v+1).as_str();
        }
        res += "\n";
    }
    res
}

/// reads an integer
fn integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |digits:&str| digits.parse::<usize>())(s)
}

/// reads two integers separated by spaces, with an optional trailing newline
fn pair_of_integers(s:&str) -> IResult<&str, (usize,usize)> {
    terminated(separated_pair(integer, space1, integer), opt(line_ending))(s)
}

/// skips all comment lines
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    many0(preceded(tag("c"), terminated(take_until("\n"), take(1usize))))(s)
}

/// reads the header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge "), tag("p col "))), pair_of_integers)(s)
}

/// reads an edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e "), pair_of_integers)(s)
}
