/*
Implements:
 - read/write procedures for the named antenna instance format (JSON)
 - conversion into a frequency allocator
*/
use std::fs;

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::allocator::{FrequencyAllocator, ValidationError};

/** data structure to represent a named antenna instance */
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AntennaInstance {
    /// antenna labels (expected unique)
    antennas: Vec<String>,
    /// pairs of antennas forbidden to share a frequency
    constraints: Vec<(String,String)>,
}

/** error while reading an antenna instance file */
#[derive(Debug, Error)]
pub enum AntennaReadError {
    /// the file could not be read
    #[error("unable to read `{filename}`: {source}")]
    Io {
        /// file that failed to open
        filename: String,
        /// underlying io error
        source: std::io::Error,
    },
    /// the file is not a valid antenna instance
    #[error("unable to parse `{filename}`: {source}")]
    Json {
        /// offending file
        filename: String,
        /// underlying deserialization error
        source: serde_json::Error,
    },
}

impl AntennaInstance {

    /** constructor from label and constraint lists */
    pub fn new(antennas:Vec<String>, constraints:Vec<(String,String)>) -> Self {
        Self { antennas, constraints }
    }

    /** reads an antenna instance from a JSON file. */
    pub fn from_file(filename:&str) -> Result<Self, AntennaReadError> {
        let raw = fs::read_to_string(filename)
            .map_err(|source| AntennaReadError::Io { filename:filename.to_string(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| AntennaReadError::Json { filename:filename.to_string(), source })
    }

    /// antenna labels
    pub fn antennas(&self) -> &[String] { &self.antennas }

    /// constraint pairs
    pub fn constraints(&self) -> &[(String,String)] { &self.constraints }

    /** converts to a frequency allocator (validates labels and constraints). */
    pub fn to_allocator(&self) -> Result<FrequencyAllocator, ValidationError> {
        FrequencyAllocator::new(self.antennas.clone(), &self.constraints)
    }

    /** displays some statistics of the instance */
    pub fn display_statistics(&self) {
        println!("\t{:>25}{:>10}", "nb antennas:",    self.antennas.len());
        println!("\t{:>25}{:>10}", "nb constraints:", self.constraints.len());
    }
}
