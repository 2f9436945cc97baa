//! Local store for puzzle input files
//!
//! Inputs are plain text files the user drops under the input directory;
//! nothing is ever written or fetched.

use crate::error::InputError;
use std::fs;
use std::path::PathBuf;

/// Read-only view of the input directory.
///
/// Layout: `{input_dir}/{year}/day{day:02}.txt`
pub struct InputStore {
    input_dir: PathBuf,
}

impl InputStore {
    pub fn new(input_dir: PathBuf) -> Self {
        Self { input_dir }
    }

    /// Path where the input for a specific year/day is expected
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.input_dir
            .join(year.to_string())
            .join(format!("day{day:02}.txt"))
    }

    /// Check if the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input for a specific year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        if !path.exists() {
            return Err(InputError::NotFound(path));
        }
        fs::read_to_string(&path).map_err(|source| InputError::Io { path, source })
    }
}
