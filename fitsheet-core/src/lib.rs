//! fitsheet-core: weekly workout spreadsheets to day-keyed JSON programs
//!
//! A workout sheet lists one exercise per row with the day caption merged
//! across the rows of that day. This library reads such a sheet into typed
//! rows, forward-fills the day captions, maps the Turkish day names to
//! canonical days and groups the exercises into a [`Program`].

pub mod config;
pub mod error;
pub mod normalize;
pub mod program;
pub mod reader;
pub mod row;
pub mod writer;

use std::io::Write;
use std::path::Path;
use tracing::info;

pub use config::ConvertConfig;
pub use error::{Phase, TransformationFailure};
pub use normalize::normalize;
pub use program::{Day, ExerciseRecord, Program};
pub use reader::SheetTable;
pub use row::{Column, Field, Row};

/// Main conversion interface
pub struct Converter {
    config: ConvertConfig,
}

impl Converter {
    /// Create a converter with default configuration
    pub fn new() -> Self {
        Self::with_config(ConvertConfig::default())
    }

    /// Create a converter with custom configuration
    pub fn with_config(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Read a workout sheet and build its program
    pub fn read_program<P: AsRef<Path>>(&self, input: P) -> Result<Program, TransformationFailure> {
        let table = reader::read_table(input, &self.config.input)
            .map_err(|e| TransformationFailure::new(Phase::Read, e))?;

        let program = normalize(table.rows);
        info!(
            days = program.len(),
            exercises = program.exercise_count(),
            "Built workout program"
        );
        Ok(program)
    }

    /// Convert a workout sheet and write the JSON program to `sink`
    pub fn convert_to_writer<P: AsRef<Path>, W: Write>(
        &self,
        input: P,
        sink: W,
    ) -> Result<Program, TransformationFailure> {
        let program = self.read_program(input)?;
        writer::write_program(&program, sink)
            .map_err(|e| TransformationFailure::new(Phase::Write, e))?;
        Ok(program)
    }

    /// Convert a workout sheet into a JSON file
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<Program, TransformationFailure> {
        let program = self.read_program(input)?;
        writer::write_program_file(&program, output)
            .map_err(|e| TransformationFailure::new(Phase::Write, e))?;
        Ok(program)
    }

    /// Convert using the input and output paths from the configuration
    pub fn run(&self) -> Result<Program, TransformationFailure> {
        self.config
            .validate()
            .map_err(|e| TransformationFailure::new(Phase::Read, e))?;
        let input = self
            .config
            .input_path()
            .map_err(|e| TransformationFailure::new(Phase::Read, e))?;
        self.convert_file(input, self.config.output_path())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}
