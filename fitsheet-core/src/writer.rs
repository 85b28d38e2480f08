//! JSON output for workout programs

use crate::program::Program;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Serialize a program as UTF-8 JSON with 2-space indentation.
///
/// Non-ASCII text is written as-is and no trailing newline is added.
pub fn write_program<W: Write>(program: &Program, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, program).context("Failed to serialize program")?;
    writer.flush().context("Failed to flush program output")?;
    Ok(())
}

/// Render a program to a JSON string
pub fn to_json_string(program: &Program) -> Result<String> {
    serde_json::to_string_pretty(program).context("Failed to serialize program")
}

/// Write a program to a JSON file, replacing any existing file
pub fn write_program_file<P: AsRef<Path>>(program: &Program, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_program(program, BufWriter::new(file))
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::{Day, ExerciseRecord};

    fn sample() -> Program {
        let mut program = Program::new();
        program.push(
            Day::Wednesday,
            ExerciseRecord {
                name: "Şınav".to_string(),
                sets_reps: "3x15".to_string(),
                rir: "1".to_string(),
            },
        );
        program
    }

    #[test]
    fn test_pretty_layout() {
        let json = to_json_string(&sample()).unwrap();
        let expected = "{\n  \"Wednesday\": [\n    {\n      \"name\": \"Şınav\",\n      \"sets_reps\": \"3x15\",\n      \"rir\": \"1\"\n    }\n  ]\n}";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_writer_matches_string_output() {
        let mut buf = Vec::new();
        write_program(&sample(), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), to_json_string(&sample()).unwrap());
    }

    #[test]
    fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workout_program.json");

        write_program_file(&sample(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Şınav"));
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn test_write_file_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_program_file(&sample(), &path).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to create output file"));
    }
}
