//! Workout table normalization: forward-filled days grouped into a [`Program`]

use crate::program::{Day, ExerciseRecord, Program};
use crate::row::{Field, Row};
use tracing::debug;

/// Replace blank day cells with the nearest preceding non-blank day.
///
/// Merged day cells arrive as one labelled row followed by blank ones.
/// Leading rows with no earlier day stay blank.
pub fn forward_fill<I>(rows: I) -> impl Iterator<Item = Row>
where
    I: IntoIterator<Item = Row>,
{
    rows.into_iter().scan(Field::Blank, |last_day, mut row| {
        if row.day.is_blank() {
            row.day = last_day.clone();
        } else {
            *last_day = row.day.clone();
        }
        Some(row)
    })
}

/// Canonical day for a day cell, if it is one of the mapped captions
pub fn canonical_day(field: &Field) -> Option<Day> {
    field.as_text().and_then(Day::from_localized)
}

/// Build the exercise record for a row. Blank cells become empty strings.
pub fn exercise_record(row: &Row) -> ExerciseRecord {
    ExerciseRecord {
        name: row.exercise.to_string(),
        sets_reps: row.sets_reps.to_string(),
        rir: row.rir.to_string(),
    }
}

/// Turn sheet rows into a day-keyed program.
///
/// Rows whose forward-filled day is blank or not in the day map are skipped.
pub fn normalize<I>(rows: I) -> Program
where
    I: IntoIterator<Item = Row>,
{
    let mut program = Program::new();

    for (index, row) in forward_fill(rows).enumerate() {
        let Some(day) = canonical_day(&row.day) else {
            debug!(row = index + 1, day = %row.day, "Skipping row without a mapped day");
            continue;
        };
        program.push(day, exercise_record(&row));
    }

    program
}
