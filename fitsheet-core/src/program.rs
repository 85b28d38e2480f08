//! Day-keyed workout program

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Canonical training days recognized in the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Day {
    Tuesday,
    Wednesday,
    Thursday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Map a Turkish day caption to its canonical day. Exact match only.
    pub fn from_localized(name: &str) -> Option<Day> {
        match name {
            "Salı" => Some(Day::Tuesday),
            "Çarşamba" => Some(Day::Wednesday),
            "Perşembe" => Some(Day::Thursday),
            "Cumartesi" => Some(Day::Saturday),
            "Pazar" => Some(Day::Sunday),
            _ => None,
        }
    }

    pub fn localized_name(&self) -> &'static str {
        match self {
            Day::Tuesday => "Salı",
            Day::Wednesday => "Çarşamba",
            Day::Thursday => "Perşembe",
            Day::Saturday => "Cumartesi",
            Day::Sunday => "Pazar",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single prescribed exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseRecord {
    pub name: String,
    pub sets_reps: String,
    /// Reps in reserve, empty when the sheet leaves it blank
    pub rir: String,
}

/// Exercises grouped by day.
///
/// Days keep the order of their first appearance and exercises keep row order.
/// A day is only present once it holds at least one exercise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    days: Vec<(Day, Vec<ExerciseRecord>)>,
}

impl Program {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exercise to a day, opening the day on first use
    pub fn push(&mut self, day: Day, record: ExerciseRecord) {
        match self.days.iter_mut().find(|(d, _)| *d == day) {
            Some((_, records)) => records.push(record),
            None => self.days.push((day, vec![record])),
        }
    }

    /// Exercises for a day, if the day is present
    pub fn get(&self, day: Day) -> Option<&[ExerciseRecord]> {
        self.days
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, records)| records.as_slice())
    }

    /// Days with their exercises in insertion order
    pub fn days(&self) -> impl Iterator<Item = (Day, &[ExerciseRecord])> {
        self.days
            .iter()
            .map(|(day, records)| (*day, records.as_slice()))
    }

    /// Number of days present
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of exercises across all days
    pub fn exercise_count(&self) -> usize {
        self.days.iter().map(|(_, records)| records.len()).sum()
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, records) in &self.days {
            map.serialize_entry(day.as_str(), records)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ExerciseRecord {
        ExerciseRecord {
            name: name.to_string(),
            sets_reps: "3x10".to_string(),
            rir: String::new(),
        }
    }

    #[test]
    fn test_day_map_round_trips() {
        for day in Day::ALL {
            assert_eq!(Day::from_localized(day.localized_name()), Some(day));
        }
        assert_eq!(Day::from_localized("Pazartesi"), None);
        assert_eq!(Day::from_localized("salı"), None);
        assert_eq!(Day::from_localized(""), None);
    }

    #[test]
    fn test_push_groups_by_first_appearance() {
        let mut program = Program::new();
        program.push(Day::Sunday, record("Run"));
        program.push(Day::Tuesday, record("Squat"));
        program.push(Day::Sunday, record("Swim"));

        let days: Vec<Day> = program.days().map(|(d, _)| d).collect();
        assert_eq!(days, vec![Day::Sunday, Day::Tuesday]);

        let sunday: Vec<&str> = program
            .get(Day::Sunday)
            .unwrap()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(sunday, vec!["Run", "Swim"]);
        assert_eq!(program.get(Day::Thursday), None);
        assert_eq!(program.len(), 2);
        assert_eq!(program.exercise_count(), 3);
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let mut program = Program::new();
        program.push(Day::Saturday, record("Deadlift"));
        program.push(Day::Tuesday, record("Squat"));

        let json = serde_json::to_string(&program).unwrap();
        assert_eq!(
            json,
            r#"{"Saturday":[{"name":"Deadlift","sets_reps":"3x10","rir":""}],"Tuesday":[{"name":"Squat","sets_reps":"3x10","rir":""}]}"#
        );
    }

    #[test]
    fn test_empty_program() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(serde_json::to_string(&program).unwrap(), "{}");
    }
}
