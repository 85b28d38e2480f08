//! Typed rows of the workout sheet

use anyhow::Result;
use calamine::Data;
use serde::Serialize;
use std::fmt;

/// The positional columns of the workout sheet, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Day,
    Exercise,
    SetsReps,
    Rir,
    Date1,
    Date2,
    Date3,
    Off1,
    Date4,
    Date5,
    Off2,
}

impl Column {
    pub const COUNT: usize = 11;

    pub const ALL: [Column; Column::COUNT] = [
        Column::Day,
        Column::Exercise,
        Column::SetsReps,
        Column::Rir,
        Column::Date1,
        Column::Date2,
        Column::Date3,
        Column::Off1,
        Column::Date4,
        Column::Date5,
        Column::Off2,
    ];

    /// Canonical label used once the raw captions are discarded
    pub fn label(&self) -> &'static str {
        match self {
            Column::Day => "Day",
            Column::Exercise => "Exercise",
            Column::SetsReps => "SetsReps",
            Column::Rir => "RIR",
            Column::Date1 => "Date1",
            Column::Date2 => "Date2",
            Column::Date3 => "Date3",
            Column::Off1 => "Off1",
            Column::Date4 => "Date4",
            Column::Date5 => "Date5",
            Column::Off2 => "Off2",
        }
    }
}

/// A single cell value after leaving the spreadsheet layer
///
/// Date cells keep their spreadsheet serial number (`45000.5`), not a timestamp,
/// and booleans print lowercase (`true`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Field {
    #[default]
    Blank,
    Number(f64),
    Text(String),
    Boolean(bool),
}

impl Field {
    /// Check if the cell carries no value
    pub fn is_blank(&self) -> bool {
        matches!(self, Field::Blank)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&Data> for Field {
    fn from(data: &Data) -> Self {
        match data {
            Data::Int(i) => Field::Number(*i as f64),
            Data::Float(f) => Field::Number(*f),
            Data::String(s) if s.is_empty() => Field::Blank,
            Data::String(s) => Field::Text(s.clone()),
            Data::Bool(b) => Field::Boolean(*b),
            // Error cells (#N/A, #DIV/0!, ...) read as missing values
            Data::Error(_) => Field::Blank,
            Data::Empty => Field::Blank,
            Data::DateTime(dt) => Field::Number(dt.as_f64()),
            Data::DateTimeIso(s) => Field::Text(s.clone()),
            Data::DurationIso(s) => Field::Text(s.clone()),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        if s.is_empty() {
            Field::Blank
        } else {
            Field::Text(s.to_string())
        }
    }
}

impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Field::Number(n)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Blank => Ok(()),
            // f64 Display drops the fraction of integral values: 2.0 -> "2"
            Field::Number(n) => write!(f, "{}", n),
            Field::Text(s) => f.write_str(s),
            Field::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// One data row of the workout sheet with its eleven positional fields
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Row {
    #[serde(rename = "Day")]
    pub day: Field,
    #[serde(rename = "Exercise")]
    pub exercise: Field,
    #[serde(rename = "SetsReps")]
    pub sets_reps: Field,
    #[serde(rename = "RIR")]
    pub rir: Field,
    #[serde(rename = "Date1")]
    pub date1: Field,
    #[serde(rename = "Date2")]
    pub date2: Field,
    #[serde(rename = "Date3")]
    pub date3: Field,
    #[serde(rename = "Off1")]
    pub off1: Field,
    #[serde(rename = "Date4")]
    pub date4: Field,
    #[serde(rename = "Date5")]
    pub date5: Field,
    #[serde(rename = "Off2")]
    pub off2: Field,
}

impl Row {
    /// Build a row from exactly [`Column::COUNT`] fields in sheet order
    pub fn from_fields(fields: Vec<Field>) -> Result<Self> {
        let [
            day,
            exercise,
            sets_reps,
            rir,
            date1,
            date2,
            date3,
            off1,
            date4,
            date5,
            off2,
        ]: [Field; Column::COUNT] = fields.try_into().map_err(|fields: Vec<Field>| {
            anyhow::anyhow!(
                "Length mismatch: expected {} columns, found {}",
                Column::COUNT,
                fields.len()
            )
        })?;

        Ok(Self {
            day,
            exercise,
            sets_reps,
            rir,
            date1,
            date2,
            date3,
            off1,
            date4,
            date5,
            off2,
        })
    }

    /// Convenience constructor for the four columns the normalizer reads
    pub fn new(
        day: impl Into<Field>,
        exercise: impl Into<Field>,
        sets_reps: impl Into<Field>,
        rir: impl Into<Field>,
    ) -> Self {
        Self {
            day: day.into(),
            exercise: exercise.into(),
            sets_reps: sets_reps.into(),
            rir: rir.into(),
            ..Self::default()
        }
    }

    /// Get a field by column
    pub fn get(&self, column: Column) -> &Field {
        match column {
            Column::Day => &self.day,
            Column::Exercise => &self.exercise,
            Column::SetsReps => &self.sets_reps,
            Column::Rir => &self.rir,
            Column::Date1 => &self.date1,
            Column::Date2 => &self.date2,
            Column::Date3 => &self.date3,
            Column::Off1 => &self.off1,
            Column::Date4 => &self.date4,
            Column::Date5 => &self.date5,
            Column::Off2 => &self.off2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_keeps_column_order() {
        let fields: Vec<Field> = Column::ALL
            .iter()
            .map(|c| Field::from(c.label()))
            .collect();
        let row = Row::from_fields(fields).unwrap();

        for column in Column::ALL {
            assert_eq!(row.get(column).as_text(), Some(column.label()));
        }
    }

    #[test]
    fn test_from_fields_rejects_wrong_width() {
        let err = Row::from_fields(vec![Field::Blank; 4]).unwrap_err();
        assert!(err.to_string().contains("expected 11 columns, found 4"));

        assert!(Row::from_fields(vec![Field::Blank; 12]).is_err());
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Number(2.0).to_string(), "2");
        assert_eq!(Field::Number(1.5).to_string(), "1.5");
        assert_eq!(Field::Text("1-2".into()).to_string(), "1-2");
        assert_eq!(Field::Blank.to_string(), "");
        assert_eq!(Field::Boolean(true).to_string(), "true");
    }

    #[test]
    fn test_field_from_data() {
        assert_eq!(Field::from(&Data::Int(3)), Field::Number(3.0));
        assert_eq!(Field::from(&Data::String(String::new())), Field::Blank);
        assert_eq!(Field::from(&Data::Empty), Field::Blank);
        assert_eq!(
            Field::from(&Data::Error(calamine::CellErrorType::NA)),
            Field::Blank
        );
        assert_eq!(
            Field::from(&Data::String("Salı".into())),
            Field::Text("Salı".into())
        );
    }
}
