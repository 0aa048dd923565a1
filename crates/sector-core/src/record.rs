//! Row validation and normalization.

use crate::{Column, RecordError, SqlValue, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;
use std::collections::HashMap;

/// One input row: column → raw cell text, exactly as read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<Column, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: Column, value: impl Into<String>) {
        self.cells.insert(column, value.into());
    }

    /// Raw cell text, untrimmed.
    pub fn raw(&self, column: Column) -> Option<&str> {
        self.cells.get(&column).map(String::as_str)
    }

    /// Trimmed cell text; `None` when missing, empty or whitespace-only.
    pub fn value(&self, column: Column) -> Option<&str> {
        self.raw(column).map(str::trim).filter(|v| !v.is_empty())
    }
}

impl<S: Into<String>> FromIterator<(Column, S)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (Column, S)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (column, value) in iter {
            row.insert(column, value);
        }
        row
    }
}

/// A recoverable data-quality fix applied while parsing a row.
#[derive(Debug, Clone, PartialEq)]
pub struct Correction {
    pub column: Column,
    pub message: String,
}

/// A validated record together with the corrections applied to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    pub record: SectorRecord,
    pub corrections: Vec<Correction>,
}

/// A validated sector row.
///
/// Optional fields are `None` when the source cell was missing or blank.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRecord {
    pub id: i64,
    pub code: Option<String>,
    pub name: Option<String>,
    pub agency: Option<String>,
    pub active: Option<i64>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl SectorRecord {
    /// Validate and normalize a raw row.
    ///
    /// Fails on an unusable id, coordinate or flag. A positive longitude is
    /// negated and an unparseable timestamp becomes `None`; both are reported
    /// as corrections.
    pub fn parse(row: &RawRow) -> Result<ParsedRecord, RecordError> {
        let id = parse_id(row.value(Column::Id))?;
        let mut corrections = Vec::new();

        let active = parse_flag(Column::Active, row.value(Column::Active))?;
        let latitude = parse_coordinate(Column::Latitude, row.value(Column::Latitude))?;
        let mut longitude = parse_coordinate(Column::Longitude, row.value(Column::Longitude))?;

        // Every sector lies west of Greenwich; a positive longitude is a sign typo.
        if let Some(lon) = longitude.filter(|lon| *lon > 0.0) {
            let corrected = -lon;
            corrections.push(Correction {
                column: Column::Longitude,
                message: format!(
                    "corrected from {} to {corrected}",
                    row.value(Column::Longitude).unwrap_or_default()
                ),
            });
            longitude = Some(corrected);
        }

        let created_at = parse_timestamp(Column::CreatedAt, row, &mut corrections);
        let updated_at = parse_timestamp(Column::UpdatedAt, row, &mut corrections);

        let text = |column: Column| row.value(column).map(str::to_string);

        let record = SectorRecord {
            id,
            code: text(Column::Code),
            name: text(Column::Name),
            agency: text(Column::Agency),
            active,
            street: text(Column::Street),
            number: text(Column::Number),
            complement: text(Column::Complement),
            neighborhood: text(Column::Neighborhood),
            city: text(Column::City),
            state: text(Column::State),
            postal_code: text(Column::PostalCode),
            phone: text(Column::Phone),
            email: text(Column::Email),
            created_at,
            updated_at,
            latitude,
            longitude,
        };

        Ok(ParsedRecord {
            record,
            corrections,
        })
    }

    /// Value of a single column.
    pub fn value(&self, column: Column) -> SqlValue {
        match column {
            Column::Id => SqlValue::Integer(self.id),
            Column::Code => self.code.clone().into(),
            Column::Name => self.name.clone().into(),
            Column::Agency => self.agency.clone().into(),
            Column::Active => self.active.into(),
            Column::Street => self.street.clone().into(),
            Column::Number => self.number.clone().into(),
            Column::Complement => self.complement.clone().into(),
            Column::Neighborhood => self.neighborhood.clone().into(),
            Column::City => self.city.clone().into(),
            Column::State => self.state.clone().into(),
            Column::PostalCode => self.postal_code.clone().into(),
            Column::Phone => self.phone.clone().into(),
            Column::Email => self.email.clone().into(),
            Column::CreatedAt => self.created_at.into(),
            Column::UpdatedAt => self.updated_at.into(),
            Column::Latitude => self.latitude.into(),
            Column::Longitude => self.longitude.into(),
        }
    }

    /// All column values in INSERT order.
    pub fn values(&self) -> impl Iterator<Item = (Column, SqlValue)> + '_ {
        Column::ALL.into_iter().map(move |c| (c, self.value(c)))
    }
}

fn parse_id(value: Option<&str>) -> Result<i64, RecordError> {
    let value = value.ok_or(RecordError::MissingId)?;
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RecordError::InvalidId(value.to_string()));
    }
    match value.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RecordError::InvalidId(value.to_string())),
    }
}

fn parse_flag(column: Column, value: Option<&str>) -> Result<Option<i64>, RecordError> {
    let Some(value) = value else {
        return Ok(None);
    };
    if let Ok(i) = value.parse::<i64>() {
        return Ok(Some(i));
    }
    match value.to_lowercase().as_str() {
        "true" | "yes" | "t" | "y" | "s" | "sim" => Ok(Some(1)),
        "false" | "no" | "f" | "n" | "não" | "nao" => Ok(Some(0)),
        _ => Err(RecordError::InvalidFlag {
            column,
            value: value.to_string(),
        }),
    }
}

fn parse_coordinate(column: Column, value: Option<&str>) -> Result<Option<f64>, RecordError> {
    let Some(value) = value else {
        return Ok(None);
    };
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Ok(Some(f)),
        _ => Err(RecordError::InvalidNumber {
            column,
            value: value.to_string(),
        }),
    }
}

fn parse_timestamp(
    column: Column,
    row: &RawRow,
    corrections: &mut Vec<Correction>,
) -> Option<NaiveDateTime> {
    let value = row.value(column)?;
    match NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT) {
        Ok(ts) => Some(ts),
        Err(e) => {
            corrections.push(Correction {
                column,
                message: format!("'{value}' is not a DD/MM/YYYY HH:MM timestamp ({e}); using NULL"),
            });
            None
        }
    }
}
