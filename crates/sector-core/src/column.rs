//! Input column definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input format of the DATA_CRIACAO / DATA_ATUALIZACAO columns (`DD/MM/YYYY HH:MM`).
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// How a column's raw text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Positive integer primary key
    Identifier,
    /// Active flag, rendered as an integer
    Flag,
    /// Free text, quoted and escaped
    Text,
    /// `DD/MM/YYYY HH:MM` timestamp
    Timestamp,
    /// Floating point coordinate
    Coordinate,
}

/// The columns of a sector export.
///
/// Variant order is the column order of the generated INSERT statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "ID")]
    Id,
    #[serde(rename = "CODIGO_SETOR")]
    Code,
    #[serde(rename = "NOME_SETOR")]
    Name,
    #[serde(rename = "ORGAO")]
    Agency,
    #[serde(rename = "ATIVO")]
    Active,
    #[serde(rename = "LOGRADOURO")]
    Street,
    #[serde(rename = "NUMERO")]
    Number,
    #[serde(rename = "COMPLEMENTO")]
    Complement,
    #[serde(rename = "BAIRRO")]
    Neighborhood,
    #[serde(rename = "CIDADE")]
    City,
    #[serde(rename = "ESTADO")]
    State,
    #[serde(rename = "CEP")]
    PostalCode,
    #[serde(rename = "TELEFONE")]
    Phone,
    #[serde(rename = "EMAIL")]
    Email,
    #[serde(rename = "DATA_CRIACAO")]
    CreatedAt,
    #[serde(rename = "DATA_ATUALIZACAO")]
    UpdatedAt,
    #[serde(rename = "LATITUDE")]
    Latitude,
    #[serde(rename = "LONGITUDE")]
    Longitude,
}

impl Column {
    /// All columns in INSERT order.
    pub const ALL: [Column; 18] = [
        Column::Id,
        Column::Code,
        Column::Name,
        Column::Agency,
        Column::Active,
        Column::Street,
        Column::Number,
        Column::Complement,
        Column::Neighborhood,
        Column::City,
        Column::State,
        Column::PostalCode,
        Column::Phone,
        Column::Email,
        Column::CreatedAt,
        Column::UpdatedAt,
        Column::Latitude,
        Column::Longitude,
    ];

    /// Header name as it appears in the export and in the target table.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Code => "CODIGO_SETOR",
            Column::Name => "NOME_SETOR",
            Column::Agency => "ORGAO",
            Column::Active => "ATIVO",
            Column::Street => "LOGRADOURO",
            Column::Number => "NUMERO",
            Column::Complement => "COMPLEMENTO",
            Column::Neighborhood => "BAIRRO",
            Column::City => "CIDADE",
            Column::State => "ESTADO",
            Column::PostalCode => "CEP",
            Column::Phone => "TELEFONE",
            Column::Email => "EMAIL",
            Column::CreatedAt => "DATA_CRIACAO",
            Column::UpdatedAt => "DATA_ATUALIZACAO",
            Column::Latitude => "LATITUDE",
            Column::Longitude => "LONGITUDE",
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            Column::Id => ColumnKind::Identifier,
            Column::Active => ColumnKind::Flag,
            Column::CreatedAt | Column::UpdatedAt => ColumnKind::Timestamp,
            Column::Latitude | Column::Longitude => ColumnKind::Coordinate,
            _ => ColumnKind::Text,
        }
    }

    /// Look up a column by header name.
    ///
    /// Surrounding whitespace and a leading byte-order mark are ignored and the
    /// comparison is ASCII case-insensitive.
    pub fn from_header(header: &str) -> Option<Self> {
        let header = header.trim_start_matches('\u{feff}').trim();
        Column::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(header))
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Column {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::from_header(s).ok_or_else(|| format!("Unknown column: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_columns_round_trip_by_name() {
        for column in Column::ALL {
            assert_eq!(Column::from_header(column.name()), Some(column));
        }
    }

    #[test]
    fn test_from_header_strips_bom_and_whitespace() {
        assert_eq!(Column::from_header("\u{feff}ID"), Some(Column::Id));
        assert_eq!(Column::from_header("  nome_setor "), Some(Column::Name));
        assert_eq!(Column::from_header("UNKNOWN"), None);
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Column::Id.kind(), ColumnKind::Identifier);
        assert_eq!(Column::Active.kind(), ColumnKind::Flag);
        assert_eq!(Column::UpdatedAt.kind(), ColumnKind::Timestamp);
        assert_eq!(Column::Longitude.kind(), ColumnKind::Coordinate);
        assert_eq!(Column::Email.kind(), ColumnKind::Text);
    }

    #[test]
    fn test_serializes_as_header_name() {
        let json = serde_json::to_string(&Column::PostalCode).unwrap();
        assert_eq!(json, "\"CEP\"");
    }
}
