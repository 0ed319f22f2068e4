//! Import header parsing and the header alias table.

use std::collections::BTreeMap;

use super::line::{Delimiter, unquote_cell};

/// Fields the importer reads from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportField {
    Address,
    CityId,
    Type,
    Status,
    DistrictId,
    ContactName,
    ContactPhone,
}

/// Accepted header spellings per field, canonical name first.
pub const HEADER_ALIASES: &[(ImportField, &[&str])] = &[
    (ImportField::Address, &["address", "адрес"]),
    (ImportField::CityId, &["city_id", "город_id"]),
    (ImportField::Type, &["type", "тип"]),
    (ImportField::Status, &["status", "статус"]),
    (ImportField::DistrictId, &["district_id", "район_id"]),
    (ImportField::ContactName, &["contact_name", "контакт"]),
    (ImportField::ContactPhone, &["contact_phone", "телефон"]),
];

impl ImportField {
    pub const ALL: [ImportField; 7] = [
        ImportField::Address,
        ImportField::CityId,
        ImportField::Type,
        ImportField::Status,
        ImportField::DistrictId,
        ImportField::ContactName,
        ImportField::ContactPhone,
    ];

    /// Fields a row must carry to be imported.
    pub const REQUIRED: [ImportField; 3] =
        [ImportField::Address, ImportField::CityId, ImportField::Type];

    /// Header spellings, canonical first.
    pub fn spellings(&self) -> &'static [&'static str] {
        HEADER_ALIASES
            .iter()
            .find(|(field, _)| field == self)
            .map(|(_, spellings)| *spellings)
            .unwrap_or(&[])
    }

    /// The English column name.
    pub fn canonical(&self) -> &'static str {
        self.spellings().first().copied().unwrap_or("")
    }
}

/// Parsed header row with the column positions of every known field.
#[derive(Debug, Clone)]
pub struct ImportHeaders {
    /// Lowercased, trimmed column names in file order.
    pub columns: Vec<String>,
    positions: BTreeMap<ImportField, Vec<usize>>,
}

impl ImportHeaders {
    /// Parse the header line. Header cells go through the same unquoting as
    /// data cells, so files written by the exporter import cleanly.
    pub fn parse(header_line: &str, delimiter: Delimiter) -> Self {
        let columns: Vec<String> = header_line
            .split(delimiter.as_char())
            .map(|token| unquote_cell(token).to_lowercase())
            .collect();

        let mut positions = BTreeMap::new();
        for field in ImportField::ALL {
            let found: Vec<usize> = field
                .spellings()
                .iter()
                // A repeated column name keeps its last occurrence.
                .filter_map(|spelling| columns.iter().rposition(|column| column == spelling))
                .collect();
            positions.insert(field, found);
        }

        Self {
            columns,
            positions,
        }
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when any spelling of `field` is present.
    pub fn has_field(&self, field: ImportField) -> bool {
        self.positions
            .get(&field)
            .is_some_and(|found| !found.is_empty())
    }

    /// Resolve the known fields of one data row.
    pub fn row_fields(&self, cells: &[String]) -> RowFields {
        let mut values = BTreeMap::new();
        for (field, found) in &self.positions {
            let value = found
                .iter()
                .map(|&idx| cells.get(idx).map(String::as_str).unwrap_or(""))
                .find(|value| !value.is_empty());
            if let Some(value) = value {
                values.insert(*field, value.to_string());
            }
        }
        RowFields { values }
    }
}

/// Known fields of one row. Absent and empty cells are both `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    values: BTreeMap<ImportField, String>,
}

impl RowFields {
    pub fn get(&self, field: ImportField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Owned copy of an optional field.
    pub fn optional(&self, field: ImportField) -> Option<String> {
        self.values.get(&field).cloned()
    }

    /// Required fields with no value, in declaration order.
    pub fn missing_required(&self) -> Vec<ImportField> {
        ImportField::REQUIRED
            .into_iter()
            .filter(|field| !self.values.contains_key(field))
            .collect()
    }
}
