//! Phone records and their on-disk line format
//!
//! One record is one line: `name!model!price!storage!year!color`.
//! Values are kept as raw text; price and storage are never parsed.

use std::fmt;

use super::error::StoreError;

/// Separator between fields on a stored line. Not escaped.
pub const DELIMITER: char = '!';

/// Number of fields in every record
pub const FIELD_COUNT: usize = 6;

/// The six record columns, in file and display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Model,
    Price,
    Storage,
    Year,
    Color,
}

impl Field {
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Name,
        Field::Model,
        Field::Price,
        Field::Storage,
        Field::Year,
        Field::Color,
    ];

    /// Column header / form label
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Model => "Model",
            Field::Price => "Price",
            Field::Storage => "Storage",
            Field::Year => "Year",
            Field::Color => "Color",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single phone entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneRecord {
    pub name: String,
    pub model: String,
    pub price: String,
    pub storage: String,
    pub year: String,
    pub color: String,
}

impl PhoneRecord {
    /// Build a record from raw input, trimming surrounding whitespace
    pub fn new(
        name: impl AsRef<str>,
        model: impl AsRef<str>,
        price: impl AsRef<str>,
        storage: impl AsRef<str>,
        year: impl AsRef<str>,
        color: impl AsRef<str>,
    ) -> Self {
        Self {
            name: name.as_ref().trim().to_string(),
            model: model.as_ref().trim().to_string(),
            price: price.as_ref().trim().to_string(),
            storage: storage.as_ref().trim().to_string(),
            year: year.as_ref().trim().to_string(),
            color: color.as_ref().trim().to_string(),
        }
    }

    /// Value of one column
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Model => &self.model,
            Field::Price => &self.price,
            Field::Storage => &self.storage,
            Field::Year => &self.year,
            Field::Color => &self.color,
        }
    }

    /// All values in column order
    pub fn values(&self) -> [&str; FIELD_COUNT] {
        Field::ALL.map(|field| self.get(field))
    }

    /// Every field must be non-empty once trimmed and fit on one line.
    /// Reports the first offender in column order.
    pub fn validate(&self) -> Result<(), StoreError> {
        for field in Field::ALL {
            let value = self.get(field);
            if value.trim().is_empty() {
                return Err(StoreError::MissingField(field));
            }
            if value.contains(['\n', '\r']) {
                return Err(StoreError::LineBreak(field));
            }
        }
        Ok(())
    }

    /// Serialize to a stored line, without the line terminator
    pub fn to_line(&self) -> String {
        let sep: &str = &DELIMITER.to_string();
        self.values().join(sep)
    }

    /// Parse a single stored line
    pub fn from_line(text: &str) -> Result<Self, StoreError> {
        Self::from_numbered_line(text, 1)
    }

    /// Parse a stored line, reporting `line_no` on failure
    pub(crate) fn from_numbered_line(text: &str, line_no: usize) -> Result<Self, StoreError> {
        let text = text.strip_suffix('\r').unwrap_or(text);
        let parts: Vec<&str> = text.split(DELIMITER).collect();
        if parts.len() != FIELD_COUNT {
            return Err(StoreError::Malformed {
                line: line_no,
                found: parts.len(),
            });
        }

        Ok(Self {
            name: parts[0].to_string(),
            model: parts[1].to_string(),
            price: parts[2].to_string(),
            storage: parts[3].to_string(),
            year: parts[4].to_string(),
            color: parts[5].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> PhoneRecord {
        PhoneRecord::new("Bob", "Pixel8", "699", "128GB", "2024", "Blue")
    }

    #[test]
    fn test_new_trims_fields() {
        let record = PhoneRecord::new("  Alice ", "iPhone15\t", " 999", "256GB", "2023", " Black ");
        assert_eq!(record.name, "Alice");
        assert_eq!(record.model, "iPhone15");
        assert_eq!(record.price, "999");
        assert_eq!(record.color, "Black");
    }

    #[test]
    fn test_to_line() {
        assert_eq!(pixel().to_line(), "Bob!Pixel8!699!128GB!2024!Blue");
    }

    #[test]
    fn test_from_line() {
        let record = PhoneRecord::from_line("Alice!iPhone15!999!256GB!2023!Black").unwrap();
        assert_eq!(record, PhoneRecord::new("Alice", "iPhone15", "999", "256GB", "2023", "Black"));
    }

    #[test]
    fn test_from_line_strips_carriage_return() {
        let record = PhoneRecord::from_line("Bob!Pixel8!699!128GB!2024!Blue\r").unwrap();
        assert_eq!(record, pixel());
    }

    #[test]
    fn test_line_round_trip() {
        let record = pixel();
        assert_eq!(PhoneRecord::from_line(&record.to_line()).unwrap(), record);
    }

    #[test]
    fn test_from_line_wrong_field_count() {
        assert_eq!(
            PhoneRecord::from_line("Bob!Pixel8!699"),
            Err(StoreError::Malformed { line: 1, found: 3 })
        );
        // A delimiter inside a value shifts every later column
        let record = PhoneRecord::new("Bob!Jr", "Pixel8", "699", "128GB", "2024", "Blue");
        assert_eq!(
            PhoneRecord::from_numbered_line(&record.to_line(), 7),
            Err(StoreError::Malformed { line: 7, found: 7 })
        );
    }

    #[test]
    fn test_validate_accepts_complete_record() {
        assert!(pixel().validate().is_ok());
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let mut record = pixel();
        record.storage = "   ".to_string();
        record.color = String::new();
        assert_eq!(record.validate(), Err(StoreError::MissingField(Field::Storage)));
    }

    #[test]
    fn test_every_field_is_required() {
        for field in Field::ALL {
            let mut values = pixel().values().map(str::to_string);
            let idx = Field::ALL.iter().position(|&f| f == field).unwrap();
            values[idx] = " ".to_string();
            let [name, model, price, storage, year, color] = values;
            let record = PhoneRecord { name, model, price, storage, year, color };
            assert_eq!(record.validate(), Err(StoreError::MissingField(field)));
        }
    }

    #[test]
    fn test_validate_rejects_line_breaks() {
        let mut record = pixel();
        record.name = "Bob\nX".to_string();
        assert_eq!(record.validate(), Err(StoreError::LineBreak(Field::Name)));

        let mut record = pixel();
        record.color = "Blue\r".to_string();
        assert_eq!(record.validate(), Err(StoreError::LineBreak(Field::Color)));
    }

    #[test]
    fn test_blank_stored_line_fails_validation() {
        let record = PhoneRecord::from_line("!!!!!").unwrap();
        assert_eq!(record.validate(), Err(StoreError::MissingField(Field::Name)));
    }
}
