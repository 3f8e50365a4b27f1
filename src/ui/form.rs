//! Input form state
//!
//! Four free-text inputs plus two selectors. Knows nothing about the
//! ledger; it only turns keystrokes into a `PhoneRecord`.

use crate::store::{Field, PhoneRecord};

/// Editable state behind the form panel
#[derive(Debug, Clone)]
pub struct FormState {
    name: String,
    model: String,
    price: String,
    storage: String,
    /// Index into `years`, always valid
    year: usize,
    /// Index into `colors`, `None` until the user picks one
    color: Option<usize>,
    years: Vec<String>,
    colors: Vec<String>,
    /// Input with focus, one per record column
    focus: Field,
}

impl FormState {
    pub fn new(years: Vec<String>, colors: Vec<String>) -> Self {
        Self {
            name: String::new(),
            model: String::new(),
            price: String::new(),
            storage: String::new(),
            year: 0,
            color: None,
            years,
            colors,
            focus: Field::Name,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// Move focus down, wrapping around
    pub fn focus_next(&mut self) {
        let idx = Self::index_of(self.focus);
        self.focus = Field::ALL[(idx + 1) % Field::ALL.len()];
    }

    /// Move focus up, wrapping around
    pub fn focus_prev(&mut self) {
        let idx = Self::index_of(self.focus);
        self.focus = Field::ALL[(idx + Field::ALL.len() - 1) % Field::ALL.len()];
    }

    fn index_of(field: Field) -> usize {
        Field::ALL.iter().position(|&f| f == field).unwrap_or(0)
    }

    /// True for the free-text inputs
    pub fn is_text(field: Field) -> bool {
        !matches!(field, Field::Year | Field::Color)
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Model => Some(&mut self.model),
            Field::Price => Some(&mut self.price),
            Field::Storage => Some(&mut self.storage),
            Field::Year | Field::Color => None,
        }
    }

    /// Type a character into the focused text input
    pub fn insert_char(&mut self, c: char) {
        if let Some(text) = self.text_mut(self.focus) {
            text.push(c);
        }
    }

    /// Delete the last character of the focused text input
    pub fn backspace(&mut self) {
        if let Some(text) = self.text_mut(self.focus) {
            text.pop();
        }
    }

    /// Step the focused selector forward
    pub fn select_next(&mut self) {
        match self.focus {
            Field::Year => self.year = (self.year + 1) % self.years.len().max(1),
            Field::Color if !self.colors.is_empty() => {
                self.color = Some(match self.color {
                    Some(idx) => (idx + 1) % self.colors.len(),
                    None => 0,
                });
            }
            _ => {}
        }
    }

    /// Step the focused selector backward
    pub fn select_prev(&mut self) {
        match self.focus {
            Field::Year => {
                let len = self.years.len().max(1);
                self.year = (self.year + len - 1) % len;
            }
            Field::Color if !self.colors.is_empty() => {
                let len = self.colors.len();
                self.color = Some(match self.color {
                    Some(idx) => (idx + len - 1) % len,
                    None => len - 1,
                });
            }
            _ => {}
        }
    }

    /// Current display value of an input. Unselected color is empty.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Model => &self.model,
            Field::Price => &self.price,
            Field::Storage => &self.storage,
            Field::Year => self.years.get(self.year).map(String::as_str).unwrap_or(""),
            Field::Color => self
                .color
                .and_then(|idx| self.colors.get(idx))
                .map(String::as_str)
                .unwrap_or(""),
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn selected_color(&self) -> Option<usize> {
        self.color
    }

    /// Empty the text inputs, reset the year, unselect the color
    pub fn clear(&mut self) {
        self.name.clear();
        self.model.clear();
        self.price.clear();
        self.storage.clear();
        self.year = 0;
        self.color = None;
        self.focus = Field::Name;
    }

    /// Snapshot the inputs as a trimmed record. Not validated.
    pub fn to_record(&self) -> PhoneRecord {
        PhoneRecord::new(
            self.value(Field::Name),
            self.value(Field::Model),
            self.value(Field::Price),
            self.value(Field::Storage),
            self.value(Field::Year),
            self.value(Field::Color),
        )
    }
}
