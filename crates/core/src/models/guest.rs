//! Guest model - the value held at a seat

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A guest assigned to a seat.
///
/// Guests have no identity of their own; a guest exists only as the value
/// stored at a seat, and re-assigning a seat replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Guest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub entree: String,
    #[serde(default)]
    pub has_allergy: bool,
    /// Only meaningful when `has_allergy` is set
    #[serde(default)]
    pub allergy_details: Option<String>,
}

impl Guest {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    pub fn with_entree(mut self, entree: impl Into<String>) -> Self {
        self.entree = entree.into();
        self
    }

    pub fn with_allergy(mut self, details: impl Into<String>) -> Self {
        self.has_allergy = true;
        self.allergy_details = Some(details.into());
        self
    }

    /// Both name fields must be non-empty once surrounding whitespace is dropped
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.first_name.trim().is_empty() {
            return Err(ValidationError::EmptyFirstName);
        }
        if self.last_name.trim().is_empty() {
            return Err(ValidationError::EmptyLastName);
        }
        Ok(())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
    }

    /// Allergy column as shown in exported guest lists
    pub fn allergy_info(&self) -> String {
        if !self.has_allergy {
            return "No".to_string();
        }

        match self.allergy_details.as_deref().map(str::trim) {
            Some(details) if !details.is_empty() => details.to_string(),
            _ => "Yes".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_guest() {
        let guest = Guest::new("Jane", "Doe").with_entree("Beef Tenderloin");
        assert!(guest.validate().is_ok());
        assert_eq!(guest.full_name(), "Jane Doe");
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(
            Guest::new("", "Doe").validate(),
            Err(ValidationError::EmptyFirstName)
        );
        assert_eq!(
            Guest::new("Jane", "   ").validate(),
            Err(ValidationError::EmptyLastName)
        );
    }

    #[test]
    fn test_allergy_info() {
        assert_eq!(Guest::new("A", "B").allergy_info(), "No");
        assert_eq!(Guest::new("A", "B").with_allergy("Peanuts").allergy_info(), "Peanuts");

        let mut guest = Guest::new("A", "B");
        guest.has_allergy = true;
        assert_eq!(guest.allergy_info(), "Yes");

        // Details without the flag are ignored
        guest.has_allergy = false;
        guest.allergy_details = Some("Shellfish".into());
        assert_eq!(guest.allergy_info(), "No");
    }
}
