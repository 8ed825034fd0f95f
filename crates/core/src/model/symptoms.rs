use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SymptomError {
    #[error("symptom description must not be empty")]
    Empty,
}

/// Trimmed, non-empty symptom description ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Symptoms(String);

impl Symptoms {
    /// # Errors
    ///
    /// Returns `SymptomError::Empty` if nothing is left after trimming.
    pub fn parse(raw: &str) -> Result<Self, SymptomError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SymptomError::Empty);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Append a quick-pick symptom to the text being typed.
#[must_use]
pub fn append_quick_symptom(current: &str, symptom: &str) -> String {
    if current.is_empty() {
        symptom.to_string()
    } else {
        format!("{current}, {symptom}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_rejects_blank() {
        assert_eq!(Symptoms::parse("  fever and cough \n").unwrap().as_str(), "fever and cough");
        assert_eq!(Symptoms::parse(" \t "), Err(SymptomError::Empty));
    }

    #[test]
    fn quick_symptoms_are_comma_joined() {
        let text = append_quick_symptom("", "Fever");
        assert_eq!(text, "Fever");
        let text = append_quick_symptom(&text, "Cough");
        assert_eq!(text, "Fever, Cough");
    }
}
