use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// A deck: the ordered list of sections a viewer navigates.
///
/// Decks are authored as TOML files:
///
/// ```toml
/// title = "Platform overview"
///
/// [[sections]]
/// id = "intro"
/// label = "Introduction"
/// body = """
/// ...
/// """
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One navigable unit of a deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// Stable identifier, unique within the deck
    pub id: String,
    /// Short label shown in the rail hover and the table of contents
    pub label: String,
    /// Body text, rendered as-is in deck view and word-wrapped in reader view
    #[serde(default)]
    pub body: String,
}

impl Deck {
    /// Load and validate a deck from a TOML file.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let deck: Deck =
            toml::from_str(&content).map_err(|e| crate::Error::DeckParse(e.to_string()))?;
        deck.validate()?;
        tracing::debug!("loaded deck with {} sections from {}", deck.len(), path.display());
        Ok(deck)
    }

    /// Validate deck structure: at least one section, non-empty unique ids.
    pub fn validate(&self) -> crate::Result<()> {
        if self.sections.is_empty() {
            return Err(crate::Error::DeckParse(
                "deck has no sections".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for section in &self.sections {
            if section.id.is_empty() {
                return Err(crate::Error::DeckParse(format!(
                    "section {:?} has an empty id",
                    section.label
                )));
            }
            if !seen.insert(section.id.as_str()) {
                return Err(crate::Error::DeckParse(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Two-digit ordinal for display ("01", "02", ...).
    pub fn ordinal(&self, index: usize) -> String {
        format!("{:02}", index + 1)
    }

    /// Find a section's index by id.
    pub fn index_of(&self, id: &str) -> crate::Result<usize> {
        self.sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| crate::Error::SectionNotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(ids: &[&str]) -> Deck {
        Deck {
            title: "test".to_string(),
            sections: ids
                .iter()
                .map(|id| Section {
                    id: id.to_string(),
                    label: id.to_uppercase(),
                    body: String::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_parse_minimal_deck() {
        let toml = r#"
            title = "t"

            [[sections]]
            id = "a"
            label = "A"
        "#;
        let deck: Deck = toml::from_str(toml).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.sections[0].id, "a");
        assert_eq!(deck.sections[0].body, "");
    }

    #[test]
    fn test_validate_rejects_empty_deck() {
        let deck = Deck {
            title: String::new(),
            sections: Vec::new(),
        };
        assert!(deck.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        assert!(deck(&["a", "b", "a"]).validate().is_err());
        assert!(deck(&["a", "b", "c"]).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        assert!(deck(&["a", ""]).validate().is_err());
    }

    #[test]
    fn test_ordinal_is_two_digit() {
        let d = deck(&["a", "b"]);
        assert_eq!(d.ordinal(0), "01");
        assert_eq!(d.ordinal(9), "10");
    }

    #[test]
    fn test_index_of() {
        let d = deck(&["a", "b", "c"]);
        assert_eq!(d.index_of("b").unwrap(), 1);
        assert!(d.index_of("x").is_err());
    }
}
