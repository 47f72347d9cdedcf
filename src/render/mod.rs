//! Presentational card rendering
//!
//! Simulators describe themselves as a [`Card`]: a title, an optional
//! subtitle, and a body made of [`Section`]s. The card is plain data; the
//! `Display` implementation renders it for a terminal. No state lives here.

pub mod views;

use std::fmt;

/// Width of the rendered card rule lines
const RULE_WIDTH: usize = 62;

/// A titled block of body lines within a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading
    pub title: String,
    /// Body lines, rendered verbatim
    pub lines: Vec<String>,
}

impl Section {
    /// Create a section from a heading and its body lines
    pub fn new(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self { title: title.into(), lines }
    }
}

/// A generic presentational container: title, optional subtitle, body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Card title
    pub title: String,
    /// Optional subtitle under the title
    pub subtitle: Option<String>,
    /// Body sections in display order
    pub sections: Vec<Section>,
}

impl Card {
    /// Create an empty card
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), subtitle: None, sections: Vec::new() }
    }

    /// Set the subtitle
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Append a section
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        writeln!(f, "{}", self.title)?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{}", subtitle)?;
        }
        writeln!(f, "{}", rule)?;

        for section in &self.sections {
            writeln!(f)?;
            writeln!(f, "{}", section.title)?;
            writeln!(f, "{}", "-".repeat(section.title.len().min(RULE_WIDTH)))?;
            for line in &section.lines {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_builder() {
        let card = Card::new("The Core Difference")
            .with_subtitle("Authentication vs. Authorization")
            .with_section(Section::new("Status", vec!["Waiting...".to_string()]));

        assert_eq!(card.title, "The Core Difference");
        assert_eq!(card.subtitle.as_deref(), Some("Authentication vs. Authorization"));
        assert_eq!(card.sections.len(), 1);
    }

    #[test]
    fn test_card_rendering() {
        let card = Card::new("Knowledge Check")
            .with_subtitle("Test your understanding.")
            .with_section(Section::new("Question 1", vec!["Option A".to_string()]));

        let rendered = card.to_string();
        assert!(rendered.contains("Knowledge Check"));
        assert!(rendered.contains("Test your understanding."));
        assert!(rendered.contains("Question 1"));
        assert!(rendered.contains("Option A"));
    }

    #[test]
    fn test_card_without_subtitle() {
        let card = Card::new("JWT Inspector");
        let rendered = card.to_string();
        assert!(rendered.contains("JWT Inspector"));
        assert_eq!(rendered.lines().count(), 3);
    }
}
