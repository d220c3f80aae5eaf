// ABOUTME: Offline provider with keyword-based care suggestions
// ABOUTME: Deterministic, no configuration and no network access

use async_trait::async_trait;

use crate::Provider;

const DEFAULT_SORTING: &str =
    "Sortiere nach Farbe und Material; nutze 30°C Feinwäsche als Standard.";
const WHITES: &str =
    "Weiße Wäsche: 60°C wenn Baumwolle, sonst 40°C; separat von Farben waschen.";
const WOOL: &str = "Wolle: Handwäsche/Schonwaschgang, kaltes Wasser, Wollwaschmittel.";
const REDS: &str = "Rote Wäsche separat beim ersten Mal waschen, 30–40°C.";
const STANDARD: &str = "Standard-Empfehlung: Farben trennen, 30–40°C, schonendes Waschmittel.";

/// Rules are checked in order; the first keyword hit wins
const RULES: &[(&[&str], &str)] = &[
    (&["weiß", "weiss", "white"], WHITES),
    (&["wolle", "wool"], WOOL),
    (&["rot", "red"], REDS),
];

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalProvider;

impl LocalProvider {
    pub fn new() -> Self {
        Self
    }

    fn suggestion_for(context: &str) -> &'static str {
        let context = context.trim().to_lowercase();
        if context.is_empty() {
            return DEFAULT_SORTING;
        }

        RULES
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| context.contains(k)))
            .map(|(_, suggestion)| *suggestion)
            .unwrap_or(STANDARD)
    }
}

#[async_trait]
impl Provider for LocalProvider {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn suggest(&self, context: &str) -> String {
        Self::suggestion_for(context).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_white_cotton_shirts() {
        let out = LocalProvider::new().suggest("Hemden, weiß, Baumwolle").await;
        let low = out.to_lowercase();
        assert!(low.contains("weiß") || low.contains("wäsche"));
        assert_eq!(out, WHITES);
    }

    #[tokio::test]
    async fn test_empty_context_uses_default_sorting() {
        assert_eq!(LocalProvider::new().suggest("   ").await, DEFAULT_SORTING);
    }

    #[tokio::test]
    async fn test_keywords_are_case_insensitive() {
        let provider = LocalProvider::new();
        assert_eq!(provider.suggest("WOOL sweater").await, WOOL);
        assert_eq!(provider.suggest("Red socks").await, REDS);
    }

    #[tokio::test]
    async fn test_first_matching_rule_wins() {
        // mentions both white and red
        assert_eq!(LocalProvider::new().suggest("white and red").await, WHITES);
    }

    #[tokio::test]
    async fn test_unmatched_context_gets_standard_advice() {
        assert_eq!(LocalProvider::new().suggest("jeans").await, STANDARD);
    }
}
