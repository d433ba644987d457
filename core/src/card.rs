use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Label source a board is drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Tile set identifier, stored alongside tagged boards.
    pub id: String,
    pub labels: Vec<String>,
    /// Pool for the center cell.
    #[serde(default)]
    pub free_spaces: Vec<String>,
}

impl Card {
    pub fn new(
        id: impl Into<String>,
        labels: impl IntoIterator<Item = impl Into<String>>,
        free_spaces: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            labels: labels.into_iter().map(Into::into).collect(),
            free_spaces: free_spaces.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_json() {
        let card: Card = serde_json::from_str(
            r#"{"id":"classic","labels":["a","b","c"],"freeSpaces":["FREE"]}"#,
        )
        .unwrap();

        assert_eq!(card, Card::new("classic", ["a", "b", "c"], ["FREE"]));
    }

    #[test]
    fn free_spaces_are_optional() {
        let card: Card = serde_json::from_str(r#"{"id":"x","labels":[]}"#).unwrap();

        assert!(card.free_spaces.is_empty());
    }
}
