//! Recipe types: the lookup service's wire shape and the normalized item
//! the renderer works with

use serde::{Deserialize, Serialize};

/// Request body for the recipe search endpoint
#[derive(Debug, Clone, Serialize)]
pub struct RecipeQuery {
    pub ingredients: Vec<String>,
}

/// One recipe as the lookup service sends it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cultural_origin: Option<String>,
    #[serde(default)]
    pub ingredients: Option<IngredientsField>,
}

/// The service sends ingredients either as one newline-delimited block or
/// already split
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IngredientsField {
    Text(String),
    Lines(Vec<String>),
}

impl IngredientsField {
    fn into_lines(self) -> Vec<String> {
        let raw: Vec<String> = match self {
            Self::Text(text) => text.lines().map(str::to_string).collect(),
            Self::Lines(lines) => lines,
        };
        raw.into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// A recipe ready for display. Ingredient order is fixed once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeItem {
    pub name: Option<String>,
    pub description: Option<String>,
    pub origin: Option<String>,
    pub ingredient_lines: Vec<String>,
}

impl From<RecipeRecord> for RecipeItem {
    fn from(record: RecipeRecord) -> Self {
        Self {
            name: non_blank(record.name),
            description: non_blank(record.description),
            origin: non_blank(record.cultural_origin),
            ingredient_lines: record
                .ingredients
                .map(IngredientsField::into_lines)
                .unwrap_or_default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
