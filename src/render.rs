//! Screen rendering
//!
//! Every screen sent to a handset must fit the configured character budget.
//! Recipe screens are split into a full view (summary plus the first five
//! ingredients) and a detail view (the remaining ingredients).

use crate::lookup::RecipeItem;

/// Ingredients shown in the full view before the detail view takes over
pub const FULL_VIEW_INGREDIENTS: usize = 5;

/// Marker appended when a screen is cut to fit
pub const ELLIPSIS: &str = "...";

const NAVIGATION_FOOTER: [&str; 3] = ["1 - Next Recipe", "2 - Previous Recipe", "99 - More Details"];

/// Which part of a recipe to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Full,
    Detail,
}

/// A rendered screen and whether the conversation continues after it.
///
/// The gateway-facing layer turns this into the `CON `/`END ` wire prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Continue { text: String },
    Terminate { text: String },
}

impl Screen {
    pub fn continue_with(text: &str, budget: usize) -> Self {
        Screen::Continue {
            text: fit(text, budget),
        }
    }

    pub fn terminate_with(text: &str, budget: usize) -> Self {
        Screen::Terminate {
            text: fit(text, budget),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Screen::Continue { text } | Screen::Terminate { text } => text,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Screen::Terminate { .. })
    }
}

/// Render one recipe at `position` (1-indexed) of `total`.
pub fn render_recipe(
    item: &RecipeItem,
    position: usize,
    total: usize,
    view: View,
    budget: usize,
) -> String {
    let mut lines = vec![format!("Recipe {position} of {total}")];

    match view {
        View::Full => {
            lines.push(format!("Name: {}", item.name.as_deref().unwrap_or("Unknown")));
            lines.push(format!(
                "Description: {}",
                item.description
                    .as_deref()
                    .unwrap_or("No description available")
            ));
            lines.push(format!(
                "Cultural Origin: {}",
                item.origin.as_deref().unwrap_or("Unknown")
            ));

            let shown = &item.ingredient_lines
                [..item.ingredient_lines.len().min(FULL_VIEW_INGREDIENTS)];
            if shown.is_empty() {
                lines.push("No ingredients listed.".to_string());
            } else {
                lines.push(format!("Ingredients (1-{}):", shown.len()));
                lines.extend(numbered(shown, 1));
                if item.ingredient_lines.len() > FULL_VIEW_INGREDIENTS {
                    lines.push("More ingredients available. Press 99 for more details.".to_string());
                }
            }
        }
        View::Detail => {
            let rest = item
                .ingredient_lines
                .get(FULL_VIEW_INGREDIENTS..)
                .unwrap_or_default();
            if rest.is_empty() {
                lines.push("No more ingredients to show.".to_string());
            } else {
                lines.push("More Ingredients:".to_string());
                lines.extend(numbered(rest, FULL_VIEW_INGREDIENTS + 1));
            }
        }
    }

    // Blank separator line before the footer
    lines.push(String::new());
    lines.extend(NAVIGATION_FOOTER.iter().map(|option| (*option).to_string()));

    fit(&lines.join("\n"), budget)
}

fn numbered(ingredients: &[String], first: usize) -> impl Iterator<Item = String> + '_ {
    ingredients
        .iter()
        .zip(first..)
        .map(|(ingredient, number)| format!("{number}. {ingredient}"))
}

/// Cut `text` to at most `budget` characters, ending in [`ELLIPSIS`] when cut.
pub fn fit(text: &str, budget: usize) -> String {
    if text.chars().count() <= budget {
        return text.to_string();
    }

    let keep = budget.saturating_sub(ELLIPSIS.len());
    text.chars()
        .take(keep)
        .chain(ELLIPSIS.chars())
        .take(budget)
        .collect()
}
