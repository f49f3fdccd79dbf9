/// Recipe domain types
use crate::types::{RecipeId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A chef's recipe
///
/// `chef` is a free-text display name, not a reference to a user. The owner
/// is fixed at creation and is the only account allowed to change or delete
/// the recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Human-readable ID (`R-#####`)
    pub recipe_id: RecipeId,

    /// Creating account
    pub user_id: UserId,

    /// Owning account (same as `user_id`)
    pub owner_id: UserId,

    /// Recipe title
    pub title: String,

    /// Chef display name
    pub chef: String,

    /// Ingredient entries, in order
    pub ingredients: Vec<String>,

    /// Preparation steps, in order
    pub instructions: Vec<String>,

    /// e.g. "Dinner"
    pub meal_type: Option<String>,

    /// e.g. "Italian"
    pub cuisine_type: Option<String>,

    /// Preparation time in minutes
    pub prep_time: Option<i64>,

    /// e.g. "Easy"
    pub difficulty: Option<String>,

    /// Number of servings
    pub servings: Option<i64>,

    /// Creation timestamp
    pub created_date: DateTime<Utc>,
}

impl Recipe {
    /// Apply a partial update; `None` fields are left untouched
    pub fn apply(&mut self, update: UpdateRecipe) {
        let UpdateRecipe {
            title,
            chef,
            ingredients,
            instructions,
            meal_type,
            cuisine_type,
            prep_time,
            difficulty,
            servings,
        } = update;

        if let Some(title) = title {
            self.title = title;
        }
        if let Some(chef) = chef {
            self.chef = chef;
        }
        if let Some(ingredients) = ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = instructions {
            self.instructions = instructions;
        }
        if meal_type.is_some() {
            self.meal_type = meal_type;
        }
        if cuisine_type.is_some() {
            self.cuisine_type = cuisine_type;
        }
        if prep_time.is_some() {
            self.prep_time = prep_time;
        }
        if difficulty.is_some() {
            self.difficulty = difficulty;
        }
        if servings.is_some() {
            self.servings = servings;
        }
    }

    /// Normalized `(chef, title)` pair used for duplicate detection
    pub fn title_key(&self) -> (String, String) {
        title_key(&self.chef, &self.title)
    }
}

/// Case-insensitive key for a `(chef, title)` pair
pub fn title_key(chef: &str, title: &str) -> (String, String) {
    (chef.to_lowercase(), title.to_lowercase())
}

/// Data for creating a recipe; ID and timestamp are assigned by storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecipe {
    /// Creating (and owning) account
    pub owner_id: UserId,
    /// Recipe title
    pub title: String,
    /// Chef display name
    pub chef: String,
    /// Ingredient entries
    pub ingredients: Vec<String>,
    /// Preparation steps
    pub instructions: Vec<String>,
    /// Meal type
    pub meal_type: Option<String>,
    /// Cuisine type
    pub cuisine_type: Option<String>,
    /// Preparation time in minutes
    pub prep_time: Option<i64>,
    /// Difficulty label
    pub difficulty: Option<String>,
    /// Number of servings
    pub servings: Option<i64>,
}

/// Partial recipe update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateRecipe {
    /// New title
    pub title: Option<String>,
    /// New chef display name
    pub chef: Option<String>,
    /// Replacement ingredient list
    pub ingredients: Option<Vec<String>>,
    /// Replacement step list
    pub instructions: Option<Vec<String>>,
    /// New meal type
    pub meal_type: Option<String>,
    /// New cuisine type
    pub cuisine_type: Option<String>,
    /// New preparation time
    pub prep_time: Option<i64>,
    /// New difficulty label
    pub difficulty: Option<String>,
    /// New servings count
    pub servings: Option<i64>,
}

impl UpdateRecipe {
    /// Whether the update touches the `(chef, title)` pair
    pub fn renames(&self) -> bool {
        self.title.is_some() || self.chef.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            recipe_id: RecipeId::from_sequence(1),
            user_id: UserId::from_sequence(1),
            owner_id: UserId::from_sequence(1),
            title: "Soup".to_string(),
            chef: "Alice".to_string(),
            ingredients: vec!["water".to_string()],
            instructions: vec!["boil".to_string()],
            meal_type: Some("Lunch".to_string()),
            cuisine_type: None,
            prep_time: Some(10),
            difficulty: None,
            servings: Some(2),
            created_date: Utc::now(),
        }
    }

    #[test]
    fn apply_only_touches_supplied_fields() {
        let mut recipe = sample();
        recipe.apply(UpdateRecipe {
            title: Some("Stew".to_string()),
            servings: Some(4),
            ..UpdateRecipe::default()
        });

        assert_eq!(recipe.title, "Stew");
        assert_eq!(recipe.chef, "Alice");
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.meal_type.as_deref(), Some("Lunch"));
        assert_eq!(recipe.instructions, vec!["boil"]);
    }

    #[test]
    fn title_key_ignores_case() {
        assert_eq!(title_key("Alice", "Soup"), title_key("alice", "SOUP"));
        assert_ne!(title_key("Alice", "Soup"), title_key("Alice", "Soups"));
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["recipeId"], "R-00001");
        assert_eq!(json["ownerId"], "U-00001");
        assert_eq!(json["prepTime"], 10);
        assert!(json["createdDate"].is_string());
    }
}
