use serde::{Deserialize, Serialize};
use std::fmt;

/// メニューカテゴリの既定セット
pub const MENU_CATEGORIES: [&str; 6] = [
    "Hamburguesas",
    "Bebidas",
    "Complementos",
    "Postres",
    "Ensaladas",
    "Combos",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(value: String) -> Result<Self, String> {
        let trimmed = value.trim().to_string();
        Self::validate(&trimmed)?;
        Ok(Self(trimmed))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Err("Category cannot be empty".to_string());
        }
        if value.eq_ignore_ascii_case("all") {
            return Err("Category cannot use the reserved filter value".to_string());
        }
        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

/// Category selection for the list view. `All` is the sentinel the view
/// sends when no category is picked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(Category::new(trimmed.to_string())?))
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}
