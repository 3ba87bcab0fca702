use serde::Serialize;

use crate::domain::category::Category;
use crate::domain::presentation::{CategoryAccent, CategoryIcon};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: String,
    pub name: String,
    /// Colour from the seed, falling back to the accent for the name when blank.
    pub color: String,
    pub icon: CategoryIcon,
    pub article_count: u32,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        let color = if value.color.trim().is_empty() {
            CategoryAccent::for_category(&value.name).hex().to_string()
        } else {
            value.color
        };
        Self {
            icon: CategoryIcon::from_key(&value.icon),
            id: value.id.into_inner(),
            name: value.name.into_inner(),
            color,
            article_count: value.article_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::sample_category;

    #[test]
    fn resolves_icon_with_fallback() {
        let dto = CategoryDto::from(sample_category("1", "Gardening", "shovel"));
        assert_eq!(dto.icon, CategoryIcon::Default);
        assert_eq!(dto.color, "#7C3AED");
    }

    #[test]
    fn blank_colour_uses_accent() {
        let mut category = sample_category("3", "Sports", "trophy");
        category.color = " ".into();
        let dto = CategoryDto::from(category);
        assert_eq!(dto.icon, CategoryIcon::Trophy);
        assert_eq!(dto.color, "#059669");
    }
}
