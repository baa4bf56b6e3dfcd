//! Category tags and the icon asset table used when rendering rows.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed set of category tags selectable on the entry screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Child,
    Phone,
    ShoppingCart,
    Travel,
}

/// Icon asset name for the child category.
pub const ICON_CHILD: &str = "child-selected";
/// Icon asset name for the phone category.
pub const ICON_PHONE: &str = "phone-selected";
/// Icon asset name for the shopping cart category.
pub const ICON_SHOPPING_CART: &str = "shopping-cart-selected";
/// Icon asset name for the travel category.
pub const ICON_TRAVEL: &str = "travel-selected";

impl Category {
    /// All categories in entry-screen toggle order.
    pub const ALL: [Category; 4] = [
        Category::Child,
        Category::Phone,
        Category::ShoppingCart,
        Category::Travel,
    ];

    /// Stable lowercase key, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Child => "child",
            Self::Phone => "phone",
            Self::ShoppingCart => "shopping_cart",
            Self::Travel => "travel",
        }
    }

    /// Fixed icon asset name rendered next to the row title.
    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Child => ICON_CHILD,
            Self::Phone => ICON_PHONE,
            Self::ShoppingCart => ICON_SHOPPING_CART,
            Self::Travel => ICON_TRAVEL,
        }
    }

    /// Parses a category key.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// `shopping-cart` is accepted as an alias of `shopping_cart`.
    pub fn parse(value: &str) -> Result<Self, CategoryParseError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "child" => Ok(Self::Child),
            "phone" => Ok(Self::Phone),
            "shopping_cart" | "shopping-cart" => Ok(Self::ShoppingCart),
            "travel" => Ok(Self::Travel),
            _ => Err(CategoryParseError {
                value: value.trim().to_string(),
            }),
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves the row icon for an optional category.
///
/// Unset category renders without an icon.
pub fn icon_for(category: Option<Category>) -> Option<&'static str> {
    category.map(Category::icon_name)
}

/// Error returned when a category key is not one of the four known tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError {
    pub value: String,
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown category `{}`; expected child|phone|shopping_cart|travel",
            self.value
        )
    }
}

impl Error for CategoryParseError {}
