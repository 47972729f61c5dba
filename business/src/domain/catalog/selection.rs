use serde::Serialize;

use super::errors::CatalogError;
use crate::domain::cart::model::MIN_QUANTITY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    #[default]
    S,
    M,
    L,
    Xl,
}

impl Size {
    pub const ALL: [Size; 5] = [Size::Xs, Size::S, Size::M, Size::L, Size::Xl];
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Size::Xs => write!(f, "XS"),
            Size::S => write!(f, "S"),
            Size::M => write!(f, "M"),
            Size::L => write!(f, "L"),
            Size::Xl => write!(f, "XL"),
        }
    }
}

impl std::str::FromStr for Size {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::ALL
            .into_iter()
            .find(|size| size.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::InvalidVariant(format!("size {}", s)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Gray,
    Black,
    Green,
    Pink,
    Blue,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Gray,
        Color::Black,
        Color::Green,
        Color::Pink,
        Color::Blue,
    ];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Gray => write!(f, "gray"),
            Color::Black => write!(f, "black"),
            Color::Green => write!(f, "green"),
            Color::Pink => write!(f, "pink"),
            Color::Blue => write!(f, "blue"),
        }
    }
}

impl std::str::FromStr for Color {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|color| color.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::InvalidVariant(format!("color {}", s)))
    }
}

/// Variant picked on the product detail page before adding to cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSelection {
    pub size: Size,
    pub color: Color,
    quantity: u32,
}

impl Default for ProductSelection {
    fn default() -> Self {
        Self {
            size: Size::default(),
            color: Color::default(),
            quantity: MIN_QUANTITY,
        }
    }
}

impl ProductSelection {
    /// Builds a selection, raising a quantity below the minimum to it.
    pub fn new(size: Size, color: Color, quantity: u32) -> Self {
        Self {
            size,
            color,
            quantity: quantity.max(MIN_QUANTITY),
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement_quantity(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(MIN_QUANTITY);
    }

    pub fn select_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn select_color(&mut self, color: Color) {
        self.color = color;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub author: String,
    pub rating: u8,
    pub comment: Option<String>,
}

/// Mean rating, or `None` when there are no reviews yet.
pub fn average_rating(reviews: &[Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    Some(f64::from(sum) / reviews.len() as f64)
}
