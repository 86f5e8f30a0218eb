//! Product and variant types.

use crate::error::CatalogError;
use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalogue.
///
/// Products are created once by the data source and are read-only for the
/// rest of the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier; also the popularity order and tie-break key.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Longer description for the detail view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Listing image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Price in the catalogue currency.
    pub price: Money,
    /// Material claim shown as a badge (e.g., "Vegan"). May be empty.
    #[serde(default)]
    pub material_badge: String,
    /// Colour variants. The first one is selected by default.
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a product with no variants yet.
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            description: None,
            image: None,
            price,
            material_badge: String::new(),
            variants: Vec::new(),
        }
    }

    /// Set the material badge.
    pub fn with_material(mut self, badge: impl Into<String>) -> Self {
        self.material_badge = badge.into();
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// The variant shown when the product is first displayed.
    pub fn default_variant(&self) -> Option<&Variant> {
        self.variants.first()
    }

    /// Colour names in variant order.
    pub fn color_names(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(|v| v.color_name.as_str())
    }

    /// Check that the product satisfies the catalogue data model.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.variants.is_empty() {
            return Err(CatalogError::InvalidProduct {
                id: self.id,
                reason: "product has no variants".to_string(),
            });
        }
        if self.price.is_negative() {
            return Err(CatalogError::InvalidProduct {
                id: self.id,
                reason: format!("negative price {}", self.price),
            });
        }
        Ok(())
    }
}

/// A purchasable colour option of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Colour label used for filtering (exact match).
    pub color_name: String,
    /// Colour swatch for rendering.
    #[serde(default)]
    pub color_hex: String,
    /// Variant image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Sizes in display order.
    #[serde(default)]
    pub sizes: Vec<SizeAvailability>,
}

impl Variant {
    /// Create a variant with no sizes.
    pub fn new(
        id: u64,
        color_name: impl Into<String>,
        color_hex: impl Into<String>,
    ) -> Self {
        Self {
            id: VariantId::new(id),
            color_name: color_name.into(),
            color_hex: color_hex.into(),
            image: None,
            sizes: Vec::new(),
        }
    }

    /// Append a size.
    pub fn with_size(mut self, size: impl Into<String>, in_stock: bool) -> Self {
        self.sizes.push(SizeAvailability {
            size: size.into(),
            in_stock,
        });
        self
    }

    /// Check if the given size is listed and in stock.
    pub fn has_size_in_stock(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s.in_stock && s.size == size)
    }

    /// Sizes currently in stock.
    pub fn available_sizes(&self) -> impl Iterator<Item = &str> {
        self.sizes
            .iter()
            .filter(|s| s.in_stock)
            .map(|s| s.size.as_str())
    }
}

/// Stock state of one size of a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SizeAvailability {
    /// Size label (e.g., "M").
    pub size: String,
    /// Whether this size can be ordered.
    pub in_stock: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tshirt() -> Product {
        Product::new(1, "T-shirt", Money::from_decimal(39.99))
            .with_material("Vegan")
            .with_variant(
                Variant::new(1, "Red", "#FF0000")
                    .with_size("M", true)
                    .with_size("L", true)
                    .with_size("S", false),
            )
    }

    #[test]
    fn test_product_builder() {
        let product = tshirt();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.material_badge, "Vegan");
        assert_eq!(product.default_variant().unwrap().color_name, "Red");
        assert_eq!(product.color_names().collect::<Vec<_>>(), vec!["Red"]);
    }

    #[test]
    fn test_size_in_stock() {
        let variant = &tshirt().variants[0];
        assert!(variant.has_size_in_stock("M"));
        assert!(!variant.has_size_in_stock("S"));
        assert!(!variant.has_size_in_stock("XL"));
        assert_eq!(variant.available_sizes().collect::<Vec<_>>(), vec!["M", "L"]);
    }

    #[test]
    fn test_validate() {
        assert!(tshirt().validate().is_ok());

        let bare = Product::new(9, "Bare", Money::whole(10));
        assert!(matches!(
            bare.validate(),
            Err(CatalogError::InvalidProduct { .. })
        ));
    }

    #[test]
    fn test_deserialize_feed_shape() {
        let json = r##"{
            "id": 2,
            "name": "Hoodie",
            "description": "Cozy hoodie",
            "image": "https://img/hoodie.png",
            "price": 59.99,
            "materialBadge": "Organic",
            "variants": [{
                "id": 2,
                "colorName": "Black",
                "colorHex": "#000",
                "image": "",
                "sizes": [{"size": "S", "inStock": false}]
            }]
        }"##;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Money::new(5999));
        assert_eq!(product.material_badge, "Organic");
        assert_eq!(product.variants[0].color_name, "Black");
        assert!(!product.variants[0].sizes[0].in_stock);
    }

    #[test]
    fn test_missing_material_defaults_empty() {
        let json = r#"{"id": 3, "name": "Cap", "price": 12,
            "variants": [{"id": 5, "colorName": "Blue"}]}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.material_badge, "");
        assert!(product.variants[0].sizes.is_empty());
    }
}
