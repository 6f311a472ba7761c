use crate::domain::a002_category::CategoryId;
use crate::domain::a003_brand::BrandId;
use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    pub sku: String,

    /// Unit price in the store currency
    pub price: f64,

    /// Units on hand across all warehouses
    pub stock: i64,

    #[serde(rename = "categoryId")]
    pub category_id: Option<CategoryId>,

    #[serde(rename = "brandId")]
    pub brand_id: Option<BrandId>,

    /// Whether the product is visible in the storefront catalog
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Product {
    /// Create a new product for insertion
    pub fn new_for_insert(
        code: String,
        description: String,
        sku: String,
        price: f64,
        stock: i64,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProductId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            sku,
            price,
            stock,
            category_id: None,
            brand_id: None,
            is_active: true,
        }
    }
}
