use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique brand identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BrandId(pub Uuid);

impl BrandId {
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

impl AggregateId for BrandId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BrandId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Product brand / manufacturer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brand {
    #[serde(flatten)]
    pub base: BaseAggregate<BrandId>,

    /// Brand site, shown on the storefront brand page
    #[serde(rename = "websiteUrl")]
    pub website_url: Option<String>,

    #[serde(rename = "logoUrl")]
    pub logo_url: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Brand {
    pub fn new_for_insert(code: String, description: String, comment: Option<String>) -> Self {
        let mut base = BaseAggregate::new(BrandId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            website_url: None,
            logo_url: None,
            is_active: true,
        }
    }
}
