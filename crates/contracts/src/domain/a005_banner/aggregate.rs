use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique banner identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BannerId(pub Uuid);

impl BannerId {
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

impl AggregateId for BannerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BannerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Promotional banner shown on the storefront home page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Banner {
    #[serde(flatten)]
    pub base: BaseAggregate<BannerId>,

    #[serde(rename = "imageUrl")]
    pub image_url: String,

    /// Where the banner click navigates to
    #[serde(rename = "targetUrl")]
    pub target_url: Option<String>,

    /// Campaign window; a banner outside its window is not served
    #[serde(rename = "startsAt")]
    pub starts_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "endsAt")]
    pub ends_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Banner {
    pub fn new_for_insert(
        code: String,
        description: String,
        image_url: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(BannerId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            image_url,
            target_url: None,
            starts_at: None,
            ends_at: None,
            is_active: false,
        }
    }
}
