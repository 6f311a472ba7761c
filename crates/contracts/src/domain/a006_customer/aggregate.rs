use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique customer identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
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

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Registered storefront customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    #[serde(flatten)]
    pub base: BaseAggregate<CustomerId>,

    pub email: String,

    pub phone: Option<String>,

    /// Last successful storefront sign-in
    #[serde(rename = "lastLoginAt")]
    pub last_login_at: Option<chrono::DateTime<chrono::Utc>>,

    /// Number of completed orders (denormalized for the admin list)
    #[serde(rename = "ordersCount")]
    pub orders_count: i64,
}

impl Customer {
    pub fn new_for_insert(
        code: String,
        description: String,
        email: String,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(CustomerId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            email,
            phone: None,
            last_login_at: None,
            orders_count: 0,
        }
    }
}
