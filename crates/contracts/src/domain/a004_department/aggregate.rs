use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique department identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentId(pub Uuid);

impl DepartmentId {
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

impl AggregateId for DepartmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DepartmentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Top-level storefront department (groups categories)
///
/// An active department is linked from the storefront navigation; the backend
/// rejects deletion while `is_active` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(flatten)]
    pub base: BaseAggregate<DepartmentId>,

    /// Position in the storefront navigation bar
    #[serde(rename = "sortOrder")]
    pub sort_order: i32,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Department {
    pub fn new_for_insert(code: String, description: String, comment: Option<String>) -> Self {
        let mut base = BaseAggregate::new(DepartmentId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            sort_order: 0,
            is_active: false,
        }
    }
}
