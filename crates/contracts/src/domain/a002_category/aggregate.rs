use crate::domain::common::{AggregateId, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique category identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(pub Uuid);

impl CategoryId {
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

impl AggregateId for CategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog category (one level, belongs to a department)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(flatten)]
    pub base: BaseAggregate<CategoryId>,

    #[serde(rename = "departmentId")]
    pub department_id: Option<crate::domain::a004_department::DepartmentId>,

    /// Position within the parent department's category listing
    #[serde(rename = "sortOrder")]
    pub sort_order: i32,

    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl Category {
    pub fn new_for_insert(code: String, description: String, comment: Option<String>) -> Self {
        let mut base = BaseAggregate::new(CategoryId::new_v4(), code, description);
        base.comment = comment;

        Self {
            base,
            department_id: None,
            sort_order: 0,
            is_active: true,
        }
    }
}
