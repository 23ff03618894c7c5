use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::department::{DepartmentMap, PermittedDepartments};
use super::time_entry::TimeEntry;

/// Everything the payroll view reads, captured once per render.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntrySnapshot {
    #[serde(default)]
    pub recent_entries: Vec<TimeEntry>,
    #[serde(default)]
    #[schema(value_type = HashMap<String, crate::model::Department>)]
    pub department_map: DepartmentMap,
    /// `None` until the rate lookup has resolved
    #[serde(default)]
    #[schema(value_type = Option<HashMap<String, crate::model::DepartmentRate>>)]
    pub user_permitted_departments: Option<PermittedDepartments>,
    #[serde(default)]
    pub loading: bool,
}
