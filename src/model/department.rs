use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::numeric::LooseDecimal;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Department {
    #[schema(example = "Kitchen")]
    pub name: String,
}

/// Billing info for a department the current user may bill against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRate {
    #[schema(example = "18.50", value_type = Option<String>)]
    #[serde(default)]
    pub hourly_rate: Option<LooseDecimal>,
}

pub type DepartmentMap = HashMap<String, Department>;
pub type PermittedDepartments = HashMap<String, DepartmentRate>;
