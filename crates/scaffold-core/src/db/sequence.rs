use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sequence {
    pub name: String,

    pub schema: Option<String>,

    /// Store type of the generated values. `None` means `bigint`.
    pub store_type: Option<String>,

    pub start_value: Option<i64>,

    pub increment_by: Option<i32>,

    pub min_value: Option<i64>,

    pub max_value: Option<i64>,

    pub cyclic: bool,
}
