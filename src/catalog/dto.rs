use serde::{Deserialize, Serialize};

use super::repo::Vegetable;

/// Request body for adding a vegetable to the catalog.
#[derive(Debug, Deserialize)]
pub struct AddVegetableRequest {
    pub name: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddVegetableResponse {
    pub message: String,
    pub vegetable: Vegetable,
}
