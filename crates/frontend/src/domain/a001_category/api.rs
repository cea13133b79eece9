use contracts::domain::a001_category::{Category, CategoryDto};
use contracts::domain::common::ListOutcome;
use serde_json::Value;

use crate::shared::api_utils::{path_segment, Gateway};

/// All categories; accepts a bare array or a `{data}` envelope
pub async fn fetch_all(gw: &Gateway) -> Result<Vec<Category>, String> {
    let body = gw
        .get_json::<Value>("/categories")
        .await
        .map_err(|e| e.to_string())?;
    match ListOutcome::from_json(body) {
        ListOutcome::Loaded { records, .. } => Ok(records),
        ListOutcome::Failed { reason } => Err(reason),
    }
}

pub async fn fetch_by_id(gw: &Gateway, id: &str) -> Result<Category, String> {
    gw.get_json(&format!("/categories/{}", path_segment(id)))
        .await
        .map_err(|e| e.to_string())
}

/// Create or update depending on `dto.id`
pub async fn save_form(gw: &Gateway, dto: &CategoryDto) -> Result<(), String> {
    let result = match dto.id.as_deref() {
        Some(id) => {
            gw.put_json::<_, Value>(&format!("/categories/{}", path_segment(id)), dto)
                .await
        }
        None => gw.post_json::<_, Value>("/categories", dto).await,
    };
    result.map(|_| ()).map_err(|e| e.to_string())
}

pub async fn delete(gw: &Gateway, id: &str) -> Result<(), String> {
    gw.delete::<Value>(&format!("/categories/{}", path_segment(id)))
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
