use contracts::domain::a002_order::{Order, OrderDto, OrderFilters};
use contracts::domain::common::ListOutcome;
use serde_json::Value;

use crate::shared::api_utils::{path_segment, with_query, Gateway};

/// One page of orders matching `filters`.
///
/// Never fails: transport and status errors become [`ListOutcome::Failed`].
pub async fn fetch_orders(gw: &Gateway, filters: &OrderFilters) -> ListOutcome<Order> {
    let path = match with_query("/orders", filters) {
        Ok(path) => path,
        Err(e) => return ListOutcome::failed(e.to_string()),
    };
    match gw.get_json::<Value>(&path).await {
        Ok(body) => ListOutcome::from_json(body),
        Err(e) => {
            log::error!("GET {} failed: {}", path, e);
            ListOutcome::failed(e.to_string())
        }
    }
}

pub async fn fetch_by_id(gw: &Gateway, id: &str) -> Result<Order, String> {
    gw.get_json(&format!("/orders/{}", path_segment(id)))
        .await
        .map_err(|e| e.to_string())
}

pub async fn create(gw: &Gateway, dto: &OrderDto) -> Result<(), String> {
    gw.post_json::<_, Value>("/orders", dto)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub async fn update(gw: &Gateway, id: &str, dto: &OrderDto) -> Result<(), String> {
    gw.put_json::<_, Value>(&format!("/orders/{}", path_segment(id)), dto)
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub async fn delete(gw: &Gateway, id: &str) -> Result<(), String> {
    gw.delete::<Value>(&format!("/orders/{}", path_segment(id)))
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}

pub async fn mark_viewed(gw: &Gateway, id: &str) -> Result<(), String> {
    gw.patch::<Value>(&format!("/orders/{}/viewed", path_segment(id)))
        .await
        .map(|_| ())
        .map_err(|e| e.to_string())
}
