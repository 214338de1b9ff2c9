use crate::{FeedError, Result};
use chrono::{DateTime, Utc};
use orderboard_core::types::{DishSnapshot, Guest, Order, OrderStatus, Table};
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response envelope used by every backend list endpoint
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    data: Vec<T>,
    #[serde(default)]
    #[allow(dead_code)]
    message: String,
}

/// Order record as the backend sends it
///
/// The status field deserializes through the five-member enum, so a status
/// outside the enumeration fails the whole decode here at the boundary and
/// never reaches the aggregation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderRecord {
    id: i64,
    status: OrderStatus,
    #[serde(default)]
    table_number: Option<i32>,
    #[serde(default)]
    guest: Option<GuestRecord>,
    dish_snapshot: DishSnapshotRecord,
    quantity: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuestRecord {
    id: i64,
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DishSnapshotRecord {
    id: i64,
    name: String,
    price: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableRecord {
    number: i32,
    capacity: i32,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.id,
            status: record.status,
            table_number: record.table_number,
            guest: record.guest.map(|guest| Guest {
                id: guest.id,
                name: guest.name,
            }),
            dish_snapshot: DishSnapshot {
                id: record.dish_snapshot.id,
                name: record.dish_snapshot.name,
                price: record.dish_snapshot.price,
            },
            quantity: record.quantity,
            created_at: record.created_at,
            last_updated_at: record.updated_at,
        }
    }
}

impl From<TableRecord> for Table {
    fn from(record: TableRecord) -> Self {
        Self {
            number: record.number,
            capacity: record.capacity,
        }
    }
}

fn decode_orders(body: &[u8]) -> Result<Vec<Order>> {
    let envelope: ListEnvelope<OrderRecord> =
        serde_json::from_slice(body).map_err(|e| FeedError::Decode(e.to_string()))?;
    Ok(envelope.data.into_iter().map(Order::from).collect())
}

fn decode_tables(body: &[u8]) -> Result<Vec<Table>> {
    let envelope: ListEnvelope<TableRecord> =
        serde_json::from_slice(body).map_err(|e| FeedError::Decode(e.to_string()))?;
    Ok(envelope.data.into_iter().map(Table::from).collect())
}

/// HTTP client for the restaurant backend REST API
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch the full current order list
    pub async fn fetch_orders(&self) -> Result<Vec<Order>> {
        let body = self.get("/orders").await?;
        decode_orders(&body)
    }

    /// Fetch the full table list
    pub async fn fetch_tables(&self) -> Result<Vec<Table>> {
        let body = self.get("/tables").await?;
        decode_tables(&body)
    }

    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        let start = Instant::now();

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(FeedError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await?;
        let elapsed = start.elapsed();
        orderboard_metrics::histograms::backend_request_duration(elapsed, path);
        debug!(
            endpoint = path,
            bytes = body.len(),
            request_ms = elapsed.as_millis() as u64,
            "Backend request complete"
        );

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORDER_JSON: &str = r#"{
        "data": [
            {
                "id": 101,
                "status": "Processing",
                "tableNumber": 3,
                "guest": { "id": 17, "name": "Linh", "tableNumber": 3 },
                "dishSnapshot": { "id": 5, "name": "Bun cha", "price": 65000, "image": "x.png" },
                "quantity": 2,
                "createdAt": "2025-06-01T12:00:00.000Z",
                "updatedAt": "2025-06-01T12:05:00.000Z"
            },
            {
                "id": 102,
                "status": "Pending",
                "tableNumber": null,
                "guest": null,
                "dishSnapshot": { "id": 6, "name": "Ca phe sua", "price": 30000 },
                "quantity": 1,
                "createdAt": "2025-06-01T12:10:00.000Z",
                "updatedAt": "2025-06-01T12:10:00.000Z"
            }
        ],
        "message": "ok"
    }"#;

    #[test]
    fn decodes_camel_case_order_records() {
        let orders = decode_orders(ORDER_JSON.as_bytes()).unwrap();
        assert_eq!(orders.len(), 2);

        let first = &orders[0];
        assert_eq!(first.id, 101);
        assert_eq!(first.status, OrderStatus::Processing);
        assert_eq!(first.table_number, Some(3));
        assert_eq!(first.guest.as_ref().map(|g| g.id), Some(17));
        assert_eq!(first.dish_snapshot.price, 65_000);
        assert_eq!(first.quantity, 2);

        let second = &orders[1];
        assert_eq!(second.table_number, None);
        assert!(second.guest.is_none());
    }

    #[test]
    fn rejects_status_outside_the_enumeration() {
        let body = r#"{
            "data": [
                {
                    "id": 1,
                    "status": "Refunded",
                    "dishSnapshot": { "id": 1, "name": "Pho", "price": 1 },
                    "quantity": 1,
                    "createdAt": "2025-06-01T12:00:00Z",
                    "updatedAt": "2025-06-01T12:00:00Z"
                }
            ]
        }"#;
        let err = decode_orders(body.as_bytes()).unwrap_err();
        assert!(matches!(err, FeedError::Decode(_)), "got {err:?}");
    }

    #[test]
    fn missing_optional_fields_default_to_none() {
        let body = r#"{
            "data": [
                {
                    "id": 1,
                    "status": "Paid",
                    "dishSnapshot": { "id": 1, "name": "Pho", "price": 50000 },
                    "quantity": 1,
                    "createdAt": "2025-06-01T12:00:00Z",
                    "updatedAt": "2025-06-01T12:00:00Z"
                }
            ]
        }"#;
        let orders = decode_orders(body.as_bytes()).unwrap();
        assert_eq!(orders[0].table_number, None);
        assert!(orders[0].guest.is_none());
    }

    #[test]
    fn decodes_table_records() {
        let body = r#"{
            "data": [
                { "number": 1, "capacity": 4, "token": "abc" },
                { "number": 2, "capacity": 2 }
            ],
            "message": "ok"
        }"#;
        let tables = decode_tables(body.as_bytes()).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].number, 1);
        assert_eq!(tables[1].capacity, 2);
    }
}
