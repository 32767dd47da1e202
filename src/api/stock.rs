//! Stock management: low-stock alerts and stock adjustments.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::error::{Operation, ServiceError};
use crate::api::pagination::{Paginated, SortDirection};
use crate::api::query::clean_filter_params;

const API_BASE: &str = "/api/stock-management";

/// Read-only projection of a product whose stock is at or below its alert level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlert {
    pub product_id: i64,
    pub product_code: String,
    pub product_name: String,
    pub current_stock: i32,
    /// Minimum stock before the product is flagged.
    pub low_stock_alert: i32,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
}

/// Wire filters for `GET /api/stock-management/low-stock`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockQuery {
    pub name_or_code: Option<String>,
    pub category_id: Option<i64>,
    pub material_name: Option<String>,
    pub min_stock: Option<i32>,
    pub max_stock: Option<i32>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockOperation {
    #[default]
    Add,
    Remove,
    Set,
}

impl StockOperation {
    pub const ALL: [StockOperation; 3] = [StockOperation::Add, StockOperation::Remove, StockOperation::Set];

    /// Wire value, as serialized.
    pub fn as_param(self) -> &'static str {
        match self {
            StockOperation::Add => "ADD",
            StockOperation::Remove => "REMOVE",
            StockOperation::Set => "SET",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockOperation::Add => "Add stock",
            StockOperation::Remove => "Remove stock",
            StockOperation::Set => "Set stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdate {
    pub product_id: i64,
    pub quantity: i32,
    pub operation: StockOperation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockUpdateResult {
    pub product_id: i64,
    pub product_code: String,
    pub previous_stock: i32,
    pub new_stock: i32,
    pub change_amount: i32,
    pub success: bool,
    /// "ADD", "REMOVE" or "SET".
    pub operation_type: String,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Performs stock adjustments on behalf of the stock update modal.
#[async_trait]
pub trait StockUpdater: Send + Sync {
    async fn update_stock(&self, update: &StockUpdate) -> Result<StockUpdateResult, ServiceError>;
}

const LOW_STOCK: Operation = Operation {
    action: "get low stock products",
    resource: "Product",
    conflict: "Stock was changed by another request",
};

/// REST client for stock management endpoints.
#[derive(Clone)]
pub struct StockService {
    client: ApiClient,
}

impl StockService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn get_low_stock_products(
        &self,
        query: &LowStockQuery,
    ) -> Result<Paginated<StockAlert>, ServiceError> {
        let params = clean_filter_params(query)?;
        self.client
            .get(&format!("{}/low-stock", API_BASE), &params, &LOW_STOCK)
            .await
    }
}

#[async_trait]
impl StockUpdater for StockService {
    async fn update_stock(&self, update: &StockUpdate) -> Result<StockUpdateResult, ServiceError> {
        let op = Operation {
            action: "update stock",
            ..LOW_STOCK
        };
        let path = format!("{}/products/{}", API_BASE, update.product_id);
        self.client.put(&path, update, &op).await
    }
}
