//! Category resource: `/api/categories`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::error::{Operation, ServiceError};
use crate::api::pagination::{Paginated, SortDirection};
use crate::api::query::clean_filter_params;

const API_BASE: &str = "/api/categories";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub last_updated_by: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryInsert {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    pub category_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryForDropdown {
    pub id: i64,
    pub name: String,
}

/// Category with aggregate figures for the details page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetails {
    pub category_id: i64,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub total_products: u64,
    #[serde(default)]
    pub average_product_price: Option<f64>,
    #[serde(default)]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub total_sales_count: Option<u64>,
}

/// Optional constraints for the category listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryFilters {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

const CREATE: Operation = Operation {
    action: "create category",
    resource: "Category",
    conflict: "Category with name already exists",
};
const UPDATE: Operation = Operation {
    action: "update category",
    ..CREATE
};
const DELETE: Operation = Operation {
    action: "delete category",
    ..CREATE
};
const GET: Operation = Operation {
    action: "get category",
    ..CREATE
};
const LIST: Operation = Operation {
    action: "get categories",
    ..CREATE
};
const DETAILS: Operation = Operation {
    action: "get category detailed view",
    ..CREATE
};
const DROPDOWN: Operation = Operation {
    action: "get categories dropdown",
    ..CREATE
};

/// REST client for categories.
#[derive(Clone)]
pub struct CategoryService {
    client: ApiClient,
}

impl CategoryService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_category(&self, category: &CategoryInsert) -> Result<Category, ServiceError> {
        self.client.post(API_BASE, category, &CREATE).await
    }

    pub async fn update_category(&self, category: &CategoryUpdate) -> Result<Category, ServiceError> {
        let path = format!("{}/{}", API_BASE, category.category_id);
        self.client.put(&path, category, &UPDATE).await
    }

    pub async fn delete_category(&self, category_id: i64) -> Result<(), ServiceError> {
        self.client
            .delete(&format!("{}/{}", API_BASE, category_id), &DELETE)
            .await
    }

    pub async fn get_category(&self, category_id: i64) -> Result<Category, ServiceError> {
        self.client
            .get(&format!("{}/{}", API_BASE, category_id), &Vec::new(), &GET)
            .await
    }

    pub async fn get_categories_filtered_paginated(
        &self,
        filters: &CategoryFilters,
    ) -> Result<Paginated<Category>, ServiceError> {
        let query = clean_filter_params(filters)?;
        self.client.get(API_BASE, &query, &LIST).await
    }

    pub async fn get_category_details(&self, category_id: i64) -> Result<CategoryDetails, ServiceError> {
        self.client
            .get(&format!("{}/{}/details", API_BASE, category_id), &Vec::new(), &DETAILS)
            .await
    }

    pub async fn get_categories_for_dropdown(&self) -> Result<Vec<CategoryForDropdown>, ServiceError> {
        self.client
            .get(&format!("{}/dropdown", API_BASE), &Vec::new(), &DROPDOWN)
            .await
    }
}
