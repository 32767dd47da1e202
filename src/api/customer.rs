//! Customer resource: `/api/customers`.

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::error::{Operation, ServiceError};
use crate::api::pagination::{Paginated, SortDirection};
use crate::api::query::clean_filter_params;

const API_BASE: &str = "/api/customers";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GenderType {
    #[default]
    Female,
    Male,
    Other,
}

impl GenderType {
    pub fn label(self) -> &'static str {
        match self {
            GenderType::Female => "Female",
            GenderType::Male => "Male",
            GenderType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i64,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub gender: Option<GenderType>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tin: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Payload for creating a customer. Blank optional fields are sent as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInsert {
    pub firstname: String,
    pub lastname: String,
    pub gender: GenderType,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub tin: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerFilters {
    pub search_term: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

const CREATE: Operation = Operation {
    action: "create customer",
    resource: "Customer",
    conflict: "Customer with this email or TIN already exists",
};

/// REST client for customers.
#[derive(Clone)]
pub struct CustomerService {
    client: ApiClient,
}

impl CustomerService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_customer(&self, customer: &CustomerInsert) -> Result<Customer, ServiceError> {
        self.client.post(API_BASE, customer, &CREATE).await
    }

    pub async fn get_customer(&self, customer_id: i64) -> Result<Customer, ServiceError> {
        let op = Operation {
            action: "get customer",
            ..CREATE
        };
        self.client
            .get(&format!("{}/{}", API_BASE, customer_id), &Vec::new(), &op)
            .await
    }

    pub async fn delete_customer(&self, customer_id: i64) -> Result<(), ServiceError> {
        let op = Operation {
            action: "delete customer",
            ..CREATE
        };
        self.client
            .delete(&format!("{}/{}", API_BASE, customer_id), &op)
            .await
    }

    pub async fn get_customers_filtered_paginated(
        &self,
        filters: &CustomerFilters,
    ) -> Result<Paginated<Customer>, ServiceError> {
        let op = Operation {
            action: "get customers",
            ..CREATE
        };
        let query = clean_filter_params(filters)?;
        self.client.get(API_BASE, &query, &op).await
    }
}
