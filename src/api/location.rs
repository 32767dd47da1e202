//! Location resource: `/api/locations`.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::error::{Operation, ServiceError};
use crate::api::pagination::{Paginated, SortDirection};
use crate::api::query::clean_filter_params;

const API_BASE: &str = "/api/locations";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub location_id: i64,
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
pub struct LocationInsert {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub location_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationForDropdown {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilters {
    pub name: Option<String>,
    pub is_active: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

const CREATE: Operation = Operation {
    action: "create location",
    resource: "Location",
    conflict: "Location with name already exists",
};

/// REST client for sale locations.
#[derive(Clone)]
pub struct LocationService {
    client: ApiClient,
}

impl LocationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn create_location(&self, location: &LocationInsert) -> Result<Location, ServiceError> {
        self.client.post(API_BASE, location, &CREATE).await
    }

    pub async fn update_location(&self, location: &LocationUpdate) -> Result<Location, ServiceError> {
        let op = Operation {
            action: "update location",
            ..CREATE
        };
        let path = format!("{}/{}", API_BASE, location.location_id);
        self.client.put(&path, location, &op).await
    }

    pub async fn delete_location(&self, location_id: i64) -> Result<(), ServiceError> {
        let op = Operation {
            action: "delete location",
            ..CREATE
        };
        self.client
            .delete(&format!("{}/{}", API_BASE, location_id), &op)
            .await
    }

    pub async fn get_location(&self, location_id: i64) -> Result<Location, ServiceError> {
        let op = Operation {
            action: "get location",
            ..CREATE
        };
        self.client
            .get(&format!("{}/{}", API_BASE, location_id), &Vec::new(), &op)
            .await
    }

    pub async fn get_locations_filtered_paginated(
        &self,
        filters: &LocationFilters,
    ) -> Result<Paginated<Location>, ServiceError> {
        let op = Operation {
            action: "get locations",
            ..CREATE
        };
        let query = clean_filter_params(filters)?;
        self.client.get(API_BASE, &query, &op).await
    }

    pub async fn get_locations_for_dropdown(&self) -> Result<Vec<LocationForDropdown>, ServiceError> {
        let op = Operation {
            action: "get locations dropdown",
            ..CREATE
        };
        self.client
            .get(&format!("{}/dropdown", API_BASE), &Vec::new(), &op)
            .await
    }
}
