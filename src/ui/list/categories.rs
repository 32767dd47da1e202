//! Category management list.

use async_trait::async_trait;

use crate::api::{Category, CategoryFilters, CategoryService, Paginated, ServiceError};

use super::controller::ListSource;
use super::filters::FilterSet;
use super::sorting::SortColumn;
use super::state::ListRequest;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListFilters {
    pub name: String,
    /// "true", "false", or empty for both.
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryListField {
    Name,
    Status,
}

impl FilterSet for CategoryListFilters {
    type Field = CategoryListField;

    fn get(&self, field: CategoryListField) -> &str {
        match field {
            CategoryListField::Name => &self.name,
            CategoryListField::Status => &self.status,
        }
    }

    fn set(&mut self, field: CategoryListField, value: String) {
        match field {
            CategoryListField::Name => self.name = value,
            CategoryListField::Status => self.status = value,
        }
    }

    fn is_debounced(field: CategoryListField) -> bool {
        field == CategoryListField::Name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySort {
    #[default]
    Name,
    CreatedAt,
}

impl SortColumn for CategorySort {
    fn as_param(self) -> &'static str {
        match self {
            CategorySort::Name => "name",
            CategorySort::CreatedAt => "createdAt",
        }
    }
}

pub fn category_filters(request: &ListRequest<CategoryListFilters, CategorySort>) -> CategoryFilters {
    let is_active = match request.filters.status.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    };
    CategoryFilters {
        name: Some(request.filters.name.clone()),
        is_active,
        page: Some(request.page),
        page_size: Some(request.page_size),
        sort_by: Some(request.sort.field.as_param().to_string()),
        sort_direction: Some(request.sort.direction),
    }
}

pub struct CategoryListSource {
    categories: CategoryService,
}

impl CategoryListSource {
    pub fn new(categories: CategoryService) -> Self {
        Self { categories }
    }
}

#[async_trait]
impl ListSource for CategoryListSource {
    type Filters = CategoryListFilters;
    type Sort = CategorySort;
    type Item = Category;

    fn label(&self) -> &'static str {
        "categories"
    }

    async fn fetch(
        &self,
        request: ListRequest<CategoryListFilters, CategorySort>,
    ) -> Result<Paginated<Category>, ServiceError> {
        self.categories
            .get_categories_filtered_paginated(&category_filters(&request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{clean_filter_params, SortDirection};
    use crate::ui::list::sorting::SortSpec;

    #[test]
    fn status_select_maps_to_is_active() {
        let request = ListRequest {
            generation: 1,
            filters: CategoryListFilters {
                name: String::new(),
                status: "true".into(),
            },
            page: 0,
            page_size: 20,
            sort: SortSpec::new(CategorySort::Name, SortDirection::Asc),
        };
        let params = clean_filter_params(&category_filters(&request)).unwrap();

        assert!(params.contains(&("isActive".to_string(), "true".to_string())));
        assert!(!params.iter().any(|(k, _)| k == "name"));
    }
}
