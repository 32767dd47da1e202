//! Category create/update form.

use crate::api::{Category, CategoryInsert, CategoryUpdate, ServiceError};

use super::{char_len, FieldErrors};

pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 55;

const FIELD_NAME: &str = "name";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    /// Set when editing an existing category.
    category_id: Option<i64>,
    name: String,
    errors: FieldErrors,
    /// Error not tied to a field, e.g. access denied.
    general_error: Option<String>,
}

impl CategoryForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing category.
    pub fn for_update(category: &Category) -> Self {
        Self {
            category_id: Some(category.category_id),
            name: category.name.clone(),
            ..Self::default()
        }
    }

    pub fn is_update(&self) -> bool {
        self.category_id.is_some()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
        self.errors.remove(FIELD_NAME);
        self.general_error = None;
    }

    pub fn can_submit(&self) -> bool {
        char_len(self.name.trim()) >= NAME_MIN_LEN
    }

    /// Full validation. Replaces any previous errors.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        let name = self.name.trim();
        let len = char_len(name);

        if name.is_empty() {
            self.errors.insert(FIELD_NAME, "Category name is required".into());
        } else if len < NAME_MIN_LEN {
            self.errors.insert(
                FIELD_NAME,
                format!("Category name must be at least {} characters", NAME_MIN_LEN),
            );
        } else if len > NAME_MAX_LEN {
            self.errors.insert(
                FIELD_NAME,
                format!("Category name must be at most {} characters", NAME_MAX_LEN),
            );
        }

        self.errors.is_empty()
    }

    /// Validated create payload.
    pub fn insert_payload(&mut self) -> Option<CategoryInsert> {
        self.validate().then(|| CategoryInsert {
            name: self.name.trim().to_string(),
        })
    }

    /// Validated update payload. `None` for a create form.
    pub fn update_payload(&mut self) -> Option<CategoryUpdate> {
        let category_id = self.category_id?;
        self.validate().then(|| CategoryUpdate {
            category_id,
            name: self.name.trim().to_string(),
        })
    }

    /// Show a failed submit on the form.
    ///
    /// Backend field errors and name conflicts attach to the name field;
    /// everything else becomes the general error.
    pub fn apply_service_error(&mut self, error: &ServiceError) {
        match error {
            ServiceError::Validation { field_errors, .. } if !field_errors.is_empty() => {
                for (field, message) in field_errors {
                    if field == FIELD_NAME {
                        self.errors.insert(FIELD_NAME, message.clone());
                    } else {
                        self.general_error = Some(message.clone());
                    }
                }
            }
            ServiceError::Conflict { message } => {
                self.errors.insert(FIELD_NAME, message.clone());
            }
            other => self.general_error = Some(other.to_string()),
        }
    }
}
