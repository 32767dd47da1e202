//! Customer create form.

use crate::api::{CustomerInsert, GenderType, ServiceError};

use super::{char_len, is_valid_email, is_valid_tin, non_blank, FieldErrors};

const NAME_MIN_LEN: usize = 2;
const ADDRESS_MIN_LEN: usize = 5;

/// Text inputs of the customer form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CustomerField {
    Firstname,
    Lastname,
    PhoneNumber,
    Address,
    Email,
    Tin,
}

impl CustomerField {
    /// Wire name, also the key in `FieldErrors`.
    pub fn key(self) -> &'static str {
        match self {
            CustomerField::Firstname => "firstname",
            CustomerField::Lastname => "lastname",
            CustomerField::PhoneNumber => "phoneNumber",
            CustomerField::Address => "address",
            CustomerField::Email => "email",
            CustomerField::Tin => "tin",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "firstname" => Some(CustomerField::Firstname),
            "lastname" => Some(CustomerField::Lastname),
            "phoneNumber" => Some(CustomerField::PhoneNumber),
            "address" => Some(CustomerField::Address),
            "email" => Some(CustomerField::Email),
            "tin" => Some(CustomerField::Tin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerForm {
    firstname: String,
    lastname: String,
    gender: GenderType,
    phone_number: String,
    address: String,
    email: String,
    tin: String,
    errors: FieldErrors,
    general_error: Option<String>,
}

impl CustomerForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: CustomerField) -> &str {
        match field {
            CustomerField::Firstname => &self.firstname,
            CustomerField::Lastname => &self.lastname,
            CustomerField::PhoneNumber => &self.phone_number,
            CustomerField::Address => &self.address,
            CustomerField::Email => &self.email,
            CustomerField::Tin => &self.tin,
        }
    }

    /// Update one input and clear its error.
    pub fn set(&mut self, field: CustomerField, value: impl Into<String>) {
        let slot = match field {
            CustomerField::Firstname => &mut self.firstname,
            CustomerField::Lastname => &mut self.lastname,
            CustomerField::PhoneNumber => &mut self.phone_number,
            CustomerField::Address => &mut self.address,
            CustomerField::Email => &mut self.email,
            CustomerField::Tin => &mut self.tin,
        };
        *slot = value.into();
        self.errors.remove(field.key());
    }

    pub fn gender(&self) -> GenderType {
        self.gender
    }

    pub fn set_gender(&mut self, gender: GenderType) {
        self.gender = gender;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: CustomerField) -> Option<&str> {
        self.errors.get(field.key()).map(String::as_str)
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    /// Both names meet their minimum length.
    pub fn can_submit(&self) -> bool {
        char_len(self.firstname.trim()) >= NAME_MIN_LEN
            && char_len(self.lastname.trim()) >= NAME_MIN_LEN
    }

    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        check_name(&mut self.errors, CustomerField::Firstname, &self.firstname, "First name");
        check_name(&mut self.errors, CustomerField::Lastname, &self.lastname, "Last name");

        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            self.errors
                .insert(CustomerField::Email.key(), "Invalid email address".into());
        }

        let address = self.address.trim();
        if !address.is_empty() && char_len(address) < ADDRESS_MIN_LEN {
            self.errors.insert(
                CustomerField::Address.key(),
                format!("Address must be at least {} characters", ADDRESS_MIN_LEN),
            );
        }

        let tin = self.tin.trim();
        if !tin.is_empty() && !is_valid_tin(tin) {
            self.errors
                .insert(CustomerField::Tin.key(), "TIN must be exactly 9 digits".into());
        }

        self.errors.is_empty()
    }

    /// Validated payload. Blank optional fields become `None`.
    pub fn insert_payload(&mut self) -> Option<CustomerInsert> {
        if !self.validate() {
            return None;
        }
        Some(CustomerInsert {
            firstname: self.firstname.trim().to_string(),
            lastname: self.lastname.trim().to_string(),
            gender: self.gender,
            phone_number: non_blank(&self.phone_number),
            address: non_blank(&self.address),
            email: non_blank(&self.email),
            tin: non_blank(&self.tin),
        })
    }

    /// Back to an empty form, as after close or a successful submit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn apply_service_error(&mut self, error: &ServiceError) {
        match error {
            ServiceError::Validation { field_errors, .. } if !field_errors.is_empty() => {
                for (key, message) in field_errors {
                    match CustomerField::from_key(key) {
                        Some(field) => {
                            self.errors.insert(field.key(), message.clone());
                        }
                        None => self.general_error = Some(message.clone()),
                    }
                }
            }
            other => self.general_error = Some(other.to_string()),
        }
    }
}

fn check_name(errors: &mut FieldErrors, field: CustomerField, value: &str, label: &str) {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field.key(), format!("{} is required", label));
    } else if char_len(value) < NAME_MIN_LEN {
        errors.insert(
            field.key(),
            format!("{} must be at least {} characters", label, NAME_MIN_LEN),
        );
    }
}
