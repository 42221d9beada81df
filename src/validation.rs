// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Creation-time checks run before anything is sent to the backend.
//!
//! These mirror rules the backend enforces itself; a draft that passes here can
//! still be rejected remotely.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Category, CreateCategoryDto, CreatePersonDto, Person, TransactionDraft, TransactionType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("value must be greater than zero")]
    NonPositiveValue,
    #[error("person '{0}' not found")]
    UnknownPerson(String),
    #[error("category '{0}' not found")]
    UnknownCategory(String),
    #[error("minors restricted to expenses")]
    MinorIncome,
    #[error("category does not support this transaction type")]
    PurposeMismatch,
    #[error("name must not be empty")]
    EmptyName,
    #[error("age must be at least 1")]
    InvalidAge,
}

/// A draft that passed [`validate_create`]. Only the validator builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft(TransactionDraft);

impl ValidDraft {
    pub fn draft(&self) -> &TransactionDraft {
        &self.0
    }

    pub fn into_inner(self) -> TransactionDraft {
        self.0
    }
}

/// Checks a transaction draft against the person and category it references.
///
/// Rules run in a fixed order and stop at the first failure: description,
/// value, references, the minor restriction, then category purpose. A resolved
/// entity whose id differs from the draft's reference counts as missing.
pub fn validate_create(
    draft: TransactionDraft,
    person: Option<&Person>,
    category: Option<&Category>,
) -> Result<ValidDraft, ValidationError> {
    if draft.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if draft.value <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveValue);
    }
    let category = category
        .filter(|c| c.id == draft.category_id)
        .ok_or_else(|| ValidationError::UnknownCategory(draft.category_id.clone()))?;
    let person = person
        .filter(|p| p.id == draft.person_id)
        .ok_or_else(|| ValidationError::UnknownPerson(draft.person_id.clone()))?;
    if person.is_minor() && draft.r#type != TransactionType::Expense {
        return Err(ValidationError::MinorIncome);
    }
    if !category.purpose.accepts(draft.r#type) {
        return Err(ValidationError::PurposeMismatch);
    }
    Ok(ValidDraft(draft))
}

pub fn validate_person(dto: &CreatePersonDto) -> Result<(), ValidationError> {
    if dto.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if dto.age == 0 {
        return Err(ValidationError::InvalidAge);
    }
    Ok(())
}

pub fn validate_category(dto: &CreateCategoryDto) -> Result<(), ValidationError> {
    if dto.description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    Ok(())
}
