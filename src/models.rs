// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::eligibility::MINOR_AGE_LIMIT;

/// Backend timestamps: RFC 3339, or ISO 8601 without an offset (read as UTC).
pub mod timestamp {
    use super::*;
    use serde::de::Error;

    pub fn parse(s: &str) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(s)
            .map(|d| d.with_timezone(&Utc))
            .ok()
            .or_else(|| {
                NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|n| n.and_utc())
            })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(d)?;
        parse(&s).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", s)))
    }

    pub fn deserialize_opt<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        match Option::<String>::deserialize(d)? {
            Some(s) => parse(&s)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{}'", s))),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_opt"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Person {
    pub fn is_minor(&self) -> bool {
        self.age < MINOR_AGE_LIMIT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub description: String,
    pub purpose: CategoryPurpose,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_opt"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub r#type: TransactionType,
    pub category: Category,
    pub person: Person,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_opt"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Which transaction types a category accepts. Wire values: 1, 2, 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CategoryPurpose {
    ExpenseOnly,
    IncomeOnly,
    Both,
}

impl CategoryPurpose {
    pub fn accepts(self, kind: TransactionType) -> bool {
        match (self, kind) {
            (CategoryPurpose::Both, _) => true,
            (CategoryPurpose::ExpenseOnly, TransactionType::Expense) => true,
            (CategoryPurpose::IncomeOnly, TransactionType::Income) => true,
            (CategoryPurpose::ExpenseOnly, TransactionType::Income) => false,
            (CategoryPurpose::IncomeOnly, TransactionType::Expense) => false,
        }
    }
}

impl TryFrom<u8> for CategoryPurpose {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(CategoryPurpose::ExpenseOnly),
            2 => Ok(CategoryPurpose::IncomeOnly),
            3 => Ok(CategoryPurpose::Both),
            other => Err(format!("unknown category purpose {}", other)),
        }
    }
}

impl From<CategoryPurpose> for u8 {
    fn from(p: CategoryPurpose) -> u8 {
        match p {
            CategoryPurpose::ExpenseOnly => 1,
            CategoryPurpose::IncomeOnly => 2,
            CategoryPurpose::Both => 3,
        }
    }
}

impl fmt::Display for CategoryPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoryPurpose::ExpenseOnly => "Expense",
            CategoryPurpose::IncomeOnly => "Income",
            CategoryPurpose::Both => "Both",
        };
        f.write_str(label)
    }
}

impl FromStr for CategoryPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "expense-only" | "1" => Ok(CategoryPurpose::ExpenseOnly),
            "income" | "income-only" | "2" => Ok(CategoryPurpose::IncomeOnly),
            "both" | "3" => Ok(CategoryPurpose::Both),
            _ => Err(format!(
                "Invalid purpose '{}', expected expense|income|both",
                s
            )),
        }
    }
}

/// Wire values: 1 = expense, 2 = income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TryFrom<u8> for TransactionType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            1 => Ok(TransactionType::Expense),
            2 => Ok(TransactionType::Income),
            other => Err(format!("unknown transaction type {}", other)),
        }
    }
}

impl From<TransactionType> for u8 {
    fn from(t: TransactionType) -> u8 {
        match t {
            TransactionType::Expense => 1,
            TransactionType::Income => 2,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TransactionType::Expense => "Expense",
            TransactionType::Income => "Income",
        })
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" | "1" => Ok(TransactionType::Expense),
            "income" | "2" => Ok(TransactionType::Income),
            _ => Err(format!("Invalid type '{}', expected expense|income", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePersonDto {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCategoryDto {
    pub description: String,
    pub purpose: CategoryPurpose,
}

/// Unsaved transaction payload, sent as `CreateTransactionDto`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDraft {
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
    pub r#type: TransactionType,
    pub category_id: String,
    pub person_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonTotals {
    pub person_id: String,
    pub person_name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotals {
    pub category_id: String,
    pub category_description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsSummary {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_expense: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_balance: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonTotalsReport {
    pub people: Vec<PersonTotals>,
    pub summary: TotalsSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotalsReport {
    pub categories: Vec<CategoryTotals>,
    pub summary: TotalsSummary,
}
