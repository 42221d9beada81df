// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use std::cell::RefCell;

use chrono::{DateTime, TimeZone, Utc};
use household::api::HouseholdApi;
use household::errors::ApiError;
use household::models::{
    Category, CategoryPurpose, CategoryTotalsReport, CreateCategoryDto, CreatePersonDto, Person,
    PersonTotalsReport, Transaction, TransactionType,
};
use household::totals::{aggregate_by_category_with_roster, aggregate_by_person_with_roster};
use household::validation::ValidDraft;
use rust_decimal::Decimal;

pub fn ts() -> DateTime<Utc> {
    Utc.timestamp_opt(1_735_689_600, 0).unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn person(id: &str, name: &str, age: u32) -> Person {
    Person {
        id: id.into(),
        name: name.into(),
        age,
        created_at: ts(),
        updated_at: None,
    }
}

pub fn category(id: &str, description: &str, purpose: CategoryPurpose) -> Category {
    Category {
        id: id.into(),
        description: description.into(),
        purpose,
        created_at: ts(),
        updated_at: None,
    }
}

pub fn tx(id: &str, p: &Person, c: &Category, kind: TransactionType, value: &str) -> Transaction {
    Transaction {
        id: id.into(),
        description: format!("tx {}", id),
        value: dec(value),
        r#type: kind,
        category: c.clone(),
        person: p.clone(),
        created_at: ts(),
        updated_at: None,
    }
}

/// In-memory backend. Reports list every registered entity, like the real one.
#[derive(Default)]
pub struct FakeApi {
    pub people: RefCell<Vec<Person>>,
    pub categories: RefCell<Vec<Category>>,
    pub transactions: RefCell<Vec<Transaction>>,
    pub calls: RefCell<Vec<String>>,
    pub reject_with: Option<(u16, String)>,
}

impl FakeApi {
    /// Ana (34), Leo (12); Salary (income), Groceries (expense), Gifts (both).
    pub fn household() -> Self {
        let api = FakeApi::default();
        api.people
            .borrow_mut()
            .extend([person("p1", "Ana", 34), person("p2", "Leo", 12)]);
        api.categories.borrow_mut().extend([
            category("c1", "Salary", CategoryPurpose::IncomeOnly),
            category("c2", "Groceries", CategoryPurpose::ExpenseOnly),
            category("c3", "Gifts", CategoryPurpose::Both),
        ]);
        api
    }

    pub fn with_transactions(self) -> Self {
        {
            let people = self.people.borrow();
            let cats = self.categories.borrow();
            self.transactions.borrow_mut().extend([
                tx("t1", &people[0], &cats[0], TransactionType::Income, "1000.00"),
                tx("t2", &people[0], &cats[1], TransactionType::Expense, "250.10"),
                tx("t3", &people[1], &cats[2], TransactionType::Expense, "19.90"),
            ]);
        }
        self
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.borrow().iter().any(|c| c == name)
    }

    fn log(&self, name: &str) {
        self.calls.borrow_mut().push(name.to_string());
    }

    fn not_found(what: &str) -> ApiError {
        ApiError::Remote {
            status: 404,
            message: format!("{} not found", what),
        }
    }
}

impl HouseholdApi for FakeApi {
    fn list_people(&self) -> Result<Vec<Person>, ApiError> {
        self.log("list_people");
        Ok(self.people.borrow().clone())
    }

    fn get_person(&self, id: &str) -> Result<Person, ApiError> {
        self.log("get_person");
        self.people
            .borrow()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("person"))
    }

    fn create_person(&self, dto: &CreatePersonDto) -> Result<Person, ApiError> {
        self.log("create_person");
        let mut people = self.people.borrow_mut();
        let p = person(&format!("p{}", people.len() + 1), &dto.name, dto.age);
        people.push(p.clone());
        Ok(p)
    }

    fn delete_person(&self, id: &str) -> Result<(), ApiError> {
        self.log("delete_person");
        self.people.borrow_mut().retain(|p| p.id != id);
        self.transactions.borrow_mut().retain(|t| t.person.id != id);
        Ok(())
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.log("list_categories");
        Ok(self.categories.borrow().clone())
    }

    fn get_category(&self, id: &str) -> Result<Category, ApiError> {
        self.log("get_category");
        self.categories
            .borrow()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("category"))
    }

    fn create_category(&self, dto: &CreateCategoryDto) -> Result<Category, ApiError> {
        self.log("create_category");
        let mut cats = self.categories.borrow_mut();
        let c = category(&format!("c{}", cats.len() + 1), &dto.description, dto.purpose);
        cats.push(c.clone());
        Ok(c)
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.log("list_transactions");
        Ok(self.transactions.borrow().clone())
    }

    fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        self.log("get_transaction");
        self.transactions
            .borrow()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found("transaction"))
    }

    fn create_transaction(&self, draft: &ValidDraft) -> Result<Transaction, ApiError> {
        self.log("create_transaction");
        if let Some((status, message)) = &self.reject_with {
            return Err(ApiError::Remote {
                status: *status,
                message: message.clone(),
            });
        }
        let d = draft.draft();
        let p = self.get_person(&d.person_id)?;
        let c = self.get_category(&d.category_id)?;
        let mut txs = self.transactions.borrow_mut();
        let mut t = tx(&format!("t{}", txs.len() + 1), &p, &c, d.r#type, "0");
        t.value = d.value;
        t.description = d.description.clone();
        txs.push(t.clone());
        Ok(t)
    }

    fn person_totals_report(&self) -> Result<PersonTotalsReport, ApiError> {
        self.log("person_totals_report");
        Ok(aggregate_by_person_with_roster(
            &self.people.borrow(),
            &self.transactions.borrow(),
        ))
    }

    fn category_totals_report(&self) -> Result<CategoryTotalsReport, ApiError> {
        self.log("category_totals_report");
        Ok(aggregate_by_category_with_roster(
            &self.categories.borrow(),
            &self.transactions.borrow(),
        ))
    }
}
