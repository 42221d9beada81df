// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The REST backend: a trait naming every call, and its blocking HTTP client.

use anyhow::Result;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::errors::ApiError;
use crate::models::{
    Category, CategoryTotalsReport, CreateCategoryDto, CreatePersonDto, Person,
    PersonTotalsReport, Transaction,
};
use crate::utils::http_client;
use crate::validation::ValidDraft;

/// Everything the client asks of the backend.
///
/// The backend owns persistence and is the final authority on every rule;
/// deleting a person also deletes that person's transactions.
pub trait HouseholdApi {
    fn list_people(&self) -> Result<Vec<Person>, ApiError>;
    fn get_person(&self, id: &str) -> Result<Person, ApiError>;
    fn create_person(&self, dto: &CreatePersonDto) -> Result<Person, ApiError>;
    fn delete_person(&self, id: &str) -> Result<(), ApiError>;

    fn list_categories(&self) -> Result<Vec<Category>, ApiError>;
    fn get_category(&self, id: &str) -> Result<Category, ApiError>;
    fn create_category(&self, dto: &CreateCategoryDto) -> Result<Category, ApiError>;

    fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError>;
    fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError>;
    fn create_transaction(&self, draft: &ValidDraft) -> Result<Transaction, ApiError>;

    fn person_totals_report(&self) -> Result<PersonTotalsReport, ApiError>;
    fn category_totals_report(&self) -> Result<CategoryTotalsReport, ApiError>;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self {
            client: http_client(cfg)?,
            base: cfg.base_url().to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        tracing::debug!(path, "GET");
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .map_err(ApiError::Transport)?;
        decode(check(resp)?, path)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        tracing::debug!(path, "POST");
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .map_err(ApiError::Transport)?;
        decode(check(resp)?, path)
    }

    fn delete(&self, path: &str) -> Result<(), ApiError> {
        tracing::debug!(path, "DELETE");
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .map_err(ApiError::Transport)?;
        check(resp)?;
        Ok(())
    }
}

/// Turns non-2xx responses into errors, keeping the backend's own message when it sends one.
fn check(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let body = resp.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            format!(
                "Request failed: {}",
                status.canonical_reason().unwrap_or("unknown status")
            )
        });
    tracing::debug!(status = status.as_u16(), %message, "remote error");
    Err(ApiError::Remote {
        status: status.as_u16(),
        message,
    })
}

fn decode<T: DeserializeOwned>(resp: Response, path: &str) -> Result<T, ApiError> {
    resp.json::<T>().map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}

impl HouseholdApi for HttpApi {
    fn list_people(&self) -> Result<Vec<Person>, ApiError> {
        self.get("/people")
    }

    fn get_person(&self, id: &str) -> Result<Person, ApiError> {
        self.get(&format!("/people/{}", id))
    }

    fn create_person(&self, dto: &CreatePersonDto) -> Result<Person, ApiError> {
        self.post("/people", dto)
    }

    fn delete_person(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/people/{}", id))
    }

    fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories")
    }

    fn get_category(&self, id: &str) -> Result<Category, ApiError> {
        self.get(&format!("/categories/{}", id))
    }

    fn create_category(&self, dto: &CreateCategoryDto) -> Result<Category, ApiError> {
        self.post("/categories", dto)
    }

    fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get("/transactions")
    }

    fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        self.get(&format!("/transactions/{}", id))
    }

    fn create_transaction(&self, draft: &ValidDraft) -> Result<Transaction, ApiError> {
        self.post("/transactions", draft.draft())
    }

    fn person_totals_report(&self) -> Result<PersonTotalsReport, ApiError> {
        self.get("/reports/person-totals")
    }

    fn category_totals_report(&self) -> Result<CategoryTotalsReport, ApiError> {
        self.get("/reports/category-totals")
    }
}
