//! Clients for the remote wallet store.
//!
//! The store is a managed, per-user document collection reached over REST.
//! It is the source of truth: the engine consumes whole-list snapshots and
//! issues create/update/delete requests keyed by record id. Conflicting
//! writes from other sessions are resolved by the store's own
//! last-write-wins semantics; nothing here merges.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::Error;
use crate::transaction::{Transaction, TransactionId};

/// The username-to-email mapping kept alongside the transaction collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UsernameRecord {
    /// The user id the username belongs to.
    pub uid: String,
    /// The email address to log in with.
    pub email: String,
}

/// The remote document store holding the household's transactions.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch the full transaction list. Order is unspecified.
    async fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Create a record. The store assigns the id and the creation timestamp.
    async fn create(&self, record: &Transaction) -> Result<TransactionId, Error>;

    /// Overwrite the record with the given id.
    async fn update(&self, id: &str, record: &Transaction) -> Result<(), Error>;

    /// Delete the record with the given id.
    async fn delete(&self, id: &str) -> Result<(), Error>;

    /// Resolve a registered username to its login record, if any.
    async fn lookup_username(&self, username: &str) -> Result<Option<UsernameRecord>, Error>;
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: TransactionId,
}

/// REST client for the managed document store.
///
/// Documents live under `{base_url}/users/{user_id}/transactions`, one JSON
/// document per record, with the record id as the document key. Username
/// records live under `{base_url}/usernames/{name}`.
#[derive(Debug, Clone)]
pub struct RestStore {
    client: reqwest::Client,
    base_url: String,
    user_id: String,
}

impl RestStore {
    /// Create a client for one user's collection.
    pub fn new(base_url: &str, user_id: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            user_id: user_id.to_owned(),
        }
    }

    /// Replace the HTTP client, e.g. to set timeouts.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    fn collection_url(&self) -> String {
        format!("{}/users/{}/transactions", self.base_url, self.user_id)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn username_url(&self, username: &str) -> String {
        format!("{}/usernames/{}", self.base_url, username)
    }
}

#[async_trait]
impl DocumentStore for RestStore {
    async fn list(&self) -> Result<Vec<Transaction>, Error> {
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(request_error)?;

        let response = response
            .error_for_status()
            .map_err(request_error)
            .inspect_err(|error| tracing::error!("could not list transactions: {error}"))?;

        response
            .json::<Vec<Transaction>>()
            .await
            .map_err(|error| Error::StoreDecode(error.to_string()))
            .inspect_err(|error| tracing::error!("{error}"))
    }

    async fn create(&self, record: &Transaction) -> Result<TransactionId, Error> {
        let response = self
            .client
            .post(self.collection_url())
            .json(record)
            .send()
            .await
            .map_err(request_error)?
            .error_for_status()
            .map_err(request_error)
            .inspect_err(|error| tracing::error!("could not create transaction: {error}"))?;

        let created: CreateResponse = response
            .json()
            .await
            .map_err(|error| Error::StoreDecode(error.to_string()))?;

        Ok(created.id)
    }

    async fn update(&self, id: &str, record: &Transaction) -> Result<(), Error> {
        let response = self
            .client
            .put(self.record_url(id))
            .json(record)
            .send()
            .await
            .map_err(request_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::UpdateMissingTransaction);
        }

        response
            .error_for_status()
            .map_err(request_error)
            .inspect_err(|error| tracing::error!("could not update transaction {id}: {error}"))?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(request_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::DeleteMissingTransaction);
        }

        response
            .error_for_status()
            .map_err(request_error)
            .inspect_err(|error| tracing::error!("could not delete transaction {id}: {error}"))?;

        Ok(())
    }

    async fn lookup_username(&self, username: &str) -> Result<Option<UsernameRecord>, Error> {
        let response = self
            .client
            .get(self.username_url(username))
            .send()
            .await
            .map_err(request_error)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let response = response.error_for_status().map_err(request_error)?;
        let record = response
            .json::<UsernameRecord>()
            .await
            .map_err(|error| Error::StoreDecode(error.to_string()))?;

        Ok(Some(record))
    }
}

fn request_error(error: reqwest::Error) -> Error {
    Error::StoreRequest(error.to_string())
}

/// An in-memory store for tests and offline development.
///
/// Mimics the remote store's observable behavior: ids and creation
/// timestamps are assigned on create, updates and deletes of unknown ids
/// fail the way the REST client reports them.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<TransactionId, Transaction>>,
    usernames: Mutex<HashMap<String, UsernameRecord>>,
    next_id: Mutex<u64>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a username record for lookups.
    pub fn register_username(&self, username: &str, uid: &str, email: &str) {
        self.usernames.lock().unwrap().insert(
            username.to_owned(),
            UsernameRecord {
                uid: uid.to_owned(),
                email: email.to_owned(),
            },
        );
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Transaction>, Error> {
        let records = self.records.lock().unwrap();
        let mut transactions: Vec<Transaction> = records.values().cloned().collect();
        transactions.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(transactions)
    }

    async fn create(&self, record: &Transaction) -> Result<TransactionId, Error> {
        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            format!("record-{next_id}")
        };

        let mut stored = record.clone();
        stored.id = id.clone();
        stored.created_at = Some(OffsetDateTime::now_utc());
        self.records.lock().unwrap().insert(id.clone(), stored);

        Ok(id)
    }

    async fn update(&self, id: &str, record: &Transaction) -> Result<(), Error> {
        let mut records = self.records.lock().unwrap();
        let existing = records
            .get(id)
            .ok_or(Error::UpdateMissingTransaction)?
            .clone();

        let mut stored = record.clone();
        stored.id = id.to_owned();
        stored.created_at = existing.created_at;
        records.insert(id.to_owned(), stored);

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), Error> {
        self.records
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or(Error::DeleteMissingTransaction)
    }

    async fn lookup_username(&self, username: &str) -> Result<Option<UsernameRecord>, Error> {
        Ok(self.usernames.lock().unwrap().get(username).cloned())
    }
}
