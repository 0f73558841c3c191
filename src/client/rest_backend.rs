//! REST implementation of the record store seam.

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::domain::common::Identifiable;
use crate::domain::{Record, RecordKind, RecordList};
use crate::errors::AdminError;

use super::{RecordStore, Result};

/// Blocking HTTP client speaking the backend's record API.
///
/// One resource path family per record kind under a fixed base address.
/// Errors are forwarded as-is: non-2xx statuses become
/// [`AdminError::Api`], transport failures [`AdminError::Transport`].
pub struct RestClient {
    http: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self, kind: RecordKind) -> String {
        format!("{}/{}", self.base_url, kind.resource())
    }

    fn record_url(&self, kind: RecordKind, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, kind.resource(), id)
    }

    fn list_records<R: DeserializeOwned>(&self, kind: RecordKind) -> Result<Vec<R>> {
        let url = self.collection_url(kind);
        debug!(%url, "listing {}", kind);
        let response = self.http.get(&url).send()?;
        Ok(check_status(response)?.json()?)
    }

    fn fetch_record<R: DeserializeOwned>(&self, kind: RecordKind, id: &str) -> Result<R> {
        let url = self.record_url(kind, id);
        debug!(%url, "fetching one of {}", kind);
        let response = self.http.get(&url).send()?;
        Ok(check_status(response)?.json()?)
    }

    fn post_record<R: Serialize + DeserializeOwned>(&self, kind: RecordKind, body: &R) -> Result<R> {
        let url = self.collection_url(kind);
        debug!(%url, "creating one of {}", kind);
        let response = self.http.post(&url).json(body).send()?;
        Ok(check_status(response)?.json()?)
    }

    fn put_record<R: Serialize + DeserializeOwned>(
        &self,
        kind: RecordKind,
        id: &str,
        body: &R,
    ) -> Result<R> {
        let url = self.record_url(kind, id);
        debug!(%url, "updating one of {}", kind);
        let response = self.http.put(&url).json(body).send()?;
        Ok(check_status(response)?.json()?)
    }
}

impl RecordStore for RestClient {
    fn list(&self, kind: RecordKind) -> Result<RecordList> {
        Ok(match kind {
            RecordKind::Category => RecordList::Categories(self.list_records(kind)?),
            RecordKind::Transaction => RecordList::Transactions(self.list_records(kind)?),
            RecordKind::HsrStation => RecordList::HsrStations(self.list_records(kind)?),
        })
    }

    fn fetch(&self, kind: RecordKind, id: &str) -> Result<Record> {
        require_id(id, "fetch")?;
        Ok(match kind {
            RecordKind::Category => Record::Category(self.fetch_record(kind, id)?),
            RecordKind::Transaction => Record::Transaction(self.fetch_record(kind, id)?),
            RecordKind::HsrStation => Record::HsrStation(self.fetch_record(kind, id)?),
        })
    }

    fn create(&self, record: &Record) -> Result<Record> {
        if record.is_persisted() {
            return Err(AdminError::InvalidInput(
                "create requires a record without an identifier".into(),
            ));
        }
        Ok(match record {
            Record::Category(category) => {
                Record::Category(self.post_record(record.kind(), category)?)
            }
            Record::Transaction(transaction) => {
                Record::Transaction(self.post_record(record.kind(), transaction)?)
            }
            Record::HsrStation(station) => {
                Record::HsrStation(self.post_record(record.kind(), station)?)
            }
        })
    }

    fn update(&self, id: &str, record: &Record) -> Result<Record> {
        require_id(id, "update")?;
        Ok(match record {
            Record::Category(category) => {
                Record::Category(self.put_record(record.kind(), id, category)?)
            }
            Record::Transaction(transaction) => {
                Record::Transaction(self.put_record(record.kind(), id, transaction)?)
            }
            Record::HsrStation(station) => {
                Record::HsrStation(self.put_record(record.kind(), id, station)?)
            }
        })
    }

    fn delete(&self, kind: RecordKind, id: &str) -> Result<()> {
        require_id(id, "delete")?;
        let url = self.record_url(kind, id);
        debug!(%url, "deleting one of {}", kind);
        let response = self.http.delete(&url).send()?;
        check_status(response)?;
        Ok(())
    }
}

fn require_id(id: &str, operation: &str) -> Result<()> {
    if id.trim().is_empty() {
        return Err(AdminError::MissingId(format!(
            "{operation} requires a record identifier"
        )));
    }
    Ok(())
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        warn!(status = status.as_u16(), url = %response.url(), "API request failed");
        Err(AdminError::Api {
            status: status.as_u16(),
        })
    }
}
