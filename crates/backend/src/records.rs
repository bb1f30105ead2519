// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Wire records exchanged with the support backend.
//!
//! Field names follow the backend's own spelling (`EmpId`,
//! `Update_remark`, ...). Nothing outside this module sees them.

use serde::{Deserialize, Deserializer, Serialize};
use ticket_desk_audit::UpdateLogEntry;
use ticket_desk_domain::{
    Category, DomainError, EmpId, StatusUpdate, Ticket, TicketId, TicketStatus, parse_timestamp,
};

use tracing::warn;

use crate::error::BackendError;

/// Identifiers arrive as JSON numbers or strings depending on the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl RawId {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawId::deserialize(deserializer).map(RawId::into_string)
}

fn optional_id_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(RawId::into_string))
}

/// Treats missing, null and blank strings alike.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

fn decode_error(err: &DomainError) -> BackendError {
    BackendError::Decode(err.to_string())
}

/// A ticket as returned by `get_ticket.php`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TicketRecord {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "EmpId", deserialize_with = "id_string")]
    pub emp_id: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Remark", default)]
    pub remark: Option<String>,
    #[serde(rename = "Update_remark", default)]
    pub update_remark: Option<String>,
    #[serde(rename = "DateTime")]
    pub date_time: String,
    #[serde(rename = "UpdateDateTime", default)]
    pub update_date_time: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
}

impl TicketRecord {
    /// Converts the wire record into a domain ticket.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Decode` if the creation timestamp cannot be
    /// parsed. An unreadable `UpdateDateTime` (such as a zero date) is
    /// dropped instead.
    pub fn into_ticket(self) -> Result<Ticket, BackendError> {
        let date_time = parse_timestamp(&self.date_time).map_err(|err| decode_error(&err))?;
        let update_date_time = non_blank(self.update_date_time).and_then(|value| {
            parse_timestamp(&value)
                .inspect_err(|err| {
                    warn!(ticket_id = %self.id, error = %err, "Ignoring unreadable update time");
                })
                .ok()
        });

        Ok(Ticket {
            id: TicketId::new(self.id),
            emp_id: EmpId::new(self.emp_id),
            category: Category::from_label(&self.category),
            status: TicketStatus::from_label(&self.status),
            remark: self.remark.unwrap_or_default(),
            update_remark: non_blank(self.update_remark),
            date_time,
            update_date_time,
            image: non_blank(self.image),
        })
    }
}

/// An update log entry as returned by `get_updates.php`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateRecord {
    #[serde(rename = "Id", default, deserialize_with = "optional_id_string")]
    pub id: Option<String>,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Remark", default)]
    pub remark: Option<String>,
    #[serde(rename = "DateTime")]
    pub date_time: String,
    #[serde(rename = "UpdateBy", default, deserialize_with = "optional_id_string")]
    pub update_by: Option<String>,
    #[serde(rename = "Effort", default)]
    pub effort: Option<String>,
    #[serde(rename = "Image", default)]
    pub image: Option<String>,
}

impl UpdateRecord {
    /// Converts the wire record into a log entry of `ticket_id`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Decode` if the timestamp cannot be parsed.
    pub fn into_entry(self, ticket_id: &TicketId) -> Result<UpdateLogEntry, BackendError> {
        let date_time = parse_timestamp(&self.date_time).map_err(|err| decode_error(&err))?;

        Ok(UpdateLogEntry {
            entry_id: self.id,
            ticket_id: ticket_id.clone(),
            status: TicketStatus::from_label(&self.status),
            remark: self.remark.unwrap_or_default(),
            date_time,
            update_by: EmpId::new(self.update_by.unwrap_or_default()),
            effort: non_blank(self.effort),
            image: non_blank(self.image),
        })
    }
}

/// JSON body of `update_ticket.php`.
#[derive(Debug, Serialize)]
pub(crate) struct UpdateStatusBody<'a> {
    pub id: &'a str,
    #[serde(rename = "Status")]
    pub status: &'a str,
    #[serde(rename = "Update_remark")]
    pub update_remark: &'a str,
    #[serde(rename = "UpdateBy")]
    pub update_by: &'a str,
}

impl<'a> From<&'a StatusUpdate> for UpdateStatusBody<'a> {
    fn from(update: &'a StatusUpdate) -> Self {
        Self {
            id: update.ticket_id.as_str(),
            status: update.status.as_str(),
            update_remark: &update.remark,
            update_by: update.update_by.as_str(),
        }
    }
}

/// What the backend answers to a write.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WriteAck {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

impl WriteAck {
    /// An acknowledgement carrying only a message.
    #[must_use]
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: Some(true),
            message: Some(message.into()),
        }
    }

    /// Turns `"success": false` into an error.
    ///
    /// A missing `success` field counts as success.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Rejected` when the backend reported failure.
    pub fn into_result(self) -> Result<Self, BackendError> {
        if self.success == Some(false) {
            return Err(BackendError::Rejected {
                message: self.message,
            });
        }
        Ok(self)
    }
}
