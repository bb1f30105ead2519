// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use ticket_desk_audit::UpdateLogEntry;
use ticket_desk_domain::{Attachment, NewTicket, StatusUpdate, Ticket, TicketId};
use tracing::{debug, warn};
use url::Url;

use crate::TicketBackend;
use crate::config::BackendConfig;
use crate::error::BackendError;
use crate::records::{TicketRecord, UpdateRecord, UpdateStatusBody, WriteAck};

const GET_TICKET: &str = "get_ticket.php";
const GET_UPDATES: &str = "get_updates.php";
const UPDATE_TICKET: &str = "update_ticket.php";
const FORWARD_WITH_SUBTICKET: &str = "update_status_with_subticket.php";
const RAISE_TICKET: &str = "raise_ticket.php";

/// [`TicketBackend`] speaking to the PHP support endpoints.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpBackend {
    /// Builds a client for the configured backend.
    ///
    /// A missing trailing slash on the base URL is added so endpoint names
    /// resolve beneath it.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be built.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let mut base: String = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url: Url = Url::parse(&base)?;

        let client: reqwest::Client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The base URL endpoints are resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, name: &str) -> Result<Url, BackendError> {
        Ok(self.base_url.join(name)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, BackendError> {
        debug!(url = %url, "GET");
        let response: reqwest::Response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn send_write(&self, request: reqwest::RequestBuilder) -> Result<WriteAck, BackendError> {
        let response: reqwest::Response = request.send().await?;
        let ack: WriteAck = read_json(response).await?;
        ack.into_result()
    }
}

/// Reads a response body, mapping non-2xx statuses to `BackendError::Status`.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
    let status: reqwest::StatusCode = response.status();
    let body: String = response.text().await?;
    debug!(status = status.as_u16(), bytes = body.len(), "Response received");

    if !status.is_success() {
        return Err(BackendError::Status {
            status: status.as_u16(),
            message: message_from(&body),
        });
    }

    serde_json::from_str(&body).map_err(|err| BackendError::Decode(err.to_string()))
}

fn message_from(body: &str) -> Option<String> {
    serde_json::from_str::<WriteAck>(body)
        .ok()
        .and_then(|ack| ack.message)
}

fn image_part(attachment: &Attachment) -> Result<Part, BackendError> {
    Ok(Part::bytes(attachment.bytes.clone())
        .file_name(attachment.file_name.clone())
        .mime_str(&attachment.content_type)?)
}

#[async_trait]
impl TicketBackend for HttpBackend {
    async fn list_tickets(&self) -> Result<Vec<Ticket>, BackendError> {
        let url: Url = self.endpoint(GET_TICKET)?;
        let records: Vec<TicketRecord> = self.get_json(url).await?;
        Ok(records
            .into_iter()
            .filter_map(|record| {
                let id: String = record.id.clone();
                record
                    .into_ticket()
                    .inspect_err(|err| warn!(ticket_id = %id, error = %err, "Skipping unreadable ticket"))
                    .ok()
            })
            .collect())
    }

    async fn fetch_ticket(&self, id: &TicketId) -> Result<Ticket, BackendError> {
        let mut url: Url = self.endpoint(GET_TICKET)?;
        url.query_pairs_mut().append_pair("id", id.as_str());
        let record: TicketRecord = self.get_json(url).await?;
        record.into_ticket()
    }

    async fn fetch_updates(&self, id: &TicketId) -> Result<Vec<UpdateLogEntry>, BackendError> {
        let mut url: Url = self.endpoint(GET_UPDATES)?;
        url.query_pairs_mut().append_pair("ticketId", id.as_str());
        let records: Vec<UpdateRecord> = self.get_json(url).await?;
        records
            .into_iter()
            .map(|record| record.into_entry(id))
            .collect()
    }

    async fn update_status(&self, update: &StatusUpdate) -> Result<WriteAck, BackendError> {
        let url: Url = self.endpoint(UPDATE_TICKET)?;
        debug!(url = %url, ticket_id = %update.ticket_id, status = %update.status, "POST status update");
        let body: UpdateStatusBody<'_> = UpdateStatusBody::from(update);
        self.send_write(self.client.post(url).json(&body)).await
    }

    async fn forward_to_l2(
        &self,
        update: &StatusUpdate,
        attachment: Option<&Attachment>,
    ) -> Result<WriteAck, BackendError> {
        let url: Url = self.endpoint(FORWARD_WITH_SUBTICKET)?;
        debug!(
            url = %url,
            ticket_id = %update.ticket_id,
            with_image = attachment.is_some(),
            "POST forward to L2"
        );

        let mut form: Form = Form::new()
            .text("id", update.ticket_id.as_str().to_string())
            .text("Status", update.status.as_str().to_string())
            .text("Update_remark", update.remark.clone())
            .text("UpdateBy", update.update_by.as_str().to_string());
        if let Some(attachment) = attachment {
            form = form.part("image", image_part(attachment)?);
        }

        self.send_write(self.client.post(url).multipart(form)).await
    }

    async fn raise_ticket(&self, ticket: &NewTicket) -> Result<WriteAck, BackendError> {
        let url: Url = self.endpoint(RAISE_TICKET)?;
        debug!(url = %url, emp_id = %ticket.emp_id, category = %ticket.category, "POST raise ticket");

        let mut form: Form = Form::new()
            .text("EmpId", ticket.emp_id.as_str().to_string())
            .text("Category", ticket.category.as_str().to_string())
            .text("Remark", ticket.remark.clone());
        if let Some(image) = &ticket.image {
            form = form.part("Image", image_part(image)?);
        }
        form = form.text("Status", ticket.initial_status().as_str().to_string());

        self.send_write(self.client.post(url).multipart(form)).await
    }
}
