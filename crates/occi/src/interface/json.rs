use alloc::format;

use crate::error::{Error, Result};
use crate::response::{Format, Response, Status};

use super::DiscoveryDocument;

pub(super) fn render(format: Format, document: &DiscoveryDocument) -> Result<Response> {
    let body = serde_json::to_vec(document)
        .map_err(|e| Error::response(format!("Unable to serialize the discovery document: {e}")))?;

    Ok(Response::new(Status::OK)
        .content_type(format.content_type())
        .body(body))
}
