use std::sync::Arc;

use axum::extract::FromRef;
use axum::http::StatusCode;

use occi::config::RenderConfig;
use occi::entity::Model;
use occi::error::Error;
use occi::interface::render_interface;
use occi::render::{Payload, render_error, render_or_error, render_status};
use occi::response::Status;
use occi::schema::{Kind, Mixin};

use tracing::debug;

use crate::media::MediaType;
use crate::responses::codec::OcciResponse;
use crate::responses::error::ErrorResponse;

/// The server state.
///
/// Couples a shared [`Model`] with the [`RenderConfig`] applied to every
/// response.
#[derive(Debug)]
pub struct OcciState<M> {
    model: Arc<M>,
    config: RenderConfig,
}

impl<M> Clone for OcciState<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            config: self.config.clone(),
        }
    }
}

impl<M> FromRef<OcciState<M>> for RenderConfig {
    fn from_ref(state: &OcciState<M>) -> Self {
        state.config.clone()
    }
}

impl<M> OcciState<M>
where
    M: Model + Send + Sync,
{
    /// Creates an [`OcciState`] with the default [`RenderConfig`].
    #[must_use]
    #[inline]
    pub fn new(model: M) -> Self {
        Self::shared(Arc::new(model))
    }

    /// Creates an [`OcciState`] from a model shared with other components.
    #[must_use]
    #[inline]
    pub const fn shared(model: Arc<M>) -> Self {
        Self {
            model,
            config: RenderConfig::new(),
        }
    }

    /// Sets the [`RenderConfig`].
    #[must_use]
    #[inline]
    pub fn with_config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the model.
    #[must_use]
    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns the [`RenderConfig`].
    #[must_use]
    #[inline]
    pub const fn render_config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a [`Payload`].
    ///
    /// A payload which cannot be rendered is answered with an error
    /// envelope.
    #[must_use]
    pub fn respond(
        &self,
        media: MediaType,
        payload: &Payload<'_>,
        status: StatusCode,
    ) -> OcciResponse {
        debug!("Rendering a {media} response with status {status}");
        render_or_error(
            media.format(),
            &self.config,
            self.model.as_ref(),
            payload,
            Status::new(status.as_u16()),
        )
        .into()
    }

    /// Renders the discovery document of the given kinds and mixins.
    ///
    /// A filter keeps the categories whose term or identifier equals it.
    /// Mixin tags defined by `user` are grouped under their own scheme.
    #[must_use]
    pub fn interface(
        &self,
        media: MediaType,
        kinds: &[Kind],
        mixins: &[Mixin],
        filter: Option<&str>,
        user: &str,
    ) -> OcciResponse {
        render_interface(
            media.format(),
            &self.config,
            self.model.as_ref(),
            kinds,
            mixins,
            filter,
            user,
        )
        .unwrap_or_else(|e| render_error(media.format(), &self.config, &e))
        .into()
    }

    /// Renders a message envelope.
    #[must_use]
    pub fn message(&self, media: MediaType, status: StatusCode, text: &str) -> OcciResponse {
        render_status(
            media.format(),
            &self.config,
            Status::new(status.as_u16()),
            text,
        )
        .into()
    }

    /// Renders an [`Error`] as an [`ErrorResponse`].
    #[must_use]
    #[inline]
    pub fn error(&self, media: MediaType, error: &Error) -> ErrorResponse {
        ErrorResponse::from_error(media, &self.config, error)
    }
}
