//! Outbound contact messages through the EmailJS REST API.
//!
//! The browser build posts directly to EmailJS with `gloo-net`; the server
//! never sends mail, so its relay always reports [`EmailError::Unavailable`].

use std::sync::{Arc, Mutex, PoisonError};

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::{EmailJsConfig, EMAIL_THROTTLE_MS};

/// Template variables expected by the EmailJS template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("email relay is not configured: missing public key")]
    NotConfigured,
    #[error("too many messages, retry in {retry_after_ms} ms")]
    Throttled { retry_after_ms: u64 },
    #[error("could not encode message: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("email relay is only available in the browser")]
    Unavailable,
}

/// A hosted service that turns template params into an email.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), EmailError>;
}

/// Client-side rate limit: one send per window.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    window_ms: f64,
    last_ms: Option<f64>,
}

impl Throttle {
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            last_ms: None,
        }
    }

    pub fn try_acquire(&mut self, now_ms: f64) -> Result<(), EmailError> {
        if let Some(last) = self.last_ms {
            let elapsed = now_ms - last;
            if elapsed < self.window_ms {
                return Err(EmailError::Throttled {
                    retry_after_ms: (self.window_ms - elapsed).ceil() as u64,
                });
            }
        }
        self.last_ms = Some(now_ms);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: EmailJsConfig,
    throttle: Arc<Mutex<Throttle>>,
}

impl EmailJsRelay {
    pub fn new(config: EmailJsConfig) -> Self {
        Self {
            config,
            throttle: Arc::new(Mutex::new(Throttle::new(EMAIL_THROTTLE_MS))),
        }
    }

    #[cfg_attr(not(any(feature = "hydrate", test)), allow(dead_code))]
    fn request_body(&self, params: &TemplateParams) -> Result<String, EmailError> {
        serde_json::to_string(&SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: params,
        })
        .map_err(|e| EmailError::Encode(e.to_string()))
    }

    #[cfg_attr(not(any(feature = "hydrate", test)), allow(dead_code))]
    fn acquire(&self, now_ms: f64) -> Result<(), EmailError> {
        if !self.config.is_configured() {
            return Err(EmailError::NotConfigured);
        }
        self.throttle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .try_acquire(now_ms)
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, params: &TemplateParams) -> Result<(), EmailError> {
        #[cfg(feature = "hydrate")]
        {
            use crate::config::EMAILJS_SEND_URL;

            self.acquire(js_sys::Date::now())?;
            let body = self.request_body(params)?;
            let response = gloo_net::http::Request::post(EMAILJS_SEND_URL)
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| EmailError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| EmailError::Network(e.to_string()))?;
            if response.ok() {
                return Ok(());
            }
            let status =
                StatusCode::from_u16(response.status()).unwrap_or(StatusCode::BAD_GATEWAY);
            let body = response.text().await.unwrap_or_default();
            Err(EmailError::Rejected { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = params;
            Err(EmailError::Unavailable)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> TemplateParams {
        TemplateParams {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    fn configured() -> EmailJsConfig {
        EmailJsConfig {
            service_id: "service_a".to_string(),
            template_id: "template_b".to_string(),
            public_key: "pk".to_string(),
        }
    }

    #[test]
    fn test_request_body_shape() {
        let relay = EmailJsRelay::new(configured());
        let body: serde_json::Value =
            serde_json::from_str(&relay.request_body(&params()).unwrap()).unwrap();
        assert_eq!(body["service_id"], "service_a");
        assert_eq!(body["template_id"], "template_b");
        assert_eq!(body["user_id"], "pk");
        assert_eq!(body["template_params"]["from_name"], "Ada");
        assert_eq!(body["template_params"]["from_email"], "ada@example.com");
        assert_eq!(body["template_params"]["subject"], "Hello");
        assert_eq!(body["template_params"]["message"], "Nice site");
    }

    #[test]
    fn test_throttle_window() {
        let mut throttle = Throttle::new(10_000.0);
        assert!(throttle.try_acquire(1_000.0).is_ok());
        assert_eq!(
            throttle.try_acquire(4_000.0),
            Err(EmailError::Throttled { retry_after_ms: 7_000 })
        );
        assert!(throttle.try_acquire(11_000.0).is_ok());
        assert!(throttle.try_acquire(12_000.0).is_err());
    }

    #[test]
    fn test_unconfigured_relay_refuses() {
        let mut config = configured();
        config.public_key.clear();
        let relay = EmailJsRelay::new(config);
        assert_eq!(relay.acquire(0.0), Err(EmailError::NotConfigured));
    }

    #[test]
    fn test_relay_shares_throttle_between_clones() {
        let relay = EmailJsRelay::new(configured());
        let copy = relay.clone();
        assert!(relay.acquire(0.0).is_ok());
        assert!(matches!(copy.acquire(10.0), Err(EmailError::Throttled { .. })));
    }

    #[cfg(not(feature = "hydrate"))]
    #[test]
    fn test_server_relay_is_unavailable() {
        let relay = EmailJsRelay::new(configured());
        let res = futures::executor::block_on(relay.send(&params()));
        assert_eq!(res, Err(EmailError::Unavailable));
    }
}
