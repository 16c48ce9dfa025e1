//! Remote catalogue backed by `<base_url>/catalogue-items`

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::application::errors::CatalogueError;
use crate::domain::entities::CatalogueItem;
use crate::domain::traits::{
    AddCatalogueItemInput, AddCatalogueItemOutput, CatalogueService, ListCatalogueItemsOutput,
};
use crate::infrastructure::catalogue::dto::{
    AddCatalogueItemRequestDto, CatalogueItemDto, ListEnvelopeDto,
};
use crate::infrastructure::catalogue::transport::{
    HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};

const CATALOGUE_ITEMS_PATH: &str = "/catalogue-items";

/// Longest slice of a non-JSON error body kept in the message
const ERROR_BODY_PREVIEW_CHARS: usize = 300;

#[derive(Default, Clone)]
pub struct HttpCatalogueServiceOptions {
    pub base_url: Option<String>,
    pub transport: Option<Arc<dyn HttpTransport>>,
    /// Sent with every request, under the per-request headers
    pub headers: BTreeMap<String, String>,
    /// Only used when no transport is supplied
    pub timeout: Option<Duration>,
}

impl HttpCatalogueServiceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// HTTP catalogue service
pub struct HttpCatalogueService {
    base_url: Option<String>,
    transport: Arc<dyn HttpTransport>,
    headers: BTreeMap<String, String>,
}

impl HttpCatalogueService {
    /// Fails if no transport was supplied and the default one cannot be built
    pub fn new(options: HttpCatalogueServiceOptions) -> Result<Self, CatalogueError> {
        let transport = match options.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(options.timeout)?),
        };
        let base_url = options
            .base_url
            .filter(|url| !url.is_empty())
            .map(|mut url| {
                if url.ends_with('/') {
                    url.pop();
                }
                url
            });

        Ok(Self {
            base_url,
            transport,
            headers: options.headers,
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    fn url(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{}{}", base, path),
            None => path.to_string(),
        }
    }

    /// Fixed headers first, then `extra`; later names replace earlier ones
    /// regardless of case
    fn merge_headers(&self, extra: &[(&str, &str)]) -> BTreeMap<String, String> {
        let mut merged = self.headers.clone();
        for (name, value) in extra {
            merged.retain(|existing, _| !existing.eq_ignore_ascii_case(name));
            merged.insert(name.to_string(), value.to_string());
        }
        merged
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, CatalogueError> {
        tracing::debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;
        tracing::debug!("Catalogue API responded {}", response.status);
        ensure_ok(&response)?;
        Ok(response)
    }
}

#[async_trait]
impl CatalogueService for HttpCatalogueService {
    async fn list_catalogue_items(&self) -> Result<ListCatalogueItemsOutput, CatalogueError> {
        let response = self
            .send(HttpRequest {
                method: HttpMethod::Get,
                url: self.url(CATALOGUE_ITEMS_PATH),
                headers: self.merge_headers(&[("Accept", "application/json")]),
                body: None,
            })
            .await?;

        const WHAT: &str = "list catalogue items";
        let body = parse_body(&response)?;
        check_errors(&body)?;

        let (items, total_count) = match body {
            Value::Array(_) => (decode::<Vec<CatalogueItemDto>>(body, WHAT)?, None),
            Value::Object(_) => {
                let envelope: ListEnvelopeDto = decode(body, WHAT)?;
                (envelope.catalogue_items.unwrap_or_default(), envelope.total_count)
            }
            _ => return Err(CatalogueError::MalformedResponse(WHAT)),
        };

        let catalogue_items: Vec<CatalogueItem> = items.into_iter().map(CatalogueItem::from).collect();
        let total_count = total_count.unwrap_or(catalogue_items.len());
        Ok(ListCatalogueItemsOutput {
            catalogue_items,
            total_count,
        })
    }

    async fn add_catalogue_item(
        &self,
        input: AddCatalogueItemInput,
    ) -> Result<AddCatalogueItemOutput, CatalogueError> {
        let dto = AddCatalogueItemRequestDto::from(input);
        let body = serde_json::to_string(&dto)
            .map_err(|e| CatalogueError::Serialization(e.to_string()))?;

        let response = self
            .send(HttpRequest {
                method: HttpMethod::Post,
                url: self.url(CATALOGUE_ITEMS_PATH),
                headers: self.merge_headers(&[
                    ("Accept", "application/json"),
                    ("Content-Type", "application/json"),
                ]),
                body: Some(body),
            })
            .await?;

        const WHAT: &str = "add catalogue item";
        let mut body = parse_body(&response)?;
        check_errors(&body)?;

        let item_dto: CatalogueItemDto = match body.get_mut("catalogueItem").map(Value::take) {
            Some(value @ Value::Object(_)) => decode(value, WHAT)?,
            _ => return Err(CatalogueError::MalformedResponse(WHAT)),
        };

        Ok(AddCatalogueItemOutput {
            catalogue_item: item_dto.into(),
        })
    }
}

/// Turn a non-2xx response into a status error, with whatever detail the
/// body offers
fn ensure_ok(response: &HttpResponse) -> Result<(), CatalogueError> {
    if response.is_success() {
        return Ok(());
    }
    Err(CatalogueError::Status {
        status: response.status,
        status_text: response.status_text.clone(),
        detail: error_detail(response),
    })
}

fn error_detail(response: &HttpResponse) -> Option<String> {
    let is_json = response
        .header("content-type")
        .map_or(false, |ct| ct.contains("application/json"));

    if is_json {
        let body: Value = serde_json::from_str(&response.body).ok()?;
        ["message", "error"]
            .iter()
            .filter_map(|key| body.get(*key))
            .find_map(|value| match value {
                Value::String(s) if !s.is_empty() => Some(s.clone()),
                _ => None,
            })
    } else if response.body.is_empty() {
        None
    } else {
        Some(response.body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect())
    }
}

/// Empty body reads as `{}`; anything else must be JSON
fn parse_body(response: &HttpResponse) -> Result<Value, CatalogueError> {
    if response.body.is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_str(&response.body).map_err(|_| CatalogueError::InvalidJson)
}

/// Server-reported errors win over whatever else the body holds
fn check_errors(body: &Value) -> Result<(), CatalogueError> {
    let Some(Value::Array(errors)) = body.get("errors") else {
        return Ok(());
    };
    if errors.is_empty() {
        return Ok(());
    }
    let messages = errors
        .iter()
        .map(|e| match e {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect();
    Err(CatalogueError::Rejected(messages))
}

fn decode<T: DeserializeOwned>(value: Value, what: &'static str) -> Result<T, CatalogueError> {
    serde_json::from_value(value).map_err(|e| {
        tracing::debug!("Unexpected {} body: {}", what, e);
        CatalogueError::MalformedResponse(what)
    })
}
