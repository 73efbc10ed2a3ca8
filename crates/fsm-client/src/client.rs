use crate::{ApiClientResult, ClientError};

use std::panic::Location;
use std::sync::Mutex;
use std::time::Duration;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde_json::Value;

/// HTTP client for the field-service-management REST API
pub struct Client {
    pub base_url: String,
    access_token: Mutex<Option<String>>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: Mutex::new(None),
            client: ReqwestClient::new(),
        }
    }

    /// Create a client with a per-request timeout
    pub fn with_request_timeout(base_url: &str, timeout: Duration) -> ApiClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: Mutex::new(None),
            client,
        })
    }

    /// Set the bearer token attached to subsequent requests.
    pub fn set_access_token(&self, token: Option<String>) {
        let mut guard = self
            .access_token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = token;
    }

    pub fn access_token(&self) -> Option<String> {
        self.access_token
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Build a request with the bearer token when one is set
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(token) = self.access_token() {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Build a request that never carries a bearer token (login)
    pub(crate) fn request_without_token(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Build a request with an explicit bearer token
    pub(crate) fn request_with_token(
        &self,
        method: Method,
        path: &str,
        token: &str,
    ) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url).bearer_auth(token)
    }

    /// Execute request and handle errors
    pub(crate) async fn execute(&self, req: reqwest::RequestBuilder) -> ApiClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();

        // Some endpoints (logout, check-out) reply with an empty body.
        let text = response.text().await?;
        let body: Value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text)?
        };

        if !status.is_success() {
            let (code, message) = extract_error_envelope(&body);
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Ticket Operations
    // =========================================================================

    /// List tickets, optionally filtered by status and zone
    pub async fn list_tickets(
        &self,
        status: Option<&str>,
        zone_id: Option<i64>,
    ) -> ApiClientResult<Value> {
        let mut path = String::from("/tickets");
        let mut params = Vec::new();

        if let Some(status) = status {
            params.push(format!("status={status}"));
        }
        if let Some(zone_id) = zone_id {
            params.push(format!("zoneId={zone_id}"));
        }
        if !params.is_empty() {
            path = format!("{path}?{}", params.join("&"));
        }

        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    /// Get a ticket by ID
    pub async fn get_ticket(&self, id: i64) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, &format!("/tickets/{id}"));
        self.execute(req).await
    }

    /// Create a new ticket
    pub async fn create_ticket(
        &self,
        title: &str,
        description: Option<&str>,
        customer_id: i64,
        zone_id: i64,
    ) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateRequest<'a> {
            title: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            customer_id: i64,
            zone_id: i64,
        }

        let body = CreateRequest {
            title,
            description,
            customer_id,
            zone_id,
        };
        let req = self.request(Method::POST, "/tickets").json(&body);
        self.execute(req).await
    }

    /// Update a ticket
    pub async fn update_ticket(
        &self,
        id: i64,
        title: Option<&str>,
        description: Option<&str>,
        status: Option<&str>,
        assignee_id: Option<i64>,
    ) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            status: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            assignee_id: Option<i64>,
        }

        let body = UpdateRequest {
            title,
            description,
            status,
            assignee_id,
        };
        let req = self
            .request(Method::PUT, &format!("/tickets/{id}"))
            .json(&body);
        self.execute(req).await
    }

    /// Delete a ticket
    pub async fn delete_ticket(&self, id: i64) -> ApiClientResult<Value> {
        let req = self.request(Method::DELETE, &format!("/tickets/{id}"));
        self.execute(req).await
    }

    // =========================================================================
    // Customer Operations
    // =========================================================================

    /// List all customers
    pub async fn list_customers(&self) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, "/customers");
        self.execute(req).await
    }

    /// Get a customer by ID
    pub async fn get_customer(&self, id: i64) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, &format!("/customers/{id}"));
        self.execute(req).await
    }

    /// Create a new customer
    pub async fn create_customer(
        &self,
        name: &str,
        email: Option<&str>,
        zone_id: i64,
    ) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateRequest<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
            zone_id: i64,
        }

        let body = CreateRequest {
            name,
            email,
            zone_id,
        };
        let req = self.request(Method::POST, "/customers").json(&body);
        self.execute(req).await
    }

    /// Update a customer
    pub async fn update_customer(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        is_active: Option<bool>,
    ) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_active: Option<bool>,
        }

        let body = UpdateRequest {
            name,
            email,
            is_active,
        };
        let req = self
            .request(Method::PUT, &format!("/customers/{id}"))
            .json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Service Zone Operations
    // =========================================================================

    /// List all service zones
    pub async fn list_zones(&self) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, "/service-zones");
        self.execute(req).await
    }

    /// Get a service zone by ID
    pub async fn get_zone(&self, id: i64) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, &format!("/service-zones/{id}"));
        self.execute(req).await
    }

    /// Create a new service zone
    pub async fn create_zone(&self, name: &str, region: Option<&str>) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        struct CreateRequest<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            region: Option<&'a str>,
        }

        let body = CreateRequest { name, region };
        let req = self.request(Method::POST, "/service-zones").json(&body);
        self.execute(req).await
    }

    /// Update a service zone
    pub async fn update_zone(
        &self,
        id: i64,
        name: Option<&str>,
        region: Option<&str>,
    ) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        struct UpdateRequest<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
            #[serde(skip_serializing_if = "Option::is_none")]
            region: Option<&'a str>,
        }

        let body = UpdateRequest { name, region };
        let req = self
            .request(Method::PUT, &format!("/service-zones/{id}"))
            .json(&body);
        self.execute(req).await
    }

    /// Create a zone user assigned to one or more zones
    pub async fn create_zone_user(
        &self,
        email: &str,
        name: &str,
        zone_ids: &[i64],
    ) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateRequest<'a> {
            email: &'a str,
            name: &'a str,
            zone_ids: &'a [i64],
        }

        let body = CreateRequest {
            email,
            name,
            zone_ids,
        };
        let req = self
            .request(Method::POST, "/zone-users/create-with-zones")
            .json(&body);
        self.execute(req).await
    }

    // =========================================================================
    // Attendance Operations
    // =========================================================================

    /// List attendance records, optionally for a single user
    pub async fn list_attendance(&self, user_id: Option<i64>) -> ApiClientResult<Value> {
        let path = match user_id {
            Some(id) => format!("/attendance/records?userId={id}"),
            None => String::from("/attendance/records"),
        };

        let req = self.request(Method::GET, &path);
        self.execute(req).await
    }

    /// Record a check-in at the given coordinates
    pub async fn attendance_check_in(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        struct CheckInRequest {
            latitude: f64,
            longitude: f64,
        }

        let body = CheckInRequest {
            latitude,
            longitude,
        };
        let req = self.request(Method::POST, "/attendance/check-in").json(&body);
        self.execute(req).await
    }

    /// Record a check-out
    pub async fn attendance_check_out(&self) -> ApiClientResult<Value> {
        let req = self.request(Method::POST, "/attendance/check-out");
        self.execute(req).await
    }

    // =========================================================================
    // Report Operations
    // =========================================================================

    /// List service-person reports
    pub async fn list_service_person_reports(&self) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, "/service-person-reports");
        self.execute(req).await
    }

    // =========================================================================
    // Bank Account Operations
    // =========================================================================

    /// List bank accounts pending approval
    pub async fn list_bank_accounts(&self) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, "/bank-accounts");
        self.execute(req).await
    }

    /// Get a bank account by ID
    pub async fn get_bank_account(&self, id: i64) -> ApiClientResult<Value> {
        let req = self.request(Method::GET, &format!("/bank-accounts/{id}"));
        self.execute(req).await
    }

    /// Approve a bank account
    pub async fn approve_bank_account(&self, id: i64) -> ApiClientResult<Value> {
        let req = self.request(Method::POST, &format!("/bank-accounts/{id}/approve"));
        self.execute(req).await
    }

    /// Reject a bank account with a reason
    pub async fn reject_bank_account(&self, id: i64, reason: &str) -> ApiClientResult<Value> {
        #[derive(Serialize)]
        struct RejectRequest<'a> {
            reason: &'a str,
        }

        let body = RejectRequest { reason };
        let req = self
            .request(Method::POST, &format!("/bank-accounts/{id}/reject"))
            .json(&body);
        self.execute(req).await
    }
}

/// Pull `code` and `message` out of the backend's error envelope.
fn extract_error_envelope(body: &Value) -> (String, String) {
    let error = body.get("error");

    let code = error
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .unwrap_or("UNKNOWN")
        .to_string();
    let message = error
        .and_then(|e| e.get("message"))
        .and_then(|v| v.as_str())
        .unwrap_or("Unknown error")
        .to_string();

    (code, message)
}
