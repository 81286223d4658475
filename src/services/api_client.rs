// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::models::{Bill, BillPayload, LoginResponse, UploadedReceipt};
use crate::services::store::RemoteStore;
use crate::utils::constants::BACKEND_URL;

/// Cliente HTTP del backend Billed
#[derive(Clone)]
pub struct HttpStore {
    base_url: String,
}

impl HttpStore {
    pub fn new() -> Self {
        Self {
            base_url: BACKEND_URL.to_string(),
        }
    }
}

impl Default for HttpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpStore {
    async fn bills_list(&self) -> Result<Vec<Bill>, String> {
        let url = format!("{}/bills", self.base_url);
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        let bills = response
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!("📋 {} notas recibidas del backend", bills.len());
        Ok(bills)
    }

    async fn upload_receipt(
        &self,
        file_name: &str,
        email: &str,
    ) -> Result<UploadedReceipt, String> {
        let url = format!("{}/bills", self.base_url);

        log::info!("📎 Subiendo justificativo: {}", file_name);

        let response = Request::post(&url)
            .json(&serde_json::json!({ "fileName": file_name, "email": email }))
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<UploadedReceipt>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    async fn bills_create(&self, bill: &BillPayload) -> Result<(), String> {
        let url = format!("{}/bills", self.base_url);

        let response = Request::post(&url)
            .json(bill)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        log::info!("✅ Nota de frais creada");
        Ok(())
    }

    async fn login(&self, credentials: &str) -> Result<LoginResponse, String> {
        let url = format!("{}/auth/login", self.base_url);

        log::info!("🔐 Login contra el backend...");

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(credentials)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    async fn users_create(&self, data: &str) -> Result<(), String> {
        let url = format!("{}/users", self.base_url);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(data)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!("HTTP {}: {}", response.status(), response.status_text()));
        }

        Ok(())
    }
}
