use anyhow::{Result, anyhow};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::debug;

use shared_config::AppConfig;
use shared_database::supabase::SupabaseClient;

use crate::models::{Dentist, CreateDentistRequest};

pub struct DentistService {
    supabase: SupabaseClient,
}

impl DentistService {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
        }
    }

    /// List every dentist on the roster, in storage order.
    pub async fn list_dentists(&self) -> Result<Vec<Dentist>> {
        debug!("Fetching all dentists");

        let result: Vec<Value> = self.supabase.request(
            Method::GET,
            "/rest/v1/dentists",
            None,
        ).await?;

        let dentists: Vec<Dentist> = result
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(dentists)
    }

    /// Insert a dentist and return the stored record with its assigned id.
    pub async fn create_dentist(&self, request: CreateDentistRequest) -> Result<Dentist> {
        debug!("Creating dentist record for: {}", request.name);

        let dentist_data = json!({
            "name": request.name,
            "specialty": request.specialty,
        });

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("Prefer", reqwest::header::HeaderValue::from_static("return=representation"));

        let result: Vec<Value> = self.supabase.request_with_headers(
            Method::POST,
            "/rest/v1/dentists",
            Some(dentist_data),
            Some(headers),
        ).await?;

        if result.is_empty() {
            return Err(anyhow!("Failed to create dentist record"));
        }

        let dentist: Dentist = serde_json::from_value(result[0].clone())?;
        debug!("Dentist record created with ID: {}", dentist.id);

        Ok(dentist)
    }
}
