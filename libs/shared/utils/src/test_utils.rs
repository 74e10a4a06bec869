use std::sync::Arc;
use serde_json::json;

use shared_config::AppConfig;

pub struct TestConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            supabase_url: "http://localhost:54321".to_string(),
            supabase_anon_key: "test-anon-key".to_string(),
        }
    }
}

impl TestConfig {
    /// Config pointed at a wiremock server standing in for PostgREST.
    pub fn with_base_url(url: &str) -> Self {
        Self {
            supabase_url: url.to_string(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            supabase_url: self.supabase_url.clone(),
            supabase_anon_key: self.supabase_anon_key.clone(),
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Canned PostgREST row bodies for wiremock fixtures.
pub struct MockPostgrestResponses;

impl MockPostgrestResponses {
    pub fn dentist_response(id: i64, name: &str, specialty: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "specialty": specialty
        })
    }

    pub fn patient_response(id: i64, name: &str, phone: Option<&str>) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "phone": phone
        })
    }

    pub fn appointment_response(
        id: i64,
        dentist_id: Option<i64>,
        patient_id: Option<i64>,
        appointment_date: &str,
    ) -> serde_json::Value {
        json!({
            "id": id,
            "appointment_date": appointment_date,
            "dentist_id": dentist_id,
            "patient_id": patient_id,
            "notes": null
        })
    }

    /// List row with the dentist and patient relations embedded, as returned
    /// by a `select=*,dentist:dentists(*),patient:patients(*)` query.
    pub fn appointment_with_relations_response(
        id: i64,
        dentist: Option<serde_json::Value>,
        patient: Option<serde_json::Value>,
        appointment_date: &str,
    ) -> serde_json::Value {
        let dentist_id = dentist.as_ref().and_then(|d| d.get("id").cloned());
        let patient_id = patient.as_ref().and_then(|p| p.get("id").cloned());
        json!({
            "id": id,
            "appointment_date": appointment_date,
            "dentist_id": dentist_id,
            "patient_id": patient_id,
            "notes": null,
            "dentist": dentist,
            "patient": patient
        })
    }
}
