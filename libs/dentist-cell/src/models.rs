use serde::{Deserialize, Serialize};

/// A dentist on the clinic roster. The id is assigned by the store on
/// insert; the appointments that reference a dentist are reached through
/// queries, never stored on the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dentist {
    pub id: i64,
    pub name: String,
    pub specialty: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDentistRequest {
    pub name: String,
    pub specialty: Option<String>,
}
