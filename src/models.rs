use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Term {
    pub id: u64,
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
}

// The data file is a bare JSON array of terms, not a wrapper object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct GlossaryData {
    pub terms: Vec<Term>,
}

#[derive(Debug, Deserialize)]
pub struct TermCreate {
    pub term: String,
    pub definition: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub related_terms: Option<Vec<String>>,
}

// In updates an absent field means "leave unchanged" and an explicit null
// means "clear", so nulls must stay visible as Some(None).
#[derive(Debug, Default, Deserialize)]
pub struct TermUpdate {
    pub term: Option<String>,
    pub definition: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub related_terms: Option<Option<Vec<String>>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    10
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TermListResponse {
    pub terms: Vec<Term>,
    pub total: usize,
    pub page: u32,
    pub per_page: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<Term>,
    pub query: String,
    pub count: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct GraphNode {
    pub id: u64,
    pub label: String,
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GraphLink {
    pub source: u64,
    pub target: u64,
}

#[derive(Debug, Serialize)]
pub struct GraphResponse {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}
