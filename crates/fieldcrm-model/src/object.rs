//! Object (site/building) records as exchanged with the CRM API.

use serde::{Deserialize, Serialize};

/// Status assigned to objects created without an explicit one.
pub const DEFAULT_OBJECT_STATUS: &str = "NEW";

/// `{id, name}` reference to a city, district or user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    #[serde(alias = "full_name")]
    pub name: String,
}

/// An object as returned by the API.
///
/// Type and status stay strings: the server may send codes this client has
/// no label for yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteObject {
    pub id: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub address: String,
    pub city_id: String,
    #[serde(default)]
    pub district_id: Option<String>,
    #[serde(default)]
    pub gps_lat: Option<f64>,
    #[serde(default)]
    pub gps_lng: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub responsible_user_id: Option<String>,
    #[serde(default)]
    pub contact_name: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub visits_count: Option<u64>,
    #[serde(default)]
    pub last_visit_at: Option<String>,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub city: Option<NamedRef>,
    #[serde(default)]
    pub district: Option<NamedRef>,
}

impl SiteObject {
    pub fn city_name(&self) -> Option<&str> {
        self.city.as_ref().map(|city| city.name.as_str())
    }

    pub fn district_name(&self) -> Option<&str> {
        self.district.as_ref().map(|district| district.name.as_str())
    }
}

/// Body of an object create request.
///
/// Optional fields left as `None` are omitted from the JSON entirely, which
/// the API reads as "not provided" rather than "clear this value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectCreatePayload {
    #[serde(rename = "type")]
    pub object_type: String,
    pub address: String,
    pub city_id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// One page of a paginated list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}
