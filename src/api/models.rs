use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use crate::domain::ratings::{RatingState, RatingType};

// page
//  ├── count
//  ├── previous   (absolute cursor url or null)
//  ├── next       (absolute cursor url or null)
//  └── results[]
//       ├── id, url, heading, desc, district
//       ├── min_price, size_m2
//       ├── thumbnail_image, photos[]   (base64 png)
//       ├── location_names[], location_color, keywords[]
//       ├── date_added
//       └── hearted, starred, rejected

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub results: Vec<Listing>,
    #[serde(default)]
    pub count: u64,
    pub previous: Option<String>,
    pub next: Option<String>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub id: String,
    pub url: Option<String>,
    pub heading: Option<String>,
    #[serde(rename = "desc")]
    pub description: Option<String>,
    pub district: Option<String>,

    pub min_price: Option<i64>,
    pub size_m2: Option<f64>,

    pub thumbnail_image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photos: Vec<String>,

    pub date_added: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location_names: Vec<String>,
    pub location_color: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub hearted: bool,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub rejected: bool,
}

impl Listing {
    /// Rating as reported by the backend.
    pub fn rating(&self) -> RatingState {
        RatingState::from_flags(self.hearted, self.starred, self.rejected)
    }

    /// Price in thousands, rounded up ("612 tys. zł").
    pub fn price_thousands(&self) -> Option<i64> {
        self.min_price
            .map(|p| p.div_euclid(1000) + i64::from(p.rem_euclid(1000) != 0))
    }

    /// Date the flat was first seen, as `YYYY-MM-DD` when parseable.
    pub fn date_added_display(&self) -> Option<String> {
        let raw = self.date_added.as_deref()?;
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.format("%Y-%m-%d").to_string());
        }
        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return Some(d.format("%Y-%m-%d").to_string());
        }
        Some(raw.to_string())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DistrictsResponse {
    #[serde(default)]
    pub districts: Vec<String>,
}

/// One persisted rating change, sent to the rating endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingUpdate {
    pub flat_id: String,
    pub rating_type: RatingType,
    pub is_ticked: bool,
}

impl RatingUpdate {
    pub fn query_pairs(&self) -> [(&'static str, String); 3] {
        [
            ("flat_id", self.flat_id.clone()),
            ("rating_type", self.rating_type.as_str().to_string()),
            ("is_ticked", self.is_ticked.to_string()),
        ]
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
