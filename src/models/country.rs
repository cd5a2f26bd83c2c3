//! Country record as delivered by the upstream provider.
//!
//! Only the fields the service computes on are typed; everything else the
//! provider sends is kept verbatim in `extra` so list views pass records
//! through untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// == Country Name ==
/// Upstream sends `{common, official, nativeName}`; a bare string is accepted
/// as the common name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawName")]
pub struct CountryName {
    pub common: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawName {
    Plain(String),
    Full {
        common: String,
        #[serde(default)]
        official: Option<String>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl From<RawName> for CountryName {
    fn from(raw: RawName) -> Self {
        match raw {
            RawName::Plain(common) => Self::common(common),
            RawName::Full {
                common,
                official,
                extra,
            } => Self {
                common,
                official,
                extra,
            },
        }
    }
}

impl CountryName {
    pub fn common(name: impl Into<String>) -> Self {
        Self {
            common: name.into(),
            official: None,
            extra: Map::new(),
        }
    }
}

// == Country ==
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: CountryName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    /// Language code -> display name, in upstream order
    #[serde(default)]
    pub languages: IndexMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: CountryName::common(name),
            region: None,
            population: 0,
            area: None,
            languages: IndexMap::new(),
            borders: Vec::new(),
            extra: Map::new(),
        }
    }

    // == Builders ==
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_area(mut self, area: f64) -> Self {
        self.area = Some(area);
        self
    }

    pub fn with_language(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.languages.insert(code.into(), name.into());
        self
    }

    pub fn with_border(mut self, code: impl Into<String>) -> Self {
        self.borders.push(code.into());
        self
    }

    // == Accessors ==
    pub fn common_name(&self) -> &str {
        &self.name.common
    }

    /// Area for comparisons; an absent area counts as zero.
    pub fn area_or_zero(&self) -> f64 {
        self.area.unwrap_or(0.0)
    }

    /// True if the record's region equals `region`, ignoring case.
    /// Records without a region never match.
    pub fn in_region(&self, region: &str) -> bool {
        self.region
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == region.to_lowercase())
    }

    /// Value of a named field for sorting. `name` resolves to the common name;
    /// unknown names are looked up among the verbatim upstream fields.
    pub fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(Value::String(self.name.common.clone())),
            "region" => self.region.clone().map(Value::String),
            "population" => Some(Value::from(self.population)),
            "area" => self.area.map(Value::from),
            "languages" => serde_json::to_value(&self.languages).ok(),
            "borders" => Some(Value::from(self.borders.clone())),
            other => self.extra.get(other).cloned(),
        }
    }
}
