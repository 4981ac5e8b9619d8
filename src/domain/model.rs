use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    pub continent_id: Option<i64>,
    pub continent_code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub country_id: Option<i64>,
    pub country_code: Option<String>,
    pub name: Option<String>,
    pub continent_id: Option<i64>,
    pub wikipedia_link: Option<String>,
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub region_id: Option<i64>,
    pub region_code: Option<String>,
    pub local_code: Option<String>,
    pub name: Option<String>,
    pub continent_id: Option<i64>,
    pub country_id: Option<i64>,
    pub wikipedia_link: Option<String>,
    pub keywords: Option<String>,
}

/// Optional search fields; a `None` field does not restrict the search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinentFilter {
    pub continent_code: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryFilter {
    pub country_code: Option<String>,
    pub name: Option<String>,
    pub continent_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionFilter {
    pub region_code: Option<String>,
    pub local_code: Option<String>,
    pub name: Option<String>,
    pub continent_id: Option<i64>,
    pub country_id: Option<i64>,
}
