use crate::domain::model::{
    Continent, ContinentFilter, Country, CountryFilter, Region, RegionFilter,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Events sent by the user interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    OpenDatabase { path: PathBuf },
    CloseDatabase,
    QuitInitiated,

    StartContinentSearch(ContinentFilter),
    LoadContinent { continent_id: i64 },
    SaveContinent { continent: Continent },

    StartCountrySearch(CountryFilter),
    LoadCountry { country_id: i64 },
    SaveCountry { country: Country },

    StartRegionSearch(RegionFilter),
    LoadRegion { region_id: i64 },
    SaveRegion { region: Region },
}

/// Events sent back to the user interface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    DatabaseOpened { path: PathBuf },
    DatabaseOpenFailed { reason: String },
    DatabaseClosed,
    EndApplication,
    Error { message: String },

    ContinentSearchResult { continent: Continent },
    ContinentLoaded { continent: Continent },
    LoadContinentFailed { reason: String },
    ContinentSaved { continent: Continent },
    SaveContinentFailed { reason: String },

    CountrySearchResult { country: Country },
    CountryLoaded { country: Country },
    LoadCountryFailed { reason: String },
    CountrySaved { country: Country },
    SaveCountryFailed { reason: String },

    RegionSearchResult { region: Region },
    RegionLoaded { region: Region },
    LoadRegionFailed { reason: String },
    RegionSaved { region: Region },
    SaveRegionFailed { reason: String },
}
