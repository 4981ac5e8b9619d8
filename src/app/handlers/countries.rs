use crate::core::query::Predicate;
use crate::core::repository;
use crate::domain::events::Response;
use crate::domain::model::{Country, CountryFilter};
use crate::utils::error::{AppError, Result};
use rusqlite::Connection;

pub fn predicate(filter: &CountryFilter) -> Predicate {
    Predicate::new()
        .eq("country_code", filter.country_code.clone())
        .eq("name", filter.name.clone())
        .eq("continent_id", filter.continent_id)
}

pub fn search(conn: &Connection, filter: &CountryFilter) -> Result<Vec<Response>> {
    let countries = repository::search::<Country>(conn, &predicate(filter))?;
    tracing::debug!("Country search matched {} rows", countries.len());

    Ok(countries
        .into_iter()
        .map(|country| Response::CountrySearchResult { country })
        .collect())
}

pub fn load(conn: &Connection, country_id: i64) -> Response {
    let outcome = repository::find_by_id::<Country>(conn, country_id).and_then(|found| {
        found.ok_or(AppError::NotFound {
            entity: "country",
            id: country_id,
        })
    });

    match outcome {
        Ok(country) => Response::CountryLoaded { country },
        Err(e) => {
            tracing::warn!("Loading country {} failed: {}", country_id, e);
            Response::LoadCountryFailed {
                reason: e.user_friendly_message(),
            }
        }
    }
}

/// Blank text fields, `wikipedia_link` and `keywords` included, are stored as NULL.
pub fn save(conn: &Connection, country: Country) -> Response {
    match repository::save(conn, country) {
        Ok(country) => Response::CountrySaved { country },
        Err(e) => {
            tracing::warn!("Saving country failed: {}", e);
            Response::SaveCountryFailed {
                reason: e.user_friendly_message(),
            }
        }
    }
}
