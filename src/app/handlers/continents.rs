use crate::core::query::Predicate;
use crate::core::repository;
use crate::domain::events::Response;
use crate::domain::model::{Continent, ContinentFilter};
use crate::utils::error::{AppError, Result};
use rusqlite::Connection;

pub fn predicate(filter: &ContinentFilter) -> Predicate {
    Predicate::new()
        .eq("continent_code", filter.continent_code.clone())
        .eq("name", filter.name.clone())
}

/// One `ContinentSearchResult` per matching row; no rows, no events.
pub fn search(conn: &Connection, filter: &ContinentFilter) -> Result<Vec<Response>> {
    let continents = repository::search::<Continent>(conn, &predicate(filter))?;
    tracing::debug!("Continent search matched {} rows", continents.len());

    Ok(continents
        .into_iter()
        .map(|continent| Response::ContinentSearchResult { continent })
        .collect())
}

pub fn load(conn: &Connection, continent_id: i64) -> Response {
    let outcome = repository::find_by_id::<Continent>(conn, continent_id).and_then(|found| {
        found.ok_or(AppError::NotFound {
            entity: "continent",
            id: continent_id,
        })
    });

    match outcome {
        Ok(continent) => Response::ContinentLoaded { continent },
        Err(e) => {
            tracing::warn!("Loading continent {} failed: {}", continent_id, e);
            Response::LoadContinentFailed {
                reason: e.user_friendly_message(),
            }
        }
    }
}

pub fn save(conn: &Connection, continent: Continent) -> Response {
    match repository::save(conn, continent) {
        Ok(continent) => Response::ContinentSaved { continent },
        Err(e) => {
            tracing::warn!("Saving continent failed: {}", e);
            Response::SaveContinentFailed {
                reason: e.user_friendly_message(),
            }
        }
    }
}
