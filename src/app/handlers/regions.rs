use crate::core::query::Predicate;
use crate::core::repository;
use crate::domain::events::Response;
use crate::domain::model::{Region, RegionFilter};
use crate::utils::error::{AppError, Result};
use rusqlite::Connection;

pub fn predicate(filter: &RegionFilter) -> Predicate {
    Predicate::new()
        .eq("region_code", filter.region_code.clone())
        .eq("local_code", filter.local_code.clone())
        .eq("name", filter.name.clone())
        .eq("continent_id", filter.continent_id)
        .eq("country_id", filter.country_id)
}

pub fn search(conn: &Connection, filter: &RegionFilter) -> Result<Vec<Response>> {
    let regions = repository::search::<Region>(conn, &predicate(filter))?;
    tracing::debug!("Region search matched {} rows", regions.len());

    Ok(regions
        .into_iter()
        .map(|region| Response::RegionSearchResult { region })
        .collect())
}

pub fn load(conn: &Connection, region_id: i64) -> Response {
    let outcome = repository::find_by_id::<Region>(conn, region_id).and_then(|found| {
        found.ok_or(AppError::NotFound {
            entity: "region",
            id: region_id,
        })
    });

    match outcome {
        Ok(region) => Response::RegionLoaded { region },
        Err(e) => {
            tracing::warn!("Loading region {} failed: {}", region_id, e);
            Response::LoadRegionFailed {
                reason: e.user_friendly_message(),
            }
        }
    }
}

pub fn save(conn: &Connection, region: Region) -> Response {
    match repository::save(conn, region) {
        Ok(region) => Response::RegionSaved { region },
        Err(e) => {
            tracing::warn!("Saving region failed: {}", e);
            Response::SaveRegionFailed {
                reason: e.user_friendly_message(),
            }
        }
    }
}
