#![allow(dead_code)]

use airport_engine::{Engine, Request, Response};
use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use tempfile::TempDir;

const SCHEMA: &str = r#"
CREATE TABLE continent (
    continent_id INTEGER PRIMARY KEY,
    continent_code TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL
);
CREATE TABLE country (
    country_id INTEGER PRIMARY KEY,
    country_code TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    continent_id INTEGER REFERENCES continent (continent_id),
    wikipedia_link TEXT,
    keywords TEXT
);
CREATE TABLE region (
    region_id INTEGER PRIMARY KEY,
    region_code TEXT NOT NULL UNIQUE,
    local_code TEXT,
    name TEXT NOT NULL,
    continent_id INTEGER REFERENCES continent (continent_id),
    country_id INTEGER REFERENCES country (country_id),
    wikipedia_link TEXT,
    keywords TEXT
);
CREATE TABLE airport (
    airport_id INTEGER PRIMARY KEY,
    airport_ident TEXT NOT NULL,
    name TEXT,
    region_id INTEGER REFERENCES region (region_id)
);
CREATE TABLE airport_frequency (
    airport_frequency_id INTEGER PRIMARY KEY,
    airport_id INTEGER REFERENCES airport (airport_id),
    frequency_mhz REAL
);
CREATE TABLE runway (
    runway_id INTEGER PRIMARY KEY,
    airport_id INTEGER REFERENCES airport (airport_id),
    length_ft INTEGER
);
CREATE TABLE navigation_aid (
    navigation_aid_id INTEGER PRIMARY KEY,
    ident TEXT,
    associated_airport_id INTEGER REFERENCES airport (airport_id)
);
"#;

const SEED: &str = r#"
INSERT INTO continent VALUES (1, 'AF', 'Africa');
INSERT INTO continent VALUES (2, 'AN', 'Antarctica');
INSERT INTO continent VALUES (3, 'AS', 'Asia');
INSERT INTO continent VALUES (4, 'EU', 'Europe');
INSERT INTO continent VALUES (5, 'NA', 'North America');
INSERT INTO continent VALUES (6, 'OC', 'Oceania');
INSERT INTO continent VALUES (7, 'SA', 'South America');

INSERT INTO country VALUES (1, 'AU', 'Australia', 6, 'https://en.wikipedia.org/wiki/Australia', NULL);
INSERT INTO country VALUES (2, 'NZ', 'New Zealand', 6, 'https://en.wikipedia.org/wiki/New_Zealand', 'Aotearoa');
INSERT INTO country VALUES (3, 'JP', 'Japan', 3, 'https://en.wikipedia.org/wiki/Japan', 'Nippon');
INSERT INTO country VALUES (4, 'CN', 'China', 3, NULL, NULL);
INSERT INTO country VALUES (5, 'FR', 'France', 4, 'https://en.wikipedia.org/wiki/France', NULL);
INSERT INTO country VALUES (6, 'GE', 'Georgia', 3, NULL, NULL);

INSERT INTO region VALUES (1, 'AU-NSW', 'NSW', 'New South Wales', 6, 1, 'https://en.wikipedia.org/wiki/New_South_Wales', NULL);
INSERT INTO region VALUES (2, 'AU-QLD', 'QLD', 'Queensland', 6, 1, NULL, NULL);
INSERT INTO region VALUES (3, 'JP-13', '13', 'Tokyo', 3, 3, NULL, 'Tokyo-to');
INSERT INTO region VALUES (4, 'FR-IDF', 'IDF', 'Ile-de-France', 4, 5, NULL, NULL);
INSERT INTO region VALUES (5, 'NZ-AUK', 'AUK', 'Auckland', 6, 2, NULL, NULL);
INSERT INTO region VALUES (6, 'JP-01', '01', 'Hokkaido', 3, 3, NULL, NULL);
INSERT INTO region VALUES (7, 'CN-11', '11', 'Beijing', 3, 4, NULL, NULL);
"#;

/// A temporary airport database; the directory is removed on drop.
pub struct Fixture {
    pub dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    /// Separate connection for inspecting or tampering with rows directly.
    pub fn raw(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }
}

pub fn airport_database() -> Result<Fixture> {
    let fixture = empty_airport_database()?;
    fixture.raw()?.execute_batch(SEED)?;
    Ok(fixture)
}

pub fn empty_airport_database() -> Result<Fixture> {
    let dir = TempDir::new()?;
    let path = dir.path().join("airport.db");
    Connection::open(&path)?.execute_batch(SCHEMA)?;
    Ok(Fixture { dir, path })
}

/// Engine with the fixture already open.
pub fn connected_engine(fixture: &Fixture) -> Engine {
    let mut engine: Engine = Engine::default();
    let responses = engine.process_event(Request::OpenDatabase {
        path: fixture.path.clone(),
    });
    assert_eq!(
        responses,
        vec![Response::DatabaseOpened {
            path: fixture.path.clone()
        }]
    );
    engine
}

/// The single response a load or save request produces.
pub fn single(mut responses: Vec<Response>) -> Response {
    assert_eq!(responses.len(), 1, "expected one response: {responses:?}");
    responses.remove(0)
}
