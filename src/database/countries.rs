use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::CountryRow;

pub fn insert_country(
    conn: &mut DbConn,
    name: &str,
    latitude: f64,
    longitude: f64,
) -> Result<CountryRow> {
    let sql = "INSERT INTO countries (name, latitude, longitude) VALUES (?1, ?2, ?3) RETURNING name, latitude, longitude";

    conn.query_row(sql, params![name, latitude, longitude], parse_country_row)
        .context("Failed to insert country")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<CountryRow>> {
    let sql = "SELECT name, latitude, longitude FROM countries";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_country_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_country_row(row: &rusqlite::Row) -> rusqlite::Result<CountryRow> {
    Ok(CountryRow {
        name: row.get(0)?,
        latitude: row.get(1)?,
        longitude: row.get(2)?,
    })
}
