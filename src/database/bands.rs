use anyhow::{Context, Result};
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::BandRow;

pub fn insert_band(
    conn: &mut DbConn,
    id: i64,
    name: &str,
    country: &str,
    genre: &str,
) -> Result<BandRow> {
    let sql = "INSERT INTO bands (id, name, country, genre) VALUES (?1, ?2, ?3, ?4) RETURNING id, name, country, genre";

    conn.query_row(sql, params![id, name, country, genre], parse_band_row)
        .context("Failed to insert band")
}

pub fn find_by_id(conn: &mut DbConn, id: i64) -> Result<Option<BandRow>> {
    let sql = "SELECT id, name, country, genre FROM bands WHERE id = ?1";

    conn.query_row(sql, params![id], parse_band_row)
        .optional()
        .context("Failed to query band by id")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<BandRow>> {
    let sql = "SELECT id, name, country, genre FROM bands ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_band_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_band_row(row: &rusqlite::Row) -> rusqlite::Result<BandRow> {
    Ok(BandRow {
        id: row.get(0)?,
        name: row.get(1)?,
        country: row.get(2)?,
        genre: row.get(3)?,
    })
}
