use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::ThemeRow;

pub fn insert_themes(conn: &mut DbConn, band_id: i64, themes: &str) -> Result<ThemeRow> {
    let sql = "INSERT INTO lyrical_themes (band_id, themes) VALUES (?1, ?2) RETURNING band_id, themes";

    conn.query_row(sql, params![band_id, themes], parse_theme_row)
        .context("Failed to insert lyrical themes")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<ThemeRow>> {
    let sql = "SELECT band_id, themes FROM lyrical_themes ORDER BY band_id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_theme_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_theme_row(row: &rusqlite::Row) -> rusqlite::Result<ThemeRow> {
    Ok(ThemeRow {
        band_id: row.get(0)?,
        themes: row.get(1)?,
    })
}
