use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::SimilarBandRow;

pub fn insert_edge(
    conn: &mut DbConn,
    band_id: i64,
    similar_band_id: i64,
    score: f64,
) -> Result<SimilarBandRow> {
    let sql = "INSERT INTO similar_bands (band_id, similar_band_id, score) VALUES (?1, ?2, ?3) RETURNING band_id, similar_band_id, score";

    conn.query_row(sql, params![band_id, similar_band_id, score], parse_edge_row)
        .context("Failed to insert similarity edge")
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<SimilarBandRow>> {
    let sql = "SELECT band_id, similar_band_id, score FROM similar_bands";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_edge_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

fn parse_edge_row(row: &rusqlite::Row) -> rusqlite::Result<SimilarBandRow> {
    Ok(SimilarBandRow {
        band_id: row.get(0)?,
        similar_band_id: row.get(1)?,
        score: row.get(2)?,
    })
}
