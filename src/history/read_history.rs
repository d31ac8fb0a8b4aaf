use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use csv_async::AsyncReaderBuilder;
use futures::stream::StreamExt;
use tokio::fs::File as AsyncFile;
use tokio::io::BufReader;

use crate::history::price_record::PriceRecord;

/// Reads every record back from the history file in the order it was written.
///
/// A missing file is an empty history.
pub async fn read_history(history_path: &Path) -> Result<Vec<PriceRecord>> {
    let file = match AsyncFile::open(history_path).await {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(e).with_context(|| {
                format!("Failed to open history file {}", history_path.display())
            })
        }
    };
    let mut csv_reader = AsyncReaderBuilder::new()
        .has_headers(true)
        .create_reader(BufReader::new(file));

    let mut records = Vec::new();
    let mut rows = csv_reader.records();
    while let Some(row) = rows.next().await {
        let row = row.context("Failed to read history row")?;
        records.push(PriceRecord::from_row(&row)?);
    }

    Ok(records)
}
