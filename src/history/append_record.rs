use std::path::Path;

use anyhow::{Context, Result};
use csv_async::AsyncWriterBuilder;
use tokio::fs::{self, OpenOptions};

use crate::history::price_record::{PriceRecord, HEADERS};

/// Appends one row to the history file, writing the header first when the file is new or empty.
///
/// Rows are never rewritten. There is no file locking: a single writer is assumed.
pub async fn append_record(record: &PriceRecord, history_path: &Path) -> Result<()> {
    let needs_header = match fs::metadata(history_path).await {
        Ok(metadata) => metadata.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(history_path)
        .await
        .with_context(|| format!("Failed to open history file {}", history_path.display()))?;

    let mut csv_writer = AsyncWriterBuilder::new()
        .has_headers(false)
        .create_writer(file);

    if needs_header {
        csv_writer
            .write_record(&HEADERS)
            .await
            .context("Failed to write history header")?;
    }

    csv_writer
        .write_record(&record.to_row())
        .await
        .context("Failed to write history row")?;
    csv_writer
        .flush()
        .await
        .context("Failed to flush history file")?;

    Ok(())
}
