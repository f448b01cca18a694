//! Grid compositors: row joins fanned out, then stacked into one JPEG.

use crate::config::GridOptions;
use crate::encode::encode_rgb_image;
use crate::error::{GridError, GridResult};
use crate::join::{join_horizontal, join_vertical};

use super::GridShape;

/// Join one row-group side by side and encode the strip as JPEG.
pub fn compose_row<B: AsRef<[u8]>>(
    row: usize,
    buffers: &[B],
    options: &GridOptions,
) -> GridResult<Vec<u8>> {
    let strip =
        join_horizontal(buffers, options).map_err(|source| GridError::Row { row, source })?;

    tracing::debug!(
        row,
        images = buffers.len(),
        width = strip.width(),
        height = strip.height(),
        "Joined row"
    );

    Ok(encode_rgb_image(&strip, options.quality())?)
}

/// Stack finished row strips top to bottom and encode the composite.
fn stack_rows(rows: &[Vec<u8>], options: &GridOptions) -> GridResult<Vec<u8>> {
    let composite = join_vertical(rows, options)?;
    let jpeg = encode_rgb_image(&composite, options.quality())?;

    tracing::info!(
        rows = rows.len(),
        width = composite.width(),
        height = composite.height(),
        bytes = jpeg.len(),
        "Composed image grid"
    );

    Ok(jpeg)
}

fn select_shape(count: usize) -> GridResult<GridShape> {
    match GridShape::from_count(count) {
        Ok(shape) => {
            tracing::debug!(count, ?shape, "Selected grid shape");
            Ok(shape)
        }
        Err(err) => {
            tracing::warn!(count, "Rejected unsupported image count");
            Err(err)
        }
    }
}

/// Compose 1, 4 or 9 encoded images into a single grid, one row at a time
/// on the calling thread.
///
/// A single image is returned byte-for-byte as given. For 4 and 9 images
/// the output is a JPEG laid out in row-major order.
///
/// # Errors
///
/// Returns `GridError::UnsupportedCount` for any other number of inputs,
/// and propagates decode, join and encode failures.
pub fn compose_grid_blocking<B: AsRef<[u8]>>(
    buffers: &[B],
    options: &GridOptions,
) -> GridResult<Vec<u8>> {
    let shape = select_shape(buffers.len())?;

    if let [only] = buffers {
        return Ok(only.as_ref().to_vec());
    }

    let rows = shape
        .row_groups(buffers)
        .enumerate()
        .map(|(row, group)| compose_row(row, group, options))
        .collect::<GridResult<Vec<_>>>()?;

    stack_rows(&rows, options)
}

/// Compose 1, 4 or 9 encoded images into a single grid, joining rows
/// concurrently.
///
/// Each row is joined on tokio's blocking pool. The stack waits for every
/// row; the first failure aborts the rows still in flight and is returned
/// as the result. Must be called from within a tokio runtime.
///
/// # Errors
///
/// Same as [`compose_grid_blocking`], plus `GridError::Task` if a row task
/// panics.
#[cfg(feature = "async")]
pub async fn compose_grid<B>(buffers: Vec<B>, options: &GridOptions) -> GridResult<Vec<u8>>
where
    B: AsRef<[u8]> + Send + 'static,
{
    use tokio::task::JoinSet;

    let shape = select_shape(buffers.len())?;

    if let [only] = buffers.as_slice() {
        return Ok(only.as_ref().to_vec());
    }

    let mut tasks = JoinSet::new();
    let mut inputs = buffers.into_iter();
    for row in 0..shape.rows() {
        let group: Vec<B> = inputs.by_ref().take(shape.columns()).collect();
        let options = options.clone();
        tasks.spawn_blocking(move || (row, compose_row(row, &group, &options)));
    }

    let mut rows: Vec<Option<Vec<u8>>> = vec![None; shape.rows()];
    while let Some(joined) = tasks.join_next().await {
        let (row, result) = match joined {
            Ok(done) => done,
            Err(err) => {
                tasks.abort_all();
                return Err(GridError::Task(err.to_string()));
            }
        };

        match result {
            Ok(strip) => rows[row] = Some(strip),
            Err(err) => {
                tracing::warn!(row, error = %err, "Row join failed, aborting remaining rows");
                tasks.abort_all();
                return Err(err);
            }
        }
    }

    let rows = rows
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| GridError::Task("row finished without a result".to_string()))?;

    let options = options.clone();
    tokio::task::spawn_blocking(move || stack_rows(&rows, &options))
        .await
        .map_err(|err| GridError::Task(err.to_string()))?
}
