//! Catalog loading: metadata layout, then data rows, into a [`StarDao`].
//!
//! Loading is all-or-nothing. Every row is parsed before the first star is
//! inserted, so a bad row (unknown unit, unparseable value, missing column)
//! aborts the load and no partially filled index escapes.

use crate::adc::{find_column, parse_column_layout, parse_fixed_width, ColumnDescriptor, ParsedRow};
use crate::config::CatalogConfig;
use crate::dao::StarDao;
use crate::error::{CatalogError, Result};
use crate::reader::{self, Lines};
use crate::star::{Magnitude, Pixelization, Star};
use log::{debug, info};
use std::io::{BufRead, Cursor};
use std::time::Instant;

/// Column names a star is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarColumns {
    pub ra: String,
    pub dec: String,
    pub magnitude: Option<String>,
}

impl StarColumns {
    pub fn from_config(config: &CatalogConfig) -> Self {
        Self {
            ra: config.ra_column.clone(),
            dec: config.dec_column.clone(),
            magnitude: config.magnitude_column.clone(),
        }
    }

    /// Fails with [`CatalogError::Format`] if a named column is not in `layout`.
    pub fn check(&self, layout: &[ColumnDescriptor]) -> Result<()> {
        let names = [Some(&self.ra), Some(&self.dec), self.magnitude.as_ref()];
        for name in names.into_iter().flatten() {
            if find_column(layout, name).is_none() {
                return Err(CatalogError::format(format!(
                    "column '{}' is not described in the layout",
                    name
                )));
            }
        }
        Ok(())
    }

    fn star(&self, row: &ParsedRow, pixelization: &Pixelization) -> Result<Star> {
        let ra = row.require(&self.ra)?.to_angle()?;
        let dec = row.require(&self.dec)?.to_angle()?;
        let magnitude = match &self.magnitude {
            Some(name) => row.require(name)?.to_magnitude()?.unwrap_or(Magnitude::UNKNOWN),
            None => Magnitude::UNKNOWN,
        };
        Ok(Star::new(ra, dec, magnitude, pixelization))
    }
}

/// Single-pass iterator of stars parsed from fixed-width data lines.
///
/// Blank lines are skipped. Row errors carry the 1-based line number.
pub struct StarRows<R> {
    lines: Lines<R>,
    layout: Vec<ColumnDescriptor>,
    columns: StarColumns,
    pixelization: Pixelization,
}

impl<R: BufRead> StarRows<R> {
    pub fn new(
        reader: R,
        layout: Vec<ColumnDescriptor>,
        columns: StarColumns,
        pixelization: Pixelization,
    ) -> Result<Self> {
        columns.check(&layout)?;
        Ok(Self {
            lines: Lines::new(reader),
            layout,
            columns,
            pixelization,
        })
    }
}

impl<R: BufRead> Iterator for StarRows<R> {
    type Item = Result<Star>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (number, line) = match self.lines.next()? {
                Ok(numbered) => numbered,
                Err(e) => return Some(Err(e.at_line(self.lines.line_number() + 1))),
            };
            if line.trim().is_empty() {
                continue;
            }
            let row = parse_fixed_width(&line, &self.layout);
            return Some(
                self.columns
                    .star(&row, &self.pixelization)
                    .map_err(|e| e.at_line(number)),
            );
        }
    }
}

/// Loads the catalog named by `config` from disk.
pub fn load_catalog(config: &CatalogConfig) -> Result<StarDao> {
    let start = Instant::now();
    info!(
        "Loading catalog {} (metadata {}, block {})",
        config.data.display(),
        config.metadata.display(),
        config.block
    );

    let metadata = reader::read_to_string(&config.metadata)?;
    let layout = parse_column_layout(&metadata, config.block)?;
    let pixelization = Pixelization::from_resolution(config.resolution)?;
    let rows = StarRows::new(
        reader::open_reader(&config.data)?,
        layout,
        StarColumns::from_config(config),
        pixelization,
    )?;

    let dao = build_index(rows, pixelization)?;
    info!(
        "Loaded {} stars into {} pixels in {:.2} s",
        dao.len(),
        dao.pixel_count(),
        start.elapsed().as_secs_f64()
    );
    Ok(dao)
}

/// Loads a catalog from in-memory metadata and data text.
///
/// The paths in `config` are ignored.
pub fn load_from_str(metadata: &str, data: &str, config: &CatalogConfig) -> Result<StarDao> {
    let layout = parse_column_layout(metadata, config.block)?;
    let pixelization = Pixelization::from_resolution(config.resolution)?;
    let rows = StarRows::new(
        Cursor::new(data.as_bytes()),
        layout,
        StarColumns::from_config(config),
        pixelization,
    )?;
    build_index(rows, pixelization)
}

fn build_index<R: BufRead>(rows: StarRows<R>, pixelization: Pixelization) -> Result<StarDao> {
    debug!(
        "Pixelization order {} (nside {}, pixel size {:.2} arcmin)",
        pixelization.order(),
        pixelization.nside(),
        pixelization.pixel_size().to_arc_minutes()
    );
    let stars = rows.collect::<Result<Vec<Star>>>()?;
    let mut dao = StarDao::new(pixelization);
    dao.extend(stars);
    Ok(dao)
}
