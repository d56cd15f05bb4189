//! Tests against the complete XHIP catalog.
//!
//! Place `xhip.readme` and `xhip.dat.bz2` in `skyindex-catalog/data/` and run
//! with `--features integration-tests`.
#![cfg(feature = "integration-tests")]

use skyindex_catalog::adc::{parse_column_layout, parse_fixed_width};
use skyindex_catalog::reader::{self, Lines};
use skyindex_catalog::{load_catalog, CatalogConfig, PixelRange};
use std::path::PathBuf;

const XHIP_STARS: usize = 117_955;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn config() -> CatalogConfig {
    CatalogConfig {
        metadata: data_dir().join("xhip.readme"),
        data: data_dir().join("xhip.dat.bz2"),
        ..CatalogConfig::default()
    }
}

#[test]
fn test_xhip_first_descriptor() {
    let readme = reader::read_to_string(config().metadata).unwrap();
    let columns = parse_column_layout(&readme, 0).unwrap();
    let hip = &columns[0];
    assert_eq!(hip.name, "HIP");
    assert_eq!(hip.unit, "---");
    assert_eq!(hip.format, "I6");
    assert_eq!(hip.description, "Hipparcos identifier");
    assert_eq!((hip.begin, hip.end), (0, Some(6)));
}

#[test]
fn test_xhip_first_row() {
    let config = config();
    let readme = reader::read_to_string(&config.metadata).unwrap();
    let columns = parse_column_layout(&readme, 0).unwrap();
    let (number, line) = Lines::new(reader::open_reader(&config.data).unwrap())
        .next()
        .unwrap()
        .unwrap();
    assert_eq!(number, 1);

    let row = parse_fixed_width(&line, &columns);
    assert_eq!(row.require("HIP").unwrap().value, "1");
    assert_eq!(row.require("Comp").unwrap().value, "");
    assert_eq!(row.require("SpType").unwrap().value, "F3 V");
}

#[test]
fn test_xhip_star_count() {
    let dao = load_catalog(&config()).unwrap();
    assert_eq!(dao.len(), XHIP_STARS);
    assert_eq!(dao.stars_by_area([PixelRange::new(0, u64::MAX)]).len(), XHIP_STARS);
}
