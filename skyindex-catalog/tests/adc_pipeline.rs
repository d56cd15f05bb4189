//! End-to-end tests over the bundled XHIP ReadMe and data excerpt.

use skyindex_catalog::adc::{find_column, parse_column_layout, parse_fixed_width};
use skyindex_catalog::healpix;
use skyindex_catalog::reader;
use skyindex_catalog::{load_catalog, CatalogConfig, CatalogError, Magnitude, PixelRange, PixelRangeSet};
use skyindex_core::angle::{AngleUnit, AngleUnits};
use skyindex_core::{Angle, Vector3};
use std::io::Write;
use std::path::PathBuf;

const MAIN_STARS: usize = 11;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

fn readme() -> String {
    reader::read_to_string(fixture("xhip_excerpt.readme")).unwrap()
}

fn main_config() -> CatalogConfig {
    CatalogConfig {
        metadata: fixture("xhip_excerpt.readme"),
        data: fixture("xhip_excerpt.dat"),
        magnitude_column: Some("Vmag".into()),
        ..CatalogConfig::default()
    }
}

#[test]
fn test_first_descriptor_is_hip() {
    let columns = parse_column_layout(&readme(), 0).unwrap();
    let hip = &columns[0];
    assert_eq!(hip.name, "HIP");
    assert_eq!(hip.unit, "---");
    assert_eq!(hip.format, "I6");
    assert_eq!(hip.description, "Hipparcos identifier");
    assert_eq!(hip.begin, 0);
    assert_eq!(hip.end, Some(6));
}

#[test]
fn test_main_layout_details() {
    let columns = parse_column_layout(&readme(), 0).unwrap();
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        ["HIP", "Comp", "RAdeg", "DEdeg", "Plx", "Vmag", "SpType", "Note"]
    );

    let comp = find_column(&columns, "Comp").unwrap();
    assert_eq!((comp.begin, comp.end), (7, Some(8)));

    let ra = find_column(&columns, "RAdeg").unwrap();
    assert_eq!(
        ra.description,
        "Right Ascension in decimal degrees (ICRS, Epoch=J1991.25) from the new reduction"
    );

    let vmag = find_column(&columns, "Vmag").unwrap();
    assert_eq!(vmag.description, "? Johnson V magnitude -- see note (1)");
}

#[test]
fn test_second_block_describes_photo_file() {
    let columns = parse_column_layout(&readme(), 1).unwrap();
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["HIP", "RAmas", "DEmas", "Hpmag"]);
    assert_eq!(columns[1].unit, "mas");

    let err = parse_column_layout(&readme(), 2).unwrap_err();
    assert!(matches!(err, CatalogError::Format(_)));
}

#[test]
fn test_layout_parsing_is_idempotent() {
    let doc = readme();
    assert_eq!(
        parse_column_layout(&doc, 0).unwrap(),
        parse_column_layout(&doc, 0).unwrap()
    );
}

#[test]
fn test_first_data_line() {
    let columns = parse_column_layout(&readme(), 0).unwrap();
    let data = reader::read_to_string(fixture("xhip_excerpt.dat")).unwrap();
    let first = data.lines().next().unwrap();
    let row = parse_fixed_width(first, &columns);

    assert_eq!(row.get("HIP").unwrap().value, "1");
    assert_eq!(row.get("Comp").unwrap().value, "");
    assert_eq!(row.get("SpType").unwrap().value, "F3 V");
    assert_eq!(row.get("Note").unwrap().value, "");

    let ra = row.get("RAdeg").unwrap().to_angle().unwrap();
    assert_eq!(ra, Angle::parse_decimal("0.00091185", AngleUnit::Degree).unwrap());
    let dec = row.get("DEdeg").unwrap().to_angle().unwrap();
    assert_eq!(dec.micro_arcseconds(), 3_920_447_952);
    let plx = row.get("Plx").unwrap().to_angle().unwrap();
    assert_eq!(plx.micro_arcseconds(), 3_540);
}

#[test]
fn test_single_byte_column_reads_component() {
    let columns = parse_column_layout(&readme(), 0).unwrap();
    let data = reader::read_to_string(fixture("xhip_excerpt.dat")).unwrap();
    let hip7 = data.lines().nth(6).unwrap();
    let row = parse_fixed_width(hip7, &columns);

    assert_eq!(row.get("HIP").unwrap().value, "7");
    assert_eq!(row.get("Comp").unwrap().value, "A");
    assert_eq!(row.get("Note").unwrap().value, "2");
}

#[test]
fn test_unit_consistency() {
    for v in [-90_i64, -1, 0, 1, 15, 89, 360] {
        assert_eq!(
            v.degrees().to_arc_seconds(),
            v.degrees().to_arc_minutes() * 60.0
        );
    }
    assert_eq!(1000.milliarcseconds(), 1.arc_seconds());
}

#[test]
fn test_load_main_file() {
    let dao = load_catalog(&main_config()).unwrap();
    assert_eq!(dao.len(), MAIN_STARS);
    assert_eq!(dao.pixelization().order(), 8);

    let sirius = dao
        .iter()
        .find(|s| s.magnitude() == Magnitude::from_milli(-1_440))
        .expect("Sirius is in the excerpt");
    assert_eq!(sirius.dec().micro_arcseconds(), -60_178_017_096);

    let unknown = dao.iter().filter(|s| !s.magnitude().is_known()).count();
    assert_eq!(unknown, 1, "HIP 8 has no magnitude");
}

#[test]
fn test_load_mas_block() {
    let config = CatalogConfig {
        metadata: fixture("xhip_excerpt.readme"),
        data: fixture("photo_excerpt.dat"),
        block: 1,
        ra_column: "RAmas".into(),
        dec_column: "DEmas".into(),
        magnitude_column: Some("Hpmag".into()),
        ..CatalogConfig::default()
    };
    let dao = load_catalog(&config).unwrap();
    assert_eq!(dao.len(), 3);
    let first = dao
        .iter()
        .find(|s| s.magnitude() == Magnitude::from_milli(9_200))
        .unwrap();
    assert_eq!(first.ra().micro_arcseconds(), 3_282_660);
}

#[test]
fn test_compressed_data_loads_identically() {
    let plain = std::fs::read(fixture("xhip_excerpt.dat")).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let gz_path = dir.path().join("xhip_excerpt.dat.gz");
    let mut encoder = flate2::write::GzEncoder::new(
        std::fs::File::create(&gz_path).unwrap(),
        flate2::Compression::default(),
    );
    encoder.write_all(&plain).unwrap();
    encoder.finish().unwrap();

    let config = CatalogConfig {
        data: gz_path,
        ..main_config()
    };
    let from_gz = load_catalog(&config).unwrap();
    let from_plain = load_catalog(&main_config()).unwrap();
    assert_eq!(from_gz.len(), MAIN_STARS);
    assert!(from_gz.iter().eq(from_plain.iter()));
}

#[test]
fn test_area_query_contains_and_excludes() {
    let dao = load_catalog(&main_config()).unwrap();
    let order = dao.pixelization().order();
    let vega = healpix::ang2pix_nest(order, 279.23473479, 38.78368896);
    let sirius = healpix::ang2pix_nest(order, 101.28715533, -16.71611586);
    assert_ne!(vega, sirius);

    let found = dao.stars_by_area([PixelRange::single(vega)]);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].pixel_id(), vega);
    assert!(found.iter().all(|s| s.pixel_id() != sirius));

    let both = dao.stars_by_area(PixelRangeSet::from_pixels([vega, sirius]));
    assert_eq!(both.len(), 2);
}

#[test]
fn test_cone_around_polaris() {
    let dao = load_catalog(&main_config()).unwrap();
    let polaris = Vector3::from_ra_dec(37.95.degrees(), 89.26.degrees());
    let matches = dao.stars_in_cone(&polaris, 1.degrees());
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].star.magnitude(), Magnitude::from_milli(1_970));
    assert!(matches[0].distance < 1.arc_minutes());
}

#[test]
fn test_cone_near_origin_finds_cluster() {
    let dao = load_catalog(&main_config()).unwrap();
    let center = Vector3::from_ra_dec(Angle::ZERO, 1.degrees());
    let matches = dao.stars_in_cone(&center, 5.degrees());
    assert_eq!(matches.len(), 2, "HIP 1 and HIP 6");
    assert!(matches[0].distance <= matches[1].distance);
}

#[test]
fn test_unknown_unit_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    let readme_path = dir.path().join("ReadMe");
    let broken = readme().replacen("F12.8 deg     DEdeg", "F12.8 pc      DEdeg", 1);
    std::fs::write(&readme_path, broken).unwrap();

    let config = CatalogConfig {
        metadata: readme_path,
        ..main_config()
    };
    let err = load_catalog(&config).unwrap_err();
    match err.root() {
        CatalogError::UnknownUnit { unit, column } => {
            assert_eq!(unit, "pc");
            assert_eq!(column, "DEdeg");
        }
        other => panic!("expected UnknownUnit, got {:?}", other),
    }
    assert!(matches!(err, CatalogError::Row { line: 1, .. }));
}
