//! In-memory spatial index of stars keyed by pixel id.
//!
//! [`StarDao`] groups stars into buckets, one per occupied pixel, in a
//! `BTreeMap` so a range of pixel ids is a single ordered scan. Mutation takes
//! `&mut self` and queries `&self`: once loading is done the index can be
//! shared across threads for read-only queries.

use crate::healpix;
use crate::ranges::PixelRange;
use crate::star::{Pixelization, Star};
use skyindex_core::{Angle, Vector3};
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct StarDao {
    pixelization: Pixelization,
    buckets: BTreeMap<u64, Vec<Star>>,
    len: usize,
}

/// A star matched by a cone query, with its distance from the cone center.
#[derive(Debug, Clone, Copy)]
pub struct ConeMatch<'a> {
    pub star: &'a Star,
    pub distance: Angle,
}

impl StarDao {
    pub fn new(pixelization: Pixelization) -> Self {
        Self {
            pixelization,
            buckets: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn pixelization(&self) -> &Pixelization {
        &self.pixelization
    }

    /// Appends `star` to the bucket of its own pixel id.
    ///
    /// Duplicates are kept. A star built at a different order is still
    /// filed under the id it carries.
    pub fn add_star(&mut self, star: Star) {
        self.buckets.entry(star.pixel_id()).or_default().push(star);
        self.len += 1;
    }

    /// Stars whose pixel id falls in any of `ranges`.
    ///
    /// Each range is scanned on its own, in the order given: pixels in
    /// ascending id order, stars within a pixel in insertion order. Overlapping
    /// ranges return the shared stars once per range. An empty range
    /// (`first > last`) matches nothing.
    pub fn stars_by_area<I>(&self, ranges: I) -> Vec<&Star>
    where
        I: IntoIterator<Item = PixelRange>,
    {
        let mut found = Vec::new();
        for range in ranges {
            if range.is_empty() {
                continue;
            }
            for bucket in self.buckets.range(range.as_inclusive()).map(|(_, stars)| stars) {
                found.extend(bucket.iter());
            }
        }
        found
    }

    pub fn stars_in_pixel(&self, pixel: u64) -> &[Star] {
        self.buckets.get(&pixel).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stars within `radius` of `center`, nearest first.
    pub fn stars_in_cone(&self, center: &Vector3, radius: Angle) -> Vec<ConeMatch<'_>> {
        let cover = healpix::query_disc_nest(self.pixelization.order(), center, radius);
        let mut matches: Vec<ConeMatch<'_>> = self
            .stars_by_area(&cover)
            .into_iter()
            .map(|star| ConeMatch {
                star,
                distance: star.separation(center),
            })
            .filter(|m| m.distance <= radius)
            .collect();
        matches.sort_by_key(|m| m.distance);
        matches
    }

    /// Number of stars indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of occupied pixels.
    pub fn pixel_count(&self) -> usize {
        self.buckets.len()
    }

    /// All stars, by pixel id then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.buckets.values().flatten()
    }
}

impl Extend<Star> for StarDao {
    fn extend<T: IntoIterator<Item = Star>>(&mut self, iter: T) {
        for star in iter {
            self.add_star(star);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranges::PixelRangeSet;
    use crate::star::Magnitude;
    use skyindex_core::angle::AngleUnits;

    fn pix() -> Pixelization {
        Pixelization::from_order(8).unwrap()
    }

    fn star(ra_deg: f64, dec_deg: f64) -> Star {
        Star::new(ra_deg.degrees(), dec_deg.degrees(), Magnitude::UNKNOWN, &pix())
    }

    fn around(star: &Star, half_width: u64) -> PixelRange {
        let p = star.pixel_id();
        PixelRange::new(p.saturating_sub(half_width), p + half_width)
    }

    #[test]
    fn test_empty_index() {
        let dao = StarDao::new(pix());
        assert!(dao.is_empty());
        assert_eq!(dao.pixel_count(), 0);
        assert!(dao.stars_by_area([PixelRange::new(0, u64::MAX)]).is_empty());
        assert!(dao.stars_in_pixel(0).is_empty());
    }

    #[test]
    fn test_area_query_contains_and_excludes() {
        let mut dao = StarDao::new(pix());
        let inside = star(10.0, 20.0);
        let outside = star(190.0, -20.0);
        let range = PixelRange::single(inside.pixel_id());
        assert_ne!(inside.pixel_id(), outside.pixel_id());
        dao.add_star(inside.clone());
        dao.add_star(outside.clone());

        let found = dao.stars_by_area([range]);
        assert_eq!(found, vec![&inside]);
        assert!(!found.contains(&&outside));
    }

    #[test]
    fn test_ranges_are_closed() {
        let mut dao = StarDao::new(pix());
        let s = star(45.0, 45.0);
        let p = s.pixel_id();
        dao.add_star(s);
        assert_eq!(dao.stars_by_area([PixelRange::new(p, p + 5)]).len(), 1);
        assert_eq!(dao.stars_by_area([PixelRange::new(p - 5, p)]).len(), 1);
        assert_eq!(dao.stars_by_area([PixelRange::new(p + 1, p + 5)]).len(), 0);
    }

    #[test]
    fn test_inverted_range_matches_nothing() {
        let mut dao = StarDao::new(pix());
        let s = star(45.0, 45.0);
        let p = s.pixel_id();
        dao.add_star(s);
        assert!(dao.stars_by_area([PixelRange::new(p + 1, p - 1)]).is_empty());
    }

    #[test]
    fn test_overlapping_ranges_return_duplicates() {
        let mut dao = StarDao::new(pix());
        let s = star(100.0, 10.0);
        let range = around(&s, 2);
        dao.add_star(s);
        let found = dao.stars_by_area([range, range]);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], found[1]);
    }

    #[test]
    fn test_duplicate_stars_are_kept_in_insertion_order() {
        let mut dao = StarDao::new(pix());
        let first = Star::new(1.degrees(), 1.degrees(), Magnitude::from_milli(1_000), &pix());
        let second = Star::new(1.degrees(), 1.degrees(), Magnitude::from_milli(2_000), &pix());
        let pixel = first.pixel_id();
        dao.add_star(first);
        dao.add_star(second);

        assert_eq!(dao.len(), 2);
        assert_eq!(dao.pixel_count(), 1);
        let mags: Vec<i32> = dao.stars_in_pixel(pixel).iter().map(|s| s.magnitude().milli()).collect();
        assert_eq!(mags, vec![1_000, 2_000]);
    }

    #[test]
    fn test_results_follow_range_order_then_pixel_order() {
        let mut dao = StarDao::new(pix());
        let a = star(10.0, 20.0);
        let b = star(200.0, -40.0);
        let (lo, hi) = if a.pixel_id() < b.pixel_id() { (a, b) } else { (b, a) };
        dao.extend([hi.clone(), lo.clone()]);

        let all = dao.stars_by_area([PixelRange::new(0, u64::MAX)]);
        assert_eq!(all, vec![&lo, &hi]);

        let reversed = dao.stars_by_area([PixelRange::single(hi.pixel_id()), PixelRange::single(lo.pixel_id())]);
        assert_eq!(reversed, vec![&hi, &lo]);
    }

    #[test]
    fn test_star_from_other_order_uses_its_own_id() {
        let mut dao = StarDao::new(pix());
        let coarse = Star::new(
            10.degrees(),
            10.degrees(),
            Magnitude::UNKNOWN,
            &Pixelization::from_order(2).unwrap(),
        );
        let id = coarse.pixel_id();
        dao.add_star(coarse);
        assert_eq!(dao.stars_in_pixel(id).len(), 1);
    }

    #[test]
    fn test_stars_by_area_accepts_range_set() {
        let mut dao = StarDao::new(pix());
        let a = star(0.5, 0.5);
        let b = star(300.0, 60.0);
        let set = PixelRangeSet::from_pixels([a.pixel_id(), b.pixel_id()]);
        dao.extend([a, b, star(120.0, -10.0)]);
        assert_eq!(dao.stars_by_area(&set).len(), 2);
        assert_eq!(dao.stars_by_area(set).len(), 2);
    }

    #[test]
    fn test_stars_in_cone() {
        let mut dao = StarDao::new(pix());
        dao.extend([star(10.0, 10.0), star(10.5, 10.0), star(11.5, 10.0), star(40.0, 10.0)]);

        let center = Vector3::from_ra_dec(10.degrees(), 10.degrees());
        let matches = dao.stars_in_cone(&center, 1.degrees());
        let ras: Vec<f64> = matches.iter().map(|m| m.star.ra().to_degrees()).collect();
        assert_eq!(ras, vec![10.0, 10.5]);
        assert!(matches[0].distance < matches[1].distance);
    }

    #[test]
    fn test_iter_visits_every_star() {
        let mut dao = StarDao::new(pix());
        dao.extend([star(1.0, 1.0), star(2.0, 2.0), star(1.0, 1.0)]);
        assert_eq!(dao.iter().count(), 3);
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StarDao>();
    }
}
