//! HEALPix pixel indexing in the NESTED scheme.
//!
//! Converts sky directions into pixel ids and covers a disc on the sphere with
//! a set of pixel ranges for area queries. In the nested scheme the four
//! children of pixel `p` at the next order are `4p..=4p + 3`, so spatially
//! close pixels have numerically close ids and a small disc decomposes into
//! few ranges.

use crate::ranges::{PixelRange, PixelRangeSet};
use skyindex_core::constants::{HALF_PI, PI, TWOPI};
use skyindex_core::{Angle, Vector3};
use std::collections::HashSet;

/// Deepest supported order; `12 * 4^29` pixel ids still fit in `u64`.
pub const MAX_ORDER: u32 = 29;

/// Number of pixels along one side of a base face.
#[inline]
pub fn nside(order: u32) -> u64 {
    1u64 << order
}

/// Total number of pixels covering the sphere at `order`.
#[inline]
pub fn npix(order: u32) -> u64 {
    12 * nside(order) * nside(order)
}

/// Mean pixel size at `order`: the side of a square with the pixel's area.
pub fn pixel_size(order: u32) -> Angle {
    Angle::from_radians(pixel_size_rad(order))
}

fn pixel_size_rad(order: u32) -> f64 {
    libm::sqrt(4.0 * PI / npix(order) as f64)
}

/// Smallest order whose mean pixel size does not exceed `resolution`.
///
/// Resolutions finer than [`MAX_ORDER`] allows are clamped to it.
pub fn order_for_resolution(resolution: Angle) -> u32 {
    let target = resolution.to_radians();
    (0..MAX_ORDER)
        .find(|&order| pixel_size_rad(order) <= target)
        .unwrap_or(MAX_ORDER)
}

/// Nested pixel id of the direction `v` at `order`.
///
/// `v` need not be normalized.
pub fn vec2pix_nest(order: u32, v: &Vector3) -> u64 {
    let norm = v.magnitude();
    let z = if norm > 0.0 { v.z / norm } else { 1.0 };
    let phi = libm::atan2(v.y, v.x);
    zphi2pix_nest(order, z.clamp(-1.0, 1.0), phi)
}

/// Nested pixel id of (RA, Dec) given in degrees.
pub fn ang2pix_nest(order: u32, ra_deg: f64, dec_deg: f64) -> u64 {
    let v = Vector3::from_spherical(ra_deg.to_radians(), dec_deg.to_radians());
    vec2pix_nest(order, &v)
}

fn zphi2pix_nest(order: u32, z: f64, phi: f64) -> u64 {
    let nside = nside(order);
    let (face, ix, iy) = face_and_position(order, z, phi);
    face * nside * nside + xy2pix_nest(ix, iy, order)
}

/// Base face (0..12) and the (ix, iy) position inside it.
fn face_and_position(order: u32, z: f64, phi: f64) -> (u64, u64, u64) {
    let nside = nside(order);
    let mask = nside - 1;
    let tt = {
        let t = (phi / HALF_PI) % 4.0;
        if t < 0.0 {
            (t + 4.0) % 4.0
        } else {
            t
        }
    };

    let za = libm::fabs(z);
    if za <= 2.0 / 3.0 {
        // Equatorial belt: faces 4..8 sit between the polar rows.
        let temp1 = nside as f64 * (0.5 + tt);
        let temp2 = nside as f64 * z * 0.75;
        let jp = (temp1 - temp2) as u64;
        let jm = (temp1 + temp2) as u64;
        let ifp = jp >> order;
        let ifm = jm >> order;
        let face = if ifp == ifm {
            ifp | 4
        } else if ifp < ifm {
            ifp
        } else {
            ifm + 8
        };
        (face, jm & mask, nside - (jp & mask) - 1)
    } else {
        let ntt = (tt as u64).min(3);
        let tp = tt - ntt as f64;
        let tmp = nside as f64 * libm::sqrt(3.0 * (1.0 - za));
        let jp = ((tp * tmp) as u64).min(mask);
        let jm = (((1.0 - tp) * tmp) as u64).min(mask);
        if z >= 0.0 {
            (ntt, nside - jm - 1, nside - jp - 1)
        } else {
            (ntt + 8, jp, jm)
        }
    }
}

/// Interleaves the bits of (ix, iy) into a Z-order index within a face.
pub fn xy2pix_nest(ix: u64, iy: u64, order: u32) -> u64 {
    let mut result: u64 = 0;
    for i in 0..order {
        let bit_x = (ix >> i) & 1;
        let bit_y = (iy >> i) & 1;
        result |= (bit_x << (2 * i)) | (bit_y << (2 * i + 1));
    }
    result
}

/// Pixels overlapping the disc of `radius` around `center`, as merged ranges.
///
/// The cover is conservative: it samples the disc, widened by one pixel, at
/// half-pixel spacing and keeps every pixel a sample falls into. It may
/// include pixels just outside the disc. A disc of radius π or more covers
/// the whole sphere.
pub fn query_disc_nest(order: u32, center: &Vector3, radius: Angle) -> PixelRangeSet {
    let radius_rad = radius.to_radians();
    if radius_rad < 0.0 {
        return PixelRangeSet::new();
    }
    if radius_rad >= PI {
        return PixelRangeSet::from_ranges([PixelRange::new(0, npix(order) - 1)]);
    }

    let center = center.normalize();
    let pixel = pixel_size_rad(order);
    let step = pixel * 0.5;
    let reach = radius_rad + pixel;

    let (ra0, dec0) = center.to_spherical();
    let dec_min = (dec0 - reach).max(-HALF_PI);
    let dec_max = (dec0 + reach).min(HALF_PI);

    // Widest RA extent of the widened cap; a cap over a pole spans all of it.
    let cos_dec0 = libm::cos(dec0);
    let ra_half_width = if reach >= HALF_PI || libm::sin(reach) >= cos_dec0 {
        PI
    } else {
        libm::asin(libm::sin(reach) / cos_dec0)
    };

    let mut pixels = HashSet::new();
    pixels.insert(vec2pix_nest(order, &center));

    let dec_steps = ((dec_max - dec_min) / step).ceil() as u64;
    for i in 0..=dec_steps {
        let dec = (dec_min + i as f64 * step).min(dec_max);
        let ra_step = step / libm::cos(dec).max(0.01);
        let ra_steps = ((2.0 * ra_half_width) / ra_step).ceil() as u64;
        for j in 0..=ra_steps {
            let ra = (ra0 - ra_half_width + j as f64 * ra_step).min(ra0 + ra_half_width);
            let sample = Vector3::from_spherical(ra.rem_euclid(TWOPI), dec);
            if center.angle_to(&sample) <= reach {
                pixels.insert(vec2pix_nest(order, &sample));
            }
        }
    }

    PixelRangeSet::from_pixels(pixels)
}
