use rgb::RGBA;

/// Pack an RGBA color into a single sortable key, R in the most significant
/// byte. Ascending key order is lexicographic channel order (r, g, b, a).
pub(crate) fn pack(c: RGBA<u8>) -> u32 {
    (c.r as u32) << 24 | (c.g as u32) << 16 | (c.b as u32) << 8 | c.a as u32
}

pub(crate) fn unpack(key: u32) -> RGBA<u8> {
    RGBA {
        r: (key >> 24) as u8,
        g: (key >> 16) as u8,
        b: (key >> 8) as u8,
        a: key as u8,
    }
}

/// Channel-wise similarity: every channel (alpha included) differs by at
/// most `tolerance`.
///
/// Not transitive — a within tolerance of b and b within tolerance of c does
/// not imply a within tolerance of c. The cluster reducer resolves this with
/// a greedy first-match scan rather than true equivalence classes.
pub fn within_tolerance(a: RGBA<u8>, b: RGBA<u8>, tolerance: u8) -> bool {
    a.r.abs_diff(b.r) <= tolerance
        && a.g.abs_diff(b.g) <= tolerance
        && a.b.abs_diff(b.b) <= tolerance
        && a.a.abs_diff(b.a) <= tolerance
}
