use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::num::NonZeroU32;

/// Splits `pixel_rect` into disjoint square regions of `region_size` pixels,
/// row by row. Regions on the right and bottom edges are clipped to the rect.
#[must_use]
pub fn partition_into_regions(pixel_rect: PixelRect, region_size: NonZeroU32) -> Vec<PixelRect> {
    let step = i64::from(region_size.get());
    let top_left = pixel_rect.top_left();
    let bottom_right = pixel_rect.bottom_right();
    let columns = u64::from(pixel_rect.width()).div_ceil(step as u64);
    let rows = u64::from(pixel_rect.height()).div_ceil(step as u64);
    let mut regions = Vec::with_capacity((columns * rows) as usize);

    let mut y = i64::from(top_left.y);
    while y <= i64::from(bottom_right.y) {
        let y_end = (y + step - 1).min(i64::from(bottom_right.y));

        let mut x = i64::from(top_left.x);
        while x <= i64::from(bottom_right.x) {
            let x_end = (x + step - 1).min(i64::from(bottom_right.x));

            // bounds come from a valid rect, so the clipped region is valid too
            if let Ok(region) = PixelRect::new(
                Point {
                    x: x as i32,
                    y: y as i32,
                },
                Point {
                    x: x_end as i32,
                    y: y_end as i32,
                },
            ) {
                regions.push(region);
            }

            x += step;
        }

        y += step;
    }

    regions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn size(value: u32) -> NonZeroU32 {
        NonZeroU32::new(value).unwrap()
    }

    fn assert_exact_cover(pixel_rect: PixelRect, regions: &[PixelRect]) {
        let mut seen = HashSet::new();

        for region in regions {
            for point in region.points() {
                assert!(pixel_rect.contains_point(point), "{:?} escapes the rect", point);
                assert!(seen.insert(point), "{:?} covered twice", point);
            }
        }

        assert_eq!(seen.len() as u64, pixel_rect.size());
    }

    #[test]
    fn exact_multiple_gives_full_regions() {
        let pixel_rect = PixelRect::from_size(64, 32).unwrap();

        let regions = partition_into_regions(pixel_rect, size(32));

        assert_eq!(regions.len(), 2);
        assert!(regions.iter().all(|r| r.width() == 32 && r.height() == 32));
        assert_exact_cover(pixel_rect, &regions);
    }

    #[test]
    fn edge_regions_are_clipped() {
        let pixel_rect = PixelRect::from_size(70, 33).unwrap();

        let regions = partition_into_regions(pixel_rect, size(32));

        assert_eq!(regions.len(), 6);
        assert_eq!(regions[2].width(), 6);
        assert_eq!(regions[5].width(), 6);
        assert_eq!(regions[5].height(), 1);
        assert_exact_cover(pixel_rect, &regions);
    }

    #[test]
    fn region_larger_than_rect_gives_single_region() {
        let pixel_rect = PixelRect::from_size(4, 4).unwrap();

        let regions = partition_into_regions(pixel_rect, size(32));

        assert_eq!(regions, vec![pixel_rect]);
    }

    #[test]
    fn single_pixel_regions() {
        let pixel_rect = PixelRect::from_size(3, 2).unwrap();

        let regions = partition_into_regions(pixel_rect, size(1));

        assert_eq!(regions.len(), 6);
        assert_exact_cover(pixel_rect, &regions);
    }

    #[test]
    fn offset_rect_is_covered() {
        let pixel_rect = PixelRect::new(Point { x: -5, y: 7 }, Point { x: 40, y: 50 }).unwrap();

        let regions = partition_into_regions(pixel_rect, size(16));

        assert_exact_cover(pixel_rect, &regions);
    }

    #[test]
    fn default_surface_partition() {
        let pixel_rect = PixelRect::from_size(1366, 768).unwrap();

        let regions = partition_into_regions(pixel_rect, size(32));

        // 1366 / 32 = 42.7 columns, 768 / 32 = 24 rows
        assert_eq!(regions.len(), 43 * 24);
        assert_eq!(regions.iter().map(PixelRect::size).sum::<u64>(), 1366 * 768);
    }
}
