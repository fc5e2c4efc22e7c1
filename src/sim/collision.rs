//! Pixel-mask collision detection
//!
//! Overlap means some pixel is opaque in both masks once the target mask is
//! offset into the player mask's coordinate space. Transparent pixels are
//! never collision surface, so two sprites whose bounding boxes intersect
//! can still miss each other.

use glam::Vec2;

use super::sprite::SpriteMask;

/// Offset of `target` relative to `player` in integer pixels:
/// `(target.x - player.x, target.y - round(player.y))`.
///
/// Entity y positions other than the player's are integer-valued by
/// construction; only the player's needs rounding.
#[inline]
pub fn mask_offset(player_pos: Vec2, target_pos: Vec2) -> (i32, i32) {
    (
        (target_pos.x - player_pos.x) as i32,
        (target_pos.y - player_pos.y.round()) as i32,
    )
}

/// Report whether any opaque pixel of the two masks coincides when `target`
/// is shifted by `offset` within `player`'s coordinate space. Pure function.
pub fn masks_overlap(player: &SpriteMask, target: &SpriteMask, offset: (i32, i32)) -> bool {
    let (ox, oy) = offset;

    // Intersection of the two bounding boxes, in player coordinates
    let x0 = ox.max(0);
    let y0 = oy.max(0);
    let x1 = (ox + target.width() as i32).min(player.width() as i32);
    let y1 = (oy + target.height() as i32).min(player.height() as i32);
    if x0 >= x1 || y0 >= y1 {
        return false;
    }

    for y in y0..y1 {
        for x in x0..x1 {
            if player.opaque(x as u32, y as u32) && target.opaque((x - ox) as u32, (y - oy) as u32)
            {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(rows: &[&str]) -> SpriteMask {
        SpriteMask::from_art(rows, (1, 1))
    }

    #[test]
    fn test_solid_overlap() {
        let a = mask(&["##", "##"]);
        let b = mask(&["##", "##"]);
        assert!(masks_overlap(&a, &b, (0, 0)));
        assert!(masks_overlap(&a, &b, (1, 1)));
    }

    #[test]
    fn test_disjoint_boxes_miss() {
        let a = mask(&["##", "##"]);
        let b = mask(&["##", "##"]);
        assert!(!masks_overlap(&a, &b, (2, 0)));
        assert!(!masks_overlap(&a, &b, (0, -2)));
        assert!(!masks_overlap(&a, &b, (-5, 7)));
    }

    #[test]
    fn test_overlapping_boxes_disjoint_pixels_miss() {
        // Left column opaque vs right column opaque: the boxes coincide but
        // no opaque pixel does. Must NOT collide.
        let a = mask(&["# ", "# "]);
        let b = mask(&[" #", " #"]);
        assert!(!masks_overlap(&a, &b, (0, 0)));

        // Shift one pixel left and the columns line up
        assert!(masks_overlap(&a, &b, (-1, 0)));
    }

    #[test]
    fn test_single_pixel_touch() {
        let a = mask(&["#  ", "   ", "   "]);
        let b = mask(&["   ", "   ", "  #"]);
        assert!(masks_overlap(&a, &b, (-2, -2)));
        assert!(!masks_overlap(&a, &b, (-1, -2)));
    }

    #[test]
    fn test_mask_offset_rounds_player_y() {
        use glam::Vec2;
        let player = Vec2::new(10.0, 20.6);
        let target = Vec2::new(25.0, 30.0);
        assert_eq!(mask_offset(player, target), (15, 9));

        let player = Vec2::new(10.0, 20.4);
        assert_eq!(mask_offset(player, target), (15, 10));
    }
}
