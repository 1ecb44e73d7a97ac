//! Domain regression tests for latchhook-core.
//!
//! Each test guards one property of the pipeline as a whole rather than a
//! single function.

#[cfg(test)]
mod domain_tests {
    use crate::api::LatchHook;
    use crate::color::{Color, Oklab};
    use crate::output::render;
    use crate::palette::{FrequencyTable, Palette, PaletteError};
    use crate::preprocess::resize;
    use crate::quantize::{assign_direct, reassign};
    use crate::raster::Raster;
    use pretty_assertions::assert_eq;

    const RED: Color = Color::rgb(255, 0, 0);
    const GREEN: Color = Color::rgb(0, 255, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    /// Deterministic pseudo-random raster with a handful of colors.
    fn noisy(width: usize, height: usize, colors: usize) -> Raster {
        let mut state: u32 = 0x9E37_79B9;
        Raster::from_fn(width, height, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let v = (state as usize % colors) as u8;
            Color::rgb(v.wrapping_mul(37), v.wrapping_mul(91), 255 - v.wrapping_mul(53))
        })
        .unwrap()
    }

    // ========================================================================
    // Quantization closure
    // ========================================================================

    /// If this breaks, perceptual reassignment leaked a color that is not
    /// in the palette into the output.
    #[test]
    fn test_reassigned_colors_are_palette_members() {
        let raster = noisy(37, 23, 9);
        let palette = Palette::build(&raster, 4).unwrap();
        let out = reassign(&raster, &palette).to_raster();
        for pixel in out.pixels() {
            assert!(
                palette.colors().contains(pixel),
                "{pixel} is not in the palette"
            );
        }
    }

    // ========================================================================
    // Palette size bound
    // ========================================================================

    /// If this breaks, palette construction returned the wrong number of
    /// colors or invented a color that is not in the source.
    #[test]
    fn test_palette_has_exactly_k_source_colors() {
        let raster = noisy(40, 40, 12);
        let table = FrequencyTable::analyze(&raster);
        for k in 1..=table.len() {
            let palette = Palette::build(&raster, k).unwrap();
            assert_eq!(palette.len(), k);
            for &c in palette.colors() {
                assert!(table.count(c) > 0);
            }
        }
        assert_eq!(
            Palette::build(&raster, table.len() + 1),
            Err(PaletteError::InvalidPaletteSize {
                requested: table.len() + 1,
                available: table.len()
            })
        );
    }

    // ========================================================================
    // Matcher correctness
    // ========================================================================

    #[test]
    fn test_exact_match_has_zero_distance() {
        let palette = Palette::new(&[RED, BLUE]).unwrap();
        assert_eq!(palette.find_nearest(RED), (0, 0.0));
    }

    /// If this breaks, ties are resolved with `<=` and the later entry wins.
    #[test]
    fn test_equidistant_entries_pick_lower_index() {
        // Alpha is ignored perceptually, so both entries sit at distance 0
        let palette =
            Palette::new(&[Color::new(10, 20, 30, 255), Color::new(10, 20, 30, 0)]).unwrap();
        assert_eq!(palette.find_nearest(Color::new(10, 20, 30, 128)).0, 0);

        let palette = Palette::new(&[Color::new(10, 20, 30, 0), Color::new(10, 20, 30, 255)]).unwrap();
        assert_eq!(palette.find_nearest(Color::new(10, 20, 30, 128)).0, 0);
    }

    #[test]
    fn test_midpoint_between_distinct_entries_picks_lower_index() {
        // Black projects to the Oklab origin, so half of white's projection
        // is an exact midpoint: both differences are the same vector up to sign
        for colors in [[Color::BLACK, Color::WHITE], [Color::WHITE, Color::BLACK]] {
            let palette = Palette::new(&colors).unwrap();
            let white = Oklab::from(Color::WHITE);
            let midpoint = Oklab::new(white.l / 2.0, white.a / 2.0, white.b / 2.0);

            let to_first = midpoint.distance_squared(palette.oklab(0));
            let to_second = midpoint.distance_squared(palette.oklab(1));
            assert!(to_first > 0.0);
            assert_eq!(to_first, to_second);

            assert_eq!(palette.find_nearest_oklab(midpoint), (0, to_first));
        }
    }

    #[test]
    fn test_rgba_midpoint_picks_lower_index() {
        let between = Color::gray(105);
        for colors in [
            [Color::gray(100), Color::gray(110)],
            [Color::gray(110), Color::gray(100)],
        ] {
            let palette = Palette::new(&colors).unwrap();
            assert_eq!(palette.find_nearest_rgba(between), (0, 75));
            assert_eq!(
                assign_direct(&Raster::filled(1, 1, between).unwrap(), &palette).indices(),
                &[0]
            );
        }
    }

    // ========================================================================
    // Resize shape
    // ========================================================================

    #[test]
    fn test_resize_to_ten_by_ten_for_any_source() {
        for (w, h) in [(1, 1), (3, 17), (10, 10), (64, 48), (101, 7)] {
            let result = resize(&noisy(w, h, 5), 10, 10).unwrap();
            assert_eq!(
                (result.raster.width(), result.raster.height()),
                (10, 10),
                "source {w}x{h}"
            );
        }
    }

    // ========================================================================
    // Diagram shape
    // ========================================================================

    #[test]
    fn test_diagram_is_four_times_larger_with_decade_origin() {
        for (w, h) in [(1, 1), (5, 3), (12, 25)] {
            let diagram = render(&noisy(w, h, 3), 4).unwrap();
            assert_eq!((diagram.width(), diagram.height()), (4 * w, 4 * h));
            assert_eq!(diagram.get(0, 0), Color::gray(200));
        }
    }

    /// If this breaks, decade lines are drawn on every line that crosses a
    /// decade row instead of only on lines at a decade index.
    #[test]
    fn test_decade_lines_only_every_tenth_cell() {
        let diagram = render(&Raster::filled(12, 12, RED).unwrap(), 4).unwrap();
        // Column 4 is the vertical line of cell 1; row 1 is not a line
        assert_eq!(diagram.get(4, 1), Color::gray(225));
        // Column 40 is the vertical line of cell 10
        assert_eq!(diagram.get(40, 1), Color::gray(200));
        // Row 0 is a decade line along its whole length
        assert_eq!(diagram.get(4, 0), Color::gray(200));
        assert_eq!(diagram.get(1, 1), Color::WHITE);
        assert_eq!(diagram.get(42, 42), RED);
    }

    // ========================================================================
    // End to end
    // ========================================================================

    /// Two reds, one blue, one green, two colors: red comes first, blue wins
    /// the tie with green, and green goes to whichever is closer in Oklab.
    #[test]
    fn test_red_blue_green_scenario() {
        let raster = Raster::new(2, 2, vec![RED, RED, BLUE, GREEN]).unwrap();
        let palette = Palette::build(&raster, 2).unwrap();
        assert_eq!(palette.colors(), &[RED, BLUE]);

        let green = Oklab::from(GREEN);
        let to_red = green.distance_squared(Oklab::from(RED));
        let to_blue = green.distance_squared(Oklab::from(BLUE));
        let expected = if to_blue < to_red { 1 } else { 0 };
        // Green sits about 0.27 from red and 0.45 from blue
        assert_eq!(expected, 0);

        let indexed = reassign(&raster, &palette);
        assert_eq!(indexed.indices(), &[0, 0, 1, expected]);
        assert_eq!(palette.find_nearest(BLUE), (1, 0.0));

        let diagram = LatchHook::new(2).run(&raster).unwrap();
        assert_eq!(diagram.legend(), &[(RED, 3), (BLUE, 1)]);
        assert_eq!(diagram.image().get(6, 6), RED);
        assert_eq!(diagram.image().get(2, 6), BLUE);
    }

    /// If this breaks, direct assignment no longer keeps colors that are
    /// already in the palette untouched.
    #[test]
    fn test_direct_assignment_is_identity_for_palette_colors() {
        let raster = noisy(16, 16, 4);
        let palette = Palette::build(&raster, FrequencyTable::analyze(&raster).len()).unwrap();
        assert_eq!(assign_direct(&raster, &palette).to_raster(), raster);
    }

    // ========================================================================
    // Frequency totals
    // ========================================================================

    #[test]
    fn test_frequency_total_is_pixel_count() {
        for (w, h) in [(1, 1), (7, 13), (50, 2)] {
            let table = FrequencyTable::analyze(&noisy(w, h, 6));
            assert_eq!(table.total(), w * h);
            assert_eq!(table.iter().map(|(_, n)| n).sum::<usize>(), w * h);
        }
    }
}
