//! Plate rendering.
//!
//! A plate shows an image as it would print with two inks plus their paint
//! mix. The image is separated around `first`, the mix and `second`; the
//! three masks are then folded back into a single flat image.

use image::RgbaImage;

use crate::config::{InkPair, PlatesConfig};
use crate::error::Result;
use crate::output::{plural, Printer};
use crate::types::{paint_mix_with, Colour, MixAngle};

use super::composite::overlay;
use super::separate::{count_opaque, Separator, ThresholdMode};

/// Runs the separate-and-recompose chain for one or more ink pairs.
pub struct Pipeline<'a> {
    printer: &'a Printer,
    mode: ThresholdMode,
    angle: MixAngle,
}

impl<'a> Pipeline<'a> {
    pub fn new(printer: &'a Printer) -> Self {
        Self {
            printer,
            mode: ThresholdMode::default(),
            angle: MixAngle::default(),
        }
    }

    pub fn with_mode(mut self, mode: ThresholdMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_mix_angle(mut self, angle: MixAngle) -> Self {
        self.angle = angle;
        self
    }

    /// Render one plate for the ink pair `first` / `second`.
    pub fn plate(
        &self,
        image: &RgbaImage,
        threshold: u8,
        first: Colour,
        second: Colour,
    ) -> Result<RgbaImage> {
        let mix = paint_mix_with(first, second, self.angle);
        self.printer
            .debug("Mixing", &format!("{} + {} -> {}", first, second, mix));

        let separator = Separator::new(first, mix, second, threshold).with_mode(self.mode);
        let (first_mask, mix_mask, second_mask) = separator.separate(image);

        if self.printer.is_verbose() {
            for (colour, mask) in [
                (first, &first_mask),
                (mix, &mix_mask),
                (second, &second_mask),
            ] {
                let count = count_opaque(mask);
                self.printer.debug(
                    "Separated",
                    &format!("{} into {}", plural(count, "pixel", "pixels"), colour),
                );
            }
        }

        // The mix pixels are first claimed by `first`, then repainted as the
        // mix once `second` has been laid down.
        let folded = overlay(&first_mask, &mix_mask, first)?;
        let folded = overlay(&folded, &second_mask, second)?;
        overlay(&folded, &mix_mask, mix)
    }

    /// Render one plate per configured ink pair, in configuration order.
    pub fn render(&self, image: &RgbaImage, config: &PlatesConfig) -> Result<Vec<RgbaImage>> {
        config
            .plates
            .iter()
            .map(|&InkPair { first, second }| self.plate(image, config.threshold, first, second))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::paint_mix;
    use image::Rgba;

    const BLUE: Colour = Colour::rgb(0, 0, 255);
    const RED: Colour = Colour::rgb(255, 0, 0);
    const YELLOW: Colour = Colour::rgb(255, 255, 0);

    fn photo(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| {
            Rgba([
                (x * 37 % 256) as u8,
                (y * 53 % 256) as u8,
                ((x * y + 11) % 256) as u8,
                255,
            ])
        })
    }

    #[test]
    fn test_blue_pixel_with_blue_and_white_inks() {
        let printer = Printer::silent();
        let image = RgbaImage::from_pixel(1, 1, BLUE.into());

        let plate = Pipeline::new(&printer)
            .plate(&image, 255, BLUE, Colour::WHITE)
            .unwrap();

        assert_eq!(plate.dimensions(), (1, 1));
        assert_eq!(Colour::from(*plate.get_pixel(0, 0)), BLUE);
    }

    #[test]
    fn test_each_bucket_gets_its_ink() {
        let printer = Printer::silent();
        let mix = paint_mix(RED, YELLOW);
        let image = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => RED.into(),
            1 => mix.into(),
            _ => YELLOW.into(),
        });

        let plate = Pipeline::new(&printer)
            .plate(&image, 255, RED, YELLOW)
            .unwrap();

        assert_eq!(Colour::from(*plate.get_pixel(0, 0)), RED);
        assert_eq!(Colour::from(*plate.get_pixel(1, 0)), mix);
        assert_eq!(Colour::from(*plate.get_pixel(2, 0)), YELLOW);
    }

    #[test]
    fn test_plate_only_contains_inks_or_transparency() {
        let printer = Printer::silent();
        let image = photo(24, 16);

        for mode in [ThresholdMode::Widened, ThresholdMode::Wrapping] {
            for pair in PlatesConfig::default().plates {
                let plate = Pipeline::new(&printer)
                    .with_mode(mode)
                    .plate(&image, 120, pair.first, pair.second)
                    .unwrap();
                let mix = paint_mix(pair.first, pair.second);
                let allowed = [pair.first, pair.second, mix, Colour::TRANSPARENT];

                assert_eq!(plate.dimensions(), image.dimensions());
                for pixel in plate.pixels() {
                    assert!(allowed.contains(&Colour::from(*pixel)), "{:?}", pixel);
                }
            }
        }
    }

    #[test]
    fn test_render_follows_config_order() {
        let printer = Printer::silent();
        let image = photo(5, 4);
        let config = PlatesConfig::default();

        let plates = Pipeline::new(&printer).render(&image, &config).unwrap();

        assert_eq!(plates.len(), config.plates.len());
        for (plate, pair) in plates.iter().zip(&config.plates) {
            let single = Pipeline::new(&printer)
                .plate(&image, config.threshold, pair.first, pair.second)
                .unwrap();
            assert_eq!(plate, &single);
        }
    }

    #[test]
    fn test_truncated_angle_changes_the_mix_ink() {
        let printer = Printer::silent();
        let cyan = Colour::rgb(16, 255, 255);
        let magenta = Colour::rgb(255, 0, 255);
        let legacy_mix = Colour::rgb(7, 8, 255);
        let image = RgbaImage::from_pixel(1, 1, legacy_mix.into());

        let plate = Pipeline::new(&printer)
            .with_mix_angle(MixAngle::Truncated)
            .plate(&image, 255, cyan, magenta)
            .unwrap();
        assert_eq!(Colour::from(*plate.get_pixel(0, 0)), legacy_mix);
    }

    #[test]
    fn test_verbose_printer_does_not_change_output() {
        let quiet = Printer::silent();
        let verbose = Printer::new(true);
        let image = photo(6, 6);

        let a = Pipeline::new(&quiet).plate(&image, 200, RED, YELLOW).unwrap();
        let b = Pipeline::new(&verbose).plate(&image, 200, RED, YELLOW).unwrap();
        assert_eq!(a, b);
    }
}
