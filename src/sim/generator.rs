//! Platform generation

use rand::Rng;

use super::state::Platform;
use crate::settings::Settings;

/// Create a platform at world height `y` with a uniformly random x.
///
/// Any `y` is accepted, including arbitrarily far above the viewport.
pub fn generate_platform<R: Rng + ?Sized>(rng: &mut R, settings: &Settings, y: f32) -> Platform {
    let x = rng.random_range(0.0..=settings.max_platform_x());
    Platform::new(x, y, settings.platform_width, settings.platform_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_generated_platform_in_bounds() {
        let settings = Settings::default();
        let mut rng = Pcg32::seed_from_u64(5);
        for i in 0..500 {
            let y = -(i as f32) * 1.0e4;
            let p = generate_platform(&mut rng, &settings, y);
            assert!(p.pos.x >= 0.0 && p.pos.x <= settings.max_platform_x());
            assert_eq!(p.pos.y, y);
            assert_eq!(p.width, settings.platform_width);
            assert_eq!(p.height, settings.platform_height);
        }
    }

    #[test]
    fn test_platform_wider_than_viewport() {
        let settings = Settings {
            viewport_width: 30.0,
            ..Settings::default()
        };
        let mut rng = Pcg32::seed_from_u64(5);
        assert_eq!(generate_platform(&mut rng, &settings, 0.0).pos.x, 0.0);
    }
}
