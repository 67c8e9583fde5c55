//! Shade Generation
//!
//! Produces an ordered run of lighter variants of a paint color, from the base
//! color itself up to pure white, interpolated in Lab so consecutive steps
//! look evenly spaced. The same routine feeds both the palette preview
//! gradients and the selectable shade grid.

use serde::{Deserialize, Serialize};
use crate::color::{interpolate_lab, to_lab, to_rgb, Color, WHITE_LAB};
use crate::error::{Result, WallTintError};

/// Number of shades offered per paint color
pub const DEFAULT_SHADE_STEPS: usize = 10;

// ============================================================================
// SETTINGS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShadeSettings {
    /// Number of shades from base color to white, inclusive (default: 10)
    pub steps: usize,
}

impl Default for ShadeSettings {
    fn default() -> Self {
        Self { steps: DEFAULT_SHADE_STEPS }
    }
}

// ============================================================================
// SHADE SEQUENCE
// ============================================================================

/// Ordered shades, darkest (the base color) first, white last
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadeSequence {
    base: Color,
    shades: Vec<Color>,
}

impl ShadeSequence {
    pub fn base(&self) -> Color {
        self.base
    }

    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shades.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.shades.get(index).copied()
    }

    pub fn first(&self) -> Option<Color> {
        self.shades.first().copied()
    }

    pub fn last(&self) -> Option<Color> {
        self.shades.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.shades.iter().copied()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.shades
    }

    /// `#rrggbb` stops, e.g. for a CSS `linear-gradient`
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.shades.iter().map(Color::to_hex).collect()
    }
}

impl std::ops::Index<usize> for ShadeSequence {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.shades[index]
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// Generate `steps` shades between `base` and white.
///
/// Shade i sits at t = i / (steps - 1) on the straight Lab line from the base
/// color to white, so lightness never decreases along the sequence. A single
/// step yields just the base color.
pub fn generate(base: Color, steps: usize) -> Result<ShadeSequence> {
    if steps == 0 {
        return Err(WallTintError::InvalidParameter(
            "Shade steps must be at least 1".to_string(),
        ));
    }

    if steps == 1 {
        return Ok(ShadeSequence { base, shades: vec![base] });
    }

    let base_lab = to_lab(base);
    let last = (steps - 1) as f32;

    let shades = (0..steps)
        .map(|i| to_rgb(interpolate_lab(base_lab, WHITE_LAB, i as f32 / last)))
        .collect();

    Ok(ShadeSequence { base, shades })
}

/// Generate using configured settings
pub fn generate_with(base: Color, settings: &ShadeSettings) -> Result<ShadeSequence> {
    generate(base, settings.steps)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::delta_e76;
    use crate::paints::DEFAULT_PALETTE;

    fn test_bases() -> Vec<Color> {
        let mut bases: Vec<Color> = DEFAULT_PALETTE.iter().map(|(_, color)| *color).collect();
        bases.extend([Color::BLACK, Color::WHITE, Color::new(200, 200, 200), Color::new(0, 0, 255)]);
        bases
    }

    #[test]
    fn test_endpoints() {
        for base in test_bases() {
            let shades = generate(base, DEFAULT_SHADE_STEPS).unwrap();
            assert_eq!(shades.len(), 10);
            assert!(shades[0].max_channel_diff(&base) <= 1, "First shade {} != base {}", shades[0], base);
            assert!(shades[9].max_channel_diff(&Color::WHITE) <= 1, "Last shade {} != white", shades[9]);
        }
    }

    #[test]
    fn test_lightness_non_decreasing() {
        for base in test_bases() {
            let shades = generate(base, DEFAULT_SHADE_STEPS).unwrap();
            let lightness: Vec<f32> = shades.iter().map(|c| to_lab(c).l).collect();
            for pair in lightness.windows(2) {
                assert!(pair[0] <= pair[1], "Lightness decreased for {}: {:?}", base, lightness);
            }
        }
    }

    #[test]
    fn test_steps_evenly_spaced() {
        let base = Color::from_hex("#2196F3").unwrap();
        let shades = generate(base, DEFAULT_SHADE_STEPS).unwrap();
        let labs: Vec<_> = shades.iter().map(to_lab).collect();
        let gaps: Vec<f32> = labs.windows(2).map(|w| delta_e76(w[0], w[1])).collect();

        let mean = gaps.iter().sum::<f32>() / gaps.len() as f32;
        for gap in &gaps {
            assert!((gap - mean).abs() < 2.0, "Uneven gaps: {:?}", gaps);
        }
    }

    #[test]
    fn test_deterministic() {
        let base = Color::new(96, 125, 139);
        assert_eq!(generate(base, 10).unwrap(), generate(base, 10).unwrap());
    }

    #[test]
    fn test_step_count_edge_cases() {
        assert!(matches!(generate(Color::BLACK, 0), Err(WallTintError::InvalidParameter(_))));

        let single = generate(Color::new(12, 34, 56), 1).unwrap();
        assert_eq!(single.as_slice(), &[Color::new(12, 34, 56)]);

        let pair = generate(Color::new(12, 34, 56), 2).unwrap();
        assert!(pair[0].max_channel_diff(&Color::new(12, 34, 56)) <= 1);
        assert_eq!(pair.last(), Some(Color::WHITE));
    }

    #[test]
    fn test_hex_strings() {
        let shades = generate(Color::WHITE, 3).unwrap();
        assert_eq!(shades.to_hex_strings(), vec!["#ffffff", "#ffffff", "#ffffff"]);
        assert_eq!(generate_with(Color::WHITE, &ShadeSettings::default()).unwrap().len(), 10);
    }
}
