//! Configuration types for layout, providers and rendering.
//!
//! All types implement [`serde::Deserialize`] with defaults for every field,
//! so a configuration file only needs to mention what it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration.
//! - [`LayoutConfig`] - Force constants and cooling schedule of the layout engine.
//! - [`ProviderConfig`] - Target languages requested from the analysis provider.
//! - [`StyleConfig`] - Colors used by the SVG exporter.
//!
//! # Example
//!
//! ```
//! # use lexibubble::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().orbit().antonym_orbit(), 450.0);
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use lexibubble_core::{color::Color, node::NodeKind, word::BubbleColor};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    provider: ProviderConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(layout: LayoutConfig, provider: ProviderConfig, style: StyleConfig) -> Self {
        Self {
            layout,
            provider,
            style,
        }
    }

    /// Returns the layout configuration.
    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Returns the provider configuration.
    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout engine configuration.
///
/// Grouped by force term; see the `layout::forces` module for how each group
/// is used.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    repulsion: RepulsionConfig,
    collision: CollisionConfig,
    centering: CenteringConfig,
    orbit: OrbitConfig,
    cooling: CoolingConfig,
    seeding: SeedingConfig,
}

impl LayoutConfig {
    pub fn repulsion(&self) -> &RepulsionConfig {
        &self.repulsion
    }

    pub fn collision(&self) -> &CollisionConfig {
        &self.collision
    }

    pub fn centering(&self) -> &CenteringConfig {
        &self.centering
    }

    pub fn orbit(&self) -> &OrbitConfig {
        &self.orbit
    }

    pub fn cooling(&self) -> &CoolingConfig {
        &self.cooling
    }

    pub fn seeding(&self) -> &SeedingConfig {
        &self.seeding
    }

    /// Fixes the random seed, making layouts reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seeding.seed = Some(seed);
        self
    }

    /// Replaces the orbit section.
    pub fn with_orbit(mut self, orbit: OrbitConfig) -> Self {
        self.orbit = orbit;
        self
    }

    /// Replaces the cooling section.
    pub fn with_cooling(mut self, cooling: CoolingConfig) -> Self {
        self.cooling = cooling;
        self
    }
}

/// N-body charge repulsion between every pair of nodes.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct RepulsionConfig {
    /// Magnitude of the repulsive charge.
    strength: f32,
    /// Distances below this are treated as this distance.
    min_distance: f32,
}

impl RepulsionConfig {
    pub fn new(strength: f32, min_distance: f32) -> Self {
        Self {
            strength,
            min_distance,
        }
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    pub fn min_distance(&self) -> f32 {
        self.min_distance
    }
}

impl Default for RepulsionConfig {
    fn default() -> Self {
        Self::new(40.0, 1.0)
    }
}

/// Pairwise overlap prevention.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CollisionConfig {
    /// Extra spacing added to every node radius.
    padding: f32,
    /// Relaxation passes per tick.
    passes: usize,
    /// Fraction of the overlap resolved per pass.
    strength: f32,
}

impl CollisionConfig {
    pub fn new(padding: f32, passes: usize, strength: f32) -> Self {
        Self {
            padding,
            passes,
            strength,
        }
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }
}

impl Default for CollisionConfig {
    fn default() -> Self {
        Self::new(4.0, 3, 1.0)
    }
}

/// Per-axis pull toward the canvas center.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CenteringConfig {
    center: f32,
    synonym_base: f32,
    synonym_gain: f32,
    antonym: f32,
}

impl CenteringConfig {
    pub fn new(center: f32, synonym_base: f32, synonym_gain: f32, antonym: f32) -> Self {
        Self {
            center,
            synonym_base,
            synonym_gain,
            antonym,
        }
    }

    /// Centering strength for one node.
    ///
    /// Synonyms are pulled in slightly harder the more similar they are.
    /// Antonyms get a negative strength, pushing them outward.
    pub fn strength(&self, kind: NodeKind, similarity: f32) -> f32 {
        match kind {
            NodeKind::Center => self.center,
            NodeKind::Synonym => self.synonym_gain.mul_add(similarity, self.synonym_base),
            NodeKind::Antonym => self.antonym,
        }
    }
}

impl Default for CenteringConfig {
    fn default() -> Self {
        Self::new(1.0, 0.02, 0.08, -0.05)
    }
}

/// Radial placement: the main encoding of similarity as distance.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    inner_radius: f32,
    spread: f32,
    antonym_orbit: f32,
    strength: f32,
}

impl OrbitConfig {
    pub fn new(inner_radius: f32, spread: f32, antonym_orbit: f32, strength: f32) -> Self {
        Self {
            inner_radius,
            spread,
            antonym_orbit,
            strength,
        }
    }

    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    pub fn spread(&self) -> f32 {
        self.spread
    }

    pub fn antonym_orbit(&self) -> f32 {
        self.antonym_orbit
    }

    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// Target distance from the canvas center for one node.
    ///
    /// # Examples
    ///
    /// ```
    /// # use lexibubble::config::OrbitConfig;
    /// # use lexibubble_core::node::NodeKind;
    /// let orbit = OrbitConfig::default();
    /// assert_eq!(orbit.target_radius(NodeKind::Synonym, 1.0), 120.0);
    /// assert_eq!(orbit.target_radius(NodeKind::Synonym, 0.0), 320.0);
    /// assert_eq!(orbit.target_radius(NodeKind::Antonym, 0.9), 450.0);
    /// ```
    pub fn target_radius(&self, kind: NodeKind, similarity: f32) -> f32 {
        match kind {
            NodeKind::Center => 0.0,
            NodeKind::Synonym => (1.0 - similarity).mul_add(self.spread, self.inner_radius),
            NodeKind::Antonym => self.antonym_orbit,
        }
    }
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self::new(120.0, 200.0, 450.0, 0.4)
    }
}

/// Damping and the global temperature schedule.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct CoolingConfig {
    /// Fraction of velocity lost per tick.
    velocity_decay: f32,
    /// Fraction of the remaining temperature lost per tick.
    alpha_decay: f32,
    /// Temperature below which the run has converged.
    alpha_min: f32,
    /// Hard cap on ticks per run.
    max_ticks: u64,
}

impl CoolingConfig {
    pub fn new(velocity_decay: f32, alpha_decay: f32, alpha_min: f32, max_ticks: u64) -> Self {
        Self {
            velocity_decay,
            alpha_decay,
            alpha_min,
            max_ticks,
        }
    }

    pub fn velocity_decay(&self) -> f32 {
        self.velocity_decay
    }

    pub fn alpha_decay(&self) -> f32 {
        self.alpha_decay
    }

    pub fn alpha_min(&self) -> f32 {
        self.alpha_min
    }

    pub fn max_ticks(&self) -> u64 {
        self.max_ticks
    }
}

impl Default for CoolingConfig {
    fn default() -> Self {
        Self::new(0.35, 0.015, 0.001, 1000)
    }
}

/// Initial placement of satellites.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct SeedingConfig {
    /// Multiplier applied to the provider's [-100, 100] position hint.
    hint_scale: f32,
    /// Maximum random offset added to every seed, per axis.
    jitter: f32,
    /// Fixed RNG seed; `None` draws one from the OS.
    seed: Option<u64>,
}

impl SeedingConfig {
    pub fn hint_scale(&self) -> f32 {
        self.hint_scale
    }

    pub fn jitter(&self) -> f32 {
        self.jitter
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for SeedingConfig {
    fn default() -> Self {
        Self {
            hint_scale: 1.5,
            jitter: 2.0,
            seed: None,
        }
    }
}

/// Languages requested from the analysis provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    languages: Vec<String>,
}

impl ProviderConfig {
    pub fn new(languages: Vec<String>) -> Self {
        Self { languages }
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(
            ["es", "fr", "de", "pt", "it"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

/// Visual styling configuration for rendered snapshots.
///
/// Every color is a CSS color string; unset colors fall back to the built-in
/// palette.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    center_color: Option<String>,
    yellow: Option<String>,
    orange: Option<String>,
    red: Option<String>,
    dark: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the fill color for a bubble of the given kind and class.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured override cannot be parsed.
    pub fn fill_color(&self, kind: NodeKind, bubble: BubbleColor) -> Result<Color, String> {
        let (configured, fallback) = if kind.is_center() {
            (self.center_color.as_deref(), Color::center())
        } else {
            let configured = match bubble {
                BubbleColor::Yellow => self.yellow.as_deref(),
                BubbleColor::Orange => self.orange.as_deref(),
                BubbleColor::Red => self.red.as_deref(),
                BubbleColor::Dark => self.dark.as_deref(),
            };
            (configured, Color::for_bubble(bubble))
        };

        configured
            .map(Color::new)
            .transpose()
            .map(|color| color.unwrap_or(fallback))
            .map_err(|err| format!("Invalid bubble color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centering_strengths() {
        let centering = CenteringConfig::default();
        assert_eq!(centering.strength(NodeKind::Center, 1.0), 1.0);
        assert!(centering.strength(NodeKind::Synonym, 0.9) > centering.strength(NodeKind::Synonym, 0.1));
        assert!(centering.strength(NodeKind::Synonym, 1.0) <= 0.4);
        assert!(centering.strength(NodeKind::Antonym, 0.5) < 0.0);
    }

    #[test]
    fn test_orbit_is_inverse_to_similarity() {
        let orbit = OrbitConfig::default();
        let close = orbit.target_radius(NodeKind::Synonym, 0.9);
        let far = orbit.target_radius(NodeKind::Synonym, 0.6);
        assert!((close - 140.0).abs() < 1e-3);
        assert!((far - 200.0).abs() < 1e-3);
        assert_eq!(orbit.target_radius(NodeKind::Center, 1.0), 0.0);
    }

    #[test]
    fn test_layout_builders() {
        let layout = LayoutConfig::default()
            .with_orbit(OrbitConfig::new(100.0, 150.0, 600.0, 0.5))
            .with_seed(3);

        assert_eq!(layout.orbit().antonym_orbit(), 600.0);
        assert_eq!(layout.orbit().target_radius(NodeKind::Synonym, 0.0), 250.0);
        assert_eq!(layout.seeding().seed(), Some(3));
        assert_eq!(layout.cooling().max_ticks(), 1000);
    }

    #[test]
    fn test_style_fallbacks_and_overrides() {
        let style = StyleConfig {
            red: Some("purple".to_string()),
            ..StyleConfig::default()
        };

        assert_eq!(
            style.fill_color(NodeKind::Synonym, BubbleColor::Red).unwrap(),
            Color::new("purple").unwrap()
        );
        assert_eq!(
            style.fill_color(NodeKind::Antonym, BubbleColor::Dark).unwrap(),
            Color::for_bubble(BubbleColor::Dark)
        );
        assert_eq!(
            style.fill_color(NodeKind::Center, BubbleColor::Red).unwrap(),
            Color::center()
        );
    }

    #[test]
    fn test_invalid_style_color() {
        let style = StyleConfig {
            background_color: Some("no-such-color".to_string()),
            ..StyleConfig::default()
        };
        assert!(style.background_color().is_err());
    }

    #[test]
    fn test_default_languages() {
        let provider = ProviderConfig::default();
        assert_eq!(provider.languages(), ["es", "fr", "de", "pt", "it"]);
    }
}
