use crate::config::{ParallaxConfig, PARALLAX_OPACITY_FALLOFF, PARALLAX_TRANSLATE_FACTOR};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxParams {
    pub opacity_falloff: f64,
    pub translate_factor: f64,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            opacity_falloff: PARALLAX_OPACITY_FALLOFF,
            translate_factor: PARALLAX_TRANSLATE_FACTOR,
        }
    }
}

impl From<&ParallaxConfig> for ParallaxParams {
    fn from(config: &ParallaxConfig) -> Self {
        Self {
            opacity_falloff: config.opacity_falloff,
            translate_factor: config.translate_factor,
        }
    }
}

impl ParallaxParams {
    pub fn style_at(&self, offset: f64, header_height: f64) -> ParallaxStyle {
        ParallaxStyle {
            opacity: 1.0 - (offset / header_height) * self.opacity_falloff,
            translate_y: offset * self.translate_factor,
        }
    }

    /// The style to apply this frame, or `None` once the header has scrolled
    /// out of view. Values are derived from the absolute offset, so a later
    /// frame back inside the header picks up where it should.
    pub fn update(&self, offset: f64, header_height: f64) -> Option<ParallaxStyle> {
        if header_height <= 0.0 || offset >= header_height {
            return None;
        }
        Some(self.style_at(offset, header_height))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxStyle {
    pub opacity: f64,
    pub translate_y: f64,
}

impl ParallaxStyle {
    pub fn at(offset: f64, header_height: f64) -> Self {
        ParallaxParams::default().style_at(offset, header_height)
    }

    pub fn opacity_value(&self) -> String {
        format!("{}", self.opacity)
    }

    pub fn transform_value(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

pub fn parallax_update(offset: f64, header_height: f64) -> Option<ParallaxStyle> {
    ParallaxParams::default().update(offset, header_height)
}

/// Coalesces scroll bursts into one recomputation per animation frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGate {
    ticking: bool,
}

impl FrameGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the caller should schedule a frame; `false` when
    /// one is already pending.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn complete(&mut self) {
        self.ticking = false;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }
}
