use serde::{Deserialize, Serialize};

pub const WIDGET_POSITION_KEY: &str = "llyli-widget-position";

pub const REVEAL_SELECTORS: &str = ".layout, .intro-container, .list-container, .text-container";
pub const REVEAL_ANIMATE_CLASS: &str = "animate-on-scroll";
pub const REVEAL_VISIBLE_CLASS: &str = "is-visible";
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub const HEADER_ID: &str = "header";
pub const HEADER_CONTAINER_SELECTOR: &str = ".header-container";
pub const PARALLAX_OPACITY_FALLOFF: f64 = 0.5;
pub const PARALLAX_TRANSLATE_FACTOR: f64 = 0.3;

pub const WIDGET_SELECTOR: &str = ".llyli-widget";
pub const WIDGET_DRAGGING_CLASS: &str = "is-dragging";
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: String,
    pub animate_class: String,
    pub visible_class: String,
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: REVEAL_SELECTORS.to_string(),
            animate_class: REVEAL_ANIMATE_CLASS.to_string(),
            visible_class: REVEAL_VISIBLE_CLASS.to_string(),
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
            threshold: REVEAL_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub header_id: String,
    pub container_selector: String,
    pub opacity_falloff: f64,
    pub translate_factor: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            header_id: HEADER_ID.to_string(),
            container_selector: HEADER_CONTAINER_SELECTOR.to_string(),
            opacity_falloff: PARALLAX_OPACITY_FALLOFF,
            translate_factor: PARALLAX_TRANSLATE_FACTOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub selector: String,
    pub dragging_class: String,
    pub storage_key: String,
    pub drag_threshold_px: f64,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            selector: WIDGET_SELECTOR.to_string(),
            dragging_class: WIDGET_DRAGGING_CLASS.to_string(),
            storage_key: WIDGET_POSITION_KEY.to_string(),
            drag_threshold_px: DRAG_THRESHOLD_PX,
        }
    }
}

/// Selectors, class names and tuning knobs shared by every component.
///
/// Missing fields fall back to the defaults, so a host page only has to
/// spell out what it overrides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    pub reveal: RevealConfig,
    pub anchor_selector: String,
    pub parallax: ParallaxConfig,
    pub widget: WidgetConfig,
    pub dark_class: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            reveal: RevealConfig::default(),
            anchor_selector: ANCHOR_SELECTOR.to_string(),
            parallax: ParallaxConfig::default(),
            widget: WidgetConfig::default(),
            dark_class: DARK_CLASS.to_string(),
        }
    }
}

impl FxConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
