pub mod anchor;
pub mod config;
pub mod drag;
pub mod env;
pub mod parallax;
pub mod position;
pub mod reveal;
pub mod storage;

pub use anchor::{classify_href, decide, AnchorAction, AnchorHref};
pub use config::{FxConfig, ParallaxConfig, RevealConfig, WidgetConfig, WIDGET_POSITION_KEY};
pub use drag::{clamp_to_viewport, DragMachine, DragState, GestureEnd, Point, Size};
pub use env::Capabilities;
pub use parallax::{parallax_update, FrameGate, ParallaxParams, ParallaxStyle};
pub use position::{PositionError, WidgetPosition};
pub use reveal::{IntersectionSample, RevealTargetId, RevealTracker};
pub use storage::{KeyValueStore, MemoryStore, StorageError, WidgetPositionStore};
