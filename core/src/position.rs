use serde::{Deserialize, Serialize};

use crate::drag::Point;

#[derive(Debug, thiserror::Error)]
pub enum PositionError {
    #[error("widget position is not valid json: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("widget position is not finite")]
    NotFinite,
}

/// Persisted top-left of the floating widget, in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WidgetPosition {
    pub x: f64,
    pub y: f64,
}

impl WidgetPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn parse(raw: &str) -> Result<Self, PositionError> {
        let position: WidgetPosition = serde_json::from_str(raw)?;
        if !position.x.is_finite() || !position.y.is_finite() {
            return Err(PositionError::NotFinite);
        }
        Ok(position)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn left_px(&self) -> String {
        format!("{}px", self.x)
    }

    pub fn top_px(&self) -> String {
        format!("{}px", self.y)
    }
}

impl From<Point> for WidgetPosition {
    fn from(point: Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<WidgetPosition> for Point {
    fn from(position: WidgetPosition) -> Self {
        Point::new(position.x, position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integer_and_float_coordinates() {
        assert_eq!(
            WidgetPosition::parse(r#"{"x":42,"y":17.5}"#).unwrap(),
            WidgetPosition::new(42.0, 17.5)
        );
    }

    #[test]
    fn ignores_extra_fields() {
        let raw = r#"{"x":1,"y":2,"width":30}"#;
        assert_eq!(WidgetPosition::parse(raw).unwrap(), WidgetPosition::new(1.0, 2.0));
    }

    #[test]
    fn rejects_garbage_and_missing_axes() {
        assert!(matches!(
            WidgetPosition::parse("not json"),
            Err(PositionError::Malformed(_))
        ));
        assert!(WidgetPosition::parse(r#"{"x":1}"#).is_err());
        assert!(WidgetPosition::parse(r#"{"x":"1","y":2}"#).is_err());
        assert!(WidgetPosition::parse("null").is_err());
    }

    #[test]
    fn pixel_strings() {
        let position = WidgetPosition::new(42.0, 17.25);
        assert_eq!(position.left_px(), "42px");
        assert_eq!(position.top_px(), "17.25px");
    }
}
