/// Zoom/pan transform for the photo shown in the lightbox
///
/// Exactly one transform is live at a time, owned by the gesture engine of
/// the displayed photo. It is thrown away whenever the photo changes.
use cgmath::Vector2;

/// Smallest allowed scale (fit to viewport)
pub const MIN_SCALE: f32 = 1.0;
/// Largest allowed scale
pub const MAX_SCALE: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTransform {
    /// Zoom factor, always within [MIN_SCALE, MAX_SCALE]
    scale: f32,
    /// Pan offset in logical pixels
    offset: Vector2<f32>,
}

impl Default for GestureTransform {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            offset: Vector2::new(0.0, 0.0),
        }
    }
}

impl GestureTransform {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translate_x(&self) -> f32 {
        self.offset.x
    }

    pub fn translate_y(&self) -> f32 {
        self.offset.y
    }

    /// True when the image is shown above fit size
    pub fn is_zoomed(&self) -> bool {
        self.scale > MIN_SCALE
    }

    /// Check if this is the untouched transform
    #[cfg(test)]
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// Add `delta` to the scale and clamp. NaN deltas are ignored.
    pub fn zoom_by(&mut self, delta: f32) {
        if delta.is_nan() {
            return;
        }
        self.scale = (self.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Move the image 1:1 with the pointer
    pub fn pan_by(&mut self, delta: Vector2<f32>) {
        self.offset += delta;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let transform = GestureTransform::default();
        assert!(transform.is_identity());
        assert!(!transform.is_zoomed());
        assert_eq!(transform.scale(), 1.0);
    }

    #[test]
    fn test_zoom_is_clamped() {
        let mut transform = GestureTransform::default();

        transform.zoom_by(10.0);
        assert_eq!(transform.scale(), MAX_SCALE);

        transform.zoom_by(-100.0);
        assert_eq!(transform.scale(), MIN_SCALE);

        transform.zoom_by(f32::INFINITY);
        assert_eq!(transform.scale(), MAX_SCALE);

        transform.zoom_by(f32::NAN);
        assert_eq!(transform.scale(), MAX_SCALE);
    }

    #[test]
    fn test_reset() {
        let mut transform = GestureTransform::default();
        transform.zoom_by(1.5);
        transform.pan_by(Vector2::new(12.0, -4.0));
        assert!(!transform.is_identity());

        transform.reset();
        assert!(transform.is_identity());
    }
}
