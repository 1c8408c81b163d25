use cgmath::{MetricSpace, Point2};

use super::transform::GestureTransform;

/// Net horizontal travel (logical px) needed for a swipe to navigate
pub const SWIPE_THRESHOLD: f32 = 50.0;
/// Scale change per pixel of pinch distance change
pub const PINCH_SENSITIVITY: f32 = 1.0 / 300.0;
/// Scale change per unit of wheel delta
pub const WHEEL_SENSITIVITY: f32 = 0.0015;

/// Which contact an input belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Finger(u64),
}

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Raw input, already translated out of the host toolkit's event types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Pressed { id: PointerId, position: Point2<f32> },
    Moved { id: PointerId, position: Point2<f32> },
    Released { id: PointerId, position: Point2<f32> },
    /// Contact lost without a proper release (e.g., touch cancelled)
    Cancelled { id: PointerId },
    Wheel { delta_y: f32 },
    /// Double-click or double-tap
    DoubleTap,
    Key(NavKey),
}

/// Discrete navigation request emitted towards the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    Close,
}

/// Turns input for one displayed photo into a transform and intents.
///
/// The engine is single-writer over its transform. It never navigates on
/// its own; navigation is requested through the returned [`Intent`].
#[derive(Debug, Clone, Default)]
pub struct GestureEngine {
    transform: GestureTransform,
    /// Contacts currently down, in press order
    contacts: Vec<(PointerId, Point2<f32>)>,
    /// Where the current single-contact sequence started. Cleared once a
    /// second contact lands, so a pinch never ends in a swipe.
    swipe_origin: Option<Point2<f32>>,
    /// Distance between the two pinch contacts on the previous frame
    pinch_distance: Option<f32>,
}

impl GestureEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> &GestureTransform {
        &self.transform
    }

    /// True while two or more contacts are down
    pub fn is_pinching(&self) -> bool {
        self.contacts.len() >= 2
    }

    /// Feed one input event; returns an intent when the input asks for
    /// navigation.
    pub fn handle(&mut self, input: Input) -> Option<Intent> {
        match input {
            Input::Pressed { id, position } => {
                self.press(id, position);
                None
            }
            Input::Moved { id, position } => {
                self.motion(id, position);
                None
            }
            Input::Released { id, position } => self.release(id, position),
            Input::Cancelled { id } => {
                self.remove(id);
                if self.contacts.is_empty() {
                    self.swipe_origin = None;
                }
                None
            }
            Input::Wheel { delta_y } => {
                self.transform.zoom_by(-delta_y * WHEEL_SENSITIVITY);
                None
            }
            Input::DoubleTap => {
                self.transform.reset();
                None
            }
            Input::Key(key) => Some(match key {
                NavKey::ArrowRight => Intent::Next,
                NavKey::ArrowLeft => Intent::Previous,
                NavKey::Escape => Intent::Close,
            }),
        }
    }

    fn press(&mut self, id: PointerId, position: Point2<f32>) {
        if let Some(contact) = self.contacts.iter_mut().find(|(c, _)| *c == id) {
            contact.1 = position;
            return;
        }

        self.contacts.push((id, position));

        if self.contacts.len() == 1 {
            self.swipe_origin = Some(position);
        } else {
            self.swipe_origin = None;
            self.pinch_distance = self.contact_distance();
        }
    }

    fn motion(&mut self, id: PointerId, position: Point2<f32>) {
        let Some(index) = self.contacts.iter().position(|(c, _)| *c == id) else {
            // Hover without a press
            return;
        };
        let previous = std::mem::replace(&mut self.contacts[index].1, position);

        if self.is_pinching() {
            // Only the first two contacts drive the pinch
            if index > 1 {
                return;
            }
            let distance = self.contact_distance();
            if let (Some(last), Some(current)) = (self.pinch_distance, distance) {
                self.transform.zoom_by((current - last) * PINCH_SENSITIVITY);
            }
            self.pinch_distance = distance;
        } else if self.transform.is_zoomed() {
            self.transform.pan_by(position - previous);
        }
    }

    fn release(&mut self, id: PointerId, position: Point2<f32>) -> Option<Intent> {
        if !self.remove(id) {
            return None;
        }

        match self.contacts.len() {
            0 => {
                let origin = self.swipe_origin.take()?;
                if self.transform.is_zoomed() {
                    return None;
                }
                swipe_intent(position.x - origin.x)
            }
            1 => {
                self.pinch_distance = None;
                None
            }
            _ => {
                self.pinch_distance = self.contact_distance();
                None
            }
        }
    }

    fn remove(&mut self, id: PointerId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|(c, _)| *c != id);
        self.contacts.len() != before
    }

    fn contact_distance(&self) -> Option<f32> {
        match self.contacts.as_slice() {
            [(_, a), (_, b), ..] => Some(a.distance(*b)),
            _ => None,
        }
    }
}

/// Leftward travel means "show the next photo", rightward the previous one
fn swipe_intent(dx: f32) -> Option<Intent> {
    if dx < -SWIPE_THRESHOLD {
        Some(Intent::Next)
    } else if dx > SWIPE_THRESHOLD {
        Some(Intent::Previous)
    } else {
        None
    }
}
