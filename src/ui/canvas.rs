use iced::advanced::image::Renderer as _;
use iced::mouse::{self, Cursor};
use iced::touch;
use iced::widget::canvas::{self, Program};
use iced::widget::image::Handle;
use iced::{Point, Rectangle, Renderer, Size, Theme, Vector};
use std::collections::HashSet;
use std::time::{Duration, Instant};

use crate::state::gesture::{Input, PointerId};
use crate::state::transform::GestureTransform;
use crate::Message;

/// Two taps closer than this count as a double-click / double-tap
const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(350);
/// Largest press-to-release travel that still counts as a tap
const TAP_SLOP: f32 = 10.0;
/// Largest gap between the two taps of a double-tap
const DOUBLE_TAP_DISTANCE: f32 = 30.0;
/// Pixel equivalent of one wheel "line"
const WHEEL_LINE_PX: f32 = 100.0;

/// Canvas showing the lightbox photo at its gesture transform.
///
/// The canvas bounds are the image region: presses inside are captured
/// here and never reach the backdrop behind it.
pub struct PhotoView {
    pub handle: Handle,
    pub transform: GestureTransform,
}

impl Program<Message> for PhotoView {
    type State = PointerState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let size = renderer.measure_image(&self.handle);
        if size.width == 0 || size.height == 0 {
            // Not decoded yet, or missing on disk
            return vec![frame.into_geometry()];
        }

        let target = fitted_rect(
            bounds.size(),
            Size::new(size.width as f32, size.height as f32),
            &self.transform,
        );

        frame.with_clip(Rectangle::with_size(bounds.size()), |frame| {
            frame.draw_image(target, &self.handle);
        });

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match state.handle(event, bounds, cursor, Instant::now()) {
            Some(input) => (canvas::event::Status::Captured, Some(Message::Gesture(input))),
            None => (canvas::event::Status::Ignored, None),
        }
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.mouse_down && self.transform.is_zoomed() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Per-canvas pointer bookkeeping
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub mouse_down: bool,
    pub last_position: Option<Point>,
    /// Touch contacts that started inside the canvas
    pub fingers: HashSet<u64>,
    /// Where and when the current single-pointer press started
    press: Option<Tap>,
    /// Last completed tap; a quick nearby press turns it into a double-tap
    last_tap: Option<Tap>,
}

#[derive(Debug, Clone, Copy)]
struct Tap {
    at: Instant,
    position: Point,
}

impl PointerState {
    /// Translate one canvas event into engine input, or `None` when the
    /// event does not concern this canvas.
    fn handle(
        &mut self,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: Cursor,
        now: Instant,
    ) -> Option<Input> {
        let input = match event {
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                if !cursor.is_over(bounds) {
                    return None;
                }
                // Wheel up (positive y) zooms in
                let delta_y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PX,
                    mouse::ScrollDelta::Pixels { y, .. } => -y,
                };
                Input::Wheel { delta_y }
            }

            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let position = cursor.position_over(bounds)?;
                if self.press_starts_double_tap(position, now) {
                    Input::DoubleTap
                } else {
                    self.mouse_down = true;
                    self.last_position = Some(position);
                    Input::Pressed { id: PointerId::Mouse, position: to_point(position) }
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                if !self.mouse_down {
                    return None;
                }
                self.last_position = Some(position);
                Input::Moved { id: PointerId::Mouse, position: to_point(position) }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                if !self.mouse_down {
                    return None;
                }
                self.mouse_down = false;
                let position = cursor.position().or(self.last_position.take())?;
                self.finish_press(position);
                Input::Released { id: PointerId::Mouse, position: to_point(position) }
            }

            canvas::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if !bounds.contains(position) || !self.fingers.insert(id.0) {
                    return None;
                }
                if self.fingers.len() > 1 {
                    // A second contact makes this a pinch, never a tap
                    self.press = None;
                    self.last_tap = None;
                    Input::Pressed { id: PointerId::Finger(id.0), position: to_point(position) }
                } else if self.press_starts_double_tap(position, now) {
                    Input::DoubleTap
                } else {
                    Input::Pressed { id: PointerId::Finger(id.0), position: to_point(position) }
                }
            }

            canvas::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if !self.fingers.contains(&id.0) {
                    return None;
                }
                Input::Moved { id: PointerId::Finger(id.0), position: to_point(position) }
            }

            canvas::Event::Touch(touch::Event::FingerLifted { id, position }) => {
                if !self.fingers.remove(&id.0) {
                    return None;
                }
                if self.fingers.is_empty() {
                    self.finish_press(position);
                }
                Input::Released { id: PointerId::Finger(id.0), position: to_point(position) }
            }

            canvas::Event::Touch(touch::Event::FingerLost { id, .. }) => {
                if !self.fingers.remove(&id.0) {
                    return None;
                }
                self.press = None;
                Input::Cancelled { id: PointerId::Finger(id.0) }
            }

            _ => return None,
        };

        Some(input)
    }

    /// True when a press at `position` completes a double-tap. Otherwise the
    /// press is remembered so its release can arm the next one.
    fn press_starts_double_tap(&mut self, position: Point, now: Instant) -> bool {
        let previous = self.last_tap.take();
        self.press = None;

        if let Some(tap) = previous {
            if now.duration_since(tap.at) <= DOUBLE_TAP_THRESHOLD
                && tap.position.distance(position) <= DOUBLE_TAP_DISTANCE
            {
                return true;
            }
        }

        self.press = Some(Tap { at: now, position });
        false
    }

    /// Only a release close to its press counts as a tap; drags do not arm
    /// a double-tap.
    fn finish_press(&mut self, position: Point) {
        self.last_tap = self
            .press
            .take()
            .filter(|press| press.position.distance(position) <= TAP_SLOP);
    }
}

fn to_point(position: Point) -> cgmath::Point2<f32> {
    cgmath::Point2::new(position.x, position.y)
}

/// Rectangle (in canvas coordinates) where the photo is drawn: fit inside
/// the canvas, scaled around the centre, then shifted by the pan offset.
pub fn fitted_rect(canvas: Size, image: Size, transform: &GestureTransform) -> Rectangle {
    let fit = (canvas.width / image.width).min(canvas.height / image.height);
    let size = Size::new(
        image.width * fit * transform.scale(),
        image.height * fit * transform.scale(),
    );

    let center = Point::new(canvas.width / 2.0, canvas.height / 2.0)
        + Vector::new(transform.translate_x(), transform.translate_y());

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}
