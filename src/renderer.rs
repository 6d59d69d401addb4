//! The analog clock renderer.
//!
//! [`ClockRenderer`] owns a palette and the face geometry for the last known
//! surface size. It draws into any [`Surface`] and never starts threads or
//! timers: each [`ClockRenderer::draw`] returns a [`Frame`] telling the host
//! how soon the next frame is needed.

use crate::constants::{
    HAND_TAIL_RATIO, HOURS_ON_DIAL, HOUR_HAND_WIDTH_RATIO, LONG_HAND_RATIO,
    MINUTES_PER_REVOLUTION, MINUTE_HAND_WIDTH_RATIO, REDRAW_INTERVAL, SCALE_DOT_RATIO,
    SCALE_PADDING_RATIO, SECOND_HAND_WIDTH_RATIO, SHORT_HAND_RATIO, SMALL_DOT_RATIO,
    TEXT_PADDING_RATIO, TEXT_SIZE_RATIO,
};
use crate::geometry::{get_angle, is_major_tick, numeral_angle, ClockMoment, FaceGeometry};
use crate::surface::Surface;
use crate::types::{Argb, ClockElement, ClockStyle, Padding, Palette, PaletteState, Point};
use std::time::Duration;

/// Result of a draw call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Nothing was drawn because the surface has no usable area
    Skipped,
    /// The face was drawn; the host should draw again within the given time
    Drawn {
        /// Longest acceptable delay before the next draw
        redraw_within: Duration,
    },
}

impl Frame {
    /// Delay before the next draw, if one is needed.
    pub fn redraw_within(&self) -> Option<Duration> {
        match self {
            Frame::Skipped => None,
            Frame::Drawn { redraw_within } => Some(*redraw_within),
        }
    }
}

/// Renders one analog clock face.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockRenderer {
    palette: Palette,
    geometry: Option<FaceGeometry>,
}

/// One hand's length and stroke, relative to the dial radius.
struct HandSpec {
    element: ClockElement,
    length: f32,
    width: f32,
}

const HOUR_HAND: HandSpec = HandSpec {
    element: ClockElement::HourHand,
    length: SHORT_HAND_RATIO,
    width: HOUR_HAND_WIDTH_RATIO,
};
const MINUTE_HAND: HandSpec = HandSpec {
    element: ClockElement::MinuteHand,
    length: LONG_HAND_RATIO,
    width: MINUTE_HAND_WIDTH_RATIO,
};
const SECOND_HAND: HandSpec = HandSpec {
    element: ClockElement::SecondHand,
    length: LONG_HAND_RATIO,
    width: SECOND_HAND_WIDTH_RATIO,
};

impl ClockRenderer {
    /// Creates a renderer with the default palette and no geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer whose palette comes from a style table.
    pub fn with_style(style: &ClockStyle) -> Self {
        Self {
            palette: style.palette(),
            geometry: None,
        }
    }

    /// Changes one element's color. Takes effect on the next draw.
    pub fn set_color(&mut self, element: ClockElement, color: impl Into<Argb>) {
        self.palette.set(element, color.into());
    }

    /// Current color of `element`.
    pub fn color(&self, element: ClockElement) -> Argb {
        self.palette.get(element)
    }

    /// The full palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Recomputes the face layout for a new surface size.
    ///
    /// Must be called before the first draw and whenever the size changes.
    pub fn on_resize(&mut self, width: f32, height: f32, padding: Padding) {
        let geometry = FaceGeometry::compute(width, height, padding);
        if geometry != self.geometry {
            match &geometry {
                Some(g) => log::debug!(
                    "clock resized to {width}x{height}: side {} radius {}",
                    g.side,
                    g.inner_radius
                ),
                None => log::debug!("clock resized to {width}x{height}: no usable area"),
            }
        }
        self.geometry = geometry;
    }

    /// Layout from the last resize, if the surface has usable area.
    pub fn geometry(&self) -> Option<&FaceGeometry> {
        self.geometry.as_ref()
    }

    /// Draws the face for `moment`.
    ///
    /// Order: background, ring, minute scale, numerals, then the hour,
    /// minute and second hands.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, moment: &ClockMoment) -> Frame {
        let Some(geometry) = self.geometry else {
            return Frame::Skipped;
        };
        let center = geometry.center();
        let radius = geometry.inner_radius;

        surface.fill_circle(center, radius, self.color(ClockElement::InnerBackground));
        surface.stroke_circle(
            center,
            radius,
            geometry.outer_ring_width,
            self.color(ClockElement::OuterRing),
        );
        self.draw_minute_scale(surface, center, radius);
        self.draw_numerals(surface, center, radius);

        self.draw_hand(surface, center, radius, &HOUR_HAND, moment.hour_hand_moment());
        self.draw_hand(surface, center, radius, &MINUTE_HAND, moment.minute_hand_moment());
        self.draw_hand(surface, center, radius, &SECOND_HAND, moment.second_hand_moment());

        Frame::Drawn {
            redraw_within: REDRAW_INTERVAL,
        }
    }

    /// Captures the palette for later restoration.
    pub fn on_save_state(&self) -> PaletteState {
        self.palette.to_state()
    }

    /// Restores a palette captured by [`ClockRenderer::on_save_state`].
    ///
    /// Absent fields take the element's default color.
    pub fn on_restore_state(&mut self, state: &PaletteState) {
        self.palette = Palette::from_state(state);
    }

    fn draw_minute_scale<S: Surface + ?Sized>(&self, surface: &mut S, center: Point, radius: f32) {
        let color = self.color(ClockElement::MinuteScale);
        let big = radius * SCALE_DOT_RATIO;
        let small = big * SMALL_DOT_RATIO;
        for tick in 0..MINUTES_PER_REVOLUTION {
            let position = center.polar(get_angle(tick as f32), radius * SCALE_PADDING_RATIO);
            let dot = if is_major_tick(tick) { big } else { small };
            surface.fill_circle(position, dot, color);
        }
    }

    fn draw_numerals<S: Surface + ?Sized>(&self, surface: &mut S, center: Point, radius: f32) {
        let color = self.color(ClockElement::Text);
        let size = radius * TEXT_SIZE_RATIO * surface.text_scale();
        for hour in 1..=HOURS_ON_DIAL {
            let label = hour.to_string();
            let (width, height) = surface.measure_text(&label, size);
            let anchor = center.polar(numeral_angle(hour), radius * TEXT_PADDING_RATIO);
            let top_left = Point::new(anchor.x - width / 2.0, anchor.y - height / 2.0);
            surface.draw_text(&label, top_left, size, color);
        }
    }

    fn draw_hand<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        center: Point,
        radius: f32,
        hand: &HandSpec,
        moment: f32,
    ) {
        let angle = get_angle(moment);
        let tail = center.polar(angle, -radius * HAND_TAIL_RATIO);
        let tip = center.polar(angle, radius * hand.length);
        surface.draw_line(tail, tip, radius * hand.width, self.color(hand.element));
    }
}
