//! Face geometry and hand angles.
//!
//! Everything here is pure math: the layout of the face inside a padded
//! surface, the mapping from a 0-60 "moment" to an angle, and the moments of
//! the three hands for a given time of day.
//!
//! Angles are in radians, measured clockwise from the positive x axis because
//! the y axis of every drawing surface points down.

use crate::constants::{
    HOURS_ON_DIAL, MAJOR_TICK_EVERY, MINUTES_PER_REVOLUTION, OUTER_RING_RATIO,
};
use crate::types::{Padding, Point};
use chrono::Timelike;
use std::f32::consts::{FRAC_PI_2, PI};

/// Layout derived from the surface size. Recomputed on every resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Left edge of the safe square
    pub left: f32,
    /// Top edge of the safe square
    pub top: f32,
    /// Side of the largest centered square inside the padded area
    pub side: f32,
    /// Stroke width of the outer ring
    pub outer_ring_width: f32,
    /// Radius of the dial inside the ring's centerline
    pub inner_radius: f32,
}

impl FaceGeometry {
    /// Lays the face out inside a `width` x `height` surface.
    ///
    /// Returns `None` when the padded area is empty on either axis.
    pub fn compute(width: f32, height: f32, padding: Padding) -> Option<Self> {
        let safe_width = width - padding.left - padding.right;
        let safe_height = height - padding.top - padding.bottom;
        if !(safe_width > 0.0 && safe_height > 0.0) {
            return None;
        }

        let min = safe_width.min(safe_height);
        let max = safe_width.max(safe_height);
        let offset = (max - min) / 2.0;

        let left = if safe_height < safe_width {
            padding.left + offset
        } else {
            padding.left
        };
        let top = if safe_height > safe_width {
            padding.top + offset
        } else {
            padding.top
        };

        let outer_ring_width = min * OUTER_RING_RATIO;
        Some(Self {
            left,
            top,
            side: min,
            outer_ring_width,
            inner_radius: min / 2.0 - outer_ring_width / 2.0,
        })
    }

    /// Center of the safe square.
    pub fn center(&self) -> Point {
        Point::new(self.left + self.side / 2.0, self.top + self.side / 2.0)
    }
}

/// Angle of a position on the 0-60 dial. Moment 0 points up.
pub fn get_angle(moment: f32) -> f32 {
    PI * moment / 30.0 - FRAC_PI_2
}

/// Angle at which numeral `hour` (1-12) is placed; 12 sits at the top.
pub fn numeral_angle(hour: u32) -> f32 {
    PI / 6.0 * (hour as f32 - 3.0)
}

/// Whether the minute mark `tick` is one of the larger five-minute marks.
pub fn is_major_tick(tick: u32) -> bool {
    tick % MAJOR_TICK_EVERY == 0
}

/// A time of day sampled once per draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockMoment {
    /// Hour of day, 0-23
    pub hour: u32,
    /// Minute, 0-59
    pub minute: u32,
    /// Second, 0-59; may carry a fraction
    pub second: f32,
}

impl ClockMoment {
    /// Creates a moment from its parts.
    pub fn new(hour: u32, minute: u32, second: f32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Samples hour, minute and whole seconds from any chrono time value.
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self::new(time.hour(), time.minute(), time.second() as f32)
    }

    /// Current local wall-clock time.
    pub fn now() -> Self {
        Self::from_time(&chrono::Local::now())
    }

    /// Position of the hour hand on the 0-60 dial.
    pub fn hour_hand_moment(&self) -> f32 {
        let hour = (self.hour % HOURS_ON_DIAL) as f32;
        let minute = self.minute as f32;
        let per_hour = (MINUTES_PER_REVOLUTION / HOURS_ON_DIAL) as f32;
        (hour + minute / MINUTES_PER_REVOLUTION as f32) * per_hour + minute / HOURS_ON_DIAL as f32
    }

    /// Position of the minute hand on the 0-60 dial.
    pub fn minute_hand_moment(&self) -> f32 {
        self.minute as f32 + self.second / MINUTES_PER_REVOLUTION as f32
    }

    /// Position of the second hand on the 0-60 dial.
    pub fn second_hand_moment(&self) -> f32 {
        self.second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    const EPS: f32 = 1e-4;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn same_direction(a: f32, b: f32) -> bool {
        close(a.cos(), b.cos()) && close(a.sin(), b.sin())
    }

    #[test]
    fn angle_zero_points_up() {
        assert!(close(get_angle(0.0), -FRAC_PI_2));
        assert!(close(get_angle(15.0), 0.0));
        assert!(close(get_angle(30.0), FRAC_PI_2));
    }

    #[test]
    fn angle_is_periodic() {
        let mut m = 0.0;
        while m < 60.0 {
            assert!(same_direction(get_angle(m), get_angle(m + 60.0)), "moment {m}");
            m += 0.75;
        }
    }

    #[test]
    fn wide_surface_centers_horizontally() {
        let g = FaceGeometry::compute(300.0, 200.0, Padding::default()).unwrap();
        assert!(close(g.side, 200.0));
        assert!(close(g.left, 50.0));
        assert!(close(g.top, 0.0));
        assert!(close(g.outer_ring_width, 6.0));
        assert!(close(g.inner_radius, 97.0));
        assert_eq!(g.center(), Point::new(150.0, 100.0));
    }

    #[test]
    fn tall_surface_centers_vertically_with_padding() {
        let padding = Padding {
            left: 10.0,
            top: 20.0,
            right: 30.0,
            bottom: 40.0,
        };
        // safe area: 100 x 240
        let g = FaceGeometry::compute(140.0, 300.0, padding).unwrap();
        assert!(close(g.side, 100.0));
        assert!(close(g.left, 10.0));
        assert!(close(g.top, 20.0 + 70.0));
        assert!(close(g.outer_ring_width, 3.0));
        assert!(close(g.inner_radius, 50.0 - 1.5));
    }

    #[test]
    fn degenerate_area_has_no_geometry() {
        assert!(FaceGeometry::compute(0.0, 100.0, Padding::default()).is_none());
        assert!(FaceGeometry::compute(100.0, 0.0, Padding::default()).is_none());
        assert!(FaceGeometry::compute(20.0, 100.0, Padding::uniform(10.0)).is_none());
        assert!(FaceGeometry::compute(100.0, 100.0, Padding::uniform(60.0)).is_none());
        assert!(FaceGeometry::compute(f32::NAN, 100.0, Padding::default()).is_none());
    }

    #[test]
    fn midnight_and_noon_point_up() {
        for hour in [0, 12] {
            let m = ClockMoment::new(hour, 0, 0.0);
            assert!(close(m.hour_hand_moment(), 0.0));
            assert!(close(m.minute_hand_moment(), 0.0));
            assert!(close(get_angle(m.hour_hand_moment()), -FRAC_PI_2));
        }
    }

    #[test]
    fn quarter_past_midnight() {
        let m = ClockMoment::new(0, 15, 0.0);
        assert!(close(m.hour_hand_moment(), 2.5));
        assert!(close(m.minute_hand_moment(), 15.0));
    }

    #[test]
    fn afternoon_wraps_to_dial() {
        let morning = ClockMoment::new(3, 20, 30.0);
        let afternoon = ClockMoment::new(15, 20, 30.0);
        assert!(close(morning.hour_hand_moment(), afternoon.hour_hand_moment()));
        assert!(close(afternoon.minute_hand_moment(), 20.5));
        assert!(close(afternoon.second_hand_moment(), 30.0));
    }

    #[test]
    fn moment_from_chrono_time() {
        let t = NaiveTime::from_hms_opt(21, 7, 42).unwrap();
        assert_eq!(ClockMoment::from_time(&t), ClockMoment::new(21, 7, 42.0));
    }

    #[test]
    fn numerals_are_thirty_degrees_apart() {
        let step = (numeral_angle(12) - numeral_angle(1)).abs() % (2.0 * PI);
        let step = step.min(2.0 * PI - step);
        assert!(close(step, PI / 6.0));
        assert!(same_direction(numeral_angle(1) + PI / 6.0, numeral_angle(2)));
        assert!(same_direction(numeral_angle(12), -FRAC_PI_2));
        assert!(same_direction(numeral_angle(3), 0.0));
    }

    #[test]
    fn every_fifth_tick_is_major() {
        let majors: Vec<u32> = (0..60).filter(|t| is_major_tick(*t)).collect();
        assert_eq!(majors.len(), 12);
        assert_eq!(majors[1], 5);
    }
}
