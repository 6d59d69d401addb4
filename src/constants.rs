//! Shared application-wide constants.
//! Centralizes the proportions of the clock face and the host defaults.

use std::time::Duration;

// Face proportions
/// Outer ring stroke width as a fraction of the safe square side.
pub const OUTER_RING_RATIO: f32 = 0.03;
/// Distance of the minute-scale marks from the center, as a fraction of the radius.
pub const SCALE_PADDING_RATIO: f32 = 0.9;
/// Radius of a five-minute mark as a fraction of the radius.
pub const SCALE_DOT_RATIO: f32 = 0.02;
/// Size of an ordinary minute mark relative to a five-minute mark.
pub const SMALL_DOT_RATIO: f32 = 0.6;
/// Distance of the numerals from the center, as a fraction of the radius.
pub const TEXT_PADDING_RATIO: f32 = 0.75;
/// Numeral font size as a fraction of the inner radius.
pub const TEXT_SIZE_RATIO: f32 = 0.08;

// Hands
/// Length of the hand tail behind the center.
pub const HAND_TAIL_RATIO: f32 = 0.1;
/// Tip distance of the hour hand.
pub const SHORT_HAND_RATIO: f32 = 0.6;
/// Tip distance of the minute and second hands.
pub const LONG_HAND_RATIO: f32 = 0.8;
/// Stroke width of the hour hand relative to the inner radius.
pub const HOUR_HAND_WIDTH_RATIO: f32 = 0.06;
/// Stroke width of the minute hand relative to the inner radius.
pub const MINUTE_HAND_WIDTH_RATIO: f32 = 0.03;
/// Stroke width of the second hand relative to the inner radius.
pub const SECOND_HAND_WIDTH_RATIO: f32 = 0.02;

// Dial
/// Number of minute-scale marks (and moment units per revolution).
pub const MINUTES_PER_REVOLUTION: u32 = 60;
/// Number of numerals on the dial.
pub const HOURS_ON_DIAL: u32 = 12;
/// Every n-th mark is drawn larger.
pub const MAJOR_TICK_EVERY: u32 = 5;

// Colors (ARGB)
/// Default color for hands, ring, numerals and scale.
pub const DEFAULT_COLOR: u32 = 0xFF00_0000;
/// Default inner background (light gray).
pub const DEFAULT_BACKGROUND_COLOR: u32 = 0xFFCC_CCCC;
/// Background the host paints behind each added clock.
pub const HOST_CLOCK_BACKGROUND: u32 = 0xFF00_FFFF;

/// The six colors a settings slider can select, in slider order.
pub const PRESET_COLORS: [(&str, u32); 6] = [
    ("Black", 0xFF00_0000),
    ("White", 0xFFFF_FFFF),
    ("Bright gray", 0xFFE0_E0E0),
    ("Dark gray", 0xFF44_4444),
    ("Beige", 0xFFF5_F5DC),
    ("Purple", 0xFF62_00EE),
];

// Host
/// Upper bound between two redraws of a visible clock.
pub const REDRAW_INTERVAL: Duration = Duration::from_millis(500);
/// Side of a wrap-content clock in density-independent units.
pub const DEFAULT_CLOCK_SIZE_DP: f32 = 200.0;
/// Largest width or height an added clock may ask for, in dp.
pub const MAX_CLOCK_SIZE_DP: u32 = 4096;
/// Environment variable naming a style JSON file for new clocks.
pub const STYLE_ENV_VAR: &str = "ANALOG_CLOCK_STYLE";
/// Key used for the persisted shell state.
pub const APP_STATE_KEY: &str = "app_state";
