//! Core data types for the clock face.
//!
//! This module defines the color value type, the seven configurable face
//! elements, the palette that holds one color per element, the ordered
//! save-state tuple and the construction-time style table.

use crate::constants::{DEFAULT_BACKGROUND_COLOR, DEFAULT_COLOR};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A 32-bit color packed as `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Argb = Argb(DEFAULT_COLOR);
    /// Light gray used for the inner background by default.
    pub const LIGHT_GRAY: Argb = Argb(DEFAULT_BACKGROUND_COLOR);

    /// Builds a color from its four channels.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

/// A visual element of the face that carries its own color.
///
/// The declaration order is the order used by [`PaletteState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClockElement {
    /// Short, thick hand
    HourHand,
    /// Long hand
    MinuteHand,
    /// Thin hand
    SecondHand,
    /// Ring around the dial
    OuterRing,
    /// Numerals 1 to 12
    Text,
    /// The sixty minute marks
    MinuteScale,
    /// Disc behind everything else
    InnerBackground,
}

impl ClockElement {
    /// Every element, in persisted order.
    pub const ALL: [ClockElement; 7] = [
        ClockElement::HourHand,
        ClockElement::MinuteHand,
        ClockElement::SecondHand,
        ClockElement::OuterRing,
        ClockElement::Text,
        ClockElement::MinuteScale,
        ClockElement::InnerBackground,
    ];

    /// Human-readable label shown next to the element's slider.
    pub fn label(self) -> &'static str {
        match self {
            ClockElement::HourHand => "Hour hand",
            ClockElement::MinuteHand => "Minute hand",
            ClockElement::SecondHand => "Second hand",
            ClockElement::OuterRing => "Outer circle",
            ClockElement::Text => "Numbers",
            ClockElement::MinuteScale => "Scale",
            ClockElement::InnerBackground => "Background",
        }
    }

    /// Color the element takes when nothing else is configured.
    pub fn default_color(self) -> Argb {
        match self {
            ClockElement::InnerBackground => Argb::LIGHT_GRAY,
            _ => Argb::BLACK,
        }
    }

    /// Position of the element in [`ClockElement::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One color per face element.
///
/// Each entry is independent; changing one never touches another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    colors: [Argb; 7],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: ClockElement::ALL.map(ClockElement::default_color),
        }
    }
}

impl Palette {
    /// Returns the color of `element`.
    pub fn get(&self, element: ClockElement) -> Argb {
        self.colors[element.index()]
    }

    /// Replaces the color of `element`.
    pub fn set(&mut self, element: ClockElement, color: Argb) {
        self.colors[element.index()] = color;
    }

    /// Snapshot of all seven colors as a save state.
    pub fn to_state(&self) -> PaletteState {
        PaletteState::from_ordered(self.colors.map(|c| Some(c.0)))
    }

    /// Builds a palette from a save state, using defaults for absent fields.
    pub fn from_state(state: &PaletteState) -> Self {
        let ordered = state.to_ordered();
        let mut palette = Self::default();
        for (element, value) in ClockElement::ALL.into_iter().zip(ordered) {
            if let Some(value) = value {
                palette.set(element, Argb(value));
            }
        }
        palette
    }
}

/// Saved palette colors, in the fixed order hour, minute, second, outer ring,
/// text, minute scale, inner background.
///
/// Every field is optional so that a partial state still restores.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteState {
    /// Hour hand color
    pub hour_hand: Option<u32>,
    /// Minute hand color
    pub minute_hand: Option<u32>,
    /// Second hand color
    pub second_hand: Option<u32>,
    /// Outer ring color
    pub outer_ring: Option<u32>,
    /// Numeral color
    pub text: Option<u32>,
    /// Minute-scale color
    pub minute_scale: Option<u32>,
    /// Inner background color
    pub inner_background: Option<u32>,
}

impl PaletteState {
    /// Builds a state from an ordered tuple.
    pub fn from_ordered(values: [Option<u32>; 7]) -> Self {
        let [hour_hand, minute_hand, second_hand, outer_ring, text, minute_scale, inner_background] =
            values;
        Self {
            hour_hand,
            minute_hand,
            second_hand,
            outer_ring,
            text,
            minute_scale,
            inner_background,
        }
    }

    /// Returns the fields in persisted order.
    pub fn to_ordered(&self) -> [Option<u32>; 7] {
        [
            self.hour_hand,
            self.minute_hand,
            self.second_hand,
            self.outer_ring,
            self.text,
            self.minute_scale,
            self.inner_background,
        ]
    }

    /// Serializes the state to JSON.
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a state from JSON. Missing keys read as absent.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Construction-time style table. Absent entries take the element default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockStyle {
    /// Hour hand color
    pub hour_hand_color: Option<Argb>,
    /// Minute hand color
    pub minute_hand_color: Option<Argb>,
    /// Second hand color
    pub second_hand_color: Option<Argb>,
    /// Outer ring color
    pub outer_ring_color: Option<Argb>,
    /// Numeral color
    pub text_color: Option<Argb>,
    /// Minute-scale color
    pub minute_scale_color: Option<Argb>,
    /// Inner background color
    pub inner_background_color: Option<Argb>,
}

impl ClockStyle {
    /// Parses a style table from JSON.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads and parses a style table from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Resolves the table into a full palette.
    pub fn palette(&self) -> Palette {
        let entries = [
            self.hour_hand_color,
            self.minute_hand_color,
            self.second_hand_color,
            self.outer_ring_color,
            self.text_color,
            self.minute_scale_color,
            self.inner_background_color,
        ];
        let mut palette = Palette::default();
        for (element, color) in ClockElement::ALL.into_iter().zip(entries) {
            if let Some(color) = color {
                palette.set(element, color);
            }
        }
        palette
    }
}

/// Inset on each side of the drawing surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    /// Left inset
    pub left: f32,
    /// Top inset
    pub top: f32,
    /// Right inset
    pub right: f32,
    /// Bottom inset
    pub bottom: f32,
}

impl Padding {
    /// Same inset on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

/// A position on the drawing surface, y growing downwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f32,
    /// Vertical coordinate
    pub y: f32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point at `distance` from `self` along `angle` (radians, 0 = right, clockwise).
    pub fn polar(self, angle: f32, distance: f32) -> Self {
        Self {
            x: self.x + angle.cos() * distance,
            y: self.y + angle.sin() * distance,
        }
    }
}
