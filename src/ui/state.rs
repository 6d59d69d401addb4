//! Application state management structures.
//!
//! This module contains the state of the two screens, the back stack that
//! carries the settings screen's palette across navigation, and the main
//! [`ClockApp`].

use crate::constants::{
    DEFAULT_CLOCK_SIZE_DP, HOST_CLOCK_BACKGROUND, MAX_CLOCK_SIZE_DP, PRESET_COLORS,
};
use crate::renderer::ClockRenderer;
use crate::types::{Argb, ClockElement, ClockStyle, PaletteState};
use eframe::egui;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for clocks added on the add-clock screen.
pub type ClockId = Uuid;

/// The screen currently shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    /// Preview clock with one color slider per element
    #[default]
    ColorSettings,
    /// Size inputs and the list of added clocks
    AddClock,
}

/// How much space an added clock asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockSize {
    /// No explicit size; the clock takes the default square
    WrapContent,
    /// Explicit size in density-independent units
    Fixed {
        /// Width in dp
        width: f32,
        /// Height in dp
        height: f32,
    },
}

impl ClockSize {
    /// Picks a fixed size only when both dimensions are positive.
    ///
    /// Each dimension is capped at [`MAX_CLOCK_SIZE_DP`]; larger faces would
    /// ask egui for numeral glyphs bigger than its font atlas.
    pub fn from_dp(width: u32, height: u32) -> Self {
        if width > 0 && height > 0 {
            ClockSize::Fixed {
                width: width.min(MAX_CLOCK_SIZE_DP) as f32,
                height: height.min(MAX_CLOCK_SIZE_DP) as f32,
            }
        } else {
            ClockSize::WrapContent
        }
    }

    /// Size in egui points (one point per dp).
    pub fn resolve(&self) -> egui::Vec2 {
        match *self {
            ClockSize::WrapContent => egui::vec2(DEFAULT_CLOCK_SIZE_DP, DEFAULT_CLOCK_SIZE_DP),
            ClockSize::Fixed { width, height } => egui::vec2(width, height),
        }
    }
}

/// Parses a dimension field. Blank, negative or malformed input reads as 0.
pub fn parse_dimension(text: &str) -> u32 {
    text.trim().parse::<u32>().unwrap_or(0)
}

/// A clock placed on the add-clock screen.
#[derive(Debug, Clone)]
pub struct ClockInstance {
    /// Unique identifier
    pub id: ClockId,
    /// Renderer with its own palette
    pub renderer: ClockRenderer,
    /// Requested size
    pub size: ClockSize,
    /// Color the host paints behind the face
    pub background: Argb,
}

impl ClockInstance {
    /// Creates a clock with the palette from `style`.
    pub fn new(size: ClockSize, style: &ClockStyle) -> Self {
        Self {
            id: Uuid::new_v4(),
            renderer: ClockRenderer::with_style(style),
            size,
            background: Argb(HOST_CLOCK_BACKGROUND),
        }
    }
}

/// State of the color settings screen.
#[derive(Debug, Clone)]
pub struct SettingsState {
    /// The preview clock the sliders recolor
    pub preview: ClockRenderer,
    /// Slider position per element, indexed like [`ClockElement::ALL`]
    pub slider_positions: [usize; 7],
}

impl SettingsState {
    /// Fresh screen with a preview clock built from `style`.
    pub fn new(style: &ClockStyle) -> Self {
        Self {
            preview: ClockRenderer::with_style(style),
            slider_positions: [0; 7],
        }
    }

    /// Moves an element's slider and pushes the matching preset color.
    ///
    /// Positions outside the preset list are ignored.
    pub fn set_slider(&mut self, element: ClockElement, position: usize) {
        let Some((name, color)) = PRESET_COLORS.get(position) else {
            log::warn!("slider position {position} out of range for {element:?}");
            return;
        };
        self.slider_positions[element.index()] = position;
        self.preview.set_color(element, *color);
        log::debug!("{} set to {name}", element.label());
    }

    /// Color shown next to an element's slider, with its preset name.
    ///
    /// A color that does not match the slider's preset is still the element's
    /// default or styled color and is named "default".
    pub fn swatch(&self, element: ClockElement) -> (Argb, &'static str) {
        let color = self.preview.color(element);
        let name = PRESET_COLORS
            .get(self.slider_positions[element.index()])
            .filter(|(_, preset)| Argb(*preset) == color)
            .map_or("default", |(name, _)| *name);
        (color, name)
    }

    /// Captures what must survive the screen being torn down.
    pub fn save(&self) -> BackStackEntry {
        BackStackEntry {
            palette: self.preview.on_save_state(),
            slider_positions: self.slider_positions,
        }
    }

    /// Rebuilds the screen from a back-stack entry.
    pub fn restore(entry: &BackStackEntry, style: &ClockStyle) -> Self {
        let mut state = Self::new(style);
        state.preview.on_restore_state(&entry.palette);
        state.slider_positions = entry.slider_positions;
        state
    }
}

/// State of the add-clock screen.
#[derive(Debug, Clone, Default)]
pub struct AddClockState {
    /// Text of the width field, in dp
    pub width_text: String,
    /// Text of the height field, in dp
    pub height_text: String,
    /// Clocks added so far, in insertion order
    pub clocks: Vec<ClockInstance>,
}

/// Saved state of the settings screen while another screen is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackStackEntry {
    /// Preview palette
    pub palette: PaletteState,
    /// Slider positions
    pub slider_positions: [usize; 7],
}

/// The main application structure.
///
/// Only the shell preferences (theme and window size) are persisted; clocks
/// and palettes live for the session.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ClockApp {
    /// Screen currently shown
    #[serde(skip)]
    pub screen: Screen,
    /// Settings screen, present while it is shown
    #[serde(skip)]
    pub settings: Option<SettingsState>,
    /// Add-clock screen, present while it is shown
    #[serde(skip)]
    pub add_clock: Option<AddClockState>,
    /// Screens below the current one
    #[serde(skip)]
    pub back_stack: Vec<BackStackEntry>,
    /// Style applied to every new renderer
    #[serde(skip)]
    pub style: ClockStyle,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Persisted last known window inner size in logical points (desktop only)
    pub window_inner_size: Option<(f32, f32)>,
    /// Whether we've already applied the stored window geometry this session
    #[serde(skip)]
    pub applied_viewport_restore: bool,
}

impl Default for ClockApp {
    fn default() -> Self {
        Self::with_style(ClockStyle::default())
    }
}

impl ClockApp {
    /// Creates the app on the settings screen with the given style.
    pub fn with_style(style: ClockStyle) -> Self {
        Self {
            screen: Screen::ColorSettings,
            settings: Some(SettingsState::new(&style)),
            add_clock: None,
            back_stack: Vec::new(),
            style,
            dark_mode: true,
            window_inner_size: None,
            applied_viewport_restore: false,
        }
    }

    /// Serializes the persisted preferences to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes persisted preferences from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replaces the style and rebuilds the settings screen with it.
    pub fn set_style(&mut self, style: ClockStyle) {
        if self.screen == Screen::ColorSettings {
            self.settings = Some(SettingsState::new(&style));
        }
        self.style = style;
    }

    /// Opens the add-clock screen, saving the settings screen on the back stack.
    pub fn navigate_to_add_clock(&mut self) {
        if self.screen != Screen::ColorSettings {
            return;
        }
        if let Some(settings) = self.settings.take() {
            self.back_stack.push(settings.save());
        }
        self.add_clock = Some(AddClockState::default());
        self.screen = Screen::AddClock;
        log::info!("navigated to add-clock screen");
    }

    /// Pops the current screen. Returns `false` when there is nothing to pop.
    pub fn navigate_back(&mut self) -> bool {
        if self.screen != Screen::AddClock {
            return false;
        }
        let settings = match self.back_stack.pop() {
            Some(entry) => SettingsState::restore(&entry, &self.style),
            None => SettingsState::new(&self.style),
        };
        self.settings = Some(settings);
        self.add_clock = None;
        self.screen = Screen::ColorSettings;
        log::info!("navigated back to color settings");
        true
    }

    /// Adds a clock sized from the add-clock form's text fields.
    ///
    /// Returns the new clock's id, or `None` when the screen is not shown.
    pub fn add_clock_from_form(&mut self) -> Option<ClockId> {
        let form = self.add_clock.as_mut()?;
        let width = parse_dimension(&form.width_text);
        let height = parse_dimension(&form.height_text);
        let clock = ClockInstance::new(ClockSize::from_dp(width, height), &self.style);
        let id = clock.id;
        log::info!("added clock {id} ({:?})", clock.size);
        form.clocks.push(clock);
        Some(id)
    }
}
