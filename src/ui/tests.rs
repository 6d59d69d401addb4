use super::*;
use crate::constants::{MAX_CLOCK_SIZE_DP, PRESET_COLORS};
use crate::surface::Surface;
use crate::types::{Argb, ClockElement, ClockStyle, Point};
use eframe::egui;

/// Run a single headless egui frame with the provided input events and closure.
fn run_ui_with(events: Vec<egui::Event>, mut f: impl FnMut(&egui::Context)) -> egui::FullOutput {
    run_on(&egui::Context::default(), events, &mut f)
}

fn run_on(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    f: &mut impl FnMut(&egui::Context),
) -> egui::FullOutput {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(1200.0, 800.0),
    ));
    raw.events = events;
    ctx.run(raw, |ctx| f(ctx))
}

fn repaint_delay(output: &egui::FullOutput) -> Duration {
    output
        .viewport_output
        .get(&egui::ViewportId::ROOT)
        .map(|v| v.repaint_delay)
        .expect("root viewport output")
}

#[test]
fn starts_on_settings_with_default_palette() {
    let app = ClockApp::default();
    assert_eq!(app.screen, Screen::ColorSettings);
    let settings = app.settings.as_ref().expect("settings screen state");
    assert_eq!(settings.slider_positions, [0; 7]);
    assert_eq!(
        settings.preview.color(ClockElement::InnerBackground),
        Argb::LIGHT_GRAY
    );
    assert!(app.add_clock.is_none());
}

#[test]
fn slider_pushes_preset_color_to_one_element() {
    let mut app = ClockApp::default();
    let settings = app.settings.as_mut().unwrap();
    settings.set_slider(ClockElement::MinuteScale, 5);

    assert_eq!(
        settings.preview.color(ClockElement::MinuteScale),
        Argb(PRESET_COLORS[5].1)
    );
    assert_eq!(settings.slider_positions[ClockElement::MinuteScale.index()], 5);
    for element in ClockElement::ALL {
        if element != ClockElement::MinuteScale {
            assert_eq!(settings.preview.color(element), element.default_color());
        }
    }
}

#[test]
fn out_of_range_slider_is_ignored() {
    let mut app = ClockApp::default();
    let settings = app.settings.as_mut().unwrap();
    settings.set_slider(ClockElement::HourHand, 2);
    settings.set_slider(ClockElement::HourHand, PRESET_COLORS.len());

    assert_eq!(settings.slider_positions[0], 2);
    assert_eq!(settings.preview.color(ClockElement::HourHand), Argb(PRESET_COLORS[2].1));
}

#[test]
fn navigation_saves_and_restores_settings() {
    let mut app = ClockApp::default();
    {
        let settings = app.settings.as_mut().unwrap();
        settings.set_slider(ClockElement::HourHand, 5);
        settings.set_slider(ClockElement::InnerBackground, 4);
    }

    app.navigate_to_add_clock();
    assert_eq!(app.screen, Screen::AddClock);
    assert!(app.settings.is_none());
    assert_eq!(app.back_stack.len(), 1);
    assert_eq!(
        app.back_stack[0].palette.hour_hand,
        Some(PRESET_COLORS[5].1)
    );

    assert!(app.navigate_back());
    assert_eq!(app.screen, Screen::ColorSettings);
    assert!(app.add_clock.is_none());
    assert!(app.back_stack.is_empty());

    let settings = app.settings.as_ref().unwrap();
    assert_eq!(settings.preview.color(ClockElement::HourHand), Argb(PRESET_COLORS[5].1));
    assert_eq!(
        settings.preview.color(ClockElement::InnerBackground),
        Argb(PRESET_COLORS[4].1)
    );
    assert_eq!(settings.preview.color(ClockElement::Text), Argb::BLACK);
    assert_eq!(settings.slider_positions[ClockElement::HourHand.index()], 5);
}

#[test]
fn back_on_first_screen_does_nothing() {
    let mut app = ClockApp::default();
    assert!(!app.navigate_back());
    assert_eq!(app.screen, Screen::ColorSettings);
    assert!(app.settings.is_some());
}

#[test]
fn leaving_add_clock_discards_its_clocks() {
    let mut app = ClockApp::default();
    app.navigate_to_add_clock();
    app.add_clock_from_form();
    assert_eq!(app.add_clock.as_ref().unwrap().clocks.len(), 1);

    app.navigate_back();
    app.navigate_to_add_clock();
    assert!(app.add_clock.as_ref().unwrap().clocks.is_empty());
}

#[test]
fn dimension_parsing_coerces_bad_input_to_zero() {
    assert_eq!(parse_dimension("120"), 120);
    assert_eq!(parse_dimension(" 64 "), 64);
    assert_eq!(parse_dimension(""), 0);
    assert_eq!(parse_dimension("abc"), 0);
    assert_eq!(parse_dimension("-5"), 0);
    assert_eq!(parse_dimension("12.5"), 0);
    assert_eq!(parse_dimension("99999999999999"), 0);
}

#[test]
fn clock_size_needs_both_dimensions() {
    assert_eq!(
        ClockSize::from_dp(120, 80),
        ClockSize::Fixed {
            width: 120.0,
            height: 80.0
        }
    );
    assert_eq!(ClockSize::from_dp(0, 80), ClockSize::WrapContent);
    assert_eq!(ClockSize::from_dp(120, 0), ClockSize::WrapContent);
    assert_eq!(ClockSize::WrapContent.resolve(), egui::vec2(200.0, 200.0));
}

#[test]
fn clock_size_is_capped() {
    assert_eq!(
        ClockSize::from_dp(50_000, 90),
        ClockSize::Fixed {
            width: MAX_CLOCK_SIZE_DP as f32,
            height: 90.0
        }
    );
    assert_eq!(
        ClockSize::from_dp(u32::MAX, u32::MAX).resolve(),
        egui::vec2(MAX_CLOCK_SIZE_DP as f32, MAX_CLOCK_SIZE_DP as f32)
    );
}

#[test]
fn huge_clock_draws_at_the_capped_size() {
    let mut app = ClockApp::default();
    app.navigate_to_add_clock();
    {
        let form = app.add_clock.as_mut().unwrap();
        form.width_text = "50000".into();
        form.height_text = "50000".into();
    }
    app.add_clock_from_form();

    let output = run_ui_with(vec![], |ctx| app.show(ctx));

    let clock = &app.add_clock.as_ref().unwrap().clocks[0];
    let geometry = clock.renderer.geometry().copied().unwrap();
    assert!((geometry.side - MAX_CLOCK_SIZE_DP as f32).abs() < 0.5);
    assert!(!output.shapes.is_empty());
}

#[test]
fn swatch_follows_the_slider() {
    let mut app = ClockApp::default();
    let settings = app.settings.as_mut().unwrap();
    assert_eq!(settings.swatch(ClockElement::HourHand), (Argb::BLACK, "Black"));
    assert_eq!(
        settings.swatch(ClockElement::InnerBackground),
        (Argb::LIGHT_GRAY, "default")
    );

    settings.set_slider(ClockElement::InnerBackground, 5);
    assert_eq!(
        settings.swatch(ClockElement::InnerBackground),
        (Argb(PRESET_COLORS[5].1), PRESET_COLORS[5].0)
    );
}

#[test]
fn add_clock_reads_the_form() {
    let mut app = ClockApp::default();
    assert!(app.add_clock_from_form().is_none());

    app.navigate_to_add_clock();
    let form = app.add_clock.as_mut().unwrap();
    form.width_text = "150".into();
    form.height_text = "90".into();
    let fixed = app.add_clock_from_form().unwrap();

    let form = app.add_clock.as_mut().unwrap();
    form.width_text = "wide".into();
    form.height_text = String::new();
    let wrapped = app.add_clock_from_form().unwrap();
    assert_ne!(fixed, wrapped);

    let clocks = &app.add_clock.as_ref().unwrap().clocks;
    assert_eq!(
        clocks[0].size,
        ClockSize::Fixed {
            width: 150.0,
            height: 90.0
        }
    );
    assert_eq!(clocks[1].size, ClockSize::WrapContent);
    assert_eq!(clocks[1].background, Argb(0xFF00_FFFF));
    assert_eq!(clocks[1].renderer.palette(), &Default::default());
}

#[test]
fn new_clocks_use_the_configured_style() {
    let style = ClockStyle {
        hour_hand_color: Some(Argb(0xFFFF_0000)),
        ..Default::default()
    };
    let mut app = ClockApp::with_style(style);
    assert_eq!(
        app.settings.as_ref().unwrap().preview.color(ClockElement::HourHand),
        Argb(0xFFFF_0000)
    );

    app.navigate_to_add_clock();
    app.add_clock_from_form();
    let clock = &app.add_clock.as_ref().unwrap().clocks[0];
    assert_eq!(clock.renderer.color(ClockElement::HourHand), Argb(0xFFFF_0000));
    assert_eq!(clock.renderer.color(ClockElement::MinuteHand), Argb::BLACK);
}

#[test]
fn settings_frame_sizes_preview_and_schedules_redraw() {
    let mut app = ClockApp::default();
    let output = run_ui_with(vec![], |ctx| app.show(ctx));

    let geometry = app
        .settings
        .as_ref()
        .unwrap()
        .preview
        .geometry()
        .copied()
        .expect("preview should be laid out after a frame");
    assert!((geometry.side - 260.0).abs() < 0.5);
    assert!(!output.shapes.is_empty());
    assert!(repaint_delay(&output) <= Duration::from_millis(500));
}

#[test]
fn add_clock_frame_lays_out_every_clock() {
    let mut app = ClockApp::default();
    app.navigate_to_add_clock();
    {
        let form = app.add_clock.as_mut().unwrap();
        form.width_text = "120".into();
        form.height_text = "80".into();
    }
    app.add_clock_from_form();
    {
        let form = app.add_clock.as_mut().unwrap();
        form.width_text.clear();
        form.height_text.clear();
    }
    app.add_clock_from_form();

    let output = run_ui_with(vec![], |ctx| app.show(ctx));

    let clocks = &app.add_clock.as_ref().unwrap().clocks;
    let fixed = clocks[0].renderer.geometry().copied().unwrap();
    let wrapped = clocks[1].renderer.geometry().copied().unwrap();
    assert!((fixed.side - 80.0).abs() < 0.5);
    assert!((fixed.left - 20.0).abs() < 0.5);
    assert!((wrapped.side - 200.0).abs() < 0.5);
    assert!(repaint_delay(&output) <= Duration::from_millis(500));
}

#[test]
fn empty_add_clock_screen_still_repaints() {
    let mut app = ClockApp::default();
    app.navigate_to_add_clock();
    let output = run_ui_with(vec![], |ctx| app.show(ctx));
    assert!(repaint_delay(&output) <= Duration::from_millis(500));
}

#[test]
fn next_repaint_is_capped() {
    assert_eq!(next_repaint(None), REDRAW_INTERVAL);
    assert_eq!(
        next_repaint(Some(Duration::from_secs(3))),
        REDRAW_INTERVAL
    );
    assert_eq!(
        next_repaint(Some(Duration::from_millis(16))),
        Duration::from_millis(16)
    );
}

#[test]
fn painter_surface_measures_and_offsets() {
    let ctx = egui::Context::default();
    let mut measured = (0.0, 0.0);
    let output = run_on(&ctx, vec![], &mut |ctx: &egui::Context| {
        let painter = ctx.layer_painter(egui::LayerId::background());
        let mut surface = PainterSurface::new(&painter, egui::pos2(10.0, 20.0));
        measured = surface.measure_text("12", 16.0);
        surface.fill_circle(Point::new(5.0, 5.0), 3.0, Argb::BLACK);
        surface.draw_line(Point::new(0.0, 0.0), Point::new(4.0, 4.0), 1.0, Argb::BLACK);
        surface.draw_text("12", Point::new(0.0, 0.0), 16.0, Argb::BLACK);
    });

    assert!(measured.0 > 0.0 && measured.1 > 0.0);
    assert!(output.shapes.len() >= 3);
    let circle = output.shapes.iter().find_map(|clipped| match &clipped.shape {
        egui::epaint::Shape::Circle(c) => Some(c.center),
        _ => None,
    });
    assert_eq!(circle, Some(egui::pos2(15.0, 25.0)));
}

#[test]
fn persisted_state_keeps_only_preferences() {
    let mut app = ClockApp::default();
    app.dark_mode = false;
    app.window_inner_size = Some((640.0, 480.0));
    app.navigate_to_add_clock();
    app.add_clock_from_form();

    let json = app.to_json().unwrap();
    let restored = ClockApp::from_json(&json).unwrap();
    assert!(!restored.dark_mode);
    assert_eq!(restored.window_inner_size, Some((640.0, 480.0)));
    assert_eq!(restored.screen, Screen::ColorSettings);
    assert!(restored.add_clock.is_none());
    assert!(restored.settings.is_some());
}

#[test]
fn missing_storage_falls_back_to_defaults() {
    let restored = ClockApp::restore(None);
    assert!(restored.dark_mode);
    assert_eq!(restored.screen, Screen::ColorSettings);
}

#[test]
fn color_conversion_keeps_channels() {
    let c = to_color32(Argb(0xFF12_3456));
    assert_eq!((c.r(), c.g(), c.b(), c.a()), (0x12, 0x34, 0x56, 0xFF));
}
