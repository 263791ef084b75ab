//! Pure rendering: map App state to ratatui widget trees.
//!
//! Rendering happens in two steps. [`panel`] projects the television onto
//! what each widget should show (LCD digit, channel image, slider, mute
//! label, which controls are live). [`render`] turns that projection into
//! widgets. The whole panel is recomputed on every frame, so the
//! television never needs to know a UI exists.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::lineup::{ChannelEntry, Lineup};
use crate::television::Television;
use crate::types::Button;

use super::state::App;
use super::theme;

// ============================================================================
// PANEL PROJECTION
// ============================================================================

/// What the widgets should display for a given television state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel<'a> {
    /// Power indicator.
    pub power: bool,
    /// Digit on the channel LCD. Reads 0 while off.
    pub lcd: u8,
    /// Station logo to show. Cleared while off.
    pub station: Option<&'a ChannelEntry>,
    /// Whether every control other than power accepts input.
    pub controls_enabled: bool,
    /// Volume slider position.
    pub slider: u8,
    /// Whether the mute label is lit.
    pub mute_active: bool,
}

/// Project the television onto the panel widgets.
pub fn panel<'a>(tv: &Television, lineup: &'a Lineup) -> Panel<'a> {
    if !tv.is_on() {
        return Panel {
            power: false,
            lcd: 0,
            station: None,
            controls_enabled: false,
            slider: tv.volume(),
            mute_active: false,
        };
    }

    Panel {
        power: true,
        lcd: tv.channel(),
        station: lineup.entry(tv.channel()),
        controls_enabled: true,
        slider: tv.volume(),
        mute_active: tv.is_muted(),
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the remote to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let panel = panel(&app.tv, &app.lineup);

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),   // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&panel), chunks[0]);
    frame.render_widget(render_help(), chunks[2]);

    let columns = Layout::horizontal([
        Constraint::Min(0),     // screen
        Constraint::Length(28), // remote
    ])
    .split(chunks[1]);

    render_screen(&panel, frame, columns[0]);
    render_remote(&panel, frame, columns[1]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(panel: &Panel) -> Paragraph<'static> {
    let power = if panel.power {
        Span::styled("● ON", theme::STYLE_POWER_ON)
    } else {
        Span::styled("○ OFF", theme::STYLE_POWER_OFF)
    };

    Paragraph::new(Line::from(vec![
        Span::styled("tv-remote  ", theme::STYLE_TITLE),
        power,
    ]))
}

fn render_help() -> Paragraph<'static> {
    Paragraph::new(Span::styled(
        "[p] power  [m] mute  [↑/↓] channel  [←/→] volume  [0-4] slider  [q] quit",
        theme::STYLE_HELP,
    ))
}

// ============================================================================
// SCREEN
// ============================================================================

/// The television screen: the channel image, or nothing while off.
fn render_screen(panel: &Panel, frame: &mut Frame, area: Rect) {
    let block = Block::bordered().title(" Screen ");

    let lines = match panel.station {
        Some(station) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", station.name),
                theme::STYLE_IMPORTANT,
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", station.asset.display()),
                theme::STYLE_DIM,
            )),
        ],
        None => Vec::new(),
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// REMOTE
// ============================================================================

/// LCD, volume slider, mute label and the button list.
fn render_remote(panel: &Panel, frame: &mut Frame, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(7), // lcd
        Constraint::Length(3), // slider
        Constraint::Length(1), // mute label
        Constraint::Min(0),   // buttons
    ])
    .split(area);

    let lcd_lines: Vec<Line> = lcd_digit(panel.lcd)
        .iter()
        .map(|row| Line::from(Span::styled(format!("   {}", row), theme::STYLE_LCD)))
        .collect();
    let lcd = Paragraph::new(lcd_lines).block(Block::bordered().title(" Channel "));
    frame.render_widget(lcd, chunks[0]);

    let slider_style = if panel.controls_enabled {
        theme::STYLE_SLIDER
    } else {
        theme::STYLE_DISABLED
    };
    let ratio = f64::from(panel.slider) / f64::from(Television::MAX_VOLUME);
    let slider = Gauge::default()
        .block(Block::bordered().title(" Volume "))
        .gauge_style(slider_style)
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{}/{}", panel.slider, Television::MAX_VOLUME));
    frame.render_widget(slider, chunks[1]);

    let mute_style = if panel.mute_active {
        theme::STYLE_MUTE_ACTIVE
    } else {
        theme::STYLE_MUTE_INACTIVE
    };
    frame.render_widget(Paragraph::new(Span::styled(" MUTE", mute_style)), chunks[2]);

    let buttons: Vec<Line> = Button::ALL
        .iter()
        .map(|&button| {
            let live = button == Button::Power || panel.controls_enabled;
            let style = if live {
                theme::STYLE_CONTROL
            } else {
                theme::STYLE_DISABLED
            };
            Line::from(vec![
                Span::styled(format!(" [{}] ", key_hint(button)), theme::STYLE_INTERACTIVE),
                Span::styled(button_label(button), style),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(buttons), chunks[3]);
}

fn key_hint(button: Button) -> &'static str {
    match button {
        Button::Power => "p",
        Button::Mute => "m",
        Button::ChannelUp => "↑",
        Button::ChannelDown => "↓",
        Button::VolumeUp => "→",
        Button::VolumeDown => "←",
    }
}

fn button_label(button: Button) -> &'static str {
    match button {
        Button::Power => "Power",
        Button::Mute => "Mute",
        Button::ChannelUp => "Channel +",
        Button::ChannelDown => "Channel -",
        Button::VolumeUp => "Volume +",
        Button::VolumeDown => "Volume -",
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Five rows of a three-column block digit, as on a segment display.
fn lcd_digit(digit: u8) -> [&'static str; 5] {
    match digit % 10 {
        0 => ["███", "█ █", "█ █", "█ █", "███"],
        1 => ["  █", "  █", "  █", "  █", "  █"],
        2 => ["███", "  █", "███", "█  ", "███"],
        3 => ["███", "  █", "███", "  █", "███"],
        4 => ["█ █", "█ █", "███", "  █", "  █"],
        5 => ["███", "█  ", "███", "  █", "███"],
        6 => ["███", "█  ", "███", "█ █", "███"],
        7 => ["███", "  █", "  █", "  █", "  █"],
        8 => ["███", "█ █", "███", "█ █", "███"],
        _ => ["███", "█ █", "███", "  █", "███"],
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;
    use ratatui::Terminal;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 20);
        Terminal::new(backend).unwrap()
    }

    fn rendered(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn rendered_buffer(app: &App) -> Buffer {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal.backend().buffer().clone()
    }

    /// Foreground color of the first cell where `text` appears on a row.
    fn fg_of(buffer: &Buffer, text: &str) -> Option<Color> {
        let width = text.chars().count() as u16;
        let area = buffer.area;
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right().saturating_sub(width - 1) {
                let matches = text
                    .chars()
                    .enumerate()
                    .all(|(i, c)| buffer[(x + i as u16, y)].symbol() == c.to_string());
                if matches {
                    return Some(buffer[(x, y)].fg);
                }
            }
        }
        None
    }

    fn app_with(tv: Television) -> App {
        let mut app = App::new(Lineup::default());
        app.tv = tv;
        app
    }

    // -- Panel projection --

    #[test]
    fn off_panel_clears_everything() {
        let lineup = Lineup::default();
        let tv = Television::with_state(false, true, 3, 2).unwrap();
        let p = panel(&tv, &lineup);

        assert!(!p.power);
        assert_eq!(p.lcd, 0);
        assert_eq!(p.station, None);
        assert!(!p.controls_enabled);
        assert!(!p.mute_active);
    }

    #[test]
    fn on_panel_shows_channel_station_and_volume() {
        let lineup = Lineup::default();
        let tv = Television::with_state(true, false, 3, 2).unwrap();
        let p = panel(&tv, &lineup);

        assert!(p.power);
        assert_eq!(p.lcd, 2);
        assert_eq!(p.station.map(|s| s.name.as_str()), Some("CN"));
        assert!(p.controls_enabled);
        assert_eq!(p.slider, 3);
        assert!(!p.mute_active);
    }

    #[test]
    fn on_panel_lights_mute_label_when_muted() {
        let lineup = Lineup::default();
        let tv = Television::with_state(true, true, 1, 0).unwrap();
        assert!(panel(&tv, &lineup).mute_active);
    }

    // -- Rendering --

    #[test]
    fn off_remote_renders_without_station() {
        let content = rendered(&app_with(Television::new()));
        assert!(content.contains("OFF"));
        assert!(!content.contains("ESPN"));
    }

    #[test]
    fn on_remote_renders_station_and_volume() {
        let tv = Television::with_state(true, false, 2, 3).unwrap();
        let content = rendered(&app_with(tv));
        assert!(content.contains("ON"));
        assert!(content.contains("CBS"));
        assert!(content.contains("cbs_logo.png"));
        assert!(content.contains("2/4"));
    }

    #[test]
    fn remote_lists_every_button() {
        let content = rendered(&app_with(Television::new()));
        for button in Button::ALL {
            assert!(content.contains(button_label(button)), "missing {}", button);
        }
    }

    #[test]
    fn tiny_terminal_renders_without_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let app = app_with(Television::with_state(true, true, 4, 1).unwrap());
        terminal
            .draw(|frame| render(&app, frame))
            .expect("render should not panic");
    }

    // -- Styling --

    #[test]
    fn mute_label_is_red_when_muted() {
        let tv = Television::with_state(true, true, 2, 0).unwrap();
        let buffer = rendered_buffer(&app_with(tv));
        assert_eq!(fg_of(&buffer, "MUTE"), theme::STYLE_MUTE_ACTIVE.fg);
        assert_eq!(fg_of(&buffer, "MUTE"), Some(Color::Red));
    }

    #[test]
    fn mute_label_is_white_when_unmuted() {
        let tv = Television::with_state(true, false, 2, 0).unwrap();
        let buffer = rendered_buffer(&app_with(tv));
        assert_eq!(fg_of(&buffer, "MUTE"), Some(Color::White));
    }

    #[test]
    fn mute_label_is_unlit_while_off_even_if_muted() {
        let tv = Television::with_state(false, true, 2, 0).unwrap();
        let buffer = rendered_buffer(&app_with(tv));
        assert_eq!(fg_of(&buffer, "MUTE"), Some(Color::White));
    }

    #[test]
    fn buttons_other_than_power_are_dimmed_while_off() {
        let buffer = rendered_buffer(&app_with(Television::new()));
        assert_eq!(fg_of(&buffer, "Power"), theme::STYLE_CONTROL.fg);
        for button in Button::ALL.into_iter().filter(|&b| b != Button::Power) {
            assert_eq!(
                fg_of(&buffer, button_label(button)),
                theme::STYLE_DISABLED.fg,
                "{} should be dimmed",
                button
            );
        }
    }

    #[test]
    fn all_buttons_are_live_while_on() {
        let tv = Television::with_state(true, false, 0, 0).unwrap();
        let buffer = rendered_buffer(&app_with(tv));
        for button in Button::ALL {
            assert_eq!(
                fg_of(&buffer, button_label(button)),
                theme::STYLE_CONTROL.fg,
                "{} should be live",
                button
            );
        }
    }

    // -- Helpers --

    #[test]
    fn lcd_digits_are_three_columns_wide() {
        for digit in 0..10 {
            for row in lcd_digit(digit) {
                assert_eq!(row.chars().count(), 3);
            }
        }
    }

    #[test]
    fn lcd_one_differs_from_zero() {
        assert_ne!(lcd_digit(0), lcd_digit(1));
    }
}
