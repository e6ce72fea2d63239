//! # Frame Rendering
//!
//! One frame stacks three bordered regions and two single-line strips:
//!
//! - `form` - the User Information panel, one line per field
//! - message line - validation message in red, or the storage confirmation
//! - `charts` - BMI and Visceral Fat classification band charts
//! - help line - key bindings

pub mod charts;
pub mod form;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Render one frame from the current form state.
pub fn draw(frame: &mut Frame, app: &App) {
    let [form_area, message_area, bmi_area, vf_area, help_area] = Layout::vertical([
        Constraint::Length(11),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    form::view_form(frame, form_area, app);
    view_message(frame, message_area, app);
    charts::view_bmi_chart(frame, bmi_area, app.results.as_ref().map(|r| &r.bmi));
    charts::view_visceral_fat_chart(
        frame,
        vf_area,
        app.results.as_ref().map(|r| &r.visceral_fat),
    );
    view_help(frame, help_area);
}

fn view_message(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(error) = &app.error {
        Line::styled(error.clone(), Style::default().fg(Color::Red))
    } else if let Some(status) = &app.status {
        Line::styled(status.clone(), Style::default().fg(Color::Green))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn view_help(frame: &mut Frame, area: Rect) {
    let help = "Tab/Up/Down move  Space toggle  Enter calculate  Ctrl+R reset  Esc quit";
    frame.render_widget(
        Paragraph::new(Line::styled(help, Style::default().fg(Color::Cyan))),
        area,
    );
}
