//! # Classification Band Charts
//!
//! Each index renders as a heading on its category color, a row of
//! colored band segments with the range printed inside each one, and
//! the band names underneath. Before the first calculate the chart
//! area shows a hint instead.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use vf_core::calculations::bmi::BmiResult;
use vf_core::calculations::visceral_fat::VisceralFatResult;
use vf_core::categories::{BmiCategory, ChartColor, VisceralFatCategory};

pub fn view_bmi_chart(frame: &mut Frame, area: Rect, result: Option<&BmiResult>) {
    let block = Block::bordered().title("BMI");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(result) = result else {
        frame.render_widget(placeholder(), inner);
        return;
    };

    let heading = format!(
        "Your BMI is {:.2} kg/m^2 - {}",
        result.bmi,
        result.category.display_name()
    );
    let bands: Vec<Band> = BmiCategory::ALL.iter().map(Band::from_bmi_band).collect();
    frame.render_widget(
        band_chart(heading, result.category.color(), &bands, inner.width),
        inner,
    );
}

pub fn view_visceral_fat_chart(frame: &mut Frame, area: Rect, result: Option<&VisceralFatResult>) {
    let block = Block::bordered().title("Visceral Fat");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(result) = result else {
        frame.render_widget(placeholder(), inner);
        return;
    };

    let heading = format!(
        "Your Visceral Fat is {:.2} cm^2 - {}",
        result.visceral_fat_cm2,
        result.category.display_name()
    );
    let bands: Vec<Band> = VisceralFatCategory::ALL
        .iter()
        .map(Band::from_visceral_fat_band)
        .collect();
    frame.render_widget(
        band_chart(heading, result.category.color(), &bands, inner.width),
        inner,
    );
}

/// One classification band: its range text, name, and fill color.
struct Band {
    range: &'static str,
    name: &'static str,
    color: ChartColor,
}

impl Band {
    fn from_bmi_band(category: &BmiCategory) -> Band {
        Band {
            range: category.range_label(),
            name: category.display_name(),
            color: category.color(),
        }
    }

    fn from_visceral_fat_band(category: &VisceralFatCategory) -> Band {
        Band {
            range: category.range_label(),
            name: category.display_name(),
            color: category.color(),
        }
    }
}

fn band_chart(
    heading: String,
    heading_color: ChartColor,
    bands: &[Band],
    width: u16,
) -> Paragraph<'static> {
    let segment_width = (width as usize / bands.len().max(1)).max(1);

    let heading_line = Line::from(Span::styled(
        heading,
        Style::default()
            .fg(Color::Black)
            .bg(tui_color(heading_color)),
    ));
    let range_row = Line::from(
        bands
            .iter()
            .map(|band| {
                Span::styled(
                    fit(band.range, segment_width),
                    Style::default().fg(Color::Black).bg(tui_color(band.color)),
                )
            })
            .collect::<Vec<_>>(),
    );
    let name_row = Line::from(
        bands
            .iter()
            .map(|band| Span::raw(fit(band.name, segment_width)))
            .collect::<Vec<_>>(),
    );

    Paragraph::new(vec![heading_line, range_row, name_row])
}

fn placeholder() -> Paragraph<'static> {
    Paragraph::new(Line::styled(
        "Press Enter to calculate",
        Style::default().fg(Color::DarkGray),
    ))
}

fn tui_color(color: ChartColor) -> Color {
    let (r, g, b) = color.rgb();
    Color::Rgb(r, g, b)
}

/// Center `text` in a cell `width` columns wide, truncating if it
/// cannot fit.
fn fit(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{truncated:^width$}")
}
