//! # User Information Panel
//!
//! Nine focusable lines: seven text buffers, the gender radio, and the
//! Store Data checkbox. The focused line carries a marker and a cursor.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use vf_core::record::Sex;

use crate::app::{App, Field};

pub fn view_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::bordered().title("User Information");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| field_line(app, field))
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(app: &App, field: Field) -> Line<'static> {
    let focused = app.focus == field;
    let marker = if focused { "> " } else { "  " };
    let value = match field {
        Field::Sex => radio_text(app.sex),
        Field::StoreData => checkbox_text(app.store_data),
        _ => {
            let mut text = app.buffer(field).to_string();
            if focused {
                text.push('_');
            }
            text
        }
    };
    let value_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(format!("{marker}{:<16}", field.label())),
        Span::styled(value, value_style),
    ])
}

fn radio_text(sex: Sex) -> String {
    Sex::ALL
        .iter()
        .map(|&option| {
            let mark = if option == sex { "(x)" } else { "( )" };
            format!("{mark} {option}")
        })
        .collect::<Vec<_>>()
        .join("   ")
}

fn checkbox_text(store_data: bool) -> String {
    let mark = if store_data { "[x]" } else { "[ ]" };
    mark.to_string()
}
