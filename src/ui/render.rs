use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::features::cake::CakeState;
use crate::features::ice_cream::IceCreamState;
use crate::features::users::UsersState;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, section_columns};
use crate::ui::theme::{
    COUNT_TEXT, GLOBAL_BORDER, LOADING_TEXT, SECTION_TITLE, STATUS_ERROR,
};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let (header, body, footer) = layout_regions(frame.area());

    frame.render_widget(Header::new().widget(), header);

    let (cake_col, ice_col, users_col) = section_columns(body);
    draw_cake(frame, &state.cake, cake_col);
    draw_ice_cream(frame, &state.ice_cream, app.restock_qty(), ice_col);
    draw_users(frame, &state.users, users_col);

    frame.render_widget(Footer::new().widget(footer), footer);
}

fn section_block(title: &'static str) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(SECTION_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_cake(frame: &mut Frame<'_>, cake: &CakeState, area: Rect) {
    let lines = vec![
        Line::from(format!("Cake count: {}", cake.count)),
        Line::from(""),
        Line::from("o  order 1"),
        Line::from("r  restock 5"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(COUNT_TEXT))
            .block(section_block(" Cake ")),
        area,
    );
}

fn draw_ice_cream(frame: &mut Frame<'_>, ice_cream: &IceCreamState, restock_qty: i64, area: Rect) {
    let lines = vec![
        Line::from(format!("Ice cream count: {}", ice_cream.count)),
        Line::from(""),
        Line::from("i      order 1"),
        Line::from(format!("Enter  restock {restock_qty}  (+/- to adjust)")),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(COUNT_TEXT))
            .block(section_block(" Ice cream ")),
        area,
    );
}

/// The users section mirrors the loading / error / list render rules of
/// the fetch lifecycle: a loading line while the fetch is in flight, the
/// failure text once rejected, and the names whenever the list is
/// non-empty.
fn draw_users(frame: &mut Frame<'_>, users: &UsersState, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    if users.is_loading {
        items.push(ListItem::new(Line::styled(
            "Loading...",
            Style::default().fg(LOADING_TEXT),
        )));
    }

    if !users.is_loading && !users.error_message.is_empty() {
        items.push(ListItem::new(Line::styled(
            users.error_message.clone(),
            Style::default().fg(STATUS_ERROR),
        )));
    }

    for user in &users.users {
        items.push(ListItem::new(Line::styled(
            user.name.clone(),
            Style::default().fg(COUNT_TEXT),
        )));
    }

    frame.render_widget(List::new(items).block(section_block(" Users ")), area);
}
