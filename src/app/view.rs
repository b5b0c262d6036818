// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Plain widget layout over the feed snapshot: search controls on top,
//! then notice/loading/error lines, then the result list with pagination.
//! The view emits messages and reads state; it never triggers requests
//! itself.

use super::{App, Feed, Message};
use crate::domain::{PlatformFilter, PriceFilter};
use iced::{
    alignment::Vertical,
    widget::{pick_list, scrollable, text_input, Button, Column, Container, Row, Text},
    Element, Length,
};

/// Renders the application view.
pub(super) fn view(app: &App) -> Element<'_, Message> {
    let query = app.query();
    let feed = app.feed();

    let header = Text::new("Your One-Stop Solution for Stock Images").size(28);

    let search_input = text_input("Search for images (e.g., sky, beach, city)", query.term())
        .on_input(Message::TermChanged)
        .on_submit(Message::SearchRequested)
        .width(Length::Fill);

    let controls = Row::new()
        .push(search_input)
        .push(pick_list(
            PriceFilter::ALL,
            Some(query.price_filter()),
            Message::PriceFilterChanged,
        ))
        .push(pick_list(
            PlatformFilter::ALL,
            Some(query.platform_filter()),
            Message::PlatformFilterChanged,
        ))
        .push(Button::new(Text::new("Search Images")).on_press(Message::SearchRequested))
        .spacing(10)
        .align_y(Vertical::Center);

    let mut content = Column::new().push(header).push(controls).spacing(20).padding(20);

    if let Some(notice) = app.notice() {
        content = content.push(Text::new(notice.to_string()));
    }

    if feed.is_loading {
        content = content.push(Text::new("Loading..."));
    }

    if let Some(error) = feed.error_message.clone() {
        content = content.push(Text::new(error));
    }

    if !feed.items.is_empty() {
        content = content.push(results_section(query.term(), &feed));
    }

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The result list plus pagination controls. Only rendered when the latest
/// page has at least one item, like the original front end.
fn results_section<'a>(term: &str, feed: &Feed<'_>) -> Element<'a, Message> {
    let heading = Text::new(format!("Results for \"{term}\":")).size(22);

    let mut items = Column::new().spacing(10);
    for item in feed.items {
        let card = Row::new()
            .push(Text::new(format!("{}: {}", item.platform, item.price)))
            .push(
                Button::new(Text::new(format!("View on {}", item.platform)))
                    .on_press(Message::OpenOriginal(item.original_url.clone())),
            )
            .spacing(10)
            .align_y(Vertical::Center);
        items = items.push(card);
    }

    let pagination = Row::new()
        .push(
            Button::new(Text::new("Previous")).on_press_maybe(
                (feed.current_page > 1).then_some(Message::PreviousPagePressed),
            ),
        )
        .push(Text::new(format!("Page {}", feed.current_page)))
        .push(Button::new(Text::new("Next")).on_press(Message::NextPagePressed))
        .spacing(10)
        .align_y(Vertical::Center);

    Column::new()
        .push(heading)
        .push(items)
        .push(pagination)
        .spacing(20)
        .into()
}
