use iced::widget::image::{FilterMethod, Handle, Image};
use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, ContentFit, Element, Length, Size};

use super::{PADDING, PANEL_SPACING, PREVIEW_PORTION, FILE_PANEL_PORTION};
use crate::state::preview::{PreviewController, PreviewDisplay};
use crate::Message;

/// Height of the navigation row plus its spacing above
const NAV_HEIGHT: f32 = 44.0;

/// Pixel size available to the page image for a given window size
pub fn viewport_for(window: Size) -> (u32, u32) {
    let share = PREVIEW_PORTION as f32 / (PREVIEW_PORTION + FILE_PANEL_PORTION) as f32;
    let width = (window.width - 2.0 * PADDING - PANEL_SPACING) * share;
    let height = window.height - 2.0 * PADDING - NAV_HEIGHT;
    (width.max(1.0) as u32, height.max(1.0) as u32)
}

/// Right-hand panel: scrollable page image with previous/next and a "current/total" label
pub fn view<'a>(preview: &'a PreviewController, handle: Option<&'a Handle>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match (preview.display(), handle) {
        (PreviewDisplay::Page(_), Some(handle)) => Image::new(handle.clone())
            .content_fit(ContentFit::None)
            .filter_method(FilterMethod::Linear)
            .into(),
        (PreviewDisplay::Error(message), _) => text(message).into(),
        _ => text("PDF preview").size(20).into(),
    };

    let page = scrollable(container(content).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let navigation = row![
        button("Previous").on_press_maybe(preview.can_go_previous().then_some(Message::PreviousPage)),
        text(preview.page_label()),
        button("Next").on_press_maybe(preview.can_go_next().then_some(Message::NextPage)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    column![page, container(navigation).center_x(Length::Fill)]
        .spacing(12)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_takes_two_thirds_of_content_width() {
        // 1000 - 40 padding - 20 spacing = 940, two thirds of that
        assert_eq!(viewport_for(Size::new(1000.0, 700.0)), (626, 616));
    }

    #[test]
    fn test_viewport_never_collapses() {
        assert_eq!(viewport_for(Size::new(10.0, 10.0)), (1, 1));
    }
}
