use iced::widget::{button, checkbox, column, pick_list, progress_bar, row, scrollable, text, Column};
use iced::{Alignment, Element, Length, Theme};
use std::path::Path;

use crate::state::data::OutputFormat;
use crate::state::files::FileList;
use crate::Message;

/// Conversion progress as (files completed, files in batch)
pub type Progress = (usize, usize);

/// Left-hand panel: file list, list buttons, format selector, convert button and progress
pub fn view<'a>(
    files: &'a FileList,
    format: OutputFormat,
    converting: bool,
    progress: Progress,
    status: &'a str,
) -> Element<'a, Message> {
    let entries = files
        .entries()
        .iter()
        .enumerate()
        .fold(Column::new().spacing(4), |list, (index, path)| {
            list.push(entry_row(index, path, files.is_selected(index)))
        });

    let list_buttons = row![
        button("Add File").on_press(Message::AddFile),
        button("Add Files").on_press(Message::AddFiles),
        button("Add Folder").on_press(Message::AddFolder),
        button("Remove Selected")
            .on_press_maybe(files.has_selection().then_some(Message::RemoveSelected))
            .style(button::danger),
    ]
    .spacing(8);

    let format_row = row![
        text("Output format:"),
        pick_list(OutputFormat::ALL, Some(format), Message::FormatSelected),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    // Disabled for the whole batch
    let convert_button = button("Convert")
        .on_press_maybe((!converting).then_some(Message::Convert))
        .padding(10)
        .width(Length::Fill);

    let (done, total) = progress;
    let progress = progress_bar(0.0..=total.max(1) as f32, done as f32).height(16.0);

    column![
        text("Files to convert:").size(18),
        scrollable(entries).height(Length::Fill),
        list_buttons,
        format_row,
        convert_button,
        progress,
        text(status).size(14),
    ]
    .spacing(12)
    .into()
}

/// One file entry: a checkbox for multi-selection and the path, which previews on click
fn entry_row(index: usize, path: &Path, selected: bool) -> Element<'_, Message> {
    let style: fn(&Theme, button::Status) -> button::Style = if selected {
        button::primary
    } else {
        button::text
    };

    row![
        checkbox("", selected).on_toggle(move |checked| Message::EntryToggled(index, checked)),
        button(text(path.display().to_string()).size(14))
            .on_press(Message::EntryClicked(index))
            .style(style)
            .width(Length::Fill),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}
