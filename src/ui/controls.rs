/// Sidebar controls: uploads, layout, VR session and navigation

use iced::widget::{button, column, pick_list, row, text};
use iced::{Alignment, Element};

use crate::scene::composer::{Layout, NEXT_BUTTON_ID, PREV_BUTTON_ID};
use crate::state::data::Side;
use crate::Message;

/// Per-eye upload buttons backed by the native file picker
pub fn upload_panel() -> Element<'static, Message> {
    column![
        text("Left eye images").size(12),
        button("Choose left images…")
            .on_press(Message::PickImages(Side::Left))
            .padding(8),
        text("Right eye images").size(12),
        button("Choose right images…")
            .on_press(Message::PickImages(Side::Right))
            .padding(8),
    ]
    .spacing(6)
    .into()
}

pub fn layout_picker(selected: Layout) -> Element<'static, Message> {
    column![
        text("Layout").size(12),
        pick_list(&Layout::ALL[..], Some(selected), Message::LayoutSelected),
    ]
    .spacing(6)
    .into()
}

pub fn vr_panel(vr_active: bool) -> Element<'static, Message> {
    let state_line = if vr_active {
        "Immersive session active"
    } else {
        "Flat screen"
    };
    column![
        text(state_line).size(12),
        button(if vr_active { "Exit VR" } else { "Enter VR" })
            .on_press(Message::ToggleVr)
            .padding(8),
    ]
    .spacing(6)
    .into()
}

/// Previous/Next plus the position counter. Hidden entirely by the caller
/// when the store is empty.
///
/// Inside an immersive session the native buttons are unreachable, so the
/// two actions route through the scene's click dispatch by element id
/// instead, the same path a controller click takes.
pub fn nav_row(current: usize, len: usize, vr_active: bool) -> Element<'static, Message> {
    let (prev, next) = if vr_active {
        (
            Message::SceneClicked(PREV_BUTTON_ID.to_string()),
            Message::SceneClicked(NEXT_BUTTON_ID.to_string()),
        )
    } else {
        (Message::PrevImage, Message::NextImage)
    };

    row![
        button("Previous").on_press(prev).padding(8),
        button("Next").on_press(next).padding(8),
        text(format!("{} of {}", current + 1, len)).size(14),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}
