/// Flat on-screen preview of the current pair
///
/// The 3D rendition belongs to the external engine; this panel shows the
/// same state flat: the pair under the cursor side by side, its current
/// render-layer assignments, and a thumbnail strip over all pairs.

use iced::widget::canvas::Canvas;
use iced::widget::image::{Handle, Image};
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::engine::SceneHost;
use crate::scene::layers::RenderLayer;
use crate::state::data::StereoPair;
use crate::state::navigator::Navigator;
use crate::state::store::PairStore;
use crate::Message;

use super::placeholder::PlaceholderTableau;

pub fn preview(store: &PairStore, nav: &Navigator, host: &SceneHost) -> Element<'static, Message> {
    if store.is_empty() {
        return Canvas::new(PlaceholderTableau)
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    }

    let index = nav.current();
    if !nav.is_ready() {
        return container(text(format!("Loading pair {}…", index + 1)).size(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut sides = row![].spacing(12);
    if let Some(pair) = store.get(index) {
        if let Some(path) = &pair.left {
            sides = sides.push(eye_panel(
                "Left eye",
                path.clone(),
                host.layer_of(&format!("leftPlane{index}")),
            ));
        }
        if let Some(path) = &pair.right {
            sides = sides.push(eye_panel(
                "Right eye",
                path.clone(),
                host.layer_of(&format!("rightPlane{index}")),
            ));
        }
    }

    container(sides)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding(12)
        .into()
}

fn eye_panel(
    label: &str,
    path: String,
    layer: Option<RenderLayer>,
) -> Element<'static, Message> {
    let caption = match layer {
        Some(layer) => format!("{label} · render layer {}", layer.0),
        None => label.to_string(),
    };

    column![
        Image::new(Handle::from_path(path)).width(Length::Fill),
        text(caption).size(12),
    ]
    .spacing(4)
    .align_x(Alignment::Center)
    .width(Length::FillPortion(1))
    .into()
}

/// One selectable thumbnail per pair, wrapping to the panel width
pub fn pair_strip(store: &PairStore, current: usize) -> Element<'static, Message> {
    let thumbs: Vec<Element<'static, Message>> = store
        .iter()
        .enumerate()
        .map(|(index, pair)| thumb(index, pair, index == current))
        .collect();

    Wrap::with_elements(thumbs)
        .spacing(8.0)
        .line_spacing(8.0)
        .into()
}

fn thumb(index: usize, pair: &StereoPair, selected: bool) -> Element<'static, Message> {
    let sides = match (pair.left.is_some(), pair.right.is_some()) {
        (true, true) => "L+R",
        (true, false) => "L only",
        (false, true) => "R only",
        (false, false) => "empty",
    };
    let marker = if selected { "▶ " } else { "" };
    let label = format!("{marker}{} · {sides}", index + 1);

    let mut content = column![].spacing(2).align_x(Alignment::Center);
    if let Some(path) = pair.left.clone().or_else(|| pair.right.clone()) {
        content = content.push(Image::new(Handle::from_path(path)).width(Length::Fixed(96.0)));
    }
    content = content.push(text(label).size(12));

    button(content)
        .on_press(Message::SelectPair(index))
        .padding(4)
        .into()
}
