/// Placeholder tableau shown while no pairs are uploaded
///
/// A flat rendition of the instructional scene (text plus primitive
/// shapes) drawn with the iced canvas API.

use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Size};

use crate::Message;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderTableau;

impl canvas::Program<Message> for PlaceholderTableau {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let w = bounds.width;
        let h = bounds.height;

        // Dark backdrop matching the engine's empty-scene background
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(w, h),
            Color::from_rgb8(0x10, 0x10, 0x10),
        );

        frame.fill_text(canvas::Text {
            content: "Upload separate left and right eye images to view in 3D".to_string(),
            position: Point::new(w / 2.0, h * 0.18),
            color: Color::WHITE,
            size: 18.0.into(),
            horizontal_alignment: iced::alignment::Horizontal::Center,
            ..canvas::Text::default()
        });

        // Ground plane
        frame.fill_rectangle(
            Point::new(w * 0.2, h * 0.78),
            Size::new(w * 0.6, h * 0.06),
            Color::from_rgb8(0x7B, 0xC8, 0xA4),
        );

        // Box
        let box_side = h * 0.16;
        frame.fill_rectangle(
            Point::new(w * 0.3 - box_side / 2.0, h * 0.78 - box_side),
            Size::new(box_side, box_side),
            Color::from_rgb8(0x4C, 0xC3, 0xD9),
        );

        // Sphere
        let radius = h * 0.11;
        let sphere = canvas::Path::circle(Point::new(w * 0.5, h * 0.78 - radius), radius);
        frame.fill(&sphere, Color::from_rgb8(0xEF, 0x2D, 0x5E));

        // Cylinder
        let cyl_w = h * 0.09;
        let cyl_h = h * 0.2;
        frame.fill_rectangle(
            Point::new(w * 0.7 - cyl_w / 2.0, h * 0.78 - cyl_h),
            Size::new(cyl_w, cyl_h),
            Color::from_rgb8(0xFF, 0xC6, 0x5D),
        );

        vec![frame.into_geometry()]
    }
}
