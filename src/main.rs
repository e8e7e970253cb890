use iced::widget::{button, column, row, text, Column};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;

// Application modules
mod engine;
mod scene;
mod state;
mod texture;
mod ui;

use engine::{NavCommand, SceneHost, EYE_FILTER_COMPONENT};
use scene::{compose, Layout, Scene};
use state::data::Side;
use state::navigator::Navigator;
use state::store::PairStore;
use texture::loader::{self, LoadedPair};

/// Main application state
struct StereoViewer {
    /// Session-scoped catalog of uploaded pairs
    store: PairStore,
    /// Carousel cursor plus readiness gate
    navigator: Navigator,
    /// Spatial arrangement of the composed planes
    layout: Layout,
    /// Facade over the external 3D engine's state
    host: SceneHost,
    /// The scene tree composed from the current state
    scene: Scene,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User asked to pick images for one eye
    PickImages(Side),
    /// Background decode of the pair under the cursor finished
    PairLoaded(LoadedPair),
    /// Carousel navigation (buttons and arrow keys)
    PrevImage,
    NextImage,
    /// Direct jump from the thumbnail strip
    SelectPair(usize),
    LayoutSelected(Layout),
    /// Enter or leave the immersive session
    ToggleVr,
    /// A click arrived from inside the scene, identified by element id
    SceneClicked(String),
    /// Copy the composed scene markup to the clipboard
    CopyMarkup,
    /// Copy the composed scene as JSON to the clipboard
    CopyJson,
}

impl StereoViewer {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let mut host = SceneHost::new();
        // Explicit one-time registration; repeated start-up paths are a no-op
        host.register_component(EYE_FILTER_COMPONENT);

        let store = PairStore::new();
        let navigator = Navigator::new();
        let layout = Layout::Fan;
        let scene = compose(store.pairs(), navigator.current(), navigator.is_ready(), layout);
        host.sync_scene(&scene);

        println!("🕶️  Stereo Viewer initialized");

        (
            StereoViewer {
                store,
                navigator,
                layout,
                host,
                scene,
                status: "Ready. Upload left and right eye images to begin.".to_string(),
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImages(side) => {
                // Show the native file picker; the extension filter is
                // best-effort, undecodable picks degrade to blank slots
                let files = FileDialog::new()
                    .set_title(match side {
                        Side::Left => "Select Left Eye Images",
                        Side::Right => "Select Right Eye Images",
                    })
                    .add_filter(
                        "Images",
                        &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff"],
                    )
                    .pick_files();

                if let Some(paths) = files {
                    let images: Vec<String> = paths
                        .iter()
                        .map(|p| p.to_string_lossy().to_string())
                        .collect();
                    let added = images.len();
                    let created = self.store.append(side, images);
                    self.navigator.clamp(self.store.len());

                    self.status = format!(
                        "Added {} {} image(s) ({} new pair(s)). {} pairs total.",
                        added,
                        side.label(),
                        created,
                        self.store.len()
                    );
                    println!(
                        "📷 Imported {} {} image(s), store now holds {} pairs",
                        added,
                        side.label(),
                        self.store.len()
                    );

                    return self.reload_current();
                }

                Task::none()
            }
            Message::PairLoaded(loaded) => {
                // Results for an index the cursor already left are stale
                // and ignored inside mark_ready
                if loaded.any_loaded() {
                    self.navigator.mark_ready(loaded.index);
                    if loaded.index == self.navigator.current() {
                        let dims = loaded
                            .left
                            .as_ref()
                            .or(loaded.right.as_ref())
                            .map(|t| format!("{}x{}", t.width, t.height))
                            .unwrap_or_default();
                        self.status = format!("Pair {} ready ({}).", loaded.index + 1, dims);
                    }
                } else if loaded.index == self.navigator.current() {
                    self.status = format!("Nothing renderable in pair {}.", loaded.index + 1);
                }
                self.recompose();
                Task::none()
            }
            Message::PrevImage => {
                self.navigator.prev(self.store.len());
                self.reload_current()
            }
            Message::NextImage => {
                self.navigator.next(self.store.len());
                self.reload_current()
            }
            Message::SelectPair(index) => {
                self.navigator.select(index, self.store.len());
                self.reload_current()
            }
            Message::LayoutSelected(layout) => {
                self.layout = layout;
                self.recompose();
                Task::none()
            }
            Message::ToggleVr => {
                if self.host.is_vr_active() {
                    self.host.exit_vr();
                    self.status = "Exited VR. All planes visible to both eyes.".to_string();
                } else {
                    self.host.enter_vr();
                    self.status = "Entered VR. Planes split onto per-eye layers.".to_string();
                }
                Task::none()
            }
            Message::SceneClicked(id) => match self.host.click(&id) {
                Some(NavCommand::Previous) => {
                    self.navigator.prev(self.store.len());
                    self.reload_current()
                }
                Some(NavCommand::Next) => {
                    self.navigator.next(self.store.len());
                    self.reload_current()
                }
                None => Task::none(),
            },
            Message::CopyMarkup => {
                let markup = self.scene.to_markup();
                self.status = "Scene markup copied to clipboard.".to_string();
                iced::clipboard::write(markup)
            }
            Message::CopyJson => match self.scene.to_json() {
                Ok(json) => {
                    self.status = "Scene JSON copied to clipboard.".to_string();
                    iced::clipboard::write(json)
                }
                Err(e) => {
                    self.status = format!("Failed to serialize scene: {e}");
                    Task::none()
                }
            },
        }
    }

    /// Recompose the scene and kick off the decode of the pair now under
    /// the cursor. The composer shows no geometry until the decode lands.
    fn reload_current(&mut self) -> Task<Message> {
        self.recompose();

        let index = self.navigator.current();
        match self.store.get(index) {
            Some(pair) if pair.has_any() => Task::perform(
                loader::load_pair(index, pair.clone()),
                Message::PairLoaded,
            ),
            _ => Task::none(),
        }
    }

    /// Re-derive the scene tree from current state and mirror it into the
    /// engine (which is where meshes are created and layers assigned)
    fn recompose(&mut self) {
        self.scene = compose(
            self.store.pairs(),
            self.navigator.current(),
            self.navigator.is_ready(),
            self.layout,
        );
        self.host.sync_scene(&self.scene);
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut sidebar: Column<Message> = column![
            text("Stereo Viewer").size(28),
            ui::controls::upload_panel(),
            ui::controls::layout_picker(self.layout),
            ui::controls::vr_panel(self.host.is_vr_active()),
        ]
        .spacing(16);

        // Navigation only exists once there is something to navigate
        if !self.store.is_empty() {
            sidebar = sidebar.push(ui::controls::nav_row(
                self.navigator.current(),
                self.store.len(),
                self.host.is_vr_active(),
            ));
        }

        sidebar = sidebar
            .push(button("Copy scene markup").on_press(Message::CopyMarkup).padding(8))
            .push(button("Copy scene JSON").on_press(Message::CopyJson).padding(8))
            .push(text(&self.status).size(13));

        let content = column![
            ui::viewer::preview(&self.store, &self.navigator, &self.host),
            ui::viewer::pair_strip(&self.store, self.navigator.current()),
        ]
        .spacing(12)
        .width(Length::Fill);

        row![
            sidebar.width(Length::Fixed(260.0)).padding(16),
            content.padding(16),
        ]
        .align_y(Alignment::Start)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }

    /// Arrow keys drive the carousel. One subscription for the whole
    /// application lifetime; nothing re-registers on store changes.
    fn subscription(&self) -> Subscription<Message> {
        iced::keyboard::on_key_press(handle_key)
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn handle_key(
    key: iced::keyboard::Key,
    _modifiers: iced::keyboard::Modifiers,
) -> Option<Message> {
    use iced::keyboard::key::Named;
    use iced::keyboard::Key;

    match key {
        Key::Named(Named::ArrowLeft) => Some(Message::PrevImage),
        Key::Named(Named::ArrowRight) => Some(Message::NextImage),
        _ => None,
    }
}

fn main() -> iced::Result {
    iced::application("Stereo Viewer", StereoViewer::update, StereoViewer::view)
        .subscription(StereoViewer::subscription)
        .theme(StereoViewer::theme)
        .centered()
        .run_with(StereoViewer::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewer() -> StereoViewer {
        let (viewer, _) = StereoViewer::new();
        viewer
    }

    fn add_pair(viewer: &mut StereoViewer, left: &str, right: &str) {
        viewer.store.append(Side::Left, vec![left.to_string()]);
        viewer.store.append(Side::Right, vec![right.to_string()]);
        viewer.navigator.clamp(viewer.store.len());
        viewer.recompose();
    }

    #[test]
    fn test_startup_composes_the_placeholder() {
        let viewer = viewer();
        assert_eq!(viewer.scene.placeholder_count(), 5);
        assert!(viewer.host.is_registered(EYE_FILTER_COMPONENT));
    }

    #[test]
    fn test_geometry_appears_only_after_load_confirmation() {
        let mut viewer = viewer();
        add_pair(&mut viewer, "a.jpg", "b.jpg");
        assert_eq!(viewer.scene.textured_planes().count(), 0);

        let _ = viewer.update(Message::PairLoaded(LoadedPair {
            index: 0,
            left: Some(texture::loader::TextureInfo {
                path: "a.jpg".to_string(),
                width: 800,
                height: 600,
            }),
            right: None,
        }));

        assert!(viewer.navigator.is_ready());
        assert!(viewer.scene.textured_planes().count() > 0);
    }

    #[test]
    fn test_stale_load_result_is_ignored() {
        let mut viewer = viewer();
        add_pair(&mut viewer, "a.jpg", "b.jpg");
        add_pair(&mut viewer, "c.jpg", "d.jpg");
        viewer.navigator.next(viewer.store.len()); // cursor now at pair 1

        let _ = viewer.update(Message::PairLoaded(LoadedPair {
            index: 0,
            left: Some(texture::loader::TextureInfo {
                path: "a.jpg".to_string(),
                width: 800,
                height: 600,
            }),
            right: None,
        }));

        assert!(!viewer.navigator.is_ready());
        assert_eq!(viewer.scene.textured_planes().count(), 0);
    }

    #[test]
    fn test_scene_click_routes_by_element_id() {
        let mut viewer = viewer();
        add_pair(&mut viewer, "a.jpg", "b.jpg");
        add_pair(&mut viewer, "c.jpg", "d.jpg");
        assert_eq!(viewer.navigator.current(), 0);

        let _ = viewer.update(Message::SceneClicked("nextButton".to_string()));
        assert_eq!(viewer.navigator.current(), 1);

        let _ = viewer.update(Message::SceneClicked("prevButton".to_string()));
        assert_eq!(viewer.navigator.current(), 0);

        // Clicks on anything else fall through
        let _ = viewer.update(Message::SceneClicked("leftPlane0".to_string()));
        assert_eq!(viewer.navigator.current(), 0);
    }

    #[test]
    fn test_vr_toggle_drives_the_layer_split() {
        use scene::layers::{LAYER_BOTH_EYES, LAYER_LEFT_EYE};

        let mut viewer = viewer();
        add_pair(&mut viewer, "a.jpg", "b.jpg");
        viewer.navigator.mark_ready(0);
        viewer.recompose();

        let _ = viewer.update(Message::ToggleVr);
        assert_eq!(viewer.host.layer_of("leftPlane0"), Some(LAYER_LEFT_EYE));

        let _ = viewer.update(Message::ToggleVr);
        assert_eq!(viewer.host.layer_of("leftPlane0"), Some(LAYER_BOTH_EYES));
    }

    #[test]
    fn test_navigation_on_empty_store_keeps_the_placeholder() {
        let mut viewer = viewer();
        let _ = viewer.update(Message::NextImage);
        let _ = viewer.update(Message::PrevImage);

        assert_eq!(viewer.navigator.current(), 0);
        assert_eq!(viewer.scene.placeholder_count(), 5);
    }
}
