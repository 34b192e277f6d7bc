// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! image pipeline.
//!
//! The `App` struct wires together the gallery controller, localization, the
//! remote image cache and the diagnostics log, and translates gallery effects
//! into tasks: staged transition timers and image downloads.

mod message;
pub mod paths;
pub mod session_state;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SessionStore;
use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::diagnostics::{
    AppStateEvent, DiagnosticsCollector, ErrorEvent, ErrorType, WarningEvent, WarningType,
};
use crate::domain::gallery::EventCapacity;
use crate::error::Error;
use crate::gallery::{self, Effect, Gallery, GallerySettings, Position};
use crate::i18n::fluent::I18n;
use crate::media::{self, AssetLocator, CachedImage, ImageCache};
use crate::ui::gallery_view::ImageState;
use iced::{window, Element, Subscription, Task, Theme};
use session_state::FileSessionStore;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    gallery: Gallery,
    locator: AssetLocator,
    images: ImageCache,
    /// URLs with a download in progress.
    in_flight: HashSet<String>,
    /// URLs whose last download failed, with the reason.
    failures: HashMap<String, Error>,
    diagnostics: DiagnosticsCollector,
    /// i18n key of the startup warning still on screen.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("gallery", &self.gallery)
            .field("images", &self.images)
            .field("in_flight", &self.in_flight.len())
            .field("failures", &self.failures.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings.
///
/// Close requests are delivered to the application so the session can be
/// ended before exiting.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, catalog: Catalog) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, catalog.clone())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads configuration and session state, then starts fetching the
    /// displayed artwork and its neighbours.
    fn new(flags: Flags, catalog: Catalog) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let (store, session_warning) = FileSessionStore::load();

        let warnings = [
            (WarningType::Configuration, config_warning),
            (WarningType::Configuration, flags.catalog_warning),
            (WarningType::Session, session_warning),
        ];

        let mut app = Self::with_parts(i18n, &config, flags.layout, catalog, Box::new(store));
        let handle = app.diagnostics.handle();
        for (warning_type, key) in warnings {
            if let Some(key) = key {
                handle.log_warning(WarningEvent::new(warning_type, key.clone()));
                app.notice.get_or_insert(key);
            }
        }

        let task = app.load_displayed(true);
        app.diagnostics.process_pending();
        (app, task)
    }

    /// Assembles the application from already loaded parts.
    fn with_parts(
        i18n: I18n,
        config: &Config,
        layout: Option<gallery::Layout>,
        catalog: Catalog,
        store: Box<dyn SessionStore>,
    ) -> Self {
        let diagnostics = DiagnosticsCollector::new(EventCapacity::default());
        let settings = GallerySettings {
            layout: layout.unwrap_or_else(|| config.layout()),
            item_count: catalog.len(),
            swipe_threshold: config.swipe_threshold(),
            short_delay: config.short_delay(),
            overlay_delay: config.overlay_delay(),
        };
        let gallery = Gallery::new(settings, store, diagnostics.handle());

        Self {
            i18n,
            catalog,
            gallery,
            locator: AssetLocator::from_config(config),
            images: ImageCache::new(config.cache_capacity()),
            in_flight: HashSet::new(),
            failures: HashMap::new(),
            diagnostics,
            notice: None,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.displayed_position() {
            Position::Artwork(item) => match self.catalog.get(item) {
                Some(artwork) => format!("{} - {app_name}", artwork.title),
                None => app_name,
            },
            Position::Intro | Position::Menu => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Gallery(gallery_message) => self.handle_gallery_message(gallery_message),
            Message::ImageFetched { url, result } => {
                self.handle_image_fetched(url, result);
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::WindowCloseRequested(_id) => {
                self.end_session();
                iced::exit()
            }
        };
        self.diagnostics.process_pending();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            catalog: &self.catalog,
            image: self.displayed_image(),
            notice: self.notice.as_deref(),
        })
    }

    /// Logs the image cache counters and clears the session store.
    fn end_session(&mut self) {
        let stats = self.images.stats();
        self.diagnostics
            .handle()
            .log_state(AppStateEvent::ImageCacheSummary {
                hits: stats.hits,
                misses: stats.misses,
                evictions: stats.evictions,
                hit_rate: stats.hit_rate(),
            });
        self.gallery.end_session();
    }

    fn handle_gallery_message(&mut self, message: gallery::Message) -> Task<Message> {
        let resized = matches!(message, gallery::Message::ViewportResized(_));
        let task = match self.gallery.handle(message) {
            Effect::None => Task::none(),
            Effect::ScheduleTransition { seq, delay } => Task::perform(
                async move {
                    tokio::time::sleep(delay).await;
                    seq
                },
                |seq| Message::Gallery(gallery::Message::TransitionElapsed(seq)),
            ),
            Effect::ShowIndex(_) => self.load_displayed(true),
        };

        // A width change may select another asset tier.
        if resized {
            Task::batch([task, self.load_displayed(false)])
        } else {
            task
        }
    }

    fn handle_image_fetched(&mut self, url: String, result: Result<media::RemoteImage, Error>) {
        self.in_flight.remove(&url);
        match result {
            Ok(remote) => {
                self.failures.remove(&url);
                let image = CachedImage::from_bytes(remote.bytes, remote.size);
                // A late neighbour must not push the artwork on screen out.
                match self.displayed_url() {
                    Some(shown) => {
                        self.images.insert_keeping(url, image, &shown);
                    }
                    None => self.images.insert(url, image),
                }
            }
            Err(err) => {
                let error_type = match err {
                    Error::Network(_) => ErrorType::Network,
                    Error::Decode(_) => ErrorType::Decode,
                    Error::Io(_) => ErrorType::Io,
                    Error::Config(_) | Error::Catalog(_) => ErrorType::Other,
                };
                self.diagnostics
                    .handle()
                    .log_error(ErrorEvent::new(error_type, format!("{url}: {err}")));
                self.failures.insert(url, err);
            }
        }
    }

    /// Address of a catalog item at the tier matching the current viewport.
    fn artwork_url(&self, item: usize) -> Option<String> {
        self.catalog
            .get(item)
            .map(|artwork| self.locator.url_for(self.gallery.size_tier(), &artwork.id))
    }

    /// Requests the displayed artwork and its neighbours.
    ///
    /// `shown` marks a freshly displayed position: the cache lookup counts
    /// toward hit statistics and a previous failure is retried.
    fn load_displayed(&mut self, shown: bool) -> Task<Message> {
        let mut tasks = Vec::new();

        if let Position::Artwork(item) = self.gallery.displayed_position() {
            if let Some(url) = self.artwork_url(item) {
                let cached = if shown {
                    self.images.get(&url).is_some()
                } else {
                    self.images.contains(&url)
                };
                if !cached {
                    if shown {
                        self.failures.remove(&url);
                    }
                    tasks.push(self.request(url));
                }
            }
        }

        let neighbours: Vec<String> = self
            .gallery
            .neighbour_items()
            .into_iter()
            .filter_map(|item| self.artwork_url(item))
            .collect();
        for url in self.images.urls_to_prefetch(&neighbours) {
            tasks.push(self.request(url));
        }

        Task::batch(tasks)
    }

    /// Address of the artwork on screen, if any.
    fn displayed_url(&self) -> Option<String> {
        match self.gallery.displayed_position() {
            Position::Artwork(item) => self.artwork_url(item),
            Position::Intro | Position::Menu => None,
        }
    }

    /// Starts a download unless the image is cached, loading, or failed.
    fn request(&mut self, url: String) -> Task<Message> {
        if self.images.contains(&url)
            || self.in_flight.contains(&url)
            || self.failures.contains_key(&url)
        {
            return Task::none();
        }

        self.in_flight.insert(url.clone());
        let key = url.clone();
        Task::perform(media::fetch_image(url), move |result| {
            Message::ImageFetched { url: key, result }
        })
    }

    fn displayed_image(&self) -> ImageState<'_> {
        let Some(url) = self.displayed_url() else {
            return ImageState::Loading;
        };

        if let Some(image) = self.images.peek(&url) {
            ImageState::Ready(image)
        } else if let Some(error) = self.failures.get(&url) {
            ImageState::Failed(error)
        } else {
            ImageState::Loading
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::MemorySessionStore;
    use crate::diagnostics::DiagnosticEventKind;
    use crate::domain::gallery::{ImageSize, ViewportSize};
    use crate::gallery::Layout;
    use crate::media::RemoteImage;

    fn app(layout: Layout) -> App {
        app_with(layout, &Config::default())
    }

    fn app_with(layout: Layout, config: &Config) -> App {
        let catalog = Catalog::embedded().expect("embedded catalog");
        App::with_parts(
            I18n::new(Some("en-US".to_string()), config),
            config,
            Some(layout),
            catalog,
            Box::new(MemorySessionStore::new()),
        )
    }

    fn deliver(app: &mut App, item: usize) {
        let url = app.artwork_url(item).expect("url");
        let _ = app.update(Message::ImageFetched {
            url: url.clone(),
            result: Ok(remote(&url)),
        });
    }

    fn remote(url: &str) -> RemoteImage {
        RemoteImage {
            url: url.to_string(),
            bytes: vec![0; 8],
            size: ImageSize::new(2000, 1000),
        }
    }

    #[test]
    fn title_shows_app_name_on_intro() {
        let app = app(Layout::Bookends);
        assert_eq!(app.title(), "Viewing Room");
    }

    #[test]
    fn title_shows_artwork_in_plain_layout() {
        let app = app(Layout::Plain);
        let first = app.catalog.get(0).expect("first artwork").title.clone();
        assert_eq!(app.title(), format!("{first} - Viewing Room"));
    }

    #[test]
    fn layout_flag_overrides_config() {
        assert_eq!(app(Layout::Plain).gallery.layout(), Layout::Plain);
        assert_eq!(app(Layout::Bookends).gallery.layout(), Layout::Bookends);
    }

    #[test]
    fn request_is_deduplicated_while_in_flight() {
        let mut app = app(Layout::Plain);
        let url = app.artwork_url(0).expect("url");

        let _ = app.request(url.clone());
        assert!(app.in_flight.contains(&url));
        let _ = app.request(url.clone());
        assert_eq!(app.in_flight.len(), 1);
    }

    #[test]
    fn fetched_image_is_cached_and_displayed() {
        let mut app = app(Layout::Plain);
        let url = app.artwork_url(0).expect("url");
        let _ = app.request(url.clone());

        let _ = app.update(Message::ImageFetched {
            url: url.clone(),
            result: Ok(remote(&url)),
        });

        assert!(app.in_flight.is_empty());
        assert!(app.images.contains(&url));
        assert!(matches!(app.displayed_image(), ImageState::Ready(image) if image.size.width == 2000));
    }

    #[test]
    fn failed_fetch_is_recorded_and_logged() {
        let mut app = app(Layout::Plain);
        let url = app.artwork_url(0).expect("url");

        let _ = app.update(Message::ImageFetched {
            url: url.clone(),
            result: Err(Error::Network("timeout".into())),
        });

        assert!(matches!(app.displayed_image(), ImageState::Failed(Error::Network(_))));
        assert!(app.diagnostics.events().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::Error { event } if event.error_type == ErrorType::Network
        )));

        // Failed URLs are not re-requested until the position is shown again.
        let _ = app.request(url.clone());
        assert!(!app.in_flight.contains(&url));
    }

    #[test]
    fn intro_has_no_image() {
        let app = app(Layout::Bookends);
        assert!(matches!(app.displayed_image(), ImageState::Loading));
        assert!(app.artwork_url(99).is_none());
    }

    #[test]
    fn narrow_viewport_selects_smaller_tier_in_plain_layout() {
        let mut app = app(Layout::Plain);
        let wide = app.artwork_url(0).expect("url");

        let _ = app.update(Message::Gallery(gallery::Message::ViewportResized(
            ViewportSize::new(400.0, 800.0),
        )));

        let narrow = app.artwork_url(0).expect("url");
        assert_ne!(wide, narrow);
        assert!(app.in_flight.contains(&narrow));
    }

    #[test]
    fn dismiss_notice_clears_banner() {
        let mut app = app(Layout::Plain);
        app.notice = Some("notification-config-load-error".to_string());
        let _ = app.update(Message::DismissNotice);
        assert!(app.notice.is_none());
    }

    #[test]
    fn navigation_in_plain_layout_moves_displayed_index() {
        let mut app = app(Layout::Plain);
        let _ = app.update(Message::Gallery(gallery::Message::NavigateRight));
        assert_eq!(app.gallery.displayed_index(), 1);
        assert!(!app.diagnostics.is_empty());
    }

    #[test]
    fn late_neighbours_keep_the_displayed_artwork_cached() {
        let mut config = Config::default();
        config.assets.cache_images = Some(2);
        let mut app = app_with(Layout::Plain, &config);

        let _ = app.update(Message::Gallery(gallery::Message::NavigateRight));
        assert_eq!(app.in_flight.len(), 3);

        deliver(&mut app, 1);
        deliver(&mut app, 0);
        deliver(&mut app, 2);

        assert!(app.in_flight.is_empty());
        assert!(matches!(app.displayed_image(), ImageState::Ready(_)));
    }

    #[test]
    fn single_slot_cache_keeps_the_displayed_artwork() {
        let mut config = Config::default();
        config.assets.cache_images = Some(1);
        let mut app = app_with(Layout::Plain, &config);

        deliver(&mut app, 0);
        deliver(&mut app, 1);

        assert!(matches!(app.displayed_image(), ImageState::Ready(_)));
        let neighbour = app.artwork_url(1).expect("url");
        assert!(!app.images.contains(&neighbour));
    }

    #[test]
    fn cached_neighbours_are_not_requested_again() {
        let mut app = app(Layout::Plain);
        deliver(&mut app, 1);

        let _ = app.load_displayed(false);
        let neighbour = app.artwork_url(1).expect("url");
        assert!(!app.in_flight.contains(&neighbour));
        assert!(app.in_flight.contains(&app.artwork_url(0).expect("url")));
    }

    #[test]
    fn ending_the_session_logs_cache_statistics() {
        let mut app = app(Layout::Plain);
        deliver(&mut app, 0);
        let _ = app.load_displayed(true);

        app.end_session();
        app.diagnostics.process_pending();

        assert!(app.diagnostics.events().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::AppState {
                state: AppStateEvent::ImageCacheSummary { hits: 1, misses: 0, .. }
            }
        )));
        assert!(app.diagnostics.events().any(|event| event.kind
            == DiagnosticEventKind::AppState {
                state: AppStateEvent::SessionEnded
            }));
    }
}
