// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between location, forecast and
//! the screens.
//!
//! The `App` struct owns the location provider, the forecast store and the
//! day/night toggle. Collaborators (location platform, forecast client,
//! geocoder) are built once from the config by [`Dependencies::from_config`]
//! and passed in explicitly.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::error::{Error, Result};
use crate::forecast::{ForecastClient, ForecastStore};
use crate::location::{
    Coordinate, DesktopPlatform, LocationPlatform, LocationProvider, Placemark, ReverseGeocoder,
};
use crate::ui::screen::Screen;
use crate::ui::sky::Sky;
use config::Config;
use iced::{task, window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

pub const APP_TITLE: &str = "Iced Weather";

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Collaborators the application talks to.
#[derive(Debug, Clone)]
pub struct Dependencies {
    pub platform: Arc<dyn LocationPlatform>,
    pub client: ForecastClient,
    /// `None` when reverse geocoding is disabled.
    pub geocoder: Option<ReverseGeocoder>,
}

impl Dependencies {
    /// Builds the desktop collaborators. Fails only when the forecast
    /// endpoint is unusable.
    pub fn from_config(config: &Config) -> Result<Self> {
        let timeout = config.forecast.timeout();
        let client = ForecastClient::new(&config.forecast.endpoint, timeout)?;

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config(format!("cannot build HTTP client: {e}")))?;

        let geocoder = config
            .location
            .reverse_geocode
            .then(|| ReverseGeocoder::new(http.clone(), config.location.geocoder_url.clone()));

        Ok(Self {
            platform: Arc::new(DesktopPlatform::from_config(&config.location, http)),
            client,
            geocoder,
        })
    }
}

/// Folds command-line flags into the loaded config. Flags win.
pub fn apply_flags(config: &mut Config, flags: &Flags) {
    if let Some(url) = &flags.forecast_url {
        config.forecast.endpoint.clone_from(url);
    }

    match (flags.latitude, flags.longitude) {
        (Some(latitude), Some(longitude)) => {
            let coordinate = Coordinate::new(latitude, longitude);
            if coordinate.is_valid() {
                config.location.latitude = Some(latitude);
                config.location.longitude = Some(longitude);
            } else {
                tracing::warn!(%coordinate, "--lat/--lon out of range; ignoring");
            }
        }
        (None, None) => {}
        _ => tracing::warn!("--lat and --lon must be given together; ignoring"),
    }

    if flags.night {
        config.display.start_at_night = true;
    }
}

/// Root Iced application state.
pub struct App {
    location: LocationProvider<Message>,
    forecast: ForecastStore,
    client: ForecastClient,
    geocoder: Option<ReverseGeocoder>,
    placemark: Option<Placemark>,
    sky: Sky,
    fetch_handle: Option<task::Handle>,
    location_handle: Option<task::Handle>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.location)
            .field("forecast", &self.forecast)
            .field("sky", &self.sky)
            .field("fetch_in_flight", &self.fetch_handle.is_some())
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(start_at_night: bool, deps: Dependencies) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; dependencies are cheap to clone.
    let boot = move || App::new(start_at_night, deps.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Applies the platform's initial authorization and, when already
    /// authorized, starts location updates right away.
    fn new(start_at_night: bool, deps: Dependencies) -> (Self, Task<Message>) {
        let mut location = LocationProvider::new(deps.platform);
        let state = location.sync_with_platform();
        tracing::info!(authorization = %state, "location provider ready");

        let mut location_handle = None;
        let task = update::start_location_updates(&mut location, &mut location_handle);

        let app = App {
            location,
            forecast: ForecastStore::new(),
            client: deps.client,
            geocoder: deps.geocoder,
            placemark: None,
            sky: Sky::from_night(start_at_night),
            fetch_handle: None,
            location_handle,
        };

        (app, task)
    }

    fn screen(&self) -> Screen {
        Screen::for_state(self.location.current_authorization_state())
    }

    fn title(&self) -> String {
        match self.placemark.as_ref().and_then(|p| p.locality.as_deref()) {
            Some(city) => format!("{city} - {APP_TITLE}"),
            None => APP_TITLE.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        if self.sky.is_night() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.screen())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            location: &mut self.location,
            forecast: &mut self.forecast,
            client: &self.client,
            geocoder: self.geocoder.as_ref(),
            placemark: &mut self.placemark,
            sky: &mut self.sky,
            fetch_handle: &mut self.fetch_handle,
            location_handle: &mut self.location_handle,
        };

        update::dispatch(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            authorization: self.location.current_authorization_state(),
            request_pending: self.location.is_request_pending(),
            coordinate: self.location.last_seen_location(),
            forecast: self.forecast.result(),
            loading: self.forecast.is_loading(),
            failure: self.forecast.failure(),
            location_failure: self.location.failure(),
            placemark: self.placemark.as_ref(),
            sky: self.sky,
            today: chrono::Local::now().date_naive(),
        })
    }
}
