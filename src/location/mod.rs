// SPDX-License-Identifier: MPL-2.0
//! Location access: authorization state, coordinates and update listeners.
//!
//! The host platform is reached through the [`LocationPlatform`] capability
//! trait so the rest of the application never talks to a concrete location
//! backend. [`LocationProvider`] owns the session state (authorization, last
//! coordinate, listeners) and lives on the UI thread; everything coming back
//! from the platform is delivered to it as plain values by `App::update`.

pub mod geocode;
pub mod platform;

pub use geocode::ReverseGeocoder;
pub use platform::{CoordinateSource, DesktopPlatform};

use crate::error::{Error, Result};
use futures_util::future::BoxFuture;
use futures_util::stream::BoxStream;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Location permission status as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthorizationState {
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
    /// A platform value this build does not know about.
    #[default]
    Unknown,
}

impl AuthorizationState {
    pub const ALL: [AuthorizationState; 6] = [
        AuthorizationState::NotDetermined,
        AuthorizationState::Restricted,
        AuthorizationState::Denied,
        AuthorizationState::AuthorizedAlways,
        AuthorizationState::AuthorizedWhenInUse,
        AuthorizationState::Unknown,
    ];

    pub fn is_authorized(self) -> bool {
        matches!(
            self,
            AuthorizationState::AuthorizedAlways | AuthorizationState::AuthorizedWhenInUse
        )
    }

    /// Denied and Restricted are terminal for the session; every other
    /// state is `Ok`.
    pub fn check_refusal(self) -> Result<()> {
        match self {
            AuthorizationState::Denied => Err(Error::PermissionDenied),
            AuthorizationState::Restricted => Err(Error::PermissionRestricted),
            _ => Ok(()),
        }
    }

    /// Maps a raw platform identifier to a state. Unrecognized values become
    /// [`AuthorizationState::Unknown`] rather than a silent default.
    pub fn from_platform_value(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "not-determined" | "not_determined" | "notdetermined" => {
                AuthorizationState::NotDetermined
            }
            "restricted" => AuthorizationState::Restricted,
            "denied" => AuthorizationState::Denied,
            "always" | "authorized-always" | "authorized_always" => {
                AuthorizationState::AuthorizedAlways
            }
            "when-in-use" | "when_in_use" | "authorized-when-in-use" => {
                AuthorizationState::AuthorizedWhenInUse
            }
            _ => AuthorizationState::Unknown,
        }
    }
}

impl fmt::Display for AuthorizationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AuthorizationState::NotDetermined => "not-determined",
            AuthorizationState::Restricted => "restricted",
            AuthorizationState::Denied => "denied",
            AuthorizationState::AuthorizedAlways => "always",
            AuthorizationState::AuthorizedWhenInUse => "when-in-use",
            AuthorizationState::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Rejects NaN and out-of-range values.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Human-readable place derived from a coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placemark {
    pub locality: Option<String>,
    pub administrative_area: Option<String>,
}

impl Placemark {
    /// `"City, State"`. Missing parts render as empty strings.
    pub fn display_text(&self) -> String {
        let city = self.locality.as_deref().unwrap_or("");
        let state = self.administrative_area.as_deref().unwrap_or("");
        format!("{city}, {state}")
    }
}

/// Capability interface over the host location service.
pub trait LocationPlatform: fmt::Debug + Send + Sync {
    /// Authorization the platform reports before any user interaction.
    fn initial_authorization(&self) -> AuthorizationState;

    /// Shows the consent dialog and resolves to the user's decision.
    fn request_authorization(&self) -> BoxFuture<'static, AuthorizationState>;

    /// Position fixes for the rest of the session. A failed fix is reported
    /// as an `Err` item; the stream may end afterwards.
    fn location_updates(&self) -> BoxStream<'static, Result<Coordinate>>;
}

type Listener<T> = Box<dyn Fn(Coordinate) -> T>;

/// Session-scoped location state.
///
/// `T` is whatever listeners produce; the application uses its `Message`
/// type so each location update turns into follow-up work.
pub struct LocationProvider<T> {
    platform: Arc<dyn LocationPlatform>,
    state: AuthorizationState,
    last_seen: Option<Coordinate>,
    listeners: Vec<Listener<T>>,
    request_pending: bool,
    updates_running: bool,
    failure: Option<Error>,
}

impl<T> fmt::Debug for LocationProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocationProvider")
            .field("state", &self.state)
            .field("last_seen", &self.last_seen)
            .field("listeners", &self.listeners.len())
            .field("request_pending", &self.request_pending)
            .field("updates_running", &self.updates_running)
            .field("failure", &self.failure)
            .finish()
    }
}

impl<T> LocationProvider<T> {
    pub fn new(platform: Arc<dyn LocationPlatform>) -> Self {
        Self {
            platform,
            state: AuthorizationState::Unknown,
            last_seen: None,
            listeners: Vec::new(),
            request_pending: false,
            updates_running: false,
            failure: None,
        }
    }

    /// Reads the platform's current status. Called once at startup as the
    /// first authorization callback.
    pub fn sync_with_platform(&mut self) -> AuthorizationState {
        let state = self.platform.initial_authorization();
        self.apply_authorization(state);
        state
    }

    /// Returns the consent request to run, or `None` when the state is
    /// already resolved or a dialog is already showing.
    pub fn request_permission(&mut self) -> Option<BoxFuture<'static, AuthorizationState>> {
        if self.state != AuthorizationState::NotDetermined || self.request_pending {
            tracing::debug!(state = %self.state, "permission request ignored");
            return None;
        }
        self.request_pending = true;
        Some(self.platform.request_authorization())
    }

    /// Applies a status reported by the platform.
    pub fn apply_authorization(&mut self, state: AuthorizationState) {
        self.request_pending = false;
        if self.state != state {
            tracing::info!(from = %self.state, to = %state, "location authorization changed");
        }
        self.state = state;
    }

    pub fn current_authorization_state(&self) -> AuthorizationState {
        self.state
    }

    pub fn is_request_pending(&self) -> bool {
        self.request_pending
    }

    pub fn register_location_change_listener<F>(&mut self, listener: F)
    where
        F: Fn(Coordinate) -> T + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Hands out the platform update stream while authorized with at least
    /// one listener. Returns `None` while a previous stream is still running.
    pub fn take_update_stream(&mut self) -> Option<BoxStream<'static, Result<Coordinate>>> {
        if self.updates_running || !self.state.is_authorized() || self.listeners.is_empty() {
            return None;
        }
        self.updates_running = true;
        Some(self.platform.location_updates())
    }

    /// Marks the current update stream as finished so a new one can be taken.
    pub fn finish_updates(&mut self) {
        self.updates_running = false;
    }

    pub fn is_updating(&self) -> bool {
        self.updates_running
    }

    pub fn last_seen_location(&self) -> Option<Coordinate> {
        self.last_seen
    }

    /// Most recent failed fix, cleared by the next valid update.
    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    /// Records a failed fix. The last seen location, if any, is kept.
    pub fn handle_location_failure(&mut self, error: Error) {
        tracing::warn!(%error, "location fix failed");
        self.failure = Some(error);
    }

    /// Records `coordinate` and runs every listener against it.
    pub fn handle_location_update(&mut self, coordinate: Coordinate) -> Vec<T> {
        if !coordinate.is_valid() {
            tracing::warn!(%coordinate, "discarding out-of-range location update");
            return Vec::new();
        }
        self.last_seen = Some(coordinate);
        self.failure = None;
        self.listeners
            .iter()
            .map(|listener| listener(coordinate))
            .collect()
    }
}
