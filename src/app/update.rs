// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every side effect (consent dialog, location stream, forecast fetch,
//! reverse geocoding) starts here as a `Task`; results come back as
//! messages and are applied by the handlers below.

use super::Message;
use crate::error::Error;
use crate::forecast::{Completion, ForecastClient, ForecastResult, ForecastStore, RequestId};
use crate::location::{AuthorizationState, Coordinate, LocationProvider, Placemark, ReverseGeocoder};
use crate::ui::permission::{self, Event as PermissionEvent};
use crate::ui::sky::Sky;
use crate::ui::weather::{self, Event as WeatherEvent};
use iced::task::{self, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub location: &'a mut LocationProvider<Message>,
    pub forecast: &'a mut ForecastStore,
    pub client: &'a ForecastClient,
    pub geocoder: Option<&'a ReverseGeocoder>,
    pub placemark: &'a mut Option<Placemark>,
    pub sky: &'a mut Sky,
    /// Abort handle of the in-flight forecast request.
    pub fetch_handle: &'a mut Option<task::Handle>,
    /// Abort handle of the running location update stream.
    pub location_handle: &'a mut Option<task::Handle>,
}

/// Single entry point for all messages.
pub fn dispatch(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Permission(permission_message) => {
            handle_permission_message(ctx, &permission_message)
        }
        Message::Weather(weather_message) => handle_weather_message(ctx, &weather_message),
        Message::AuthorizationResolved(state) => handle_authorization_resolved(ctx, state),
        Message::LocationUpdated(coordinate) => handle_location_updated(ctx, coordinate),
        Message::LocationFailed(error) => {
            ctx.location.handle_location_failure(error);
            Task::none()
        }
        Message::LocationUpdatesEnded => {
            ctx.location.finish_updates();
            tracing::debug!("location updates finished");
            Task::none()
        }
        Message::FetchForecast(coordinate) => start_fetch(ctx, coordinate),
        Message::ForecastFetched { request, result } => {
            handle_forecast_fetched(ctx, request, result);
            Task::none()
        }
        Message::PlacemarkResolved {
            coordinate,
            placemark,
        } => {
            handle_placemark_resolved(ctx, coordinate, placemark);
            Task::none()
        }
        Message::ToggleNight => {
            toggle_sky(ctx);
            Task::none()
        }
        Message::RetryForecast => retry_forecast(ctx),
    }
}

/// Registers the forecast listener and starts the platform stream once
/// the state is authorized. Does nothing while a stream is running.
pub fn start_location_updates(
    location: &mut LocationProvider<Message>,
    handle: &mut Option<task::Handle>,
) -> Task<Message> {
    let state = location.current_authorization_state();
    if let Err(refusal) = state.check_refusal() {
        tracing::warn!(error = %refusal, "location unavailable for this session");
        return Task::none();
    }
    if !state.is_authorized() {
        return Task::none();
    }

    if !location.has_listeners() {
        location.register_location_change_listener(Message::FetchForecast);
    }

    match location.take_update_stream() {
        Some(updates) => {
            tracing::info!("starting location updates");
            let (task, abort) = Task::run(updates, |fix| match fix {
                Ok(coordinate) => Message::LocationUpdated(coordinate),
                Err(error) => Message::LocationFailed(error),
            })
            .chain(Task::done(Message::LocationUpdatesEnded))
            .abortable();
            *handle = Some(abort);
            task
        }
        None => Task::none(),
    }
}

fn handle_permission_message(
    ctx: &mut UpdateContext<'_>,
    message: &permission::Message,
) -> Task<Message> {
    match permission::update(message) {
        PermissionEvent::RequestPermission => match ctx.location.request_permission() {
            Some(request) => {
                tracing::info!("asking for location consent");
                Task::perform(request, Message::AuthorizationResolved)
            }
            None => Task::none(),
        },
    }
}

fn handle_weather_message(ctx: &mut UpdateContext<'_>, message: &weather::Message) -> Task<Message> {
    match weather::update(message) {
        WeatherEvent::ToggleDayTime => {
            toggle_sky(ctx);
            Task::none()
        }
        WeatherEvent::RetryForecast => retry_forecast(ctx),
    }
}

fn handle_authorization_resolved(
    ctx: &mut UpdateContext<'_>,
    state: AuthorizationState,
) -> Task<Message> {
    ctx.location.apply_authorization(state);
    start_location_updates(ctx.location, ctx.location_handle)
}

/// Records the position, runs the listeners and resolves the city name.
fn handle_location_updated(ctx: &mut UpdateContext<'_>, coordinate: Coordinate) -> Task<Message> {
    let outputs = ctx.location.handle_location_update(coordinate);
    if outputs.is_empty() {
        return Task::none();
    }
    tracing::debug!(%coordinate, listeners = outputs.len(), "location updated");

    let mut tasks: Vec<Task<Message>> = outputs
        .into_iter()
        .map(|output| dispatch(ctx, output))
        .collect();

    if let Some(geocoder) = ctx.geocoder {
        tasks.push(Task::perform(geocoder.lookup(coordinate), move |placemark| {
            Message::PlacemarkResolved {
                coordinate,
                placemark,
            }
        }));
    }

    Task::batch(tasks)
}

/// Cancel-and-replace: aborts the in-flight request, if any, and issues a
/// new one tagged with a fresh request id.
fn start_fetch(ctx: &mut UpdateContext<'_>, coordinate: Coordinate) -> Task<Message> {
    if let Some(previous) = ctx.fetch_handle.take() {
        previous.abort();
        tracing::debug!("aborted superseded forecast request");
    }

    let request = ctx.forecast.begin_request(coordinate);
    tracing::info!(?request, %coordinate, "fetching forecast");

    let (task, handle) = Task::perform(
        ctx.client
            .fetch_forecast(coordinate.latitude, coordinate.longitude),
        move |result| Message::ForecastFetched { request, result },
    )
    .abortable();
    *ctx.fetch_handle = Some(handle);
    task
}

fn handle_forecast_fetched(
    ctx: &mut UpdateContext<'_>,
    request: RequestId,
    result: Result<ForecastResult, Error>,
) {
    let days = result.as_ref().map(ForecastResult::len).ok();
    if result.as_ref().is_ok_and(ForecastResult::is_empty) {
        tracing::warn!(?request, "forecast response contains no days");
    }

    match ctx.forecast.complete(request, result) {
        Completion::Applied => {
            *ctx.fetch_handle = None;
            tracing::info!(?request, ?days, "forecast updated");
        }
        Completion::Failed => {
            *ctx.fetch_handle = None;
            if let Some(error) = ctx.forecast.failure() {
                tracing::warn!(?request, %error, "forecast fetch failed; keeping previous forecast");
            }
        }
        Completion::Stale => {
            tracing::debug!(?request, "discarding stale forecast response");
        }
    }
}

fn handle_placemark_resolved(
    ctx: &mut UpdateContext<'_>,
    coordinate: Coordinate,
    placemark: Option<Placemark>,
) {
    if ctx.location.last_seen_location() != Some(coordinate) {
        tracing::debug!(%coordinate, "discarding placemark for an old position");
        return;
    }
    if let Some(placemark) = placemark {
        *ctx.placemark = Some(placemark);
    }
}

fn toggle_sky(ctx: &mut UpdateContext<'_>) {
    *ctx.sky = ctx.sky.toggled();
    tracing::debug!(night = ctx.sky.is_night(), "sky toggled");
}

/// Fetches again for the last known position. Without one, restarts the
/// location updates so a failed fix gets another attempt.
fn retry_forecast(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if let Some(coordinate) = ctx.location.last_seen_location() {
        return start_fetch(ctx, coordinate);
    }
    if !ctx.location.current_authorization_state().is_authorized() {
        tracing::debug!("retry ignored: location not authorized");
        return Task::none();
    }

    if let Some(previous) = ctx.location_handle.take() {
        previous.abort();
    }
    if ctx.location.is_updating() {
        tracing::debug!("restarting running location updates");
        ctx.location.finish_updates();
    }
    tracing::info!("retrying location lookup");
    start_location_updates(ctx.location, ctx.location_handle)
}
