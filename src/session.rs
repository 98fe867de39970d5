use crate::activity::{Activity, ActivityKind, Coordinates, Stamp};
use crate::clock::Clock;
use crate::config::Config;
use crate::display;
use crate::error::SessionError;
use crate::persistence::{KvStore, PersistenceGateway};
use crate::store::ActivityStore;
use crate::ui::Frontend;
use crate::validation_policy::{self, RawForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the position provider to answer.
    AwaitingPosition,
    /// The position provider failed. Terminal; the map never appears.
    PositionUnavailable,
    MapReady,
    /// Logging form is open for an activity of this kind.
    FormOpen(ActivityKind),
}

/// Owns the activity store for one session and reacts to UI events.
pub struct SessionController<K: KvStore, F: Frontend, C: Clock> {
    config: Config,
    gateway: PersistenceGateway<K>,
    frontend: F,
    clock: C,
    store: ActivityStore,
    state: SessionState,
    position: Option<Coordinates>,
    pending_location: Option<Coordinates>,
    selected_kind: ActivityKind,
}

/// Start a session: hydrate from `gateway` and render the restored list.
///
/// The map is not touched until the position resolves.
pub fn init_session<K: KvStore, F: Frontend, C: Clock>(
    config: Config,
    gateway: PersistenceGateway<K>,
    frontend: F,
    clock: C,
) -> SessionController<K, F, C> {
    let mut session = SessionController {
        config,
        gateway,
        frontend,
        clock,
        store: ActivityStore::new(),
        state: SessionState::AwaitingPosition,
        position: None,
        pending_location: None,
        selected_kind: ActivityKind::Running,
    };
    session.hydrate();
    session
}

impl<K: KvStore, F: Frontend, C: Clock> SessionController<K, F, C> {
    fn hydrate(&mut self) {
        match self.gateway.load() {
            Ok(Some(activities)) => {
                tracing::info!(count = activities.len(), "Restored activities");
                self.store.replace_all(activities);
                for activity in self.store.all() {
                    self.frontend.render_entry(&display::entry(activity));
                }
            }
            Ok(None) => tracing::debug!(key = %self.gateway.key(), "No stored activities"),
            Err(e) => {
                tracing::warn!(error = %e, "Stored activities unreadable; starting empty")
            }
        }
    }

    pub fn on_position_resolved(&mut self, coords: Coordinates) {
        if self.state != SessionState::AwaitingPosition {
            tracing::debug!(state = ?self.state, "Ignoring late position");
            return;
        }
        tracing::info!(lat = coords.lat, lng = coords.lng, "Position resolved");
        self.position = Some(coords);
        self.frontend.center_on(coords, self.config.initial_zoom);
        for activity in self.store.all() {
            self.frontend.place_marker(&display::marker(activity));
        }
        self.state = SessionState::MapReady;
    }

    pub fn on_position_failed(&mut self) {
        if self.state != SessionState::AwaitingPosition {
            tracing::debug!(state = ?self.state, "Ignoring late position failure");
            return;
        }
        tracing::warn!("Position unavailable");
        self.state = SessionState::PositionUnavailable;
        self.frontend
            .notify(self.config.locale.position_unavailable_message());
    }

    /// Opens the form at `coords`. Clicking again while it is open moves the pin.
    pub fn on_map_clicked(&mut self, coords: Coordinates) -> Result<(), SessionError> {
        match self.state {
            SessionState::AwaitingPosition => Err(SessionError::MapNotReady),
            SessionState::PositionUnavailable => Err(SessionError::PositionUnavailable),
            SessionState::MapReady | SessionState::FormOpen(_) => {
                self.pending_location = Some(coords);
                self.state = SessionState::FormOpen(self.selected_kind);
                self.frontend.show();
                Ok(())
            }
        }
    }

    pub fn on_variant_toggled(&mut self, kind: ActivityKind) {
        self.selected_kind = kind;
        if let SessionState::FormOpen(_) = self.state {
            self.state = SessionState::FormOpen(kind);
        }
        self.frontend.show_metric_field(kind);
    }

    /// Validate and log the form. Returns the new activity's id.
    ///
    /// On invalid input the user is notified and the form stays open with its
    /// fields as they were.
    pub fn on_submit(&mut self, form: &RawForm) -> Result<String, SessionError> {
        let (SessionState::FormOpen(_), Some(coords)) = (self.state, self.pending_location) else {
            return Err(SessionError::FormNotOpen);
        };
        self.selected_kind = form.kind;
        self.state = SessionState::FormOpen(form.kind);

        let input = match validation_policy::validate(form) {
            Ok(input) => input,
            Err(e) => {
                tracing::warn!(kind = %form.kind, error = %e, "Rejected activity input");
                self.frontend
                    .notify(self.config.locale.invalid_input_message());
                return Err(e.into());
            }
        };

        let at = self.clock.now();
        let stamp = Stamp {
            id: self.store.unique_id_for(&at),
            at,
        };
        let locale = self.config.locale;
        let activity = match input.kind {
            ActivityKind::Running => Activity::running(
                stamp,
                coords,
                input.distance,
                input.duration,
                input.metric,
                locale,
            ),
            ActivityKind::Cycling => Activity::cycling(
                stamp,
                coords,
                input.distance,
                input.duration,
                input.metric,
                locale,
            ),
        };
        let id = activity.id().to_string();

        self.frontend.place_marker(&display::marker(&activity));
        self.frontend.render_entry(&display::entry(&activity));
        self.store.append(activity);
        self.frontend.clear_fields();
        self.frontend.hide();
        self.pending_location = None;
        self.state = SessionState::MapReady;
        tracing::info!(id = %id, kind = %input.kind, "Activity logged");

        self.persist();
        Ok(id)
    }

    /// Center the map on the selected activity.
    ///
    /// Unknown ids come from a stale list and are ignored.
    pub fn on_activity_selected(&mut self, id: &str) -> Result<Coordinates, SessionError> {
        if self.position.is_none() {
            tracing::debug!(id, "Selection before the map is ready");
            return Err(SessionError::MapNotReady);
        }
        let track = self.config.track_selections;
        let Some(activity) = self.store.find_by_id_mut(id) else {
            tracing::debug!(id, "Selected activity not in store");
            return Err(SessionError::ActivityNotFound(id.to_string()));
        };
        let coords = activity.coords();
        if track {
            activity.click();
        }
        self.frontend.center_on(coords, self.config.focus_zoom);
        if track {
            self.persist();
        }
        Ok(coords)
    }

    /// Drop every activity, in storage and in memory, and ask the UI to reload.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.gateway.clear()?;
        self.store.clear();
        self.pending_location = None;
        if self.position.is_some() {
            self.state = SessionState::MapReady;
        }
        tracing::info!("Session reset");
        self.frontend.hide();
        self.frontend.reload();
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = self.gateway.save(self.store.all()) {
            tracing::error!(error = %e, count = self.store.len(), "Failed to persist activities");
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn position(&self) -> Option<Coordinates> {
        self.position
    }

    pub fn pending_location(&self) -> Option<Coordinates> {
        self.pending_location
    }

    pub fn selected_kind(&self) -> ActivityKind {
        self.selected_kind
    }

    pub fn gateway(&self) -> &PersistenceGateway<K> {
        &self.gateway
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    pub fn frontend_mut(&mut self) -> &mut F {
        &mut self.frontend
    }
}
