use std::sync::mpsc::{self, Receiver, Sender};

use crate::activity::{ActivityKind, Coordinates};
use crate::clock::Clock;
use crate::error::SessionError;
use crate::persistence::KvStore;
use crate::session::SessionController;
use crate::ui::Frontend;
use crate::validation_policy::RawForm;

/// Unified event type consumed by the session runner
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    PositionResolved(Coordinates),
    PositionFailed,
    MapClicked(Coordinates),
    VariantToggled(ActivityKind),
    FormSubmitted(RawForm),
    ActivitySelected(String),
    Reset,
}

/// Source of UI events (position, map, form, list)
pub trait EventSource {
    /// Next event, or None once the source is exhausted.
    fn next_event(&self) -> Option<SessionEvent>;
}

/// Event source fed through an mpsc channel
pub struct ChannelEventSource {
    rx: Receiver<SessionEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<SessionEvent>) -> Self {
        Self { rx }
    }

    pub fn channel() -> (Sender<SessionEvent>, Self) {
        let (tx, rx) = mpsc::channel();
        (tx, Self::new(rx))
    }
}

impl EventSource for ChannelEventSource {
    fn next_event(&self) -> Option<SessionEvent> {
        self.rx.recv().ok()
    }
}

/// Hand one event to the controller and let it run to completion.
pub fn dispatch<K: KvStore, F: Frontend, C: Clock>(
    session: &mut SessionController<K, F, C>,
    event: SessionEvent,
) -> Result<(), SessionError> {
    match event {
        SessionEvent::PositionResolved(coords) => session.on_position_resolved(coords),
        SessionEvent::PositionFailed => session.on_position_failed(),
        SessionEvent::MapClicked(coords) => session.on_map_clicked(coords)?,
        SessionEvent::VariantToggled(kind) => session.on_variant_toggled(kind),
        SessionEvent::FormSubmitted(form) => {
            session.on_submit(&form)?;
        }
        SessionEvent::ActivitySelected(id) => {
            session.on_activity_selected(&id)?;
        }
        SessionEvent::Reset => session.reset()?,
    }
    Ok(())
}

/// Runner that feeds events to a session one at a time
pub struct Runner<E: EventSource> {
    event_source: E,
}

impl<E: EventSource> Runner<E> {
    pub fn new(event_source: E) -> Self {
        Self { event_source }
    }

    /// Processes one event. Returns false once the source is exhausted.
    ///
    /// Handler errors are logged and swallowed; none of them end the session.
    pub fn step<K: KvStore, F: Frontend, C: Clock>(
        &self,
        session: &mut SessionController<K, F, C>,
    ) -> bool {
        let Some(event) = self.event_source.next_event() else {
            return false;
        };
        match dispatch(session, event) {
            Ok(()) => {}
            Err(e @ (SessionError::ActivityNotFound(_) | SessionError::MapNotReady)) => {
                tracing::debug!(error = %e, "Event ignored")
            }
            Err(SessionError::Persistence(e)) => tracing::error!(error = %e, "Event failed"),
            Err(e) => tracing::warn!(error = %e, "Event rejected"),
        }
        true
    }

    /// Drains the source. Returns how many events were processed.
    pub fn run<K: KvStore, F: Frontend, C: Clock>(
        &self,
        session: &mut SessionController<K, F, C>,
    ) -> usize {
        let mut processed = 0;
        while self.step(session) {
            processed += 1;
        }
        processed
    }
}
