//! Instructions the session sends to whatever draws the map, form and list.

use crate::activity::{ActivityKind, Coordinates};
use crate::display::{ActivityEntry, Marker};

pub trait MapSurface {
    fn center_on(&mut self, coords: Coordinates, zoom: u8);
    fn place_marker(&mut self, marker: &Marker);
}

pub trait FormUi {
    fn show(&mut self);
    /// Hide the form. Any fade-out timing is up to the implementation.
    fn hide(&mut self);
    fn clear_fields(&mut self);
    /// Show the cadence field for runs, the elevation field for rides.
    fn show_metric_field(&mut self, kind: ActivityKind);
}

pub trait ListUi {
    /// Append one entry. Entries are never updated or removed individually.
    fn render_entry(&mut self, entry: &ActivityEntry);
}

pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Everything the session drives, plus the full reload requested by a reset.
pub trait Frontend: MapSurface + FormUi + ListUi + Notifier {
    fn reload(&mut self);
}

/// A single instruction as issued to a [`Frontend`].
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    CenterOn(Coordinates, u8),
    PlaceMarker(Marker),
    ShowForm,
    HideForm,
    ClearFields,
    ShowMetricField(ActivityKind),
    RenderEntry(ActivityEntry),
    Notify(String),
    Reload,
}

/// Frontend that just records what it was told. Used for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct RecordingFrontend {
    pub commands: Vec<UiCommand>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<UiCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn notifications(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                UiCommand::Notify(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn entries(&self) -> Vec<&ActivityEntry> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                UiCommand::RenderEntry(e) => Some(e),
                _ => None,
            })
            .collect()
    }

    pub fn markers(&self) -> Vec<&Marker> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                UiCommand::PlaceMarker(m) => Some(m),
                _ => None,
            })
            .collect()
    }
}

impl MapSurface for RecordingFrontend {
    fn center_on(&mut self, coords: Coordinates, zoom: u8) {
        self.commands.push(UiCommand::CenterOn(coords, zoom));
    }

    fn place_marker(&mut self, marker: &Marker) {
        self.commands.push(UiCommand::PlaceMarker(marker.clone()));
    }
}

impl FormUi for RecordingFrontend {
    fn show(&mut self) {
        self.commands.push(UiCommand::ShowForm);
    }

    fn hide(&mut self) {
        self.commands.push(UiCommand::HideForm);
    }

    fn clear_fields(&mut self) {
        self.commands.push(UiCommand::ClearFields);
    }

    fn show_metric_field(&mut self, kind: ActivityKind) {
        self.commands.push(UiCommand::ShowMetricField(kind));
    }
}

impl ListUi for RecordingFrontend {
    fn render_entry(&mut self, entry: &ActivityEntry) {
        self.commands.push(UiCommand::RenderEntry(entry.clone()));
    }
}

impl Notifier for RecordingFrontend {
    fn notify(&mut self, message: &str) {
        self.commands.push(UiCommand::Notify(message.to_string()));
    }
}

impl Frontend for RecordingFrontend {
    fn reload(&mut self) {
        self.commands.push(UiCommand::Reload);
    }
}
