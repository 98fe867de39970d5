use chrono::{DateTime, Datelike, Local, Utc};
use serde::{Deserialize, Serialize};

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_PT: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Cycling,
}

/// Language used for activity labels and user notifications.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Portuguese,
}

impl Locale {
    pub fn kind_name(&self, kind: ActivityKind) -> &'static str {
        match (self, kind) {
            (Locale::English, ActivityKind::Running) => "Running",
            (Locale::English, ActivityKind::Cycling) => "Cycling",
            (Locale::Portuguese, ActivityKind::Running) => "Corrida",
            (Locale::Portuguese, ActivityKind::Cycling) => "Ciclismo",
        }
    }

    pub fn month_name(&self, month0: u32) -> &'static str {
        let months = match self {
            Locale::English => &MONTHS_EN,
            Locale::Portuguese => &MONTHS_PT,
        };
        months[month0 as usize % 12]
    }

    /// "<kind> on <day> <month>", e.g. "Running on 19 October".
    pub fn describe(&self, kind: ActivityKind, at: &DateTime<Local>) -> String {
        let day = at.day();
        let month = self.month_name(at.month0());
        match self {
            Locale::English => format!("{} on {} {}", self.kind_name(kind), day, month),
            Locale::Portuguese => format!("{} em {} de {}", self.kind_name(kind), day, month),
        }
    }

    pub fn invalid_input_message(&self) -> &'static str {
        match self {
            Locale::English => "Inputs have to be positive numbers!",
            Locale::Portuguese => "Os numeros precisam ser positivos!",
        }
    }

    pub fn position_unavailable_message(&self) -> &'static str {
        match self {
            Locale::English => "Could not get your position.",
            Locale::Portuguese => "Não foi possível localizar sua posição.",
        }
    }
}

/// Latitude/longitude pair, stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Variant-specific metric and the value derived from it at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivityDetails {
    Running {
        /// steps per minute
        cadence: f64,
        /// min/km
        pace: f64,
    },
    Cycling {
        /// metres
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// km/h
        speed: f64,
    },
}

/// Identity assigned to an activity when it is logged.
#[derive(Debug, Clone)]
pub struct Stamp {
    pub id: String,
    pub at: DateTime<Local>,
}

/// One logged run or ride.
///
/// Everything except the click counter is fixed at construction. The derived
/// metric and the description are stored, not recomputed, so a record read
/// back from storage keeps exactly the values it was saved with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    id: String,
    date: DateTime<Utc>,
    #[serde(default)]
    clicks: u32,
    coords: Coordinates,
    /// km
    distance: f64,
    /// min
    duration: f64,
    description: String,
    #[serde(flatten)]
    details: ActivityDetails,
}

impl Activity {
    pub fn running(
        stamp: Stamp,
        coords: Coordinates,
        distance: f64,
        duration: f64,
        cadence: f64,
        locale: Locale,
    ) -> Self {
        let pace = duration / distance;
        Self::build(
            stamp,
            coords,
            distance,
            duration,
            ActivityDetails::Running { cadence, pace },
            locale,
        )
    }

    pub fn cycling(
        stamp: Stamp,
        coords: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        locale: Locale,
    ) -> Self {
        let speed = distance / (duration / 60.0);
        Self::build(
            stamp,
            coords,
            distance,
            duration,
            ActivityDetails::Cycling {
                elevation_gain,
                speed,
            },
            locale,
        )
    }

    fn build(
        stamp: Stamp,
        coords: Coordinates,
        distance: f64,
        duration: f64,
        details: ActivityDetails,
        locale: Locale,
    ) -> Self {
        let kind = match details {
            ActivityDetails::Running { .. } => ActivityKind::Running,
            ActivityDetails::Cycling { .. } => ActivityKind::Cycling,
        };
        Self {
            description: locale.describe(kind, &stamp.at),
            id: stamp.id,
            date: stamp.at.with_timezone(&Utc),
            clicks: 0,
            coords,
            distance,
            duration,
            details,
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self.details {
            ActivityDetails::Running { .. } => ActivityKind::Running,
            ActivityDetails::Cycling { .. } => ActivityKind::Cycling,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn coords(&self) -> Coordinates {
        self.coords
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn details(&self) -> &ActivityDetails {
        &self.details
    }

    pub fn clicks(&self) -> u32 {
        self.clicks
    }

    pub fn click(&mut self) {
        self.clicks += 1;
    }

    pub fn pace(&self) -> Option<f64> {
        match self.details {
            ActivityDetails::Running { pace, .. } => Some(pace),
            ActivityDetails::Cycling { .. } => None,
        }
    }

    pub fn speed(&self) -> Option<f64> {
        match self.details {
            ActivityDetails::Cycling { speed, .. } => Some(speed),
            ActivityDetails::Running { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn stamp(id: &str) -> Stamp {
        Stamp {
            id: id.to_string(),
            at: Local.with_ymd_and_hms(2024, 3, 9, 8, 30, 0).unwrap(),
        }
    }

    #[test]
    fn running_derives_pace() {
        let run = Activity::running(
            stamp("0000000001"),
            Coordinates::new(40.7, -74.0),
            5.0,
            25.0,
            150.0,
            Locale::English,
        );
        assert_eq!(run.kind(), ActivityKind::Running);
        assert_eq!(run.pace(), Some(25.0 / 5.0));
        assert_eq!(run.speed(), None);
        assert_eq!(run.description(), "Running on 9 March");
        assert_eq!(run.clicks(), 0);
    }

    #[test]
    fn cycling_derives_speed() {
        let ride = Activity::cycling(
            stamp("0000000002"),
            Coordinates::new(38.7, -9.1),
            27.0,
            95.0,
            523.0,
            Locale::English,
        );
        assert_eq!(ride.kind(), ActivityKind::Cycling);
        assert_eq!(ride.speed(), Some(27.0 / (95.0 / 60.0)));
        assert_eq!(ride.pace(), None);
        assert_eq!(ride.description(), "Cycling on 9 March");
    }

    #[test]
    fn portuguese_description() {
        let ride = Activity::cycling(
            stamp("0000000003"),
            Coordinates::new(38.7, -9.1),
            10.0,
            30.0,
            100.0,
            Locale::Portuguese,
        );
        assert_eq!(ride.description(), "Ciclismo em 9 de Março");
    }

    #[test]
    fn click_only_touches_counter() {
        let mut run = Activity::running(
            stamp("0000000004"),
            Coordinates::new(1.0, 2.0),
            3.0,
            18.0,
            170.0,
            Locale::English,
        );
        let before = run.clone();
        run.click();
        run.click();
        assert_eq!(run.clicks(), 2);
        assert_eq!(run.pace(), before.pace());
        assert_eq!(run.description(), before.description());
    }

    #[test]
    fn serializes_with_type_tag_and_browser_field_names() {
        let ride = Activity::cycling(
            stamp("0000000005"),
            Coordinates::new(38.7, -9.1),
            20.0,
            60.0,
            300.0,
            Locale::English,
        );
        let value = serde_json::to_value(&ride).unwrap();
        assert_eq!(value["type"], "cycling");
        assert_eq!(value["elevationGain"], 300.0);
        assert_eq!(value["speed"], 20.0);
        assert_eq!(value["coords"], serde_json::json!([38.7, -9.1]));
        assert_eq!(value["clicks"], 0);
    }

    #[test]
    fn reads_browser_local_storage_record() {
        let raw = r#"{
            "date": "2023-05-14T09:12:44.120Z",
            "id": "4055564120",
            "clicks": 0,
            "coords": [38.72, -9.14],
            "distance": 5.2,
            "duration": 24,
            "type": "running",
            "cadence": 178,
            "pace": 4.615384615384615,
            "description": "Corrida em 14 de Maio"
        }"#;
        let run: Activity = serde_json::from_str(raw).unwrap();
        assert_eq!(run.kind(), ActivityKind::Running);
        assert_eq!(run.id(), "4055564120");
        assert_eq!(run.coords(), Coordinates::new(38.72, -9.14));
        assert_eq!(run.pace(), Some(4.615384615384615));
        assert_eq!(run.description(), "Corrida em 14 de Maio");
    }
}
