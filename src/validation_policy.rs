use crate::activity::ActivityKind;
use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Field {
    #[strum(serialize = "distance")]
    Distance,
    #[strum(serialize = "duration")]
    Duration,
    #[strum(serialize = "cadence")]
    Cadence,
    #[strum(serialize = "elevation gain")]
    ElevationGain,
    #[strum(serialize = "pace")]
    Pace,
    #[strum(serialize = "speed")]
    Speed,
}

/// Field values exactly as typed into the logging form.
#[derive(Debug, Clone, PartialEq)]
pub struct RawForm {
    pub kind: ActivityKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl RawForm {
    pub fn running(distance: &str, duration: &str, cadence: &str) -> Self {
        Self {
            kind: ActivityKind::Running,
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: cadence.to_string(),
            elevation: String::new(),
        }
    }

    pub fn cycling(distance: &str, duration: &str, elevation: &str) -> Self {
        Self {
            kind: ActivityKind::Cycling,
            distance: distance.to_string(),
            duration: duration.to_string(),
            cadence: String::new(),
            elevation: elevation.to_string(),
        }
    }
}

/// Numbers that passed every check, ready to build an activity from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInput {
    pub kind: ActivityKind,
    pub distance: f64,
    pub duration: f64,
    /// cadence for runs, elevation gain for rides
    pub metric: f64,
}

pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Coerces a number field the way a browser does: blank reads as zero and
/// anything unparsable reads as NaN.
pub fn parse_field(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// All-or-nothing check of the fields relevant to `form.kind`.
///
/// The variant metric is held to the same strict positivity as distance and
/// duration, so a ride with zero elevation gain is rejected. Input whose pace
/// or speed would overflow is rejected too, since it could not be stored.
pub fn validate(form: &RawForm) -> Result<ValidInput, ValidationError> {
    let (metric_field, metric_raw) = match form.kind {
        ActivityKind::Running => (Field::Cadence, &form.cadence),
        ActivityKind::Cycling => (Field::ElevationGain, &form.elevation),
    };
    let fields = [
        (Field::Distance, parse_field(&form.distance)),
        (Field::Duration, parse_field(&form.duration)),
        (metric_field, parse_field(metric_raw)),
    ];
    let values = fields.map(|(_, v)| v);

    if !all_finite(&values) {
        let field = first_failing(&fields, |v| !v.is_finite());
        return Err(ValidationError::NotFinite { field });
    }
    if !all_positive(&values) {
        let field = first_failing(&fields, |v| v <= 0.0);
        return Err(ValidationError::NotPositive { field });
    }
    let (derived_field, derived) = match form.kind {
        ActivityKind::Running => (Field::Pace, values[1] / values[0]),
        ActivityKind::Cycling => (Field::Speed, values[0] / (values[1] / 60.0)),
    };
    if !all_finite(&[derived]) {
        return Err(ValidationError::NotFinite {
            field: derived_field,
        });
    }

    Ok(ValidInput {
        kind: form.kind,
        distance: values[0],
        duration: values[1],
        metric: values[2],
    })
}

fn first_failing(fields: &[(Field, f64)], fails: impl Fn(f64) -> bool) -> Field {
    fields
        .iter()
        .find(|(_, v)| fails(*v))
        .map(|(field, _)| *field)
        .unwrap_or(Field::Distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn predicates() {
        assert!(all_finite(&[1.0, 0.0, -3.5]));
        assert!(!all_finite(&[1.0, f64::NAN]));
        assert!(!all_finite(&[f64::INFINITY]));
        assert!(all_positive(&[0.1, 5.0, 150.0]));
        assert!(!all_positive(&[5.0, 0.0]));
        assert!(!all_positive(&[-1.0]));
        assert!(all_finite(&[]));
        assert!(all_positive(&[]));
    }

    #[test]
    fn parse_field_coercion() {
        assert_eq!(parse_field("5"), 5.0);
        assert_eq!(parse_field("  2.5 "), 2.5);
        assert_eq!(parse_field(""), 0.0);
        assert_eq!(parse_field("   "), 0.0);
        assert!(parse_field("abc").is_nan());
        assert!(parse_field("5km").is_nan());
    }

    #[test]
    fn valid_run() {
        let input = validate(&RawForm::running("5", "25", "150")).unwrap();
        assert_eq!(input.kind, ActivityKind::Running);
        assert_eq!(input.distance, 5.0);
        assert_eq!(input.duration, 25.0);
        assert_eq!(input.metric, 150.0);
    }

    #[test]
    fn run_ignores_elevation_field() {
        let mut form = RawForm::running("5", "25", "150");
        form.elevation = "garbage".into();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn zero_elevation_is_rejected() {
        assert_matches!(
            validate(&RawForm::cycling("20", "60", "0")),
            Err(ValidationError::NotPositive {
                field: Field::ElevationGain
            })
        );
    }

    #[test]
    fn non_numeric_reports_first_bad_field() {
        assert_matches!(
            validate(&RawForm::running("5", "abc", "x")),
            Err(ValidationError::NotFinite {
                field: Field::Duration
            })
        );
        assert_matches!(
            validate(&RawForm::running("inf", "25", "150")),
            Err(ValidationError::NotFinite {
                field: Field::Distance
            })
        );
    }

    #[test]
    fn blank_and_negative_are_not_positive() {
        assert_matches!(
            validate(&RawForm::running("", "25", "150")),
            Err(ValidationError::NotPositive {
                field: Field::Distance
            })
        );
        assert_matches!(
            validate(&RawForm::cycling("20", "-5", "100")),
            Err(ValidationError::NotPositive {
                field: Field::Duration
            })
        );
    }

    #[test]
    fn overflowing_derived_metric_is_rejected() {
        assert_matches!(
            validate(&RawForm::cycling("1e308", "1", "5")),
            Err(ValidationError::NotFinite { field: Field::Speed })
        );
        assert_matches!(
            validate(&RawForm::running("1e-320", "25", "150")),
            Err(ValidationError::NotFinite { field: Field::Pace })
        );
        assert!(validate(&RawForm::cycling("1e300", "60", "5")).is_ok());
    }
}
