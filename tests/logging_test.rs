//! Tests for the tracing events emitted while running validators.

use std::fmt;
use std::sync::{Arc, Mutex};

use fielderr::{validate, ErrorList, FieldError, FieldSource, Validator, ValidatorSet};
use serde_json::json;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

#[derive(Debug, Clone)]
struct Recorded {
    level: Level,
    message: String,
    fields: Vec<(String, String)>,
}

impl Recorded {
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .push((field.name().to_string(), value.to_string()));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields
                .push((field.name().to_string(), format!("{:?}", value)));
        }
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn events(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }

    fn with_message(&self, message: &str) -> Vec<Recorded> {
        self.events()
            .into_iter()
            .filter(|event| event.message == message)
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);
        self.0.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            message: visitor.message,
            fields: visitor.fields,
        });
    }
}

fn recording<T>(f: impl FnOnce() -> T) -> (T, Recorder) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let output = tracing::subscriber::with_default(subscriber, f);
    (output, recorder)
}

struct Fixed {
    field: &'static str,
    message: Option<&'static str>,
}

impl Validator for Fixed {
    fn field_name(&self) -> &str {
        self.field
    }

    fn validate(&self, _source: &dyn FieldSource) -> Option<ErrorList> {
        self.message
            .map(|message| FieldError::new(self.field, message).into())
    }
}

fn validators() -> Vec<Fixed> {
    vec![
        Fixed {
            field: "username",
            message: Some("taken"),
        },
        Fixed {
            field: "email",
            message: None,
        },
    ]
}

#[test]
fn test_validate_logs_pass_summary() {
    let (errors, recorder) = recording(|| validate(&json!({}), &validators()));
    assert_eq!(errors.len(), 1);

    let passes = recorder.with_message("validation pass finished");
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].level, Level::DEBUG);
    assert_eq!(passes[0].field("validators"), Some("2"));
    assert_eq!(passes[0].field("errors"), Some("1"));
}

#[test]
fn test_validate_logs_each_failing_validator() {
    let (_, recorder) = recording(|| validate(&json!({}), &validators()));

    let failures = recorder.with_message("validator reported errors");
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].level, Level::TRACE);
    assert_eq!(failures[0].field("field"), Some("username"));
    assert_eq!(failures[0].field("errors"), Some("1"));
}

#[test]
fn test_passing_validators_are_not_logged() {
    let passing = [Fixed {
        field: "email",
        message: None,
    }];
    let (errors, recorder) = recording(|| validate(&json!({}), &passing));
    assert!(errors.is_empty());

    assert!(recorder.with_message("validator reported errors").is_empty());
    let passes = recorder.with_message("validation pass finished");
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].field("errors"), Some("0"));
}

#[test]
fn test_parallel_set_logs_pass_summary() {
    let mut set = ValidatorSet::new().parallel(true);
    for validator in validators() {
        set.push(validator);
    }

    let (errors, recorder) = recording(|| set.validate(&json!({})));
    assert_eq!(errors.len(), 1);

    let passes = recorder.with_message("parallel validation pass finished");
    assert_eq!(passes.len(), 1);
    assert_eq!(passes[0].level, Level::DEBUG);
    assert_eq!(passes[0].field("validators"), Some("2"));
    assert_eq!(passes[0].field("errors"), Some("1"));
    assert!(recorder.with_message("validation pass finished").is_empty());
}
