//! Tracing setup for hosts and an in-memory capture layer for tests.
//!
//! The engine only emits events; it never installs a subscriber itself.
//! Move events are logged under the `focus_engine::engine` target.

use std::fmt;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::field::{Field, Visit};
use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info,focus_engine=debug";

/// Installs a formatted global subscriber honoring `RUST_LOG`.
///
/// Fails instead of panicking if the host already installed a subscriber.
pub fn init_logging() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}

/// One recorded event.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    /// Value of a named field, if the event carried it. String fields are
    /// stored as-is, everything else in its `Debug` form.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Shared buffer of events seen by a [`CaptureLayer`].
///
/// ```
/// use focus_engine::logging::LogCapture;
/// use tracing_subscriber::layer::SubscriberExt;
/// use tracing_subscriber::Registry;
///
/// let capture = LogCapture::new();
/// let subscriber = Registry::default().with(capture.layer());
/// tracing::subscriber::with_default(subscriber, || {
///     tracing::info!(player = "PlayerA", "won");
/// });
/// assert_eq!(capture.entries()[0].field("player"), Some("PlayerA"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl LogCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Entries whose message contains `needle`.
    pub fn find(&self, needle: &str) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.message.contains(needle))
            .collect()
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn layer<S>(&self) -> CaptureLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        CaptureLayer {
            capture: self.clone(),
            _subscriber: PhantomData,
        }
    }
}

pub struct CaptureLayer<S> {
    capture: LogCapture,
    _subscriber: PhantomData<fn(S)>,
}

impl<S> Layer<S> for CaptureLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        self.capture
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = Some(value),
            name => self.fields.push((name.to_string(), value)),
        }
    }
}

impl Visit for FieldVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{:?}", value));
    }
}
