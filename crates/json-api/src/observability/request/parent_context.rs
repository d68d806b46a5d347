//! W3C `traceparent` extraction for incoming requests.

use opentelemetry::{Context, global, propagation::Extractor, trace::TraceContextExt as _};
use salvo::http::{HeaderMap, HeaderName};

struct Headers<'a>(&'a HeaderMap);

impl Extractor for Headers<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|value| value.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(HeaderName::as_str).collect()
    }
}

/// The caller's trace context, if the headers carry a valid one.
pub(super) fn extract(headers: &HeaderMap) -> Option<Context> {
    // Start from an empty context so an absent header never adopts the span
    // that happens to be active in this task.
    let context = global::get_text_map_propagator(|propagator| {
        propagator.extract_with_context(&Context::new(), &Headers(headers))
    });

    let valid = context.span().span_context().is_valid();

    valid.then_some(context)
}
