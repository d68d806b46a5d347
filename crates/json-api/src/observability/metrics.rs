//! Prometheus metrics for the storefront API and the `/metrics` endpoint.

use std::sync::OnceLock;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
    core::Collector,
};
use salvo::{
    Request, Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

const NAMESPACE: &str = "shopfront_json";

const DURATION_BUCKETS: [f64; 12] = [
    0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0,
];

#[derive(Debug)]
struct ShopfrontMetrics {
    registry: Registry,
    requests_total: IntCounterVec,
    request_duration_seconds: HistogramVec,
    requests_in_flight: IntGauge,
    auth_rejections_total: IntCounterVec,
    images_stored_total: IntCounterVec,
}

static METRICS: OnceLock<Option<ShopfrontMetrics>> = OnceLock::new();

/// Why the auth middleware turned a request away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthRejection {
    MissingToken,
    InvalidToken,
}

impl AuthRejection {
    const fn as_label(self) -> &'static str {
        match self {
            Self::MissingToken => "missing_token",
            Self::InvalidToken => "invalid_token",
        }
    }
}

/// Keeps the in-flight gauge raised for as long as it lives.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard {
    tracked: bool,
}

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let tracked = metrics().is_some_and(|metrics| {
            metrics.requests_in_flight.inc();
            true
        });

        Self { tracked }
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if self.tracked
            && let Some(metrics) = metrics()
        {
            metrics.requests_in_flight.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status_code_label = status_code.to_string();

    metrics
        .requests_total
        .with_label_values(&[
            method,
            route,
            status_class(status_code),
            status_code_label.as_str(),
        ])
        .inc();

    metrics
        .request_duration_seconds
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

pub(crate) fn record_auth_rejection(reason: AuthRejection) {
    if let Some(metrics) = metrics() {
        metrics
            .auth_rejections_total
            .with_label_values(&[reason.as_label()])
            .inc();
    }
}

/// Count an image upload attempt by outcome: `stored` or `failed`.
pub(crate) fn record_image_upload(stored: bool) {
    if let Some(metrics) = metrics() {
        let outcome = if stored { "stored" } else { "failed" };

        metrics
            .images_stored_total
            .with_label_values(&[outcome])
            .inc();
    }
}

#[handler]
pub(crate) async fn metrics_handler(_req: &mut Request, res: &mut Response) {
    let Some(metrics) = metrics() else {
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        return;
    };

    let encoder = TextEncoder::new();
    let mut encoded = Vec::new();

    if let Err(source) = encoder.encode(&metrics.registry.gather(), &mut encoded) {
        error!("failed to encode metrics response: {source}");
        res.status_code(StatusCode::INTERNAL_SERVER_ERROR);

        return;
    }

    match HeaderValue::from_str(encoder.format_type()) {
        Ok(content_type) => {
            res.headers_mut().insert(CONTENT_TYPE, content_type);
            res.render(String::from_utf8_lossy(&encoded).into_owned());
        }
        Err(source) => {
            error!("invalid metrics content type: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

fn metrics() -> Option<&'static ShopfrontMetrics> {
    METRICS.get_or_init(build_metrics).as_ref()
}

fn opts(name: &str, help: &str) -> Opts {
    Opts::new(name, help).namespace(NAMESPACE)
}

/// Create a collector and register it, logging and discarding it on failure.
fn register<C>(registry: &Registry, name: &str, created: prometheus::Result<C>) -> Option<C>
where
    C: Collector + Clone + 'static,
{
    let collector = created
        .inspect_err(|source| error!("failed to create {name} metric: {source}"))
        .ok()?;

    registry
        .register(Box::new(collector.clone()))
        .inspect_err(|source| error!("failed to register {name} metric: {source}"))
        .ok()?;

    Some(collector)
}

fn build_metrics() -> Option<ShopfrontMetrics> {
    let registry = Registry::new();

    let requests_total = register(
        &registry,
        "http_requests_total",
        IntCounterVec::new(
            opts(
                "http_requests_total",
                "HTTP requests by method, route, status class and status code.",
            ),
            &["method", "route", "status_class", "status_code"],
        ),
    )?;

    let request_duration_seconds = register(
        &registry,
        "http_request_duration_seconds",
        HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "HTTP request duration in seconds by method and route.",
            )
            .namespace(NAMESPACE)
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route"],
        ),
    )?;

    let requests_in_flight = register(
        &registry,
        "http_requests_in_flight",
        IntGauge::with_opts(opts(
            "http_requests_in_flight",
            "HTTP requests currently being served.",
        )),
    )?;

    let auth_rejections_total = register(
        &registry,
        "auth_rejections_total",
        IntCounterVec::new(
            opts(
                "auth_rejections_total",
                "Cart requests rejected by the auth middleware, by reason.",
            ),
            &["reason"],
        ),
    )?;

    let images_stored_total = register(
        &registry,
        "images_stored_total",
        IntCounterVec::new(
            opts("images_stored_total", "Product image uploads by outcome."),
            &["outcome"],
        ),
    )?;

    Some(ShopfrontMetrics {
        registry,
        requests_total,
        request_duration_seconds,
        requests_in_flight,
        auth_rejections_total,
        images_stored_total,
    })
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}
