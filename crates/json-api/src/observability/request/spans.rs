//! HTTP span helpers.

const IMAGES_SEGMENT: &str = "images";

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) otel_path: String,
    pub(super) otel_span_name: String,
}

pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let otel_path = normalise_path_for_span_name(path);
    let otel_span_name = format!("{method} {otel_path}");

    RequestSpanName {
        otel_path,
        otel_span_name,
    }
}

/// Collapse per-file image paths so span names and metric labels stay bounded.
fn normalise_path_for_span_name(path: &str) -> String {
    let trimmed = path.trim_start_matches('/').trim_end_matches('/');

    match trimmed.split_once('/') {
        Some((IMAGES_SEGMENT, file)) if !file.is_empty() => format!("/{IMAGES_SEGMENT}/{{file}}"),
        _ => format!("/{trimmed}"),
    }
}
