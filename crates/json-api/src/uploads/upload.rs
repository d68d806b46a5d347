//! Upload Image Handler

use std::sync::Arc;

use salvo::{http::StatusCode, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use serde_json::json;

use shopfront_app::domain::images::models::ImageUpload;

use crate::{
    errors::ApiError,
    extensions::*,
    observability::record_image_upload,
    state::State,
    uploads::{IMAGES_PATH, UPLOAD_FIELD},
};

/// Image Uploaded Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ImageUploadedResponse {
    /// Always `1`
    pub success: u8,

    /// Absolute URL the stored image is served from
    pub image_url: String,
}

/// Upload Image Handler
///
/// Stores the multipart `product` file and returns its public URL.
#[endpoint(
    tags("uploads"),
    summary = "Upload Product Image",
    responses(
        (status_code = StatusCode::OK, description = "Image stored"),
        (status_code = StatusCode::BAD_REQUEST, description = "No file uploaded"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ImageUploadedResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let Some(file) = req.file(UPLOAD_FIELD).await else {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            json!({ "success": 0, "error": "No file uploaded" }),
        ));
    };

    let upload = ImageUpload {
        field_name: UPLOAD_FIELD.to_owned(),
        original_name: file.name().map(ToOwned::to_owned),
        source: file.path().clone(),
    };

    let stored = state.app.images.store_image(upload).await;

    record_image_upload(stored.is_ok());

    let stored = stored.or_500("failed to store uploaded image")?;

    Ok(Json(ImageUploadedResponse {
        success: 1,
        image_url: format!("{}/{IMAGES_PATH}/{}", public_origin(req), stored.filename),
    }))
}

/// `<scheme>://<host>` as seen by the client.
fn public_origin(req: &Request) -> String {
    let scheme = req
        .uri()
        .scheme_str()
        .map_or_else(|| req.scheme().to_string(), ToOwned::to_owned);

    let host = req
        .header::<String>("host")
        .or_else(|| req.uri().authority().map(ToString::to_string))
        .unwrap_or_else(|| "localhost".to_owned());

    format!("{scheme}://{host}")
}
