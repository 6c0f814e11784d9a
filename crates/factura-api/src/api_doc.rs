//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use factura_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Factura API",
        version = "0.1.0",
        description = "Invoice extraction API. Upload invoice images (optionally zipped) and receive structured invoice data extracted by a multimodal model, with a polling endpoint for simulated batch progress."
    ),
    paths(
        handlers::upload::upload_invoices,
        handlers::progress::get_progress,
    ),
    components(schemas(error::ErrorResponse, models::ProgressResponse)),
    tags(
        (name = "invoices", description = "Invoice upload and progress endpoints")
    )
)]
pub struct ApiDoc;
