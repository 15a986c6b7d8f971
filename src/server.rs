use crate::{
    error::{ErrorKind, ProductError, UpstreamFailure},
    generator::ProductGenerator,
    logger,
    models::{supported_models, GenerationRequest, GenerationResponse},
};
use actix_web::{
    error::InternalError, get, http::StatusCode, post, web, App, HttpResponse, HttpServer,
    ResponseError,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl ResponseError for ProductError {
    fn status_code(&self) -> StatusCode {
        match (self.kind(), self) {
            (
                ErrorKind::NotAuthorized,
                ProductError::UpstreamError {
                    failure: UpstreamFailure::PermissionDenied,
                    ..
                },
            ) => StatusCode::FORBIDDEN,
            (ErrorKind::NotAuthorized, _) => StatusCode::UNAUTHORIZED,
            (ErrorKind::BadRequest, _) => StatusCode::BAD_REQUEST,
            (ErrorKind::NotFound, _) => StatusCode::NOT_FOUND,
            (ErrorKind::InternalFailure, _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.public_message(),
        })
    }
}

#[post("/generate-product")]
async fn generate_product_route(
    generator: web::Data<ProductGenerator>,
    body: web::Json<GenerationRequest>,
) -> Result<web::Json<GenerationResponse>, ProductError> {
    logger::with_request_id(async move {
        let result = generator.generate(body.into_inner()).await?;
        Ok::<_, ProductError>(web::Json(GenerationResponse::from(result)))
    })
    .await
}

#[get("/models")]
async fn list_models() -> HttpResponse {
    HttpResponse::Ok().json(supported_models())
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::warn!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorBody {
            message: "Invalid request body".to_string(),
        });
        InternalError::from_response(err, response).into()
    })
}

/// Register the routes. The caller supplies the `ProductGenerator` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(generate_product_route)
        .service(list_models);
}

pub async fn run(generator: ProductGenerator) -> std::io::Result<()> {
    let port = generator.config().port();
    let data = web::Data::new(generator);

    HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .bind(("0.0.0.0", port))?
        .run()
        .await
}
