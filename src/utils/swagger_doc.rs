use crate::utils::error::AppError;
use rocket_okapi::okapi::openapi3::{Response, Responses, MediaType};
use rocket_okapi::response::OpenApiResponderInner;
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::RefOr;
use okapi::openapi3::SchemaObject;
use indexmap::IndexMap;
use serde_json::json;
use rocket::http::Status;

impl<'r> OpenApiResponderInner for AppError {
    fn responses(_gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        let mut responses = Responses::default();

        // One documented example per status the session endpoints can return
        let error_responses = [
            (
                Status::BadRequest,
                "Unknown cabin",
                AppError::ValidationError("Unknown cabin: Economy".to_string()),
            ),
            (
                Status::Unauthorized,
                "Invalid credentials",
                AppError::AuthenticationFailed(
                    "Incorrect username or password. Try test / testpass.".to_string(),
                ),
            ),
            (
                Status::NotFound,
                "Flight not visible",
                AppError::NotFound("Flight XYZ-000 is not in the current list".to_string()),
            ),
            (
                Status::Conflict,
                "Intent not allowed on the current screen",
                AppError::Conflict("confirm booking is not allowed on the browse screen".to_string()),
            ),
            (
                Status::InternalServerError,
                "Fixture or configuration problem",
                AppError::FixtureError("Internal Server Error".to_string()),
            ),
        ];

        for (status, description, error) in error_responses {
            responses.responses.insert(
                status.code.to_string(),
                RefOr::Object(Response {
                    description: description.to_string(),
                    content: {
                        let mut content = IndexMap::new();
                        content.insert(
                            "application/json".to_string(),
                            MediaType {
                                schema: Some(SchemaObject::default()),
                                example: Some(json!({
                                    "error": error.to_string()
                                })),
                                ..Default::default()
                            },
                        );
                        content
                    },
                    ..Default::default()
                }),
            );
        }

        Ok(responses)
    }
}
