//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with schema wrappers for the domain types, so the domain stays free of
//! utoipa derives. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::blogs::CreateBlogRequest;
use crate::inbound::http::schemas::{BlogSchema, ErrorCodeSchema, ErrorSchema, UserSchema};
use crate::inbound::http::users::CredentialsRequest;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Blog list API",
        description = "Register, log in, share blogs, like them and delete your own.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::blogs::list_blogs,
        crate::inbound::http::blogs::create_blog,
        crate::inbound::http::blogs::get_blog,
        crate::inbound::http::blogs::like_blog,
        crate::inbound::http::blogs::delete_blog,
        crate::inbound::http::testing::reset,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        BlogSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CredentialsRequest,
        CreateBlogRequest
    )),
    tags(
        (name = "users", description = "Registration, login and sessions"),
        (name = "blogs", description = "Shared blog entries"),
        (name = "testing", description = "End-to-end test support"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
