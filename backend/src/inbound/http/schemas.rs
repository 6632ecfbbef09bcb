//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their corresponding
//! domain types but live in the inbound adapter layer where framework
//! concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Registration used a username that is already taken.
    #[schema(rename = "duplicate_username")]
    DuplicateUsername,
    /// Login failed; the cause is not disclosed.
    #[schema(rename = "invalid_credentials")]
    InvalidCredentials,
    /// Authentication is missing.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// Authenticated but not permitted to perform this action.
    #[schema(rename = "forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required field: title")]
    message: String,
    /// Correlation identifier for tracing this error across systems.
    #[schema(example = "6a2f41a3-c54c-4a5b-8a1b-5a3c2f0e9d11")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// Stable user identifier.
    #[schema(value_type = String, format = Uuid, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Unique login name.
    #[schema(example = "test")]
    username: String,
}

/// OpenAPI schema for [`crate::domain::Blog`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Blog)]
#[serde(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct BlogSchema {
    /// Stable blog identifier.
    #[schema(value_type = String, format = Uuid)]
    id: String,
    /// Credited author; may be empty.
    #[schema(example = "Wes Bos")]
    author: String,
    /// Blog title.
    #[schema(example = "Javascript and magic")]
    title: String,
    /// Link to the blog.
    #[schema(example = "wesbos.com/jsandmagic")]
    url: String,
    /// Likes received so far.
    #[schema(example = 0)]
    likes: u64,
    /// Account id of the creator, the only account allowed to delete the blog.
    #[schema(value_type = String, format = Uuid)]
    creator_id: String,
    /// Username of the creator.
    #[schema(example = "test")]
    creator_username: String,
    /// Creation time.
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        for code in [
            "invalid_request",
            "duplicate_username",
            "invalid_credentials",
            "unauthorized",
            "forbidden",
            "not_found",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn error_schema_uses_camel_case() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"));
    }

    #[test]
    fn blog_schema_exposes_creator_but_not_sequence() {
        let schema_json = schema_to_json::<BlogSchema>();
        assert_eq!(BlogSchema::name(), "crate.domain.Blog");
        assert!(schema_json.contains("creatorId"));
        assert!(schema_json.contains("creatorUsername"));
        assert!(schema_json.contains("likes"));
        assert!(!schema_json.contains("sequence"));
    }

    #[test]
    fn user_schema_has_id_and_username() {
        let schema_json = schema_to_json::<UserSchema>();
        assert_eq!(UserSchema::name(), "crate.domain.User");
        assert!(schema_json.contains("username"));
        assert!(!schema_json.contains("password"));
    }
}
