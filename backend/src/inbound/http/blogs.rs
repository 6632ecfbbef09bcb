//! Blog HTTP handlers.
//!
//! ```text
//! GET    /api/blogs
//! POST   /api/blogs            {"author":"Wes Bos","title":"...","url":"..."}
//! GET    /api/blogs/{id}
//! POST   /api/blogs/{id}/likes
//! DELETE /api/blogs/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Blog, BlogDraft, BlogValidationError, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BlogSchema, ErrorSchema};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, invalid_field_error, parse_blog_id, required,
};

/// Request payload for creating a blog.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    /// Credited author; omitted or blank means anonymous.
    #[schema(example = "Wes Bos")]
    pub author: Option<String>,
    /// Blog title; required.
    #[schema(example = "Javascript and magic")]
    pub title: Option<String>,
    /// Link to the blog; required.
    #[schema(example = "wesbos.com/jsandmagic")]
    pub url: Option<String>,
}

impl TryFrom<CreateBlogRequest> for BlogDraft {
    type Error = Error;

    fn try_from(value: CreateBlogRequest) -> Result<Self, Self::Error> {
        let title = required(value.title, FieldName::new("title"))?;
        let url = required(value.url, FieldName::new("url"))?;
        let author = value.author.unwrap_or_default();
        Self::try_from_parts(&author, &title, &url).map_err(map_blog_validation_error)
    }
}

fn map_blog_validation_error(err: BlogValidationError) -> Error {
    invalid_field_error(FieldName::new(err.field()), err.to_string())
}

/// List every blog, most liked first.
#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Blogs ordered by likes, then insertion", body = [BlogSchema]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "listBlogs",
    security([])
)]
#[get("/blogs")]
pub async fn list_blogs(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Blog>>> {
    Ok(web::Json(state.blogs_query.list().await?))
}

/// Create a blog owned by the logged-in user.
#[utoipa::path(
    post,
    path = "/api/blogs",
    request_body = CreateBlogRequest,
    responses(
        (status = 201, description = "Blog created with zero likes", body = BlogSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "createBlog",
    security(("SessionCookie" = []))
)]
#[post("/blogs")]
pub async fn create_blog(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateBlogRequest>,
) -> ApiResult<HttpResponse> {
    let identity = session.require_account(state.login.as_ref()).await?;
    let draft = BlogDraft::try_from(payload.into_inner())?;
    let blog = state.blogs.create(&identity, draft).await?;
    Ok(HttpResponse::Created().json(blog))
}

/// Fetch one blog.
#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, format = Uuid, description = "Blog identifier")),
    responses(
        (status = 200, description = "Blog", body = BlogSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 404, description = "No such blog", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "getBlog",
    security([])
)]
#[get("/blogs/{id}")]
pub async fn get_blog(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Blog>> {
    let id = parse_blog_id(&path)?;
    Ok(web::Json(state.blogs_query.get(id).await?))
}

/// Add one like. Any logged-in user may like any blog.
#[utoipa::path(
    post,
    path = "/api/blogs/{id}/likes",
    params(("id" = String, Path, format = Uuid, description = "Blog identifier")),
    responses(
        (status = 200, description = "Blog after the like", body = BlogSchema),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 404, description = "No such blog", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "likeBlog",
    security(("SessionCookie" = []))
)]
#[post("/blogs/{id}/likes")]
pub async fn like_blog(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Blog>> {
    let identity = session.require_account(state.login.as_ref()).await?;
    let id = parse_blog_id(&path)?;
    Ok(web::Json(state.blogs.like(&identity, id).await?))
}

/// Delete a blog. Only its creator may do so.
#[utoipa::path(
    delete,
    path = "/api/blogs/{id}",
    params(("id" = String, Path, format = Uuid, description = "Blog identifier")),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 400, description = "Invalid id", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Not the creator", body = ErrorSchema),
        (status = 404, description = "No such blog", body = ErrorSchema)
    ),
    tags = ["blogs"],
    operation_id = "deleteBlog",
    security(("SessionCookie" = []))
)]
#[delete("/blogs/{id}")]
pub async fn delete_blog(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let identity = session.require_account(state.login.as_ref()).await?;
    let id = parse_blog_id(&path)?;
    state.blogs.delete(&identity, id).await?;
    Ok(HttpResponse::NoContent().finish())
}
