//! Print the OpenAPI document as JSON.

use std::io::{self, Write};

use bloglist::doc::ApiDoc;
use utoipa::OpenApi;

fn main() -> io::Result<()> {
    let document = ApiDoc::openapi().to_pretty_json().map_err(io::Error::other)?;
    writeln!(io::stdout().lock(), "{document}")
}
