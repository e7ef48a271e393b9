//! Serves the compiled frontend embedded at build time (see `build.rs`).

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::debug;
use mime_guess::from_path;

static FRONTEND: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// Finds the embedded file for `path` and its content type. Paths without a
/// file fall back to `index.html` so the frontend can route them itself.
fn resolve(path: &str) -> Option<(&'static File<'static>, String)> {
    let requested = match path.trim_start_matches('/') {
        "" => INDEX,
        other => other,
    };

    FRONTEND
        .get_file(requested)
        .map(|file| (file, requested))
        .or_else(|| FRONTEND.get_file(INDEX).map(|file| (file, INDEX)))
        .map(|(file, name)| (file, from_path(name).first_or_octet_stream().to_string()))
}

/// Default service: any request no route claimed.
pub async fn serve(req: HttpRequest) -> HttpResponse {
    match resolve(req.path()) {
        Some((file, content_type)) => HttpResponse::Ok()
            .content_type(content_type)
            .body(file.contents()),
        None => {
            debug!("No embedded frontend file for {}", req.path());
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
