//! Redirect page markup.

/// Render a static redirect page.
///
/// The page issues an immediate meta refresh to `destination`, points
/// search engines at the canonical URL when one is available, and keeps a
/// plain anchor for clients that follow neither.
pub(crate) fn render_redirect_page(destination: &str, canonical: Option<&str>) -> String {
    let canonical_link = canonical
        .map(|url| format!("    <link rel=\"canonical\" href=\"{url}\">\n"))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"utf-8\">\n\
         \x20   <meta http-equiv=\"refresh\" content=\"0; url={destination}\">\n\
         {canonical_link}\
         \x20   <meta name=\"robots\" content=\"noindex\">\n\
         \x20   <title>Redirecting...</title>\n\
         </head>\n\
         <body>\n\
         \x20   <p>This page has moved to <a href=\"{destination}\">{destination}</a>.</p>\n\
         </body>\n\
         </html>\n"
    )
}
