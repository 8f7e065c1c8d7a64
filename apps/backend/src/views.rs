//! Minimal server-rendered views.
//!
//! Rejections on the protected-handler path answer 200 with this page so the
//! platform's embedding frame shows an in-context message instead of a raw
//! HTTP error.

/// Render the unauthorized page with an already-localized message.
pub fn unauthorized_page(lang: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"{lang}\">\n\
         <head><meta charset=\"utf-8\"><title>Unauthorized</title></head>\n\
         <body>\n\
           <main class=\"authorization-error\">\n\
             <p>{message}</p>\n\
           </main>\n\
         </body>\n\
         </html>\n",
        lang = escape(lang),
        message = escape(message),
    )
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::unauthorized_page;

    #[test]
    fn renders_message_and_language() {
        let page = unauthorized_page("de", "Keine Berechtigung");
        assert!(page.contains("lang=\"de\""));
        assert!(page.contains("Keine Berechtigung"));
    }

    #[test]
    fn escapes_markup() {
        let page = unauthorized_page("en", "<script>alert(1)</script>");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
