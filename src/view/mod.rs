//! Server-rendered page components.

pub mod layout;

pub use layout::{Header, Layout, Page, with_layout};

use leptos::prelude::*;

/// Full HTML document around a rendered page body.
pub fn document(title: &str, body: AnyView) -> String {
    let title = title.to_string();
    let html = view! {
        <html>
            <head>
                <meta charset="utf-8"/>
                <title>{title}</title>
            </head>
            <body>{body}</body>
        </html>
    }
    .to_html();
    format!("<!DOCTYPE html>{html}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_wraps_body() {
        let html = document("Tom & Jerry", view! { <p>"hi"</p> }.into_any());
        assert!(html.starts_with("<!DOCTYPE html><html>"));
        assert!(html.contains("<title>Tom &amp; Jerry</title>"));
        assert!(html.contains("<body><p>hi</p></body>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn document_escapes_body_text() {
        let text = "<script>".to_string();
        let html = document("x", view! { <p>{text}</p> }.into_any());
        assert!(html.contains("<p>&lt;script&gt;</p>"));
        assert!(!html.contains("<script>"));
    }
}
