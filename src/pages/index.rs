use leptos::prelude::*;

/// Link target for the sample post on the home page.
pub const SAMPLE_POST_HREF: &str = "/post?id=8863";

#[component]
pub fn Index() -> impl IntoView {
    view! {
        <div>
            <p>"Hello Next.js"</p>
            <a href=SAMPLE_POST_HREF>"Read a sample post"</a>
        </div>
    }
}
