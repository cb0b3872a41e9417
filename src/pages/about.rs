use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div>
            <p>"This is the about page"</p>
        </div>
    }
}
