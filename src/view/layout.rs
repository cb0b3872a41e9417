use leptos::prelude::*;

pub const LAYOUT_STYLE: &str = "margin:20px;padding:20px;border:1px solid #DDD";
const LINK_STYLE: &str = "margin-right:15px";

/// Anything that can produce a view.
pub trait Page {
    fn render(&self) -> AnyView;
}

impl<F, V> Page for F
where
    F: Fn() -> V,
    V: IntoView + 'static,
{
    fn render(&self) -> AnyView {
        self().into_any()
    }
}

/// Navigation bar shown above every wrapped page.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <div>
            <a href="/" style=LINK_STYLE>"Home"</a>
            <a href="/about" style=LINK_STYLE>"About"</a>
        </div>
    }
}

/// A page rendered inside the shared container and header.
#[derive(Debug, Clone)]
pub struct Layout<P> {
    page: P,
}

pub fn with_layout<P: Page>(page: P) -> Layout<P> {
    Layout { page }
}

impl<P: Page> Page for Layout<P> {
    fn render(&self) -> AnyView {
        let page = self.page.render();
        view! {
            <div style=LAYOUT_STYLE>
                <Header/>
                {page}
            </div>
        }
        .into_any()
    }
}
