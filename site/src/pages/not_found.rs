use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page-header not-found">
            <div class="container">
                <h1 class="page-title">"404"</h1>
                <p class="page-subtitle">"The page you're looking for doesn't exist."</p>
                <A href="/" attr:class="btn btn-primary">"Back to Home"</A>
            </div>
        </section>
    }
}
