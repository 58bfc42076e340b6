use leptos::*;
use leptos_meta::*;
use page_runtime::{PageProvider, PageShell};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let host_services = platform_host_web::build_host_services();

    view! {
        <Title text="Water Depletion Project" />
        <Meta
            name="description"
            content="How Illinois draws down, protects, and renews its water."
        />

        <PageProvider host_services>
            <PageShell />
        </PageProvider>
    }
}
