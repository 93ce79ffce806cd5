//! Dashboard page: aggregate counts from the four list endpoints plus a
//! welcome card for the signed-in user.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::header::Header;
use crate::config::paths;
use crate::net::ApiClient;
use crate::state::auth::Session;

/// Dashboard page. Each stat card fetches its list on mount; a failed fetch
/// has already been logged by the HTTP layer and renders as zero.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();

    let users = count_resource(&api, paths::USERS);
    let products = count_resource(&api, paths::PRODUCTS);
    let documents = count_resource(&api, paths::DOCUMENTS);
    let projects = count_resource(&api, paths::PROJECTS);

    let role = format!(
        "Role: {}",
        session
            .user()
            .map_or_else(|| "Viewer".to_owned(), |user| user.role_label().to_owned())
    );

    view! {
        <div class="dashboard">
            <Header title="Dashboard"/>

            <main class="dashboard__main">
                <div class="dashboard__grid">
                    <StatCard label="Total Users" count=users/>
                    <StatCard label="Products" count=products/>
                    <StatCard label="Documents" count=documents/>
                    <StatCard label="Projects" count=projects/>
                </div>

                <Card title="Welcome" subtitle=role>
                    <p>
                        "Welcome to Windchill PLM, "
                        <strong>
                            {move || session.user().map(|user| user.display_name().to_owned())}
                        </strong> "!"
                    </p>
                    <p>
                        "This is your enterprise Product Lifecycle Management system. \
                         You can manage products, documents, projects, and workflows \
                         from here."
                    </p>
                    <ul>
                        <li>"View and manage products"</li>
                        <li>"Upload and control documents"</li>
                        <li>"Track projects and their progress"</li>
                        <li>"Manage approvals and workflows"</li>
                    </ul>
                </Card>
            </main>
        </div>
    }
}

fn count_resource(api: &ApiClient, path: &'static str) -> LocalResource<usize> {
    let api = api.clone();
    LocalResource::new(move || {
        let api = api.clone();
        async move { api.fetch_count(path).await.unwrap_or(0) }
    })
}

/// Single stat tile; shows an ellipsis until its fetch resolves.
#[component]
fn StatCard(label: &'static str, count: LocalResource<usize>) -> impl IntoView {
    view! {
        <Card class="stat-card">
            <p class="stat-card__label">{label}</p>
            <h2 class="stat-card__value">
                <Suspense fallback=|| view! { "..." }>{move || count.get()}</Suspense>
            </h2>
        </Card>
    }
}
