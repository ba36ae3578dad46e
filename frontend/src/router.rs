use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::requests::RequestsPage;

pub const ROUTE_PATHS: &[&str] = &["/", "/requests"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="e-hospital | Facility Requests"/>
        <Router>
            <Routes>
                <Route path="/" view=RequestsPage/>
                <Route path="/requests" view=RequestsPage/>
            </Routes>
        </Router>
    }
}
