use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Dashboard,
    Requests,
    Feedbacks,
    Reports,
    Patient,
    Settings,
}

impl NavSection {
    pub const ALL: [NavSection; 6] = [
        NavSection::Dashboard,
        NavSection::Requests,
        NavSection::Feedbacks,
        NavSection::Reports,
        NavSection::Patient,
        NavSection::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Dashboard => "Dashboard",
            NavSection::Requests => "Requests",
            NavSection::Feedbacks => "Feedbacks",
            NavSection::Reports => "Reports",
            NavSection::Patient => "Patient",
            NavSection::Settings => "Settings",
        }
    }
}

fn nav_item_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg cursor-pointer text-sm font-medium bg-white text-brand"
    } else {
        "px-4 py-2 rounded-lg cursor-pointer text-sm font-medium text-white hover:bg-brand-hover"
    }
}

#[component]
pub fn Navbar(#[prop(optional)] initial: Option<NavSection>) -> impl IntoView {
    let active = create_rw_signal(initial.unwrap_or(NavSection::Requests));
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    let items = move |mobile: bool| {
        NavSection::ALL
            .iter()
            .copied()
            .map(|section| {
                view! {
                    <li
                        class=move || {
                            let base = nav_item_class(active.get() == section);
                            if mobile { format!("block {}", base) } else { base.to_string() }
                        }
                        on:click=move |_| {
                            active.set(section);
                            set_menu_open.set(false);
                        }
                    >
                        {section.label()}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="bg-brand text-white p-4">
            <div class="max-w-7xl mx-auto flex justify-between items-center">
                <div class="text-2xl font-bold">"e-hospital"</div>
                <ul class="hidden md:flex space-x-4 items-center">{items(false)}</ul>
                <div class="hidden md:flex items-center space-x-4">
                    <span class="pl-4">"Welcome " <b>"Admin"</b></span>
                </div>
                <button
                    type="button"
                    class="md:hidden flex items-center"
                    aria-label="Toggle navigation"
                    on:click=toggle_menu
                >
                    {"☰"}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden mt-4 space-y-2">{items(true)}</ul>
            </Show>
        </nav>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Navbar/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}
