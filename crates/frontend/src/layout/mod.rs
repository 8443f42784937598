//! Application chrome: top header, navigation bar and the home page.

mod home;
mod navbar;
mod top_header;

pub use home::HomePage;
pub use navbar::Navbar;
pub use top_header::TopHeader;

use crate::app::PageKey;
use leptos::prelude::*;

/// Header, navigation and the active page
#[component]
pub fn Shell(
    #[prop(into)]
    active: Signal<PageKey>,

    on_navigate: Callback<PageKey>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader on_navigate=on_navigate />

            <div class="app-body">
                <Navbar active=active on_navigate=on_navigate />

                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
