pub mod center;
pub mod global_context;
pub mod left;
pub mod notifications;
pub mod top_header;

use leptos::prelude::*;
use notifications::NotificationHost;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------+
/// |          TopHeader           |
/// +------------------------------+
/// |  Sidebar  |     Content      |
/// |   (Left)  |     (Center)     |
/// +------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <center::Center />
                </div>
            </div>

            <NotificationHost />
        </div>
    }
}
