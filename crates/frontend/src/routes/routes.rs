use leptos::prelude::*;

use crate::domain::receiving::ui::goods_receipt::GoodsReceiptPage;
use crate::domain::receiving::ui::pre_acceptance::PreAcceptancePage;
use crate::domain::receiving::ui::success_report::SuccessReportPage;
use crate::routes::{use_screen, Screen};
use crate::system::auth::context::use_auth;
use crate::system::pages::home::HomePage;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let screen = use_screen();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            {move || match screen.get() {
                Screen::Home => view! { <HomePage /> }.into_any(),
                Screen::PreAcceptance => view! { <PreAcceptancePage /> }.into_any(),
                Screen::GoodsReceipt => view! { <GoodsReceiptPage /> }.into_any(),
                Screen::SuccessReport => view! { <SuccessReportPage /> }.into_any(),
            }}
        </Show>
    }
}
