//! Top bar: brand, live indicator, date, module drawer trigger, avatar.

use leptos::prelude::*;

use crate::state::shell::ShellState;
use crate::util::clock::today_label;

pub const BRAND: &str = "Blue Nexus";
pub const TAGLINE: &str = "where ocean data sparks global action";
const AVATAR_INITIALS: &str = "DR";

#[component]
pub fn Header() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    // Filled in after hydration so the server and browser markup agree.
    let today = RwSignal::new(String::new());
    Effect::new(move || today.set(today_label()));

    let on_modules = move |_| shell.update(|s| s.set_drawer_open(true));

    view! {
        <header class="header">
            <div class="header__left">
                <div class="header__brand">
                    <div class="header__logo"></div>
                    <div>
                        <h1 class="header__title">{BRAND}</h1>
                        <p class="header__tagline">{TAGLINE}</p>
                    </div>
                </div>
                <span class="header__divider"></span>
                <div class="header__live">
                    <span class="header__pulse"></span>
                    <span>"Live Data Stream"</span>
                </div>
            </div>

            <div class="header__center">
                <div class="header__product">"Marine Analytics Platform"</div>
                <div class="header__subtitle">"Advanced Ocean Research & Analytics"</div>
            </div>

            <div class="header__right">
                <span class="header__date">{move || today.get()}</span>
                <button class="btn btn--outline btn--sm" on:click=on_modules>
                    "Modules"
                </button>
                <div class="header__avatar">{AVATAR_INITIALS}</div>
            </div>
        </header>
    }
}
