//! Tab strip shared by the module pages.

use leptos::prelude::*;

use crate::state::TabKind;

/// Renders every `T::ALL` option; the active one gets `tab-bar__tab--active`.
#[component]
pub fn TabBar<T: TabKind>(active: Signal<T>, on_select: Callback<T>) -> impl IntoView {
    view! {
        <div class="tab-bar" role="tablist">
            {T::ALL
                .iter()
                .copied()
                .map(|tab| {
                    view! {
                        <button
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || active.get() == tab
                            role="tab"
                            data-tab=tab.id()
                            on:click=move |_| on_select.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
