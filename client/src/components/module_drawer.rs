//! Slide-out navigation listing the seven platform modules.

use leptos::prelude::*;

use crate::state::shell::{ModuleId, ShellState};

#[component]
pub fn ModuleDrawer() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let is_open = move || shell.with(|s| s.drawer_open);
    let on_backdrop = move |_| shell.update(|s| s.set_drawer_open(false));

    view! {
        <Show when=is_open>
            <div class="drawer__backdrop" on:click=on_backdrop></div>
            <aside class="drawer" role="navigation">
                <div class="drawer__header">
                    <h2 class="drawer__title">"Platform Modules"</h2>
                    <p class="drawer__subtitle">"Advanced Marine Analytics"</p>
                </div>
                <div class="drawer__items">
                    {ModuleId::ALL
                        .into_iter()
                        .map(|module| {
                            let active = move || shell.with(|s| s.active_module == module);
                            view! {
                                <button
                                    class="drawer__item"
                                    class:drawer__item--active=active
                                    data-module=module.id()
                                    on:click=move |_| {
                                        shell.update(|s| {
                                            s.select_module(module.id());
                                        });
                                    }
                                >
                                    <div class="drawer__item-label">{module.label()}</div>
                                    <div class="drawer__item-description">{module.description()}</div>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </aside>
        </Show>
    }
}
