//! Shell page: header chrome, navigation drawer, chat dialog, and the one
//! active module page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the `RwSignal<ShellState>` this page reads. The active
//! module is memoized so toggling the drawer or the chat does not remount the
//! module page and discard its local state.

use leptos::prelude::*;

use crate::components::chat_dialog::ChatDialog;
use crate::components::header::Header;
use crate::components::module_drawer::ModuleDrawer;
use crate::pages::analysis::AnalysisPage;
use crate::pages::collaboration::CollaborationPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::data_integration::DataIntegrationPage;
use crate::pages::edna::EdnaPage;
use crate::pages::taxonomy::TaxonomyPage;
use crate::pages::visualization::VisualizationPage;
use crate::state::shell::{ModuleId, ShellState};

#[component]
pub fn ShellPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let active = Memo::new(move |_| shell.with(|s| s.active_module));

    view! {
        <div class="app-shell">
            <Header/>
            <ModuleDrawer/>
            <main class="app-shell__main" data-module=move || active.get().id()>
                {move || module_view(active.get())}
            </main>
            <ChatDialog/>
        </div>
    }
}

fn module_view(module: ModuleId) -> AnyView {
    match module {
        ModuleId::Dashboard => view! { <DashboardPage/> }.into_any(),
        ModuleId::DataIntegration => view! { <DataIntegrationPage/> }.into_any(),
        ModuleId::Visualization => view! { <VisualizationPage/> }.into_any(),
        ModuleId::Taxonomy => view! { <TaxonomyPage/> }.into_any(),
        ModuleId::Edna => view! { <EdnaPage/> }.into_any(),
        ModuleId::Analysis => view! { <AnalysisPage/> }.into_any(),
        ModuleId::Collaboration => view! { <CollaborationPage/> }.into_any(),
    }
}
