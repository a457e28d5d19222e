//! Collaboration hub page: team, comments, sharing and exports.

use leptos::prelude::*;

use crate::components::badge::{Badge, BadgeVariant};
use crate::components::export_menu::{ExportMenu, table_exporter};
use crate::components::tab_bar::TabBar;
use crate::data::Choice;
use crate::data::collaboration::{
    ANNOTATION_TARGETS, API_ENDPOINTS, API_KEY_PREVIEW, EXPORT_FORMATS, EXPORT_SOURCES, NOTIFICATION_FREQUENCIES,
    Permission, RATE_LIMITS, RECENT_ACTIVITY, RECENT_COMMENTS, RECENT_EXPORTS, ROLE_PERMISSIONS, SHARE_ITEMS,
    SHARED_REPORTS, ShareScope, TEAM_MEMBERS, VIEWER_PERMISSIONS,
};
use crate::data::find_choice;
use crate::state::collaboration::{AnnotationKind, CollabTab, CollaborationState, NotificationKind, SharingLevel};
use crate::util::format::thousands;

#[cfg(test)]
#[path = "collaboration_test.rs"]
mod collaboration_test;

#[component]
pub fn CollaborationPage() -> impl IntoView {
    let state = RwSignal::new(CollaborationState::default());
    let tab = Memo::new(move |_| state.with(|s| s.tab));

    view! {
        <div class="page collaboration">
            <div class="page__header">
                <div>
                    <h1>"Collaboration & Sharing"</h1>
                    <p class="page__subtitle">
                        "Team collaboration, data sharing, and export capabilities for marine research"
                    </p>
                </div>
            </div>
            <TabBar
                active=Signal::derive(move || tab.get())
                on_select=Callback::new(move |t| state.update(|s| s.tab = t))
            />
            {move || match tab.get() {
                CollabTab::Team => view! { <TeamTab/> }.into_any(),
                CollabTab::Comments => view! { <CommentsTab state=state/> }.into_any(),
                CollabTab::Sharing => view! { <SharingTab state=state/> }.into_any(),
                CollabTab::Exports => view! { <ExportsTab state=state/> }.into_any(),
            }}
        </div>
    }
}

/// Plain `<select>` over a static choice list. `on_pick` receives the raw value.
#[component]
fn ChoiceList(
    choices: &'static [Choice],
    #[prop(into)] placeholder: String,
    current: Signal<Option<&'static str>>,
    on_pick: Callback<String>,
) -> impl IntoView {
    view! {
        <select class="select" on:change=move |ev| on_pick.run(event_target_value(&ev))>
            <option value="">{placeholder}</option>
            {choices
                .iter()
                .map(|choice| {
                    let value = choice.value;
                    view! {
                        <option value=value selected=move || current.get() == Some(value)>
                            {choice.label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

#[component]
fn TeamTab() -> impl IntoView {
    let exporter = table_exporter("team-members", TEAM_MEMBERS);
    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header row row--between">
                    <div>
                        <h3 class="card__title">"Team Members"</h3>
                        <p class="card__description">"Manage research team access and permissions"</p>
                    </div>
                    <ExportMenu label="Export" exporter=exporter/>
                </div>
                <div class="stack">
                    {TEAM_MEMBERS
                        .iter()
                        .map(|member| {
                            view! {
                                <div class="list-item row row--between">
                                    <div class="row">
                                        <span class="avatar avatar--sm">{member.initials}</span>
                                        <div>
                                            <div class="list-item__title">{member.name}</div>
                                            <div class="muted">{member.role}</div>
                                            <div class="muted muted--xs">{member.institution}</div>
                                        </div>
                                    </div>
                                    <div class="row">
                                        <Badge variant=permission_variant(member.permission)>
                                            {member.permission.label()}
                                        </Badge>
                                        <span class="muted muted--xs">{member.last_active}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="btn btn--block">"Invite Team Member"</button>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Role Permissions"</h3>
                    <p class="card__description">"Configure access levels for different user roles"</p>
                </div>
                <div class="stack">
                    {ROLE_PERMISSIONS
                        .iter()
                        .map(|(role, access, capabilities)| {
                            view! {
                                <div class="list-item">
                                    <div class="row row--between">
                                        <Badge variant=permission_variant(*role)>{role.label()}</Badge>
                                        <span class="muted">{*access}</span>
                                    </div>
                                    <ul class="bullet-list">
                                        {capabilities.iter().map(|c| view! { <li>{*c}</li> }).collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="btn btn--outline btn--block">"Modify Permissions"</button>
            </div>
        </div>

        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Recent Activity"</h3>
                <p class="card__description">"Team collaboration and data updates"</p>
            </div>
            <div class="stack">
                {RECENT_ACTIVITY
                    .iter()
                    .map(|a| {
                        view! {
                            <div class="row">
                                <span class="avatar avatar--sm">{a.initials}</span>
                                <div>
                                    <div>
                                        <strong>{a.actor}</strong>
                                        {format!(" {} ", a.action)}
                                        <strong>{a.subject}</strong>
                                    </div>
                                    <div class="muted muted--xs">{a.when}</div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CommentsTab(state: RwSignal<CollaborationState>) -> impl IntoView {
    let can_post = move || state.with(|s| s.draft.can_post());
    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Add Annotation"</h3>
                    <p class="card__description">"Comment on datasets or visualizations"</p>
                </div>
                <div class="form">
                    <label class="form__label">"Select Dataset/Visualization"</label>
                    <ChoiceList
                        choices=ANNOTATION_TARGETS
                        placeholder="Choose item to annotate"
                        current=Signal::derive(move || state.with(|s| s.draft.target))
                        on_pick=Callback::new(move |raw: String| state.update(|s| s.draft.set_target(&raw)))
                    />
                    <label class="form__label" for="comment-text">
                        "Comment"
                    </label>
                    <textarea
                        id="comment-text"
                        class="textarea"
                        rows="4"
                        placeholder="Add your observations, questions, or insights..."
                        prop:value=move || state.with(|s| s.draft.text.clone())
                        on:input=move |ev| state.update(|s| s.draft.text = event_target_value(&ev))
                    ></textarea>
                    <label class="form__label">"Annotation Type"</label>
                    <div class="tag-row">
                        {AnnotationKind::ALL
                            .into_iter()
                            .map(|kind| {
                                let selected = move || state.with(|s| s.draft.annotation == Some(kind));
                                view! {
                                    <button
                                        class="badge badge--outline badge--clickable"
                                        class:badge--selected=selected
                                        on:click=move |_| state.update(|s| s.draft.toggle_annotation(kind))
                                    >
                                        {kind.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="btn btn--block" disabled=move || !can_post()>
                        "Post Comment"
                    </button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Recent Comments"</h3>
                    <p class="card__description">"Latest team discussions and annotations"</p>
                </div>
                <div class="stack">
                    {RECENT_COMMENTS
                        .iter()
                        .map(|c| {
                            view! {
                                <div class="list-item">
                                    <div class="row">
                                        <span class="avatar avatar--sm">{c.initials}</span>
                                        <div>
                                            <div class="row">
                                                <span class="list-item__title">{c.author}</span>
                                                <span class="muted muted--xs">{c.timestamp}</span>
                                            </div>
                                            <p>{c.content}</p>
                                            <div class="row">
                                                <Badge variant=BadgeVariant::Outline>{c.dataset}</Badge>
                                                {(c.replies > 0)
                                                    .then(|| {
                                                        view! {
                                                            <span class="muted muted--xs">{reply_label(c.replies)}</span>
                                                        }
                                                    })}
                                                <button class="btn btn--ghost btn--sm">"Reply"</button>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn SharingTab(state: RwSignal<CollaborationState>) -> impl IntoView {
    let exporter = table_exporter("shared-reports", SHARED_REPORTS);
    let frequency = move || state.with(|s| s.notifications.frequency);

    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Share Settings"</h3>
                    <p class="card__description">"Configure data and report sharing permissions"</p>
                </div>
                <div class="form">
                    <label class="form__label">"Select Item to Share"</label>
                    <ChoiceList
                        choices=SHARE_ITEMS
                        placeholder="Choose item to share"
                        current=Signal::derive(move || state.with(|s| s.share.item))
                        on_pick=Callback::new(move |raw: String| state.update(|s| s.share.set_item(&raw)))
                    />
                    <label class="form__label">"Sharing Level"</label>
                    <div class="stack stack--tight">
                        {SharingLevel::ALL
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <label class="radio">
                                        <input
                                            type="radio"
                                            name="sharing"
                                            value=level.value()
                                            prop:checked=move || state.with(|s| s.share.level == level)
                                            on:change=move |_| state.update(|s| s.share.level = level)
                                        />
                                        {level.label()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                    <label class="form__label">"Viewer Permissions"</label>
                    <ChoiceList
                        choices=VIEWER_PERMISSIONS
                        placeholder="Select permissions"
                        current=Signal::derive(move || state.with(|s| s.share.permission))
                        on_pick=Callback::new(move |raw: String| state.update(|s| s.share.set_permission(&raw)))
                    />
                    <label class="form__label" for="share-message">
                        "Share Message (Optional)"
                    </label>
                    <textarea
                        id="share-message"
                        class="textarea"
                        rows="3"
                        placeholder="Add a message for recipients..."
                        prop:value=move || state.with(|s| s.share.message.clone())
                        on:input=move |ev| state.update(|s| s.share.message = event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--block">"Generate Share Link"</button>
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Notification Settings"</h3>
                    <p class="card__description">"Configure alerts and updates"</p>
                </div>
                <div class="stack">
                    {NotificationKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <label class="row row--between">
                                    <div>
                                        <div class="list-item__title">{kind.title()}</div>
                                        <div class="muted">{kind.detail()}</div>
                                    </div>
                                    <input
                                        type="checkbox"
                                        class="switch"
                                        prop:checked=move || state.with(|s| s.notifications.is_enabled(kind))
                                        on:change=move |_| {
                                            state.update(|s| {
                                                s.notifications.toggle(kind);
                                            });
                                        }
                                    />
                                </label>
                            }
                        })
                        .collect_view()}
                    <label class="form__label">"Notification Frequency"</label>
                    <ChoiceList
                        choices=NOTIFICATION_FREQUENCIES
                        placeholder="Select frequency"
                        current=Signal::derive(move || Some(frequency()))
                        on_pick=Callback::new(move |raw: String| state.update(|s| s.notifications.set_frequency(&raw)))
                    />
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card__header row row--between">
                <div>
                    <h3 class="card__title">"Shared Reports & Dashboards"</h3>
                    <p class="card__description">"Items shared with external collaborators"</p>
                </div>
                <ExportMenu label="Export" exporter=exporter/>
            </div>
            <div class="stack">
                {SHARED_REPORTS
                    .iter()
                    .map(|report| {
                        view! {
                            <div class="list-item row row--between">
                                <div>
                                    <div class="list-item__title">{report.title}</div>
                                    <div class="muted">{format!("{} • Created by {}", report.kind, report.author)}</div>
                                    <div class="muted muted--xs">{format!("Created {}", report.created)}</div>
                                </div>
                                <div class="row">
                                    <div class="stat">
                                        <div class="list-item__title">{thousands(u64::from(report.views))}</div>
                                        <div class="muted muted--xs">"views"</div>
                                    </div>
                                    <div class="stat">
                                        <div class="list-item__title">{report.downloads}</div>
                                        <div class="muted muted--xs">"downloads"</div>
                                    </div>
                                    <Badge variant=scope_variant(report.shared)>{report.shared.label()}</Badge>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ExportsTab(state: RwSignal<CollaborationState>) -> impl IntoView {
    view! {
        <div class="grid grid--2">
            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"Export Data & Reports"</h3>
                    <p class="card__description">"Download data in various formats"</p>
                </div>
                <div class="form">
                    <label class="form__label">"Select Data to Export"</label>
                    <ChoiceList
                        choices=EXPORT_SOURCES
                        placeholder="Choose dataset or analysis"
                        current=Signal::derive(move || state.with(|s| s.export_source))
                        on_pick=Callback::new(move |raw: String| {
                            state.update(|s| s.export_source = find_choice(EXPORT_SOURCES, &raw).map(|c| c.value));
                        })
                    />
                    <label class="form__label">"Export Format"</label>
                    {EXPORT_FORMATS
                        .iter()
                        .map(|(format, description)| {
                            view! {
                                <div class="list-item row row--between">
                                    <div>
                                        <div class="list-item__title">{*format}</div>
                                        <div class="muted">{*description}</div>
                                    </div>
                                    <button class="btn btn--outline btn--sm">"Export"</button>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="card">
                <div class="card__header">
                    <h3 class="card__title">"API Access"</h3>
                    <p class="card__description">"Programmatic access to marine data"</p>
                </div>
                <div class="form">
                    <div class="panel">
                        <h4>"REST API Endpoints"</h4>
                        <div class="mono stack stack--tight">
                            {API_ENDPOINTS.iter().map(|e| view! { <div>{*e}</div> }).collect_view()}
                        </div>
                    </div>
                    <label class="form__label" for="api-key">
                        "API Key"
                    </label>
                    <div class="row">
                        <input id="api-key" class="input mono" readonly=true value=API_KEY_PREVIEW/>
                        <button class="btn btn--outline btn--sm">"Copy"</button>
                    </div>
                    <label class="form__label">"Rate Limits"</label>
                    <div class="grid grid--2">
                        {RATE_LIMITS
                            .iter()
                            .map(|(name, limit)| {
                                view! {
                                    <div>
                                        <span class="muted">{format!("{name}:")}</span>
                                        <div>{*limit}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button class="btn btn--outline btn--block">"API Documentation"</button>
                </div>
            </div>
        </div>

        <div class="card">
            <div class="card__header">
                <h3 class="card__title">"Recent Exports"</h3>
                <p class="card__description">"Download history and generated reports"</p>
            </div>
            <div class="stack">
                {RECENT_EXPORTS
                    .iter()
                    .map(|(file, detail, ready)| {
                        let ready = *ready;
                        view! {
                            <div class="list-item row row--between">
                                <div>
                                    <div class="list-item__title">{*file}</div>
                                    <div class="muted">{*detail}</div>
                                </div>
                                <div class="row">
                                    <Badge variant=export_variant(ready)>{export_status(ready)}</Badge>
                                    <button class="btn btn--ghost btn--sm" disabled=!ready>
                                        "Download"
                                    </button>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn permission_variant(permission: Permission) -> BadgeVariant {
    match permission {
        Permission::Admin => BadgeVariant::Default,
        Permission::Scientist => BadgeVariant::Secondary,
        Permission::PolicyMaker => BadgeVariant::Outline,
    }
}

fn scope_variant(scope: ShareScope) -> BadgeVariant {
    match scope {
        ShareScope::Public => BadgeVariant::Default,
        ShareScope::TeamOnly => BadgeVariant::Secondary,
        ShareScope::Institution => BadgeVariant::Outline,
    }
}

fn export_variant(ready: bool) -> BadgeVariant {
    if ready { BadgeVariant::Default } else { BadgeVariant::Secondary }
}

fn export_status(ready: bool) -> &'static str {
    if ready { "Ready" } else { "Processing" }
}

fn reply_label(replies: u32) -> String {
    format!("{replies} replies")
}
