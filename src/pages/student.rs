//! Student page: courses the student is taking, course detail dialog,
//! my-group dialog, and the new-group composer.

use leptos::prelude::*;

use crate::components::dialog_shell::DialogShell;
use crate::components::member_table::MemberTable;
use crate::net::api;
use crate::net::types::{CourseRole, EntityRef, Group};
use crate::state::composer::GroupComposer;
use crate::state::courses::{CourseDetail, course_rows};
use crate::state::dialog::Dialog;
use crate::state::groups::{MemberRow, Membership, classify_membership, member_row};
use crate::util::alert::alert;

/// Resolve the member rows of `group`: leader first, then each member,
/// each with their class when the server lets us see it. Sequential;
/// a member whose profile fetch fails is skipped.
async fn load_member_rows(group: &Group) -> Vec<MemberRow> {
    let mut rows = Vec::new();
    if let Some(leader) = api::fetch_student(&group.leader).await {
        let class = match &leader.s_class {
            Some(href) => api::fetch_class(href).await,
            None => None,
        };
        rows.push(member_row(&leader, class.as_ref()));
    }
    for href in &group.members {
        let Some(member) = api::fetch_student(href).await else {
            continue;
        };
        let class = match &member.s_class {
            Some(href) => api::fetch_class(href).await,
            None => None,
        };
        rows.push(member_row(&member, class.as_ref()));
    }
    rows
}

/// Student view of the course list. Each row opens the course detail
/// dialog, from which the group dialogs are reached.
#[component]
pub fn StudentPage() -> impl IntoView {
    let courses = LocalResource::new(|| api::fetch_courses(CourseRole::Taking));

    let course_dialog = RwSignal::new(Dialog::<CourseDetail>::default());
    let my_group = RwSignal::new(Dialog::<Vec<MemberRow>>::default());
    let composer = RwSignal::new(Dialog::<GroupComposer>::default());

    let show_course_details = Callback::new(move |course: EntityRef| {
        let Some(token) = course_dialog.try_update(Dialog::begin_open) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let Some(course) = api::fetch_course(&course).await else {
                return;
            };
            course_dialog.update(|d| {
                d.present(token, CourseDetail::from(course));
            });
        });
    });

    // Chain: myself -> profile -> groups of this course containing me.
    let show_my_group = Callback::new(move |course_id: i64| {
        let Some(token) = my_group.try_update(Dialog::begin_open) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let Some(me) = api::fetch_myself().await else {
                return;
            };
            let Some(profile) = api::fetch_student(&me.url).await else {
                return;
            };
            let Some(groups) = api::fetch_groups_with_student(course_id, profile.id).await else {
                return;
            };
            match classify_membership(groups) {
                Membership::None => alert("You are not in a group!"),
                Membership::Ambiguous => {}
                Membership::One(group) => {
                    // Skip the member fetches if the dialog was closed
                    // while the chain was in flight.
                    if !my_group.with_untracked(|d| d.is_current(token)) {
                        return;
                    }
                    let rows = load_member_rows(&group).await;
                    my_group.update(|d| {
                        d.present(token, rows);
                    });
                }
            }
        });
    });

    // Same chain up to the membership check, then the ungrouped students
    // of the course seed the candidate selector.
    let show_new_group = Callback::new(move |course_id: i64| {
        let Some(token) = composer.try_update(Dialog::begin_open) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let Some(me) = api::fetch_myself().await else {
                return;
            };
            let Some(profile) = api::fetch_student(&me.url).await else {
                return;
            };
            let Some(groups) = api::fetch_groups_with_student(course_id, profile.id).await else {
                return;
            };
            if !matches!(classify_membership(groups), Membership::None) {
                alert("You've already joined a group!");
                return;
            }
            let Some(students) = api::fetch_ungrouped_students(course_id).await else {
                return;
            };
            composer.update(|d| {
                d.present(token, GroupComposer::from_ungrouped(course_id, &students, profile.id));
            });
        });
    });

    view! {
        <div class="student-page courselist">
            <header class="page-header">
                <h1>"My Courses"</h1>
            </header>

            <table class="course-table">
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th>"Term"</th>
                        <th>"Description"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <Suspense fallback=|| ()>
                        {move || {
                            courses.get().map(|list| {
                                course_rows(&list.unwrap_or_default())
                                    .into_iter()
                                    .map(|row| {
                                        let details = row.details.clone();
                                        view! {
                                            <tr>
                                                <td>{row.title}</td>
                                                <td>{row.term}</td>
                                                <td>{row.description}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--primary"
                                                        on:click=move |_| {
                                                            show_course_details.run(details.clone());
                                                        }
                                                    >
                                                        "Details"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </Suspense>
                </tbody>
            </table>

            <Show when=move || course_dialog.get().is_shown()>
                <CourseDetailDialog
                    dialog=course_dialog
                    on_my_group=show_my_group
                    on_new_group=show_new_group
                />
            </Show>

            <Show when=move || my_group.get().is_shown()>
                <DialogShell
                    title="My Group"
                    on_close=Callback::new(move |()| my_group.update(Dialog::close))
                >
                    {move || {
                        my_group
                            .with(|d| d.data().cloned())
                            .map(|rows| view! { <MemberTable rows=rows/> })
                    }}
                </DialogShell>
            </Show>

            <Show when=move || composer.get().is_shown()>
                <NewGroupDialog composer=composer/>
            </Show>
        </div>
    }
}

/// Course detail dialog, student variant: read-only fields plus entry
/// points to the group dialogs.
#[component]
fn CourseDetailDialog(
    dialog: RwSignal<Dialog<CourseDetail>>,
    on_my_group: Callback<i64>,
    on_new_group: Callback<i64>,
) -> impl IntoView {
    let detail = move || dialog.with(|d| d.data().cloned());
    let course_id = move || detail().map(|d| d.id).unwrap_or_default();

    view! {
        <DialogShell
            title="Course Details"
            on_close=Callback::new(move |()| dialog.update(Dialog::close))
        >
            <p class="dialog__field">{move || detail().map(|d| d.title)}</p>
            <p class="dialog__field">{move || detail().map(|d| d.term)}</p>
            <p class="dialog__field">{move || detail().map(|d| d.description)}</p>
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_my_group.run(course_id())>
                    "My group"
                </button>
                <button class="btn" on:click=move |_| on_new_group.run(course_id())>
                    "New group"
                </button>
                <button class="btn" on:click=move |_| dialog.update(Dialog::close)>
                    "Close"
                </button>
            </div>
        </DialogShell>
    }
}

/// New-group composer: moves candidates between the selector and the
/// pending list locally; save is the only server call.
#[component]
fn NewGroupDialog(composer: RwSignal<Dialog<GroupComposer>>) -> impl IntoView {
    let group_name = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<i64>);

    let add_member = move |_| {
        if let Some(id) = selected.get_untracked() {
            composer.update(|d| {
                if let Some(m) = d.data_mut() {
                    m.pick(id);
                }
            });
            selected.set(None);
        }
    };

    let save = move |_| {
        let snapshot = composer.with_untracked(|d| d.data().cloned());
        let Some(mut snapshot) = snapshot else {
            return;
        };
        snapshot.group_name = group_name.get_untracked();
        leptos::task::spawn_local(async move {
            // The leader is always the composing student, re-resolved at
            // save time.
            let Some(me) = api::fetch_myself().await else {
                return;
            };
            match api::create_group(snapshot.course_id, &snapshot.to_body(&me.url)).await {
                Ok(()) => composer.update(Dialog::close),
                Err(err) => alert(&err.alert_text()),
            }
        });
    };

    view! {
        <DialogShell
            title="New Group"
            on_close=Callback::new(move |()| composer.update(Dialog::close))
        >
            <label class="dialog__label">
                "Group name"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || group_name.get()
                    on:input=move |ev| group_name.set(event_target_value(&ev))
                />
            </label>

            <label class="dialog__label">
                "Candidates"
                <select
                    class="candidate-list"
                    size="6"
                    on:change=move |ev| {
                        selected.set(event_target_value(&ev).parse().ok());
                    }
                >
                    {move || {
                        composer.with(|d| {
                            d.data().map(|m| {
                                m.candidates
                                    .iter()
                                    .map(|c| {
                                        view! {
                                            <option value=c.id.to_string()>{c.name.clone()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        })
                    }}
                </select>
            </label>
            <button class="btn" on:click=add_member>
                "Add member"
            </button>

            <table class="pending-members">
                <tbody>
                    {move || {
                        composer.with(|d| {
                            d.data().map(|m| {
                                m.pending
                                    .iter()
                                    .map(|c| {
                                        let id = c.id;
                                        view! {
                                            <tr>
                                                <td>{id.to_string()}</td>
                                                <td>{c.name.clone()}</td>
                                                <td>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click=move |_| {
                                                            composer.update(|d| {
                                                                if let Some(m) = d.data_mut() {
                                                                    m.unpick(id);
                                                                }
                                                            });
                                                        }
                                                    >
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            })
                        })
                    }}
                </tbody>
            </table>

            <div class="dialog__actions">
                <button class="btn" on:click=move |_| composer.update(Dialog::close)>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=save>
                    "Save"
                </button>
            </div>
        </DialogShell>
    }
}
