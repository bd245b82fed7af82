//! Teacher page: courses the instructor gives, assignments across those
//! courses, and the dialogs for course configuration, groups, and
//! assignment editing.

use leptos::prelude::*;

use crate::components::dialog_shell::DialogShell;
use crate::components::member_table::MemberTable;
use crate::components::roster_upload::RosterUpload;
use crate::net::api;
use crate::net::types::{Course, CourseRole, EntityRef, ResourceKind};
use crate::state::assignments::{
    AssignmentDetail, AssignmentForm, AssignmentRow, NewAssignmentForm, assignment_row,
};
use crate::state::courses::{CourseConfigForm, CourseDetail, NewCourseForm, course_rows};
use crate::state::dialog::Dialog;
use crate::state::groups::{GroupRow, MemberRow, group_row, member_row};
use crate::state::ui::TeacherTab;
use crate::util::alert::alert;

/// Teacher view with two tabs (courses, assignments) and the dialogs
/// reached from them.
#[component]
pub fn TeacherPage() -> impl IntoView {
    let courses = LocalResource::new(|| api::fetch_courses(CourseRole::Giving));
    let tab = RwSignal::new(TeacherTab::default());
    let assignment_rows = RwSignal::new(Vec::<AssignmentRow>::new());

    let course_dialog = RwSignal::new(Dialog::<CourseDetail>::default());
    let groups_dialog = RwSignal::new(Dialog::<Vec<GroupRow>>::default());
    let students_dialog = RwSignal::new(Dialog::<Vec<MemberRow>>::default());
    let members_dialog = RwSignal::new(Dialog::<Vec<MemberRow>>::default());
    let assignment_dialog = RwSignal::new(Dialog::<AssignmentDetail>::default());
    let new_assignment_course = RwSignal::new(None::<i64>);
    let show_new_course = RwSignal::new(false);

    // Rebuild the assignment table: every giving course's assignments,
    // with the owning course re-fetched per assignment (no cache).
    let reload_assignments = Callback::new(move |()| {
        leptos::task::spawn_local(async move {
            let Some(giving) = api::fetch_courses(CourseRole::Giving).await else {
                return;
            };
            let mut rows = Vec::new();
            for course in &giving {
                let Some(assignments) = api::fetch_assignments(course.id).await else {
                    continue;
                };
                for assignment in &assignments {
                    let course_ref =
                        EntityRef::from_url(ResourceKind::Course, assignment.course.clone());
                    let title = match api::fetch_course(&course_ref).await {
                        Some(c) => c.title,
                        None => String::new(),
                    };
                    rows.push(assignment_row(assignment, &title));
                }
            }
            assignment_rows.set(rows);
        });
    });

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

    // Course groups, with each leader's name resolved separately.
    let show_groups = Callback::new(move |course_id: i64| {
        let Some(token) = groups_dialog.try_update(Dialog::begin_open) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let Some(groups) = api::fetch_course_groups(course_id).await else {
                return;
            };
            let mut rows = Vec::new();
            for group in &groups {
                let leader = match api::fetch_student(&group.leader).await {
                    Some(s) => s.name,
                    None => String::new(),
                };
                rows.push(group_row(group, &leader));
            }
            groups_dialog.update(|d| {
                d.present(token, rows);
            });
        });
    });

    // All students taking the course, via its enrollment records.
    let show_students = Callback::new(move |course_id: i64| {
        let Some(token) = students_dialog.try_update(Dialog::begin_open) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let Some(takes) = api::fetch_course_takes(course_id).await else {
                return;
            };
            let mut rows = Vec::new();
            for record in &takes {
                let Some(student) = api::fetch_student(&record.student).await else {
                    continue;
                };
                let class = match &student.s_class {
                    Some(href) => api::fetch_class(href).await,
                    None => None,
                };
                rows.push(member_row(&student, class.as_ref()));
            }
            students_dialog.update(|d| {
                d.present(token, rows);
            });
        });
    });

    let show_group_members = Callback::new(move |group: EntityRef| {
        let Some(token) = members_dialog.try_update(Dialog::begin_open) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let Some(group) = api::fetch_group(&group).await else {
                return;
            };
            let mut rows = Vec::new();
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
            members_dialog.update(|d| {
                d.present(token, rows);
            });
        });
    });

    let delete_group = Callback::new(move |group: EntityRef| {
        leptos::task::spawn_local(async move {
            match api::delete_group(&group).await {
                // The list in the dialog is now stale; close it. The
                // next open re-fetches.
                Ok(()) => groups_dialog.update(Dialog::close),
                Err(err) => alert(&err.alert_text()),
            }
        });
    });

    let show_assignment_details = Callback::new(move |assignment: EntityRef| {
        let Some(token) = assignment_dialog.try_update(Dialog::begin_open) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let Some(assignment) = api::fetch_assignment(&assignment).await else {
                return;
            };
            assignment_dialog.update(|d| {
                d.present(token, AssignmentDetail::from(assignment));
            });
        });
    });

    view! {
        <div class="teacher-page">
            <header class="page-header">
                <h1>"My Courses"</h1>
                <nav class="menu-opt">
                    <button
                        class="btn"
                        class=("btn--active", move || tab.get() == TeacherTab::Courses)
                        on:click=move |_| tab.set(TeacherTab::Courses)
                    >
                        "Courses"
                    </button>
                    <button
                        class="btn"
                        class=("btn--active", move || tab.get() == TeacherTab::Assignments)
                        on:click=move |_| {
                            tab.set(TeacherTab::Assignments);
                            reload_assignments.run(());
                        }
                    >
                        "Assignments"
                    </button>
                </nav>
                <button class="btn btn--primary" on:click=move |_| show_new_course.set(true)>
                    "+ New Course"
                </button>
            </header>

            <Show when=move || tab.get() == TeacherTab::Courses>
                <table class="course-table courselist">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Term"</th>
                            <th>"Description"</th>
                            <th>"Roster"</th>
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
                                                        <RosterUpload course_id=row.id/>
                                                    </td>
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
            </Show>

            <Show when=move || tab.get() == TeacherTab::Assignments>
                <table class="assignment-table assignmentlist">
                    <thead>
                        <tr>
                            <th>"Course"</th>
                            <th>"Title"</th>
                            <th>"Description"</th>
                            <th>"Deadline"</th>
                            <th>"Grade ratio"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            assignment_rows
                                .get()
                                .into_iter()
                                .map(|row| {
                                    let details = row.details.clone();
                                    view! {
                                        <tr>
                                            <td>{row.course_title}</td>
                                            <td>{row.title}</td>
                                            <td>{row.description}</td>
                                            <td>{row.deadline}</td>
                                            <td>{row.grade_ratio}</td>
                                            <td>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| {
                                                        show_assignment_details.run(details.clone());
                                                    }
                                                >
                                                    "Edit"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>

            <Show when=move || course_dialog.get().is_shown()>
                <TeacherCourseDialog
                    dialog=course_dialog
                    courses=courses
                    on_students=show_students
                    on_groups=show_groups
                    on_new_assignment=Callback::new(move |id| new_assignment_course.set(Some(id)))
                />
            </Show>

            <Show when=move || groups_dialog.get().is_shown()>
                <DialogShell
                    title="Groups"
                    on_close=Callback::new(move |()| groups_dialog.update(Dialog::close))
                >
                    <table class="group-table">
                        <thead>
                            <tr>
                                <th>"Number"</th>
                                <th>"Name"</th>
                                <th>"Leader"</th>
                                <th>"Contact"</th>
                                <th></th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                groups_dialog.with(|d| {
                                    d.data().map(|rows| {
                                        rows.iter()
                                            .map(|row| {
                                                let members_ref = row.group.clone();
                                                let delete_ref = row.group.clone();
                                                view! {
                                                    <tr>
                                                        <td>{row.number.clone()}</td>
                                                        <td>{row.name.clone()}</td>
                                                        <td>{row.leader.clone()}</td>
                                                        <td>{row.contact.clone()}</td>
                                                        <td>
                                                            <button
                                                                class="btn"
                                                                on:click=move |_| {
                                                                    show_group_members.run(members_ref.clone());
                                                                }
                                                            >
                                                                "Members"
                                                            </button>
                                                        </td>
                                                        <td>
                                                            <button
                                                                class="btn btn--danger"
                                                                on:click=move |_| {
                                                                    delete_group.run(delete_ref.clone());
                                                                }
                                                            >
                                                                "Delete"
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
                </DialogShell>
            </Show>

            <Show when=move || students_dialog.get().is_shown()>
                <DialogShell
                    title="Students"
                    on_close=Callback::new(move |()| students_dialog.update(Dialog::close))
                >
                    {move || {
                        students_dialog
                            .with(|d| d.data().cloned())
                            .map(|rows| view! { <MemberTable rows=rows/> })
                    }}
                </DialogShell>
            </Show>

            <Show when=move || members_dialog.get().is_shown()>
                <DialogShell
                    title="Group Members"
                    on_close=Callback::new(move |()| members_dialog.update(Dialog::close))
                >
                    {move || {
                        members_dialog
                            .with(|d| d.data().cloned())
                            .map(|rows| view! { <MemberTable rows=rows/> })
                    }}
                </DialogShell>
            </Show>

            <Show when=move || assignment_dialog.get().is_shown()>
                <AssignmentDialog dialog=assignment_dialog on_saved=reload_assignments/>
            </Show>

            <Show when=move || new_assignment_course.get().is_some()>
                <NewAssignmentDialog course=new_assignment_course on_saved=reload_assignments/>
            </Show>

            <Show when=move || show_new_course.get()>
                <NewCourseDialog show=show_new_course courses=courses/>
            </Show>
        </div>
    }
}

/// Course detail dialog, teacher variant: read-only title and term plus
/// the editable group configuration and course-level actions.
#[component]
fn TeacherCourseDialog(
    dialog: RwSignal<Dialog<CourseDetail>>,
    courses: LocalResource<Option<Vec<Course>>>,
    on_students: Callback<i64>,
    on_groups: Callback<i64>,
    on_new_assignment: Callback<i64>,
) -> impl IntoView {
    // The dialog is only mounted while shown, so the config form can be
    // seeded once from the presented data.
    let seed = dialog.with_untracked(|d| d.data().cloned()).unwrap_or_else(|| CourseDetail {
        id: 0,
        title: String::new(),
        term: String::new(),
        description: String::new(),
        config: CourseConfigForm::default(),
    });
    let course_id = seed.id;
    let description = RwSignal::new(seed.config.description.clone());
    let group_min = RwSignal::new(seed.config.min_group_size.clone());
    let group_max = RwSignal::new(seed.config.max_group_size.clone());

    let save_config = move |_| {
        let form = CourseConfigForm {
            description: description.get_untracked(),
            min_group_size: group_min.get_untracked(),
            max_group_size: group_max.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match api::update_course_config(course_id, &form.to_patch()).await {
                Ok(()) => {
                    dialog.update(Dialog::close);
                    courses.refetch();
                }
                Err(err) => alert(&err.alert_text()),
            }
        });
    };

    let delete_course = move |_| {
        leptos::task::spawn_local(async move {
            match api::delete_course(&EntityRef::course(course_id)).await {
                Ok(()) => {
                    dialog.update(Dialog::close);
                    courses.refetch();
                }
                // A rejected delete leaves the dialog open.
                Err(err) => alert(&err.alert_text()),
            }
        });
    };

    view! {
        <DialogShell
            title=seed.title.clone()
            on_close=Callback::new(move |()| dialog.update(Dialog::close))
        >
            <p class="dialog__field">{seed.term.clone()}</p>

            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="dialog__label">
                "Min group size"
                <input
                    class="dialog__input"
                    type="number"
                    prop:value=move || group_min.get()
                    on:input=move |ev| group_min.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Max group size"
                <input
                    class="dialog__input"
                    type="number"
                    prop:value=move || group_max.get()
                    on:input=move |ev| group_max.set(event_target_value(&ev))
                />
            </label>

            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_students.run(course_id)>
                    "Students"
                </button>
                <button class="btn" on:click=move |_| on_groups.run(course_id)>
                    "Groups"
                </button>
                <button class="btn" on:click=move |_| on_new_assignment.run(course_id)>
                    "New assignment"
                </button>
                <button class="btn btn--primary" on:click=save_config>
                    "Save"
                </button>
                <button class="btn btn--danger" on:click=delete_course>
                    "Delete course"
                </button>
                <button class="btn" on:click=move |_| dialog.update(Dialog::close)>
                    "Close"
                </button>
            </div>
        </DialogShell>
    }
}

/// Assignment edit dialog. The form starts blank on every open; save
/// patches deadline, description, and grade ratio.
#[component]
fn AssignmentDialog(
    dialog: RwSignal<Dialog<AssignmentDetail>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let seed = dialog.with_untracked(|d| d.data().cloned());
    let (assignment_id, title) = match seed {
        Some(detail) => (detail.id, detail.title),
        None => (0, String::new()),
    };
    let deadline = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let grade_ratio = RwSignal::new(String::new());

    let save = move |_| {
        let form = AssignmentForm {
            deadline_date: deadline.get_untracked(),
            description: description.get_untracked(),
            grade_ratio: grade_ratio.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match api::update_assignment(assignment_id, &form.to_patch()).await {
                Ok(()) => {
                    dialog.update(Dialog::close);
                    on_saved.run(());
                }
                Err(err) => alert(&err.alert_text()),
            }
        });
    };

    let delete = move |_| {
        leptos::task::spawn_local(async move {
            match api::delete_assignment(assignment_id).await {
                Ok(()) => {
                    dialog.update(Dialog::close);
                    on_saved.run(());
                }
                Err(err) => alert(&err.alert_text()),
            }
        });
    };

    view! {
        <DialogShell title=title on_close=Callback::new(move |()| dialog.update(Dialog::close))>
            <label class="dialog__label">
                "Deadline"
                <input
                    class="dialog__input"
                    type="date"
                    prop:value=move || deadline.get()
                    on:input=move |ev| deadline.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="dialog__label">
                "Grade ratio"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || grade_ratio.get()
                    on:input=move |ev| grade_ratio.set(event_target_value(&ev))
                />
            </label>

            <div class="dialog__actions">
                <button class="btn" on:click=move |_| dialog.update(Dialog::close)>
                    "Cancel"
                </button>
                <button class="btn btn--danger" on:click=delete>
                    "Delete"
                </button>
                <button class="btn btn--primary" on:click=save>
                    "Save"
                </button>
            </div>
        </DialogShell>
    }
}

/// New-assignment dialog for the course held in `course`. The owning
/// course is re-fetched at save time for its URL reference.
#[component]
fn NewAssignmentDialog(course: RwSignal<Option<i64>>, on_saved: Callback<()>) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let deadline = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let grade_ratio = RwSignal::new(String::new());

    let save = move |_| {
        let Some(course_id) = course.get_untracked() else {
            return;
        };
        let form = NewAssignmentForm {
            title: title.get_untracked(),
            deadline_date: deadline.get_untracked(),
            description: description.get_untracked(),
            grade_ratio: grade_ratio.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            let Some(owner) = api::fetch_course(&EntityRef::course(course_id)).await else {
                return;
            };
            match api::create_assignment(&form.to_body(&owner.url)).await {
                Ok(()) => {
                    course.set(None);
                    on_saved.run(());
                }
                Err(err) => alert(&err.alert_text()),
            }
        });
    };

    view! {
        <DialogShell title="New Assignment" on_close=Callback::new(move |()| course.set(None))>
            <label class="dialog__label">
                "Title"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Deadline"
                <input
                    class="dialog__input"
                    type="date"
                    prop:value=move || deadline.get()
                    on:input=move |ev| deadline.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="dialog__label">
                "Grade ratio"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || grade_ratio.get()
                    on:input=move |ev| grade_ratio.set(event_target_value(&ev))
                />
            </label>

            <div class="dialog__actions">
                <button class="btn" on:click=move |_| course.set(None)>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=save>
                    "Create"
                </button>
            </div>
        </DialogShell>
    }
}

/// New-course dialog. On success the form fields clear and the course
/// list re-fetches.
#[component]
fn NewCourseDialog(
    show: RwSignal<bool>,
    courses: LocalResource<Option<Vec<Course>>>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let year = RwSignal::new(String::new());
    let semester = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let save = move |_| {
        let form = NewCourseForm {
            title: title.get_untracked(),
            year: year.get_untracked(),
            semester: semester.get_untracked(),
            description: description.get_untracked(),
        };
        leptos::task::spawn_local(async move {
            match api::create_course(&form.to_body()).await {
                Ok(_) => {
                    title.set(String::new());
                    year.set(String::new());
                    semester.set(String::new());
                    description.set(String::new());
                    show.set(false);
                    courses.refetch();
                }
                Err(err) => alert(&err.alert_text()),
            }
        });
    };

    view! {
        <DialogShell title="New Course" on_close=Callback::new(move |()| show.set(false))>
            <label class="dialog__label">
                "Title"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Year"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || year.get()
                    on:input=move |ev| year.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Semester"
                <input
                    class="dialog__input"
                    type="text"
                    prop:value=move || semester.get()
                    on:input=move |ev| semester.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <div class="dialog__actions">
                <button class="btn" on:click=move |_| show.set(false)>
                    "Cancel"
                </button>
                <button class="btn btn--primary" on:click=save>
                    "Create"
                </button>
            </div>
        </DialogShell>
    }
}
