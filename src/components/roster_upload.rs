//! Per-course roster upload: a file input posting a student-roster
//! spreadsheet as multipart form data. No chunking, no progress bar.

use leptos::prelude::*;

/// Upload control rendered in each course row of the teacher view.
#[component]
pub fn RosterUpload(course_id: i64) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_upload = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(input) = input_ref.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                crate::util::alert::alert("Choose a roster file first.");
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_roster(course_id, &file).await {
                    Ok(()) => input.set_value(""),
                    Err(err) => crate::util::alert::alert(&err.alert_text()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (course_id, &input_ref);
        }
    };

    view! {
        <span class="roster-upload">
            <input type="file" name="stuxls" node_ref=input_ref/>
            <button class="btn" on:click=on_upload>
                "Upload roster"
            </button>
        </span>
    }
}
