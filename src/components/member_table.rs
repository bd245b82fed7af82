//! Member table: school id, name, and class id per student.

use leptos::prelude::*;

use crate::state::groups::MemberRow;

/// Renders one row per member. The caller rebuilds `rows` wholesale on
/// every fetch, so the table always mirrors the last successful one.
#[component]
pub fn MemberTable(rows: Vec<MemberRow>) -> impl IntoView {
    view! {
        <table class="member-table">
            <thead>
                <tr>
                    <th>"Student id"</th>
                    <th>"Name"</th>
                    <th>"Class"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td>{row.s_id}</td>
                                <td>{row.name}</td>
                                <td>{row.class_id}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
