//! Home route: resolves the caller's role and forwards to their page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::UserRole;
use crate::state::auth::AuthState;

/// Fetches `/api/myself/` once and redirects to the student or teacher
/// page. Stays on a plain loading view while unresolved; an anonymous
/// caller sees a sign-in hint (authentication itself is server-side).
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let myself = LocalResource::new(api::fetch_myself);

    Effect::new(move || {
        if let Some(Some(me)) = myself.get() {
            auth.update(|a| {
                a.user = Some(me.clone());
                a.loading = false;
            });
            let target = match me.role {
                UserRole::Student => "/student",
                UserRole::Instructor => "/teacher",
            };
            navigate(target, NavigateOptions::default());
        }
    });

    view! {
        <div class="home-page">
            <h1>"Student Grading"</h1>
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    myself.get().map(|me| match me {
                        Some(_) => view! { <p>"Redirecting..."</p> }.into_any(),
                        None => view! { <p>"Please sign in to continue."</p> }.into_any(),
                    })
                }}
            </Suspense>
        </div>
    }
}
