//! Login page exchanging username + password for a bearer session.

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "csr")]
use crate::routes::AppRoute;
use crate::state::login::LoginForm;
use crate::state::session::SessionContext;
use crate::util::cancel::CancelToken;
use crate::util::text;

/// Login page. On success the session is persisted and the user is sent to
/// the dashboard; on failure the form shows a generic error and stays usable.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let alive = CancelToken::scoped_to_view();
    let form = RwSignal::new(LoginForm::default());

    #[cfg(feature = "csr")]
    let auth_api = crate::net::auth::AuthApi::new(expect_context::<crate::net::client::BrowserClient>());
    #[cfg(not(feature = "csr"))]
    let _ = (&session, &navigate, &alive);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = f.begin_submit().ok());
        let Some(credentials) = started else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            let auth_api = auth_api.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let result = auth_api.login(&credentials.username, &credentials.password).await;
                if alive.is_cancelled() {
                    return;
                }
                let mut accepted = None;
                form.update(|f| accepted = f.finish(result));
                let Some(new_session) = accepted else {
                    return;
                };
                match session.sign_in(new_session) {
                    Ok(()) => navigate(&AppRoute::Dashboard.path(), NavigateOptions::default()),
                    Err(e) => {
                        log::warn!("could not persist session: {e}");
                        form.update(LoginForm::fail);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = credentials;
        }
    };

    let submitting = move || form.with(LoginForm::is_submitting);

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>{text::APP_TITLE}</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder=text::USERNAME_PLACEHOLDER
                        required=true
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder=text::PASSWORD_PLACEHOLDER
                        required=true
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <Show when=move || form.with(|f| f.error.is_some())>
                        <p class="login-message login-message--error">
                            {move || form.with(|f| f.error.unwrap_or_default())}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=submitting>
                        {move || if submitting() { text::LOGIN_BUTTON_BUSY } else { text::LOGIN_BUTTON }}
                    </button>
                </form>
                <div class="login-card__demo">
                    <p>
                        <strong>{text::DEMO_HQ_LABEL}</strong>
                        " "
                        {text::DEMO_HQ_CREDENTIALS}
                    </p>
                    <p>
                        <strong>{text::DEMO_RESTAURANT_LABEL}</strong>
                        " "
                        {text::DEMO_RESTAURANT_CREDENTIALS}
                    </p>
                </div>
            </div>
        </div>
    }
}
