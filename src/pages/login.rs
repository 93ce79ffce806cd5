//! Login page: form state, client-side validation, and submit.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::button::Button;
use crate::components::card::Card;
use crate::components::input::Input;
use crate::net::ApiClient;
use crate::state::auth::Session;
use crate::state::login_form::LoginForm;

/// Login page. Validation runs before anything touches the network; a
/// rejected login surfaces the session's error message as a banner and the
/// route stays on `/login`.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let errors = form.validate();
        let blocked = errors.has_errors();
        username_error.set(errors.username);
        password_error.set(errors.password);
        if blocked {
            return;
        }

        submitting.set(true);
        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let ok = session.login(&api, &form.username, &form.password).await;
                submitting.set(false);
                if ok {
                    navigate("/dashboard", leptos_router::NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&api, &navigate);
            submitting.set(false);
        }
    };

    view! {
        <div class="login-page">
            <Card class="login-page__card">
                <div class="login-page__header">
                    <h1>"Windchill PLM"</h1>
                    <p>"Enterprise Product Lifecycle Management"</p>
                </div>

                <form on:submit=on_submit>
                    {move || {
                        session
                            .error()
                            .map(|message| view! { <div class="error-banner">{message}</div> })
                    }}

                    <Input
                        label="Username"
                        name="username"
                        placeholder="Enter your username"
                        required=true
                        value=username
                        error=username_error
                    />
                    <Input
                        label="Password"
                        name="password"
                        input_type="password"
                        placeholder="Enter your password"
                        required=true
                        value=password
                        error=password_error
                    />

                    <Button button_type="submit" full_width=true loading=submitting>
                        "Login"
                    </Button>
                </form>

                <div class="login-page__footer">
                    <p>"Default credentials: admin / admin123"</p>
                </div>
            </Card>
        </div>
    }
}
