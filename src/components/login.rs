use dioxus::prelude::*;

use crate::api::{self, ApiClient};
use crate::components::common::{Button, ErrorMessage};
use crate::models::LoginRequest;
use crate::routes::Route;
use crate::state::{use_session, LoginField, LoginForm, SessionContext};

/// Send a validated login. On success the session is started and the page
/// to land on is returned.
async fn submit_login(
    client: ApiClient,
    mut form: Signal<LoginForm>,
    mut session: SessionContext,
    request: LoginRequest,
) -> Option<Route> {
    let result = api::auth::login_user(&client, &request).await;
    let response = form.write().finish_submit(result)?;
    session.sign_in(&client, &response);
    Some(Route::Home {})
}

#[component]
pub fn LoginPage() -> Element {
    let client = use_context::<ApiClient>();
    let session = use_session();
    let nav = use_navigator();
    let mut form = use_signal(LoginForm::default);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };

        let client = client.clone();
        spawn(async move {
            if let Some(route) = submit_login(client, form, session, request).await {
                nav.push(route);
            }
        });
    };

    let state = form.read();
    let password_type = state.password_input_type();
    let toggle_label = if state.show_password { "Hide password" } else { "Show password" };

    rsx! {
        div { class: "flex justify-center items-center min-h-screen p-4 overflow-hidden",
            div { class: "relative w-full max-w-sm retro-window",
                div { class: "retro-title-bar flex items-center justify-between",
                    span { class: "font-pixel text-white text-sm uppercase tracking-wider", "Login" }
                    button {
                        r#type: "button",
                        class: "retro-close",
                        aria_label: "Close",
                        onclick: move |_| {
                            nav.push(Route::Home {});
                        },
                        "\u{2715}"
                    }
                }

                div { class: "p-4",
                    form { class: "space-y-3", onsubmit: submit,
                        div {
                            label { class: "font-sans text-xs text-black mb-0.5 block select-none", r#for: "login-email", "Email" }
                            input {
                                id: "login-email",
                                name: "email",
                                r#type: "email",
                                class: "w-full h-7 px-1.5 bg-white border border-gray-500 focus:border-black text-xs font-sans",
                                value: "{state.email}",
                                required: true,
                                oninput: move |e| form.write().set_field(LoginField::Email, e.value()),
                            }
                        }
                        div {
                            label { class: "font-sans text-xs text-black mb-0.5 block select-none", r#for: "login-password", "Password" }
                            div { class: "relative",
                                input {
                                    id: "login-password",
                                    name: "password",
                                    r#type: "{password_type}",
                                    class: "w-full h-7 px-1.5 pr-7 bg-white border border-gray-500 focus:border-black text-xs font-sans",
                                    value: "{state.password}",
                                    required: true,
                                    oninput: move |e| form.write().set_field(LoginField::Password, e.value()),
                                }
                                button {
                                    r#type: "button",
                                    class: "absolute inset-y-0 right-0 pr-1.5 flex items-center text-gray-500 hover:text-black text-xs",
                                    aria_label: "{toggle_label}",
                                    onclick: move |_| form.write().toggle_password_visibility(),
                                    if state.show_password { "\u{1F648}" } else { "\u{1F441}" }
                                }
                            }
                        }
                        div { class: "flex justify-between items-center pt-1",
                            label { class: "flex items-center space-x-1.5 cursor-pointer font-sans text-xs text-black select-none",
                                input {
                                    r#type: "checkbox",
                                    name: "rememberMe",
                                    class: "h-3 w-3",
                                    checked: state.remember_me,
                                    onchange: move |e| form.write().set_remember_me(e.checked()),
                                }
                                span { "Remember me" }
                            }
                        }

                        if let Some(error) = &state.error {
                            ErrorMessage { message: error.clone() }
                        }

                        div { class: "pt-2 flex justify-center",
                            Button {
                                button_type: "submit",
                                variant: "window",
                                disabled: state.loading,
                                if state.loading { "Logging In..." } else { "LOGIN" }
                            }
                        }

                        p { class: "text-center font-sans text-xs text-black pt-2",
                            "Don't have an account? "
                            Link { to: Route::Register {}, class: "text-black font-bold hover:underline", "Sign up here." }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionTrust;
    use crate::state::{KeyValueStore, MemoryStore, SessionStore, AUTH_TOKEN_KEY, USERNAME_KEY, USER_ID_KEY};
    use crate::test_support::{run_until, spawn_stub};
    use axum::{routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone)]
    struct LoginFixture {
        store: SessionStore,
        password: &'static str,
        logged_in: Rc<Cell<bool>>,
        landed: Rc<RefCell<Option<Route>>>,
    }

    #[component]
    fn LoginHarness() -> Element {
        let fixture = use_context::<LoginFixture>();
        let client = use_context::<ApiClient>();
        let session = use_context_provider(|| SessionContext::new(fixture.store.clone(), SessionTrust::Presence));

        let (form, request) = use_hook(|| {
            let mut draft = LoginForm::default();
            draft.set_field(LoginField::Email, "ada@example.com".to_string());
            draft.set_field(LoginField::Password, fixture.password.to_string());
            let request = draft.begin_submit();
            (Signal::new(draft), request)
        });

        let landed = fixture.landed.clone();
        use_hook(move || {
            if let Some(request) = request {
                spawn(async move {
                    let route = submit_login(client, form, session, request).await;
                    *landed.borrow_mut() = Some(route.unwrap_or(Route::Login {}));
                });
            }
        });

        let logged_in = session.is_logged_in();
        fixture.logged_in.set(logged_in);
        let error = form.read().error.clone().unwrap_or_default();
        rsx! {
            if logged_in { "signed in" } else { "signed out" }
            "{error}"
        }
    }

    async fn backend() -> String {
        let router = Router::new().route(
            api::auth::LOGIN_PATH,
            post(|Json(body): Json<Value>| async move {
                if body["password"] == "secret" {
                    Json(json!({
                        "success": true,
                        "access_token": "access-1",
                        "user": {"id": 12, "name": "Ada"}
                    }))
                } else {
                    Json(json!({"success": false, "error": "Invalid credentials"}))
                }
            }),
        );
        spawn_stub(router).await
    }

    fn login_dom(base: &str, password: &'static str) -> (VirtualDom, Rc<MemoryStore>, ApiClient, LoginFixture) {
        let backend = Rc::new(MemoryStore::default());
        let client = ApiClient::new(base);
        let fixture = LoginFixture {
            store: SessionStore::new(backend.clone()),
            password,
            logged_in: Rc::new(Cell::new(false)),
            landed: Rc::new(RefCell::new(None)),
        };
        let dom = VirtualDom::new(LoginHarness)
            .with_root_context(fixture.clone())
            .with_root_context(client.clone());
        (dom, backend, client, fixture)
    }

    #[tokio::test]
    async fn test_login_success_starts_session_and_lands_home() {
        let base = backend().await;
        let (mut dom, backend, client, fixture) = login_dom(&base, "secret");
        dom.rebuild_in_place();
        assert!(!fixture.logged_in.get());

        let landed = fixture.landed.clone();
        run_until(&mut dom, || landed.borrow().is_some()).await;
        let logged_in = fixture.logged_in.clone();
        run_until(&mut dom, || logged_in.get()).await;

        assert_eq!(backend.get(AUTH_TOKEN_KEY).as_deref(), Some("access-1"));
        assert_eq!(backend.get(USERNAME_KEY).as_deref(), Some("Ada"));
        assert_eq!(backend.get(USER_ID_KEY).as_deref(), Some("12"));
        assert_eq!(client.get_token().as_deref(), Some("access-1"));

        let route = fixture.landed.borrow().clone().unwrap();
        assert_eq!(route, Route::Home {});
        assert_eq!(route.to_string(), "/");
    }

    #[tokio::test]
    async fn test_login_rejected_stays_logged_out() {
        let base = backend().await;
        let (mut dom, backend, client, fixture) = login_dom(&base, "wrong");
        dom.rebuild_in_place();

        let landed = fixture.landed.clone();
        run_until(&mut dom, || landed.borrow().is_some()).await;

        assert_eq!(*fixture.landed.borrow(), Some(Route::Login {}));
        assert!(!fixture.logged_in.get());
        assert_eq!(backend.get(AUTH_TOKEN_KEY), None);
        assert_eq!(client.get_token(), None);
    }
}
