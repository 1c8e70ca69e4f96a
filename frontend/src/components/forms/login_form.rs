use bank_shared::controllers::{self, GENERIC_FAILURE};
use bank_shared::Account;
use yew::prelude::*;

use super::{form_error, input_value};
use crate::hooks::use_submission::use_submission;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub api_client: ApiClient,
    pub on_login: Callback<Account>,
}

#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let user = use_state(String::new);
    let submission = use_submission();

    let on_user_input = {
        let user = user.clone();
        Callback::from(move |e: InputEvent| user.set(input_value(&e)))
    };

    let on_submit = {
        let user = user.clone();
        let api_client = props.api_client.clone();
        let on_login = props.on_login.clone();
        let actions = submission.actions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api_client = api_client.clone();
            let name = (*user).clone();
            let on_login = on_login.clone();
            actions.run(
                async move { controllers::login(&api_client, &name).await },
                move |account| on_login.emit(account),
                GENERIC_FAILURE,
            );
        })
    };

    html! {
        <section class="login-section">
            <h2>{"Login"}</h2>
            <form id="loginForm" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="username">{"Username"}</label>
                    <input
                        type="text"
                        id="username"
                        name="user"
                        maxlength="20"
                        required=true
                        value={(*user).clone()}
                        oninput={on_user_input}
                        disabled={submission.state.pending}
                    />
                </div>
                {form_error(&submission.state.error, "loginError")}
                <button type="submit" class="btn btn-primary" disabled={submission.state.pending}>
                    {if submission.state.pending { "Logging in..." } else { "Login" }}
                </button>
            </form>
        </section>
    }
}
