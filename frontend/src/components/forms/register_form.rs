use bank_shared::controllers::{self, welcome_message, GENERIC_FAILURE};
use bank_shared::{Account, RegisterForm as RegisterFields};
use yew::prelude::*;

use super::{form_error, input_value};
use crate::hooks::use_submission::use_submission;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
    pub api_client: ApiClient,
    pub on_registered: Callback<Account>,
}

#[function_component(RegisterForm)]
pub fn register_form(props: &RegisterFormProps) -> Html {
    let fields = use_state(RegisterFields::default);
    let submission = use_submission();

    let on_field = |apply: fn(&mut RegisterFields, String)| {
        let fields = fields.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*fields).clone();
            apply(&mut next, input_value(&e));
            fields.set(next);
        })
    };

    let on_submit = {
        let fields = fields.clone();
        let api_client = props.api_client.clone();
        let on_registered = props.on_registered.clone();
        let actions = submission.actions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api_client = api_client.clone();
            let form = (*fields).clone();
            let fields = fields.clone();
            let on_registered = on_registered.clone();
            actions.run(
                async move { controllers::register(&api_client, &form).await },
                move |account: Account| {
                    gloo::dialogs::alert(&welcome_message(&account));
                    fields.set(RegisterFields::default());
                    on_registered.emit(account);
                },
                GENERIC_FAILURE,
            );
        })
    };

    let pending = submission.state.pending;

    html! {
        <section class="register-section">
            <h2>{"Register"}</h2>
            <form id="registerForm" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="user">{"Username (required)"}</label>
                    <input id="user" name="user" type="text" maxlength="20" required=true
                        value={fields.user.clone()}
                        oninput={on_field(|f, v| f.user = v)}
                        disabled={pending} />
                </div>
                <div class="form-group">
                    <label for="currency">{"Currency (required)"}</label>
                    <input id="currency" name="currency" type="text" maxlength="5" required=true
                        value={fields.currency.clone()}
                        oninput={on_field(|f, v| f.currency = v)}
                        disabled={pending} />
                </div>
                <div class="form-group">
                    <label for="register-description">{"Description"}</label>
                    <input id="register-description" name="description" type="text" maxlength="100"
                        value={fields.description.clone()}
                        oninput={on_field(|f, v| f.description = v)}
                        disabled={pending} />
                </div>
                <div class="form-group">
                    <label for="balance">{"Current balance"}</label>
                    <input id="balance" name="balance" type="number" step="0.01" placeholder="0"
                        value={fields.balance.clone()}
                        oninput={on_field(|f, v| f.balance = v)}
                        disabled={pending} />
                </div>
                {form_error(&submission.state.error, "registerError")}
                <button type="submit" class="btn btn-primary" disabled={pending}>
                    {if pending { "Creating Account..." } else { "Create Account" }}
                </button>
            </form>
        </section>
    }
}
