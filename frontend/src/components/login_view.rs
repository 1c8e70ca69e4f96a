use bank_shared::Account;
use yew::prelude::*;

use super::forms::{LoginForm, RegisterForm};
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    pub api_client: ApiClient,
    /// Fired with the account after a login or a registration
    pub on_login: Callback<Account>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    html! {
        <main class="login-page">
            <LoginForm api_client={props.api_client.clone()} on_login={props.on_login.clone()} />
            <p class="login-separator">{"OR"}</p>
            <RegisterForm api_client={props.api_client.clone()} on_registered={props.on_login.clone()} />
        </main>
    }
}
