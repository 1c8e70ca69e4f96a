use web_sys::HtmlInputElement;
use yew::prelude::*;

pub mod login_form;
pub mod register_form;
pub mod transaction_form;

pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use transaction_form::TransactionForm;

/// Current value of the input that fired `e`
pub fn input_value(e: &InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

/// Inline error line shown under a form
pub fn form_error(error: &Option<String>, id: &'static str) -> Html {
    match error {
        Some(message) => html! { <div id={id} class="form-message error" role="alert">{message}</div> },
        None => html! { <div id={id} class="form-message error" role="alert"></div> },
    }
}
