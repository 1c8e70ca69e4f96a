use bank_shared::controllers::{self, transaction_created_message, REFRESH_FAILURE, TRANSACTION_FAILURE};
use bank_shared::{Account, TransactionForm as TransactionFields};
use yew::prelude::*;

use super::{form_error, input_value};
use crate::hooks::use_submission::use_submission;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub api_client: ApiClient,
    /// Owner of the account the transaction is added to
    pub user: String,
    /// Receives the account as re-fetched after the creation
    pub on_created: Callback<Account>,
    pub on_close: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let fields = use_state(TransactionFields::default);
    let submission = use_submission();

    let on_field = |apply: fn(&mut TransactionFields, String)| {
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
        let user = props.user.clone();
        let on_created = props.on_created.clone();
        let on_close = props.on_close.clone();
        let actions = submission.actions.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let api_client = api_client.clone();
            let user = user.clone();
            let form = (*fields).clone();
            let fields = fields.clone();
            let on_created = on_created.clone();
            let on_close = on_close.clone();
            actions.run(
                async move { controllers::create_transaction(&api_client, &user, &form).await },
                move |created| {
                    gloo::dialogs::alert(&transaction_created_message(&created.transaction));
                    fields.set(TransactionFields::default());
                    match created.account {
                        Some(account) => on_created.emit(account),
                        None => gloo::dialogs::alert(REFRESH_FAILURE),
                    }
                    on_close.emit(());
                },
                TRANSACTION_FAILURE,
            );
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let pending = submission.state.pending;

    html! {
        <section id="createTransactionBloc" class="create-transaction">
            <h2>{"New transaction"}</h2>
            <form id="newTransaction" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="transaction-date">{"Date"}</label>
                    <input id="transaction-date" name="date" type="date" required=true
                        value={fields.date.clone()}
                        oninput={on_field(|f, v| f.date = v)}
                        disabled={pending} />
                </div>
                <div class="form-group">
                    <label for="transaction-object">{"Object"}</label>
                    <input id="transaction-object" name="object" type="text" maxlength="50" required=true
                        value={fields.object.clone()}
                        oninput={on_field(|f, v| f.object = v)}
                        disabled={pending} />
                </div>
                <div class="form-group">
                    <label for="transaction-description">{"Description"}</label>
                    <input id="transaction-description" name="description" type="text" maxlength="100"
                        value={fields.description.clone()}
                        oninput={on_field(|f, v| f.description = v)}
                        disabled={pending} />
                </div>
                <div class="form-group">
                    <label for="transaction-amount">{"Amount"}</label>
                    <input id="transaction-amount" name="amount" type="number" step="0.01" required=true
                        value={fields.amount.clone()}
                        oninput={on_field(|f, v| f.amount = v)}
                        disabled={pending} />
                </div>
                {form_error(&submission.state.error, "transactionError")}
                <div class="form-actions">
                    <button type="button" class="btn" onclick={on_cancel} disabled={pending}>{"Cancel"}</button>
                    <button type="submit" class="btn btn-primary" disabled={pending}>
                        {if pending { "Creating transaction..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
