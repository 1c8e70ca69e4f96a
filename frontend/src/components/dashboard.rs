use bank_shared::{Account, DashboardModel, FilterForm as FilterFields};
use yew::prelude::*;

use super::filter_form::FilterForm;
use super::forms::TransactionForm;
use super::transactions::TransactionTable;
use crate::services::api::ApiClient;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub model: DashboardModel,
    pub filters: FilterFields,
    pub api_client: ApiClient,
    pub on_filters_change: Callback<FilterFields>,
    pub on_clear_filters: Callback<()>,
    pub on_account_refresh: Callback<Account>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let show_create = use_state(|| false);

    let on_open = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(true))
    };

    let on_close = {
        let show_create = show_create.clone();
        Callback::from(move |_: ()| show_create.set(false))
    };

    let model = &props.model;

    html! {
        <main id="dashboard" class="dashboard">
            <section class="balance-section">
                <h2 id="description">{&model.description}</h2>
                <div class="balance-display">
                    <span class="balance-label">{"Balance: "}</span>
                    <span id="balance" class="balance-amount">{&model.balance}</span>
                    <span id="currency" class="balance-currency">{&model.currency}</span>
                </div>
                <button class="btn btn-primary" onclick={on_open} disabled={*show_create}>
                    {"Add transaction"}
                </button>
            </section>

            {if *show_create {
                html! {
                    <TransactionForm
                        api_client={props.api_client.clone()}
                        user={model.user.clone()}
                        on_created={props.on_account_refresh.clone()}
                        on_close={on_close}
                    />
                }
            } else { html! {} }}

            <FilterForm
                filters={props.filters.clone()}
                on_change={props.on_filters_change.clone()}
                on_clear={props.on_clear_filters.clone()}
            />

            <TransactionTable rows={model.rows.clone()} skipped={model.skipped} />
        </main>
    }
}
