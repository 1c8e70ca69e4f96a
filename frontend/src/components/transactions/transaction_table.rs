use bank_shared::TransactionRow;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionTableProps {
    pub rows: Vec<TransactionRow>,
    /// Records hidden because they could not be compared with the filters
    #[prop_or_default]
    pub skipped: usize,
}

#[function_component(TransactionTable)]
pub fn transaction_table(props: &TransactionTableProps) -> Html {
    html! {
        <section class="transactions-section">
            <h2>{"Transactions"}</h2>
            <div class="table-container">
                <table class="transactions-table">
                    <thead>
                        <tr>
                            <th>{"Date"}</th>
                            <th>{"Object"}</th>
                            <th>{"Amount"}</th>
                        </tr>
                    </thead>
                    <tbody id="transactions">
                        {for props.rows.iter().map(|row| {
                            let amount_class = match row.positive {
                                Some(true) => "amount positive",
                                Some(false) => "amount negative",
                                None => "amount invalid",
                            };

                            html! {
                                <tr>
                                    <td class="date">{&row.date}</td>
                                    <td class="object">{&row.object}</td>
                                    <td class={amount_class}>{&row.amount}</td>
                                </tr>
                            }
                        })}
                    </tbody>
                </table>
            </div>
            {if props.rows.is_empty() {
                html! { <div class="empty">{"No transactions match."}</div> }
            } else { html! {} }}
            {if props.skipped > 0 {
                html! {
                    <div class="form-message info">
                        {format!("{} malformed transaction(s) hidden by the current filters", props.skipped)}
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}
