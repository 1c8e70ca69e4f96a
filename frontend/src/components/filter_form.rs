use bank_shared::FilterForm as FilterFields;
use yew::prelude::*;

use super::forms::input_value;

#[derive(Properties, PartialEq)]
pub struct FilterFormProps {
    pub filters: FilterFields,
    /// Fired on every keystroke with the whole form
    pub on_change: Callback<FilterFields>,
    pub on_clear: Callback<()>,
}

#[function_component(FilterForm)]
pub fn filter_form(props: &FilterFormProps) -> Html {
    let on_field = |apply: fn(&mut FilterFields, String)| {
        let filters = props.filters.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = filters.clone();
            apply(&mut next, input_value(&e));
            on_change.emit(next);
        })
    };

    let on_submit = {
        let on_change = props.on_change.clone();
        let filters = props.filters.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_change.emit(filters.clone());
        })
    };

    let on_clear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    let filters = &props.filters;

    html! {
        <form id="search-form" class="search-form" onsubmit={on_submit}>
            <div class="form-group">
                <label for="date-from">{"From"}</label>
                <input id="date-from" type="date" value={filters.date_from.clone()}
                    oninput={on_field(|f, v| f.date_from = v)} />
            </div>
            <div class="form-group">
                <label for="date-to">{"To"}</label>
                <input id="date-to" type="date" value={filters.date_to.clone()}
                    oninput={on_field(|f, v| f.date_to = v)} />
            </div>
            <div class="form-group">
                <label for="amount-min">{"Min amount"}</label>
                <input id="amount-min" type="number" step="0.01" value={filters.amount_min.clone()}
                    oninput={on_field(|f, v| f.amount_min = v)} />
            </div>
            <div class="form-group">
                <label for="amount-max">{"Max amount"}</label>
                <input id="amount-max" type="number" step="0.01" value={filters.amount_max.clone()}
                    oninput={on_field(|f, v| f.amount_max = v)} />
            </div>
            <div class="form-group">
                <label for="search-description">{"Description"}</label>
                <input id="search-description" type="search" placeholder="rent groceries..."
                    value={filters.description.clone()}
                    oninput={on_field(|f, v| f.description = v)} />
            </div>
            <button type="button" id="clear-filters" class="btn" onclick={on_clear}>{"Clear"}</button>
        </form>
    }
}
