use bank_shared::config::DEFAULT_API_BASE_URL;
use bank_shared::{ClientConfig, ViewId};
use log::info;
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::dashboard::Dashboard;
use components::header::Header;
use components::login_view::LoginView;
use hooks::use_shell::use_shell;
use services::api::ApiClient;

/// Service location baked in at build time (`BANK_API_URL`)
fn client_config() -> ClientConfig {
    ClientConfig::new().with_base_url(option_env!("BANK_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| client_config());
    let api_client = use_memo((), {
        let config = config.clone();
        move |_| ApiClient::new((*config).clone())
    });
    let shell = use_shell(&config);

    let actions = &shell.actions;
    let template = shell.state.page.as_ref().map(|page| page.view.template_id()).unwrap_or_default();
    let view = match (shell.state.page.as_ref().map(|page| page.view), &shell.state.dashboard) {
        (Some(ViewId::Login), _) => html! {
            <LoginView api_client={(*api_client).clone()} on_login={actions.login.clone()} />
        },
        (Some(ViewId::Dashboard), Some(model)) => html! {
            <Dashboard
                model={model.clone()}
                filters={shell.state.app.filters.clone()}
                api_client={(*api_client).clone()}
                on_filters_change={actions.set_filters.clone()}
                on_clear_filters={actions.clear_filters.clone()}
                on_account_refresh={actions.refresh_account.clone()}
            />
        },
        // The shell never leaves the dashboard mounted without an account
        (Some(ViewId::Dashboard), None) | (None, _) => html! {},
    };

    html! {
        <>
            <Header
                authenticated={shell.state.app.is_authenticated()}
                on_navigate={actions.navigate.clone()}
                on_logout={actions.logout.clone()}
            />
            <div id="app" class={template}>{view}</div>
        </>
    }
}

fn main() {
    services::logging::init();
    info!("Starting bank client against {}", client_config().api_base_url);
    yew::Renderer::<App>::new().render();
}
