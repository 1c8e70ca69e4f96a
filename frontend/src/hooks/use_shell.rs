use std::cell::RefCell;
use std::rc::Rc;

use bank_shared::{Account, AppState, ClientConfig, DashboardModel, FilterForm, Page, Shell, StorageError};
use gloo::events::EventListener;
use gloo::utils::window;
use log::error;
use yew::prelude::*;

use crate::services::history::BrowserHistory;
use crate::services::storage::BrowserStorage;

pub type AppShell = Shell<BrowserStorage, BrowserHistory>;

#[derive(Clone)]
pub struct ShellState {
    pub app: Rc<AppState>,
    pub page: Option<Page>,
    pub dashboard: Option<DashboardModel>,
}

pub struct UseShellResult {
    pub state: ShellState,
    pub actions: UseShellActions,
}

#[derive(Clone, PartialEq)]
pub struct UseShellActions {
    pub navigate: Callback<String>,
    pub login: Callback<Account>,
    pub logout: Callback<()>,
    pub refresh_account: Callback<Account>,
    pub set_filters: Callback<FilterForm>,
    pub clear_filters: Callback<()>,
}

/// Apply `op` to the shell, then re-render from the new snapshot
fn apply(
    shell: &Rc<RefCell<AppShell>>,
    update: &UseForceUpdateHandle,
    op: impl FnOnce(&mut AppShell) -> Result<(), StorageError>,
) {
    let result = op(&mut shell.borrow_mut());
    if let Err(e) = result {
        error!("Failed to save application state: {}", e);
    }
    update.force_update();
}

#[hook]
pub fn use_shell(config: &ClientConfig) -> UseShellResult {
    let shell = {
        let config = config.clone();
        use_mut_ref(move || {
            let mut shell = Shell::new(&config, BrowserStorage, BrowserHistory);
            if let Err(e) = shell.resolve_route() {
                error!("Failed to resolve initial route: {}", e);
            }
            shell
        })
    };
    let update = use_force_update();

    // Back/forward re-resolves without pushing history
    {
        let shell = shell.clone();
        let update = update.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "popstate", move |_| {
                apply(&shell, &update, |shell| shell.resolve_route());
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let shell = shell.clone();
        let update = update.clone();
        use_callback((), move |path: String, _| {
            apply(&shell, &update, |shell| shell.navigate(&path));
        })
    };

    let login = {
        let shell = shell.clone();
        let update = update.clone();
        use_callback((), move |account: Account, _| {
            apply(&shell, &update, |shell| shell.login(account));
        })
    };

    let logout = {
        let shell = shell.clone();
        let update = update.clone();
        use_callback((), move |_, _| {
            apply(&shell, &update, |shell| shell.logout());
        })
    };

    let refresh_account = {
        let shell = shell.clone();
        let update = update.clone();
        use_callback((), move |account: Account, _| {
            apply(&shell, &update, |shell| shell.refresh_account(account));
        })
    };

    let set_filters = {
        let shell = shell.clone();
        let update = update.clone();
        use_callback((), move |filters: FilterForm, _| {
            apply(&shell, &update, |shell| shell.set_filters(filters));
        })
    };

    let clear_filters = {
        let shell = shell.clone();
        let update = update.clone();
        use_callback((), move |_, _| {
            apply(&shell, &update, |shell| shell.clear_filters());
        })
    };

    let state = {
        let shell = shell.borrow();
        ShellState {
            app: shell.state(),
            page: shell.page().cloned(),
            dashboard: shell.dashboard(),
        }
    };

    UseShellResult {
        state,
        actions: UseShellActions {
            navigate,
            login,
            logout,
            refresh_account,
            set_filters,
            clear_filters,
        },
    }
}
