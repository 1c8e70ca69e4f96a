//! Application root: owns the state store and the router and keeps the
//! two consistent.

use std::rc::Rc;

use log::info;

use crate::config::ClientConfig;
use crate::dashboard::DashboardModel;
use crate::filter::FilterForm;
use crate::routing::{
    mount, EnterHook, History, Page, RenderInstruction, RouteTable, Router, DASHBOARD_PATH, LOGIN_PATH,
};
use crate::store::{AppState, StateUpdate, StorageBackend, StorageError, Store};
use crate::Account;

pub struct Shell<B: StorageBackend, H: History> {
    store: Store<B>,
    router: Router<H>,
}

impl<B: StorageBackend, H: History> Shell<B, H> {
    /// Hydrate the store. Nothing is rendered until [`Shell::resolve_route`].
    pub fn new(config: &ClientConfig, storage: B, history: H) -> Self {
        Self {
            store: Store::hydrate(storage, config.storage_key.as_str()),
            router: Router::new(RouteTable::standard(), history),
        }
    }

    /// Hydrate the store and resolve the initial route
    pub fn start(config: &ClientConfig, storage: B, history: H) -> Result<Self, StorageError> {
        let mut shell = Self::new(config, storage, history);
        shell.resolve_route()?;
        Ok(shell)
    }

    pub fn state(&self) -> Rc<AppState> {
        self.store.state()
    }

    /// Page currently on screen
    pub fn page(&self) -> Option<&Page> {
        self.router.current_page()
    }

    pub fn router(&self) -> &Router<H> {
        &self.router
    }

    pub fn store(&self) -> &Store<B> {
        &self.store
    }

    /// Push `path` and show it
    pub fn navigate(&mut self, path: &str) -> Result<(), StorageError> {
        self.router.navigate(path);
        self.resolve_route()
    }

    /// Show whatever the history currently points at. Called after
    /// navigation, after back/forward, and once at startup.
    pub fn resolve_route(&mut self) -> Result<(), StorageError> {
        let route = self.router.current_route();
        match mount(&route, &self.store.state()) {
            RenderInstruction::Render { page, on_enter } => {
                self.router.mark_rendered(page);
                if let Some(hook) = on_enter {
                    self.run_enter_hook(hook)?;
                }
                Ok(())
            }
            RenderInstruction::Logout => {
                info!("No account loaded for {}, logging out", route.path);
                self.logout()
            }
        }
    }

    fn run_enter_hook(&mut self, hook: EnterHook) -> Result<(), StorageError> {
        match hook {
            EnterHook::Dashboard => self.store.update(StateUpdate::Filters(FilterForm::default())),
        }
    }

    /// Store `account` and show the dashboard. The view changes even when
    /// the account could not be saved; that error is returned afterwards.
    pub fn login(&mut self, account: Account) -> Result<(), StorageError> {
        info!("Logged in as '{}'", account.user);
        let persisted = self.store.update(StateUpdate::Account(Some(account)));
        self.navigate(DASHBOARD_PATH)?;
        persisted
    }

    /// Forget the account and show the login view
    pub fn logout(&mut self) -> Result<(), StorageError> {
        let persisted = self.store.update(StateUpdate::Account(None));
        self.navigate(LOGIN_PATH)?;
        persisted
    }

    /// Replace the stored account without changing view
    pub fn refresh_account(&mut self, account: Account) -> Result<(), StorageError> {
        self.store.update(StateUpdate::Account(Some(account)))
    }

    pub fn set_filters(&mut self, filters: FilterForm) -> Result<(), StorageError> {
        self.store.update(StateUpdate::Filters(filters))
    }

    pub fn clear_filters(&mut self) -> Result<(), StorageError> {
        self.set_filters(FilterForm::default())
    }

    /// Dashboard contents for the current state, or `None` when logged out
    pub fn dashboard(&self) -> Option<DashboardModel> {
        let state = self.store.state();
        state
            .account
            .as_ref()
            .map(|account| DashboardModel::build(account, &state.filters))
    }

    pub fn history_mut(&mut self) -> &mut H {
        self.router.history_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{MemoryHistory, RouterState, ViewId};
    use crate::store::MemoryStorage;
    use crate::{Amount, Transaction};

    fn account() -> Account {
        Account {
            user: "alice".to_string(),
            description: "Main".to_string(),
            balance: 42.0,
            currency: "EUR".to_string(),
            transactions: vec![
                Transaction {
                    date: "2024-01-01".to_string(),
                    object: "Rent".to_string(),
                    description: Some("Rent payment".to_string()),
                    amount: Amount::Number(-500.0),
                },
                Transaction {
                    date: "2024-01-02".to_string(),
                    object: "Salary".to_string(),
                    description: Some("Monthly salary".to_string()),
                    amount: Amount::Number(542.0),
                },
            ],
        }
    }

    fn saved_storage() -> MemoryStorage {
        let saved = serde_json::to_string(&account()).unwrap();
        MemoryStorage::new().with_entry("savedAccount", &saved)
    }

    fn start(storage: MemoryStorage, path: &str) -> Shell<MemoryStorage, MemoryHistory> {
        Shell::start(&ClientConfig::default(), storage, MemoryHistory::new(path)).unwrap()
    }

    fn current_path(shell: &Shell<MemoryStorage, MemoryHistory>) -> String {
        shell.router().history().current_path()
    }

    #[test]
    fn test_start_logged_out_lands_on_login() {
        let shell = start(MemoryStorage::new(), "/dashboard");
        assert_eq!(current_path(&shell), "/login");
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Login));
    }

    #[test]
    fn test_start_with_saved_account_shows_dashboard() {
        let shell = start(saved_storage(), "/dashboard");
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Dashboard));
        assert_eq!(shell.state().account, Some(account()));
    }

    #[test]
    fn test_unknown_path_resolves_to_dashboard() {
        let shell = start(saved_storage(), "/foo");
        assert_eq!(current_path(&shell), "/dashboard");
        assert_eq!(
            shell.router().state(),
            &RouterState::Rendered(Page {
                path: "/dashboard",
                view: ViewId::Dashboard
            })
        );
    }

    #[test]
    fn test_unknown_path_without_account_ends_on_login() {
        let shell = start(MemoryStorage::new(), "/foo");
        assert_eq!(current_path(&shell), "/login");
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Login));
    }

    #[test]
    fn test_clearing_account_then_resolving_dashboard_logs_out() {
        let mut shell = start(saved_storage(), "/dashboard");

        shell.store.update(StateUpdate::Account(None)).unwrap();
        shell.resolve_route().unwrap();

        assert_eq!(current_path(&shell), "/login");
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Login));
        assert!(shell.dashboard().is_none());
    }

    #[test]
    fn test_login_then_logout() {
        let mut shell = start(MemoryStorage::new(), "/login");

        shell.login(account()).unwrap();
        assert_eq!(current_path(&shell), "/dashboard");
        assert!(shell.store().backend().get("savedAccount").is_some());

        shell.logout().unwrap();
        assert_eq!(current_path(&shell), "/login");
        assert_eq!(shell.state().account, None);
        assert_eq!(shell.store().backend().get("savedAccount"), None);
    }

    #[test]
    fn test_login_shows_dashboard_when_saving_fails() {
        let mut shell = start(MemoryStorage::new().read_only(), "/login");

        let result = shell.login(account());
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert!(shell.state().is_authenticated());
        assert_eq!(current_path(&shell), "/dashboard");
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Dashboard));

        let result = shell.logout();
        assert!(matches!(result, Err(StorageError::Write { .. })));
        assert_eq!(current_path(&shell), "/login");
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Login));
    }

    #[test]
    fn test_back_and_forward_re_resolve_without_pushing() {
        let mut shell = start(saved_storage(), "/login");
        shell.navigate("/dashboard").unwrap();
        let entries = shell.router().history().len();

        assert!(shell.history_mut().back());
        shell.resolve_route().unwrap();
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Login));

        assert!(shell.history_mut().forward());
        shell.resolve_route().unwrap();
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Dashboard));
        assert_eq!(shell.router().history().len(), entries);
    }

    #[test]
    fn test_entering_dashboard_resets_filters() {
        let mut shell = start(saved_storage(), "/dashboard");
        shell
            .set_filters(FilterForm {
                description: "rent".to_string(),
                ..FilterForm::default()
            })
            .unwrap();
        assert_eq!(shell.dashboard().unwrap().rows.len(), 1);

        shell.navigate("/dashboard").unwrap();
        assert_eq!(shell.state().filters, FilterForm::default());
        assert_eq!(shell.dashboard().unwrap().rows.len(), 2);
    }

    #[test]
    fn test_refresh_account_keeps_filters_and_view() {
        let mut shell = start(saved_storage(), "/dashboard");
        let filters = FilterForm {
            amount_min: "0".to_string(),
            ..FilterForm::default()
        };
        shell.set_filters(filters.clone()).unwrap();

        let mut refreshed = account();
        refreshed.balance = 50.0;
        shell.refresh_account(refreshed).unwrap();

        assert_eq!(shell.state().filters, filters);
        assert_eq!(shell.page().map(|p| p.view), Some(ViewId::Dashboard));
        let model = shell.dashboard().unwrap();
        assert_eq!(model.balance, "50.00");
        assert_eq!(model.rows.len(), 1);
    }
}
