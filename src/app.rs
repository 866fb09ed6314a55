use tracing::{debug, error};

use crate::api::{ApiError, Connection, PaymentsApi, Transaction, TransactionPage};

/// Shared state owned by the coordinator.
///
/// Mutated only through the transition functions below, each corresponding
/// to one fetch completion. A failed fetch never reaches a transition, so
/// state stays exactly as it was before the attempt.
#[derive(Default)]
pub struct AppState {
    transactions: Vec<Transaction>,
    page_count: usize,
    current_page: usize,
    connections: Vec<Connection>,
    tx_fetch_seq: u64,
}

impl AppState {
    /// Tag the next transactions fetch. A response is only applied while its
    /// tag is still the latest one issued; anything older is a superseded
    /// in-flight request and gets discarded.
    fn begin_transactions_fetch(&mut self) -> u64 {
        self.tx_fetch_seq += 1;
        self.tx_fetch_seq
    }

    fn is_current(&self, seq: u64) -> bool {
        seq == self.tx_fetch_seq
    }

    /// Full transactions refresh: replace the list and the page count.
    fn apply_transactions(&mut self, seq: u64, page: TransactionPage, page_index: usize) {
        if !self.is_current(seq) {
            debug!("Discarding stale transactions response (seq {})", seq);
            return;
        }
        self.transactions = page.content;
        self.page_count = page.total_pages;
        self.current_page = page_index;
    }

    /// Page change: replace the list only, the page count is not expected to
    /// change between pages.
    fn apply_page_change(&mut self, seq: u64, page: TransactionPage, page_index: usize) {
        if !self.is_current(seq) {
            debug!("Discarding stale page response (seq {})", seq);
            return;
        }
        self.transactions = page.content;
        self.current_page = page_index;
    }

    fn apply_connections(&mut self, connections: Vec<Connection>) {
        self.connections = connections;
    }
}

/// Root coordinator: owns the fetched state and drives the API client.
///
/// The terminal equivalent of the top-level view: it loads transactions and
/// connections on startup, hands them to the child views, and refreshes the
/// transaction list when a payment goes through.
pub struct App<C: PaymentsApi> {
    client: C,
    state: AppState,
}

impl<C: PaymentsApi + Sync> App<C> {
    pub fn new(client: C) -> Self {
        App {
            client,
            state: AppState::default(),
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.state.transactions
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn connections(&self) -> &[Connection] {
        &self.state.connections
    }

    /// Initial load: the transactions and connections fetches are issued
    /// concurrently and applied independently, so a failure in one never
    /// blocks the other. Failures are logged, not surfaced.
    pub async fn load_initial(&mut self) {
        let page_index = self.state.current_page;
        let seq = self.state.begin_transactions_fetch();

        let (transactions, connections) = tokio::join!(
            self.client.my_transactions_page(page_index),
            self.client.my_connections(),
        );

        match transactions {
            Ok(page) => self.state.apply_transactions(seq, page, page_index),
            Err(e) => error!("Failed to fetch transactions: {}", e),
        }

        match connections {
            Ok(list) => self.state.apply_connections(list),
            Err(e) => error!("Failed to fetch connections: {}", e),
        }
    }

    /// Page-change event from the pager: a parameterized refetch that fully
    /// replaces the displayed page.
    pub async fn change_page(&mut self, page_index: usize) {
        let seq = self.state.begin_transactions_fetch();
        match self.client.my_transactions_page(page_index).await {
            Ok(page) => self.state.apply_page_change(seq, page, page_index),
            Err(e) => error!("Failed to fetch page {}: {}", page_index, e),
        }
    }

    /// Success callback wired into the send-money form: refetch the page
    /// that is currently on screen so the new payment shows up. The page
    /// index is preserved rather than reset to zero.
    pub async fn on_payment_succeeded(&mut self) {
        let page_index = self.state.current_page;
        let seq = self.state.begin_transactions_fetch();
        match self.client.my_transactions_page(page_index).await {
            Ok(page) => self.state.apply_transactions(seq, page, page_index),
            Err(e) => error!("Failed to refresh transactions after payment: {}", e),
        }
    }

    /// Un-paginated history, straight pass-through to the client.
    pub async fn fetch_all_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.client.my_transactions().await
    }

    /// Single transaction lookup, pass-through to the client.
    pub async fn fetch_transaction(&self, id: u64) -> Result<Transaction, ApiError> {
        self.client.transaction(id).await
    }

    pub fn client(&self) -> &C {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockPaymentsApi;
    use mockall::predicate::eq;

    fn tx(id: u64, receiver: u64, description: &str) -> Transaction {
        Transaction {
            id,
            sender_id: None,
            receiver_id: receiver,
            description: description.to_string(),
            amount: 10.0,
            currency: "USD".to_string(),
            timestamp: None,
        }
    }

    fn page_of(transactions: Vec<Transaction>, total_pages: usize) -> TransactionPage {
        TransactionPage {
            content: transactions,
            total_pages,
        }
    }

    fn connection(user_id: u64) -> Connection {
        Connection {
            user_id,
            name: None,
            email: None,
        }
    }

    #[tokio::test]
    async fn initial_load_issues_both_fetches_once() {
        let mut client = MockPaymentsApi::new();
        client
            .expect_my_transactions_page()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(page_of(vec![tx(1, 7, "lunch")], 3)));
        client
            .expect_my_connections()
            .times(1)
            .returning(|| Ok(vec![connection(7), connection(9)]));

        let mut app = App::new(client);
        app.load_initial().await;

        assert_eq!(app.transactions().len(), 1);
        assert_eq!(app.page_count(), 3);
        assert_eq!(app.connections().len(), 2);
        assert_eq!(app.current_page(), 0);
    }

    #[tokio::test]
    async fn connections_failure_does_not_block_transactions() {
        let mut client = MockPaymentsApi::new();
        client
            .expect_my_transactions_page()
            .times(1)
            .returning(|_| Ok(page_of(vec![tx(1, 7, "lunch")], 2)));
        client
            .expect_my_connections()
            .times(1)
            .returning(|| Err(ApiError::ServerError(500, "boom".to_string())));

        let mut app = App::new(client);
        app.load_initial().await;

        assert_eq!(app.transactions().len(), 1);
        assert!(app.connections().is_empty());
    }

    #[tokio::test]
    async fn transactions_failure_does_not_block_connections() {
        let mut client = MockPaymentsApi::new();
        client
            .expect_my_transactions_page()
            .times(1)
            .returning(|_| Err(ApiError::Transport("unreachable".to_string())));
        client
            .expect_my_connections()
            .times(1)
            .returning(|| Ok(vec![connection(7)]));

        let mut app = App::new(client);
        app.load_initial().await;

        assert!(app.transactions().is_empty());
        assert_eq!(app.page_count(), 0);
        assert_eq!(app.connections().len(), 1);
    }

    #[tokio::test]
    async fn page_change_replaces_list_but_not_page_count() {
        let mut client = MockPaymentsApi::new();
        client
            .expect_my_transactions_page()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(page_of(vec![tx(1, 7, "lunch")], 5)));
        client
            .expect_my_connections()
            .times(1)
            .returning(|| Ok(vec![]));
        // The backend reports a different totalPages on the page fetch; the
        // page-change transition keeps the configured count.
        client
            .expect_my_transactions_page()
            .with(eq(2))
            .times(1)
            .returning(|_| Ok(page_of(vec![tx(2, 9, "rent")], 7)));

        let mut app = App::new(client);
        app.load_initial().await;
        app.change_page(2).await;

        assert_eq!(app.current_page(), 2);
        assert_eq!(app.page_count(), 5);
        assert_eq!(app.transactions()[0].description, "rent");
    }

    #[tokio::test]
    async fn failed_page_change_leaves_state_untouched() {
        let mut client = MockPaymentsApi::new();
        client
            .expect_my_transactions_page()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(page_of(vec![tx(1, 7, "lunch")], 5)));
        client
            .expect_my_connections()
            .times(1)
            .returning(|| Ok(vec![]));
        client
            .expect_my_transactions_page()
            .with(eq(4))
            .times(1)
            .returning(|_| Err(ApiError::NotFound("no such page".to_string())));

        let mut app = App::new(client);
        app.load_initial().await;
        app.change_page(4).await;

        assert_eq!(app.current_page(), 0);
        assert_eq!(app.transactions()[0].description, "lunch");
    }

    #[tokio::test]
    async fn payment_success_refetches_the_current_page() {
        let mut client = MockPaymentsApi::new();
        client
            .expect_my_transactions_page()
            .with(eq(0))
            .times(1)
            .returning(|_| Ok(page_of(vec![], 4)));
        client
            .expect_my_connections()
            .times(1)
            .returning(|| Ok(vec![]));
        client
            .expect_my_transactions_page()
            .with(eq(2))
            .times(2)
            .returning(|_| Ok(page_of(vec![tx(3, 9, "paid")], 4)));

        let mut app = App::new(client);
        app.load_initial().await;
        app.change_page(2).await;
        // The refetch must target page 2, not reset to page zero.
        app.on_payment_succeeded().await;

        assert_eq!(app.current_page(), 2);
        assert_eq!(app.transactions()[0].description, "paid");
    }

    #[test]
    fn stale_transactions_response_is_discarded() {
        let mut state = AppState::default();
        let stale = state.begin_transactions_fetch();
        let current = state.begin_transactions_fetch();

        state.apply_transactions(stale, page_of(vec![tx(1, 7, "old")], 9), 3);
        assert!(state.transactions.is_empty());
        assert_eq!(state.page_count, 0);

        state.apply_transactions(current, page_of(vec![tx(2, 9, "new")], 2), 1);
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.transactions[0].description, "new");
        assert_eq!(state.page_count, 2);
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn stale_page_change_response_is_discarded() {
        let mut state = AppState::default();
        let current = state.begin_transactions_fetch();
        state.apply_transactions(current, page_of(vec![tx(1, 7, "lunch")], 3), 0);

        let stale = current;
        let newer = state.begin_transactions_fetch();
        state.apply_page_change(stale, page_of(vec![tx(2, 9, "old page")], 3), 2);
        assert_eq!(state.transactions[0].description, "lunch");
        assert_eq!(state.current_page, 0);

        state.apply_page_change(newer, page_of(vec![tx(3, 9, "new page")], 3), 1);
        assert_eq!(state.transactions[0].description, "new page");
        assert_eq!(state.current_page, 1);
    }
}
