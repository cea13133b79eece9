use contracts::domain::a001_category::Category;
use contracts::domain::a002_order::{total_pages, FilterField, Order, OrderFilters};
use contracts::domain::common::ListOutcome;
use leptos::prelude::*;

/// Hands out monotonic tickets; only the latest one may apply its response
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

/// What happened to a list response
#[derive(Clone, Debug, PartialEq)]
pub enum Applied {
    Rendered,
    /// A newer request was issued meanwhile; the response was dropped
    Stale,
    /// The previous rows stay on screen
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct OrdersListState {
    pub filters: OrderFilters,
    pub orders: Vec<Order>,
    pub total: usize,
    /// `None` until the categories request has answered
    pub categories: Option<Vec<Category>>,
    pub orders_arrived: bool,
    pub is_loading: bool,
    /// Bumped to refetch with unchanged filters (after a delete)
    pub revision: u64,
    pub sequencer: RequestSequencer,
}

impl OrdersListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filters: OrderFilters::new(page_size),
            orders: Vec::new(),
            total: 0,
            categories: None,
            orders_arrived: false,
            is_loading: false,
            revision: 0,
            sequencer: RequestSequencer::default(),
        }
    }

    pub fn set_filter(&mut self, field: FilterField, value: impl Into<String>) {
        self.filters = self.filters.with_field(field, value);
    }

    pub fn set_page(&mut self, page: usize) {
        self.filters = self.filters.with_page(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.filters = self.filters.with_page_size(page_size);
    }

    pub fn refresh(&mut self) {
        self.revision += 1;
    }

    /// Start a retrieval for the current filters
    pub fn begin_fetch(&mut self) -> (u64, OrderFilters) {
        self.is_loading = true;
        (self.sequencer.issue(), self.filters.clone())
    }

    pub fn apply_outcome(&mut self, ticket: u64, outcome: ListOutcome<Order>) -> Applied {
        if !self.sequencer.is_current(ticket) {
            return Applied::Stale;
        }
        self.is_loading = false;
        self.orders_arrived = true;
        match outcome {
            ListOutcome::Loaded { records, total } => {
                self.orders = records;
                self.total = total;
                Applied::Rendered
            }
            ListOutcome::Failed { reason } => Applied::Failed(reason),
        }
    }

    /// A failed category request still releases the table, with no names
    pub fn apply_categories(&mut self, result: Result<Vec<Category>, String>) {
        self.categories = Some(result.unwrap_or_default());
    }

    /// Both the first orders response and the categories have arrived
    pub fn is_ready(&self) -> bool {
        self.orders_arrived && self.categories.is_some()
    }

    pub fn page(&self) -> usize {
        self.filters.page
    }

    pub fn page_size(&self) -> usize {
        self.filters.effective_page_size()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total, self.page_size())
    }

    pub fn category_name(&self, order: &Order) -> String {
        order.category_name(self.categories.as_deref())
    }
}

/// Toast text for a failed request, `None` once the session has ended:
/// the expiry notice already tells the user what happened
pub fn failure_notice(action: &str, reason: &str, session_active: bool) -> Option<String> {
    session_active.then(|| format!("{}: {}", action, reason))
}

/// Create state signal
pub fn create_state(page_size: usize) -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::new(page_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: &str) -> Order {
        serde_json::from_value(serde_json::json!({"_id": id, "category": "c1"})).unwrap()
    }

    fn loaded(ids: &[&str], total: usize) -> ListOutcome<Order> {
        ListOutcome::Loaded {
            records: ids.iter().map(|id| order(id)).collect(),
            total,
        }
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = OrdersListState::new(10);
        state.set_page(3);
        assert_eq!(state.page(), 3);
        state.set_filter(FilterField::Search, "bob");
        assert_eq!(state.page(), 1);
        state.set_page(2);
        state.set_page_size(25);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 25);
    }

    #[test]
    fn test_stale_response_discarded() {
        let mut state = OrdersListState::new(10);
        let (first, _) = state.begin_fetch();
        state.set_filter(FilterField::Search, "x");
        let (second, filters) = state.begin_fetch();
        assert_eq!(filters.search, "x");

        assert_eq!(state.apply_outcome(second, loaded(&["new"], 1)), Applied::Rendered);
        assert_eq!(state.apply_outcome(first, loaded(&["old"], 9)), Applied::Stale);
        assert_eq!(state.orders[0].id, "new");
        assert_eq!(state.total, 1);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut state = OrdersListState::new(10);
        let (t1, _) = state.begin_fetch();
        state.apply_outcome(t1, loaded(&["a", "b"], 12));

        state.set_page(2);
        let (t2, _) = state.begin_fetch();
        let applied = state.apply_outcome(t2, ListOutcome::failed("Failed to send request"));
        assert_eq!(applied, Applied::Failed("Failed to send request".into()));
        assert_eq!(state.orders.len(), 2);
        assert_eq!(state.total, 12);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_first_load_failure_is_empty() {
        let mut state = OrdersListState::new(10);
        let (t, _) = state.begin_fetch();
        state.apply_outcome(t, ListOutcome::failed("boom"));
        assert!(state.orders.is_empty());
        assert_eq!(state.total_pages(), 1);
    }

    #[test]
    fn test_join_barrier() {
        let mut state = OrdersListState::new(10);
        assert!(!state.is_ready());

        let (t, _) = state.begin_fetch();
        state.apply_outcome(t, loaded(&["a"], 1));
        assert!(!state.is_ready());
        assert_eq!(state.category_name(&state.orders[0]), "Unknown Category");

        state.apply_categories(Err("offline".into()));
        assert!(state.is_ready());
        assert_eq!(state.categories.as_deref(), Some(&[][..]));
    }

    #[test]
    fn test_category_resolution_after_join() {
        let mut state = OrdersListState::new(10);
        let tools: Category =
            serde_json::from_value(serde_json::json!({"_id": "c1", "name": "Tools"})).unwrap();
        state.apply_categories(Ok(vec![tools]));
        let (t, _) = state.begin_fetch();
        state.apply_outcome(t, loaded(&["a"], 1));
        assert!(state.is_ready());
        assert_eq!(state.category_name(&state.orders[0]), "Tools");
    }

    #[test]
    fn test_pagination_bounds() {
        let mut state = OrdersListState::new(10);
        let (t, _) = state.begin_fetch();
        state.apply_outcome(t, loaded(&["a"], 25));
        assert_eq!(state.total_pages(), 3);
        assert_eq!(state.page(), 1);

        state.set_page(3);
        assert_eq!(state.page(), state.total_pages());
        assert_eq!(state.total, 25);
    }

    #[test]
    fn test_failure_notice_after_session_end() {
        assert_eq!(
            failure_notice("Failed to fetch orders", "Request failed: 500", true).as_deref(),
            Some("Failed to fetch orders: Request failed: 500")
        );
        assert_eq!(
            failure_notice("Failed to fetch orders", "Session expired, please log in again", false),
            None
        );
    }
}
