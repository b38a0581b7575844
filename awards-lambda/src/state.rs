use awards_shared::database::award_store::AwardStore;

/// Built once in `main` and borrowed by every invocation.
pub struct AppState {
    pub table_name: String,
    pub store: Box<dyn AwardStore>,
}

impl AppState {
    pub fn new(table_name: impl Into<String>, store: impl AwardStore + 'static) -> Self {
        Self {
            table_name: table_name.into(),
            store: Box::new(store),
        }
    }
}
