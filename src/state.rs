use crate::store::RemoteStore;
use crate::tracker::Tracker;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RemoteStore>,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(store: Arc<dyn RemoteStore>, tracker: Tracker) -> Self {
        Self {
            store,
            tracker: Arc::new(Mutex::new(tracker)),
        }
    }
}
