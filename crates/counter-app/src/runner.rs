//! Replays actions through the application store

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use reducer_store::{StoreError, Subscription};

use crate::actions::AppAction;
use crate::state::AppSnapshot;
use crate::store::AppStore;

/// Dispatch every action in order, stopping at the first failure
///
/// Returns the number of dispatched actions.
pub fn replay<I>(store: &AppStore, actions: I) -> Result<usize, StoreError>
where
    I: IntoIterator<Item = AppAction>,
{
    let mut dispatched = 0;
    for action in actions {
        log::debug!("Action: {:?}", action);
        store.dispatch(action)?;
        dispatched += 1;
    }
    Ok(dispatched)
}

/// Subscribe a listener that logs every committed state and, when `out` is
/// given, writes it as one JSON line
pub fn subscribe_state_echo<W>(store: &Rc<AppStore>, out: Option<Rc<RefCell<W>>>) -> Subscription
where
    W: Write + 'static,
{
    let weak = Rc::downgrade(store);
    store.subscribe(move || {
        let Some(store) = weak.upgrade() else {
            return;
        };
        let snapshot = AppSnapshot::of(&store.state());
        let line = match serde_json::to_string(&snapshot) {
            Ok(line) => line,
            Err(e) => {
                log::error!("Failed to serialize state: {}", e);
                return;
            }
        };

        log::info!("Subscription: {}", line);
        if let Some(out) = &out {
            if let Err(e) = writeln!(out.borrow_mut(), "{}", line) {
                log::error!("Failed to write state: {}", e);
            }
        }
    })
}
