use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use crate::action::{validate as validate_action, Action};
use crate::error::StoreError;
use crate::listener::{ListenerRegistry, Subscription};
use crate::reducer::Reducer;

/// Store - holds the current state and runs the dispatch loop
///
/// The store follows the Redux pattern:
/// - One authoritative state value, replaced wholesale on every dispatch
/// - Pure reducers compute the next state from the current state and an action
/// - Listeners are notified synchronously, in subscription order, after each
///   committed dispatch
///
/// The store is single-threaded: it is neither `Send` nor `Sync`, so the
/// owning thread is the only one that can reach it. Dispatch, subscribe and
/// unsubscribe take `&self`, which lets listeners hold a (weak) handle to the
/// store and read the state it just committed.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use reducer_store::{Action, RecordAction, Store};
///
/// fn counter(state: Option<&Arc<i64>>, action: &RecordAction) -> Option<Arc<i64>> {
///     let state = state.cloned().unwrap_or_default();
///     match action.action_type() {
///         Some("INC_COUNTER") => Some(Arc::new(*state + 1)),
///         _ => Some(state),
///     }
/// }
///
/// let store = Store::new(counter)?;
/// store.dispatch(RecordAction::of_type("INC_COUNTER"))?;
/// assert_eq!(*store.state(), 1);
/// # Ok::<(), reducer_store::StoreError>(())
/// ```
pub struct Store<S, A> {
    state: RefCell<Arc<S>>,
    reducer: RefCell<Rc<dyn Reducer<S, A>>>,
    listeners: Rc<RefCell<ListenerRegistry>>,
    dispatching: Cell<bool>,
}

impl<S, A: Action> Store<S, A> {
    /// Create a store whose reducer supplies the initial state
    pub fn new<R>(reducer: R) -> Result<Self, StoreError>
    where
        R: Reducer<S, A> + 'static,
    {
        Self::create(Rc::new(reducer), None)
    }

    /// Create a store starting from `preloaded`
    ///
    /// The initialization pass still runs over the preloaded state, so
    /// reducers can fill in anything it lacks. Reducers that recognize nothing
    /// in the init action keep the preloaded `Arc` as the current state.
    pub fn with_state<R>(reducer: R, preloaded: impl Into<Arc<S>>) -> Result<Self, StoreError>
    where
        R: Reducer<S, A> + 'static,
    {
        Self::create(Rc::new(reducer), Some(preloaded.into()))
    }

    fn create(
        reducer: Rc<dyn Reducer<S, A>>,
        preloaded: Option<Arc<S>>,
    ) -> Result<Self, StoreError> {
        reducer.check()?;

        let state = reducer.reduce(preloaded.as_ref(), &A::init())?;
        log::debug!(
            "Store initialized ({})",
            if preloaded.is_some() {
                "preloaded"
            } else {
                "reducer defaults"
            }
        );

        Ok(Self {
            state: RefCell::new(state),
            reducer: RefCell::new(reducer),
            listeners: Rc::new(RefCell::new(ListenerRegistry::default())),
            dispatching: Cell::new(false),
        })
    }

    /// Get the current state
    ///
    /// Cheap: clones the `Arc`, never the state.
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&self.state.borrow())
    }

    /// Run an action through the reducer, commit the result and notify listeners
    ///
    /// Returns the action on success. On error the current state is left as
    /// it was and no listener runs. A panicking reducer leaves the state
    /// untouched as well; a panicking listener aborts the rest of the
    /// notification pass (the new state stays committed).
    pub fn dispatch(&self, action: A) -> Result<A, StoreError> {
        validate_action(&action)?;

        if self.dispatching.get() {
            return Err(StoreError::ReentrantDispatch);
        }

        // Snapshot up front so (un)subscribing while reducing or notifying
        // only affects later passes
        let listeners = self.listeners.borrow().snapshot();

        let next = {
            let _guard = DispatchGuard::enter(&self.dispatching);
            let reducer = Rc::clone(&self.reducer.borrow());
            let current = self.state();
            reducer.reduce(Some(&current), &action)?
        };

        log::trace!(
            "Dispatched {}",
            action.action_type().unwrap_or_default()
        );
        *self.state.borrow_mut() = next;

        for listener in listeners {
            listener();
        }

        Ok(action)
    }

    /// Register a listener called after every dispatch
    ///
    /// Registering the same closure twice yields two independent
    /// registrations, each called once per dispatch.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.listeners.borrow_mut().add(Rc::new(listener));
        log::trace!("Listener {:?} subscribed", id);
        Subscription::new(id, &self.listeners)
    }

    /// Swap the active reducer
    ///
    /// Runs an initialization pass with the new reducer over the current
    /// state and notifies listeners, like a dispatch.
    pub fn replace_reducer<R>(&self, reducer: R) -> Result<(), StoreError>
    where
        R: Reducer<S, A> + 'static,
    {
        if self.dispatching.get() {
            return Err(StoreError::ReentrantDispatch);
        }

        let reducer: Rc<dyn Reducer<S, A>> = Rc::new(reducer);
        reducer.check()?;

        let listeners = self.listeners.borrow().snapshot();
        let next = {
            let _guard = DispatchGuard::enter(&self.dispatching);
            let current = self.state();
            reducer.reduce(Some(&current), &A::init())?
        };

        *self.reducer.borrow_mut() = reducer;
        *self.state.borrow_mut() = next;
        log::debug!("Reducer replaced");

        for listener in listeners {
            listener();
        }
        Ok(())
    }

    /// Number of active registrations
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

/// Marks the store as running a reducer until dropped, even on unwind
struct DispatchGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> DispatchGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
