//! A running client: state plus the store it persists to.

use crate::models::{RecipeId, ShoppingError};
use crate::search::{RecipeClient, SearchOutcome, SearchTicket};
use crate::state::{Action, KitchenState, SearchView, Transition};
use crate::store::{Store, StoreError};

/// Errors from applying an action in a session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Shopping(#[from] ShoppingError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("recipe {0} is not in the current results or favorites")]
    UnknownRecipe(RecipeId),
}

/// Owns the state and is the only code that writes to the store.
///
/// After every confirmed transition the collections it changed are written
/// as full snapshots; rejected actions write nothing. If a write fails the
/// state is rolled back, so memory never runs ahead of the store.
pub struct Session<S: Store> {
    state: KitchenState,
    store: S,
}

impl<S: Store> Session<S> {
    /// Restores favorites and the shopping list from the store.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let favorites = store.load_favorites()?;
        let shopping = store.load_shopping()?;
        tracing::debug!(
            "restored {} favorite(s), {} shopping item(s)",
            favorites.len(),
            shopping.len()
        );
        Ok(Self {
            state: KitchenState::new(favorites, shopping),
            store,
        })
    }

    pub fn state(&self) -> &KitchenState {
        &self.state
    }

    /// Replaces the search view, e.g. with one restored from a cache.
    pub fn restore_search(&mut self, view: SearchView) {
        self.state = std::mem::take(&mut self.state).with_search_view(view);
    }

    /// Starts a search and returns its ticket. Earlier tickets become stale.
    pub fn begin_search(&mut self, query: &str) -> Result<SearchTicket, SessionError> {
        let ticket = self.state.next_ticket(query);
        self.dispatch(Action::SearchStarted(ticket.clone()))?;
        Ok(ticket)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Applies an action and persists whatever it changed.
    pub fn dispatch(&mut self, action: Action) -> Result<Transition, SessionError> {
        let before = self.state.clone();
        let transition = self.state.apply(action)?;
        if let Err(e) = self.persist(&transition) {
            self.state = before;
            return Err(e.into());
        }
        Ok(transition)
    }

    fn persist(&self, transition: &Transition) -> Result<(), StoreError> {
        if transition.favorites_changed() {
            self.store.save_favorites(self.state.favorites())?;
        }
        if transition.shopping_changed() {
            self.store.save_shopping(self.state.shopping())?;
        }
        Ok(())
    }

    /// Runs a search to completion and applies its outcome.
    ///
    /// Failures are folded into the outcome; they never abort the session.
    pub async fn search(&mut self, client: &RecipeClient, query: &str) -> Result<Transition, SessionError> {
        let ticket = self.begin_search(query)?;
        let outcome = SearchOutcome::from(client.search(&ticket.query).await);
        self.dispatch(Action::SearchFinished { ticket, outcome })
    }

    /// Toggles a recipe found in the current results or the favorites.
    pub fn toggle_favorite(&mut self, id: &RecipeId) -> Result<Transition, SessionError> {
        let recipe = self
            .state
            .search()
            .get(id)
            .or_else(|| self.state.favorites().get(id))
            .cloned()
            .ok_or_else(|| SessionError::UnknownRecipe(id.clone()))?;
        self.dispatch(Action::ToggleFavorite(recipe))
    }
}
