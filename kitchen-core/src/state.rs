//! Client state and its update rules.
//!
//! [`KitchenState`] owns the search view, the favorites and the shopping
//! list. Every change goes through [`KitchenState::apply`], which touches
//! nothing outside the state and reports what changed in a [`Transition`].
//! Writing the persisted collections is left to [`crate::Session`].

use crate::models::{FavoriteSet, ItemRef, Recipe, RecipeId, ShoppingError, ShoppingItem, ShoppingList};
use crate::search::{SearchOutcome, SearchTicket};

/// Cards visible after a search.
pub const INITIAL_VISIBLE: usize = 9;
/// Cards revealed by each "show more".
pub const VISIBLE_STEP: usize = 6;

/// Where the search view stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Ready,
    /// Nothing to show. Covers empty results and failures alike.
    NoResults,
}

/// The current search and its results.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    query: Option<String>,
    results: Vec<Recipe>,
    status: SearchStatus,
    visible: usize,
    initial_visible: usize,
    step: usize,
}

impl Default for SearchView {
    fn default() -> Self {
        Self::with_paging(INITIAL_VISIBLE, VISIBLE_STEP)
    }
}

impl SearchView {
    /// An idle view revealing `initial` cards first and `step` more at a time.
    ///
    /// Both are at least one, so "show more" always makes progress.
    pub fn with_paging(initial: usize, step: usize) -> Self {
        let (initial, step) = (initial.max(1), step.max(1));
        Self {
            query: None,
            results: Vec::new(),
            status: SearchStatus::Idle,
            visible: initial,
            initial_visible: initial,
            step,
        }
    }

    /// Rebuilds a finished view, e.g. from a cached previous search.
    pub fn restored(mut self, query: impl Into<String>, results: Vec<Recipe>, visible: usize) -> Self {
        self.query = Some(query.into());
        self.status = if results.is_empty() {
            SearchStatus::NoResults
        } else {
            SearchStatus::Ready
        };
        self.visible = visible.max(self.initial_visible);
        self.results = results;
        self
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn status(&self) -> &SearchStatus {
        &self.status
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// Number of cards the user has asked to see (may exceed the result count).
    pub fn visible_count(&self) -> usize {
        self.visible
    }

    /// The results currently revealed.
    pub fn visible(&self) -> &[Recipe] {
        &self.results[..self.visible.min(self.results.len())]
    }

    pub fn has_more(&self) -> bool {
        self.visible < self.results.len()
    }

    /// Finds a result by identifier.
    pub fn get(&self, id: &RecipeId) -> Option<&Recipe> {
        self.results.iter().find(|r| &r.id == id)
    }
}

/// A user or network event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A search was issued; see [`KitchenState::next_ticket`].
    SearchStarted(SearchTicket),
    SearchFinished {
        ticket: SearchTicket,
        outcome: SearchOutcome,
    },
    ShowMore,
    ToggleFavorite(Recipe),
    AddToShopping(Vec<ShoppingItem>),
    SetQuantity { item: ItemRef, quantity: String },
    RemoveItem(ItemRef),
    ClearShopping,
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    SearchStarted { generation: u64 },
    SearchApplied { results: usize },
    /// A newer search was issued before this one finished.
    SearchDiscarded { generation: u64 },
    Revealed { visible: usize },
    FavoriteAdded(RecipeId),
    FavoriteRemoved(RecipeId),
    ItemsAdded(usize),
    QuantitySet { name: String },
    ItemRemoved(ShoppingItem),
    ShoppingCleared { removed: usize },
}

/// Result of a confirmed state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub change: Change,
}

impl Transition {
    fn new(change: Change) -> Self {
        Self { change }
    }

    /// True when the favorites collection must be persisted.
    pub fn favorites_changed(&self) -> bool {
        matches!(
            self.change,
            Change::FavoriteAdded(_) | Change::FavoriteRemoved(_)
        )
    }

    /// True when the shopping list must be persisted.
    pub fn shopping_changed(&self) -> bool {
        match &self.change {
            Change::ItemsAdded(n) => *n > 0,
            Change::ShoppingCleared { removed } => *removed > 0,
            Change::QuantitySet { .. } | Change::ItemRemoved(_) => true,
            _ => false,
        }
    }
}

/// All client-side state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KitchenState {
    search: SearchView,
    favorites: FavoriteSet,
    shopping: ShoppingList,
    generation: u64,
}

impl KitchenState {
    pub fn new(favorites: FavoriteSet, shopping: ShoppingList) -> Self {
        Self {
            favorites,
            shopping,
            ..Self::default()
        }
    }

    pub fn with_search_view(mut self, search: SearchView) -> Self {
        self.search = search;
        self
    }

    pub fn search(&self) -> &SearchView {
        &self.search
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn shopping(&self) -> &ShoppingList {
        &self.shopping
    }

    pub fn is_favorite(&self, id: &RecipeId) -> bool {
        self.favorites.contains(id)
    }

    /// The ticket for a new search. Nothing changes until it is applied
    /// as [`Action::SearchStarted`], after which every earlier ticket is stale.
    pub fn next_ticket(&self, query: impl Into<String>) -> SearchTicket {
        SearchTicket {
            generation: self.generation + 1,
            query: query.into(),
        }
    }

    /// Applies one action. On error the state is unchanged.
    pub fn apply(&mut self, action: Action) -> Result<Transition, ShoppingError> {
        let change = match action {
            Action::SearchStarted(ticket) => self.start_search(ticket),
            Action::SearchFinished { ticket, outcome } => self.finish_search(ticket, outcome),
            Action::ShowMore => {
                if self.search.has_more() {
                    self.search.visible += self.search.step;
                }
                Change::Revealed {
                    visible: self.search.visible().len(),
                }
            }
            Action::ToggleFavorite(recipe) => {
                if self.favorites.toggle(&recipe) {
                    Change::FavoriteAdded(recipe.id)
                } else {
                    Change::FavoriteRemoved(recipe.id)
                }
            }
            Action::AddToShopping(items) => Change::ItemsAdded(self.shopping.ingest(items)),
            Action::SetQuantity { item, quantity } => {
                let position = self.shopping.position(&item)?;
                self.shopping
                    .set_quantity(&ItemRef::Position(position), quantity)?;
                Change::QuantitySet {
                    name: self.shopping.items()[position].name.clone(),
                }
            }
            Action::RemoveItem(item) => Change::ItemRemoved(self.shopping.remove(&item)?),
            Action::ClearShopping => {
                let removed = self.shopping.len();
                self.shopping.clear();
                Change::ShoppingCleared { removed }
            }
        };
        Ok(Transition::new(change))
    }

    fn start_search(&mut self, ticket: SearchTicket) -> Change {
        if ticket.generation <= self.generation {
            return Change::SearchDiscarded {
                generation: ticket.generation,
            };
        }

        self.generation = ticket.generation;
        self.search.query = Some(ticket.query);
        self.search.results.clear();
        self.search.status = SearchStatus::Loading;
        self.search.visible = self.search.initial_visible;
        Change::SearchStarted {
            generation: self.generation,
        }
    }

    fn finish_search(&mut self, ticket: SearchTicket, outcome: SearchOutcome) -> Change {
        if ticket.generation != self.generation {
            tracing::debug!(
                "discarding results for '{}' (generation {}, latest {})",
                ticket.query,
                ticket.generation,
                self.generation
            );
            return Change::SearchDiscarded {
                generation: ticket.generation,
            };
        }

        let results = match outcome {
            SearchOutcome::Found(recipes) => recipes,
            SearchOutcome::NoResults | SearchOutcome::Failed(_) => Vec::new(),
        };
        self.search.status = if results.is_empty() {
            SearchStatus::NoResults
        } else {
            SearchStatus::Ready
        };
        self.search.results = results;
        Change::SearchApplied {
            results: self.search.results.len(),
        }
    }
}
