use crate::data::{LoadError, LOAD_ERROR_MESSAGE};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub url: String,
    pub name: String,
    pub index: usize,
    pub rejected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EliminationState {
    pub items: Vec<Item>,
    pub winner: Option<Item>,
    pub error: Option<String>,
    pub comparison_pair: Vec<Item>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetItems(Vec<Item>),
    SetWinner(Item),
    SetError(String),
    SetComparison(Vec<Item>),
    RejectItem { index: usize },
}

/// What the view should show for a given state. Errors win over a winner,
/// a winner wins over the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen<'a> {
    Failed(&'a str),
    Winner(&'a Item),
    Loading,
    Comparing(&'a [Item]),
    Exhausted,
}

/// Outcome of rejecting one face: the actions to dispatch, in order, and the
/// item as it looked before it was flagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub actions: Vec<Action>,
    pub rejected: Item,
}

impl EliminationState {
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::SetItems(items) => Self {
                items,
                ..self.clone()
            },
            // The winner is terminal, so no pair stays on screen next to it.
            Action::SetWinner(item) => Self {
                winner: Some(item),
                comparison_pair: Vec::new(),
                ..self.clone()
            },
            Action::SetError(message) => Self {
                error: Some(message),
                ..self.clone()
            },
            Action::SetComparison(pair) => Self {
                comparison_pair: pair,
                ..self.clone()
            },
            Action::RejectItem { index } => {
                let items = self
                    .items
                    .iter()
                    .map(|item| {
                        if item.index == index {
                            Item {
                                rejected: true,
                                ..item.clone()
                            }
                        } else {
                            item.clone()
                        }
                    })
                    .collect();
                Self {
                    items,
                    ..self.clone()
                }
            }
        }
    }

    pub fn apply_all(&self, actions: impl IntoIterator<Item = Action>) -> Self {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.apply(action))
    }

    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.rejected).count()
    }

    pub fn screen(&self) -> Screen<'_> {
        if let Some(message) = &self.error {
            return Screen::Failed(message);
        }
        if let Some(winner) = &self.winner {
            return Screen::Winner(winner);
        }
        if self.items.is_empty() {
            return Screen::Loading;
        }
        if self.comparison_pair.is_empty() {
            Screen::Exhausted
        } else {
            Screen::Comparing(&self.comparison_pair)
        }
    }
}

impl Reducible for EliminationState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

/// First two non-rejected items, strictly by position.
pub fn comparison_pair(items: &[Item]) -> Vec<Item> {
    items
        .iter()
        .filter(|item| !item.rejected)
        .take(2)
        .cloned()
        .collect()
}

/// Actions that seed the store from a freshly loaded batch.
pub fn load_actions(items: Vec<Item>) -> Vec<Action> {
    let pair = items.iter().take(2).cloned().collect();
    vec![Action::SetItems(items), Action::SetComparison(pair)]
}

/// Actions for the result of the one-time load. Any failure collapses into
/// the fixed user-facing message.
pub fn load_outcome(result: Result<Vec<Item>, LoadError>) -> Vec<Action> {
    match result {
        Ok(items) => load_actions(items),
        Err(_) => vec![Action::SetError(LOAD_ERROR_MESSAGE.to_string())],
    }
}

/// Plans the rejection of `index`. The next pair (or the winner) is computed
/// from the items with this rejection already applied.
///
/// Returns `None` once the session is over (winner or error set), or when
/// `index` is not part of the pair currently on screen. Nothing is dispatched
/// or logged in that case.
pub fn plan_rejection(state: &EliminationState, index: usize) -> Option<Rejection> {
    if state.error.is_some() || state.winner.is_some() {
        return None;
    }
    if !state.comparison_pair.iter().any(|item| item.index == index) {
        return None;
    }

    let rejected = state
        .items
        .iter()
        .find(|item| item.index == index && !item.rejected)?
        .clone();

    let reject = Action::RejectItem { index };
    let after = state.apply(reject.clone());
    let next_pair = comparison_pair(&after.items);

    let mut actions = vec![reject];
    match next_pair.as_slice() {
        [only] => actions.push(Action::SetWinner(only.clone())),
        _ => actions.push(Action::SetComparison(next_pair)),
    }

    Some(Rejection { actions, rejected })
}
