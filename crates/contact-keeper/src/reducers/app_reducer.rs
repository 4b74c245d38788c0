use crate::actions::Action;
use crate::reducers::{alert_reducer, auth_reducer, contact_reducer};
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
///
/// Root reducer: routes each action to the slice it is tagged with. A slice
/// never sees another slice's actions.
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Auth(action) => {
            state.auth = auth_reducer::reduce_auth(state.auth, action);
        }
        Action::Contact(action) => {
            state.contacts = contact_reducer::reduce_contacts(state.contacts, action);
        }
        Action::Alert(action) => {
            state.alerts = alert_reducer::reduce_alerts(state.alerts, action);
        }
        Action::None => {}
    }
    state
}
