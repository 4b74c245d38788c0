//! Alert Reducer

use crate::actions::AlertAction;
use crate::state::AlertsState;

/// Reduce alert actions
pub fn reduce_alerts(mut state: AlertsState, action: &AlertAction) -> AlertsState {
    match action {
        AlertAction::SetAlert(alert) => {
            state.alerts.push(alert.clone());
        }

        AlertAction::RemoveAlert(id) => {
            state.alerts.retain(|alert| alert.id != *id);
        }

        // Consumed by AlertMiddleware
        AlertAction::RaiseAlert { .. } => {}
    }
    state
}
