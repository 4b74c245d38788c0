pub mod alert_reducer;
pub mod app_reducer;
pub mod auth_reducer;
pub mod contact_reducer;
