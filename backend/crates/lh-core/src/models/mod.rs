pub mod app_route;
pub mod credential_record;
pub mod session_record;
