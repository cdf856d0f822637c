mod app_route;
mod credential_record;
