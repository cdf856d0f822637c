mod forms;
mod models;
