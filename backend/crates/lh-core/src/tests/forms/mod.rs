mod login_form;
mod signup_form;
