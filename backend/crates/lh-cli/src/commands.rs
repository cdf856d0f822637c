use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account and log into it
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Repeat of the password (defaults to --password)
        #[arg(long)]
        confirm_password: Option<String>,
    },

    /// Log into an existing account
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// End the current session
    Logout,

    /// Show the current session
    Whoami,

    /// Ask the route guard whether a path may be entered
    Visit {
        /// Path such as "/", "/library" or "/video/3"
        path: String,
    },

    /// List registered accounts (passwords are never shown)
    Users,
}
