use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Log in and persist the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Extend the session from 24 hours to 30 days
        #[arg(long)]
        remember_me: bool,
    },

    /// Invalidate the session server-side and purge local credentials
    Logout,

    /// Restore the session and print the current user
    Whoami,

    /// Print the session state without forcing a network call
    Status,
}
