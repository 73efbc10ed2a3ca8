use clap::Subcommand;

#[derive(Subcommand)]
pub enum AttendanceCommands {
    /// List attendance records
    Records {
        /// Limit to a single user ID
        #[arg(long)]
        user_id: Option<i64>,
    },

    /// Check in at the given coordinates
    CheckIn {
        /// Latitude
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,

        /// Longitude
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
    },

    /// Check out
    CheckOut,
}
