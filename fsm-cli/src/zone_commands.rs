use clap::Subcommand;

#[derive(Subcommand)]
pub enum ZoneCommands {
    /// List all service zones
    List,

    /// Get a service zone by ID
    Get {
        /// Zone ID
        id: i64,
    },

    /// Create a new service zone
    Create {
        /// Zone name
        #[arg(long)]
        name: String,

        /// Region label
        #[arg(long)]
        region: Option<String>,
    },

    /// Update a service zone
    Update {
        /// Zone ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New region label
        #[arg(long)]
        region: Option<String>,
    },

    /// Create a zone user assigned to one or more zones
    CreateUser {
        /// Account email
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Zone IDs the user is scoped to
        #[arg(long, required = true, num_args = 1..)]
        zone_ids: Vec<i64>,
    },
}
