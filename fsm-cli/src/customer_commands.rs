use clap::Subcommand;

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// List all customers
    List,

    /// Get a customer by ID
    Get {
        /// Customer ID
        id: i64,
    },

    /// Create a new customer
    Create {
        /// Customer name
        #[arg(long)]
        name: String,

        /// Contact email
        #[arg(long)]
        email: Option<String>,

        /// Service zone ID
        #[arg(long)]
        zone_id: i64,
    },

    /// Update a customer
    Update {
        /// Customer ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New contact email
        #[arg(long)]
        email: Option<String>,

        /// Activate or deactivate the customer
        #[arg(long)]
        is_active: Option<bool>,
    },
}
