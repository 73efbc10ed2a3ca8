use clap::Subcommand;

#[derive(Subcommand)]
pub enum TicketCommands {
    /// List tickets
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by service zone ID
        #[arg(long)]
        zone_id: Option<i64>,
    },

    /// Get a ticket by ID
    Get {
        /// Ticket ID
        id: i64,
    },

    /// Create a new ticket
    Create {
        /// Ticket title
        #[arg(long)]
        title: String,

        /// Ticket description
        #[arg(long)]
        description: Option<String>,

        /// Customer ID
        #[arg(long)]
        customer_id: i64,

        /// Service zone ID
        #[arg(long)]
        zone_id: i64,
    },

    /// Update a ticket
    Update {
        /// Ticket ID
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New status
        #[arg(long)]
        status: Option<String>,

        /// Assignee user ID
        #[arg(long)]
        assignee_id: Option<i64>,
    },

    /// Delete a ticket
    Delete {
        /// Ticket ID
        id: i64,
    },
}
