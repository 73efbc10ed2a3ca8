use clap::Subcommand;

#[derive(Subcommand)]
pub enum BankAccountCommands {
    /// List bank accounts pending approval
    List,

    /// Get a bank account by ID
    Get {
        /// Bank account ID
        id: i64,
    },

    /// Approve a bank account
    Approve {
        /// Bank account ID
        id: i64,
    },

    /// Reject a bank account
    Reject {
        /// Bank account ID
        id: i64,

        /// Reason shown to the submitter
        #[arg(long)]
        reason: String,
    },
}
