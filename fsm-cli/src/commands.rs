use crate::{
    attendance_commands::AttendanceCommands, auth_commands::AuthCommands,
    bank_account_commands::BankAccountCommands, customer_commands::CustomerCommands,
    ticket_commands::TicketCommands, zone_commands::ZoneCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Login, logout and session inspection
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },

    /// Ticket operations
    Ticket {
        #[command(subcommand)]
        action: TicketCommands,
    },

    /// Customer operations
    Customer {
        #[command(subcommand)]
        action: CustomerCommands,
    },

    /// Service zone operations
    Zone {
        #[command(subcommand)]
        action: ZoneCommands,
    },

    /// Attendance operations
    Attendance {
        #[command(subcommand)]
        action: AttendanceCommands,
    },

    /// Bank account approval operations
    BankAccount {
        #[command(subcommand)]
        action: BankAccountCommands,
    },

    /// List service-person reports
    Reports,
}
