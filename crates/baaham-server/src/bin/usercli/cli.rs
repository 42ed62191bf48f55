use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "usercli", version, about = "User management CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new user
    Create {
        #[arg(short, long)]
        username: String,

        /// Grant administrative rights
        #[arg(long)]
        admin: bool,

        /// Skip the interactive prompt
        #[arg(long)]
        password: Option<String>,
    },

    /// List users
    List,

    /// Change a user's password
    ChangePassword {
        #[arg(short, long)]
        username: String,

        /// Skip the interactive prompts
        #[arg(long)]
        password: Option<String>,
    },

    /// Delete a user
    Delete {
        #[arg(short, long)]
        username: String,
    },
}
