// Argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use homeinv_domain::EntityId;

/// Home inventory client
#[derive(Parser, Debug)]
#[command(name = "homeinv")]
#[command(bin_name = "homeinv")]
#[command(about = "Track what is stored where across your homes")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: <config dir>/homeinv/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the service base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in and print the user id
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account
    Register {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        email: String,
    },

    /// Homes owned by or shared with a user
    Homes {
        #[arg(long)]
        user_id: EntityId,
    },

    /// One home with its owner and members
    Home {
        #[arg(value_name = "HOME_ID")]
        id: EntityId,
        /// Viewer, used to tell whether they own the home
        #[arg(long)]
        user_id: Option<EntityId>,
    },

    /// Rooms of a home
    Rooms {
        #[arg(value_name = "HOME_ID")]
        home_id: EntityId,
    },

    /// Search the items of a home by name
    Search {
        #[arg(value_name = "HOME_ID")]
        home_id: EntityId,
        word: String,
    },

    /// Item details and location
    Item {
        #[arg(value_name = "ITEM_ID")]
        id: EntityId,
    },

    /// Pending invitations of a user
    Invitations {
        #[arg(long)]
        user_id: EntityId,
    },

    /// Accept an invitation
    Accept {
        #[arg(value_name = "INVITATION_ID")]
        id: EntityId,
    },

    /// Decline an invitation
    Decline {
        #[arg(value_name = "INVITATION_ID")]
        id: EntityId,
    },

    /// Invite a user into a home
    Invite {
        #[arg(long)]
        user_id: EntityId,
        #[arg(value_name = "HOME_ID")]
        home_id: EntityId,
        username: String,
    },

    /// Inspect or write the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write the effective configuration to the config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["homeinv", "search", "5", "sock"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Search {
                home_id: 5,
                word: "sock".to_string()
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "homeinv",
            "homes",
            "--user-id",
            "3",
            "--base-url",
            "http://localhost:9000/",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::Homes { user_id: 3 });
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000/"));
    }

    #[test]
    fn test_invite_requires_user() {
        assert!(Cli::try_parse_from(["homeinv", "invite", "5", "bo"]).is_err());
    }
}
