//! CLI commands

use anyhow::{Context, Result};
use clap::Subcommand;
use listkeeper_core::{FileTokenStore, GuardOutcome, Route, Session, guard};
use listkeeper_http::{ApiClientFactory, AuthService, ListService, RoleService};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::{self, Settings};
use crate::navigator::TerminalNavigator;

#[derive(Subcommand)]
pub enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, env = "LISTKEEPER_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Forget the stored session
    Logout,

    /// Create a new account
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, env = "LISTKEEPER_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Show the user the stored token belongs to
    Whoami,

    /// Manage list items
    Lists {
        #[command(subcommand)]
        command: ListCommands,
    },

    /// Manage roles
    Roles {
        #[command(subcommand)]
        command: RoleCommands,
    },

    /// Evaluate the navigation guard for a path
    Route {
        /// Path to navigate to, e.g. /dashboard
        path: String,
    },

    /// Configuration file operations
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ListCommands {
    /// Show every list item
    List,

    /// Add an item
    Add { value: String },

    /// Replace the value of an item
    Update { id: i64, value: String },

    /// Delete an item
    Delete { id: i64 },

    /// Check whether a value is on a list of the given type
    Check {
        /// List type, e.g. blacklist or whitelist
        list_type: String,
        value: String,
    },
}

#[derive(Subcommand)]
pub enum RoleCommands {
    /// Show every role
    List,

    /// Add a role
    Add { role: String },

    /// Rename a role
    Update { id: i64, role: String },

    /// Delete a role
    Delete { id: i64 },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write the default configuration file
    Init {
        /// Output file path (defaults to <state-dir>/config.toml)
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

/// Everything a command needs to talk to the backend
struct AppContext {
    session: Arc<Session>,
    factory: ApiClientFactory,
}

impl AppContext {
    fn new(state_dir: &std::path::Path, config_file: Option<&std::path::Path>) -> Result<Self> {
        let settings = Settings::load_for(state_dir, config_file)?;
        let store = Arc::new(FileTokenStore::new(
            state_dir.join(config::STORAGE_FILE_NAME),
        ));
        let session = Arc::new(Session::new(store));
        let factory = ApiClientFactory::new(
            settings.client,
            session.clone(),
            Arc::new(TerminalNavigator),
        )
        .context("failed to create API client")?;

        Ok(Self { session, factory })
    }
}

impl Commands {
    pub async fn execute(self, state_dir: PathBuf, config_file: Option<PathBuf>) -> Result<()> {
        let connect = || AppContext::new(&state_dir, config_file.as_deref());

        match self {
            Self::Login { username, password } => {
                let ctx = connect()?;
                let response = AuthService::new(ctx.factory)
                    .login(&username, &password)
                    .await?;
                info!(token_type = %response.token_type, "session stored");
                println!("Logged in as {username}");
            }
            Self::Logout => {
                connect()?.session.logout()?;
                println!("Logged out");
            }
            Self::Register { username, password } => {
                let user = AuthService::new(connect()?.factory)
                    .register(&username, &password)
                    .await?;
                println!("Registered {}", user.username);
            }
            Self::Whoami => {
                let ctx = connect()?;
                if ctx.session.is_authenticated() {
                    let user = AuthService::new(ctx.factory).current_user().await?;
                    println!("{}", user.username);
                } else {
                    println!("Not logged in");
                }
            }
            Self::Lists { command } => {
                command.execute(ListService::new(connect()?.factory)).await?;
            }
            Self::Roles { command } => {
                command.execute(RoleService::new(connect()?.factory)).await?;
            }
            Self::Route { path } => {
                let ctx = connect()?;
                let outcome = guard(Route::recognize(&path), ctx.session.store().as_ref());
                println!("{}", describe(outcome));
            }
            Self::Config { command } => command.execute(&state_dir, config_file.as_deref())?,
        }

        Ok(())
    }
}

impl ListCommands {
    async fn execute(self, lists: ListService) -> Result<()> {
        match self {
            Self::List => {
                for item in lists.list().await? {
                    println!("{}\t{}", item.id, item.value);
                }
            }
            Self::Add { value } => match lists.create(&value).await? {
                Some(item) => println!("Added {}\t{}", item.id, item.value),
                None => println!("Added {value}"),
            },
            Self::Update { id, value } => match lists.update(id, &value).await? {
                Some(item) => println!("Updated {}\t{}", item.id, item.value),
                None => println!("Updated {id}\t{value}"),
            },
            Self::Delete { id } => {
                lists.delete(id).await?;
                println!("Deleted {id}");
            }
            Self::Check { list_type, value } => {
                let exists = lists.check(&list_type, &value).await?;
                println!("{}", if exists { "present" } else { "absent" });
            }
        }
        Ok(())
    }
}

impl RoleCommands {
    async fn execute(self, roles: RoleService) -> Result<()> {
        match self {
            Self::List => {
                for role in roles.list().await? {
                    println!("{}\t{}", role.id, role.value);
                }
            }
            Self::Add { role } => match roles.create(&role).await? {
                Some(created) => println!("Added {}\t{}", created.id, created.value),
                None => println!("Added {role}"),
            },
            Self::Update { id, role } => match roles.update(id, &role).await? {
                Some(updated) => println!("Updated {}\t{}", updated.id, updated.value),
                None => println!("Updated {id}\t{role}"),
            },
            Self::Delete { id } => {
                roles.delete(id).await?;
                println!("Deleted {id}");
            }
        }
        Ok(())
    }
}

impl ConfigCommands {
    fn execute(
        self,
        state_dir: &std::path::Path,
        config_file: Option<&std::path::Path>,
    ) -> Result<()> {
        match self {
            Self::Init { output, force } => {
                let path = output.unwrap_or_else(|| state_dir.join(config::CONFIG_FILE_NAME));
                config::generate_default_config(&path, force)?;
                println!("Wrote {}", path.display());
            }
            Self::Show => {
                let settings = Settings::load_for(state_dir, config_file)?;
                print!("{}", settings.to_toml()?);
            }
        }
        Ok(())
    }
}

fn describe(outcome: GuardOutcome) -> String {
    match outcome {
        GuardOutcome::Allowed(route) => format!("allowed {route} ({})", route.name()),
        GuardOutcome::Redirected { from, to } => {
            format!("redirected {from} -> {to} (login required)")
        }
    }
}
