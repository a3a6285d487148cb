//! Command-line interface definitions using clap.
//!
//! Implements the parameter wrapper pattern: every subcommand has a clap
//! argument struct here that converts into the framework-free parameter
//! types from `edcal_core::params`. CLI concerns (flags, help text, value
//! ranges) stay on this side of the boundary; the core never sees clap.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};
use edcal_core::params::{AddAction, DeleteAction, ItemId, MonthId, ResetPlan};

/// Main command-line interface for the edcal content planning tool
///
/// Edcal tracks a fixed 12-month editorial calendar for a law-firm marketing
/// team: catalog articles and ad-hoc marketing actions move through a
/// pending/draft/completed workflow, progress is persisted locally, and
/// draft copy can be generated through the Gemini text API.
#[derive(Parser)]
#[command(version, about, name = "edcal")]
pub struct Args {
    /// Path to the storage database file. Defaults to
    /// $XDG_DATA_HOME/edcal/edcal.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the edcal CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the month plans
    #[command(alias = "m")]
    Month {
        #[command(subcommand)]
        command: MonthCommands,
    },
    /// Update catalog article statuses
    #[command(alias = "a")]
    Article {
        #[command(subcommand)]
        command: ArticleCommands,
    },
    /// Manage custom marketing actions
    #[command(alias = "ac")]
    Action {
        #[command(subcommand)]
        command: ActionCommands,
    },
    /// Show the flat execution report across all months
    #[command(alias = "r")]
    Report,
    /// Show overall completion statistics
    Stats,
    /// Erase all local progress and return to the catalog defaults
    Reset(ResetArgs),
    /// Export or import a backup file
    #[command(alias = "b")]
    Backup {
        #[command(subcommand)]
        command: BackupCommands,
    },
    /// Generate draft copy for a planned item
    #[command(alias = "d")]
    Draft(DraftArgs),
}

#[derive(Subcommand)]
pub enum MonthCommands {
    /// List all twelve months with completion counts
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one month's strategy, articles, and custom actions
    #[command(alias = "s")]
    Show(ShowMonthArgs),
}

#[derive(Subcommand)]
pub enum ArticleCommands {
    /// Advance an article to its next workflow status
    #[command(alias = "c")]
    Cycle(ItemArgs),
    /// Mark an article completed
    Done(ItemArgs),
    /// Mark an article not completed (back to pending)
    Undone(ItemArgs),
}

#[derive(Subcommand)]
pub enum ActionCommands {
    /// Add a custom action to a month
    #[command(alias = "a")]
    Add(AddActionArgs),
    /// Advance an action to its next workflow status
    #[command(alias = "c")]
    Cycle(ItemArgs),
    /// Mark an action completed
    Done(ItemArgs),
    /// Mark an action not completed (back to pending)
    Undone(ItemArgs),
    /// Delete an action permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteActionArgs),
}

#[derive(Subcommand)]
pub enum BackupCommands {
    /// Write the current plan to a backup file
    #[command(alias = "e")]
    Export(ExportBackupArgs),
    /// Replace the current plan with a backup file's contents
    #[command(alias = "i")]
    Import(ImportBackupArgs),
}

/// Show details of one month
#[derive(ClapArgs)]
pub struct ShowMonthArgs {
    /// Month ordinal: 0 (Janeiro) through 11 (Dezembro)
    #[arg(value_parser = clap::value_parser!(u8).range(0..=11))]
    pub id: u8,
}

impl From<ShowMonthArgs> for MonthId {
    fn from(val: ShowMonthArgs) -> Self {
        MonthId { id: val.id }
    }
}

/// Address one planned item (article or action) by its ID
#[derive(ClapArgs)]
pub struct ItemArgs {
    /// ID of the item, e.g. `jan1` or `cust-1700000000000`
    pub id: String,
}

impl From<ItemArgs> for ItemId {
    fn from(val: ItemArgs) -> Self {
        ItemId { id: val.id }
    }
}

/// Add a custom action
///
/// The month defaults to the current calendar month; type and channel fall
/// back to the most common values when omitted.
#[derive(ClapArgs)]
pub struct AddActionArgs {
    /// Title of the activity
    pub title: String,
    /// Month ordinal to attach the action to (defaults to the current month)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=11))]
    pub month: Option<u8>,
    /// Activity format, e.g. Post, Artigo, Vídeo, Email (defaults to Post)
    #[arg(long = "type")]
    pub kind: Option<String>,
    /// Destination channel, e.g. Instagram, LinkedIn, Blog, or any custom
    /// name (defaults to Instagram)
    #[arg(long)]
    pub channel: Option<String>,
}

impl AddActionArgs {
    /// Convert to core parameters, filling the month from the caller when
    /// the flag was omitted.
    pub fn into_params(self, fallback_month: u8) -> AddAction {
        AddAction {
            month_id: self.month.unwrap_or(fallback_month),
            title: self.title,
            kind: self.kind,
            channel: self.channel,
        }
    }
}

/// Delete a custom action permanently
#[derive(ClapArgs)]
pub struct DeleteActionArgs {
    /// ID of the action to delete
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteActionArgs> for DeleteAction {
    fn from(val: DeleteActionArgs) -> Self {
        DeleteAction {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

/// Erase all local progress
///
/// Clears the in-memory plan back to the catalog defaults and removes every
/// persisted storage key, current and legacy alike. Irreversible.
#[derive(ClapArgs)]
pub struct ResetArgs {
    /// Confirm the reset (required to prevent accidental data loss)
    #[arg(long)]
    pub confirm: bool,
}

impl From<ResetArgs> for ResetPlan {
    fn from(val: ResetArgs) -> Self {
        ResetPlan {
            confirmed: val.confirm,
        }
    }
}

/// Export a backup file
#[derive(ClapArgs)]
pub struct ExportBackupArgs {
    /// Target file path; defaults to a dated name in the working directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Import a backup file
#[derive(ClapArgs)]
pub struct ImportBackupArgs {
    /// Backup file to restore from
    pub path: PathBuf,
}

/// Generate draft copy for a planned item
///
/// Looks the item up by ID, builds the content brief from its title and
/// category (articles) or type (actions), and prints the generated markdown.
/// Requires the GEMINI_API_KEY environment variable.
#[derive(ClapArgs)]
pub struct DraftArgs {
    /// ID of the article or action to draft
    pub id: String,
    /// Override the model name
    #[arg(long)]
    pub model: Option<String>,
}
