//! Command handlers: dispatch parsed arguments against the calendar and
//! render the results as markdown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};

use edcal_core::{
    backup,
    params::{ItemId, MonthId},
    Calendar, DraftClient, OperationStatus, DRAFT_FALLBACK_MESSAGE,
};

use crate::{
    args::{
        ActionCommands, AddActionArgs, ArticleCommands, BackupCommands, Commands,
        DeleteActionArgs, DraftArgs, ExportBackupArgs, ImportBackupArgs, MonthCommands,
        ResetArgs, ShowMonthArgs,
    },
    renderer::TerminalRenderer,
};

pub struct Cli {
    calendar: Calendar,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(calendar: Calendar, renderer: TerminalRenderer) -> Self {
        Self { calendar, renderer }
    }

    /// Dispatches one command, then persists any pending change before
    /// returning so short-lived invocations never lose their last edit.
    pub async fn run(self, command: Option<Commands>) -> Result<()> {
        let outcome = self.dispatch(command).await;
        if self.calendar.save_pending() {
            self.calendar
                .flush()
                .await
                .context("Failed to persist changes")?;
        }
        outcome
    }

    async fn dispatch(&self, command: Option<Commands>) -> Result<()> {
        match command {
            None => self.list_months().await,
            Some(Commands::Month { command }) => match command {
                MonthCommands::List => self.list_months().await,
                MonthCommands::Show(args) => self.show_month(args).await,
            },
            Some(Commands::Article { command }) => match command {
                ArticleCommands::Cycle(args) => self.cycle_article(args.into()).await,
                ArticleCommands::Done(args) => self.toggle_article(args.into(), true).await,
                ArticleCommands::Undone(args) => self.toggle_article(args.into(), false).await,
            },
            Some(Commands::Action { command }) => match command {
                ActionCommands::Add(args) => self.add_action(args).await,
                ActionCommands::Cycle(args) => self.cycle_action(args.into()).await,
                ActionCommands::Done(args) => self.toggle_action(args.into(), true).await,
                ActionCommands::Undone(args) => self.toggle_action(args.into(), false).await,
                ActionCommands::Delete(args) => self.delete_action(args).await,
            },
            Some(Commands::Report) => self.report().await,
            Some(Commands::Stats) => self.stats().await,
            Some(Commands::Reset(args)) => self.reset(args).await,
            Some(Commands::Backup { command }) => match command {
                BackupCommands::Export(args) => self.export_backup(args).await,
                BackupCommands::Import(args) => self.import_backup(args).await,
            },
            Some(Commands::Draft(args)) => self.draft(args).await,
        }
    }

    async fn list_months(&self) -> Result<()> {
        let summaries = self.calendar.list_months().await;
        self.renderer
            .render(&format!("# Content Calendar 2026\n\n{summaries}"))
    }

    async fn show_month(&self, args: ShowMonthArgs) -> Result<()> {
        let params: MonthId = args.into();
        match self.calendar.show_month(&params).await {
            Some(detail) => self.renderer.render(&detail.to_string()),
            None => self.renderer.render(
                &OperationStatus::failure(format!("No month with ordinal {}", params.id))
                    .to_string(),
            ),
        }
    }

    async fn cycle_article(&self, params: ItemId) -> Result<()> {
        match self.calendar.cycle_article(&params).await {
            Some(article) => self
                .renderer
                .render(&format!("Updated article status\n\n{article}")),
            None => self.no_item_notice("article", &params.id),
        }
    }

    async fn toggle_article(&self, params: ItemId, checked: bool) -> Result<()> {
        match self.calendar.toggle_article(&params, checked).await {
            Some(article) => self
                .renderer
                .render(&format!("Updated article status\n\n{article}")),
            None => self.no_item_notice("article", &params.id),
        }
    }

    async fn cycle_action(&self, params: ItemId) -> Result<()> {
        match self.calendar.cycle_action(&params).await {
            Some(action) => self
                .renderer
                .render(&format!("Updated action status\n\n{action}")),
            None => self.no_item_notice("action", &params.id),
        }
    }

    async fn toggle_action(&self, params: ItemId, checked: bool) -> Result<()> {
        match self.calendar.toggle_action(&params, checked).await {
            Some(action) => self
                .renderer
                .render(&format!("Updated action status\n\n{action}")),
            None => self.no_item_notice("action", &params.id),
        }
    }

    /// Unknown IDs on status changes are a notice, not an error: the store
    /// treats them as a no-op by design.
    fn no_item_notice(&self, what: &str, id: &str) -> Result<()> {
        self.renderer.render(
            &OperationStatus::failure(format!("No {what} with ID '{id}'; nothing changed"))
                .to_string(),
        )
    }

    async fn add_action(&self, args: AddActionArgs) -> Result<()> {
        let fallback_month = current_month_ordinal();
        let params = args.into_params(fallback_month);
        let action = self.calendar.add_action(&params).await?;
        self.renderer
            .render(&edcal_core::display::AddResult::new(action).to_string())
    }

    async fn delete_action(&self, args: DeleteActionArgs) -> Result<()> {
        let params = args.into();
        match self.calendar.delete_action(&params).await? {
            Some(action) => self
                .renderer
                .render(&edcal_core::display::DeleteResult::new(action).to_string()),
            None => self.no_item_notice("action", &params.id),
        }
    }

    async fn report(&self) -> Result<()> {
        let report = self.calendar.report().await;
        self.renderer
            .render(&format!("# Execution Report\n\n{report}"))
    }

    async fn stats(&self) -> Result<()> {
        // Syncing first makes the "last synced" line truthful.
        self.calendar
            .flush()
            .await
            .context("Failed to persist changes")?;
        let stats = self.calendar.stats().await;
        let mut output = format!("# Progress\n\n{stats}\n");
        if let Some(saved_at) = self.calendar.saved_at() {
            let local = saved_at.to_zoned(jiff::tz::TimeZone::system());
            output.push_str(&format!("\nLast synced at {}\n", local.strftime("%H:%M:%S")));
        }
        self.renderer.render(&output)
    }

    async fn reset(&self, args: ResetArgs) -> Result<()> {
        self.calendar.reset(&args.into()).await?;
        self.renderer.render(
            &OperationStatus::success(
                "All local progress erased; the plan is back to the catalog defaults",
            )
            .to_string(),
        )
    }

    async fn export_backup(&self, args: ExportBackupArgs) -> Result<()> {
        let text = self.calendar.export().await?;
        let path = args.output.unwrap_or_else(|| {
            PathBuf::from(backup::backup_file_name(jiff::Zoned::now().date()))
        });
        std::fs::write(&path, &text)
            .with_context(|| format!("Failed to write backup to {}", path.display()))?;
        self.renderer.render(
            &OperationStatus::success(format!("Backup written to {}", path.display()))
                .to_string(),
        )
    }

    async fn import_backup(&self, args: ImportBackupArgs) -> Result<()> {
        let text = std::fs::read_to_string(&args.path)
            .with_context(|| format!("Failed to read backup from {}", args.path.display()))?;
        self.calendar
            .restore(&text)
            .await
            .context("Could not restore backup: not a valid backup document")?;
        self.renderer
            .render(&OperationStatus::success("Backup restored").to_string())
    }

    async fn draft(&self, args: DraftArgs) -> Result<()> {
        let request = self
            .calendar
            .draft_request(&ItemId { id: args.id })
            .await?;

        let client = match DraftClient::from_env() {
            Ok(client) => client,
            Err(e) => {
                warn!("draft client unavailable: {e}");
                return self
                    .renderer
                    .render(&OperationStatus::failure(DRAFT_FALLBACK_MESSAGE).to_string());
            }
        };
        let client = match args.model {
            Some(model) => client.with_model(model),
            None => client,
        };

        info!(
            "requesting draft for '{}' from {}",
            request.title,
            client.model()
        );
        match client.generate(&request).await {
            Ok(content) => self.renderer.render(&content),
            Err(e) => {
                warn!("draft generation failed: {e}");
                self.renderer
                    .render(&OperationStatus::failure(DRAFT_FALLBACK_MESSAGE).to_string())
            }
        }
    }
}

/// Ordinal (0..=11) of the current calendar month, the default month for
/// newly added actions.
fn current_month_ordinal() -> u8 {
    (jiff::Zoned::now().month() - 1) as u8
}
