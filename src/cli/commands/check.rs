use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::draft::ListingDraft;
use crate::ui::messages::{advisory, info};

/// Print the date-range and shift summaries for a schedule.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Check { schedule } = cmd {
        let draft = ListingDraft::from_raw(&schedule.to_raw());
        let feedback = draft.evaluate();

        if feedback.is_empty() {
            info("Give both dates (--from/--upto) or both shift times (--shift-start/--shift-end) to see a duration.");
        }

        for a in feedback.iter() {
            advisory(a);
        }
    }
    Ok(())
}
