//! CLI command for viewing the audit log

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_log_command(storage: &Storage, count: usize) -> ExpenseResult<()> {
    let entries = storage.audit().read_recent(count)?;

    if entries.is_empty() {
        println!("No audit entries yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    let total = storage.audit().entry_count()?;
    if total > entries.len() {
        println!();
        println!("Showing {} of {} entries.", entries.len(), total);
    }

    Ok(())
}
