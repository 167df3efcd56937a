use crate::cli::commands::{ActiveEntry, open_store, parse_on_off, parse_section};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::Update;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, selector: Option<i64>) -> AppResult<()> {
    if let Commands::Applies { section, value } = cmd {
        let section = parse_section(section)?;
        let applies = parse_on_off(value)?;

        let pool = open_store(cfg)?;
        let active = ActiveEntry::load_open(&pool, selector)?;
        active
            .session
            .borrow_mut()
            .apply(Update::SetApplies(section, applies))?;

        let state = if applies { "applies" } else { "does not apply" };
        active.save(&pool, "applies", &format!("{} {}", section.key(), state))?;
        success(format!("Section '{}' {}.", section.key(), state));
    }

    Ok(())
}
