use std::io::{BufRead, Write};

use anyhow::Context;

use prodcat_catalog::{CatalogSession, FilterAction, ReferenceData};
use prodcat_core::UserId;

use crate::args::{Cli, Command, FilterArgs};
use crate::config::Config;
use crate::{render, repl};

/// Load reference data from the configured directory, or the embedded fixtures.
pub fn load_reference(config: &Config) -> anyhow::Result<ReferenceData> {
    match &config.data_dir {
        Some(dir) => ReferenceData::from_dir(dir)
            .with_context(|| format!("failed to load reference data from {}", dir.display())),
        None => ReferenceData::embedded().context("embedded fixtures are invalid"),
    }
}

/// Execute a parsed command line against `config`.
pub fn run<R: BufRead, W: Write>(
    cli: Cli,
    config: &Config,
    input: R,
    output: &mut W,
) -> anyhow::Result<()> {
    let reference = load_reference(config)?;
    let mut session = CatalogSession::new(reference, config.integrity_policy);

    match cli.command.unwrap_or_else(|| Command::Show(FilterArgs::default())) {
        Command::Show(filters) => {
            for action in filter_actions(&filters)? {
                session.dispatch(action)?;
            }
            writeln!(output, "{}", render::render(&session.view(), config.format)?)?;
        }
        Command::Interactive => repl::run(&mut session, input, output, config.format)?,
    }

    output.flush()?;
    Ok(())
}

/// Translate one-shot filter flags into actions: user, then search, then categories.
fn filter_actions(filters: &FilterArgs) -> anyhow::Result<Vec<FilterAction>> {
    let mut actions = Vec::new();

    if let Some(user) = filters.user.as_deref() {
        let user = match user.trim() {
            "all" => None,
            id => Some(id.parse::<UserId>()?),
        };
        actions.push(FilterAction::SetUser(user));
    }
    if let Some(search) = &filters.search {
        actions.push(FilterAction::SetSearch(search.clone()));
    }
    actions.extend(filters.categories.iter().copied().map(FilterAction::ToggleCategory));

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodcat_core::CategoryId;

    #[test]
    fn flags_become_actions_in_order() {
        let filters = FilterArgs {
            user: Some("2".into()),
            search: Some("an".into()),
            categories: vec![CategoryId::new(3), CategoryId::new(1)],
        };

        assert_eq!(
            filter_actions(&filters).unwrap(),
            vec![
                FilterAction::SetUser(Some(UserId::new(2))),
                FilterAction::SetSearch("an".into()),
                FilterAction::ToggleCategory(CategoryId::new(3)),
                FilterAction::ToggleCategory(CategoryId::new(1)),
            ]
        );
    }

    #[test]
    fn all_user_clears_the_filter() {
        let filters = FilterArgs {
            user: Some("all".into()),
            ..FilterArgs::default()
        };
        assert_eq!(filter_actions(&filters).unwrap(), vec![FilterAction::SetUser(None)]);
    }

    #[test]
    fn invalid_user_is_an_error() {
        let filters = FilterArgs {
            user: Some("roma".into()),
            ..FilterArgs::default()
        };
        assert!(filter_actions(&filters).is_err());
    }
}
