// Rust guideline compliant 2026-10-19

//! Implementation of the `awards list` command.
//!
//! Prints the derived view. Controls not given on the command line come from
//! the workspace configuration.

use crate::OutputFormatter;
use anyhow::Result;
use awards_app::{parse_filter_type, parse_sort_by, parse_sort_order, Workspace};
use awards_core::ViewOptions;
use std::path::Path;

/// Command-line controls for `awards list`.
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    /// Filter name (all, funny, serious).
    pub filter: Option<String>,
    /// Search term.
    pub search: Option<String>,
    /// Sort key name (probability, date, votes).
    pub sort: Option<String>,
    /// Sort direction name (asc, desc).
    pub order: Option<String>,
    /// Maximum number of rows.
    pub limit: Option<usize>,
}

/// Overlays command-line controls on the configured defaults.
///
/// # Errors
///
/// Returns an error if a filter, sort key or order name is unknown.
pub fn resolve_options(defaults: ViewOptions, args: &ListArgs) -> Result<ViewOptions> {
    let mut options = defaults;
    if let Some(filter) = &args.filter {
        options.filter_type = parse_filter_type(filter)?;
    }
    if let Some(search) = &args.search {
        options.search_term = search.clone();
    }
    if let Some(sort) = &args.sort {
        options.sort_by = parse_sort_by(sort)?;
    }
    if let Some(order) = &args.order {
        options.sort_order = parse_sort_order(order)?;
    }
    Ok(options)
}

/// Lists commits.
///
/// # Arguments
///
/// * `root` - Optional workspace root
/// * `args` - Filter, search, sort and limit controls
/// * `formatter` - The output formatter to use
///
/// # Errors
///
/// Returns an error if:
/// - The workspace is not initialized
/// - The configuration is invalid
/// - A control value is unknown
pub fn execute(root: Option<&Path>, args: ListArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let workspace = Workspace::discover(root)?;
    let config = workspace.load_config()?;
    let options = resolve_options(config.view_options(), &args)?;

    let mut store = workspace.open_store()?;
    store.set_options(options);

    let mut views = store.commits();
    if let Some(limit) = args.limit {
        views.truncate(limit);
    }

    println!("{}", formatter.format_list(&views));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use awards_core::{FilterType, SortBy, SortOrder};

    #[test]
    fn test_flags_override_defaults() {
        let args = ListArgs {
            filter: Some("funny".to_string()),
            sort: Some("votes".to_string()),
            ..ListArgs::default()
        };
        let options = resolve_options(ViewOptions::default(), &args).unwrap();
        assert_eq!(options.filter_type, FilterType::Funny);
        assert_eq!(options.sort_by, SortBy::Votes);
        assert_eq!(options.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_unknown_sort_is_rejected() {
        let args = ListArgs {
            sort: Some("author".to_string()),
            ..ListArgs::default()
        };
        assert!(resolve_options(ViewOptions::default(), &args).is_err());
    }
}
