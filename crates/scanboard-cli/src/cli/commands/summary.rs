//! One-shot summary: load findings, aggregate, print.

use anyhow::Result;

use scanboard_core::{compute_views, parse_findings, SeverityFilter};
use scanboard_srv::config::SourceConfig;
use scanboard_srv::source;

use crate::cli::args::SummaryArgs;
use crate::output;

pub async fn run(args: SummaryArgs) -> Result<()> {
    let source_config = match (args.file, args.url) {
        (Some(path), _) => SourceConfig::File { path },
        (None, Some(url)) => SourceConfig::Feed { url },
        (None, None) => SourceConfig::Sample,
    };

    let src = source::from_config(&source_config);
    let raw = src.fetch().await?;
    let (findings, excluded) = parse_findings(raw);

    let view = compute_views(&findings, SeverityFilter::from(args.severity));
    output::render(&view, excluded, args.output)
}
