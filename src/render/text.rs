use crate::github::types::RepoMeta;
use crate::pipeline::types::{EnrichedItem, Report};
use crate::render::{format_date, INDENT};
use crate::search::types::Candidate;
use std::fmt::Write;

const RULE: &str = "===========================";

pub fn write_report(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str("GitHub Packages\n");
    write_items(&mut out, &report.hosted, 0);

    out.push_str(RULE);
    out.push('\n');
    out.push_str("Non-GitHub Packages\n");
    for candidate in &report.non_hosted {
        write_entry(&mut out, "", candidate, None);
    }

    out
}

fn write_items(out: &mut String, items: &[EnrichedItem], depth: usize) {
    let prefix = " ".repeat(depth * INDENT);
    for item in items {
        write_entry(out, &prefix, &item.candidate, item.meta.as_ref());
        write_items(out, &item.children, depth + 1);
    }
}

fn write_entry(out: &mut String, prefix: &str, candidate: &Candidate, meta: Option<&RepoMeta>) {
    let _ = writeln!(out, "{prefix}");
    let _ = writeln!(out, "{prefix}{}", candidate.path);
    if let Some(meta) = meta {
        let _ = writeln!(
            out,
            "{prefix}Stars: {} Forks: {} UpdatedAt: {} CreatedAt: {}",
            meta.stars,
            meta.forks,
            format_date(meta.updated_at.as_ref()),
            format_date(meta.created_at.as_ref()),
        );
    }
    if !candidate.synopsis.is_empty() {
        let _ = writeln!(out, "{prefix}{}", candidate.synopsis);
    }
}
