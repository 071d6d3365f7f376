use crate::github::types::RepoMeta;
use crate::pipeline::types::{EnrichedItem, Report};
use crate::render::format_date;
use crate::search::types::Candidate;
use std::fmt::Write;

const DOCS_BASE: &str = "https://pkg.go.dev/";
const REPO_BASE: &str = "https://github.com/";

const STYLE: &str = r#"
    body { line-height: 20px; font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif; font-size: 14px; margin: 10px auto; width: 50%; }
    span { border: 1px solid black; border-radius: 5px; padding: 0 5px; }
    a { color: #375eab; text-decoration: none; }
    a:hover { color: #23527c; text-decoration: underline; }
    h1 { color: rgb(55, 94, 171); display: inline-block; font-weight: bold; }
    ul { padding: 0px; list-style: none; }
    li { border-top: 1px solid #DDD; }
    form input { width: 80%; }
    form button { width: 18%; }
    .forks { padding-left: 50px; }
"#;

pub fn page(report: Option<&Report>, query: &str) -> String {
    let query = report.map(|r| r.query.as_str()).unwrap_or(query);
    let mut out = String::new();
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html>\n<head>\n<title>Starfork</title>\n<style type=\"text/css\">{STYLE}</style>\n</head>\n<body>\n"
    );
    out.push_str("<h1>Starfork</h1>\n");
    let _ = writeln!(
        out,
        "<div><form action=\"/\"><input name=\"query\" value=\"{}\"><button>Search</button></form></div>",
        escape(query)
    );

    if let Some(report) = report {
        if !report.hosted.is_empty() {
            let _ = writeln!(out, "<h2>GitHub Packages ({})</h2>", report.hosted.len());
            write_items(&mut out, &report.hosted);
        }
        if !report.non_hosted.is_empty() {
            let _ = writeln!(out, "<h2>Non-GitHub Packages ({})</h2>", report.non_hosted.len());
            out.push_str("<ul>\n");
            for candidate in &report.non_hosted {
                write_entry(&mut out, candidate, None);
                out.push_str("</li>\n");
            }
            out.push_str("</ul>\n");
        }
    }

    out.push_str("</body>\n</html>\n");
    out
}

pub fn error_page(query: &str, message: &str) -> String {
    let mut out = page(None, query);
    let body_end = out.rfind("</body>").unwrap_or(out.len());
    out.insert_str(body_end, &format!("<pre class=\"error\">{}</pre>\n", escape(message)));
    out
}

fn write_items(out: &mut String, items: &[EnrichedItem]) {
    out.push_str("<ul>\n");
    for item in items {
        write_entry(out, &item.candidate, item.meta.as_ref());
        if !item.children.is_empty() {
            out.push_str("<div class=\"forks\">\n");
            write_items(out, &item.children);
            out.push_str("</div>\n");
        }
        out.push_str("</li>\n");
    }
    out.push_str("</ul>\n");
}

// leaves the <li> open for nested forks
fn write_entry(out: &mut String, candidate: &Candidate, meta: Option<&RepoMeta>) {
    let path = escape(&candidate.path);
    let _ = writeln!(out, "<li>\n<p><a href=\"{DOCS_BASE}{path}\">{path}</a></p>");
    if let Some(meta) = meta {
        let _ = writeln!(
            out,
            "<p><span><a href=\"{REPO_BASE}{}\">Repo</a></span> <span>Stars: {}</span> <span>Forks: {}</span> <span>Updated At: {}</span> <span>Created At: {}</span></p>",
            escape(&meta.full_name),
            meta.stars,
            meta.forks,
            format_date(meta.updated_at.as_ref()),
            format_date(meta.created_at.as_ref()),
        );
    }
    if !candidate.synopsis.is_empty() {
        let _ = writeln!(out, "<p>{}</p>", escape(&candidate.synopsis));
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
