//! Output rendering for generated badges.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-badge fields and a top-level summary.

use crate::generate::GeneratedBadge;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(mode: &str) -> bool {
    mode != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print generated badges in the requested mode.
pub fn print_badges(badges: &[GeneratedBadge], mode: &str) {
    match mode {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_badges_json(badges)).unwrap()
        ),
        _ => {
            let color = use_colors(mode);
            for b in badges {
                match &b.path {
                    Some(path) => {
                        let line = format!(
                            "{} {}% ({}) -> {}",
                            b.key,
                            b.pct,
                            b.color.as_str(),
                            path.display()
                        );
                        if color {
                            println!("{} {}", "🛡 badge:".green().bold(), line);
                        } else {
                            println!("🛡 badge: {}", line);
                        }
                    }
                    None => {
                        let line = format!("{} {}% ({})", b.key, b.pct, b.color.as_str());
                        if color {
                            println!("{} {}", "⏭ skipped:".yellow().bold(), line);
                        } else {
                            println!("⏭ skipped: {}", line);
                        }
                    }
                }
            }
            let written = badges.iter().filter(|b| b.path.is_some()).count();
            let summary = format!(
                "— Summary — written={} skipped={} total={}",
                written,
                badges.len() - written,
                badges.len()
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{}", summary);
            }
        }
    }
}

/// Compose the badges JSON object (pure) for testing purposes.
pub fn compose_badges_json(badges: &[GeneratedBadge]) -> JsonVal {
    let items: Vec<_> = badges
        .iter()
        .map(|b| {
            json!({
                "key": b.key,
                "pct": b.pct,
                "color": b.color.as_str(),
                "url": b.url,
                "path": b.path.as_ref().map(|p| p.to_string_lossy().to_string()),
                "written": b.path.is_some(),
            })
        })
        .collect();
    let written = badges.iter().filter(|b| b.path.is_some()).count();
    let summary = json!({
        "written": written,
        "skipped": badges.len() - written,
        "total": badges.len(),
    });
    json!({"badges": items, "summary": summary})
}
