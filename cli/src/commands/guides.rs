//! # VIKAS Guides Command
//!
//! File: cli/src/commands/guides.rs
//! Author: Christi Mahu
//!
//! Lists the service catalogue in match-priority order: the first guide whose
//! keyword appears in a message answers it, so this listing doubles as a way to
//! see why a message was routed where it was.
//!
use clap::Parser;
use serde::Serialize;
use tracing::info;
use vikas::assistant::{guides, ServiceGuide};
use vikas::core::error::Result;

/// Arguments for `vikas guides`.
#[derive(Parser, Debug)]
pub struct GuidesArgs {
    /// Print the catalogue as JSON.
    #[arg(long)]
    pub json: bool,
}

/// A guide as exposed to users, with the reassurance already resolved.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GuideView {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub suggestions: &'static [&'static str],
    pub reassurance: &'static str,
}

impl From<&'static ServiceGuide> for GuideView {
    fn from(guide: &'static ServiceGuide) -> Self {
        Self {
            id: guide.id,
            keywords: guide.keywords,
            steps: guide.steps,
            suggestions: guide.suggestions,
            reassurance: guide.reassurance(),
        }
    }
}

/// All guides in priority order.
pub fn guide_views() -> Vec<GuideView> {
    guides().iter().map(GuideView::from).collect()
}

pub async fn handle_guides(args: GuidesArgs) -> Result<()> {
    info!("Handling guides command");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&guide_views())?);
    } else {
        print!("{}", render_listing(&guide_views()));
    }
    Ok(())
}

fn render_listing(views: &[GuideView]) -> String {
    views
        .iter()
        .enumerate()
        .map(|(index, view)| render_entry(index + 1, view))
        .collect()
}

fn render_entry(position: usize, view: &GuideView) -> String {
    format!(
        "{}. {}\n   keywords: {}\n   topics:   {}\n",
        position,
        view.id,
        view.keywords.join(", "),
        view.suggestions.join(" | ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_follows_priority_order() {
        let listing = render_listing(&guide_views());
        let pension = listing.find("1. pension").unwrap();
        let pm = listing.find("5. pm-schemes").unwrap();
        assert!(pension < pm);
        assert!(listing.contains("   keywords: samman card, sambhal card, samman, sambhal"));
    }

    #[test]
    fn test_render_entry_layout() {
        let views = guide_views();
        assert_eq!(
            render_entry(4, &views[3]),
            "4. banking\n   keywords: bank, account, passbook, cash deposit, aeps, withdrawal, micro atm, loan\n   topics:   AEPS Banking & Micro ATM | Savings / RD / FD Account Assistance | Loan & Insurance Consultation\n"
        );
        assert_eq!(render_listing(&views).lines().count(), views.len() * 3);
    }

    #[test]
    fn test_guide_view_resolves_reassurance() {
        let views = guide_views();
        assert!(views[0].reassurance.starts_with("Senior citizens"));
        assert_eq!(
            views[1].reassurance,
            vikas::assistant::catalogue::DEFAULT_REASSURANCE
        );
    }
}
