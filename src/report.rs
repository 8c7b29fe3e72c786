//! # Summary Reporter
//!
//! Renders the end-of-run listing: public repositories first, then private
//! ones, each as a name/description line. The report is a pure read of the
//! descriptor list, so it does not consult what actually succeeded on disk
//! or remotely, so it prints the same groupings even after a partially
//! failed run.

use crate::descriptor::RepoDescriptor;
use crate::output::{marker, OutputConfig};

/// Render the summary report as a string.
pub fn render(repos: &[RepoDescriptor], out: &OutputConfig) -> String {
    let (public, private): (Vec<_>, Vec<_>) = repos.iter().partition(|r| !r.private);

    let mut report = String::new();
    report.push_str(&format!(
        "{} Repository summary\n",
        marker(out, "📊", "[SUMMARY]")
    ));

    report.push_str(&format!(
        "\n{} Public repositories ({}):\n",
        marker(out, "🌍", "[PUBLIC]"),
        public.len()
    ));
    for repo in &public {
        report.push_str(&format!("   {} - {}\n", repo.name, repo.description));
    }

    report.push_str(&format!(
        "\n{} Private repositories ({}):\n",
        marker(out, "🔒", "[PRIVATE]"),
        private.len()
    ));
    for repo in &private {
        report.push_str(&format!("   {} - {}\n", repo.name, repo.description));
    }

    report
}

/// Print the summary report to stdout.
pub fn print(repos: &[RepoDescriptor], out: &OutputConfig) {
    print!("{}", render(repos, out));
}
