/*!
 * Final validation report.
 */

use std::io::{self, Write};

use super::issues::IssueLog;

/// Width of the banner framing the report
pub const BANNER_WIDTH: usize = 60;

/// Write the report: a success line when nothing was recorded, otherwise
/// every error and then every warning, in the order they were found.
pub fn write_report<W: Write>(out: &mut W, issues: &IssueLog) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);

    writeln!(out)?;
    writeln!(out, "{}", banner)?;
    writeln!(out, "📊 Validation Report")?;
    writeln!(out, "{}", banner)?;

    if issues.is_clean() {
        writeln!(out, "✅ All data passed validation!")?;
    } else {
        if !issues.errors().is_empty() {
            writeln!(out)?;
            writeln!(out, "❌ Found {} error(s):", issues.errors().len())?;
            for error in issues.errors() {
                writeln!(out, "  {}", error)?;
            }
        }

        if !issues.warnings().is_empty() {
            writeln!(out)?;
            writeln!(out, "⚠️  Found {} warning(s):", issues.warnings().len())?;
            for warning in issues.warnings() {
                writeln!(out, "  {}", warning)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", banner)?;
    Ok(())
}
