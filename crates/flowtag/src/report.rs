//! Report — textual rendering of a finished classification summary.

use std::io::Write;

use classifier::Summary;

/// Write both aggregate sections: tag counts first, then port/protocol
/// combination counts, separated by a blank line. Row order comes from the
/// summary, which is already sorted.
pub fn render<W: Write>(summary: &Summary, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Tag Counts:")?;
    writeln!(out, "Tag,Count")?;
    for (tag, count) in &summary.tag_counts {
        writeln!(out, "{},{}", tag, count)?;
    }

    writeln!(out)?;
    writeln!(out, "Port/Protocol Combination Counts:")?;
    writeln!(out, "Port,Protocol,Count")?;
    for (port, protocol, count) in &summary.port_proto_counts {
        writeln!(out, "{},{},{}", port, protocol, count)?;
    }

    Ok(())
}
