//! Tab-separated results table for stdout.

use std::fmt::Write;

use decentra_ledger::MetricsRow;

const HEADER: &str = "ledger\ttimeframe\tgini\tnakamoto\tnakamoto_pct\tentropy\tblocks\tpools";

/// Render one line per row under a fixed header.
pub fn render_table(rows: &[MetricsRow]) -> String {
    let mut out = String::with_capacity(HEADER.len() + rows.len() * 64);
    out.push_str(HEADER);
    out.push('\n');
    for r in rows {
        // Writing to a String cannot fail.
        let _ = writeln!(
            out,
            "{}\t{}\t{:.4}\t{}\t{:.2}\t{:.4}\t{}\t{}",
            r.ledger, r.timeframe, r.gini, r.nakamoto_count, r.nakamoto_pct, r.entropy, r.total_blocks, r.pools
        );
    }
    out
}
