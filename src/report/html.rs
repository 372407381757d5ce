//! HTML report generation
//!
//! Generates a self-contained single-table report with embedded styles.
//! Status, URL and title are interpolated verbatim — including any markup a
//! probed host returned in its `<title>` — to keep the artifact identical to
//! what downstream consumers already parse. See DESIGN.md for the injection
//! trade-off.

use crate::models::ProbeResult;
use chrono::Utc;

/// Render all probe records as an HTML table, in input order.
pub fn render_html(target: &str, results: &[ProbeResult]) -> String {
    let generated = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    let mut rows = String::new();
    for result in results {
        rows.push_str(&format!(
            "            <tr><td>{status}</td><td><a href=\"{url}\">{url}</a></td><td>{title}</td></tr>\n",
            status = result.status,
            url = result.url,
            title = result.title,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Recon Report: {target}</title>
    <style>
        :root {{
            --primary: #2563eb;
            --gray-50: #f9fafb;
            --gray-100: #f3f4f6;
            --gray-200: #e5e7eb;
            --gray-700: #374151;
            --gray-900: #111827;
        }}
        * {{ box-sizing: border-box; }}
        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: var(--gray-900);
            max-width: 1200px;
            margin: 0 auto;
            padding: 2rem;
            background: var(--gray-50);
        }}
        h1 {{ color: var(--primary); border-bottom: 3px solid var(--primary); padding-bottom: 0.5rem; }}
        table {{ width: 100%; border-collapse: collapse; margin: 1rem 0; background: white; }}
        th, td {{ padding: 0.75rem; text-align: left; border-bottom: 1px solid var(--gray-200); }}
        th {{ background: var(--gray-100); font-weight: 600; }}
        tr:hover {{ background: var(--gray-50); }}
        a {{ color: var(--primary); text-decoration: none; }}
        footer {{ margin-top: 3rem; text-align: center; color: var(--gray-700); font-size: 0.875rem; }}
    </style>
</head>
<body>
    <h1>Recon Report: {target}</h1>
    <p>{count} live endpoints</p>
    <table>
        <thead>
            <tr><th>Status</th><th>URL</th><th>Title</th></tr>
        </thead>
        <tbody>
{rows}        </tbody>
    </table>
    <footer>Generated by subrecon on {generated}</footer>
</body>
</html>
"#,
        target = target,
        count = results.len(),
        rows = rows,
        generated = generated,
    )
}
