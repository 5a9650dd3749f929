//! Page templates for the index.
//!
//! Placeholders are `{name}` and are substituted by plain string replacement.

/// The whole page. Placeholders: `{now}`, `{git_sha}`, `{elapsed}`, `{items_html}`.
pub const INDEX_HTML_TEMPLATE: &str = r#"<html>
<head>
  <meta charset="utf-8">
  <title>Results Reporter Demo</title>
</head>
<body>
<h1>Results Reporter Demo</h1>
<p><a href="https://travis-ci.org/OSVTAC/osv-results-demo"><img src="https://travis-ci.org/OSVTAC/osv-results-demo.svg?branch=master" alt="Build Status"/></a>
<p>[Last published on {now}
from Git commit
<a href="https://github.com/OSVTAC/osv-results-demo/commit/{git_sha}"><code>{git_sha}</code></a>.
All built in: {elapsed}.]
<p>
  This page shows the latest example outputs of the
  <a href="https://osvtac.github.io/">San Francisco Open Source Voting
  System Technical Advisory Committee's</a> (OSVTAC) open source voting
  <a href="https://github.com/OSVTAC/osv-results-reporter">Results Reporter</a>.
<ul>
{items_html}
</ul>
<p>
  File sizes are in decimal kilobytes and megabytes rather than binary.
<p>
  Each hexadecimal string is the
  <a href="https://en.wikipedia.org/wiki/SHA-2">SHA-256</a> hash of the
  listed file. This can be used to check the integrity of the downloaded file.
<p>
  This page is generated from the following OSVTAC GitHub repository:
  <a href="https://github.com/OSVTAC/osv-results-demo">https://github.com/OSVTAC/osv-results-demo</a>.
</body>
</html>
"#;

/// One report with metadata. Placeholders: `{title}`, `{home_href}`,
/// `{zip_href}`, `{zip_name}`, `{zip_size}`, `{zip_hash}`.
pub const REPORT_ITEM_TEMPLATE: &str = r#"<li>{title}
<ul>
    <li>
        <a href="{home_href}">HTML results</a>
    </li>
    <li><a href="{zip_href}">{zip_name}</a>
    ({zip_size}) <code>{zip_hash}</code>
    </li>
</ul>
</li>
"#;

/// One report without metadata. Placeholders: `{title}`, `{home_href}`.
pub const STATIC_ITEM_TEMPLATE: &str = r#"<li><a href="{home_href}">{title}</a></li>
"#;
