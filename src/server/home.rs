//! Home page - lists the available API routes.

use chrono::NaiveDate;

/// Escape HTML special characters to prevent XSS attacks.
fn html_escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Generate the home page.
///
/// # Arguments
///
/// * `cutoff` - First day served by the trailing-year routes
/// * `reference_date` - Last day of the trailing year
/// * `active_station` - Station reported by `/api/v1.0/tobs` (operator-configured, escaped)
pub fn generate_home_html(cutoff: NaiveDate, reference_date: NaiveDate, active_station: &str) -> String {
    let station = html_escape(active_station);

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Honolulu Climate API</title>
    <style>
        body {{
            font-family: Arial, sans-serif;
            margin: 20px;
            background-color: #f0f8ff;
        }}
        h2 {{
            color: red;
            text-align: center;
        }}
        .note {{
            color: #555;
            font-style: italic;
        }}
    </style>
</head>
<body>
    <h2>Holiday vacation in Honolulu, Hawaii climate analysis homepage.</h2>
    <h3>List of available routes</h3>
    <ul>
        <li><a href="/api/v1.0/precipitation" target="_blank">/api/v1.0/precipitation</a>
            <span class="note">(daily precipitation, {cutoff} to {reference_date})</span></li>
        <li><a href="/api/v1.0/stations" target="_blank">/api/v1.0/stations</a></li>
        <li><a href="/api/v1.0/tobs" target="_blank">/api/v1.0/tobs</a>
            <span class="note">(temperature observations for station {station}, {cutoff} to {reference_date})</span></li>
        <li>/api/v1.0/&lt;startdate&gt; <i>(use mmddyyyy)</i></li>
        <li>/api/v1.0/&lt;startdate&gt;/&lt;enddate&gt; <i>(use mmddyyyy/mmddyyyy)</i></li>
    </ul>
</body>
</html>
"##,
        cutoff = cutoff,
        reference_date = reference_date,
        station = station,
    )
}
