//! HTML landing page listing the device endpoints.

use std::fmt::Write;

use crate::routing::table::ENDPOINTS;

const HEAD: &str = r#"<!doctype html>
<html>
  <head>
    <meta charset="utf-8"/>
    <title>Mock Device Server</title>
    <style>
      body { font-family: Arial, sans-serif; margin: 40px; }
      h1 { color: #333; }
      ul { list-style-type: none; padding: 0; }
      li { margin: 10px 0; padding: 10px; background: #f5f5f5; border-radius: 4px; }
      code { background: #e8e8e8; padding: 2px 6px; border-radius: 3px; }
    </style>
  </head>
  <body>
    <h1>Mock Device Server</h1>
"#;

const TAIL: &str = r#"  </body>
</html>
"#;

/// Render the page; the CORS notes appear only when the middleware is on.
pub fn render(cors_enabled: bool) -> String {
    let mut page = String::from(HEAD);
    let cors_note = if cors_enabled { " (CORS разрешены)" } else { "" };

    // Writing to a String cannot fail.
    let _ = writeln!(
        page,
        "    <p>API эндпоинты для мок-данных устройств{cors_note}</p>"
    );
    page.push_str("    <ul>\n");
    for endpoint in ENDPOINTS {
        let _ = writeln!(page, "      <li><code>{endpoint}</code></li>");
    }
    page.push_str("    </ul>\n");
    if cors_enabled {
        page.push_str("    <p>Для тестирования CORS все методы и заголовки разрешены.</p>\n");
    }
    page.push_str(TAIL);
    page
}
