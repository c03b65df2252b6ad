//! Landing Page
//!
//! Static HTML document describing the service and its endpoints. The only
//! dynamic piece is the configured port, substituted at render time.

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>memkv</title>
    <style>
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: #f5f7fa;
            color: #333;
            margin: 0;
            padding: 40px 20px;
            display: flex;
            justify-content: center;
        }
        .container {
            background: white;
            padding: 40px;
            border-radius: 12px;
            box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
            max-width: 640px;
            width: 100%;
        }
        h1 {
            color: #2d3748;
            margin: 0 0 8px 0;
        }
        .subtitle {
            color: #718096;
            margin-bottom: 30px;
        }
        .endpoint {
            border-left: 4px solid #667eea;
            background: #f7f8fc;
            border-radius: 6px;
            padding: 14px 18px;
            margin-bottom: 14px;
        }
        .endpoint h3 {
            margin: 0 0 6px 0;
            font-family: monospace;
            font-size: 1em;
            color: #4a5568;
        }
        .endpoint p {
            margin: 0 0 6px 0;
            color: #718096;
            font-size: 0.95em;
        }
        code {
            display: block;
            background: #2d3748;
            color: #e2e8f0;
            border-radius: 4px;
            padding: 8px 10px;
            font-size: 0.85em;
            overflow-x: auto;
        }
        footer {
            margin-top: 24px;
            color: #a0aec0;
            font-size: 0.9em;
        }
    </style>
</head>
<body>
    <div class="container">
        <h1>memkv</h1>
        <p class="subtitle">An in-memory key-value store over HTTP, listening on port {port}.
           Values are arbitrary JSON and live only for the lifetime of the process.</p>

        <div class="endpoint">
            <h3>GET /healthz</h3>
            <p>Health check: status, timestamp, uptime, memory, load averages and port.</p>
            <code>curl http://localhost:{port}/healthz</code>
        </div>
        <div class="endpoint">
            <h3>GET /kv/:key</h3>
            <p>Retrieve the value stored under a key. 404 if the key is absent.</p>
            <code>curl http://localhost:{port}/kv/color</code>
        </div>
        <div class="endpoint">
            <h3>PUT /kv/:key</h3>
            <p>Store a JSON value under a key, overwriting any prior value.
               The body must contain a <strong>value</strong> field.</p>
            <code>curl -X PUT http://localhost:{port}/kv/color -H 'Content-Type: application/json' -d '{"value": "blue"}'</code>
        </div>
        <div class="endpoint">
            <h3>DELETE /kv/:key</h3>
            <p>Remove a key. Succeeds whether or not the key existed.</p>
            <code>curl -X DELETE http://localhost:{port}/kv/color</code>
        </div>

        <footer>memkv - no persistence, no auth, just a map behind a port.</footer>
    </div>
</body>
</html>
"#;

/// Renders the landing page for the configured port.
pub fn render(port: u16) -> String {
    TEMPLATE.replace("{port}", &port.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_port() {
        let page = render(3000);
        assert!(page.contains("listening on port 3000"));
        assert!(page.contains("http://localhost:3000/healthz"));
        assert!(!page.contains("{port}"));
    }

    #[test]
    fn test_render_lists_all_endpoints() {
        let page = render(3000);
        for endpoint in ["GET /healthz", "GET /kv/:key", "PUT /kv/:key", "DELETE /kv/:key"] {
            assert!(page.contains(endpoint), "missing {endpoint}");
        }
    }
}
