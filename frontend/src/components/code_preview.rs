use serde_json::json;
use yew::prelude::*;

use crate::config;

pub const EXAMPLE_EMAIL: &str = "user@example.com";

/// JSON body shown in the sample `curl` call.
pub fn example_request_body() -> String {
    json!({ "email": EXAMPLE_EMAIL }).to_string()
}

pub fn validate_endpoint(base_url: &str) -> String {
    format!("{}/validate", base_url.trim_end_matches('/'))
}

// Syntax highlighting classes for the snippet.
#[derive(Clone, Copy)]
enum Tone {
    Command,
    Flag,
    Value,
    Host,
    Plain,
}

impl Tone {
    fn class(self) -> &'static str {
        match self {
            Tone::Command | Tone::Flag => "code-blue",
            Tone::Value => "code-green",
            Tone::Host => "code-yellow",
            Tone::Plain => "code-plain",
        }
    }
}

fn snippet_lines(base_url: &str, body: &str) -> Vec<Vec<(Tone, String)>> {
    let endpoint = validate_endpoint(base_url);
    let (scheme, rest) = endpoint.split_once("://").unwrap_or(("https", endpoint.as_str()));
    let (host, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    vec![
        vec![
            (Tone::Command, "curl".into()),
            (Tone::Plain, " -X POST ".into()),
            (Tone::Value, scheme.into()),
            (Tone::Plain, "://".into()),
            (Tone::Host, host.into()),
            (Tone::Plain, format!("{} ", path)),
            (Tone::Flag, "\\".into()),
        ],
        vec![
            (Tone::Plain, "  ".into()),
            (Tone::Flag, "-H".into()),
            (Tone::Plain, " ".into()),
            (Tone::Value, "\"Authorization: Bearer $API_KEY\"".into()),
            (Tone::Plain, " ".into()),
            (Tone::Flag, "\\".into()),
        ],
        vec![
            (Tone::Plain, "  ".into()),
            (Tone::Flag, "-H".into()),
            (Tone::Plain, " ".into()),
            (Tone::Value, "\"Content-Type: application/json\"".into()),
            (Tone::Plain, " ".into()),
            (Tone::Flag, "\\".into()),
        ],
        vec![
            (Tone::Plain, "  ".into()),
            (Tone::Flag, "-d".into()),
            (Tone::Plain, " ".into()),
            (Tone::Value, format!("'{}'", body)),
        ],
    ]
}

/// Illustrative API call. Marketing copy, not a contract anything implements.
#[function_component]
pub fn CodePreview() -> Html {
    let lines = snippet_lines(config::get_api_base_url(), &example_request_body());

    html! {
        <div class="code-window">
            <style>{CODE_CSS}</style>
            <div class="code-window-controls">
                <span class="dot dot-red"></span>
                <span class="dot dot-yellow"></span>
                <span class="dot dot-green"></span>
            </div>
            <pre class="code-body">
                {
                    lines.into_iter().enumerate().map(|(i, line)| html! {
                        <>
                            if i > 0 { <br/> }
                            {
                                line.into_iter().map(|(tone, text)| html! {
                                    <span class={tone.class()}>{text}</span>
                                }).collect::<Html>()
                            }
                        </>
                    }).collect::<Html>()
                }
            </pre>
        </div>
    }
}

const CODE_CSS: &str = r#"
    .code-window {
        max-width: 48rem;
        margin: 0 auto;
        background: #0f172a;
        border: 1px solid #1e293b;
        border-radius: 12px;
        overflow: hidden;
    }
    .code-window-controls {
        display: flex;
        gap: 0.5rem;
        padding: 0.75rem 1rem;
        border-bottom: 1px solid #1e293b;
    }
    .dot {
        width: 0.75rem;
        height: 0.75rem;
        border-radius: 50%;
    }
    .dot-red { background: #ef4444; }
    .dot-yellow { background: #eab308; }
    .dot-green { background: #22c55e; }
    .code-body {
        margin: 0;
        padding: 1.5rem;
        font-family: ui-monospace, SFMono-Regular, Menlo, monospace;
        font-size: 0.875rem;
        color: #cbd5e1;
        overflow-x: auto;
    }
    .code-blue { color: #60a5fa; }
    .code-green { color: #4ade80; }
    .code-yellow { color: #facc15; }
    .code-plain { color: #fff; }
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flatten(lines: &[Vec<(Tone, String)>]) -> String {
        lines
            .iter()
            .map(|line| line.iter().map(|(_, text)| text.as_str()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn request_body_is_compact_json() {
        assert_eq!(example_request_body(), r#"{"email":"user@example.com"}"#);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        assert_eq!(validate_endpoint("https://api.trustshield.app/"), "https://api.trustshield.app/validate");
        assert_eq!(validate_endpoint("http://localhost:8080"), "http://localhost:8080/validate");
    }

    #[test]
    fn snippet_reads_as_a_curl_command() {
        let lines = snippet_lines("https://api.trustshield.app", &example_request_body());
        assert_eq!(
            flatten(&lines),
            [
                "curl -X POST https://api.trustshield.app/validate \\",
                "  -H \"Authorization: Bearer $API_KEY\" \\",
                "  -H \"Content-Type: application/json\" \\",
                "  -d '{\"email\":\"user@example.com\"}'",
            ]
            .join("\n")
        );
    }

    #[test]
    fn host_is_highlighted_separately() {
        let lines = snippet_lines("https://api.trustshield.app", "{}");
        let host = lines[0].iter().find(|(tone, _)| matches!(tone, Tone::Host));
        assert_eq!(host.map(|(_, text)| text.as_str()), Some("api.trustshield.app"));
    }
}
