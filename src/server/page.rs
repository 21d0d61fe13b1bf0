//! Pure HTML builder for the landing page.
//!
//! Handlers gather a [`HomePage`] and call [`HomePage::render`]; the builder
//! performs no I/O, so the same state always produces the same view.

use crate::credentials::Credentials;
use crate::probes::DependencyStatus;
use crate::workspace::WorkspaceReport;

/// Outcome of the previous form submission, carried across the
/// redirect-after-post in query parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Flash {
    Saved,
    SaveFailed(String),
}

pub struct HomePage {
    pub workspace: WorkspaceReport,
    pub dependencies: Vec<DependencyStatus>,
    pub credentials: Credentials,
    pub flash: Option<Flash>,
}

const STYLE: &str = "\
body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #1a202c; }\n\
h1 { margin-bottom: 0.2rem; }\n\
.caption { color: #718096; margin-top: 0; }\n\
.banner { padding: 0.7rem 1rem; border-radius: 6px; margin: 0.8rem 0; }\n\
.banner.ok { background: #e6f4ea; color: #1e4620; }\n\
.banner.err { background: #fdecea; color: #611a15; }\n\
.banner.warn { background: #fef7e0; color: #66460d; }\n\
.banner.info { background: #e8f0fe; color: #174ea6; }\n\
details { margin: 1rem 0; }\n\
summary { cursor: pointer; font-weight: 600; }\n\
ul.deps { list-style: none; padding-left: 0; }\n\
form { margin: 1rem 0; }\n\
input[type=password] { width: 100%; padding: 0.5rem; margin: 0.4rem 0; }\n\
button { padding: 0.5rem 1.2rem; }\n\
.help { color: #718096; font-size: 0.85rem; }\n";

impl HomePage {
    pub fn render(&self) -> String {
        let mut body = String::new();

        body.push_str("<h1>\u{1f4ac} Chatbot</h1>\n");
        body.push_str("<p class=\"caption\">Retrieval-augmented chatbot</p>\n");

        body.push_str(&self.modules_banner());
        body.push_str(&self.diagnostics_section());
        body.push_str(&self.navigation_section());
        body.push_str("<hr>\n");
        body.push_str(
            "<p>This prototype demonstrates a complete RAG (Retrieval-Augmented Generation) \
             integration behind a secured interface. The model relies exclusively on internal \
             documents uploaded through the <em>docs manager</em> page.</p>\n",
        );
        body.push_str(&self.credential_section());

        format!(
            "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Chatbot</title>\n\
             <link rel=\"icon\" href=\"data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='0.9em' font-size='90'>&#128172;</text></svg>\">\n\
             <style>\n{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            STYLE, body
        )
    }

    fn modules_banner(&self) -> String {
        if self.workspace.modules_ok() {
            "<div class=\"banner ok\">All internal modules are present.</div>\n".to_string()
        } else {
            format!(
                "<div class=\"banner err\">The following folders are missing: {}</div>\n",
                html_escape(&self.workspace.missing_modules.join(", "))
            )
        }
    }

    fn diagnostics_section(&self) -> String {
        let mut section = String::from("<details>\n<summary>Environment diagnostics</summary>\n");
        section.push_str(&format!(
            "<p>Workspace root: <code>{}</code></p>\n",
            html_escape(&self.workspace.root)
        ));
        section.push_str(&format!(
            "<p>Contents: {}</p>\n",
            html_escape(&self.workspace.entries.join(", "))
        ));
        if let Some(mb) = self.workspace.available_space_mb {
            section.push_str(&format!("<p>Available space: {} MB</p>\n", mb));
        }

        section.push_str("<ul class=\"deps\">\n");
        for dep in &self.dependencies {
            let mark = if dep.available { "\u{2705}" } else { "\u{26a0}\u{fe0f}" };
            section.push_str(&format!(
                "<li>{} <strong>{}</strong> &mdash; {}</li>\n",
                mark,
                dep.name,
                html_escape(&dep.detail)
            ));
        }
        section.push_str("</ul>\n");

        if self.dependencies.iter().all(|dep| dep.available) {
            section.push_str("<p>\u{2705} Core dependencies available.</p>\n");
        } else {
            let failing = self
                .dependencies
                .iter()
                .filter(|dep| !dep.available)
                .map(|dep| dep.detail.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            section.push_str(&format!(
                "<div class=\"banner warn\">\u{26a0}\u{fe0f} A dependency looks missing: {}</div>\n",
                html_escape(&failing)
            ));
        }

        section.push_str("</details>\n");
        section
    }

    fn navigation_section(&self) -> String {
        "<h3>Navigation</h3>\n\
         <ol>\n\
         <li><strong>chat</strong> &mdash; Ask a question and get an answer grounded in the internal documentation.</li>\n\
         <li><strong>docs manager</strong> &mdash; Import, remove and vectorize the files used for retrieval.</li>\n\
         </ol>\n"
            .to_string()
    }

    fn credential_section(&self) -> String {
        let mut section = String::from("<h2>\u{1f510} OpenAI API key</h2>\n");

        match &self.flash {
            Some(Flash::Saved) => {
                section.push_str("<div class=\"banner ok\">\u{2705} OpenAI key saved.</div>\n");
            }
            Some(Flash::SaveFailed(message)) => {
                section.push_str(&format!(
                    "<div class=\"banner err\">Failed to save the key: {}</div>\n",
                    html_escape(message)
                ));
            }
            None => {}
        }

        section.push_str(&format!(
            "<form method=\"post\" action=\"/settings/api-key\">\n\
             <label for=\"api_key\">Enter your OpenAI key (sk-...)</label>\n\
             <input type=\"password\" id=\"api_key\" name=\"api_key\" value=\"{}\" placeholder=\"sk-...\">\n\
             <p class=\"help\">The key is stored locally in a .env file.</p>\n\
             <button type=\"submit\">Save</button>\n\
             </form>\n",
            html_escape(&self.credentials.openai_api_key)
        ));

        if self.credentials.is_configured() {
            section
                .push_str("<div class=\"banner info\">An OpenAI key is currently configured.</div>\n");
        } else {
            section.push_str(
                "<div class=\"banner warn\">No API key found. Enter your key to enable the model.</div>\n",
            );
        }

        section
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(missing: Vec<&str>) -> WorkspaceReport {
        WorkspaceReport {
            root: "/tmp/lexora".to_string(),
            entries: vec!["llm".to_string(), "storage".to_string()],
            missing_modules: missing.into_iter().map(String::from).collect(),
            available_space_mb: Some(1024),
            generated_at: "2026-01-01T00:00:00+00:00".to_string(),
        }
    }

    fn dependency(name: &'static str, available: bool, detail: &str) -> DependencyStatus {
        DependencyStatus {
            name,
            available,
            detail: detail.to_string(),
        }
    }

    fn page(missing: Vec<&str>, key: &str, flash: Option<Flash>) -> HomePage {
        HomePage {
            workspace: report(missing),
            dependencies: vec![dependency("openai-api", !key.is_empty(), "probe detail")],
            credentials: Credentials {
                openai_api_key: key.to_string(),
            },
            flash,
        }
    }

    #[test]
    fn success_banner_when_all_modules_present() {
        let html = page(vec![], "sk-x", None).render();

        assert!(html.contains("All internal modules are present."));
        assert!(!html.contains("folders are missing"));
    }

    #[test]
    fn missing_modules_are_listed_in_the_error_banner() {
        let html = page(vec!["ingestion", "storage"], "sk-x", None).render();

        assert!(html.contains("The following folders are missing: ingestion, storage"));
    }

    #[test]
    fn warning_state_when_no_key_is_configured() {
        let html = page(vec![], "", None).render();

        assert!(html.contains("No API key found."));
        assert!(!html.contains("currently configured"));
    }

    #[test]
    fn info_state_and_prefilled_input_when_key_is_configured() {
        let html = page(vec![], "sk-test123", None).render();

        assert!(html.contains("An OpenAI key is currently configured."));
        assert!(html.contains("value=\"sk-test123\""));
    }

    #[test]
    fn saved_flash_renders_a_success_banner() {
        let html = page(vec![], "sk-x", Some(Flash::Saved)).render();

        assert!(html.contains("OpenAI key saved."));
    }

    #[test]
    fn error_flash_is_escaped() {
        let flash = Flash::SaveFailed("denied <script>".to_string());
        let html = page(vec![], "sk-x", Some(flash)).render();

        assert!(html.contains("Failed to save the key: denied &lt;script&gt;"));
        assert!(!html.contains("denied <script>"));
    }

    #[test]
    fn unavailable_dependency_is_surfaced_as_warning() {
        let mut home = page(vec![], "sk-x", None);
        home.dependencies = vec![dependency("vector-store", false, "storage/ is missing")];

        let html = home.render();

        assert!(html.contains("A dependency looks missing: storage/ is missing"));
        assert!(!html.contains("Core dependencies available."));
    }

    #[test]
    fn key_value_is_escaped_in_the_form() {
        let html = page(vec![], "sk-\"quote", None).render();

        assert!(html.contains("value=\"sk-&quot;quote\""));
    }
}
