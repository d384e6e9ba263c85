//! End-to-end CLI tests for opmodel

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the opmodel binary
fn opmodel() -> Command {
    cargo_bin_cmd!("opmodel")
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        opmodel()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("outline"));
    }

    #[test]
    fn shows_version() {
        opmodel()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn lists_countries_in_strip_order() {
        opmodel()
            .arg("countries")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Global\nUS\nUKI\n"))
            .stdout(predicate::str::ends_with("SM\nJapan\n"));
    }
}

// ============================================
// Outline
// ============================================

mod outline {
    use super::*;

    #[test]
    fn collapsed_outline_lists_sections_only() {
        opmodel()
            .arg("outline")
            .assert()
            .success()
            .stdout("▸ Consult Propositions\n▸ Enabling Capabilities\n▸ Channels to Market\n");
    }

    #[test]
    fn expanded_section_with_selection_and_country() {
        opmodel()
            .args([
                "outline",
                "--expand",
                "ENABLING",
                "--select",
                "growth",
                "--country",
                "japan",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("▾ Enabling Capabilities"))
            .stdout(predicate::str::contains(
                "    * Growth (Investment cases • GTM • Sales Hub • Knowledge mgmt) [Japan]",
            ))
            .stdout(predicate::str::contains("    - Methods & Tools [Japan]"));
    }

    #[test]
    fn json_lists_visible_cells() {
        opmodel()
            .args(["outline", "--json", "--expand", "CONSULT_PROPOSITIONS/SERVICE"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"id\": \"transform\""))
            .stdout(predicate::str::contains("\"subsection\": \"SERVICE\""))
            .stdout(predicate::str::contains("cloud").not());
    }

    #[test]
    fn unknown_section_fails() {
        opmodel()
            .args(["outline", "--expand", "MISSING"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown section `MISSING`"));
    }

    #[test]
    fn unknown_country_is_rejected_by_parser() {
        opmodel()
            .args(["outline", "--country", "Atlantis"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown country `Atlantis`"));
    }
}

// ============================================
// Render
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_page_to_stdout() {
        opmodel()
            .arg("render")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("Consult Operating Model Horizon 1"));
    }

    #[test]
    fn renders_fragment_without_document() {
        opmodel()
            .args(["render", "--fragment"])
            .assert()
            .success()
            .stdout(predicate::str::contains("om-widget"))
            .stdout(predicate::str::contains("<!DOCTYPE html>").not());
    }

    #[test]
    fn writes_page_with_modal_to_file() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("model.html");

        opmodel()
            .args(["render", "--expand", "ENABLING", "--select", "growth", "-o"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).expect("read output");
        assert!(html.contains(r#"data-detail="growth""#));
        assert!(html.contains("Knowledge mgmt"));
    }

    #[test]
    fn applies_config_and_catalog_files() {
        let temp = TempDir::new().expect("temp dir");
        let config = temp.path().join("widget.toml");
        std::fs::write(
            &config,
            "title = \"Pilot Model\"\n[placeholders]\nglobal_leader = \"Sam Lee\"\n",
        )
        .expect("write config");
        let catalog = temp.path().join("catalog.toml");
        std::fs::write(
            &catalog,
            r##"
[[sections]]
key = "PILOT"
name = "Pilot Section"
color = "#123456"
text_color = "#ffffff"

[[sections.items]]
id = "probe"
name = "Probe"
"##,
        )
        .expect("write catalog");

        opmodel()
            .args(["render", "--fragment", "--expand", "PILOT", "--select", "probe"])
            .arg("--config")
            .arg(&config)
            .arg("--catalog")
            .arg(&catalog)
            .assert()
            .success()
            .stdout(predicate::str::contains("Pilot Model"))
            .stdout(predicate::str::contains("Pilot Section"))
            .stdout(predicate::str::contains("Sam Lee"))
            .stdout(predicate::str::contains("Consult Propositions").not());
    }

    #[test]
    fn invalid_catalog_fails_with_context() {
        let temp = TempDir::new().expect("temp dir");
        let catalog = temp.path().join("broken.toml");
        std::fs::write(&catalog, "[[sections]]\nkey = 1\n").expect("write catalog");

        opmodel()
            .args(["render", "--catalog"])
            .arg(&catalog)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to load catalog"));
    }
}
