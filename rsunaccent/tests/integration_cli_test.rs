use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use rsunaccent::Mode;
use unaccent::SpecialCaseMapper;

fn mappings_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/mappings/extra-latin.csv")
}

fn unaccent(args: &[&str], stdin: Option<&[u8]>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_unaccent"))
        .args(args)
        .env("NO_COLOR", "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn unaccent");
    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(bytes) = stdin {
            pipe.write_all(bytes).expect("Failed to write stdin");
        }
    }
    child.wait_with_output().expect("Failed to wait for unaccent")
}

#[test]
fn test_bundled_mapping_file() {
    let mapper = SpecialCaseMapper::from_csv_file(mappings_path())
        .expect("Failed to load bundled mappings");
    assert_eq!(mapper.apply("Łódź"), "Lodz");
    assert_eq!(mapper.apply("Ħamrun"), "Hamrun");
    assert_eq!(mapper.apply("Straße"), "Strasse");
    assert_eq!(Mode::Strip.apply("Łódź", &mapper), "Łodz");
}

#[test]
fn test_strip_arguments() {
    let output = unaccent(&["strip", "résumé", "Mötley Crüe"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "resume\nMotley Crue\n");
}

#[test]
fn test_enhanced_stdin_keeps_lines() {
    let output = unaccent(&["enhanced"], Some("Straße\nFrançois et Œdipe\n".as_bytes()));
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Strasse\nFrancois et OEdipe\n"
    );
}

#[test]
fn test_enhanced_with_mappings() {
    let path = mappings_path();
    let path = path.to_str().expect("manifest path is UTF-8");
    let output = unaccent(&["enhanced", "--mappings", path, "Łódź"], None);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Lodz\n");
}

#[test]
fn test_enhanced_words() {
    let output = unaccent(&["enhanced", "--words", "Straße und Søren, Straße"], None);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Straße -> Strasse\nSøren -> Soren\n"
    );
}

#[test]
fn test_check_exit_status() {
    let accented = unaccent(&["check", "café"], None);
    assert_eq!(accented.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&accented.stdout), "true\n");

    let plain = unaccent(&["check", "cafe"], None);
    assert!(plain.status.success());
    assert_eq!(String::from_utf8_lossy(&plain.stdout), "false\n");
}

#[test]
fn test_check_words_from_stdin() {
    let output = unaccent(&["check", "--words"], Some("Hello wörld\nCafé naïve\n".as_bytes()));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "wörld\nCafé\nnaïve\n");
}

#[test]
fn test_invalid_utf8_rejected() {
    let output = unaccent(&["strip"], Some(b"caf\xc3"));
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not valid UTF-8"));
}

#[test]
fn test_table_lists_entries() {
    let output = unaccent(&["table"], None);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("U+00DF"));
    assert!(stdout.contains("17 entries"));
}
